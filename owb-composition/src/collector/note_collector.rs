//! 编制说明收集门面
//! 持有共享的规则字典，把内核收集接口与军表模型衔接起来

use owb_composition_engine::utils::compress_note_list;
use owb_composition_engine::{
    collect_all_army_notes, collect_army_notes, collect_lists_notes, collect_unit_note_list,
    format_notes_for_display, ArmyNotes, RulesDictionary,
};
use serde_json::Value;
use std::sync::Arc;

use crate::army::ArmyList;
use crate::config::RulesConfig;
use crate::error::CompResult;
use crate::rule::RuleLoader;

use super::render::NoteFormat;

/// 收集器：Clone 廉价（共享字典），可跨线程使用
#[derive(Debug, Clone)]
pub struct NoteCollector {
    dict: Arc<RulesDictionary>,
}

impl NoteCollector {
    pub fn new(dict: RulesDictionary) -> Self {
        Self::with_shared(Arc::new(dict))
    }

    pub fn with_shared(dict: Arc<RulesDictionary>) -> Self {
        Self { dict }
    }

    /// 按配置加载规则字典后创建收集器
    pub fn from_config(config: &RulesConfig) -> CompResult<Self> {
        let dict = RuleLoader::new().load(config)?;
        log::info!("NoteCollector initialized | rule entries: {}", dict.len());
        Ok(Self::new(dict))
    }

    #[cfg(feature = "async-io")]
    pub async fn from_config_async(config: &RulesConfig) -> CompResult<Self> {
        let dict = RuleLoader::new().load_async(config).await?;
        log::info!("NoteCollector initialized | rule entries: {}", dict.len());
        Ok(Self::new(dict))
    }

    pub fn dictionary(&self) -> &RulesDictionary {
        &self.dict
    }

    pub fn shared_dictionary(&self) -> Arc<RulesDictionary> {
        Arc::clone(&self.dict)
    }

    /// 单个单位的说明（插入顺序）
    pub fn unit_notes(&self, unit: &Value) -> Vec<String> {
        collect_unit_note_list(unit, &self.dict)
    }

    /// 单个单位的展示片段，无说明时为空字符串
    pub fn unit_fragment(&self, unit: &Value) -> String {
        let notes = self.unit_notes(unit);
        format_notes_for_display(Some(notes.as_slice()))
    }

    /// 军表内每个单位的说明（空单位不出现）
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(list = list.label())))]
    pub fn army_notes(&self, list: &ArmyList) -> ArmyNotes {
        let notes = collect_army_notes(&list.units(), &self.dict);
        log::debug!(
            "[{}] 单位数: {} | 含说明单位数: {}",
            list.label(),
            list.unit_count(),
            notes.len()
        );
        notes
    }

    /// 军表汇总（字典序）
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(list = list.label())))]
    pub fn army_summary(&self, list: &ArmyList) -> Vec<String> {
        let summary = collect_all_army_notes(&list.units(), &self.dict);
        log::debug!("[{}] 汇总: {}", list.label(), compress_note_list(summary.as_slice()));
        summary
    }

    /// 多份军表汇总（字典序）
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(lists = lists.len())))]
    pub fn lists_summary(&self, lists: &[ArmyList]) -> Vec<String> {
        let unit_sequences: Vec<Value> = lists.iter().map(ArmyList::units).collect();
        let refs: Vec<&Value> = unit_sequences.iter().collect();
        collect_lists_notes(&refs, &self.dict)
    }

    /// 按指定格式渲染说明列表
    pub fn render(&self, notes: &[String], format: NoteFormat) -> CompResult<String> {
        format.render(notes)
    }
}
