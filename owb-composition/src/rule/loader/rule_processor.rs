use log::{debug, info};
use owb_composition_engine::RulesDictionary;

use crate::error::CompResult;
use crate::rule::source::{RuleSourceParser, RulesMapParser, SynonymParser};

/// 已读取的原始源内容
#[derive(Debug, Default)]
pub struct RawRuleSources {
    pub index: Vec<u8>,
    pub supplemental: Option<Vec<u8>>,
    pub synonyms: Option<Vec<u8>>,
}

/// 规则处理器：解析 → 合并补充表 → 登记同义词
#[derive(Debug, Default)]
pub struct RuleProcessor;

impl RuleProcessor {
    pub fn build_dictionary(&self, sources: &RawRuleSources) -> CompResult<RulesDictionary> {
        let mut dict = RulesMapParser::index().parse_from_bytes(&sources.index)?;
        info!("[Stage 1] 规则索引解析完成 | 条目数: {}", dict.len());

        if let Some(bytes) = &sources.supplemental {
            let supplemental = RulesMapParser::supplemental().parse_from_bytes(bytes)?;
            let before = dict.len();
            let supplemental_len = supplemental.len();
            dict.merge(supplemental);
            info!(
                "[Stage 2] 补充表合并完成 | 补充条目: {} | 新增: {} | 合计: {}",
                supplemental_len,
                dict.len() - before,
                dict.len()
            );
        }

        if let Some(bytes) = &sources.synonyms {
            let synonyms = SynonymParser.parse_from_bytes(bytes)?;
            let applied = synonyms.apply_to(&mut dict);
            info!(
                "[Stage 3] 同义词登记完成 | 同义词: {} | 生效: {}",
                synonyms.len(),
                applied
            );
        }

        debug!("规则字典构建完成 | 条目数: {} | 含编制说明: {}", dict.len(), dict.note_count());
        Ok(dict)
    }
}
