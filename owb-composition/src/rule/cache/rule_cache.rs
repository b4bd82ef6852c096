use owb_composition_engine::{RuleEntry, RulesDictionary};
use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::config::RulesConfig;
use crate::error::{CompResult, CompositionError};

/// 规则缓存管理器
/// 缓存内容：合并（索引 + 补充表 + 同义词）后的字典，按键排序的 RuleEntry 数组
pub struct RuleCacheManager;

impl RuleCacheManager {
    // 同步加载缓存
    pub fn load_from_cache(config: &RulesConfig) -> CompResult<RulesDictionary> {
        let cache_data: Vec<u8> = fs::read(config.get_cache_file_path())?;
        Self::decode(&cache_data)
    }

    // 同步保存缓存
    pub fn save_to_cache(config: &RulesConfig, dict: &RulesDictionary) -> CompResult<()> {
        let cache_path = config.get_cache_file_path();
        if let Some(dir) = cache_path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&cache_path, Self::encode(dict)?)?;
        Ok(())
    }

    /// 缓存存在且不早于任一源文件
    pub fn is_fresh(config: &RulesConfig) -> bool {
        let Some(cache_time) = modified_time(&config.get_cache_file_path()) else {
            return false;
        };
        config
            .source_files()
            .into_iter()
            .all(|source| matches!(modified_time(source), Some(t) if t <= cache_time))
    }

    // 公共逻辑：缓存数据 → 字典
    pub(crate) fn decode(cache_data: &[u8]) -> CompResult<RulesDictionary> {
        let entries: Vec<RuleEntry> = serde_json::from_slice(cache_data)
            .map_err(|e| CompositionError::RuleCacheError(format!("缓存反序列化失败: {}", e)))?;
        // 缓存中的键已规范化，原样插入
        let mut dict = RulesDictionary::with_capacity(entries.len());
        for entry in entries {
            dict.insert_canonical(entry);
        }
        Ok(dict)
    }

    // 公共逻辑：字典 → 缓存数据
    pub(crate) fn encode(dict: &RulesDictionary) -> CompResult<Vec<u8>> {
        let mut entries: Vec<&RuleEntry> = dict.entries().collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(serde_json::to_vec(&entries)?)
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}
