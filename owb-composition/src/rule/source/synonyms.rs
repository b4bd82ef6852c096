//! 同义词表：替代拼写 → 规则字典中的规范名称
//! 格式：`{ "<别名>": "<规范名称>" }`

use owb_composition_engine::{canonicalize, RulesDictionary};
use rustc_hash::FxHashMap;
use serde_json::Value;

use super::base_parser::{RuleFileType, RuleSourceParser};
use crate::error::{CompResult, CompositionError};

/// 别名规范键 → 目标规范键
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynonymTable {
    aliases: FxHashMap<String, String>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, alias: &str, target: &str) {
        let alias = canonicalize(alias);
        let target = canonicalize(target);
        if alias.is_empty() || target.is_empty() || alias == target {
            return;
        }
        self.aliases.insert(alias, target);
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// 沿别名链查找字典中已存在的目标键（A → B → C）
    /// 链断开或成环时返回 None
    fn resolve_target<'a>(&'a self, target: &'a str, dict: &RulesDictionary) -> Option<&'a str> {
        let mut current = target;
        for _ in 0..=self.aliases.len() {
            if dict.contains_key(current) {
                return Some(current);
            }
            current = self.aliases.get(current).map(String::as_str)?;
        }
        None
    }

    /// 将别名登记进字典，返回新增别名数
    /// 按别名排序处理，结果与哈希顺序无关
    /// 目标缺失的别名记录 warn 后跳过；已存在的键不覆盖
    pub fn apply_to(&self, dict: &mut RulesDictionary) -> usize {
        let mut aliases: Vec<(&String, &String)> = self.aliases.iter().collect();
        aliases.sort_unstable();

        let mut applied = 0;
        for (alias, target) in aliases {
            let Some(resolved) = self.resolve_target(target, dict) else {
                log::warn!("[synonyms] 别名 [{}] 的目标 [{}] 不在规则字典中，已跳过", alias, target);
                continue;
            };
            if dict.alias(alias, resolved) {
                applied += 1;
            }
        }
        applied
    }
}

#[derive(Debug, Clone, Default)]
pub struct SynonymParser;

impl RuleSourceParser<SynonymTable> for SynonymParser {
    fn rule_file_type(&self) -> RuleFileType {
        RuleFileType::Synonyms
    }

    fn parse_from_value(&self, value: &Value) -> CompResult<SynonymTable> {
        let Value::Object(map) = value else {
            return Err(CompositionError::RuleParseError(
                "[synonyms] 根节点必须为JSON对象".to_string(),
            ));
        };

        let mut table = SynonymTable::new();
        for (alias, target) in map {
            match target {
                Value::String(target) => table.insert(alias, target),
                other => log::warn!("[synonyms] 别名 [{}] 的目标不是字符串: {}", alias, other),
            }
        }
        Ok(table)
    }
}
