use rustc_hash::FxHashMap;
use serde_json::Value;

use super::rule_entry::RuleEntry;
use crate::error::{CoreError, CoreResult};
use crate::normalizer::canonicalize;

/// 字典查找结果
/// 区分"未知标识"与"已知标识但无编制说明"，两者对调用方均为静默跳过
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoteLookup<'a> {
    Unknown,
    NoNote,
    Note(&'a str),
}

impl<'a> NoteLookup<'a> {
    #[inline]
    pub fn note(self) -> Option<&'a str> {
        match self {
            NoteLookup::Note(n) => Some(n),
            NoteLookup::Unknown | NoteLookup::NoNote => None,
        }
    }
}

/// 规则字典：规范键 → 规则条目
/// 每次收集调用由调用方显式传入，内核不持有全局实例
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulesDictionary {
    entries: FxHashMap<String, RuleEntry>,
}

impl RulesDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// 插入条目，entry.key 为显示名称，插入时规范化；同键条目按字段合并
    pub fn insert(&mut self, mut entry: RuleEntry) {
        entry.key = canonicalize(&entry.key);
        self.insert_canonical(entry);
    }

    /// 插入键已规范化的条目（来自其他字典或缓存）
    /// 规范化不幂等（"Hatred {}" → "hatred " → "hatred"），此处不得再次规范化
    pub fn insert_canonical(&mut self, entry: RuleEntry) {
        match self.entries.get_mut(&entry.key) {
            Some(existing) => {
                log::debug!("[RULES] 合并同键条目: {}", entry.key);
                existing.merge_from(entry);
            }
            None => {
                self.entries.insert(entry.key.clone(), entry);
            }
        }
    }

    /// 便捷构造：键 + 可选编制说明
    pub fn insert_note(&mut self, key: &str, note: Option<&str>) {
        let mut entry = RuleEntry::new(key);
        entry.composition_note = note.map(str::to_string);
        self.insert(entry);
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&RuleEntry> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 按规范键查找编制说明（调用方负责规范化）
    #[inline]
    pub fn lookup(&self, key: &str) -> NoteLookup<'_> {
        match self.entries.get(key) {
            None => NoteLookup::Unknown,
            Some(entry) => match entry.note() {
                Some(note) => NoteLookup::Note(note),
                None => NoteLookup::NoNote,
            },
        }
    }

    #[inline]
    pub fn note_for(&self, key: &str) -> Option<&str> {
        self.lookup(key).note()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RuleEntry)> {
        self.entries.iter()
    }

    pub fn entries(&self) -> impl Iterator<Item = &RuleEntry> {
        self.entries.values()
    }

    /// 含编制说明的条目数
    pub fn note_count(&self) -> usize {
        self.entries.values().filter(|e| e.note().is_some()).count()
    }

    /// 合并另一字典：同键按字段覆盖，新键直接插入
    pub fn merge(&mut self, other: RulesDictionary) {
        for (_, entry) in other.entries {
            self.insert_canonical(entry);
        }
    }

    /// 同义词登记：alias 指向 target 的条目副本（两者均为规范键，调用方负责规范化）
    /// alias 已存在或 target 不存在时不做修改，返回 false
    pub fn alias(&mut self, alias: &str, target: &str) -> bool {
        if alias.is_empty() || self.entries.contains_key(alias) {
            return false;
        }
        let Some(target_entry) = self.entries.get(target) else {
            return false;
        };
        let mut aliased = target_entry.clone();
        aliased.key = alias.to_string();
        self.entries.insert(aliased.key.clone(), aliased);
        true
    }

    /// 解析导出的规则映射 JSON：`{ "<显示名>": { url, fullUrl, compositionNote, stats } }`
    pub fn from_rules_map(value: &Value) -> CoreResult<Self> {
        let Value::Object(map) = value else {
            return Err(CoreError::InvalidRulesMap(format!(
                "根节点必须为JSON对象，实际为 {}",
                json_type_name(value)
            )));
        };

        let mut dict = Self::with_capacity(map.len());
        for (display_name, raw_entry) in map {
            if !raw_entry.is_object() {
                return Err(CoreError::InvalidRuleEntry {
                    key: display_name.clone(),
                    reason: format!("条目必须为JSON对象，实际为 {}", json_type_name(raw_entry)),
                });
            }
            let mut entry: RuleEntry = serde_json::from_value(raw_entry.clone())?;
            entry.key = display_name.clone();
            dict.insert(entry);
        }
        Ok(dict)
    }
}

impl FromIterator<RuleEntry> for RulesDictionary {
    fn from_iter<I: IntoIterator<Item = RuleEntry>>(iter: I) -> Self {
        let mut dict = Self::new();
        for entry in iter {
            dict.insert(entry);
        }
        dict
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
