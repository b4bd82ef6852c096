use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 规则字典条目
/// 由外部规则数据层加载，收集过程中只读
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuleEntry {
    /// 规范键（小写、去空白、去花括号），字典内唯一
    #[serde(default)]
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,
    /// 编制限制说明，缺失表示该条目无限制
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition_note: Option<String>,
    /// 属性表，原样透传
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Value>,
}

impl RuleEntry {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.composition_note = Some(note.into());
        self
    }

    pub fn with_full_url(mut self, full_url: impl Into<String>) -> Self {
        self.full_url = Some(full_url.into());
        self
    }

    /// 非空编制说明
    #[inline]
    pub fn note(&self) -> Option<&str> {
        self.composition_note.as_deref().filter(|n| !n.is_empty())
    }

    /// 字段级合并：other 中存在的字段覆盖当前值，缺失字段保留原值
    pub fn merge_from(&mut self, other: RuleEntry) {
        if other.url.is_some() {
            self.url = other.url;
        }
        if other.full_url.is_some() {
            self.full_url = other.full_url;
        }
        if other.composition_note.is_some() {
            self.composition_note = other.composition_note;
        }
        if other.stats.is_some() {
            self.stats = other.stats;
        }
    }
}
