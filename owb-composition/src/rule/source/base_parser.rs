//! 通用规则源解析器 Trait

use crate::error::{CompResult, CompositionError};

// 规则文件类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFileType {
    RulesIndex,   // 导出的规则索引
    Supplemental, // 手工维护的补充表
    Synonyms,     // 同义词表
}

impl RuleFileType {
    pub fn to_str(&self) -> &str {
        match self {
            RuleFileType::RulesIndex => "rules_index",
            RuleFileType::Supplemental => "supplemental",
            RuleFileType::Synonyms => "synonyms",
        }
    }
}

// 泛型解析器特质
pub trait RuleSourceParser<O>: std::fmt::Debug + Send + Sync {
    fn rule_file_type(&self) -> RuleFileType;

    fn parse_from_value(&self, value: &serde_json::Value) -> CompResult<O>;

    fn parse_from_str(&self, content: &str) -> CompResult<O> {
        let value: serde_json::Value = serde_json::from_str(content).map_err(|e| {
            CompositionError::RuleParseError(format!("[{}] JSON解析失败: {}", self.rule_file_type().to_str(), e))
        })?;
        self.parse_from_value(&value)
    }

    fn parse_from_bytes(&self, bytes: &[u8]) -> CompResult<O> {
        let value: serde_json::Value = serde_json::from_slice(bytes).map_err(|e| {
            CompositionError::RuleParseError(format!("[{}] 字节流解析失败: {}", self.rule_file_type().to_str(), e))
        })?;
        self.parse_from_value(&value)
    }
}
