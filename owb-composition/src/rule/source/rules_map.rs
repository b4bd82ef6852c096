//! 规则索引 / 补充表解析
//! 两者格式一致：`{ "<显示名>": { url, fullUrl, compositionNote, stats } }`

use owb_composition_engine::RulesDictionary;
use serde_json::Value;

use super::base_parser::{RuleFileType, RuleSourceParser};
use crate::error::CompResult;

#[derive(Debug, Clone)]
pub struct RulesMapParser {
    file_type: RuleFileType,
}

impl RulesMapParser {
    /// 规则索引解析器
    pub fn index() -> Self {
        Self {
            file_type: RuleFileType::RulesIndex,
        }
    }

    /// 补充表解析器
    pub fn supplemental() -> Self {
        Self {
            file_type: RuleFileType::Supplemental,
        }
    }
}

impl Default for RulesMapParser {
    fn default() -> Self {
        Self::index()
    }
}

impl RuleSourceParser<RulesDictionary> for RulesMapParser {
    fn rule_file_type(&self) -> RuleFileType {
        self.file_type
    }

    fn parse_from_value(&self, value: &Value) -> CompResult<RulesDictionary> {
        let dict = RulesDictionary::from_rules_map(value)?;
        log::debug!(
            "[{}] 解析完成 | 条目数: {} | 含编制说明: {}",
            self.file_type.to_str(),
            dict.len(),
            dict.note_count()
        );
        Ok(dict)
    }
}
