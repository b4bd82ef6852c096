//! 规则源解析模块
//! 统一导出通用解析器 Trait 和各源解析器

pub mod base_parser;
pub mod rules_map;
pub mod synonyms;

pub use base_parser::{RuleFileType, RuleSourceParser};
pub use rules_map::RulesMapParser;
pub use synonyms::{SynonymParser, SynonymTable};
