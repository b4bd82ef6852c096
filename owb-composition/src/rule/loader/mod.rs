//! 规则加载模块
//! 统一导出规则加载相关组件
pub mod rule_loader;
pub mod rule_processor;

pub use rule_loader::RuleLoader;
pub use rule_processor::{RawRuleSources, RuleProcessor};
