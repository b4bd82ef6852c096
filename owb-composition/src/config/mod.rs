//! 配置模块
pub mod rule;

pub use rule::{CustomConfigBuilder, RuleOptions, RuleOrigin, RulesConfig};
