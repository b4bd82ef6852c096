//! 规则缓存模块
pub mod rule_cache;

pub use rule_cache::RuleCacheManager;
