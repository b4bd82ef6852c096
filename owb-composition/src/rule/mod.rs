//! 规则模块：负责规则数据的解析、合并、缓存与加载
pub mod cache;
pub mod loader;
pub mod source;

// 统一导出核心公共接口
pub use cache::RuleCacheManager;
pub use loader::{RuleLoader, RuleProcessor};
pub use source::{RuleFileType, RuleSourceParser, RulesMapParser, SynonymParser, SynonymTable};
