//! owb-composition-engine 内核错误定义
//! 内核层仅规则字典构建可能失败，笔记收集本身为全函数，不返回错误
use thiserror::Error;

/// 内核核心错误枚举
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================== 规则字典相关错误 =====================
    /// 规则映射根节点格式非法（期望JSON对象）
    #[error("规则映射格式非法：{0}")]
    InvalidRulesMap(String),

    /// 单条规则条目格式非法
    #[error("规则条目[{key}]格式非法：{reason}")]
    InvalidRuleEntry { key: String, reason: String },

    /// JSON反序列化失败
    #[error("规则条目反序列化失败：{0}")]
    JsonError(#[from] serde_json::Error),
}

/// 内核层全局Result类型别名
pub type CoreResult<T> = Result<T, CoreError>;
