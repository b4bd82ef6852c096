//! 全局错误类型定义
use owb_composition_engine::CoreError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompositionError {
    // 规则相关错误
    #[error("规则加载失败：{0}")]
    RuleLoadError(String),
    #[error("规则缓存失败：{0}")]
    RuleCacheError(String),
    #[error("规则解析失败：{0}")]
    RuleParseError(String),

    // 军表相关错误
    #[error("军表解析失败：{0}")]
    ArmyParseError(String),

    // 内核错误
    #[error(transparent)]
    CoreError(#[from] CoreError),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("输入参数无效：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type CompResult<T> = Result<T, CompositionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CompositionError::RuleLoadError("rules-map.json".to_string()).to_string(),
            "规则加载失败：rules-map.json"
        );
        // 内核错误透传
        let core = CoreError::InvalidRulesMap("根节点必须为JSON对象，实际为 array".to_string());
        assert_eq!(
            CompositionError::from(core).to_string(),
            "规则映射格式非法：根节点必须为JSON对象，实际为 array"
        );
    }
}
