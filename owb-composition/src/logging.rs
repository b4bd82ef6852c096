//! 日志桥接（tracing 特性）
//! 库内统一使用 log 门面，这里将 log 记录转发到 tracing 订阅者

use once_cell::sync::OnceCell;

static LOG_TRACER: OnceCell<()> = OnceCell::new();

/// 安装 log → tracing 桥接，重复调用只生效一次
/// 若进程内已存在其他 log 实现，返回错误
pub fn install_log_tracer() -> crate::error::CompResult<()> {
    LOG_TRACER
        .get_or_try_init(|| {
            tracing_log::LogTracer::init().map_err(|e| {
                crate::error::CompositionError::InvalidInput(format!("LogTracer 安装失败: {}", e))
            })
        })
        .map(|_| ())
}
