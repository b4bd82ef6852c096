//! 日志辅助工具
pub mod log_format;

pub use log_format::{compress_note_list, preview_compact};
