//! 收集门面 + 渲染格式
pub mod note_collector;
pub mod render;

pub use note_collector::NoteCollector;
pub use render::NoteFormat;
