// 核心公共结构体：规则条目 / 规则字典 / 说明集合
pub mod core;
// 名称解析 + 规范键
pub mod normalizer;
// 编制说明收集 + 聚合 + 格式化
pub mod collector;
// 内核错误
pub mod error;
// 日志辅助
pub mod utils;

// 顶层导出常用类型
pub use crate::core::{CompositionNoteSet, NoteLookup, RuleEntry, RulesDictionary};
pub use collector::{
    collect_all_army_notes, collect_army_notes, collect_lists_notes, collect_unit_note_list,
    collect_unit_notes, format_notes_for_display, format_notes_for_print, ArmyNotes, UnitKey,
    UnitNotes,
};
pub use error::{CoreError, CoreResult};
pub use normalizer::{canonicalize, resolve_name, split_composite, NameShape};
