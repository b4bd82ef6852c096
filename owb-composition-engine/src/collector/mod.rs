//! 编制说明收集：单位级收集、全军聚合、展示格式化
mod army_notes;
mod formatter;
mod unit_notes;

pub use army_notes::{
    collect_all_army_notes, collect_army_notes, collect_lists_notes, ArmyNotes, UnitKey, UnitNotes,
};
pub use formatter::{format_notes_for_display, format_notes_for_print, NOTES_HEADING, NOTES_SEPARATOR};
pub use unit_notes::{collect_unit_note_list, collect_unit_notes};
