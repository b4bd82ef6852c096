mod dictionary;
mod note_set;
mod rule_entry;

// 导出常用项
pub use dictionary::{NoteLookup, RulesDictionary};
pub(crate) use dictionary::json_type_name;
pub use note_set::CompositionNoteSet;
pub use rule_entry::RuleEntry;
