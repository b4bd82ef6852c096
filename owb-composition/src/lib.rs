//! owb-composition - 军表编制说明收集
//! 规则数据加载合并 + 军表模型 + 收集门面，核心算法见 owb-composition-engine

pub mod army;
pub mod collector;
pub mod config;
pub mod error;
#[cfg(feature = "tracing")]
pub mod logging;
pub mod rule;

// 导出全局错误类型
pub use self::error::{CompResult, CompositionError};

// 导出配置模块核心结构体与构建器
pub use crate::config::{CustomConfigBuilder, RuleOptions, RuleOrigin, RulesConfig};

// 导出规则模块核心接口
pub use crate::rule::{RuleCacheManager, RuleLoader, SynonymTable};

// 导出军表与收集门面
pub use crate::army::ArmyList;
pub use crate::collector::{NoteCollector, NoteFormat};

#[cfg(feature = "tracing")]
pub use crate::logging::install_log_tracer;

// 内核类型再导出，调用方无需直接依赖内核 crate
pub use owb_composition_engine::{
    canonicalize, collect_all_army_notes, collect_army_notes, collect_unit_notes,
    format_notes_for_display, format_notes_for_print, resolve_name, ArmyNotes,
    CompositionNoteSet, RuleEntry, RulesDictionary, UnitKey, UnitNotes,
};
