//! 军表模块
pub mod list;

pub use list::{ArmyList, UNIT_CATEGORIES};
