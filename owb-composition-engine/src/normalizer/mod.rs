//! 名称规范化：条目形态识别 + 名称解析 + 规范键生成
mod canonical;
mod name;

pub use canonical::{canonicalize, split_composite};
pub use name::{resolve_name, NameShape, NAME_FIELD_PRIORITY};
