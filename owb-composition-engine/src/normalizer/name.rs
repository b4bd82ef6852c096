use serde_json::{Map, Value};

/// 名称字段优先级：多语言字段在前，普通 `name` 兜底
pub const NAME_FIELD_PRIORITY: [&str; 7] = [
    "name_en", "name_cn", "name_de", "name_es", "name_fr", "name_it", "name",
];

/// 条目的输入形态（封闭集合），所有形态判断集中于此
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NameShape<'a> {
    /// 纯文本
    Text(&'a str),
    /// 携带名称字段的对象
    Named(&'a Map<String, Value>),
    /// 缺失/空值/无法识别的形态
    Absent,
}

impl<'a> NameShape<'a> {
    #[inline]
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::String(s) if !s.is_empty() => NameShape::Text(s),
            Value::Object(map) => NameShape::Named(map),
            _ => NameShape::Absent,
        }
    }

    /// 解析出名称文本；纯文本原样返回（保留首尾空白）
    pub fn resolve(self) -> Option<&'a str> {
        match self {
            NameShape::Text(s) => Some(s),
            NameShape::Named(map) => NAME_FIELD_PRIORITY.iter().find_map(|field| {
                match map.get(*field) {
                    Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
                    _ => None,
                }
            }),
            NameShape::Absent => None,
        }
    }
}

/// 解析任意条目的名称文本，无法解析返回 None（调用方直接跳过）
#[inline]
pub fn resolve_name(item: &Value) -> Option<&str> {
    NameShape::of(item).resolve()
}
