//! 军表模型
//! 持久化层保存的军表记录为宽松 JSON，这里只读取收集说明所需的部分

use serde::Serialize;
use serde_json::Value;

use crate::error::{CompResult, CompositionError};

/// 单位分类字段，按展示顺序排列
pub const UNIT_CATEGORIES: [&str; 8] = [
    "characters",
    "lords",
    "heroes",
    "core",
    "special",
    "rare",
    "mercenaries",
    "allies",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArmyList {
    pub id: Option<String>,
    pub name: Option<String>,
    pub army: Option<String>,
    pub points: Option<u64>,
    /// 全部单位，按分类顺序拼接
    #[serde(skip)]
    units: Vec<Value>,
}

impl ArmyList {
    pub fn from_value(value: &Value) -> CompResult<Self> {
        let Value::Object(fields) = value else {
            return Err(CompositionError::ArmyParseError(
                "军表根节点必须为JSON对象".to_string(),
            ));
        };

        let text = |key: &str| match fields.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        let units = UNIT_CATEGORIES
            .iter()
            .filter_map(|category| match fields.get(*category) {
                Some(Value::Array(units)) => Some(units.iter().cloned()),
                _ => None,
            })
            .flatten()
            .collect();

        Ok(Self {
            id: text("id"),
            name: text("name"),
            army: text("army"),
            points: fields.get("points").and_then(Value::as_u64),
            units,
        })
    }

    pub fn from_json_str(content: &str) -> CompResult<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }

    pub fn from_json_slice(bytes: &[u8]) -> CompResult<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(&value)
    }

    /// 全部单位（JSON 数组），供批量收集接口使用
    pub fn units(&self) -> Value {
        Value::Array(self.units.clone())
    }

    pub fn unit_slice(&self) -> &[Value] {
        &self.units
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// 日志/展示用名称
    pub fn label(&self) -> &str {
        self.name.as_deref().or(self.id.as_deref()).unwrap_or("<untitled>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_gathers_categories_in_order() {
        let list = ArmyList::from_value(&json!({
            "id": "abc",
            "name": "Ulthuan Host",
            "army": "high-elf-realms",
            "points": 2000,
            "rare": [{ "name": "Repeater Bolt Thrower" }],
            "characters": [{ "name": "High Elf Prince" }],
            "core": [{ "name": "Spearmen" }],
            "special": "broken"
        }))
        .unwrap();

        assert_eq!(list.label(), "Ulthuan Host");
        assert_eq!(list.points, Some(2000));
        assert_eq!(list.unit_count(), 3);
        assert_eq!(list.unit_slice()[0]["name"], "High Elf Prince");
        assert_eq!(list.unit_slice()[2]["name"], "Repeater Bolt Thrower");
        assert!(list.units().is_array());
    }

    #[test]
    fn test_lenient_metadata() {
        let list = ArmyList::from_json_str(r#"{ "id": 42, "name": "", "points": "lots" }"#).unwrap();
        assert_eq!(list.id.as_deref(), Some("42"));
        assert_eq!(list.name, None);
        assert_eq!(list.points, None);
        assert_eq!(list.label(), "42");
        assert_eq!(list.unit_count(), 0);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            ArmyList::from_json_slice(b"[]"),
            Err(CompositionError::ArmyParseError(_))
        ));
        assert!(matches!(
            ArmyList::from_json_str("not json"),
            Err(CompositionError::JsonError(_))
        ));
    }
}
