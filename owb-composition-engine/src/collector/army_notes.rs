//! 整支军队 / 多份军表的编制说明聚合
//! - collect_army_notes：按单位标识输出每个单位的说明 + 渲染片段，空单位不出现在结果中
//! - collect_all_army_notes：全军并集，字典序排序（汇总视图）

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use super::formatter::format_notes_for_display;
use super::unit_notes::collect_unit_notes;
use crate::core::{json_type_name, CompositionNoteSet, RulesDictionary};

/// 单位标识：优先使用单位自身的 id，缺失时退回位置下标
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnitKey {
    Id(String),
    Index(usize),
}

impl UnitKey {
    pub fn of(unit: &Value, index: usize) -> Self {
        match unit.get("id") {
            Some(Value::String(id)) if !id.is_empty() => UnitKey::Id(id.clone()),
            Some(Value::Number(id)) => UnitKey::Id(id.to_string()),
            _ => UnitKey::Index(index),
        }
    }
}

impl fmt::Display for UnitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKey::Id(id) => f.write_str(id),
            UnitKey::Index(idx) => write!(f, "{}", idx),
        }
    }
}

impl Serialize for UnitKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 单个单位的收集结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitNotes {
    pub notes: Vec<String>,
    /// 展示片段（format_notes_for_display 的输出）
    pub rendered: String,
}

impl UnitNotes {
    fn from_set(set: CompositionNoteSet) -> Self {
        let notes = set.into_vec();
        let rendered = format_notes_for_display(Some(notes.as_slice()));
        Self { notes, rendered }
    }
}

/// 单位标识 → 收集结果，保持输入顺序
/// 重复标识覆盖原值，位置保持首次出现处
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArmyNotes {
    entries: Vec<(UnitKey, UnitNotes)>,
    positions: FxHashMap<UnitKey, usize>,
}

impl ArmyNotes {
    fn insert(&mut self, key: UnitKey, notes: UnitNotes) {
        match self.positions.get(&key) {
            Some(&pos) => self.entries[pos].1 = notes,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, notes));
            }
        }
    }

    pub fn get(&self, key: &UnitKey) -> Option<&UnitNotes> {
        self.positions.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &UnitKey) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UnitKey, &UnitNotes)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &UnitKey> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl Serialize for ArmyNotes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// 逐单位收集；非数组输入返回空结果
pub fn collect_army_notes(units: &Value, dict: &RulesDictionary) -> ArmyNotes {
    let mut army = ArmyNotes::default();
    let Some(units) = as_unit_sequence(units) else {
        return army;
    };

    for (index, unit) in units.iter().enumerate() {
        let notes = collect_unit_notes(unit, dict);
        if notes.is_empty() {
            continue;
        }
        army.insert(UnitKey::of(unit, index), UnitNotes::from_set(notes));
    }
    army
}

/// 全军说明并集，字典序升序；非数组输入返回空列表
pub fn collect_all_army_notes(units: &Value, dict: &RulesDictionary) -> Vec<String> {
    let mut all = CompositionNoteSet::new();
    union_into(&mut all, units, dict);
    all.to_sorted_vec()
}

/// 多份军表的说明并集，字典序升序
pub fn collect_lists_notes(lists: &[&Value], dict: &RulesDictionary) -> Vec<String> {
    let mut all = CompositionNoteSet::new();
    for units in lists {
        union_into(&mut all, units, dict);
    }
    all.to_sorted_vec()
}

fn union_into(all: &mut CompositionNoteSet, units: &Value, dict: &RulesDictionary) {
    if let Some(units) = as_unit_sequence(units) {
        for unit in units {
            all.extend(collect_unit_notes(unit, dict).iter());
        }
    }
}

fn as_unit_sequence(units: &Value) -> Option<&Vec<Value>> {
    match units {
        Value::Array(units) => Some(units),
        other => {
            log::debug!("[NOTES] 批量输入非数组（{}），返回空结果", json_type_name(other));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_dict() -> RulesDictionary {
        let mut dict = RulesDictionary::new();
        dict.insert_note("high elf prince", Some("Max 1 per 1000 points"));
        dict.insert_note("griffon", Some("Counts as Rare choice"));
        dict.insert_note("sword of might", Some("No duplicate magic items"));
        dict.insert_note("martial prowess", None);
        dict.insert_note("gromril armour", Some("Dwarfs only"));
        dict
    }

    #[test]
    fn test_all_army_notes_sorted_unique() {
        let army = json!([
            { "name": "High Elf Prince" },
            { "name": "High Elf Prince" },
            { "mount": "Griffon" },
            { "magicItems": ["Sword of Might"] }
        ]);
        assert_eq!(
            collect_all_army_notes(&army, &sample_dict()),
            vec!["Counts as Rare choice", "Max 1 per 1000 points", "No duplicate magic items"]
        );
    }

    #[test]
    fn test_all_army_notes_order_independent() {
        let dict = sample_dict();
        let forward = json!([{ "magicItems": ["Sword of Might"] }, { "mount": "Griffon" }, { "armor": "Gromril Armour" }]);
        let reversed = json!([{ "armor": "Gromril Armour" }, { "mount": "Griffon" }, { "magicItems": ["Sword of Might"] }]);
        let result = collect_all_army_notes(&forward, &dict);
        assert_eq!(result, collect_all_army_notes(&reversed, &dict));
        let mut sorted = result.clone();
        sorted.sort();
        assert_eq!(result, sorted);
    }

    #[test]
    fn test_army_notes_omits_empty_units() {
        let army = json!([
            { "id": "prince.1", "name": "High Elf Prince" },
            { "id": "spears", "name": "Spearmen", "specialRules": ["Martial Prowess"] },
            { "mount": "Griffon" }
        ]);
        let result = collect_army_notes(&army, &sample_dict());

        assert_eq!(result.len(), 2);
        assert!(!result.contains_key(&UnitKey::Id("spears".into())));
        assert_eq!(
            result.get(&UnitKey::Id("prince.1".into())).unwrap().notes,
            vec!["Max 1 per 1000 points"]
        );
        let by_index = result.get(&UnitKey::Index(2)).unwrap();
        assert_eq!(by_index.notes, vec!["Counts as Rare choice"]);
        assert!(by_index.rendered.contains("Counts as Rare choice"));
    }

    #[test]
    fn test_army_notes_numeric_id_and_serialization() {
        let army = json!([{ "id": 7, "name": "Griffon" }]);
        let result = collect_army_notes(&army, &sample_dict());
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["7"]["notes"], json!(["Counts as Rare choice"]));
    }

    #[test]
    fn test_non_sequence_input() {
        let dict = sample_dict();
        for input in [json!(null), json!({ "name": "High Elf Prince" }), json!("units")] {
            assert!(collect_army_notes(&input, &dict).is_empty());
            assert!(collect_all_army_notes(&input, &dict).is_empty());
        }
    }

    #[test]
    fn test_lists_notes_union() {
        let dict = sample_dict();
        let first = json!([{ "name": "Griffon" }]);
        let second = json!([{ "armor": "Gromril Armour" }, { "name": "Griffon" }]);
        let ignored = json!({ "not": "a list" });
        assert_eq!(
            collect_lists_notes(&[&second, &first, &ignored], &dict),
            vec!["Counts as Rare choice", "Dwarfs only"]
        );
    }
}
