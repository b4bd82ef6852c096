//! 单个单位的编制说明收集
//! 遍历单位记录的已知字段，解析名称 → 规范化 → 字典查找 → 去重累积
//! 任何字段形态异常都视为"无贡献"，不会报错

use serde_json::{Map, Value};

use crate::core::{CompositionNoteSet, RulesDictionary};
use crate::normalizer::{canonicalize, resolve_name, split_composite};
use crate::utils::preview_compact;

/// 单次扫描上下文
struct NoteScan<'d> {
    dict: &'d RulesDictionary,
    notes: CompositionNoteSet,
}

impl<'d> NoteScan<'d> {
    fn new(dict: &'d RulesDictionary) -> Self {
        Self {
            dict,
            notes: CompositionNoteSet::new(),
        }
    }

    /// 统一的累加步骤：缺失跳过 → 规范化 → 查找 → 有说明则插入
    #[inline]
    fn try_add(&mut self, raw: Option<&str>) {
        let Some(raw) = raw else {
            return;
        };
        let key = canonicalize(raw);
        if key.is_empty() {
            return;
        }
        self.add_key(&key);
    }

    /// 已规范化（或预小写）的键直接查找
    #[inline]
    fn add_key(&mut self, key: &str) {
        if let Some(note) = self.dict.note_for(key) {
            self.notes.insert(note);
        }
    }

    /// 单个条目：解析名称后查找，不拆分逗号
    #[inline]
    fn add_item(&mut self, item: &Value) {
        self.try_add(resolve_name(item));
    }

    /// 复合名称条目：解析名称后按逗号拆分，每段独立查找
    fn add_composite(&mut self, item: &Value) {
        if let Some(name) = resolve_name(item) {
            for segment in split_composite(name) {
                self.try_add(Some(segment));
            }
        }
    }

    /// 序列字段：逐个条目查找
    fn add_sequence(&mut self, field: Option<&Value>) {
        if let Some(Value::Array(items)) = field {
            for item in items {
                self.add_item(item);
            }
        }
    }

    fn add_special_rules(&mut self, field: Option<&Value>) {
        match field {
            Some(Value::Array(rules)) => {
                for rule in rules {
                    self.add_composite(rule);
                }
            }
            Some(single @ Value::Object(_)) => self.add_composite(single),
            _ => {}
        }
    }

    /// 装备：仅 active 条目；显示名按逗号拆分、小写后直接查找
    fn add_equipment(&mut self, field: Option<&Value>) {
        for entry in active_entries(field) {
            if let Some(name) = resolve_name(entry) {
                for segment in split_composite(name) {
                    self.add_key(&segment.to_lowercase());
                }
            }
        }
    }

    /// 装备分类：每个分类的 selected 子序列
    fn add_item_categories(&mut self, field: Option<&Value>) {
        if let Some(Value::Array(categories)) = field {
            for category in categories {
                self.add_sequence(category.get("selected"));
            }
        }
    }

    fn add_armor(&mut self, field: Option<&Value>) {
        match field {
            Some(Value::Array(_)) => self.add_sequence(field),
            Some(single) => self.add_item(single),
            None => {}
        }
    }

    /// 坐骑选项：仅 active 条目，规范化后直接查找
    fn add_mounts(&mut self, field: Option<&Value>) {
        for entry in active_entries(field) {
            self.add_item(entry);
        }
    }

    /// 指挥组：仅 active 条目；名称按逗号拆分，另含嵌套 magic.selected
    fn add_command(&mut self, field: Option<&Value>) {
        for entry in active_entries(field) {
            self.add_composite(entry);
            let nested = entry.get("magic").and_then(|magic| magic.get("selected"));
            self.add_sequence(nested);
        }
    }

    /// 字段访问顺序固定，保证结果的插入顺序可复现
    fn scan(mut self, fields: &Map<String, Value>) -> CompositionNoteSet {
        if let Some(name) = fields.get("name") {
            self.add_item(name);
        }
        if let Some(mount) = fields.get("mount") {
            self.add_item(mount);
        }
        self.add_special_rules(fields.get("specialRules"));
        self.add_sequence(fields.get("weapons"));
        self.add_sequence(fields.get("magicItems"));
        self.add_sequence(fields.get("options"));
        self.add_equipment(fields.get("equipment"));
        self.add_item_categories(fields.get("items"));
        self.add_armor(fields.get("armor"));
        self.add_mounts(fields.get("mounts"));
        self.add_command(fields.get("command"));
        self.notes
    }
}

/// 仅 `active: true` 的对象条目
fn active_entries(field: Option<&Value>) -> impl Iterator<Item = &Value> {
    let entries: &[Value] = match field {
        Some(Value::Array(items)) => items,
        _ => &[],
    };
    entries
        .iter()
        .filter(|entry| matches!(entry.get("active"), Some(Value::Bool(true))))
}

/// 收集单个单位的编制说明（插入有序、去重）
/// 非对象输入返回空集合
pub fn collect_unit_notes(unit: &Value, dict: &RulesDictionary) -> CompositionNoteSet {
    let Value::Object(fields) = unit else {
        return CompositionNoteSet::new();
    };
    let notes = NoteScan::new(dict).scan(fields);
    let label = fields.get("name").and_then(resolve_name).unwrap_or("<unnamed>");
    log::debug!("[NOTES] unit={} | notes={}", preview_compact(label, 40), notes.len());
    notes
}

/// 同 [`collect_unit_notes`]，直接返回有序列表
pub fn collect_unit_note_list(unit: &Value, dict: &RulesDictionary) -> Vec<String> {
    collect_unit_notes(unit, dict).into_vec()
}
