use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};

/// 编制说明集合：插入有序 + 去重
/// 成员与顺序无关，迭代顺序为首次插入顺序
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositionNoteSet {
    order: Vec<String>,
    seen: FxHashSet<String>,
}

impl CompositionNoteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入说明，已存在返回 false
    pub fn insert(&mut self, note: &str) -> bool {
        if self.seen.contains(note) {
            return false;
        }
        self.seen.insert(note.to_string());
        self.order.push(note.to_string());
        true
    }

    #[inline]
    pub fn contains(&self, note: &str) -> bool {
        self.seen.contains(note)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }

    /// 排序后的副本（汇总视图使用）
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut sorted = self.order.clone();
        sorted.sort();
        sorted
    }
}

impl<'a> Extend<&'a str> for CompositionNoteSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for note in iter {
            self.insert(note);
        }
    }
}

impl<'a> FromIterator<&'a str> for CompositionNoteSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Serialize for CompositionNoteSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.order.serialize(serializer)
    }
}
