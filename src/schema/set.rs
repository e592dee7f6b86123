use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 字符串的集合哈希码（CRC-32 IEEE）
pub fn hash_string(value: &str) -> u32 {
    crc32fast::hash(value.as_bytes())
}

/// 以哈希码为键的无序字符串集合
///
/// 元素按十进制哈希码字符串的字典序迭代，与配置引擎中集合的列举顺序一致。
/// 哈希码相同的元素视为同一个元素。
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StringSet {
    items: BTreeMap<String, String>,
}

impl StringSet {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// 插入元素；哈希码已存在时保留先插入的元素并返回 false
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.items.entry(hash_string(&value).to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.items
            .get(&hash_string(value).to_string())
            .is_some_and(|existing| existing == value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.values().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.values().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for StringSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = StringSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for StringSet {
    type Item = String;
    type IntoIter = std::collections::btree_map::IntoValues<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_values()
    }
}

impl Serialize for StringSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for StringSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer).map(|values| values.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_string_matches_crc32_ieee() {
        assert_eq!(hash_string(""), 0);
        assert_eq!(hash_string("a"), 0xe8b7_be43);
        assert_eq!(hash_string("123456789"), 0xcbf4_3926);
    }

    #[test]
    fn duplicates_collapse() {
        let set: StringSet = ["/images", "/images", "/css"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("/images"));
        assert!(set.contains("/css"));
        assert!(!set.contains("/js"));
    }

    #[test]
    fn colliding_hash_keeps_first_element() {
        assert_eq!(hash_string("plumless"), hash_string("buckeroo"));

        let set: StringSet = ["plumless", "buckeroo"].into_iter().collect();
        assert_eq!(set.to_vec(), vec!["plumless".to_string()]);
        assert!(set.contains("plumless"));
        assert!(!set.contains("buckeroo"));

        let mut set = StringSet::new();
        assert!(set.insert("buckeroo"));
        assert!(!set.insert("plumless"));
        assert_eq!(set.to_vec(), vec!["buckeroo".to_string()]);
    }

    #[test]
    fn iteration_follows_hash_code_order() {
        let set: StringSet = ["b", "a", "c", "/img"].into_iter().collect();
        let codes: Vec<String> = set.iter().map(|value| hash_string(value).to_string()).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn serializes_as_json_array() {
        let set: StringSet = ["x"].into_iter().collect();
        assert_eq!(serde_json::to_value(&set).unwrap(), serde_json::json!(["x"]));

        let parsed: StringSet = serde_json::from_value(serde_json::json!(["y", "y", "z"])).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
