use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scheme role names mapped to values, in insertion order
///
/// Serializes as a plain object whose keys keep the table order, so
/// rendered themes list roles the same way every time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleMap<T> {
    entries: IndexMap<String, T>,
}

impl<T> RoleMap<T> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Set the value for `name`; an existing role keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        self.entries.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Same roles in the same order with every value transformed.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> RoleMap<U> {
        RoleMap {
            entries: self
                .entries
                .iter()
                .map(|(name, value)| (name.clone(), f(value)))
                .collect(),
        }
    }
}

impl<T> Default for RoleMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Into<String>> FromIterator<(K, T)> for RoleMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

impl<T> IntoIterator for RoleMap<T> {
    type Item = (String, T);
    type IntoIter = indexmap::map::IntoIter<String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_keeps_order() {
        let mut map = RoleMap::new();
        map.insert("primary", 40u8);
        map.insert("onPrimary", 100);
        map.insert("background", 99);

        let names: Vec<&str> = map.names().collect();
        assert_eq!(names, vec!["primary", "onPrimary", "background"]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("onPrimary"), Some(&100));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut map: RoleMap<u8> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(map.insert("a", 9), Some(1));
        let pairs: Vec<(&str, u8)> = map.iter().map(|(n, v)| (n, *v)).collect();
        assert_eq!(pairs, vec![("a", 9), ("b", 2)]);
    }

    #[test]
    fn test_map_transforms_values() {
        let map: RoleMap<u8> = [("primary", 40u8), ("surface", 99)].into_iter().collect();
        let doubled = map.map(|tone| u32::from(*tone) * 2);
        assert_eq!(doubled.get("primary"), Some(&80));
        assert_eq!(doubled.names().collect::<Vec<_>>(), vec!["primary", "surface"]);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let map: RoleMap<u8> = [("zeta", 1u8), ("alpha", 2)].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn test_empty() {
        let map: RoleMap<u8> = RoleMap::default();
        assert!(map.is_empty());
        assert!(!map.contains("primary"));
    }
}
