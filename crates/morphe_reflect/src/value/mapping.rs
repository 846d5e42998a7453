use core::fmt;
use core::hash::BuildHasher;
use core::mem;

use crate::hash::{FixedHashState, HashTable};
use crate::value::Value;

/// An insertion-ordered mapping of [`Value`] keys to [`Value`]s.
///
/// Keys are unique; inserting an existing key replaces its value in place.
/// Equality ignores order.
#[derive(Clone, Default)]
pub struct Mapping {
    entries: Vec<(Value, Value)>,
    index: HashTable<usize>,
}

impl Mapping {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashTable::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, key: &Value) -> Option<usize> {
        let hash = FixedHashState.hash_one(key);
        self.index
            .find(hash, |&i| self.entries[i].0 == *key)
            .copied()
    }

    /// Inserts `value` under `key`, returning the replaced value if the key
    /// was already present.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        if let Some(i) = self.find(&key) {
            return Some(mem::replace(&mut self.entries[i].1, value));
        }
        let hash = FixedHashState.hash_one(&key);
        let entries = &self.entries;
        self.index.insert_unique(hash, entries.len(), |&i| {
            FixedHashState.hash_one(&entries[i].0)
        });
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.find(key).map(|i| &self.entries[i].1)
    }

    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.get(&Value::from(key))
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.find(key).is_some()
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for Mapping {}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut mapping = Mapping::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            mapping.insert(k.into(), v.into());
        }
        mapping
    }
}

impl IntoIterator for Mapping {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Mapping;
    use crate::value::Value;

    #[test]
    fn insert_replaces_in_place() {
        let mut m = Mapping::new();
        assert_eq!(m.insert("a".into(), 1.into()), None);
        assert_eq!(m.insert("b".into(), 2.into()), None);
        assert_eq!(m.insert("a".into(), 3.into()), Some(Value::from(1)));

        let keys: Vec<_> = m.keys().cloned().collect();
        assert_eq!(keys, [Value::from("a"), Value::from("b")]);
        assert_eq!(m.get_str("a"), Some(&Value::from(3)));
    }

    #[test]
    fn equality_ignores_order() {
        let a = Mapping::from_iter([("x", 1), ("y", 2)]);
        let b = Mapping::from_iter([("y", 2), ("x", 1)]);
        assert_eq!(a, b);
        assert_ne!(a, Mapping::from_iter([("x", 1)]));
    }

    #[test]
    fn many_keys_stay_reachable() {
        let m = Mapping::from_iter((0..200).map(|i| (i, i * 2)));
        assert_eq!(m.len(), 200);
        assert!((0..200).all(|i| m.get(&Value::from(i)) == Some(&Value::from(i * 2))));
    }
}
