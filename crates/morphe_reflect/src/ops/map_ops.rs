use core::fmt;

use crate::Reflect;
use crate::hash::HashTable;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Map trait

/// A key-value container.
pub trait Map: Reflect {
    /// Looks up the value whose key reflects equal to `key`.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the entries; the order is that of the container.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;
}

// -----------------------------------------------------------------------------
// Dynamic Map

/// A map built at runtime, optionally representing a concrete map type.
///
/// Entries keep insertion order. Inserting a key that reflects equal to an
/// existing key replaces the entry's value.
///
/// Keys are indexed by [`Reflect::reflect_hash`]. Keys without a hash never
/// compare equal, each of them is a new entry and cannot be looked up.
#[derive(Default)]
pub struct DynamicMap {
    info: Option<&'static TypeInfo>,
    entries: Vec<(Box<dyn Reflect>, Box<dyn Reflect>)>,
    index: HashTable<(u64, usize)>,
}

impl TypePath for DynamicMap {
    #[inline]
    fn type_path() -> &'static str {
        "morphe_reflect::ops::DynamicMap"
    }

    #[inline]
    fn type_name() -> &'static str {
        "DynamicMap"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("morphe_reflect::ops")
    }
}

impl Typed for DynamicMap {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl DynamicMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            info: None,
            entries: Vec::with_capacity(capacity),
            index: HashTable::with_capacity(capacity),
        }
    }

    /// Sets the map type this value represents.
    ///
    /// # Panics
    ///
    /// Panics if `info` is not a map descriptor.
    #[inline]
    pub fn set_represented_type(&mut self, info: Option<&'static TypeInfo>) {
        if let Some(info) = info {
            assert!(info.as_map().is_ok(), "`TypeInfo` mismatched.");
        }
        self.info = info;
    }

    fn find(&self, hash: u64, key: &dyn Reflect) -> Option<usize> {
        self.index
            .find(hash, |&(h, i)| {
                h == hash && self.entries[i].0.reflect_partial_eq(key) == Some(true)
            })
            .map(|&(_, i)| i)
    }

    pub fn insert_boxed(&mut self, key: Box<dyn Reflect>, value: Box<dyn Reflect>) {
        let Some(hash) = key.reflect_hash() else {
            self.entries.push((key, value));
            return;
        };
        if let Some(i) = self.find(hash, &*key) {
            self.entries[i].1 = value;
            return;
        }
        self.index
            .insert_unique(hash, (hash, self.entries.len()), |&(h, _)| h);
        self.entries.push((key, value));
    }

    #[inline]
    pub fn insert<K: Reflect, V: Reflect>(&mut self, key: K, value: V) {
        self.insert_boxed(Box::new(key), Box::new(value));
    }
}

impl Map for DynamicMap {
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
        let i = self.find(key.reflect_hash()?, key)?;
        Some(&*self.entries[i].1)
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(self.entries.iter().map(|(k, v)| (&**k, &**v)))
    }
}

impl Reflect for DynamicMap {
    #[inline]
    fn is_dynamic(&self) -> bool {
        true
    }

    #[inline]
    fn represented_type_info(&self) -> Option<&'static TypeInfo> {
        self.info
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicMap(")?;
        crate::impls::map_debug(self, f)?;
        write!(f, ")")
    }
}

impl fmt::Debug for DynamicMap {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

#[cfg(test)]
mod tests {
    use super::{DynamicMap, Map};

    #[test]
    fn equal_keys_replace() {
        let mut map = DynamicMap::new();
        map.insert(1_i64, String::from("one"));
        map.insert(2_i64, String::from("two"));
        map.insert(1_i64, String::from("uno"));

        assert_eq!(map.len(), 2);
        let value = map.get(&1_i64).unwrap();
        assert_eq!(value.downcast_ref::<String>().unwrap(), "uno");
    }

    #[test]
    fn keys_match_across_types() {
        let mut map = DynamicMap::new();
        map.insert(7_u8, true);
        map.insert(String::from("7"), false);
        map.insert(7_i64, false);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&7_u32).unwrap().downcast_ref::<bool>(), Some(&false));
        assert_eq!(map.get(&String::from("7")).unwrap().downcast_ref::<bool>(), Some(&false));
        assert!(map.get(&8_u8).is_none());
    }

    #[test]
    fn many_entries() {
        let mut map = DynamicMap::with_capacity(16);
        for i in 0..50_000_u32 {
            map.insert(i.to_string(), i);
        }
        for i in (0..50_000_u32).step_by(2) {
            map.insert(i.to_string(), 0_u32);
        }

        assert_eq!(map.len(), 50_000);
        assert_eq!(map.get(&String::from("49999")).unwrap().downcast_ref::<u32>(), Some(&49_999));
        assert_eq!(map.get(&String::from("100")).unwrap().downcast_ref::<u32>(), Some(&0));
        let (first, _) = map.iter().next().unwrap();
        assert_eq!(first.downcast_ref::<String>().unwrap(), "0");
    }
}
