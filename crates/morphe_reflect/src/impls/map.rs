use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, HashMap};

use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Map, ReflectRef};
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// HashMap

// The hasher does not take part in the path.
impl<K: TypePath, V: TypePath, S: 'static> TypePath for HashMap<K, V, S> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "std::collections::HashMap<",
                K::type_path(),
                ", ",
                V::type_path(),
                ">",
            ])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["HashMap<", K::type_name(), ", ", V::type_name(), ">"])
        })
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("std::collections")
    }
}

impl<K, V, S> Typed for HashMap<K, V, S>
where
    K: FromReflect + Typed + Eq + Hash,
    V: Reflect + Typed,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: FromReflect + Typed + Eq + Hash,
    V: Reflect + Typed,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }
}

impl<K, V, S> Map for HashMap<K, V, S>
where
    K: FromReflect + Typed + Eq + Hash,
    V: Reflect + Typed,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
        let key = K::from_reflect(key)?;
        HashMap::get(self, &key).map(|v| v as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(HashMap::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
    }
}

impl<K, V, S> FromReflect for HashMap<K, V, S>
where
    K: FromReflect + Typed + Eq + Hash,
    V: FromReflect + Typed,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        let ReflectRef::Map(map) = reflect.reflect_ref() else {
            return None;
        };
        let mut out = HashMap::with_capacity_and_hasher(map.len(), S::default());
        for (key, value) in map.iter() {
            out.insert(K::from_reflect(key)?, V::from_reflect(value)?);
        }
        Some(out)
    }
}

// -----------------------------------------------------------------------------
// BTreeMap

impl<K: TypePath, V: TypePath> TypePath for BTreeMap<K, V> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&[
                "alloc::collections::BTreeMap<",
                K::type_path(),
                ", ",
                V::type_path(),
                ">",
            ])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["BTreeMap<", K::type_name(), ", ", V::type_name(), ">"])
        })
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::collections")
    }
}

impl<K, V> Typed for BTreeMap<K, V>
where
    K: FromReflect + Typed + Ord,
    V: Reflect + Typed,
{
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: FromReflect + Typed + Ord,
    V: Reflect + Typed,
{
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: FromReflect + Typed + Ord,
    V: Reflect + Typed,
{
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect> {
        let key = K::from_reflect(key)?;
        BTreeMap::get(self, &key).map(|v| v as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_> {
        Box::new(BTreeMap::iter(self).map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
    }
}

impl<K, V> FromReflect for BTreeMap<K, V>
where
    K: FromReflect + Typed + Ord,
    V: FromReflect + Typed,
{
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        let ReflectRef::Map(map) = reflect.reflect_ref() else {
            return None;
        };
        map.iter()
            .map(|(key, value)| Some((K::from_reflect(key)?, V::from_reflect(value)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use crate::FromReflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::{DynamicMap, Map};

    #[test]
    fn map_paths() {
        assert_eq!(<HashMap<String, i64>>::type_name(), "HashMap<String, i64>");
        assert_eq!(
            <BTreeMap<u8, bool>>::type_path(),
            "alloc::collections::BTreeMap<u8, bool>"
        );
        let info = <HashMap<String, Vec<u8>>>::type_info().as_map().unwrap();
        assert_eq!(info.value_info().type_name(), "Vec<u8>");
    }

    #[test]
    fn lookup_through_reflection() {
        let map = BTreeMap::from([(1_i64, true), (2, false)]);
        let map: &dyn Map = &map;
        let value = map.get(&2_i64).unwrap();
        assert_eq!(value.downcast_ref::<bool>(), Some(&false));
        assert!(map.get(&String::from("2")).is_none());
    }

    #[test]
    fn from_dynamic() {
        let mut dynamic = DynamicMap::new();
        dynamic.insert(String::from("a"), 1_u8);
        dynamic.insert(String::from("b"), 2_u8);

        let map = <HashMap<String, u8>>::from_reflect(&dynamic).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["b"], 2);
        assert!(<HashMap<String, i64>>::from_reflect(&dynamic).is_none());
    }
}
