use super::DeserializeDriver;

use crate::Reflect;
use crate::convert::DeserializeError;
use crate::info::{ListInfo, MapInfo, TypeInfo};
use crate::ops::{DynamicList, DynamicMap};
use crate::value::Value;

fn expected(info: &'static TypeInfo, value: &Value, shape: &str) -> DeserializeError {
    let message = format!("expected a {shape}, received {}", value.kind_name());
    DeserializeError::coercion(info.type_name(), value, message)
}

impl DeserializeDriver {
    /// Converts each element; the first failure stops, tagged with its index.
    pub(super) fn deserialize_list(
        &self,
        value: &Value,
        info: &'static TypeInfo,
        list_info: &'static ListInfo,
    ) -> Result<Box<dyn Reflect>, DeserializeError> {
        let Some(items) = value.as_sequence() else {
            return Err(expected(info, value, "sequence"));
        };

        let item_info = list_info.item_info();
        let mut list = DynamicList::with_capacity(items.len());
        list.set_represented_type(Some(info));

        for (index, item) in items.iter().enumerate() {
            let item = self.deserialize(item, item_info).map_err(|source| {
                DeserializeError::ListElement {
                    type_name: info.type_name(),
                    index,
                    source: Box::new(source),
                }
            })?;
            list.push_boxed(item);
        }

        Ok(Box::new(list))
    }

    /// Converts each entry in input order; key and value failures are told
    /// apart, value failures carry the raw key.
    pub(super) fn deserialize_map(
        &self,
        value: &Value,
        info: &'static TypeInfo,
        map_info: &'static MapInfo,
    ) -> Result<Box<dyn Reflect>, DeserializeError> {
        let Some(mapping) = value.as_mapping() else {
            return Err(expected(info, value, "mapping"));
        };

        let key_info = map_info.key_info();
        let value_info = map_info.value_info();
        let mut map = DynamicMap::with_capacity(mapping.len());
        map.set_represented_type(Some(info));

        for (raw_key, raw_value) in mapping.iter() {
            let key = self
                .deserialize(raw_key, key_info)
                .map_err(|source| DeserializeError::MapKey {
                    type_name: info.type_name(),
                    key: raw_key.clone(),
                    source: Box::new(source),
                })?;
            let value = self
                .deserialize(raw_value, value_info)
                .map_err(|source| DeserializeError::MapValue {
                    type_name: info.type_name(),
                    key: raw_key.clone(),
                    source: Box::new(source),
                })?;
            map.insert_boxed(key, value);
        }

        Ok(Box::new(map))
    }
}
