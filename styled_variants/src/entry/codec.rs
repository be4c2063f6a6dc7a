//! Flat object encoding for compound rules.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::CompoundRule;
use crate::ordered::OrderedMap;
use crate::value::VariantValue;

const CLASS_NAME_KEY: &str = "className";

impl Serialize for CompoundRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.required_values.len() + 1))?;
        for (name, value) in self.required_values.iter() {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry(CLASS_NAME_KEY, &self.class_name)?;
        map.end()
    }
}

struct CompoundRuleVisitor;

impl<'de> Visitor<'de> for CompoundRuleVisitor {
    type Value = CompoundRule;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a compound rule object of variant requirements and a className")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut required_values = OrderedMap::new();
        let mut class_name = None;
        while let Some(key) = access.next_key::<String>()? {
            if key == CLASS_NAME_KEY {
                class_name = Some(access.next_value::<String>()?);
            } else {
                let value = access.next_value::<VariantValue>()?;
                required_values.insert(key, value);
            }
        }
        // A rule without classes is tolerated and contributes nothing.
        Ok(CompoundRule {
            required_values,
            class_name: class_name.unwrap_or_default(),
        })
    }
}

impl<'de> Deserialize<'de> for CompoundRule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CompoundRuleVisitor)
    }
}
