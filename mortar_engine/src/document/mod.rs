//! Zone / Row / Item document model
//!
//! Wire format (key names are fixed by previously authored content):
//!
//! ```json
//! { "main": [ { "items": [ { "type": "richtext", "value": "<p>hi</p>" } ] } ] }
//! ```

pub mod parser;

use crate::nodes::Value;
use crate::resolution::ItemKind;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use std::fmt;

pub use parser::{limit_excesses, parse, LimitExcess};

/// Zones in authored order; names are unique
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    zones: Vec<Zone>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub name: String,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default, deserialize_with = "deserialize_items")]
    pub items: Vec<Item>,

    /// Row-level editor settings, carried through untouched
    #[serde(flatten)]
    pub settings: Map<String, JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "type")]
    pub item_type: String,

    #[serde(rename = "value", default, skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<JsonValue>,

    #[serde(
        rename = "additionalInfo",
        default,
        deserialize_with = "deserialize_additional_info",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub additional_info: BTreeMap<String, String>,

    /// Populated once by the resolution engine
    #[serde(rename = "resolved", skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Document {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name == name)
    }

    pub fn zone_names(&self) -> Vec<&str> {
        self.zones.iter().map(|z| z.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.zones.iter().map(|z| z.rows.len()).sum()
    }

    pub fn item_count(&self) -> usize {
        self.items().count()
    }

    /// Every item in zone, row, item order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.zones
            .iter()
            .flat_map(|z| z.rows.iter())
            .flat_map(|r| r.items.iter())
    }

    pub(crate) fn zones_mut(&mut self) -> &mut [Zone] {
        &mut self.zones
    }
}

impl Zone {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

impl Row {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            settings: Map::new(),
        }
    }
}

impl Item {
    pub fn new(item_type: impl Into<String>, raw_value: Option<JsonValue>) -> Self {
        Self {
            item_type: item_type.into(),
            raw_value,
            additional_info: BTreeMap::new(),
            value: None,
        }
    }

    pub fn with_additional_info(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_info.insert(key.into(), value.into());
        self
    }

    pub fn kind(&self) -> ItemKind {
        ItemKind::from_type_name(&self.item_type)
    }

    pub fn additional_info(&self, key: &str) -> Option<&str> {
        self.additional_info.get(key).map(String::as_str)
    }

    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }
}

// ============================================================================
// SERDE
// ============================================================================

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping zone names to arrays of rows")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Document, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut zones: Vec<Zone> = Vec::with_capacity(map.size_hint().unwrap_or(0));

        // A repeated zone key replaces the earlier rows but keeps its position
        while let Some((name, rows)) = map.next_entry::<String, Option<Vec<Option<Row>>>>()? {
            let rows: Vec<Row> = rows.unwrap_or_default().into_iter().flatten().collect();
            match zones.iter_mut().find(|z| z.name == name) {
                Some(zone) => zone.rows = rows,
                None => zones.push(Zone { name, rows }),
            }
        }

        Ok(Document { zones })
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.zones.len()))?;
        for zone in &self.zones {
            map.serialize_entry(&zone.name, &zone.rows)?;
        }
        map.end()
    }
}

fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Option<Item>>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().flatten().collect())
}

fn deserialize_additional_info<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, JsonValue>> = Option::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| match value {
            JsonValue::Null => None,
            JsonValue::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect())
}
