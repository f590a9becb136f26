//! Host service records and lookups used by the back-office API

use mortar_engine::ContentId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A content type as stored by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeRecord {
    pub id: ContentId,
    pub guid: Uuid,
    pub name: String,
    pub alias: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// A configured data type: an editor alias plus its stored pre-values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTypeDefinition {
    pub id: ContentId,
    pub guid: Uuid,
    pub name: String,
    pub property_editor_alias: String,
    /// Stored pre-values; strings may hold JSON
    #[serde(default)]
    pub pre_values: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyEditorRecord {
    pub alias: String,
    #[serde(default)]
    pub default_pre_values: Map<String, JsonValue>,
}

pub trait HostServices: Send + Sync {
    fn content_types(&self) -> Vec<ContentTypeRecord>;

    fn data_type_by_id(&self, id: ContentId) -> Option<DataTypeDefinition>;

    fn data_type_by_guid(&self, guid: Uuid) -> Option<DataTypeDefinition>;

    /// Stored pre-values of a data type, keyed by pre-value alias
    fn pre_values(&self, data_type_id: ContentId) -> BTreeMap<String, String>;

    fn property_editor(&self, alias: &str) -> Option<PropertyEditorRecord>;
}
