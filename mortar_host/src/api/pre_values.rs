//! Data type pre-value lookup
//!
//! Ids arrive as strings from the editor and may be either the numeric id or
//! the GUID key of a data type.

use super::errors::{ApiError, ApiResult};
use crate::services::{DataTypeDefinition, HostServices};
use mortar_engine::ContentId;
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataTypeKey {
    Id(ContentId),
    Guid(Uuid),
}

impl DataTypeKey {
    /// Integer first, then GUID; anything else is not a key
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(id) = raw.parse::<ContentId>() {
            return Some(DataTypeKey::Id(id));
        }
        Uuid::parse_str(raw).ok().map(DataTypeKey::Guid)
    }
}

pub(crate) fn lookup(services: &dyn HostServices, raw_id: &str) -> ApiResult<Option<Map<String, JsonValue>>> {
    let definition = match DataTypeKey::parse(raw_id) {
        Some(DataTypeKey::Id(id)) => services.data_type_by_id(id),
        Some(DataTypeKey::Guid(guid)) => services.data_type_by_guid(guid),
        None => return Ok(None),
    };
    let Some(definition) = definition else {
        return Ok(None);
    };

    editor_config(services, &definition).map(Some)
}

/// Editor defaults overlaid with the stored pre-values
fn editor_config(
    services: &dyn HostServices,
    definition: &DataTypeDefinition,
) -> ApiResult<Map<String, JsonValue>> {
    let editor = services
        .property_editor(&definition.property_editor_alias)
        .ok_or_else(|| ApiError::MissingPropertyEditor {
            data_type_id: definition.id,
            alias: definition.property_editor_alias.clone(),
        })?;

    Ok(overlay(editor.default_pre_values, services.pre_values(definition.id)))
}

fn overlay(mut defaults: Map<String, JsonValue>, stored: BTreeMap<String, String>) -> Map<String, JsonValue> {
    for (key, value) in stored {
        defaults.insert(key, stored_value(value));
    }
    defaults
}

/// Stored pre-values are strings; those holding a JSON object or array are
/// handed to the editor parsed
fn stored_value(value: String) -> JsonValue {
    let trimmed = value.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        if let Ok(parsed) = serde_json::from_str(trimmed) {
            return parsed;
        }
    }
    JsonValue::String(value)
}
