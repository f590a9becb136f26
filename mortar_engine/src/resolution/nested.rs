//! `doctype` items: embedded sub-documents of a declared schema
//!
//! The raw payload is a JSON object keyed by property alias. Properties are
//! materialized in schema order as source strings; the kind's own value
//! conversion runs later, when templating code reads the property. Nested
//! sub-document lists inside a property therefore stay as raw JSON text.

use super::{source_string, ItemOutcome, MissReason, ResolutionContext};
use crate::collaborators::{ContentId, SchemaDefinition};
use crate::config::compile_time::resolution::MAX_SCHEMA_PROPERTIES;
use crate::document::Item;
use crate::error::{ConversionError, ConversionResult};
use crate::logging::codes;
use crate::{log_debug, log_warning};
use crate::nodes::{NestedDocumentNode, PublishedProperty, Value};
use serde_json::{Map, Value as JsonValue};

/// `additionalInfo` key naming the schema alias
pub const DOC_TYPE_KEY: &str = "docType";

/// Payload key holding the display name; never materialized as a property
pub const NAME_KEY: &str = "name";

/// Assembles a [`NestedDocumentNode`] from a schema and a raw payload
#[derive(Debug, Clone)]
pub struct NestedNodeBuilder {
    schema: SchemaDefinition,
    owner_context_id: ContentId,
    preview: bool,
}

impl NestedNodeBuilder {
    pub fn new(schema: SchemaDefinition) -> Self {
        Self {
            schema,
            owner_context_id: 0,
            preview: false,
        }
    }

    pub fn owner_context_id(mut self, id: ContentId) -> Self {
        self.owner_context_id = id;
        self
    }

    pub fn preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    /// Whether the schema declares more properties than the configured threshold
    pub fn is_oversized(&self) -> bool {
        self.schema.properties.len() > MAX_SCHEMA_PROPERTIES
    }

    pub fn build(self, payload: &Map<String, JsonValue>) -> NestedDocumentNode {
        let properties = self
            .schema
            .properties
            .iter()
            .filter(|definition| definition.alias != NAME_KEY)
            .map(|definition| {
                let source = payload.get(&definition.alias).map(source_string).unwrap_or_default();
                PublishedProperty::new(&definition.alias, &definition.kind, source, self.preview)
            })
            .collect();

        NestedDocumentNode {
            owner_context_id: self.owner_context_id,
            name: extract_name(payload),
            schema: self.schema,
            properties,
        }
    }
}

fn extract_name(payload: &Map<String, JsonValue>) -> Option<String> {
    match payload.get(NAME_KEY)? {
        JsonValue::Null => None,
        JsonValue::String(name) => Some(name.clone()),
        other => Some(other.to_string()),
    }
}

pub(crate) fn resolve(
    item: &Item,
    raw: &JsonValue,
    ctx: &ResolutionContext<'_>,
) -> ConversionResult<ItemOutcome> {
    let alias = match item.additional_info(DOC_TYPE_KEY) {
        Some(alias) if !alias.trim().is_empty() => alias,
        _ => return Ok(ItemOutcome::Missed(MissReason::MissingDocTypeAlias)),
    };

    let Some(schema) = ctx.schemas.resolve_schema(alias)? else {
        return Ok(ItemOutcome::Missed(MissReason::UnknownSchema));
    };

    let builder = NestedNodeBuilder::new(schema)
        .owner_context_id(ctx.owner_context_id)
        .preview(ctx.preview);
    if builder.is_oversized() {
        log_warning!(code = codes::resolution::SCHEMA_TOO_LARGE, "Schema exceeds property limit",
            "schema" => alias,
            "properties" => builder.schema.properties.len(),
            "limit" => MAX_SCHEMA_PROPERTIES);
    }

    let JsonValue::Object(payload) = raw else {
        return Err(ConversionError::malformed_payload(
            &item.item_type,
            format!("expected an object keyed by property alias, found {}", json_type_name(raw)),
        ));
    };

    let node = builder.build(payload);
    log_debug!("Nested document built",
        "schema" => alias,
        "properties" => node.properties.len());

    Ok(ItemOutcome::Resolved(Value::NestedDocument(node)))
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
