//! Host collaborator interfaces
//!
//! The engine performs no lookups of its own. Schemas, linked content, rich
//! text rendering and the "page currently being rendered" all come from the
//! host through these traits.

use crate::logging::{codes, Code};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a content node in the host
pub type ContentId = i32;

/// A declared property of a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub alias: String,
    pub kind: String,
}

impl PropertyDefinition {
    pub fn new(alias: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            kind: kind.into(),
        }
    }
}

/// A named, ordered set of property definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    #[serde(default)]
    pub id: ContentId,
    pub alias: String,
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
}

impl SchemaDefinition {
    pub fn new(id: ContentId, alias: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            properties: Vec::new(),
        }
    }

    /// Append a property definition (builder style)
    pub fn with_property(mut self, alias: impl Into<String>, kind: impl Into<String>) -> Self {
        self.properties.push(PropertyDefinition::new(alias, kind));
        self
    }

    pub fn property(&self, alias: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.alias == alias)
    }

    pub fn property_aliases(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.alias.as_str())
    }
}

/// Opaque handle to another content node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReference {
    pub id: ContentId,
    pub name: String,
    #[serde(default)]
    pub schema_alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Output of the host's rich-text property conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableNode {
    pub html: String,
}

impl RenderableNode {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

/// Everything the host's rich-text pipeline needs to convert one block
#[derive(Debug, Clone, Copy)]
pub struct RichTextRequest<'a> {
    pub schema: &'a SchemaDefinition,
    pub property: &'a PropertyDefinition,
    pub markup: &'a str,
    pub owner_context_id: ContentId,
    pub preview: bool,
}

/// Failure raised by a host collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("Schema lookup for '{alias}' failed: {reason}")]
    SchemaLookup { alias: String, reason: String },

    #[error("Content lookup for id {id} failed: {reason}")]
    ContentLookup { id: ContentId, reason: String },

    #[error("Rich text conversion failed: {reason}")]
    RichText { reason: String },
}

impl CollaboratorError {
    pub fn code(&self) -> Code {
        match self {
            CollaboratorError::SchemaLookup { .. } => codes::collaborator::SCHEMA_LOOKUP_FAILED,
            CollaboratorError::ContentLookup { .. } => codes::collaborator::CONTENT_LOOKUP_FAILED,
            CollaboratorError::RichText { .. } => codes::collaborator::RICH_TEXT_CONVERSION_FAILED,
        }
    }
}

pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Resolves schema aliases to their declared properties
pub trait SchemaResolver: Send + Sync {
    /// `Ok(None)` when the alias is unknown
    fn resolve_schema(&self, alias: &str) -> CollaboratorResult<Option<SchemaDefinition>>;
}

/// Resolves content ids to references
pub trait ContentReferenceResolver: Send + Sync {
    /// `Ok(None)` when nothing is published under `id`
    fn resolve_content_reference(&self, id: ContentId) -> CollaboratorResult<Option<ContentReference>>;
}

/// The host's rich-text property conversion
pub trait RichTextConverter: Send + Sync {
    fn convert_rich_text(&self, request: &RichTextRequest<'_>) -> CollaboratorResult<RenderableNode>;
}

/// Supplies the id of the page currently being rendered, if any
pub trait OwnerContextProvider: Send + Sync {
    fn current_owner_context_id(&self) -> Option<ContentId>;
}

/// A host that provides every collaborator the converter needs
pub trait ConversionHost:
    SchemaResolver + ContentReferenceResolver + RichTextConverter + OwnerContextProvider
{
}

impl<T> ConversionHost for T where
    T: SchemaResolver + ContentReferenceResolver + RichTextConverter + OwnerContextProvider
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_builder_preserves_order() {
        let schema = SchemaDefinition::new(1, "article")
            .with_property("title", "textstring")
            .with_property("body", "richtext")
            .with_property("image", "media");

        let aliases: Vec<&str> = schema.property_aliases().collect();
        assert_eq!(aliases, vec!["title", "body", "image"]);
        assert_eq!(schema.property("body").map(|p| p.kind.as_str()), Some("richtext"));
        assert!(schema.property("Body").is_none());
    }

    #[test]
    fn test_schema_deserializes_without_optional_fields() {
        let schema: SchemaDefinition =
            serde_json::from_str(r#"{"alias":"banner"}"#).unwrap();
        assert_eq!(schema.id, 0);
        assert!(schema.properties.is_empty());
    }

    #[test]
    fn test_collaborator_error_codes() {
        let err = CollaboratorError::SchemaLookup {
            alias: "article".into(),
            reason: "database offline".into(),
        };
        assert_eq!(err.code(), codes::collaborator::SCHEMA_LOOKUP_FAILED);
        assert_eq!(
            err.to_string(),
            "Schema lookup for 'article' failed: database offline"
        );
    }
}
