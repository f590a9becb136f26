//! Resolved item values
//!
//! These mimic stored content nodes so templating code can walk an authored
//! sub-document exactly like a real one.

use crate::collaborators::{ContentId, ContentReference, RenderableNode, SchemaDefinition};
use serde::Serialize;

/// A detached property: the schema's kind plus the raw source string the
/// kind's own value conversion will consume
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedProperty {
    pub alias: String,
    pub kind: String,
    pub source: String,
    pub preview: bool,
}

impl PublishedProperty {
    pub fn new(
        alias: impl Into<String>,
        kind: impl Into<String>,
        source: impl Into<String>,
        preview: bool,
    ) -> Self {
        Self {
            alias: alias.into(),
            kind: kind.into(),
            source: source.into(),
            preview,
        }
    }

    pub fn has_value(&self) -> bool {
        !self.source.trim().is_empty()
    }
}

/// Synthetic single-property node wrapping a rich-text block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextNode {
    pub owner_context_id: ContentId,
    pub schema: SchemaDefinition,
    pub property: PublishedProperty,
    pub rendered: RenderableNode,
}

impl RichTextNode {
    /// The authored markup
    pub fn markup(&self) -> &str {
        &self.property.source
    }

    /// The host-rendered output
    pub fn html(&self) -> &str {
        &self.rendered.html
    }
}

/// Synthetic node built from an embedded sub-document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedDocumentNode {
    pub owner_context_id: ContentId,
    pub schema: SchemaDefinition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub properties: Vec<PublishedProperty>,
}

impl NestedDocumentNode {
    pub fn schema_alias(&self) -> &str {
        &self.schema.alias
    }

    pub fn property(&self, alias: &str) -> Option<&PublishedProperty> {
        self.properties.iter().find(|p| p.alias == alias)
    }

    /// Source string of a property, if the schema declares it
    pub fn property_value(&self, alias: &str) -> Option<&str> {
        self.property(alias).map(|p| p.source.as_str())
    }

    pub fn property_aliases(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.alias.as_str()).collect()
    }
}

/// A resolved item value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Value {
    RichText(RichTextNode),
    ContentReference(ContentReference),
    NestedDocument(NestedDocumentNode),
}

impl Value {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::RichText(_) => "richText",
            Value::ContentReference(_) => "contentReference",
            Value::NestedDocument(_) => "nestedDocument",
        }
    }

    pub fn as_rich_text(&self) -> Option<&RichTextNode> {
        match self {
            Value::RichText(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_content_reference(&self) -> Option<&ContentReference> {
        match self {
            Value::ContentReference(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn as_nested_document(&self) -> Option<&NestedDocumentNode> {
        match self {
            Value::NestedDocument(node) => Some(node),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_node() -> NestedDocumentNode {
        NestedDocumentNode {
            owner_context_id: 1200,
            schema: SchemaDefinition::new(7, "article")
                .with_property("title", "textstring")
                .with_property("summary", "textarea"),
            name: Some("Launch".into()),
            properties: vec![
                PublishedProperty::new("title", "textstring", "Hello", false),
                PublishedProperty::new("summary", "textarea", "", false),
            ],
        }
    }

    #[test]
    fn test_nested_node_accessors() {
        let node = sample_node();
        assert_eq!(node.schema_alias(), "article");
        assert_eq!(node.property_value("title"), Some("Hello"));
        assert_eq!(node.property_aliases(), vec!["title", "summary"]);
        assert!(!node.property("summary").unwrap().has_value());
        assert!(node.property("missing").is_none());
    }

    #[test]
    fn test_value_serializes_with_kind_tag() {
        let value = Value::NestedDocument(sample_node());
        let json = serde_json::to_value(&value).unwrap();

        assert_eq!(json["kind"], "nestedDocument");
        assert_eq!(json["name"], "Launch");
        assert_eq!(json["ownerContextId"], 1200);
        assert_eq!(json["properties"][0]["alias"], "title");
    }

    #[test]
    fn test_value_accessors() {
        let value = Value::ContentReference(ContentReference {
            id: 42,
            name: "About".into(),
            schema_alias: "page".into(),
            url: Some("/about/".into()),
        });

        assert_eq!(value.kind_name(), "contentReference");
        assert_eq!(value.as_content_reference().map(|r| r.id), Some(42));
        assert!(value.as_rich_text().is_none());
        assert!(value.as_nested_document().is_none());
    }
}
