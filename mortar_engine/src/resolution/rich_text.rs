//! `richtext` items
//!
//! Markup is handed to the host's rich-text pipeline as if it were the single
//! property of a stored node, so the rendered output matches what a real
//! rich-text property would produce.

use super::{source_string, ResolutionContext};
use crate::collaborators::{PropertyDefinition, RichTextRequest, SchemaDefinition};
use crate::error::ConversionResult;
use crate::nodes::{PublishedProperty, RichTextNode, Value};
use serde_json::Value as JsonValue;

const SCHEMA_ID: i32 = -1;
const SCHEMA_ALIAS: &str = "MortarRichtext";
const PROPERTY_ALIAS: &str = "bodyText";
const RICH_TEXT_KIND: &str = "Umbraco.TinyMCEv3";

fn synthetic_schema() -> SchemaDefinition {
    SchemaDefinition::new(SCHEMA_ID, SCHEMA_ALIAS).with_property(PROPERTY_ALIAS, RICH_TEXT_KIND)
}

pub(crate) fn resolve(raw: &JsonValue, ctx: &ResolutionContext<'_>) -> ConversionResult<Value> {
    let schema = synthetic_schema();
    let property = PropertyDefinition::new(PROPERTY_ALIAS, RICH_TEXT_KIND);
    let markup = source_string(raw);

    let rendered = ctx.rich_text.convert_rich_text(&RichTextRequest {
        schema: &schema,
        property: &property,
        markup: &markup,
        owner_context_id: ctx.owner_context_id,
        preview: ctx.preview,
    })?;

    let property = PublishedProperty::new(PROPERTY_ALIAS, RICH_TEXT_KIND, markup, ctx.preview);

    Ok(Value::RichText(RichTextNode {
        owner_context_id: ctx.owner_context_id,
        schema,
        property,
        rendered,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;
    use crate::resolution::test_support::FakeHost;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_wraps_markup_in_synthetic_node() {
        let host = FakeHost::default();
        let ctx = ResolutionContext::new(1200, true, &host, &host, &host);

        let value = resolve(&json!("<p>hi</p>"), &ctx).unwrap();
        let node = value.as_rich_text().unwrap();

        assert_eq!(node.owner_context_id, 1200);
        assert_eq!(node.schema.id, -1);
        assert_eq!(node.schema.alias, "MortarRichtext");
        assert_eq!(node.schema.property_aliases().collect::<Vec<_>>(), vec!["bodyText"]);
        assert_eq!(node.markup(), "<p>hi</p>");
        assert_eq!(node.html(), "<div><p>hi</p></div>");
        assert!(node.property.preview);
    }

    #[test]
    fn test_non_string_markup_uses_json_text() {
        let host = FakeHost::default();
        let ctx = ResolutionContext::new(0, false, &host, &host, &host);

        let value = resolve(&json!(5), &ctx).unwrap();
        assert_eq!(value.as_rich_text().map(RichTextNode::markup), Some("5"));
    }

    #[test]
    fn test_converter_failure_is_an_error() {
        let host = FakeHost {
            fail_rich_text: true,
            ..FakeHost::default()
        };
        let ctx = ResolutionContext::new(0, false, &host, &host, &host);

        assert_matches!(
            resolve(&json!("<p>x</p>"), &ctx),
            Err(ConversionError::Collaborator(_))
        );
    }
}
