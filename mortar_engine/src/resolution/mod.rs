//! Item resolution engine
//!
//! Each item kind resolves independently. Lookups that find nothing are
//! recorded as a [`MissReason`] and leave the item unresolved; collaborator
//! failures and malformed payloads are errors that abort the whole document.

pub mod context;
pub mod link;
pub mod nested;
pub mod rich_text;

use crate::document::Item;
use crate::error::ConversionResult;
use crate::logging::{codes, Code};
use crate::nodes::Value;
use crate::{log_debug, log_warning};
use serde_json::Value as JsonValue;
use std::fmt;

pub use context::ResolutionContext;
pub use nested::NestedNodeBuilder;

/// Item kinds, parsed case-insensitively from the item's `type`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    RichText,
    Link,
    DocType,
    /// Unrecognized kinds are left alone
    Unknown(String),
}

impl ItemKind {
    pub fn from_type_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "richtext" => ItemKind::RichText,
            "link" => ItemKind::Link,
            "doctype" => ItemKind::DocType,
            _ => ItemKind::Unknown(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ItemKind::RichText => "richtext",
            ItemKind::Link => "link",
            ItemKind::DocType => "doctype",
            ItemKind::Unknown(name) => name,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an item ended up without a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MissReason {
    NoRawValue,
    UnsupportedKind,
    MalformedLinkId,
    ContentNotFound,
    MissingDocTypeAlias,
    UnknownSchema,
}

impl MissReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissReason::NoRawValue => "no_raw_value",
            MissReason::UnsupportedKind => "unsupported_kind",
            MissReason::MalformedLinkId => "malformed_link_id",
            MissReason::ContentNotFound => "content_not_found",
            MissReason::MissingDocTypeAlias => "missing_doctype_alias",
            MissReason::UnknownSchema => "unknown_schema",
        }
    }

    /// Code used when misses are reported as warnings
    pub fn code(&self) -> Option<Code> {
        match self {
            MissReason::NoRawValue => None,
            MissReason::UnsupportedKind => Some(codes::resolution::UNSUPPORTED_ITEM_TYPE),
            MissReason::MalformedLinkId => Some(codes::resolution::MALFORMED_LINK_ID),
            MissReason::ContentNotFound => Some(codes::resolution::CONTENT_NOT_FOUND),
            MissReason::MissingDocTypeAlias => Some(codes::resolution::MISSING_DOCTYPE_ALIAS),
            MissReason::UnknownSchema => Some(codes::resolution::UNKNOWN_SCHEMA),
        }
    }
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    Resolved(Value),
    Missed(MissReason),
}

impl ItemOutcome {
    pub fn into_value(self) -> Option<Value> {
        match self {
            ItemOutcome::Resolved(value) => Some(value),
            ItemOutcome::Missed(_) => None,
        }
    }

    pub fn miss_reason(&self) -> Option<MissReason> {
        match self {
            ItemOutcome::Resolved(_) => None,
            ItemOutcome::Missed(reason) => Some(*reason),
        }
    }
}

/// Resolve an item without touching it
pub fn resolve_value(item: &Item, ctx: &ResolutionContext<'_>) -> ConversionResult<Option<Value>> {
    Ok(resolve_outcome(item, ctx)?.into_value())
}

/// Resolve an item and store the result on it
pub fn resolve(item: &mut Item, ctx: &ResolutionContext<'_>) -> ConversionResult<()> {
    item.value = resolve_value(item, ctx)?;
    Ok(())
}

/// Resolve an item, reporting why it missed
pub fn resolve_outcome(item: &Item, ctx: &ResolutionContext<'_>) -> ConversionResult<ItemOutcome> {
    let Some(raw) = item.raw_value.as_ref() else {
        return Ok(ItemOutcome::Missed(MissReason::NoRawValue));
    };

    let outcome = match item.kind() {
        ItemKind::RichText => ItemOutcome::Resolved(rich_text::resolve(raw, ctx)?),
        ItemKind::Link => link::resolve(raw, ctx)?,
        ItemKind::DocType => nested::resolve(item, raw, ctx)?,
        ItemKind::Unknown(_) => ItemOutcome::Missed(MissReason::UnsupportedKind),
    };

    if let ItemOutcome::Missed(reason) = &outcome {
        report_miss(item, *reason, ctx);
    }

    Ok(outcome)
}

fn report_miss(item: &Item, reason: MissReason, ctx: &ResolutionContext<'_>) {
    match reason.code() {
        Some(code) if ctx.reports_misses() => {
            log_warning!(code = code, "Item left unresolved",
                "item_type" => &item.item_type,
                "reason" => reason);
        }
        _ => {
            log_debug!("Item left unresolved",
                "item_type" => &item.item_type,
                "reason" => reason);
        }
    }
}

/// Source string for a raw JSON value: string contents, `""` for null,
/// compact JSON text otherwise
pub fn source_string(raw: &JsonValue) -> String {
    match raw {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::collaborators::{
        CollaboratorError, CollaboratorResult, ContentId, ContentReference,
        ContentReferenceResolver, RenderableNode, RichTextConverter, RichTextRequest,
        SchemaDefinition, SchemaResolver,
    };
    use crate::logging::{self, LogEvent, LogLevel, LoggingService, MemoryLogger};
    use std::collections::HashMap;
    use std::sync::{Arc, OnceLock};

    static MEMORY: OnceLock<Arc<MemoryLogger>> = OnceLock::new();

    /// Run `f` under a document label and return the events it logged
    ///
    /// The first call installs a debug-level memory logger as the global
    /// service; tests share it, so events are filtered by label.
    pub fn capture_events<R>(label: &str, f: impl FnOnce() -> R) -> (R, Vec<LogEvent>) {
        let memory = MEMORY.get_or_init(|| {
            let memory = Arc::new(MemoryLogger::new());
            let service = LoggingService::new(memory.clone(), LogLevel::Debug);
            logging::init_global_logging_with_service(Arc::new(service))
                .expect("no other engine test installs a global logger");
            memory
        });

        let result = logging::with_document_context(label, f);
        let events = memory
            .get_events()
            .into_iter()
            .filter(|event| event.context.get("document").map(String::as_str) == Some(label))
            .collect();
        (result, events)
    }

    /// In-memory collaborators for engine tests
    #[derive(Default)]
    pub struct FakeHost {
        pub schemas: HashMap<String, SchemaDefinition>,
        pub content: HashMap<ContentId, ContentReference>,
        pub failing_schemas: Vec<String>,
        pub fail_rich_text: bool,
    }

    impl FakeHost {
        pub fn with_schema(mut self, schema: SchemaDefinition) -> Self {
            self.schemas.insert(schema.alias.clone(), schema);
            self
        }

        pub fn with_content(mut self, id: ContentId, name: &str) -> Self {
            self.content.insert(
                id,
                ContentReference {
                    id,
                    name: name.to_string(),
                    schema_alias: "page".to_string(),
                    url: None,
                },
            );
            self
        }

        pub fn with_failing_schema(mut self, alias: &str) -> Self {
            self.failing_schemas.push(alias.to_string());
            self
        }
    }

    impl SchemaResolver for FakeHost {
        fn resolve_schema(&self, alias: &str) -> CollaboratorResult<Option<SchemaDefinition>> {
            if self.failing_schemas.iter().any(|a| a == alias) {
                return Err(CollaboratorError::SchemaLookup {
                    alias: alias.to_string(),
                    reason: "store unavailable".to_string(),
                });
            }
            Ok(self.schemas.get(alias).cloned())
        }
    }

    impl ContentReferenceResolver for FakeHost {
        fn resolve_content_reference(&self, id: ContentId) -> CollaboratorResult<Option<ContentReference>> {
            Ok(self.content.get(&id).cloned())
        }
    }

    impl RichTextConverter for FakeHost {
        fn convert_rich_text(&self, request: &RichTextRequest<'_>) -> CollaboratorResult<RenderableNode> {
            if self.fail_rich_text {
                return Err(CollaboratorError::RichText {
                    reason: "renderer offline".to_string(),
                });
            }
            Ok(RenderableNode::new(format!("<div>{}</div>", request.markup)))
        }
    }
}
