// Internal modules
pub mod collaborators;
pub mod config;
pub mod converter;
pub mod document;
pub mod error;
#[macro_use]
pub mod logging;
pub mod nodes;
pub mod resolution;

// Re-export key types for library consumers
pub use collaborators::{
    CollaboratorError, CollaboratorResult, ContentId, ContentReference, ContentReferenceResolver,
    ConversionHost, OwnerContextProvider, PropertyDefinition, RenderableNode, RichTextConverter,
    RichTextRequest, SchemaDefinition, SchemaResolver,
};
pub use converter::{convert, try_convert, ConversionStats, MortarValueConverter, EDITOR_ALIAS};
pub use document::{parse, Document, Item, Row, Zone};
pub use error::{ConversionError, ConversionResult, ParseError};
pub use nodes::{NestedDocumentNode, PublishedProperty, RichTextNode, Value};
pub use resolution::{resolve, resolve_value, ItemKind, MissReason, ResolutionContext};
