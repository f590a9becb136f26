//! In-memory reference host

use crate::fixture::{HostError, HostFixture};
use crate::services::{ContentTypeRecord, DataTypeDefinition, HostServices, PropertyEditorRecord};
use mortar_engine::logging::codes;
use mortar_engine::{
    log_success, CollaboratorError, CollaboratorResult, ContentId, ContentReference,
    ContentReferenceResolver, OwnerContextProvider, RenderableNode, RichTextConverter,
    RichTextRequest, SchemaDefinition, SchemaResolver,
};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use uuid::Uuid;

/// Serves schemas, content, data types and the current page from memory.
///
/// Rich text is passed through unrendered.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    schemas: HashMap<String, SchemaDefinition>,
    content: HashMap<ContentId, ContentReference>,
    content_types: Vec<ContentTypeRecord>,
    data_types: Vec<DataTypeDefinition>,
    property_editors: HashMap<String, PropertyEditorRecord>,
    current_page_id: Option<ContentId>,
    failing_schemas: HashSet<String>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixture(fixture: HostFixture) -> Self {
        let host = Self {
            schemas: fixture.schemas.into_iter().map(|s| (s.alias.clone(), s)).collect(),
            content: fixture.content.into_iter().map(|c| (c.id, c)).collect(),
            content_types: fixture.content_types,
            data_types: fixture.data_types,
            property_editors: fixture
                .property_editors
                .into_iter()
                .map(|e| (e.alias.clone(), e))
                .collect(),
            current_page_id: fixture.current_page_id,
            failing_schemas: fixture.failing_schemas.into_iter().collect(),
        };

        log_success!(codes::success::HOST_LOADED, "In-memory host loaded",
            "schemas" => host.schemas.len(),
            "content" => host.content.len(),
            "content_types" => host.content_types.len(),
            "data_types" => host.data_types.len());

        host
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HostError> {
        Ok(Self::from_fixture(HostFixture::load(path)?))
    }

    pub fn with_schema(mut self, schema: SchemaDefinition) -> Self {
        self.schemas.insert(schema.alias.clone(), schema);
        self
    }

    pub fn with_content(mut self, reference: ContentReference) -> Self {
        self.content.insert(reference.id, reference);
        self
    }

    pub fn with_content_type(mut self, record: ContentTypeRecord) -> Self {
        self.content_types.push(record);
        self
    }

    pub fn with_data_type(mut self, definition: DataTypeDefinition) -> Self {
        self.data_types.push(definition);
        self
    }

    pub fn with_property_editor(mut self, editor: PropertyEditorRecord) -> Self {
        self.property_editors.insert(editor.alias.clone(), editor);
        self
    }

    pub fn with_current_page(mut self, id: Option<ContentId>) -> Self {
        self.current_page_id = id;
        self
    }

    pub fn with_failing_schema(mut self, alias: impl Into<String>) -> Self {
        self.failing_schemas.insert(alias.into());
        self
    }
}

impl SchemaResolver for InMemoryHost {
    fn resolve_schema(&self, alias: &str) -> CollaboratorResult<Option<SchemaDefinition>> {
        if self.failing_schemas.contains(alias) {
            return Err(CollaboratorError::SchemaLookup {
                alias: alias.to_string(),
                reason: "schema store unavailable".to_string(),
            });
        }
        Ok(self.schemas.get(alias).cloned())
    }
}

impl ContentReferenceResolver for InMemoryHost {
    fn resolve_content_reference(&self, id: ContentId) -> CollaboratorResult<Option<ContentReference>> {
        Ok(self.content.get(&id).cloned())
    }
}

impl RichTextConverter for InMemoryHost {
    fn convert_rich_text(&self, request: &RichTextRequest<'_>) -> CollaboratorResult<RenderableNode> {
        Ok(RenderableNode::new(request.markup))
    }
}

impl OwnerContextProvider for InMemoryHost {
    fn current_owner_context_id(&self) -> Option<ContentId> {
        self.current_page_id
    }
}

impl HostServices for InMemoryHost {
    fn content_types(&self) -> Vec<ContentTypeRecord> {
        self.content_types.clone()
    }

    fn data_type_by_id(&self, id: ContentId) -> Option<DataTypeDefinition> {
        self.data_types.iter().find(|d| d.id == id).cloned()
    }

    fn data_type_by_guid(&self, guid: Uuid) -> Option<DataTypeDefinition> {
        self.data_types.iter().find(|d| d.guid == guid).cloned()
    }

    fn pre_values(&self, data_type_id: ContentId) -> BTreeMap<String, String> {
        self.data_types
            .iter()
            .find(|d| d.id == data_type_id)
            .map(|d| d.pre_values.clone())
            .unwrap_or_default()
    }

    fn property_editor(&self, alias: &str) -> Option<PropertyEditorRecord> {
        self.property_editors.get(alias).cloned()
    }
}
