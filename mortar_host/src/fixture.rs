//! JSON fixture describing everything an [`InMemoryHost`](crate::InMemoryHost) serves

use crate::services::{ContentTypeRecord, DataTypeDefinition, PropertyEditorRecord};
use mortar_engine::logging::{codes, Code};
use mortar_engine::{ContentId, ContentReference, SchemaDefinition};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostFixture {
    pub schemas: Vec<SchemaDefinition>,
    pub content: Vec<ContentReference>,
    pub content_types: Vec<ContentTypeRecord>,
    pub data_types: Vec<DataTypeDefinition>,
    pub property_editors: Vec<PropertyEditorRecord>,
    pub current_page_id: Option<ContentId>,
    /// Schema aliases whose lookup fails instead of answering
    pub failing_schemas: Vec<String>,
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Failed to read host fixture '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid host fixture: {0}")]
    InvalidFixture(#[from] serde_json::Error),
}

impl HostError {
    pub fn code(&self) -> Code {
        match self {
            HostError::Io { .. } => codes::system::INTERNAL_ERROR,
            HostError::InvalidFixture(_) => codes::api::HOST_FIXTURE_INVALID,
        }
    }
}

impl HostFixture {
    pub fn from_json_str(json: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HostError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| HostError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}
