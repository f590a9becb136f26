//! # Back-office API errors

use mortar_engine::logging::{codes, Code};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No authenticated, approved back-office user
    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    /// A content-type filter is not a valid regular expression
    #[error("Invalid content type pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A data type names a property editor the host does not know
    #[error("Data type {data_type_id} uses unknown property editor '{alias}'")]
    MissingPropertyEditor { data_type_id: i32, alias: String },
}

impl ApiError {
    pub fn code(&self) -> Code {
        match self {
            ApiError::Unauthorized { .. } => codes::api::ACCESS_DENIED,
            ApiError::InvalidPattern { .. } => codes::api::INVALID_PATTERN,
            ApiError::MissingPropertyEditor { .. } => codes::api::MISSING_PROPERTY_EDITOR,
        }
    }

    /// Caller mistakes as opposed to host misconfiguration
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized { .. } | ApiError::InvalidPattern { .. }
        )
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
