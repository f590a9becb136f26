//! Error types for parsing and conversion

use crate::collaborators::CollaboratorError;
use crate::logging::{codes, Code};
use thiserror::Error;

/// The stored value could not be turned into a document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed stored value: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Stored value is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },
}

impl ParseError {
    pub fn code(&self) -> Code {
        match self {
            ParseError::MalformedJson(_) => codes::parsing::MALFORMED_JSON,
            ParseError::TooLarge { .. } => codes::parsing::STORED_VALUE_TOO_LARGE,
        }
    }
}

/// Anything that aborts conversion of a whole document
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Collaborator failure: {0}")]
    Collaborator(#[from] CollaboratorError),

    #[error("Malformed payload for '{item_type}' item: {reason}")]
    MalformedPayload { item_type: String, reason: String },
}

impl ConversionError {
    pub fn malformed_payload(item_type: &str, reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            item_type: item_type.to_string(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> Code {
        match self {
            ConversionError::Parse(e) => e.code(),
            ConversionError::Collaborator(e) => e.code(),
            ConversionError::MalformedPayload { .. } => codes::resolution::MALFORMED_PAYLOAD,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, ConversionError::Parse(_))
    }
}

pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let parse = ConversionError::from(ParseError::TooLarge { size: 10, limit: 5 });
        assert!(parse.is_parse_error());
        assert_eq!(parse.code(), codes::parsing::STORED_VALUE_TOO_LARGE);

        let payload = ConversionError::malformed_payload("doctype", "expected an object");
        assert!(!payload.is_parse_error());
        assert_eq!(payload.code(), codes::resolution::MALFORMED_PAYLOAD);
        assert_eq!(
            payload.to_string(),
            "Malformed payload for 'doctype' item: expected an object"
        );
    }

    #[test]
    fn test_collaborator_errors_convert() {
        let err: ConversionError = CollaboratorError::RichText {
            reason: "renderer crashed".into(),
        }
        .into();
        assert_eq!(err.code(), codes::collaborator::RICH_TEXT_CONVERSION_FAILED);
    }
}
