//! Consolidated log codes and classification system
//!
//! Single source of truth for all codes and their metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for error, warning and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
}

impl CodeMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Stored value parsing codes
pub mod parsing {
    use super::Code;

    pub const MALFORMED_JSON: Code = Code::new("E010");
    pub const STORED_VALUE_TOO_LARGE: Code = Code::new("E011");

    // Oversized structures still convert
    pub const STRUCTURE_LIMIT_EXCEEDED: Code = Code::new("W010");
}

/// Item resolution codes
pub mod resolution {
    use super::Code;

    pub const MALFORMED_PAYLOAD: Code = Code::new("E020");

    // Misses are warnings: the item renders empty, siblings continue
    pub const UNKNOWN_SCHEMA: Code = Code::new("W020");
    pub const MISSING_DOCTYPE_ALIAS: Code = Code::new("W021");
    pub const MALFORMED_LINK_ID: Code = Code::new("W022");
    pub const CONTENT_NOT_FOUND: Code = Code::new("W023");
    pub const UNSUPPORTED_ITEM_TYPE: Code = Code::new("W024");
    pub const SCHEMA_TOO_LARGE: Code = Code::new("W025");
}

/// Host collaborator codes
pub mod collaborator {
    use super::Code;

    pub const SCHEMA_LOOKUP_FAILED: Code = Code::new("E030");
    pub const CONTENT_LOOKUP_FAILED: Code = Code::new("E031");
    pub const RICH_TEXT_CONVERSION_FAILED: Code = Code::new("E032");
}

/// Peripheral API codes
pub mod api {
    use super::Code;

    pub const ACCESS_DENIED: Code = Code::new("E040");
    pub const INVALID_PATTERN: Code = Code::new("E041");
    pub const MISSING_PROPERTY_EDITOR: Code = Code::new("E042");
    pub const HOST_FIXTURE_INVALID: Code = Code::new("E043");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const DOCUMENT_PARSED: Code = Code::new("I010");
    pub const DOCUMENT_CONVERTED: Code = Code::new("I011");
    pub const CONTENT_TYPES_LISTED: Code = Code::new("I020");
    pub const PRE_VALUES_RESOLVED: Code = Code::new("I021");
    pub const HOST_LOADED: Code = Code::new("I022");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static METADATA: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, CodeMetadata> {
    METADATA.get_or_init(|| {
        use Severity::*;

        let entries = [
            CodeMetadata::new("ERR001", "System", Critical, false, "Internal engine error"),
            CodeMetadata::new("ERR002", "System", Critical, false, "Logging initialization failed"),
            CodeMetadata::new("E010", "Parsing", High, true, "Stored value is not valid grid JSON"),
            CodeMetadata::new("E011", "Parsing", High, true, "Stored value exceeds size limit"),
            CodeMetadata::new("W010", "Parsing", Medium, true, "Zone, row or item count exceeds limit"),
            CodeMetadata::new("E020", "Resolution", High, true, "Item payload has the wrong JSON shape"),
            CodeMetadata::new("W020", "Resolution", Low, true, "Schema alias is unknown to the host"),
            CodeMetadata::new("W021", "Resolution", Low, true, "Nested item has no docType alias"),
            CodeMetadata::new("W022", "Resolution", Low, true, "Link value is not a numeric content id"),
            CodeMetadata::new("W023", "Resolution", Low, true, "Linked content was not found"),
            CodeMetadata::new("W024", "Resolution", Low, true, "Item type is not recognized"),
            CodeMetadata::new("W025", "Resolution", Medium, true, "Schema declares too many properties"),
            CodeMetadata::new("E030", "Collaborator", High, true, "Schema resolver raised an error"),
            CodeMetadata::new("E031", "Collaborator", High, true, "Content resolver raised an error"),
            CodeMetadata::new("E032", "Collaborator", High, true, "Rich text converter raised an error"),
            CodeMetadata::new("E040", "Api", Medium, true, "Caller is not an authorized backoffice user"),
            CodeMetadata::new("E041", "Api", Medium, true, "Content type filter is not a valid regex"),
            CodeMetadata::new("E042", "Api", Medium, true, "Data type references an unknown property editor"),
            CodeMetadata::new("E043", "Api", High, true, "Host fixture could not be loaded"),
            CodeMetadata::new("I001", "System", Low, true, "Logging system initialized"),
            CodeMetadata::new("I010", "Parsing", Low, true, "Stored value parsed"),
            CodeMetadata::new("I011", "Resolution", Low, true, "Document converted"),
            CodeMetadata::new("I020", "Api", Low, true, "Content types listed"),
            CodeMetadata::new("I021", "Api", Low, true, "Data type pre-values resolved"),
            CodeMetadata::new("I022", "Api", Low, true, "Host fixture loaded"),
        ];

        entries.into_iter().map(|m| (m.code, m)).collect()
    })
}

/// Look up metadata for a code
pub fn get_metadata(code: &str) -> Option<&'static CodeMetadata> {
    registry().get(code)
}

pub fn get_description(code: &str) -> &'static str {
    get_metadata(code).map(|m| m.description).unwrap_or("Unknown code")
}

pub fn get_category(code: &str) -> &'static str {
    get_metadata(code).map(|m| m.category).unwrap_or("General")
}

pub fn get_severity(code: &str) -> Severity {
    get_metadata(code).map(|m| m.severity).unwrap_or(Severity::Low)
}

pub fn is_recoverable(code: &str) -> bool {
    get_metadata(code).map(|m| m.recoverable).unwrap_or(true)
}
