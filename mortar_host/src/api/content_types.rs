use super::errors::{ApiError, ApiResult};
use crate::services::{ContentTypeRecord, HostServices};
use mortar_engine::ContentId;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

/// Content type as shown to the grid editor's picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentTypeSummary {
    pub id: ContentId,
    pub guid: Uuid,
    pub name: String,
    pub alias: String,
    pub icon: String,
}

impl From<ContentTypeRecord> for ContentTypeSummary {
    fn from(record: ContentTypeRecord) -> Self {
        Self {
            id: record.id,
            guid: record.guid,
            name: record.name,
            alias: record.alias,
            icon: record.icon,
        }
    }
}

fn compile_patterns(patterns: &[String]) -> ApiResult<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| ApiError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Content types whose alias matches any pattern (all of them when no
/// patterns are given), in sort order
pub(crate) fn list(
    services: &dyn HostServices,
    allowed_patterns: &[String],
) -> ApiResult<Vec<ContentTypeSummary>> {
    let filters = compile_patterns(allowed_patterns)?;

    let mut matching: Vec<ContentTypeRecord> = services
        .content_types()
        .into_iter()
        .filter(|ct| filters.is_empty() || filters.iter().any(|re| re.is_match(&ct.alias)))
        .collect();
    matching.sort_by_key(|ct| ct.sort_order);

    Ok(matching.into_iter().map(ContentTypeSummary::from).collect())
}
