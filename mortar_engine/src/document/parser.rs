//! Stored value parser

use super::Document;
use crate::config::compile_time::parsing::{
    MAX_ITEMS_PER_ROW, MAX_ROWS_PER_ZONE, MAX_STORED_VALUE_SIZE, MAX_ZONES,
};
use crate::error::ParseError;
use crate::logging::codes;
use crate::{log_success, log_warning};

/// A zone, row or item count above the configured threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitExcess {
    pub what: &'static str,
    pub count: usize,
    pub limit: usize,
}

/// Parse a stored grid value
///
/// Absent, blank and `{}` values carry no content and yield `Ok(None)`.
/// Malformed JSON and values over the size limit are errors. Oversized
/// structures are logged but still parsed.
pub fn parse(raw: Option<&str>) -> Result<Option<Document>, ParseError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "{}" {
        return Ok(None);
    }

    if trimmed.len() > MAX_STORED_VALUE_SIZE {
        return Err(ParseError::TooLarge {
            size: trimmed.len(),
            limit: MAX_STORED_VALUE_SIZE,
        });
    }

    let document: Document = serde_json::from_str(trimmed)?;

    for excess in limit_excesses(&document) {
        log_warning!(code = codes::parsing::STRUCTURE_LIMIT_EXCEEDED, "Stored value exceeds structure limit",
            "what" => excess.what,
            "count" => excess.count,
            "limit" => excess.limit);
    }

    log_success!(
        codes::success::DOCUMENT_PARSED,
        "Stored value parsed",
        "zones" => document.zones().len(),
        "rows" => document.row_count(),
        "items" => document.item_count()
    );

    Ok(Some(document))
}

/// Every zone, row and item count above its threshold
pub fn limit_excesses(document: &Document) -> Vec<LimitExcess> {
    let mut excesses = Vec::new();
    check("zone", document.zones().len(), MAX_ZONES, &mut excesses);

    for zone in document.zones() {
        check("row", zone.rows.len(), MAX_ROWS_PER_ZONE, &mut excesses);
        for row in &zone.rows {
            check("item", row.items.len(), MAX_ITEMS_PER_ROW, &mut excesses);
        }
    }

    excesses
}

fn check(what: &'static str, count: usize, limit: usize, excesses: &mut Vec<LimitExcess>) {
    if count > limit {
        excesses.push(LimitExcess { what, count, limit });
    }
}
