//! `link` items: a numeric content id resolved to a reference

use super::{source_string, ItemOutcome, MissReason, ResolutionContext};
use crate::collaborators::ContentId;
use crate::error::ConversionResult;
use crate::nodes::Value;
use serde_json::Value as JsonValue;

pub(crate) fn resolve(raw: &JsonValue, ctx: &ResolutionContext<'_>) -> ConversionResult<ItemOutcome> {
    let Some(id) = parse_content_id(raw) else {
        return Ok(ItemOutcome::Missed(MissReason::MalformedLinkId));
    };

    Ok(match ctx.content.resolve_content_reference(id)? {
        Some(reference) => ItemOutcome::Resolved(Value::ContentReference(reference)),
        None => ItemOutcome::Missed(MissReason::ContentNotFound),
    })
}

/// Trimmed string form parsed as a 32-bit id
fn parse_content_id(raw: &JsonValue) -> Option<ContentId> {
    source_string(raw).trim().parse().ok()
}
