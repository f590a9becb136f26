//! Conversion driver and the host-pipeline value converter

use crate::collaborators::ConversionHost;
use crate::config::runtime::ConversionPreferences;
use crate::document::{self, Document};
use crate::error::ConversionResult;
use crate::logging::codes;
use crate::resolution::{self, ItemOutcome, MissReason, ResolutionContext};
use crate::{log_debug, log_error, log_success};
use std::collections::BTreeMap;

/// Property editor alias this converter claims
pub const EDITOR_ALIAS: &str = "Our.Umbraco.Mortar";

/// Counts gathered while resolving one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub zones: usize,
    pub rows: usize,
    pub items: usize,
    pub resolved: usize,
    pub misses: BTreeMap<MissReason, usize>,
}

impl ConversionStats {
    pub fn missed(&self) -> usize {
        self.misses.values().sum()
    }

    pub fn misses_for(&self, reason: MissReason) -> usize {
        self.misses.get(&reason).copied().unwrap_or(0)
    }

    fn record(&mut self, outcome: &ItemOutcome) {
        self.items += 1;
        match outcome.miss_reason() {
            Some(reason) => *self.misses.entry(reason).or_insert(0) += 1,
            None => self.resolved += 1,
        }
    }
}

/// Parse and resolve a stored value; any failure is logged and yields `None`
pub fn convert(raw: Option<&str>, ctx: &ResolutionContext<'_>) -> Option<Document> {
    match try_convert(raw, ctx) {
        Ok(document) => document,
        Err(e) => {
            log_error!(e.code(), "Conversion failed; document discarded",
                "error" => e,
                "owner_context_id" => ctx.owner_context_id);
            None
        }
    }
}

/// Parse and resolve a stored value, surfacing the first error
pub fn try_convert(raw: Option<&str>, ctx: &ResolutionContext<'_>) -> ConversionResult<Option<Document>> {
    let Some(mut document) = document::parse(raw)? else {
        log_debug!("Stored value has no content");
        return Ok(None);
    };

    let stats = resolve_document(&mut document, ctx)?;

    log_success!(codes::success::DOCUMENT_CONVERTED, "Document converted",
        "zones" => stats.zones,
        "rows" => stats.rows,
        "items" => stats.items,
        "resolved" => stats.resolved,
        "missed" => stats.missed());

    Ok(Some(document))
}

/// Resolve every item in zone, row, item order
pub fn resolve_document(document: &mut Document, ctx: &ResolutionContext<'_>) -> ConversionResult<ConversionStats> {
    let mut stats = ConversionStats::default();

    for zone in document.zones_mut() {
        stats.zones += 1;
        for row in &mut zone.rows {
            stats.rows += 1;
            for item in &mut row.items {
                let outcome = resolution::resolve_outcome(item, ctx)?;
                stats.record(&outcome);
                item.value = outcome.into_value();
            }
        }
    }

    Ok(stats)
}

/// Adapter the host's property-value pipeline calls for Mortar properties
pub struct MortarValueConverter<H> {
    host: H,
    preferences: ConversionPreferences,
}

impl<H: ConversionHost> MortarValueConverter<H> {
    pub fn new(host: H) -> Self {
        Self::with_preferences(host, ConversionPreferences::default())
    }

    pub fn with_preferences(host: H, preferences: ConversionPreferences) -> Self {
        Self { host, preferences }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn preferences(&self) -> &ConversionPreferences {
        &self.preferences
    }

    pub fn is_converter(&self, editor_alias: &str) -> bool {
        editor_alias == EDITOR_ALIAS
    }

    /// Context for the page currently being rendered
    pub fn context(&self, preview: bool) -> ResolutionContext<'_> {
        let owner = self
            .host
            .current_owner_context_id()
            .unwrap_or(self.preferences.fallback_owner_context_id);

        ResolutionContext::from_host(&self.host, owner, preview)
            .with_miss_reporting(self.preferences.log_resolution_misses)
    }

    pub fn convert_data_to_source(&self, source: Option<&str>, preview: bool) -> Option<Document> {
        convert(source, &self.context(preview))
    }

    pub fn try_convert_data_to_source(
        &self,
        source: Option<&str>,
        preview: bool,
    ) -> ConversionResult<Option<Document>> {
        try_convert(source, &self.context(preview))
    }
}
