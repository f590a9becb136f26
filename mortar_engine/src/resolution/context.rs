//! Per-call resolution context: owner page, preview flag and host collaborators

use crate::collaborators::{
    ContentId, ContentReferenceResolver, ConversionHost, RichTextConverter, SchemaResolver,
};

/// Everything an item needs to resolve: the page being rendered, the preview
/// flag and the host collaborators
#[derive(Clone, Copy)]
pub struct ResolutionContext<'a> {
    pub owner_context_id: ContentId,
    pub preview: bool,
    pub schemas: &'a dyn SchemaResolver,
    pub content: &'a dyn ContentReferenceResolver,
    pub rich_text: &'a dyn RichTextConverter,
    report_misses: bool,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(
        owner_context_id: ContentId,
        preview: bool,
        schemas: &'a dyn SchemaResolver,
        content: &'a dyn ContentReferenceResolver,
        rich_text: &'a dyn RichTextConverter,
    ) -> Self {
        Self {
            owner_context_id,
            preview,
            schemas,
            content,
            rich_text,
            report_misses: false,
        }
    }

    /// Context backed by a single host providing every collaborator
    pub fn from_host<H: ConversionHost>(host: &'a H, owner_context_id: ContentId, preview: bool) -> Self {
        Self::new(owner_context_id, preview, host, host, host)
    }

    /// Report resolution misses as warnings instead of debug events
    pub fn with_miss_reporting(mut self, enabled: bool) -> Self {
        self.report_misses = enabled;
        self
    }

    pub fn reports_misses(&self) -> bool {
        self.report_misses
    }
}

impl std::fmt::Debug for ResolutionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionContext")
            .field("owner_context_id", &self.owner_context_id)
            .field("preview", &self.preview)
            .field("report_misses", &self.report_misses)
            .finish_non_exhaustive()
    }
}
