//! # Mortar host
//!
//! A reference host for the Mortar conversion engine: every collaborator the
//! engine needs, served from an in-memory fixture, plus the back-office API
//! the grid editor talks to.

pub mod api;
pub mod fixture;
pub mod host;
pub mod services;

// Convenience re-exports
pub use fixture::{HostError, HostFixture};
pub use host::InMemoryHost;
pub use services::HostServices;

pub mod prelude {
    pub use crate::api::{
        AccessGuard, ApiError, ApiResult, AuthenticatedUserGuard, BackofficeUser,
        ContentTypeSummary, MortarApi,
    };

    pub use crate::fixture::{HostError, HostFixture};
    pub use crate::host::InMemoryHost;
    pub use crate::services::{
        ContentTypeRecord, DataTypeDefinition, HostServices, PropertyEditorRecord,
    };

    pub use mortar_engine::{
        convert, try_convert, Document, MortarValueConverter, ResolutionContext, Value,
    };
}
