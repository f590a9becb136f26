//! # Back-office API
//!
//! Endpoints the grid editor calls while authoring: the content types it may
//! embed and the configuration of a data type's editor.

pub mod access;
pub mod content_types;
pub mod errors;
pub mod pre_values;

pub use access::{AccessGuard, AuthenticatedUserGuard, BackofficeUser};
pub use content_types::ContentTypeSummary;
pub use errors::{ApiError, ApiResult};
pub use pre_values::DataTypeKey;

use crate::services::HostServices;
use mortar_engine::logging::codes;
use mortar_engine::{log_error, log_success};
use serde_json::{Map, Value as JsonValue};

pub struct MortarApi<'a> {
    services: &'a dyn HostServices,
    guard: &'a dyn AccessGuard,
}

impl<'a> MortarApi<'a> {
    pub fn new(services: &'a dyn HostServices, guard: &'a dyn AccessGuard) -> Self {
        Self { services, guard }
    }

    fn authorize(&self, user: Option<&BackofficeUser>) -> ApiResult<()> {
        self.guard.authorize(user).map_err(|e| {
            log_error!(e.code(), "Back-office request rejected", "error" => &e);
            e
        })
    }

    /// Content types whose alias matches any of `allowed_patterns`
    pub fn get_content_types(
        &self,
        user: Option<&BackofficeUser>,
        allowed_patterns: &[String],
    ) -> ApiResult<Vec<ContentTypeSummary>> {
        self.authorize(user)?;

        let listed = content_types::list(self.services, allowed_patterns)?;
        log_success!(codes::success::CONTENT_TYPES_LISTED, "Content types listed",
            "patterns" => allowed_patterns.len(),
            "count" => listed.len());

        Ok(listed)
    }

    /// Editor configuration for a data type given by numeric id or GUID.
    ///
    /// `Ok(None)` when the id is neither or names no data type.
    pub fn get_data_type_pre_values(
        &self,
        user: Option<&BackofficeUser>,
        dtd_id: &str,
    ) -> ApiResult<Option<Map<String, JsonValue>>> {
        self.authorize(user)?;

        let config = pre_values::lookup(self.services, dtd_id)?;
        if let Some(config) = &config {
            log_success!(codes::success::PRE_VALUES_RESOLVED, "Pre-values resolved",
                "data_type" => dtd_id,
                "keys" => config.len());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ContentTypeRecord, DataTypeDefinition, PropertyEditorRecord};
    use crate::InMemoryHost;
    use assert_matches::assert_matches;
    use serde_json::json;
    use std::collections::BTreeMap;
    use uuid::Uuid;

    const TEXTBOX_GUID: &str = "0cc0eba1-9960-42c9-bf9b-60e150b429ae";

    fn content_type(id: i32, alias: &str, sort_order: i32) -> ContentTypeRecord {
        ContentTypeRecord {
            id,
            guid: Uuid::new_v4(),
            name: alias.to_uppercase(),
            alias: alias.to_string(),
            icon: format!("icon-{}", alias),
            sort_order,
        }
    }

    fn host() -> InMemoryHost {
        let mut stored = BTreeMap::new();
        stored.insert("maxChars".to_string(), "80".to_string());

        let defaults = match json!({"maxChars": 0, "placeholder": ""}) {
            JsonValue::Object(map) => map,
            _ => unreachable!(),
        };

        InMemoryHost::new()
            .with_content_type(content_type(1, "newsArticle", 3))
            .with_content_type(content_type(2, "gridBanner", 1))
            .with_content_type(content_type(3, "gridQuote", 2))
            .with_content_type(content_type(4, "homePage", 0))
            .with_data_type(DataTypeDefinition {
                id: 1040,
                guid: Uuid::parse_str(TEXTBOX_GUID).unwrap(),
                name: "Textstring".to_string(),
                property_editor_alias: "Umbraco.Textbox".to_string(),
                pre_values: stored,
            })
            .with_data_type(DataTypeDefinition {
                id: 1041,
                guid: Uuid::new_v4(),
                name: "Orphan".to_string(),
                property_editor_alias: "Legacy.Editor".to_string(),
                pre_values: BTreeMap::new(),
            })
            .with_property_editor(PropertyEditorRecord {
                alias: "Umbraco.Textbox".to_string(),
                default_pre_values: defaults,
            })
    }

    fn aliases(listed: &[ContentTypeSummary]) -> Vec<&str> {
        listed.iter().map(|ct| ct.alias.as_str()).collect()
    }

    #[test]
    fn test_content_types_sorted_and_unfiltered() {
        let host = host();
        let api = MortarApi::new(&host, &AuthenticatedUserGuard);
        let user = BackofficeUser::new("editor");

        let listed = api.get_content_types(Some(&user), &[]).unwrap();
        assert_eq!(aliases(&listed), vec!["homePage", "gridBanner", "gridQuote", "newsArticle"]);
        assert_eq!(listed[0].icon, "icon-homePage");
    }

    #[test]
    fn test_content_types_regex_filter() {
        let host = host();
        let api = MortarApi::new(&host, &AuthenticatedUserGuard);
        let user = BackofficeUser::new("editor");

        let grid_only = api.get_content_types(Some(&user), &["^grid".to_string()]).unwrap();
        assert_eq!(aliases(&grid_only), vec!["gridBanner", "gridQuote"]);

        let unanchored = api
            .get_content_types(Some(&user), &["Article".to_string(), "Quote$".to_string()])
            .unwrap();
        assert_eq!(aliases(&unanchored), vec!["gridQuote", "newsArticle"]);

        let err = api.get_content_types(Some(&user), &["[".to_string()]).unwrap_err();
        assert_matches!(err, ApiError::InvalidPattern { ref pattern, .. } if pattern == "[");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_requests_require_an_approved_user() {
        let host = host();
        let api = MortarApi::new(&host, &AuthenticatedUserGuard);

        assert_matches!(api.get_content_types(None, &[]), Err(ApiError::Unauthorized { .. }));
        assert_matches!(
            api.get_data_type_pre_values(None, "1040"),
            Err(ApiError::Unauthorized { .. })
        );
    }

    #[test]
    fn test_pre_values_by_int_and_guid() {
        let host = host();
        let api = MortarApi::new(&host, &AuthenticatedUserGuard);
        let user = BackofficeUser::new("editor");

        let by_id = api.get_data_type_pre_values(Some(&user), "1040").unwrap().unwrap();
        assert_eq!(by_id["maxChars"], json!("80"));
        assert_eq!(by_id["placeholder"], json!(""));

        let by_guid = api.get_data_type_pre_values(Some(&user), TEXTBOX_GUID).unwrap();
        assert_eq!(by_guid, Some(by_id));
    }

    #[test]
    fn test_pre_values_for_unknown_ids() {
        let host = host();
        let api = MortarApi::new(&host, &AuthenticatedUserGuard);
        let user = BackofficeUser::new("editor");

        assert_matches!(api.get_data_type_pre_values(Some(&user), "garbage"), Ok(None));
        assert_matches!(api.get_data_type_pre_values(Some(&user), "9999"), Ok(None));
        assert_matches!(
            api.get_data_type_pre_values(Some(&user), &Uuid::new_v4().to_string()),
            Ok(None)
        );
        let err = api.get_data_type_pre_values(Some(&user), "1041").unwrap_err();
        assert_matches!(err, ApiError::MissingPropertyEditor { data_type_id: 1041, .. });
        assert!(!err.is_client_error());
    }
}
