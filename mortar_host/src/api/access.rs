//! Back-office access checks

use super::errors::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackofficeUser {
    pub name: String,
    pub approved: bool,
}

impl BackofficeUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            approved: true,
        }
    }

    /// The operator running local tooling
    pub fn local_operator() -> Self {
        Self::new("local-operator")
    }
}

pub trait AccessGuard: Send + Sync {
    fn authorize(&self, user: Option<&BackofficeUser>) -> ApiResult<()>;
}

/// Admits any approved, authenticated user
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthenticatedUserGuard;

impl AccessGuard for AuthenticatedUserGuard {
    fn authorize(&self, user: Option<&BackofficeUser>) -> ApiResult<()> {
        match user {
            None => Err(ApiError::Unauthorized {
                reason: "no authenticated user".to_string(),
            }),
            Some(user) if !user.approved => Err(ApiError::Unauthorized {
                reason: format!("user '{}' is not approved", user.name),
            }),
            Some(_) => Ok(()),
        }
    }
}
