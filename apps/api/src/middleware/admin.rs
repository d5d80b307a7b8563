//! Admin identity derivation for GraphQL requests
//!
//! The caller claims an identity through the `x-user-email` header; the caller
//! is the admin when that value equals the configured admin address exactly.
//! Nothing is verified cryptographically: any client that can set the header
//! can claim to be the admin.
//!
//! # Usage
//!
//! ```rust,ignore
//! async fn handler(caller: CallerContext) -> impl IntoResponse {
//!     if caller.is_admin { "admin" } else { "guest" }
//! }
//! ```

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderMap},
};

use crate::models::CallerContext;

/// Header carrying the caller-claimed email
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// The configured admin address, shared by every request
#[derive(Debug, Clone, Default)]
pub struct AdminIdentity {
    admin_email: Option<Arc<str>>,
}

impl AdminIdentity {
    /// Create an identity matcher; `None` means no caller is ever admin
    pub fn new(admin_email: Option<String>) -> Self {
        Self {
            admin_email: admin_email.map(Arc::from),
        }
    }

    /// Whether an admin address is configured
    pub fn is_configured(&self) -> bool {
        self.admin_email.is_some()
    }

    /// Derive the caller context from request headers
    pub fn caller_context(&self, headers: &HeaderMap) -> CallerContext {
        let email = extract_user_email(headers);
        let is_admin = match (&self.admin_email, &email) {
            (Some(admin), Some(claimed)) => admin.as_ref() == claimed.as_str(),
            _ => false,
        };

        CallerContext { email, is_admin }
    }
}

/// Extract the claimed email; non-ASCII header values are treated as absent
fn extract_user_email(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_EMAIL_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|s| s.to_string())
}

impl<S> FromRequestParts<S> for CallerContext
where
    S: Send + Sync,
    AdminIdentity: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let identity = AdminIdentity::from_ref(state);
        let caller = identity.caller_context(&parts.headers);
        if caller.is_admin {
            tracing::debug!("Request carries admin identity");
        }
        Ok(caller)
    }
}
