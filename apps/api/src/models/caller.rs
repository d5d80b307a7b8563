//! Per-request caller context
//!
//! Built once per GraphQL request from the `x-user-email` header and injected
//! into the async-graphql request data. Mutations consult `is_admin`.

/// Identity claimed by the caller and the admin decision derived from it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerContext {
    /// Caller-claimed email from the request header, if any
    pub email: Option<String>,

    /// Whether the claimed email equals the configured admin address
    pub is_admin: bool,
}

impl CallerContext {
    /// Context for a caller that supplied no identity
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for a caller whose claimed identity matched the admin address
    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            is_admin: true,
        }
    }

    /// Context for a caller with a non-admin claimed identity
    pub fn user(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            is_admin: false,
        }
    }
}
