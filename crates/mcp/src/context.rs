// Per-call context handed to every tool

/// Caller identity, when the transport supplies one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthInfo {
    pub user_id: Option<String>,
}

/// Context for a single tool invocation
///
/// The stdio transport carries no identity, so `auth` is always `None` today.
/// Tools receive it anyway so access checks can be added without changing
/// the `Tool` signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub auth: Option<AuthInfo>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_user(user_id: impl Into<String>) -> Self {
        Self {
            auth: Some(AuthInfo {
                user_id: Some(user_id.into()),
            }),
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.auth.as_ref().and_then(|a| a.user_id.as_deref())
    }
}
