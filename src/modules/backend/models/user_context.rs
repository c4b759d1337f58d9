use std::fmt;

/// The signed-in dashboard user, passed explicitly into every fetch
#[derive(Clone, PartialEq, Eq)]
pub struct UserContext {
    /// Bearer token forwarded to the upstream backend
    pub token: String,
    pub user_id: Option<String>,
}

impl UserContext {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: None,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

// Token stays out of logs
impl fmt::Debug for UserContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserContext")
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}
