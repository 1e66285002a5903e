//! Request context passed through guardrail evaluation

use serde::{Deserialize, Serialize};

/// Identity and tenancy of the session issuing an operation
///
/// Configuration providers may key on any of these fields. The threshold
/// evaluator treats the state as opaque.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientState {
    /// Authenticated user, if any
    pub user: Option<String>,
    /// Keyspace the session is bound to, if any
    pub keyspace: Option<String>,
    /// Operation issued by the system itself
    pub is_internal: bool,
    /// Session authenticated as a superuser
    pub is_super_user: bool,
}

impl ClientState {
    /// State for an ordinary user
    pub fn for_user<S: Into<String>>(user: S) -> Self {
        Self {
            user: Some(user.into()),
            ..Default::default()
        }
    }

    /// State for operations issued internally
    pub fn internal() -> Self {
        Self {
            is_internal: true,
            ..Default::default()
        }
    }

    /// Set the keyspace
    pub fn with_keyspace<S: Into<String>>(mut self, keyspace: S) -> Self {
        self.keyspace = Some(keyspace.into());
        self
    }

    /// Mark the session as superuser
    pub fn with_super_user(mut self, is_super_user: bool) -> Self {
        self.is_super_user = is_super_user;
        self
    }

    /// Whether guardrails apply to this session
    ///
    /// Internal operations and superusers bypass guardrails.
    pub fn is_ordinary_user(&self) -> bool {
        !self.is_internal && !self.is_super_user
    }
}
