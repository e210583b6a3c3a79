use serde::{Deserialize, Serialize};

use crate::model::ids::UserId;
use crate::model::role::Role;

/// Profile document keyed by the auth identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserProfile {
    #[must_use]
    pub fn new(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            email: None,
            role: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    #[must_use]
    pub fn resolved_role(&self) -> Role {
        Role::from_profile_field(self.role.as_deref())
    }
}

/// Signed-in identity as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    user_id: UserId,
    email: Option<String>,
}

impl Identity {
    #[must_use]
    pub fn new(user_id: UserId, email: Option<String>) -> Self {
        Self { user_id, email }
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Identity plus its resolved role. Replaced as a whole, never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    identity: Identity,
    role: Role,
}

impl Viewer {
    #[must_use]
    pub fn new(identity: Identity, role: Role) -> Self {
        Self { identity, role }
    }

    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}
