use std::sync::Arc;

use quiz_core::model::{Role, UserId};
use storage::repository::ProfileRepository;

/// Looks up the role stored on a profile document.
#[derive(Clone)]
pub struct RoleGate {
    profiles: Arc<dyn ProfileRepository>,
}

impl RoleGate {
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Role of `user_id`. Never fails: a missing profile and a failed read
    /// both resolve to `Role::Regular`, the failure is logged.
    pub async fn resolve_role(&self, user_id: &UserId) -> Role {
        match self.profiles.get_profile(user_id).await {
            Ok(Some(profile)) => profile.resolved_role(),
            Ok(None) => {
                tracing::debug!(%user_id, "no profile document, using regular role");
                Role::Regular
            }
            Err(err) => {
                tracing::warn!(%user_id, error = %err, "role lookup failed, using regular role");
                Role::Regular
            }
        }
    }
}

/// Proof that a resolution was started for a given identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionTicket {
    user_id: UserId,
    generation: u64,
}

impl ResolutionTicket {
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// Per-view bookkeeping for role lookups.
///
/// One lookup per identity; a lookup that completes after the identity
/// changed is discarded.
#[derive(Debug, Default, Clone)]
pub struct RoleResolution {
    current: Option<UserId>,
    generation: u64,
    started: bool,
    role: Option<Role>,
}

impl RoleResolution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called whenever the observed identity may have changed. Returns a
    /// ticket if a lookup should be started now.
    pub fn begin(&mut self, identity: Option<&UserId>) -> Option<ResolutionTicket> {
        if self.current.as_ref() != identity {
            self.generation += 1;
            self.current = identity.cloned();
            self.started = false;
            self.role = None;
        }
        let user_id = self.current.clone()?;
        if self.started {
            return None;
        }
        self.started = true;
        Some(ResolutionTicket {
            user_id,
            generation: self.generation,
        })
    }

    /// Stores the looked-up role. Returns `false` for a stale ticket.
    pub fn apply(&mut self, ticket: &ResolutionTicket, role: Role) -> bool {
        if ticket.generation != self.generation || self.current.as_ref() != Some(&ticket.user_id) {
            tracing::debug!(user_id = %ticket.user_id, "dropping stale role lookup");
            return false;
        }
        self.role = Some(role);
        true
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.role.is_some()
    }

    /// Resolved role, or `Regular` while a lookup is pending.
    #[must_use]
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quiz_core::model::UserProfile;
    use storage::repository::{InMemoryRepository, StorageError};

    use crate::tab_router::TabRouter;

    fn uid(raw: &str) -> UserId {
        UserId::new(raw).unwrap()
    }

    struct FailingProfiles;

    #[async_trait]
    impl ProfileRepository for FailingProfiles {
        async fn get_profile(&self, _: &UserId) -> Result<Option<UserProfile>, StorageError> {
            Err(StorageError::PermissionDenied)
        }

        async fn upsert_profile(&self, _: &UserProfile) -> Result<(), StorageError> {
            Err(StorageError::PermissionDenied)
        }

        async fn list_profiles(&self, _: u32) -> Result<Vec<UserProfile>, StorageError> {
            Err(StorageError::PermissionDenied)
        }
    }

    #[tokio::test]
    async fn resolves_roles_from_profile_documents() {
        let repo = InMemoryRepository::new();
        repo.upsert_profile(&UserProfile::new(uid("a"), "A").with_role("admin"))
            .await
            .unwrap();
        repo.upsert_profile(&UserProfile::new(uid("b"), "B").with_role("editor"))
            .await
            .unwrap();
        repo.upsert_profile(&UserProfile::new(uid("c"), "C"))
            .await
            .unwrap();
        let gate = RoleGate::new(Arc::new(repo));

        assert_eq!(gate.resolve_role(&uid("a")).await, Role::Admin);
        assert_eq!(gate.resolve_role(&uid("b")).await, Role::Regular);
        assert_eq!(gate.resolve_role(&uid("c")).await, Role::Regular);
        assert_eq!(gate.resolve_role(&uid("missing")).await, Role::Regular);
    }

    #[tokio::test]
    async fn viewer_role_field_is_regular() {
        let repo = InMemoryRepository::new();
        repo.upsert_profile(&UserProfile::new(uid("v"), "V").with_role("viewer"))
            .await
            .unwrap();
        let gate = RoleGate::new(Arc::new(repo));

        let role = gate.resolve_role(&uid("v")).await;
        assert_eq!(role, Role::Regular);
        assert_eq!(TabRouter::new(role).tabs(), TabRouter::new(Role::Regular).tabs());
    }

    #[tokio::test]
    async fn read_failure_fails_open_to_regular() {
        let gate = RoleGate::new(Arc::new(FailingProfiles));
        assert_eq!(gate.resolve_role(&uid("a")).await, Role::Regular);
    }

    #[test]
    fn one_lookup_per_identity() {
        let mut resolution = RoleResolution::new();
        assert!(resolution.begin(None).is_none());

        let ticket = resolution.begin(Some(&uid("a"))).unwrap();
        assert!(resolution.begin(Some(&uid("a"))).is_none());
        assert_eq!(resolution.effective_role(), Role::Regular);

        assert!(resolution.apply(&ticket, Role::Admin));
        assert!(resolution.begin(Some(&uid("a"))).is_none());
        assert_eq!(resolution.effective_role(), Role::Admin);
    }

    #[test]
    fn identity_change_discards_pending_lookup() {
        let mut resolution = RoleResolution::new();
        let stale = resolution.begin(Some(&uid("a"))).unwrap();
        let fresh = resolution.begin(Some(&uid("b"))).unwrap();

        assert!(!resolution.apply(&stale, Role::Admin));
        assert!(!resolution.is_resolved());
        assert!(resolution.apply(&fresh, Role::Regular));
        assert_eq!(resolution.effective_role(), Role::Regular);

        // A -> B -> A issues a new ticket for A; the first A ticket stays stale.
        let again = resolution.begin(Some(&uid("a"))).unwrap();
        assert!(!resolution.apply(&stale, Role::Admin));
        assert!(resolution.apply(&again, Role::Admin));
    }

    #[test]
    fn sign_out_clears_role() {
        let mut resolution = RoleResolution::new();
        let ticket = resolution.begin(Some(&uid("a"))).unwrap();
        resolution.apply(&ticket, Role::Admin);
        assert!(resolution.begin(None).is_none());
        assert_eq!(resolution.effective_role(), Role::Regular);
    }
}
