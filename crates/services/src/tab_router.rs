use quiz_core::model::{AuthorizedTabSet, DashboardTab, Role};

/// Active dashboard tab, constrained to the tabs the role may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRouter {
    authorized: AuthorizedTabSet,
    active: DashboardTab,
}

impl TabRouter {
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            authorized: AuthorizedTabSet::for_role(role),
            active: DashboardTab::DEFAULT,
        }
    }

    #[must_use]
    pub fn active(&self) -> DashboardTab {
        self.active
    }

    #[must_use]
    pub fn tabs(&self) -> &'static [DashboardTab] {
        self.authorized.tabs()
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.authorized.role()
    }

    /// Switches to `tab` if the role may see it. Returns whether it switched.
    pub fn set_active_tab(&mut self, tab: DashboardTab) -> bool {
        if !self.authorized.contains(tab) {
            tracing::debug!(tab = %tab, role = ?self.role(), "ignoring unauthorized tab");
            return false;
        }
        self.active = tab;
        true
    }

    /// Re-scopes the router to `role`. Falls back to the default tab when the
    /// active one is no longer allowed; returns whether that happened.
    pub fn set_role(&mut self, role: Role) -> bool {
        self.authorized = AuthorizedTabSet::for_role(role);
        if self.authorized.contains(self.active) {
            return false;
        }
        self.active = DashboardTab::DEFAULT;
        true
    }
}
