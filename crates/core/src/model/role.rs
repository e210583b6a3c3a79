use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Value of the profile `role` field that grants admin tabs.
pub const ADMIN_ROLE: &str = "admin";

/// Privilege level resolved from the user's profile document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    #[default]
    Regular,
}

impl Role {
    /// Anything other than the exact admin sentinel is a regular user.
    #[must_use]
    pub fn from_profile_field(field: Option<&str>) -> Self {
        match field {
            Some(ADMIN_ROLE) => Self::Admin,
            _ => Self::Regular,
        }
    }

    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

//
// ─── TABS ──────────────────────────────────────────────────────────────────────
//

/// Sections of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    Profile,
    Transactions,
    QuizList,
    Users,
    Questions,
    AdminQuizVideos,
    OptedQuizzes,
    VideoUpload,
}

impl DashboardTab {
    pub const DEFAULT: Self = Self::Profile;

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Transactions => "transactions",
            Self::QuizList => "quizlist",
            Self::Users => "users",
            Self::Questions => "questions",
            Self::AdminQuizVideos => "adminquizvideos",
            Self::OptedQuizzes => "optedquizzes",
            Self::VideoUpload => "videoupload",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Transactions => "Transactions",
            Self::QuizList => "Quiz List",
            Self::Users => "Users",
            Self::Questions => "Questions",
            Self::AdminQuizVideos => "Quiz Videos",
            Self::OptedQuizzes => "My Quizzes",
            Self::VideoUpload => "Upload Video",
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown dashboard tab: {0}")]
pub struct UnknownTabError(pub String);

impl FromStr for DashboardTab {
    type Err = UnknownTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profile" => Ok(Self::Profile),
            "transactions" => Ok(Self::Transactions),
            "quizlist" => Ok(Self::QuizList),
            "users" => Ok(Self::Users),
            "questions" => Ok(Self::Questions),
            "adminquizvideos" => Ok(Self::AdminQuizVideos),
            "optedquizzes" => Ok(Self::OptedQuizzes),
            "videoupload" => Ok(Self::VideoUpload),
            other => Err(UnknownTabError(other.to_string())),
        }
    }
}

const ADMIN_TABS: [DashboardTab; 6] = [
    DashboardTab::Profile,
    DashboardTab::Transactions,
    DashboardTab::QuizList,
    DashboardTab::Users,
    DashboardTab::Questions,
    DashboardTab::AdminQuizVideos,
];

const REGULAR_TABS: [DashboardTab; 3] = [
    DashboardTab::Profile,
    DashboardTab::OptedQuizzes,
    DashboardTab::VideoUpload,
];

/// Fixed set of tabs a role may open, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizedTabSet {
    role: Role,
}

impl AuthorizedTabSet {
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        Self { role }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn tabs(&self) -> &'static [DashboardTab] {
        match self.role {
            Role::Admin => &ADMIN_TABS,
            Role::Regular => &REGULAR_TABS,
        }
    }

    #[must_use]
    pub fn contains(&self, tab: DashboardTab) -> bool {
        self.tabs().contains(&tab)
    }
}
