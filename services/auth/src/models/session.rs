//! Session model and page access rules

use chrono::{DateTime, Utc};
use common::ResourceId;
use serde::{Deserialize, Serialize};

/// Identity held in the session record; never carries the password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: ResourceId,
    pub name: String,
    pub email: String,
    #[serde(
        default,
        deserialize_with = "common::timestamps::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// First word of the display name
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

/// Whether a page needs a signed-in identity or its absence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRequirement {
    Present,
    Absent,
}

/// Pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Login,
    Register,
    Dashboard,
    Wardrobe,
    AddDress,
    DressDetail,
}

impl PageKind {
    pub const ALL: [PageKind; 6] = [
        PageKind::Login,
        PageKind::Register,
        PageKind::Dashboard,
        PageKind::Wardrobe,
        PageKind::AddDress,
        PageKind::DressDetail,
    ];

    /// The two auth pages must not be shown to a signed-in user
    pub fn requirement(self) -> SessionRequirement {
        match self {
            PageKind::Login | PageKind::Register => SessionRequirement::Absent,
            _ => SessionRequirement::Present,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            PageKind::Login => "login",
            PageKind::Register => "register",
            PageKind::Dashboard => "dashboard",
            PageKind::Wardrobe => "wardrobe",
            PageKind::AddDress => "add-dress",
            PageKind::DressDetail => "dress-detail",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            PageKind::Login => "index.html",
            PageKind::Register => "register.html",
            PageKind::Dashboard => "dashboard.html",
            PageKind::Wardrobe => "wardrobe.html",
            PageKind::AddDress => "add-dress.html",
            PageKind::DressDetail => "dress-detail.html",
        }
    }

    /// Resolve a slug or file name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|page| page.slug() == name || page.file_name() == name)
    }
}

/// Outcome of gating a page on the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

impl AccessDecision {
    /// Page to navigate to, if any
    pub fn target(self) -> Option<PageKind> {
        match self {
            AccessDecision::Allow => None,
            AccessDecision::RedirectToLogin => Some(PageKind::Login),
            AccessDecision::RedirectToHome => Some(PageKind::Dashboard),
        }
    }
}

/// Session state loaded once per page load and handed to page controllers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    pub identity: Option<Identity>,
}

impl SessionContext {
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Decide whether `page` may be shown
    pub fn require(&self, page: PageKind) -> AccessDecision {
        match (page.requirement(), self.identity.is_some()) {
            (SessionRequirement::Present, false) => AccessDecision::RedirectToLogin,
            (SessionRequirement::Absent, true) => AccessDecision::RedirectToHome,
            _ => AccessDecision::Allow,
        }
    }
}
