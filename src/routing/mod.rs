//! Route table and guard
//!
//! Views split into a public set (landing, login, sign-up) and a protected
//! set that requires a signed-in session. [`RouteGuard::check`] runs on every
//! navigation attempt and either mounts the requested view or redirects.
//! A redirect is an ordinary outcome, not an error.

pub mod navigator;

pub use navigator::{Navigator, PageState};

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::auth::Session;

/// Every routable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Landing,
    Login,
    Signup,
    Dashboard,
    Jobs,
    Candidates,
    Interviews,
    Settings,
}

impl View {
    pub const ALL: [View; 8] = [
        View::Landing,
        View::Login,
        View::Signup,
        View::Dashboard,
        View::Jobs,
        View::Candidates,
        View::Interviews,
        View::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            View::Landing => "/",
            View::Login => "/login",
            View::Signup => "/signup",
            View::Dashboard => "/dashboard",
            View::Jobs => "/jobs",
            View::Candidates => "/candidates",
            View::Interviews => "/interviews",
            View::Settings => "/settings",
        }
    }

    /// Requires a signed-in session.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            View::Dashboard | View::Jobs | View::Candidates | View::Interviews | View::Settings
        )
    }

    /// Page header title for protected views.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            View::Dashboard => Some("Dashboard"),
            View::Jobs => Some("Job Positions"),
            View::Candidates => Some("Candidate Management"),
            View::Interviews => Some("Interview Schedule"),
            View::Settings => Some("Settings"),
            View::Landing | View::Login | View::Signup => None,
        }
    }

    /// Maps a path to its view. Query strings, fragments and a trailing
    /// slash are ignored; anything unrecognised lands on [`View::Landing`].
    pub fn resolve(path: &str) -> View {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        View::ALL
            .into_iter()
            .find(|view| view.path().eq_ignore_ascii_case(normalized))
            .unwrap_or(View::Landing)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Entry in the dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl SidebarLink {
    /// Where following this link ends up. Links without a route of their
    /// own resolve to the landing page.
    pub fn target(&self) -> View {
        View::resolve(self.path)
    }
}

pub const SIDEBAR: [SidebarLink; 7] = [
    SidebarLink { label: "Dashboard", path: "/dashboard" },
    SidebarLink { label: "Jobs", path: "/jobs" },
    SidebarLink { label: "Candidates", path: "/candidates" },
    SidebarLink { label: "AI Screening", path: "/ai-screening" },
    SidebarLink { label: "Interviews", path: "/interviews" },
    SidebarLink { label: "Analytics", path: "/analytics" },
    SidebarLink { label: "Settings", path: "/settings" },
];

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum GuardDecision {
    Mount { view: View },
    Redirect { from: View, to: View },
}

impl GuardDecision {
    /// The view that ends up mounted.
    pub fn view(&self) -> View {
        match self {
            GuardDecision::Mount { view } => *view,
            GuardDecision::Redirect { to, .. } => *to,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, GuardDecision::Redirect { .. })
    }
}

/// Gates protected views behind the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    fallback: View,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self {
            fallback: View::Login,
        }
    }
}

impl RouteGuard {
    /// Guard redirecting anonymous users to `fallback`. A protected fallback
    /// would redirect to itself, so it is replaced by [`View::Login`].
    pub fn new(fallback: View) -> Self {
        if fallback.is_protected() {
            warn!(fallback = %fallback, "Protected fallback view ignored, using /login");
            return Self::default();
        }
        Self { fallback }
    }

    pub fn fallback(&self) -> View {
        self.fallback
    }

    /// Decide what mounts when `requested` is navigated to under `session`.
    /// Role plays no part: every signed-in identity sees the same views.
    pub fn check(&self, requested: View, session: &Session) -> GuardDecision {
        if requested.is_protected() && !session.is_authenticated() {
            return GuardDecision::Redirect {
                from: requested,
                to: self.fallback,
            };
        }

        GuardDecision::Mount { view: requested }
    }

    /// Same as [`check`](Self::check) for a raw path.
    pub fn check_path(&self, path: &str, session: &Session) -> GuardDecision {
        self.check(View::resolve(path), session)
    }
}
