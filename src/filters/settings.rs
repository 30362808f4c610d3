//! Settings tab selection
//!
//! Purely presentational: the active tab decides which panel is shown and
//! touches nothing else.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::{FilterKey, UnknownKeyPolicy};
use crate::types::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SettingsTab {
    #[default]
    Profile,
    Company,
    Security,
    Notifications,
    Integrations,
    JobSettings,
    Branding,
    Teams,
}

/// Content of a settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsPanel {
    pub title: &'static str,
    pub sections: &'static [&'static str],
}

impl SettingsTab {
    const KEYS: [SettingsTab; 8] = [
        SettingsTab::Profile,
        SettingsTab::Company,
        SettingsTab::Security,
        SettingsTab::Notifications,
        SettingsTab::Integrations,
        SettingsTab::JobSettings,
        SettingsTab::Branding,
        SettingsTab::Teams,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Company => "Company",
            SettingsTab::Security => "Security",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Integrations => "Integrations",
            SettingsTab::JobSettings => "Job Settings",
            SettingsTab::Branding => "Branding",
            SettingsTab::Teams => "Teams",
        }
    }

    /// Panel rendered for this tab; `None` for tabs without content yet.
    pub fn panel(&self) -> Option<SettingsPanel> {
        match self {
            SettingsTab::Profile => Some(SettingsPanel {
                title: "Profile Settings",
                sections: &["Photo", "Personal Information"],
            }),
            SettingsTab::Company => Some(SettingsPanel {
                title: "Company Settings",
                sections: &["Logo", "Company Details", "Industry", "Company Size"],
            }),
            SettingsTab::Security => Some(SettingsPanel {
                title: "Security Settings",
                sections: &[
                    "Change Password",
                    "Two-Factor Authentication",
                    "Login Notifications",
                    "Session Management",
                ],
            }),
            SettingsTab::Notifications
            | SettingsTab::Integrations
            | SettingsTab::JobSettings
            | SettingsTab::Branding
            | SettingsTab::Teams => None,
        }
    }
}

impl FilterKey for SettingsTab {
    const AXIS: &'static str = "tab";

    fn keys() -> &'static [Self] {
        &Self::KEYS
    }

    fn key(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "profile",
            SettingsTab::Company => "company",
            SettingsTab::Security => "security",
            SettingsTab::Notifications => "notifications",
            SettingsTab::Integrations => "integrations",
            SettingsTab::JobSettings => "job-settings",
            SettingsTab::Branding => "branding",
            SettingsTab::Teams => "teams",
        }
    }

    fn broadest() -> Self {
        SettingsTab::Profile
    }
}

impl FromStr for SettingsTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, UnknownKeyPolicy::Reject)
    }
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
