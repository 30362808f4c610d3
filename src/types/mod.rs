use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::utils::toml_config::ConfigError;

// ============= Identity Types =============

/// Role attached to a signed-in identity.
///
/// Roles are informational only: every authenticated identity sees the same
/// views regardless of role.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Recruiter,
    Interviewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Recruiter => "recruiter",
            Role::Interviewer => "interviewer",
        }
    }

    /// Case-insensitive lookup used by configuration.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "recruiter" => Some(Role::Recruiter),
            "interviewer" => Some(Role::Interviewer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "Admin",
            Role::Recruiter => "Recruiter",
            Role::Interviewer => "Interviewer",
        };
        f.write_str(label)
    }
}

/// Who is signed in. Immutable for the lifetime of a session and replaced
/// wholesale on the next login.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub role: Role,
    pub avatar_ref: String,
}

impl Identity {
    /// Up to two uppercase initials, e.g. "Demo User" -> "DU".
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

// ============= Candidate Types =============

/// Position of a candidate in the hiring pipeline.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Applied,
    Screening,
    Interview,
    Assessment,
    Offer,
    Rejected,
}

impl Stage {
    /// Every stage, in pipeline order.
    pub const ALL: [Stage; 6] = [
        Stage::Applied,
        Stage::Screening,
        Stage::Interview,
        Stage::Assessment,
        Stage::Offer,
        Stage::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Applied => "applied",
            Stage::Screening => "screening",
            Stage::Interview => "interview",
            Stage::Assessment => "assessment",
            Stage::Offer => "offer",
            Stage::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Applied => "Applied",
            Stage::Screening => "Screening",
            Stage::Interview => "Interview",
            Stage::Assessment => "Assessment",
            Stage::Offer => "Offer",
            Stage::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Star rating, 0 to 5 inclusive.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    /// Saturates at [`Rating::MAX`].
    pub fn clamped(stars: u8) -> Self {
        Rating(stars.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(AppError::InvalidInput(format!(
                "rating {} is outside 0..={}",
                value,
                Self::MAX
            )));
        }
        Ok(Rating(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub applied_at: NaiveDate,
    pub stage: Stage,
    pub rating: Rating,
}

// ============= Interview Types =============

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InterviewMode {
    Video,
    Phone,
    Onsite,
}

impl InterviewMode {
    pub fn label(&self) -> &'static str {
        match self {
            InterviewMode::Video => "Video Call",
            InterviewMode::Phone => "Phone Call",
            InterviewMode::Onsite => "On-site",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
}

/// A person referenced from an interview card.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PersonRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    pub avatar_ref: String,
}

/// Wall-clock slot within a single day.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%-I:%M %p"),
            self.end.format("%-I:%M %p")
        )
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Interview {
    pub id: u32,
    pub candidate: PersonRef,
    pub date: NaiveDate,
    pub time: TimeRange,
    pub mode: InterviewMode,
    pub status: InterviewStatus,
    pub interviewer: PersonRef,
}

// ============= Job Types =============

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Draft,
    Closed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 3] = [JobStatus::Active, JobStatus::Draft, JobStatus::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Draft => "draft",
            JobStatus::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Active => "Active",
            JobStatus::Draft => "Draft",
            JobStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub applicant_count: u32,
    pub status: JobStatus,
    /// `None` while the listing is a draft that was never published.
    pub published_at: Option<NaiveDate>,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required form field is missing or malformed. Shown inline.
    #[error("{0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Unknown {axis} filter key '{key}'")]
    UnknownFilterKey { axis: &'static str, key: String },

    #[error("A submission is already in progress")]
    Busy,

    #[error("Submission cancelled")]
    Cancelled,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::try_from(0).unwrap().value(), 0);
        assert_eq!(Rating::try_from(5).unwrap().value(), 5);
        assert!(matches!(
            Rating::try_from(6),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rating_rejected_during_deserialization() {
        let parsed: std::result::Result<Rating, _> = serde_json::from_str("9");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_identity_initials() {
        let identity = Identity {
            id: Uuid::new_v4(),
            display_name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            role: Role::Admin,
            avatar_ref: String::new(),
        };
        assert_eq!(identity.initials(), "DU");
    }

    #[test]
    fn test_time_range_display() {
        let range = TimeRange {
            start: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        };
        assert_eq!(range.to_string(), "2:00 PM - 3:00 PM");
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("Recruiter"), Some(Role::Recruiter));
        assert_eq!(Role::parse(" ADMIN "), Some(Role::Admin));
        assert_eq!(Role::parse("owner"), None);
    }

    #[test]
    fn test_stage_serializes_lowercase() {
        let json = serde_json::to_string(&Stage::Assessment).unwrap();
        assert_eq!(json, "\"assessment\"");
    }
}
