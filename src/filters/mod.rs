//! View filter engine
//!
//! Pure, synchronous projections of an in-memory record set under one selected
//! key per page. Nothing here mutates or reorders the source slice: every
//! filter returns borrowed references in original order, and badge counts are
//! recomputed from the full set on every call.

pub mod candidates;
pub mod interviews;
pub mod jobs;
pub mod selection;
pub mod settings;

pub use candidates::{filter_candidates, stage_badges, StageFilter};
pub use interviews::{date_strip, filter_interviews, DateChip, InterviewView};
pub use jobs::{filter_jobs, job_badges, JobFilter};
pub use selection::{badges, filter_by, Facet, Selection};
pub use settings::SettingsTab;

use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use crate::types::{AppError, Result};

/// What to do with a filter key outside the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeyPolicy {
    /// Fail fast with [`AppError::UnknownFilterKey`].
    #[default]
    Reject,
    /// Fall back to the broadest key of the axis and log a warning.
    All,
}

/// A closed, enumerated set of keys selectable on one filter axis.
pub trait FilterKey: Copy + 'static {
    /// Axis name used in errors and logs ("stage", "view", ...).
    const AXIS: &'static str;

    /// Every key on the axis, in display order.
    fn keys() -> &'static [Self];

    /// Stable string form of this key.
    fn key(&self) -> &'static str;

    /// The key showing the most records (or the page default).
    fn broadest() -> Self;

    /// Case-insensitive lookup honouring the unknown-key policy.
    fn parse_with(raw: &str, policy: UnknownKeyPolicy) -> Result<Self> {
        let needle = raw.trim();
        if let Some(found) = Self::keys()
            .iter()
            .find(|candidate| candidate.key().eq_ignore_ascii_case(needle))
        {
            return Ok(*found);
        }

        match policy {
            UnknownKeyPolicy::Reject => Err(AppError::UnknownFilterKey {
                axis: Self::AXIS,
                key: raw.to_string(),
            }),
            UnknownKeyPolicy::All => {
                let fallback = Self::broadest();
                warn!(
                    axis = Self::AXIS,
                    key = raw,
                    fallback = fallback.key(),
                    "Unknown filter key, using broadest"
                );
                Ok(fallback)
            }
        }
    }
}

/// One filter chip: its key, label and how many records it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "K: FilterKey"))]
pub struct Badge<K> {
    #[serde(serialize_with = "serialize_key")]
    pub key: K,
    pub label: &'static str,
    pub count: usize,
}

fn serialize_key<K: FilterKey, S: Serializer>(key: &K, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(key.key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_policy_fails_fast() {
        let err = StageFilter::parse_with("hired", UnknownKeyPolicy::Reject).unwrap_err();
        match err {
            AppError::UnknownFilterKey { axis, key } => {
                assert_eq!(axis, "stage");
                assert_eq!(key, "hired");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_lenient_policy_uses_broadest() {
        assert_eq!(
            StageFilter::parse_with("hired", UnknownKeyPolicy::All).unwrap(),
            StageFilter::All
        );
        assert_eq!(
            InterviewView::parse_with("someday", UnknownKeyPolicy::All).unwrap(),
            InterviewView::Upcoming
        );
        assert_eq!(
            SettingsTab::parse_with("billing", UnknownKeyPolicy::All).unwrap(),
            SettingsTab::Profile
        );
        assert_eq!(
            JobFilter::parse_with("archived", UnknownKeyPolicy::All).unwrap(),
            JobFilter::All
        );
    }

    #[test]
    fn test_known_keys_parse_case_insensitively() {
        assert_eq!(
            StageFilter::parse_with(" Screening ", UnknownKeyPolicy::Reject).unwrap(),
            StageFilter::Only(crate::types::Stage::Screening)
        );
        assert_eq!(
            SettingsTab::parse_with("JOB-SETTINGS", UnknownKeyPolicy::Reject).unwrap(),
            SettingsTab::JobSettings
        );
    }

    #[test]
    fn test_every_key_round_trips_through_its_string() {
        fn check<K: FilterKey + PartialEq + std::fmt::Debug>() {
            for key in K::keys() {
                assert_eq!(K::parse_with(key.key(), UnknownKeyPolicy::Reject).unwrap(), *key);
            }
        }
        check::<StageFilter>();
        check::<InterviewView>();
        check::<JobFilter>();
        check::<SettingsTab>();
    }

    #[test]
    fn test_badge_serializes_key_as_string() {
        let badge = Badge {
            key: StageFilter::Only(crate::types::Stage::Offer),
            label: "Offer",
            count: 1,
        };
        let json = serde_json::to_value(badge).unwrap();
        assert_eq!(json["key"], "offer");
        assert_eq!(json["count"], 1);
    }
}
