//! Interview schedule filter
//!
//! Two independent axes: the upcoming/past toggle and the date picked in the
//! date strip. The rules are deliberately asymmetric:
//!
//! - **Upcoming** shows interviews on exactly the selected date, and only if
//!   that date is not before today.
//! - **Past** shows interviews dated before today *or* marked completed,
//!   ignoring the selected date. A future-dated interview already marked
//!   completed therefore shows up under Past.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::{FilterKey, UnknownKeyPolicy};
use crate::types::{AppError, Interview, InterviewStatus, Result};

/// Days shown before today in the date strip.
const STRIP_DAYS_BEFORE: i64 = 3;
/// Days shown from today onward in the date strip (today included).
const STRIP_DAYS_FROM_TODAY: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterviewView {
    #[default]
    Upcoming,
    Past,
}

impl InterviewView {
    const KEYS: [InterviewView; 2] = [InterviewView::Upcoming, InterviewView::Past];

    pub fn label(&self) -> &'static str {
        match self {
            InterviewView::Upcoming => "Upcoming",
            InterviewView::Past => "Past",
        }
    }

    /// Whether `interview` is shown under this view.
    pub fn includes(&self, interview: &Interview, selected_date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            InterviewView::Upcoming => interview.date >= today && interview.date == selected_date,
            InterviewView::Past => {
                interview.date < today || interview.status == InterviewStatus::Completed
            }
        }
    }
}

impl FilterKey for InterviewView {
    const AXIS: &'static str = "view";

    fn keys() -> &'static [Self] {
        &Self::KEYS
    }

    fn key(&self) -> &'static str {
        match self {
            InterviewView::Upcoming => "upcoming",
            InterviewView::Past => "past",
        }
    }

    fn broadest() -> Self {
        InterviewView::Upcoming
    }
}

impl FromStr for InterviewView {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse_with(s, UnknownKeyPolicy::Reject)
    }
}

impl fmt::Display for InterviewView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Interviews visible for the given view and selected date, in source order.
pub fn filter_interviews(
    records: &[Interview],
    view: InterviewView,
    selected_date: NaiveDate,
    today: NaiveDate,
) -> Vec<&Interview> {
    let visible: Vec<&Interview> = records
        .iter()
        .filter(|interview| view.includes(interview, selected_date, today))
        .collect();
    debug!(
        view = view.key(),
        %selected_date,
        %today,
        visible = visible.len(),
        "Filtered interviews"
    );
    visible
}

/// Parse a `YYYY-MM-DD` date picked outside the date strip.
pub fn parse_selected_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::InvalidInput(format!("Invalid date '{}': {}", raw, e)))
}

/// One selectable day in the date strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateChip {
    pub date: NaiveDate,
    /// Abbreviated weekday, e.g. "Mon"
    pub weekday: String,
    pub day_number: u32,
    pub is_today: bool,
}

/// The days offered by the date picker: three before today through nine after.
pub fn date_strip(today: NaiveDate) -> Vec<DateChip> {
    (-STRIP_DAYS_BEFORE..STRIP_DAYS_FROM_TODAY)
        .map(|offset| {
            let date = today + Duration::days(offset);
            DateChip {
                date,
                weekday: date.format("%a").to_string(),
                day_number: date.day(),
                is_today: offset == 0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{MockData, RecordSource};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    fn single(date: NaiveDate, status: InterviewStatus) -> Vec<Interview> {
        let mut interview = MockData::default().interviews(today()).remove(0);
        interview.date = date;
        interview.status = status;
        vec![interview]
    }

    #[test]
    fn test_upcoming_today_on_selected_date() {
        let records = single(today(), InterviewStatus::Scheduled);
        let visible = filter_interviews(&records, InterviewView::Upcoming, today(), today());
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_upcoming_hidden_when_other_date_selected() {
        let records = single(today(), InterviewStatus::Scheduled);
        let tomorrow = today().succ_opt().unwrap();
        let visible = filter_interviews(&records, InterviewView::Upcoming, tomorrow, today());
        assert!(visible.is_empty());
    }

    #[test]
    fn test_upcoming_never_shows_past_dates() {
        let yesterday = today().pred_opt().unwrap();
        let records = single(yesterday, InterviewStatus::Scheduled);
        let visible = filter_interviews(&records, InterviewView::Upcoming, yesterday, today());
        assert!(visible.is_empty());
    }

    #[test]
    fn test_past_ignores_selected_date() {
        let yesterday = today().pred_opt().unwrap();
        let records = single(yesterday, InterviewStatus::Scheduled);
        let far_future = today() + Duration::days(30);

        let visible = filter_interviews(&records, InterviewView::Past, far_future, today());
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_past_includes_future_completed_interview() {
        let next_week = today() + Duration::days(7);
        let records = single(next_week, InterviewStatus::Completed);

        let visible = filter_interviews(&records, InterviewView::Past, today(), today());
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_past_excludes_scheduled_today() {
        let records = single(today(), InterviewStatus::Scheduled);
        let visible = filter_interviews(&records, InterviewView::Past, today(), today());
        assert!(visible.is_empty());
    }

    #[test]
    fn test_fixture_schedule_split() {
        let records = MockData::default().interviews(today());

        let upcoming_today = filter_interviews(&records, InterviewView::Upcoming, today(), today());
        assert_eq!(upcoming_today.len(), 2);

        let past = filter_interviews(&records, InterviewView::Past, today(), today());
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].candidate.name, "Michael Brown");
    }

    #[test]
    fn test_date_strip_shape() {
        let strip = date_strip(today());

        assert_eq!(strip.len(), 13);
        assert_eq!(strip[0].date, today() - Duration::days(3));
        assert_eq!(strip[12].date, today() + Duration::days(9));

        let todays: Vec<&DateChip> = strip.iter().filter(|chip| chip.is_today).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].date, today());
        assert_eq!(todays[0].day_number, today().day());
        assert_eq!(todays[0].weekday, "Wed");
    }

    #[test]
    fn test_parse_selected_date() {
        assert_eq!(parse_selected_date("2024-05-15").unwrap(), today());
        assert!(matches!(
            parse_selected_date("15/05/2024"),
            Err(AppError::InvalidInput(_))
        ));
    }
}
