//! Mock data providers
//!
//! Static record sets standing in for a backend. Front ends read records only
//! through [`RecordSource`], so a real data client can replace [`MockData`]
//! without touching the filter engine.

pub mod dashboard;

pub use dashboard::{DashboardOverview, FunnelSlice};

use chrono::{Duration, Local, NaiveDate, NaiveTime};

use crate::types::{
    Candidate, EmploymentType, Interview, InterviewMode, InterviewStatus, Job, JobStatus,
    PersonRef, Rating, Stage, TimeRange,
};

/// Avatar shown for the fabricated demo identity.
pub const DEMO_AVATAR: &str =
    "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=300";

/// Read-only access to the record sets a page displays.
pub trait RecordSource: Send + Sync {
    fn candidates(&self) -> Vec<Candidate>;

    /// Interviews are scheduled relative to `today`.
    fn interviews(&self, today: NaiveDate) -> Vec<Interview>;

    fn jobs(&self) -> Vec<Job>;

    fn dashboard(&self) -> DashboardOverview {
        DashboardOverview::demo()
    }
}

/// The demo data set. Relative dates ("3 days ago") are anchored on `anchor`.
#[derive(Debug, Clone, Copy)]
pub struct MockData {
    anchor: NaiveDate,
}

impl Default for MockData {
    fn default() -> Self {
        Self::anchored(Local::now().date_naive())
    }
}

impl MockData {
    pub fn anchored(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    fn days_ago(&self, days: i64) -> NaiveDate {
        self.anchor - Duration::days(days)
    }
}

fn avatar(photo_id: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo_id}/pexels-photo-{photo_id}.jpeg?auto=compress&cs=tinysrgb&w=300"
    )
}

fn slot(start: (u32, u32), end: (u32, u32)) -> TimeRange {
    TimeRange {
        start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap_or_default(),
        end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap_or_default(),
    }
}

impl RecordSource for MockData {
    fn candidates(&self) -> Vec<Candidate> {
        let rows: [(u32, &str, &str, &str, &str, i64, Stage, u8); 6] = [
            (1, "John Smith", "Senior Frontend Developer", "john.smith@example.com", "+1 (555) 123-4567", 3, Stage::Applied, 5),
            (2, "Jane Doe", "UX/UI Designer", "jane.doe@example.com", "+1 (555) 234-5678", 7, Stage::Screening, 4),
            (3, "Robert Johnson", "DevOps Engineer", "robert.johnson@example.com", "+1 (555) 345-6789", 14, Stage::Interview, 3),
            (4, "Emily Wilson", "Backend Developer", "emily.wilson@example.com", "+1 (555) 456-7890", 3, Stage::Assessment, 5),
            (5, "Michael Brown", "Technical Lead", "michael.brown@example.com", "+1 (555) 567-8901", 30, Stage::Offer, 5),
            (6, "Sarah Johnson", "Product Manager", "sarah.johnson@example.com", "+1 (555) 678-9012", 14, Stage::Rejected, 2),
        ];

        rows.into_iter()
            .map(|(id, name, position, email, phone, applied_days_ago, stage, stars)| Candidate {
                id,
                name: name.to_string(),
                position: position.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                applied_at: self.days_ago(applied_days_ago),
                stage,
                rating: Rating::clamped(stars),
            })
            .collect()
    }

    fn interviews(&self, today: NaiveDate) -> Vec<Interview> {
        let person = |name: &str, headline: Option<&str>, photo_id: u32| PersonRef {
            name: name.to_string(),
            headline: headline.map(str::to_string),
            avatar_ref: avatar(photo_id),
        };

        vec![
            Interview {
                id: 1,
                candidate: person("John Smith", Some("Senior Frontend Developer"), 220453),
                date: today,
                time: slot((10, 0), (11, 0)),
                mode: InterviewMode::Video,
                status: InterviewStatus::Scheduled,
                interviewer: person("Alex Johnson", None, 2379004),
            },
            Interview {
                id: 2,
                candidate: person("Jane Doe", Some("UX/UI Designer"), 1239291),
                date: today,
                time: slot((14, 0), (15, 0)),
                mode: InterviewMode::Phone,
                status: InterviewStatus::Scheduled,
                interviewer: person("Sarah Miller", None, 1181686),
            },
            Interview {
                id: 3,
                candidate: person("Robert Johnson", Some("DevOps Engineer"), 1222271),
                date: today + Duration::days(1),
                time: slot((11, 30), (12, 30)),
                mode: InterviewMode::Video,
                status: InterviewStatus::Scheduled,
                interviewer: person("Mike Thompson", None, 220453),
            },
            Interview {
                id: 4,
                candidate: person("Emily Wilson", Some("Backend Developer"), 733872),
                date: today + Duration::days(2),
                time: slot((9, 0), (10, 30)),
                mode: InterviewMode::Onsite,
                status: InterviewStatus::Scheduled,
                interviewer: person("David Lee", None, 614810),
            },
            Interview {
                id: 5,
                candidate: person("Michael Brown", Some("Technical Lead"), 614810),
                date: today - Duration::days(1),
                time: slot((15, 0), (16, 0)),
                mode: InterviewMode::Video,
                status: InterviewStatus::Completed,
                interviewer: person("Jennifer Parker", None, 774909),
            },
        ]
    }

    fn jobs(&self) -> Vec<Job> {
        let rows: [(u32, &str, &str, &str, EmploymentType, u32, JobStatus, Option<i64>); 6] = [
            (1, "Senior Frontend Developer", "Engineering", "Remote (US)", EmploymentType::FullTime, 24, JobStatus::Active, Some(14)),
            (2, "UX/UI Designer", "Design", "New York, NY", EmploymentType::FullTime, 18, JobStatus::Active, Some(7)),
            (3, "DevOps Engineer", "Engineering", "Remote (Global)", EmploymentType::FullTime, 12, JobStatus::Active, Some(3)),
            (4, "Product Manager", "Product", "San Francisco, CA", EmploymentType::FullTime, 30, JobStatus::Active, Some(30)),
            (5, "Backend Developer (Node.js)", "Engineering", "Remote (US)", EmploymentType::Contract, 16, JobStatus::Draft, None),
            (6, "Technical Support Specialist", "Customer Success", "Austin, TX", EmploymentType::FullTime, 8, JobStatus::Closed, Some(60)),
        ];

        rows.into_iter()
            .map(
                |(id, title, department, location, employment_type, applicant_count, status, published)| Job {
                    id,
                    title: title.to_string(),
                    department: department.to_string(),
                    location: location.to_string(),
                    employment_type,
                    applicant_count,
                    status,
                    published_at: published.map(|days| self.days_ago(days)),
                },
            )
            .collect()
    }
}
