//! Job listing status filter

use super::{badges, filter_by, Badge, Facet, Selection};
use crate::types::{Job, JobStatus};

pub type JobFilter = Selection<JobStatus>;

impl Facet for JobStatus {
    type Record = Job;

    const AXIS: &'static str = "status";

    const KEYS: &'static [JobFilter] = &[
        Selection::All,
        Selection::Only(JobStatus::Active),
        Selection::Only(JobStatus::Draft),
        Selection::Only(JobStatus::Closed),
    ];

    fn of(job: &Job) -> Self {
        job.status
    }

    fn as_str(&self) -> &'static str {
        JobStatus::as_str(self)
    }

    fn label(&self) -> &'static str {
        JobStatus::label(self)
    }
}

pub fn filter_jobs(records: &[Job], filter: JobFilter) -> Vec<&Job> {
    filter_by(records, filter)
}

pub fn job_badges(records: &[Job]) -> Vec<Badge<JobFilter>> {
    badges::<JobStatus>(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{MockData, RecordSource};
    use rstest::rstest;

    #[rstest]
    #[case(JobFilter::All, 6)]
    #[case(JobFilter::Only(JobStatus::Active), 4)]
    #[case(JobFilter::Only(JobStatus::Draft), 1)]
    #[case(JobFilter::Only(JobStatus::Closed), 1)]
    fn test_fixture_counts(#[case] filter: JobFilter, #[case] expected: usize) {
        let jobs = MockData::default().jobs();
        assert_eq!(filter_jobs(&jobs, filter).len(), expected);

        let badge = job_badges(&jobs)
            .into_iter()
            .find(|b| b.key == filter)
            .unwrap();
        assert_eq!(badge.count, expected);
    }

    #[test]
    fn test_draft_listing_is_unpublished() {
        let jobs = MockData::default().jobs();
        let drafts = filter_jobs(&jobs, JobFilter::Only(JobStatus::Draft));

        assert_eq!(drafts[0].title, "Backend Developer (Node.js)");
        assert!(drafts[0].published_at.is_none());
    }

    #[test]
    fn test_active_listings_keep_source_order() {
        let jobs = MockData::default().jobs();
        let ids: Vec<u32> = filter_jobs(&jobs, JobFilter::Only(JobStatus::Active))
            .iter()
            .map(|job| job.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
