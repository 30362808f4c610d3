//! Candidate pipeline filter

use super::{badges, filter_by, Badge, Facet, Selection};
use crate::types::{Candidate, Stage};

/// Stage chip selected on the candidates page.
pub type StageFilter = Selection<Stage>;

impl Facet for Stage {
    type Record = Candidate;

    const AXIS: &'static str = "stage";

    const KEYS: &'static [StageFilter] = &[
        Selection::All,
        Selection::Only(Stage::Applied),
        Selection::Only(Stage::Screening),
        Selection::Only(Stage::Interview),
        Selection::Only(Stage::Assessment),
        Selection::Only(Stage::Offer),
        Selection::Only(Stage::Rejected),
    ];

    fn of(candidate: &Candidate) -> Self {
        candidate.stage
    }

    fn as_str(&self) -> &'static str {
        Stage::as_str(self)
    }

    fn label(&self) -> &'static str {
        Stage::label(self)
    }
}

/// Candidates visible under `filter`, in source order.
pub fn filter_candidates(records: &[Candidate], filter: StageFilter) -> Vec<&Candidate> {
    filter_by(records, filter)
}

/// Count badges for every stage chip, "all" first.
pub fn stage_badges(records: &[Candidate]) -> Vec<Badge<StageFilter>> {
    badges::<Stage>(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{MockData, RecordSource};
    use rstest::rstest;

    fn candidates() -> Vec<Candidate> {
        MockData::default().candidates()
    }

    #[test]
    fn test_all_is_identity() {
        let records = candidates();
        let visible = filter_candidates(&records, StageFilter::All);

        assert_eq!(visible.len(), records.len());
        for (shown, source) in visible.iter().zip(records.iter()) {
            assert_eq!(*shown, source);
        }
    }

    #[rstest]
    #[case(Stage::Applied, "John Smith")]
    #[case(Stage::Screening, "Jane Doe")]
    #[case(Stage::Interview, "Robert Johnson")]
    #[case(Stage::Assessment, "Emily Wilson")]
    #[case(Stage::Offer, "Michael Brown")]
    #[case(Stage::Rejected, "Sarah Johnson")]
    fn test_single_stage_selects_matching_candidate(#[case] stage: Stage, #[case] name: &str) {
        let records = candidates();
        let visible = filter_candidates(&records, StageFilter::Only(stage));

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, name);
        assert_eq!(visible[0].stage, stage);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let mut records = candidates();
        records[3].stage = Stage::Screening;
        records[5].stage = Stage::Screening;

        let ids: Vec<u32> = filter_candidates(&records, StageFilter::Only(Stage::Screening))
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![2, 4, 6]);
    }

    #[test]
    fn test_badges_partition_the_set() {
        let records = candidates();
        let badges = stage_badges(&records);

        assert_eq!(badges[0].key, StageFilter::All);
        assert_eq!(badges[0].count, 6);

        let per_stage: usize = badges[1..].iter().map(|b| b.count).sum();
        assert_eq!(per_stage, records.len());

        let rejected = badges
            .iter()
            .find(|b| b.key == StageFilter::Only(Stage::Rejected))
            .unwrap();
        assert_eq!(rejected.count, 1);
        assert_eq!(rejected.label, "Rejected");
    }

    #[test]
    fn test_badges_follow_record_changes() {
        let mut records = candidates();
        records.retain(|c| c.stage != Stage::Offer);

        let badges = stage_badges(&records);
        let offer = badges
            .iter()
            .find(|b| b.key == StageFilter::Only(Stage::Offer))
            .unwrap();
        assert_eq!(offer.count, 0);
        assert_eq!(badges[0].count, 5);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("hired".parse::<StageFilter>().is_err());
        assert_eq!("offer".parse::<StageFilter>().unwrap(), StageFilter::Only(Stage::Offer));
    }
}
