//! "All or one value" selections over a record attribute
//!
//! Candidate stages and job statuses filter the same way: the broadest chip
//! shows everything, every other chip keeps records whose attribute equals
//! its value. [`Facet`] describes such an attribute once; [`Selection`],
//! [`filter_by`] and [`badges`] do the rest.

use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::{Badge, FilterKey, UnknownKeyPolicy};
use crate::types::AppError;

/// A closed record attribute a page can narrow its list by.
pub trait Facet: Copy + PartialEq + 'static {
    /// Record type carrying the attribute.
    type Record;

    /// Axis name used in errors and logs.
    const AXIS: &'static str;

    /// Chip order: [`Selection::All`] first, then one per value.
    const KEYS: &'static [Selection<Self>];

    /// The attribute's value on `record`.
    fn of(record: &Self::Record) -> Self;

    fn as_str(&self) -> &'static str;

    fn label(&self) -> &'static str;
}

/// Either every record, or those whose facet equals one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: Facet> Selection<T> {
    pub fn matches(&self, record: &T::Record) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => T::of(record) == *value,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Selection::All => "All",
            Selection::Only(value) => value.label(),
        }
    }
}

impl<T: Facet> FilterKey for Selection<T> {
    const AXIS: &'static str = T::AXIS;

    fn keys() -> &'static [Self] {
        T::KEYS
    }

    fn key(&self) -> &'static str {
        match self {
            Selection::All => "all",
            Selection::Only(value) => value.as_str(),
        }
    }

    fn broadest() -> Self {
        Selection::All
    }
}

impl<T: Facet> FromStr for Selection<T> {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, UnknownKeyPolicy::Reject)
    }
}

impl<T: Facet> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Records visible under `filter`, in source order.
pub fn filter_by<T: Facet>(records: &[T::Record], filter: Selection<T>) -> Vec<&T::Record> {
    let visible: Vec<&T::Record> = records.iter().filter(|r| filter.matches(r)).collect();
    debug!(
        axis = T::AXIS,
        key = filter.key(),
        total = records.len(),
        visible = visible.len(),
        "Filtered records"
    );
    visible
}

/// One count badge per chip, recomputed from the full set.
pub fn badges<T: Facet>(records: &[T::Record]) -> Vec<Badge<Selection<T>>> {
    T::KEYS
        .iter()
        .map(|&key| Badge {
            key,
            label: key.label(),
            count: records.iter().filter(|r| key.matches(r)).count(),
        })
        .collect()
}
