use crate::error::{PsalmzError, Result};
use crate::lookup;
use tracing::{debug, warn};

/// One lookup-able entry: an integer id paired with its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: i64,
    text: String,
}

impl Record {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// What to do when records do not arrive in ascending id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderPolicy {
    /// Fail with [`PsalmzError::Unsorted`].
    #[default]
    Reject,
    /// Sort the records by id before use.
    Sort,
}

/// A collection of records sorted strictly ascending by id.
///
/// Binary search is only correct on sorted input, so the order is checked
/// once here instead of being trusted. Every `RecordBook` upholds it.
#[derive(Debug, Clone, Default)]
pub struct RecordBook {
    records: Vec<Record>,
}

impl RecordBook {
    pub fn new(mut records: Vec<Record>, policy: OrderPolicy) -> Result<Self> {
        if policy == OrderPolicy::Sort && !is_ascending(&records) {
            warn!(count = records.len(), "records out of order, sorting by id");
            records.sort_by_key(Record::id);
        }

        for (i, pair) in records.windows(2).enumerate() {
            let (previous, current) = (pair[0].id, pair[1].id);
            if previous == current {
                return Err(PsalmzError::DuplicateId { id: current });
            }
            if previous > current {
                // records come from two-line groups, so record n starts on line 2n + 1
                return Err(PsalmzError::Unsorted {
                    line: 2 * (i + 1) + 1,
                    previous,
                    id: current,
                });
            }
        }

        debug!(count = records.len(), "record book ready");
        Ok(Self { records })
    }

    pub fn find(&self, id: i64) -> Option<&Record> {
        lookup::find(&self.records, id)
    }

    /// First and last id, or `None` for an empty book.
    pub fn range(&self) -> Option<(i64, i64)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.id, last.id)),
            _ => None,
        }
    }

    /// Records whose id falls in the inclusive range; open bounds are unbounded.
    pub fn between(&self, from: Option<i64>, to: Option<i64>) -> &[Record] {
        let start = match from {
            Some(lo) => self.records.partition_point(|r| r.id < lo),
            None => 0,
        };
        let end = match to {
            Some(hi) => self.records.partition_point(|r| r.id <= hi),
            None => self.records.len(),
        };
        if start >= end {
            return &[];
        }
        &self.records[start..end]
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn is_ascending(records: &[Record]) -> bool {
    records.windows(2).all(|pair| pair[0].id < pair[1].id)
}
