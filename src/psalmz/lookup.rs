//! # Lookup Engine
//!
//! Recursive binary search over records sorted ascending by id.
//!
//! Sortedness is a precondition: callers normally go through
//! [`RecordBook`](crate::model::RecordBook), which checks it once at
//! construction. On unsorted input the search may miss records that are
//! present, but it never panics.

use crate::model::Record;
use std::cmp::Ordering;

/// Outcome of a traced search: the record, if any, and how many ids were compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe<'a> {
    pub record: Option<&'a Record>,
    pub comparisons: usize,
}

/// Finds the record with `id`, or `None` when it is not present.
pub fn find(records: &[Record], id: i64) -> Option<&Record> {
    find_traced(records, id).record
}

/// Like [`find`], also counting the comparisons made.
pub fn find_traced(records: &[Record], id: i64) -> Probe<'_> {
    let mut comparisons = 0;
    let record = search(records, id, &mut comparisons);
    Probe {
        record,
        comparisons,
    }
}

fn search<'a>(records: &'a [Record], id: i64, comparisons: &mut usize) -> Option<&'a Record> {
    if records.is_empty() {
        return None;
    }

    let middle = (records.len() - 1) / 2;
    *comparisons += 1;

    match records[middle].id().cmp(&id) {
        Ordering::Equal => Some(&records[middle]),
        Ordering::Greater => search(&records[..middle], id, comparisons),
        Ordering::Less => search(&records[middle + 1..], id, comparisons),
    }
}
