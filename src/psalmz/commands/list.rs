use crate::commands::{CmdMessage, CmdResult, Labels};
use crate::model::RecordBook;

pub fn run(book: &RecordBook, labels: &Labels, from: Option<i64>, to: Option<i64>) -> CmdResult {
    let records = book.between(from, to).to_vec();
    let mut result = CmdResult::default().with_range(book.range());

    if records.is_empty() {
        result.add_message(CmdMessage::info(format!("No {}s found.", labels.noun)));
    }

    result.with_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderPolicy, Record};

    fn book() -> RecordBook {
        let records = (1..=10).map(|i| Record::new(i, format!("v{}", i))).collect();
        RecordBook::new(records, OrderPolicy::Reject).unwrap()
    }

    #[test]
    fn test_list_all() {
        let result = run(&book(), &Labels::default(), None, None);
        assert_eq!(result.records.len(), 10);
        assert_eq!(result.range, Some((1, 10)));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_list_window() {
        let result = run(&book(), &Labels::default(), Some(4), Some(6));
        let ids: Vec<i64> = result.records.iter().map(Record::id).collect();
        assert_eq!(ids, vec![4, 5, 6]);
    }

    #[test]
    fn test_list_outside_range() {
        let result = run(&book(), &Labels::default(), Some(50), None);
        assert!(result.records.is_empty());
        assert_eq!(result.messages[0].content, "No psalms found.");
    }
}
