use crate::commands::{CmdMessage, CmdResult, Labels};
use crate::model::RecordBook;

/// Summarizes a loaded book: how many records and which ids they span.
pub fn run(book: &RecordBook, labels: &Labels) -> CmdResult {
    let mut result = CmdResult::default().with_range(book.range());

    match book.range() {
        Some((first, last)) => result.add_message(CmdMessage::success(format!(
            "{} {}s, valid range is ({} - {}).",
            book.len(),
            labels.noun,
            first,
            last
        ))),
        None => result.add_message(CmdMessage::warning(format!(
            "The book contains no {}s.",
            labels.noun
        ))),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{OrderPolicy, Record};

    #[test]
    fn test_check_summary() {
        let book = RecordBook::new(
            vec![Record::new(1, "a"), Record::new(150, "b")],
            OrderPolicy::Reject,
        )
        .unwrap();
        let result = run(&book, &Labels::default());
        assert_eq!(result.range, Some((1, 150)));
        assert_eq!(
            result.messages[0].content,
            "2 psalms, valid range is (1 - 150)."
        );
    }

    #[test]
    fn test_check_empty() {
        let result = run(&RecordBook::default(), &Labels::default());
        assert_eq!(result.range, None);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
