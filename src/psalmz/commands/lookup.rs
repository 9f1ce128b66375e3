use crate::commands::{CmdMessage, CmdResult, Labels};
use crate::model::{Record, RecordBook};

pub fn run(book: &RecordBook, labels: &Labels, id: i64) -> CmdResult {
    match book.find(id) {
        Some(record) => {
            let mut result = CmdResult::default().with_records(vec![record.clone()]);
            result.add_message(CmdMessage::success(found_message(labels, record)));
            result
        }
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(not_found_message(labels, id)));
            result
        }
    }
}

pub fn found_message(labels: &Labels, record: &Record) -> String {
    format!("{} {}\n{}", labels.capitalized(), record.id(), record.text())
}

pub fn not_found_message(labels: &Labels, id: i64) -> String {
    format!(
        "Sorry, but there is no such {} denoted with {}.",
        labels.noun, id
    )
}
