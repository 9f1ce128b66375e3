//! # Record Parser
//!
//! A book file is a sequence of two-line groups:
//!
//! ```text
//! 23
//! The Lord is my shepherd
//! 24
//! Praise the Lord
//! ```
//!
//! Lines alternate strictly between an id line and a text line, starting
//! with an id line. Records come out in file order; ordering is checked
//! later by [`RecordBook`](crate::model::RecordBook), not here.

use crate::error::{PsalmzError, Result};
use crate::loader::Buffer;
use crate::model::Record;
use tracing::{debug, warn};

/// Parses a loaded buffer, consuming it.
pub fn parse_buffer(buffer: Buffer) -> Result<Vec<Record>> {
    parse(buffer.as_str())
}

/// Parses `content` into records in file order.
///
/// An id line that is not an integer aborts with [`PsalmzError::Format`].
/// A final id line with no text line after it is dropped, as are blank
/// lines at the very end of the file.
pub fn parse(content: &str) -> Result<Vec<Record>> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let mut records = Vec::with_capacity(lines.len() / 2);
    let mut pending: Option<(usize, i64)> = None;

    for (idx, line) in lines.iter().copied().enumerate() {
        let line_no = idx + 1;

        match pending.take() {
            None if is_blank_tail(&lines[idx..]) => {
                debug!(line = line_no, "ignoring trailing blank lines");
                break;
            }
            None => pending = Some((line_no, parse_id(line, line_no)?)),
            Some((_, id)) => records.push(Record::new(id, line)),
        }
    }

    if let Some((line, id)) = pending {
        warn!(line, id, "discarding id line with no text");
    }

    debug!(count = records.len(), "parsed records");
    Ok(records)
}

fn is_blank_tail(lines: &[&str]) -> bool {
    lines.iter().all(|line| line.trim().is_empty())
}

fn parse_id(line: &str, line_no: usize) -> Result<i64> {
    line.trim().parse().map_err(|_| PsalmzError::Format {
        line: line_no,
        content: line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_example() {
        let records = parse("23\nThe Lord is my shepherd\n24\nPraise the Lord\n").unwrap();
        assert_eq!(
            records,
            vec![
                Record::new(23, "The Lord is my shepherd"),
                Record::new(24, "Praise the Lord"),
            ]
        );
    }

    #[test]
    fn test_malformed_id_aborts() {
        let err = parse("abc\ntext\n").unwrap_err();
        match err {
            PsalmzError::Format { line, content } => {
                assert_eq!(line, 1);
                assert_eq!(content, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_id_reports_its_line() {
        let err = parse("1\none\n2\ntwo\nthree\nthree\n").unwrap_err();
        assert!(matches!(err, PsalmzError::Format { line: 5, .. }));
    }

    #[test]
    fn test_trailing_odd_line_discarded() {
        let records = parse("1\none\n2\n").unwrap();
        assert_eq!(records, vec![Record::new(1, "one")]);

        let records = parse("1\none\n2").unwrap();
        assert_eq!(records, vec![Record::new(1, "one")]);
    }

    #[test]
    fn test_missing_final_newline() {
        let records = parse("1\none\n2\ntwo").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], Record::new(2, "two"));
    }

    #[test]
    fn test_crlf_and_padded_ids() {
        let records = parse(" 7 \r\nseven\r\n8\r\n  eight, indented\r\n").unwrap();
        assert_eq!(
            records,
            vec![Record::new(7, "seven"), Record::new(8, "  eight, indented")]
        );
    }

    #[test]
    fn test_lone_carriage_return_at_end_is_stripped() {
        let records = parse("1\none\r").unwrap();
        assert_eq!(records, vec![Record::new(1, "one")]);

        let records = parse("1\r\none\r\n2\r\ntwo\r").unwrap();
        assert_eq!(records, vec![Record::new(1, "one"), Record::new(2, "two")]);
    }

    #[test]
    fn test_trailing_blank_lines_ignored() {
        let records = parse("1\none\n\n\n").unwrap();
        assert_eq!(records, vec![Record::new(1, "one")]);

        let records = parse("1\none\r\n\r\n  \n").unwrap();
        assert_eq!(records, vec![Record::new(1, "one")]);
    }

    #[test]
    fn test_blank_line_between_records_is_format_error() {
        let err = parse("1\none\n\n2\ntwo\n").unwrap_err();
        assert!(matches!(err, PsalmzError::Format { line: 3, .. }));
    }

    #[test]
    fn test_empty_text_line_is_kept() {
        let records = parse("1\n\n2\ntwo\n").unwrap();
        assert_eq!(records, vec![Record::new(1, ""), Record::new(2, "two")]);
    }

    #[test]
    fn test_blank_id_line_is_format_error() {
        let err = parse("\ntext\n").unwrap_err();
        assert!(matches!(err, PsalmzError::Format { line: 1, .. }));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_then_find_returns_original_text() {
        let texts = ["alpha", "beta: with colon", "gamma 12", "", "delta\ttab"];
        let content: String = texts
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}\n{}\n", i * 10, t))
            .collect();

        let records = parse(&content).unwrap();
        for (i, text) in texts.iter().enumerate() {
            let found = crate::lookup::find(&records, (i * 10) as i64).unwrap();
            assert_eq!(found.text(), *text);
        }
    }

    #[test]
    fn test_parse_buffer_consumes_loaded_content() {
        let buffer = Buffer::new("Psalms.txt", "150\nPraise ye the Lord\n");
        let records = parse_buffer(buffer).unwrap();
        assert_eq!(records, vec![Record::new(150, "Praise ye the Lord")]);
    }
}
