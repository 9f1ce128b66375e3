use colored::{ColoredString, Colorize};
use psalmz::api::{CmdMessage, MessageLevel};
use psalmz::config::{PsalmzConfig, KEYS};
use psalmz::model::Record;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;

pub(super) fn styled(level: MessageLevel, text: &str) -> ColoredString {
    match level {
        MessageLevel::Info => text.dimmed(),
        MessageLevel::Success => text.green(),
        MessageLevel::Warning => text.yellow(),
        MessageLevel::Error => text.red(),
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", styled(message.level, &message.content));
    }
}

pub(super) fn print_config(config: &PsalmzConfig) {
    for key in KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

pub(super) fn print_records(records: &[Record], full: bool) {
    let id_width = records
        .iter()
        .map(|r| r.id().to_string().len())
        .max()
        .unwrap_or(0);

    for record in records {
        println!("{}", format_record_line(record, id_width, full));
    }
}

fn format_record_line(record: &Record, id_width: usize, full: bool) -> String {
    let idx = format!("{:>width$}. ", record.id(), width = id_width);
    let text = if full {
        record.text().to_string()
    } else {
        truncate_to_width(record.text(), LINE_WIDTH.saturating_sub(idx.width()))
    };
    format!("{}{}", idx.yellow(), text)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}
