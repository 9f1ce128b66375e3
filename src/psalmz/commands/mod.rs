use crate::config::PsalmzConfig;
use crate::model::Record;

pub mod check;
pub mod config;
pub mod list;
pub mod lookup;

/// Words used when talking to the user about records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Singular, lowercase noun for one record ("psalm").
    pub noun: String,
    /// Caption shown with prompts and messages.
    pub title: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self::from_config(&PsalmzConfig::default())
    }
}

impl Labels {
    pub fn from_config(config: &PsalmzConfig) -> Self {
        Self {
            noun: config.label.clone(),
            title: config.title.clone(),
        }
    }

    /// The noun with its first letter uppercased ("Psalm").
    pub fn capitalized(&self) -> String {
        let mut chars = self.noun.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub records: Vec<Record>,
    pub range: Option<(i64, i64)>,
    pub config: Option<PsalmzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_range(mut self, range: Option<(i64, i64)>) -> Self {
        self.range = range;
        self
    }

    pub fn with_config(mut self, config: PsalmzConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message is error-level.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized_label() {
        let labels = Labels {
            noun: "psalm".into(),
            title: "Psalm Lookup".into(),
        };
        assert_eq!(labels.capitalized(), "Psalm");

        let empty = Labels {
            noun: String::new(),
            title: String::new(),
        };
        assert_eq!(empty.capitalized(), "");
    }

    #[test]
    fn test_has_errors() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("fine"));
        assert!(!result.has_errors());
        result.add_message(CmdMessage::error("boom"));
        assert!(result.has_errors());
    }
}
