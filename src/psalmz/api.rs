//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It owns the loaded [`RecordBook`] and the [`Labels`] used in
//! messages, dispatches to `commands/*.rs`, and returns [`CmdResult`]s.
//!
//! Like the commands it wraps, the API never prints and never exits. A lookup
//! that finds nothing is an error-level message in the result, not an `Err`;
//! `Err` is reserved for load and format failures.

use crate::commands::{self, CmdResult, Labels};
use crate::error::Result;
use crate::interaction::Interaction;
use crate::loader;
use crate::model::{OrderPolicy, RecordBook};
use crate::parser;
use crate::session::{self, SessionOptions, SessionSummary};
use std::path::Path;

pub struct PsalmzApi {
    book: RecordBook,
    labels: Labels,
}

impl PsalmzApi {
    /// Load, parse and validate the book at `path`.
    pub fn open<P: AsRef<Path>>(path: P, policy: OrderPolicy, labels: Labels) -> Result<Self> {
        let buffer = loader::load(path)?;
        let records = parser::parse_buffer(buffer)?;
        let book = RecordBook::new(records, policy)?;
        Ok(Self::from_book(book, labels))
    }

    pub fn from_book(book: RecordBook, labels: Labels) -> Self {
        Self { book, labels }
    }

    pub fn lookup(&self, id: i64) -> CmdResult {
        commands::lookup::run(&self.book, &self.labels, id)
    }

    pub fn list(&self, from: Option<i64>, to: Option<i64>) -> CmdResult {
        commands::list::run(&self.book, &self.labels, from, to)
    }

    pub fn check(&self) -> CmdResult {
        commands::check::run(&self.book, &self.labels)
    }

    /// Run the interactive lookup flow over `interaction`.
    pub fn interact<I: Interaction>(
        &self,
        interaction: I,
        options: SessionOptions,
    ) -> Result<SessionSummary> {
        session::run(&self.book, &self.labels, interaction, options)
    }

    pub fn book(&self) -> &RecordBook {
        &self.book
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, MessageLevel};

/// Config commands work on the config directory and do not need a loaded book.
pub fn config(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(config_dir, action)
}
