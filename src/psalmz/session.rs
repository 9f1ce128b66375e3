//! # Lookup Session
//!
//! The dialog flow: introduce the book and its valid range, ask for an id,
//! report the record or its absence, and repeat until the user cancels (or
//! after one lookup when `repeat` is off).

use crate::commands::{self, Labels, MessageLevel};
use crate::error::Result;
use crate::interaction::{Interaction, Prompt};
use crate::model::RecordBook;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Keep prompting after each lookup.
    pub repeat: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { repeat: true }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub lookups: usize,
    pub found: usize,
    pub missing: usize,
}

pub fn run<I: Interaction>(
    book: &RecordBook,
    labels: &Labels,
    mut interaction: I,
    options: SessionOptions,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    match book.range() {
        Some((first, last)) => interaction.show_message(
            MessageLevel::Info,
            &format!(
                "This program searches the {}s to find the one asked for. Valid range is ({} - {}).",
                labels.noun, first, last
            ),
        )?,
        None => {
            interaction.show_message(
                MessageLevel::Warning,
                &format!("There are no {}s to search.", labels.noun),
            )?;
            return Ok(summary);
        }
    }

    let question = format!("What {} would you like to see?", labels.noun);
    loop {
        let id = match interaction.prompt_for_integer(&question)? {
            Prompt::Value(id) => id,
            Prompt::Cancelled => break,
        };

        summary.lookups += 1;
        match book.find(id) {
            Some(record) => {
                summary.found += 1;
                info!(id, "found");
                interaction.show_message(
                    MessageLevel::Success,
                    &commands::lookup::found_message(labels, record),
                )?;
            }
            None => {
                summary.missing += 1;
                info!(id, "not found");
                interaction.show_message(
                    MessageLevel::Error,
                    &commands::lookup::not_found_message(labels, id),
                )?;
            }
        }

        if !options.repeat {
            break;
        }
    }

    Ok(summary)
}
