//! # Interaction Layer
//!
//! The session never talks to a terminal or a dialog toolkit directly. It asks
//! an [`Interaction`] for ids and hands it messages to show, so the same flow
//! runs against a terminal (the `psalmz` binary), a GUI, or a scripted
//! provider in tests (`ScriptedInteraction`, behind the `test_utils` feature).

use crate::commands::MessageLevel;
use crate::error::Result;

/// Answer to an integer prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Value(i64),
    /// The user declined to answer. This ends the session normally.
    Cancelled,
}

pub trait Interaction {
    /// Ask `question` until an integer is given or the user cancels.
    fn prompt_for_integer(&mut self, question: &str) -> Result<Prompt>;

    /// Show `text` to the user.
    fn show_message(&mut self, level: MessageLevel, text: &str) -> Result<()>;
}

impl<T: Interaction + ?Sized> Interaction for &mut T {
    fn prompt_for_integer(&mut self, question: &str) -> Result<Prompt> {
        (**self).prompt_for_integer(question)
    }

    fn show_message(&mut self, level: MessageLevel, text: &str) -> Result<()> {
        (**self).show_message(level, text)
    }
}
