use crate::commands::MessageLevel;
use crate::error::Result;
use crate::interaction::{Interaction, Prompt};
use std::collections::VecDeque;

/// An [`Interaction`] that replays scripted answers and records what it was shown.
///
/// Once the script runs out every further prompt is answered with
/// [`Prompt::Cancelled`].
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    answers: VecDeque<Prompt>,
    pub questions: Vec<String>,
    pub shown: Vec<(MessageLevel, String)>,
}

impl ScriptedInteraction {
    pub fn new(answers: impl IntoIterator<Item = Prompt>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Shorthand for a script of plain integer answers.
    pub fn answering(ids: &[i64]) -> Self {
        Self::new(ids.iter().copied().map(Prompt::Value))
    }

    pub fn messages_at(&self, level: MessageLevel) -> Vec<&str> {
        self.shown
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

impl Interaction for ScriptedInteraction {
    fn prompt_for_integer(&mut self, question: &str) -> Result<Prompt> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or(Prompt::Cancelled))
    }

    fn show_message(&mut self, level: MessageLevel, text: &str) -> Result<()> {
        self.shown.push((level, text.to_string()));
        Ok(())
    }
}
