use super::print::styled;
use psalmz::api::MessageLevel;
use psalmz::error::Result;
use psalmz::interaction::{Interaction, Prompt};
use std::io::{BufRead, Write};

/// Prompts on a line-based terminal.
///
/// End of input, an empty line, `q` and `quit` cancel. Anything else that is
/// not an integer is answered with a hint and the question is asked again.
pub(super) struct TerminalInteraction<R, W> {
    input: R,
    output: W,
    noun: String,
}

impl<R: BufRead, W: Write> TerminalInteraction<R, W> {
    pub(super) fn new(input: R, output: W, noun: impl Into<String>) -> Self {
        Self {
            input,
            output,
            noun: noun.into(),
        }
    }
}

impl<R: BufRead, W: Write> Interaction for TerminalInteraction<R, W> {
    fn prompt_for_integer(&mut self, question: &str) -> Result<Prompt> {
        loop {
            write!(self.output, "{} ", question)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(Prompt::Cancelled);
            }

            let answer = line.trim();
            if is_cancel(answer) {
                return Ok(Prompt::Cancelled);
            }

            match answer.parse() {
                Ok(id) => return Ok(Prompt::Value(id)),
                Err(_) => {
                    let hint = format!(
                        "Please enter an integer to signify what {} you want to see.",
                        self.noun
                    );
                    self.show_message(MessageLevel::Error, &hint)?;
                }
            }
        }
    }

    fn show_message(&mut self, level: MessageLevel, text: &str) -> Result<()> {
        writeln!(self.output, "{}", styled(level, text))?;
        Ok(())
    }
}

fn is_cancel(answer: &str) -> bool {
    answer.is_empty() || answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit")
}
