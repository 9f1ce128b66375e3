//! # CLI Behavior
//!
//! This is **one possible UI client** for psalmz. It is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution (`psalmz`)
//!
//! Running `psalmz` with no subcommand starts the interactive lookup: the
//! valid range is shown, then ids are read from stdin until an empty line,
//! `q`, or end of input.
//!
//! ## Which file?
//!
//! `--file` wins, then the `file` config key, then `Psalms.txt` in the
//! current directory. The config directory is `$PSALMZ_HOME` when set,
//! otherwise the platform config dir.
//!
//! ## Module Structure
//!
//! - `args`: Argument parsing via clap
//! - `commands`: Context setup and per-command handlers
//! - `print`: Output formatting (messages, record lists)
//! - `terminal`: The stdin/stdout [`Interaction`](psalmz::interaction::Interaction)

mod args;
mod commands;
mod print;
mod terminal;

pub use commands::run;
