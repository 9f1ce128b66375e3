use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "psalmz", bin_name = "psalmz", version)]
#[command(about = "Look up numbered entries in a plain text book", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Book file to read (defaults to the configured file, then Psalms.txt)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Sort an out-of-order book instead of rejecting it
    #[arg(long, global = true)]
    pub sort: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Prompt for ids until cancelled (the default)
    #[command(alias = "i")]
    Interactive {
        /// Stop after a single lookup
        #[arg(long)]
        once: bool,
    },

    /// Look up a single id and print it
    #[command(alias = "get")]
    Lookup {
        /// Id of the entry
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// List entries, optionally within an id range
    #[command(alias = "ls")]
    List {
        /// Lowest id to include
        #[arg(long, allow_negative_numbers = true)]
        from: Option<i64>,

        /// Highest id to include
        #[arg(long, allow_negative_numbers = true)]
        to: Option<i64>,

        /// Print full texts instead of truncating them
        #[arg(long)]
        full: bool,
    },

    /// Load the book and report its size and valid range
    Check,

    /// Get or set configuration
    Config {
        /// Configuration key (file, label, title, sort-unsorted)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("psalmz").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_naked_invocation() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
        assert!(!cli.sort);
    }

    #[test]
    fn test_lookup_accepts_negative_ids() {
        let cli = parse(&["lookup", "-3"]);
        assert_eq!(cli.command, Some(Commands::Lookup { id: -3 }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["get", "23", "--file", "book.txt", "--sort"]);
        assert_eq!(cli.command, Some(Commands::Lookup { id: 23 }));
        assert_eq!(cli.file, Some(PathBuf::from("book.txt")));
        assert!(cli.sort);
    }

    #[test]
    fn test_list_range() {
        let cli = parse(&["ls", "--from", "3", "--to", "9"]);
        assert_eq!(
            cli.command,
            Some(Commands::List {
                from: Some(3),
                to: Some(9),
                full: false
            })
        );
    }

    #[test]
    fn test_lookup_rejects_non_integer() {
        assert!(Cli::try_parse_from(["psalmz", "lookup", "twenty"]).is_err());
    }
}
