//! Command-line interface.
//!
//! ```text
//! emoterm [OPTIONS] [QUERY] [EXTRA...]
//! ```
//!
//! Only the first positional argument is used as the query; anything after
//! it, dashes included, is accepted and ignored. Options go before the
//! query. Queries may start with `-` (e.g. `emoterm -_-`) as long as they
//! are not a known option. A missing query is reported by [`Cli::query`]
//! rather than by clap, so the exit status stays under the program's
//! control.

use crate::domain::{EmotermError, Result};
use clap::Parser;

/// Message printed when no query is given.
pub const USAGE_MESSAGE: &str = "Cant search without a query :3";

/// Parsed command-line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "emoterm", version, about = "Search fastemote.com and copy an emoticon to the clipboard")]
pub struct Cli {
    /// Search query, e.g. "happy cat"
    #[arg(allow_hyphen_values = true)]
    pub query: Option<String>,

    /// Additional positional arguments (ignored)
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Built-in colour theme (catppuccin-mocha, catppuccin-latte, plain)
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Log filter written to the log file, e.g. "debug" (overridden by EMOTERM_LOG)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Clipboard helper used on Wayland sessions
    #[arg(long, value_name = "PROGRAM")]
    pub clipboard_command: Option<String>,

    /// Serve the value read from stdin as clipboard contents until replaced
    #[arg(long, hide = true)]
    pub hold_clipboard: bool,
}

impl Cli {
    /// Returns the search query.
    ///
    /// # Errors
    ///
    /// Returns [`EmotermError::Usage`] if no query was given or it is blank.
    pub fn query(&self) -> Result<&str> {
        if !self.extra.is_empty() {
            tracing::debug!(ignored = ?self.extra, "ignoring extra positional arguments");
        }

        self.query
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| EmotermError::Usage(USAGE_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("emoterm").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn first_positional_is_the_query() {
        let cli = parse(&["happy cat", "ignored", "also ignored"]);
        assert_eq!(cli.query().unwrap(), "happy cat");
        assert_eq!(cli.extra, vec!["ignored", "also ignored"]);
    }

    #[test]
    fn missing_query_is_a_usage_error() {
        let err = parse(&[]).query().unwrap_err();
        assert!(matches!(err, EmotermError::Usage(_)));
        assert_eq!(err.to_string(), USAGE_MESSAGE);
    }

    #[test]
    fn blank_query_is_a_usage_error() {
        assert!(parse(&["   "]).query().is_err());
    }

    #[test]
    fn extra_arguments_with_dashes_are_ignored() {
        let cli = parse(&["cat", "--verbose"]);
        assert_eq!(cli.query().unwrap(), "cat");
        assert_eq!(cli.extra, vec!["--verbose"]);

        let cli = parse(&["cat", "-x", "--", "more"]);
        assert_eq!(cli.query().unwrap(), "cat");
        assert!(cli.extra.contains(&"-x".to_string()));
    }

    #[test]
    fn dash_leading_query_is_accepted() {
        assert_eq!(parse(&["-_-"]).query().unwrap(), "-_-");
        assert_eq!(parse(&["->_<-", "extra"]).query().unwrap(), "->_<-");
    }

    #[test]
    fn hold_flag_is_parsed_without_a_query() {
        let cli = parse(&["--hold-clipboard"]);
        assert!(cli.hold_clipboard);
        assert!(cli.query.is_none());
    }

    #[test]
    fn options_are_parsed() {
        let cli = parse(&["--theme", "plain", "--log-level", "debug", "shrug"]);
        assert_eq!(cli.theme.as_deref(), Some("plain"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.query().unwrap(), "shrug");
    }
}
