//! emoterm: search fastemote.com from the terminal and copy an emoticon.
//!
//! The program is a single linear flow:
//!
//! ```text
//! query → fetch → parse → present (interactive list) → select → copy
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Entry Point (main.rs, cli)                         │  ← Argument parsing
//! └─────────────────────────────────────────────────────┘  ← Error reporting
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Fetcher       │   │ Presenter     │   │ Clipboard     │
//! │ (fetch/)      │   │ (terminal/,   │   │ (clipboard/)  │
//! │ - Search URL  │   │  app/, ui/)   │   │ - arboard     │
//! │ - HTTP GET    │   │ - Input loop  │   │ - wl-copy     │
//! │ - HTML parse  │   │ - State       │   │               │
//! │               │   │ - Rendering   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - EmoticonEntry, EmotermError (domain/)            │
//! │  - Data directory (infrastructure/)                 │
//! │  - File logging (observability/)                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Presenter state machine (Browsing → Done)
//! - [`cli`]: Command-line arguments
//! - [`clipboard`]: Clipboard strategies
//! - [`domain`]: Core types (entries, errors)
//! - [`fetch`]: Search URL, download and HTML parsing
//! - [`infrastructure`]: Platform paths
//! - [`observability`]: Rotating log file and tracing setup
//! - [`terminal`]: Raw mode and input loop
//! - [`ui`]: View models, components and themes
//!
//! # Configuration
//!
//! There is no configuration file. Settings come from the command line and a
//! few environment variables:
//!
//! | Setting            | Flag                   | Environment       |
//! |--------------------|------------------------|-------------------|
//! | Theme              | `--theme`              | `EMOTERM_THEME`   |
//! | Log filter         | `--log-level`          | `EMOTERM_LOG`     |
//! | Wayland helper     | `--clipboard-command`  |                   |
//! | Clipboard strategy |                        | `WAYLAND_DISPLAY` |
//!
//! # Example
//!
//! ```rust
//! use emoterm::app::{handle_event, AppState, Event};
//! use emoterm::fetch::parse_entries;
//!
//! let html = r#"<div class="grid"><a><li><div>(°o°)</div><div>Blush</div></li></a></div>"#;
//! let mut state = AppState::new(parse_entries(html)?, 14);
//!
//! handle_event(&mut state, &Event::Confirm);
//! assert_eq!(state.selection().map(|e| e.value.as_str()), Some("(°o°)"));
//! # Ok::<(), emoterm::EmotermError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod observability;
pub mod terminal;
pub mod ui;

pub use app::{handle_event, AppState, Event, Mode};
pub use cli::Cli;
pub use clipboard::ClipboardStrategy;
pub use domain::{EmotermError, EmoticonEntry, Result};
pub use ui::Theme;

/// Environment variable overriding the log filter.
pub const LOG_ENV_VAR: &str = "EMOTERM_LOG";

/// Environment variable selecting the theme when `--theme` is absent.
pub const THEME_ENV_VAR: &str = "EMOTERM_THEME";

/// Rows shown per page of results.
pub const DEFAULT_PAGE_SIZE: usize = 14;

/// Runtime configuration resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search endpoint the query is appended to.
    pub base_url: String,

    /// Built-in theme name. `None` selects the default theme.
    pub theme_name: Option<String>,

    /// Log filter directive, e.g. `"debug"` or `"emoterm=trace"`.
    pub trace_level: Option<String>,

    /// Helper program used by the Wayland clipboard strategy.
    pub clipboard_command: String,

    /// Rows per page in the result list.
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: fetch::DEFAULT_BASE_URL.to_string(),
            theme_name: None,
            trace_level: None,
            clipboard_command: clipboard::DEFAULT_WAYLAND_COMMAND.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Builds the configuration from parsed arguments and an environment lookup.
    ///
    /// # Precedence
    ///
    /// - Theme: `--theme`, then `EMOTERM_THEME`
    /// - Log filter: `EMOTERM_LOG`, then `--log-level`
    /// - Wayland helper: `--clipboard-command`, then `wl-copy`
    ///
    /// Empty values are treated as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use emoterm::{Cli, Config};
    ///
    /// let cli = Cli { theme: Some("plain".to_string()), ..Default::default() };
    /// let config = Config::from_sources(&cli, |_| None);
    /// assert_eq!(config.theme_name.as_deref(), Some("plain"));
    /// assert_eq!(config.page_size, 14);
    /// ```
    #[must_use]
    pub fn from_sources<F>(cli: &Cli, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let theme_name = non_empty(cli.theme.clone()).or_else(|| non_empty(env(THEME_ENV_VAR)));
        let trace_level = non_empty(env(LOG_ENV_VAR)).or_else(|| non_empty(cli.log_level.clone()));
        let clipboard_command = non_empty(cli.clipboard_command.clone())
            .unwrap_or_else(|| clipboard::DEFAULT_WAYLAND_COMMAND.to_string());

        Self {
            theme_name,
            trace_level,
            clipboard_command,
            ..Self::default()
        }
    }
}

/// Resolves the configured theme, falling back to the default.
///
/// Unknown theme names are logged and replaced by the default theme rather
/// than aborting the search.
#[must_use]
pub fn resolve_theme(config: &Config) -> Theme {
    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::load(theme_name).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "falling back to default theme");
            Theme::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_flags_or_environment() {
        let config = Config::from_sources(&Cli::default(), env(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "https://www.fastemote.com/search?q=");
        assert_eq!(config.clipboard_command, "wl-copy");
    }

    #[test]
    fn theme_flag_beats_environment() {
        let cli = Cli {
            theme: Some("plain".to_string()),
            ..Cli::default()
        };
        let config = Config::from_sources(&cli, env(&[("EMOTERM_THEME", "catppuccin-latte")]));
        assert_eq!(config.theme_name.as_deref(), Some("plain"));

        let config = Config::from_sources(&Cli::default(), env(&[("EMOTERM_THEME", "catppuccin-latte")]));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    }

    #[test]
    fn log_environment_beats_flag() {
        let cli = Cli {
            log_level: Some("warn".to_string()),
            ..Cli::default()
        };
        let config = Config::from_sources(&cli, env(&[("EMOTERM_LOG", "trace")]));
        assert_eq!(config.trace_level.as_deref(), Some("trace"));

        let config = Config::from_sources(&cli, env(&[("EMOTERM_LOG", "")]));
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
    }

    #[test]
    fn clipboard_command_flag_overrides_default() {
        let cli = Cli {
            clipboard_command: Some("wl-copy-custom".to_string()),
            ..Cli::default()
        };
        assert_eq!(Config::from_sources(&cli, env(&[])).clipboard_command, "wl-copy-custom");
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config).name, ui::theme::DEFAULT_THEME);

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config).name, "catppuccin-latte");
    }
}
