//! File-based diagnostic logging.
//!
//! The presenter owns the terminal, so diagnostics never go to stdout or
//! stderr. Instead a `tracing-subscriber` fmt layer writes plain-text events
//! to a size-rotated log file:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → emoterm.log
//! ```
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `EMOTERM_LOG` environment variable (highest priority)
//! 2. `--log-level` command-line option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use init::{init_tracing, LOG_FILE_NAME};
