//! Domain layer for emoterm.
//!
//! Core types shared by every other layer, independent of the network,
//! terminal and clipboard backends.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Emoticon entry model and display-line parsing

pub mod entry;
pub mod error;

pub use entry::EmoticonEntry;
pub use error::{EmotermError, Result};
