//! Application layer: the presenter session state machine.
//!
//! This module sits between the terminal layer (raw input, screen ownership)
//! and the UI layer (view models, ANSI output). It holds no I/O of its own.
//!
//! # Architecture
//!
//! ```text
//! Key/Resize → Event → handle_event → AppState → compute_viewmodel → render
//!                                         ↓
//!                               Done → Option<EmoticonEntry>
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Browsing/Done session mode
//! - [`state`]: Session state container and view model computation

pub mod handler;
pub mod modes;
pub mod state;

pub use handler::{handle_event, Event};
pub use modes::Mode;
pub use state::AppState;
