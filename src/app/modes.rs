//! Presenter session mode.
//!
//! The session is a two-state machine:
//! - **Browsing**: navigation and resize events move the cursor or change layout
//! - **Done**: terminal state; the selection (if any) is final and input is ignored
//!
//! # Example
//!
//! ```rust
//! use emoterm::app::Mode;
//!
//! let mode = Mode::Browsing;
//! assert!(!mode.is_done());
//! ```

/// Current presenter session mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The user is moving through the list.
    #[default]
    Browsing,

    /// The session has ended, either by confirming a row or by cancelling.
    Done,
}

impl Mode {
    /// Returns `true` once the session has ended.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}
