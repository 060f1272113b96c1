//! Top-level rendering coordinator.
//!
//! Computes the view model from [`AppState`] and delegates to the list or
//! empty-state layout. Each frame clears the screen first, so a frame is
//! always a complete redraw.
//!
//! # Example
//!
//! ```rust
//! use emoterm::app::AppState;
//! use emoterm::ui::{render, Theme};
//!
//! let mut state = AppState::new(vec![], 14);
//! state.resize(80, 24);
//! let mut frame = Vec::new();
//! render(&mut frame, &state, &Theme::default())?;
//! assert!(String::from_utf8_lossy(&frame).contains("No emoticons found"));
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::clear_screen;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use std::io::{self, Write};

/// Renders one frame of the presenter to `out` and flushes it.
///
/// # Errors
///
/// Propagates write and flush errors from `out`.
pub fn render<W: Write>(out: &mut W, state: &AppState, theme: &Theme) -> io::Result<()> {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(out, &viewmodel, theme)?;
    out.flush()
}

fn render_viewmodel<W: Write>(out: &mut W, vm: &UIViewModel, theme: &Theme) -> io::Result<()> {
    clear_screen(out)?;

    if let Some(empty) = &vm.empty_state {
        return components::render_empty_mode(out, vm, empty, theme);
    }

    components::render_list_mode(out, vm, theme)
}
