//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) via
//! `compute_viewmodel()` and consumed by the renderer. They contain no
//! business logic, only display-ready data for the current page.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// List title.
    pub header: HeaderInfo,

    /// Rows of the current page that fit on screen, in order.
    pub display_items: Vec<DisplayItem>,

    /// Rows reserved for the list, so the footer stays put on short pages.
    pub list_height: usize,

    /// Page indicator; `None` when everything fits on one page.
    pub pagination: Option<PaginationInfo>,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Shown instead of the list when there are no entries.
    pub empty_state: Option<EmptyState>,

    /// Terminal width in columns; rows are truncated to fit.
    pub cols: usize,
}

/// One list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Full row text, `"<index>. <name>: <value>"`.
    pub text: String,

    /// Whether this row is highlighted.
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Page indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Zero-based current page.
    pub page: usize,
    /// Total number of pages.
    pub total: usize,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
