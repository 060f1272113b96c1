//! Clipboard writer with session-dependent strategy.
//!
//! Wayland sessions cannot be served reliably by an in-process clipboard
//! owner that exits right after writing, so they go through an external
//! helper (`wl-copy` by default). Every other session writes natively via
//! `arboard`.
//!
//! The strategy is chosen once at startup with [`ClipboardStrategy::detect`]
//! and then used for the single write at the end of the run.
//!
//! On X11 the clipboard is served by its owning process, so a native write
//! also starts a detached copy of the binary in `--hold-clipboard` mode
//! ([`hold`]) that keeps serving the value after emoterm exits, until
//! another application takes the clipboard over.
//!
//! # Example
//!
//! ```rust
//! use emoterm::clipboard::ClipboardStrategy;
//!
//! let strategy = ClipboardStrategy::detect(|_| None, "wl-copy");
//! assert_eq!(strategy, ClipboardStrategy::Native);
//! ```

use crate::domain::{EmotermError, Result};
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Environment variable set by Wayland compositors.
pub const WAYLAND_DISPLAY_VAR: &str = "WAYLAND_DISPLAY";

/// Default helper program used on Wayland.
pub const DEFAULT_WAYLAND_COMMAND: &str = "wl-copy";

/// Marks the end of helper options; everything after it is the value.
const END_OF_OPTIONS: &str = "--";

/// Hidden flag that runs the binary as a clipboard holder.
pub const HOLD_FLAG: &str = "--hold-clipboard";

/// How the selected value reaches the OS clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardStrategy {
    /// In-process plain text write through `arboard`.
    Native,

    /// External helper invoked as `<program> <args...> <value>`.
    ///
    /// Its stdout and stderr are inherited from this process. Detected
    /// helpers get a trailing `--` in `args` so values such as `-_-` are
    /// not parsed as options.
    Command {
        /// Program to run.
        program: String,
        /// Arguments placed before the value.
        args: Vec<String>,
    },
}

impl ClipboardStrategy {
    /// Selects the strategy for the current session.
    ///
    /// `lookup` resolves environment variables; a non-empty
    /// `WAYLAND_DISPLAY` selects the helper command `wayland_command`,
    /// invoked as `<wayland_command> -- <value>`.
    #[must_use]
    pub fn detect<F>(lookup: F, wayland_command: &str) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let wayland = lookup(WAYLAND_DISPLAY_VAR).is_some_and(|v| !v.is_empty());

        let strategy = if wayland {
            Self::Command {
                program: wayland_command.to_string(),
                args: vec![END_OF_OPTIONS.to_string()],
            }
        } else {
            Self::Native
        };

        tracing::debug!(wayland, strategy = ?strategy, "clipboard strategy selected");
        strategy
    }

    /// Writes `value` to the clipboard.
    ///
    /// No read-back is performed.
    ///
    /// # Errors
    ///
    /// Returns [`EmotermError::Clipboard`] if the native clipboard cannot be
    /// opened or written, or if the helper cannot be spawned or exits with a
    /// non-zero status.
    pub fn copy(&self, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("clipboard_copy", value_len = value.len()).entered();

        match self {
            Self::Native => copy_native(value),
            Self::Command { program, args } => copy_with_command(program, args, value),
        }
    }
}

fn copy_native(value: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| EmotermError::Clipboard(format!("failed to access clipboard: {e}")))?;

    clipboard
        .set_text(value)
        .map_err(|e| EmotermError::Clipboard(format!("failed to copy to clipboard: {e}")))?;

    tracing::debug!("value written to native clipboard");
    drop(clipboard);

    if HOLDS_SELECTION {
        match spawn_holder(value) {
            Ok(()) => tracing::debug!("clipboard holder started"),
            Err(e) => tracing::warn!(
                error = %e,
                "clipboard holder unavailable, contents may not outlive this process"
            ),
        }
    }
    Ok(())
}

/// Whether clipboard contents vanish with their owning process.
const HOLDS_SELECTION: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

/// Starts `<current exe> --hold-clipboard` detached, with `value` on stdin.
fn spawn_holder(value: &str) -> io::Result<()> {
    let mut command = Command::new(std::env::current_exe()?);
    command
        .arg(HOLD_FLAG)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // Own process group, so terminal signals aimed at the shell job skip it.
        command.process_group(0);
    }

    let mut child = command.spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(value.as_bytes())?;
    }
    Ok(())
}

/// Serves `value` as the clipboard contents until another application
/// replaces them, then returns.
///
/// Blocks for as long as the value is owned. An empty value returns
/// immediately. On platforms where the clipboard outlives its writer this
/// is a no-op.
///
/// # Errors
///
/// Returns [`EmotermError::Clipboard`] if the clipboard cannot be opened or
/// written.
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
pub fn hold(value: &str) -> Result<()> {
    use arboard::SetExtLinux;

    if value.is_empty() {
        return Ok(());
    }

    let _span = tracing::debug_span!("clipboard_hold", value_len = value.len()).entered();
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| EmotermError::Clipboard(format!("failed to access clipboard: {e}")))?;

    clipboard
        .set()
        .wait()
        .text(value)
        .map_err(|e| EmotermError::Clipboard(format!("failed to hold clipboard: {e}")))?;

    tracing::debug!("clipboard contents replaced, holder exiting");
    Ok(())
}

/// Serves `value` as the clipboard contents until replaced.
///
/// The clipboard here outlives its writer, so there is nothing to hold.
///
/// # Errors
///
/// Never fails on this platform.
#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
pub fn hold(_value: &str) -> Result<()> {
    Ok(())
}

fn copy_with_command(program: &str, args: &[String], value: &str) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .arg(value)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| EmotermError::Clipboard(format!("failed to run {program}: {e}")))?;

    if !status.success() {
        tracing::error!(program, status = %status, "clipboard helper failed");
        return Err(EmotermError::Clipboard(format!("{program} exited with {status}")));
    }

    tracing::debug!(program, "value handed to clipboard helper");
    Ok(())
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
    fn detect_uses_helper_on_wayland() {
        let strategy = ClipboardStrategy::detect(env(&[("WAYLAND_DISPLAY", "wayland-0")]), "wl-copy");
        assert_eq!(
            strategy,
            ClipboardStrategy::Command {
                program: "wl-copy".to_string(),
                args: vec!["--".to_string()],
            }
        );
    }

    #[test]
    fn detect_ignores_empty_wayland_display() {
        let strategy = ClipboardStrategy::detect(env(&[("WAYLAND_DISPLAY", "")]), "wl-copy");
        assert_eq!(strategy, ClipboardStrategy::Native);
    }

    #[test]
    fn detect_defaults_to_native() {
        let strategy = ClipboardStrategy::detect(env(&[("DISPLAY", ":0")]), "wl-copy");
        assert_eq!(strategy, ClipboardStrategy::Native);
    }

    #[cfg(unix)]
    #[test]
    fn command_success_is_reported_as_ok() {
        let strategy = ClipboardStrategy::Command {
            program: "true".to_string(),
            args: vec![],
        };
        assert!(strategy.copy("(^_^)").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn command_failure_is_surfaced() {
        let strategy = ClipboardStrategy::Command {
            program: "false".to_string(),
            args: vec![],
        };
        let err = strategy.copy("(^_^)").unwrap_err();
        assert!(matches!(err, EmotermError::Clipboard(_)));
    }

    #[cfg(unix)]
    #[test]
    fn command_receives_value_as_last_argument() {
        // The value lands in `$0` after `sh -c <script>`.
        let strategy = ClipboardStrategy::Command {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), r#"[ "$0" = "(^_^)" ]"#.to_string()],
        };
        assert!(strategy.copy("(^_^)").is_ok());
        assert!(strategy.copy("(o_o)").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn dash_leading_values_reach_detected_helper_as_operands() {
        // `basename` is getopt-style: without `--` it rejects `-_-` as an option.
        let strategy = ClipboardStrategy::detect(env(&[("WAYLAND_DISPLAY", "wayland-0")]), "basename");

        assert!(strategy.copy("-_-").is_ok());
        assert!(strategy.copy("->_<-").is_ok());
        assert!(strategy.copy("(^_^)").is_ok());
    }

    #[test]
    fn holding_an_empty_value_returns_immediately() {
        assert!(hold("").is_ok());
    }

    #[test]
    fn missing_helper_is_a_clipboard_error() {
        let strategy = ClipboardStrategy::Command {
            program: "emoterm-definitely-missing-helper".to_string(),
            args: vec![],
        };
        assert!(matches!(
            strategy.copy("x").unwrap_err(),
            EmotermError::Clipboard(_)
        ));
    }
}
