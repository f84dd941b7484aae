use crate::config::ColorMode;
use std::io::IsTerminal;

/// Check if stderr is connected to a TTY
pub fn is_stderr_tty() -> bool {
    std::io::stderr().is_terminal()
}

/// Determine if colors should be used based on CLI color mode and environment
pub fn should_use_colors_with_mode(color_mode: &ColorMode) -> bool {
    match color_mode {
        ColorMode::Never => false,
        // Even with Always, respect NO_COLOR
        ColorMode::Always => std::env::var("NO_COLOR").is_err(),
        ColorMode::Auto => should_use_colors_auto(),
    }
}

/// Auto color detection logic
fn should_use_colors_auto() -> bool {
    // Diagnostics go to stderr, so that is the stream that must be a terminal
    if !is_stderr_tty() {
        return false;
    }

    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    true
}
