/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

const ROW_CYCLE: [&str; 5] = [BLUE, CYAN, YELLOW, MAGENTA, GREEN];

/// Stable per-row color for calendar rows, cycling through the palette.
pub fn color_for_row(index: usize) -> &'static str {
    ROW_CYCLE[index % ROW_CYCLE.len()]
}

/// Grey out placeholder values, leave real values untouched.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "..." || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
