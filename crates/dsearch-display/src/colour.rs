//! ANSI escape codes for the terminal output.

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const MAGENTA_UNDERLINED: &str = "\x1b[4;35m";
