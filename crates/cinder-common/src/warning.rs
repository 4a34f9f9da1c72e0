//! Diagnostic warnings with colored terminal output.
//!
//! Warnings report recoverable oddities in a template (for example a
//! duplicate attribute declaration) without affecting the parse result.
//! Each unique message is printed once per process so a template parsed in
//! a render loop does not flood stderr.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

/// ANSI escape for yellow text.
const YELLOW: &str = "\x1b[33m";
/// ANSI escape to reset styling.
const RESET: &str = "\x1b[0m";

/// Messages already printed in this process.
static SEEN: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Warn about a recoverable oddity. Prints once per unique
/// `(component, message)` pair and is silent on repeats.
///
/// # Panics
/// Panics if the warning-set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("{component}\u{1f}{message}");
    let first_time = SEEN.lock().unwrap().insert(key);

    if first_time {
        eprintln!("{YELLOW}[cinder {component}] warning: {message}{RESET}");
    }
}

/// Forget every recorded warning so it may be printed again.
/// Intended for use between independent parses in long-lived processes.
///
/// # Panics
/// Panics if the warning-set mutex is poisoned.
pub fn reset_warnings() {
    SEEN.lock().unwrap().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_warnings_are_recorded_once() {
        reset_warnings();
        warn_once("Test", "same message");
        warn_once("Test", "same message");
        assert_eq!(SEEN.lock().unwrap().len(), 1);

        warn_once("Other", "same message");
        assert_eq!(SEEN.lock().unwrap().len(), 2);
    }
}
