//! Compiler warnings with colored terminal output.
//!
//! Provides deduplication so a stylesheet or query loop that repeats the
//! same unsupported selector reports it once.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock cannot leave the set half-updated.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about an unsupported selector feature (prints once per unique message)
///
/// # Example
/// ```
/// use fennec_common::warning::warn_once;
///
/// warn_once("Selector", "unsupported pseudo-class ':hover'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[Fennec {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if `warn_once` has already reported this message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call before compiling a new batch of selectors)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
