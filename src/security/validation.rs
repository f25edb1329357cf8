//! Request input sanitization
//!
//! Incoming free-text fields (term names, parent lookups) pass through
//! here before they reach the store.

/// Sanitize string input: trim and strip control characters
pub fn sanitize_string(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_control() || c.is_whitespace())
        .collect()
}
