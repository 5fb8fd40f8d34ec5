//! Input validation utilities
//!
//! Character and length checks shared by request validators.

const FORBIDDEN_CHARS: [char; 3] = ['\r', '\n', '\0'];

/// True when the input is empty or only whitespace
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// True when the input carries line breaks or NUL bytes
pub fn has_control_chars(input: &str) -> bool {
    input.contains(FORBIDDEN_CHARS)
}

/// Length in characters, not bytes
pub fn char_len(input: &str) -> usize {
    input.chars().count()
}
