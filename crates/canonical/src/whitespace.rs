//! Whitespace utilities.
//!
//! Whitespace follows Unicode's definition (`char::is_whitespace`), so tabs,
//! newlines, carriage returns and non-breaking spaces are all treated alike.

/// Removes every whitespace character.
///
/// ```rust
/// use canonical::remove_whitespaces;
///
/// assert_eq!(remove_whitespaces("a b\t\nc"), "abc");
/// ```
pub fn remove_whitespaces(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Replaces every run of whitespace with a single ASCII space.
///
/// Unlike a trim-and-join, leading and trailing runs are kept as one space
/// each, so `" a  b "` becomes `" a b "`.
///
/// ```rust
/// use canonical::unify_whitespaces;
///
/// assert_eq!(unify_whitespaces("hello \t\n world"), "hello world");
/// assert_eq!(unify_whitespaces("  x  "), " x ");
/// ```
pub fn unify_whitespaces(text: &str) -> String {
    let mut unified = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                unified.push(' ');
                in_run = true;
            }
        } else {
            unified.push(ch);
            in_run = false;
        }
    }
    unified
}
