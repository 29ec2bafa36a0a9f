//! Path splitting and joining.
//!
//! # Responsibilities
//! - Split a raw request path into decoded segments
//! - Join rendered segments back into a raw path
//!
//! # Design Decisions
//! - Leading and trailing `/` are normalized away; interior empty segments are kept
//! - Segments are percent-decoded on the way in and percent-encoded on the way out,
//!   so codecs only ever see and produce plain text
//! - A segment that does not decode to UTF-8 makes the whole path unmatchable

use std::borrow::Cow;

/// Path separator.
pub const SEPARATOR: char = '/';

/// Split a raw path into percent-decoded segments.
///
/// Returns `None` if any segment is not valid percent-encoded UTF-8.
pub fn split(path: &str) -> Option<Vec<String>> {
    let trimmed = path.trim_matches(SEPARATOR);
    if trimmed.is_empty() {
        return Some(Vec::new());
    }

    trimmed
        .split(SEPARATOR)
        .map(|raw| urlencoding::decode(raw).ok().map(Cow::into_owned))
        .collect()
}

/// Join decoded segments into a raw path with a leading separator.
///
/// The empty segment list joins to `/`.
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    let mut path = String::with_capacity(segments.len() * 8 + 1);
    if segments.is_empty() {
        path.push(SEPARATOR);
    }
    for segment in segments {
        path.push(SEPARATOR);
        path.push_str(&urlencoding::encode(segment.as_ref()));
    }
    path
}
