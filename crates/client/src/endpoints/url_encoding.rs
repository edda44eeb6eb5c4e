//! Percent-encoding for object identifiers placed in URL paths.
//!
//! Object identifiers are usually GUIDs, but users may also be addressed by
//! user principal name, and guest principal names contain `#EXT#`. Anything
//! that would change the path structure must be encoded.
//!
//! # Example
//!
//! ```
//! use directory_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("ada_contoso.test#EXT#@fabrikam.test"), "ada_contoso.test%23EXT%23@fabrikam.test");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as a single URL path segment.
///
/// Dot segments (`.`, `..`) survive encoding and must be rejected by the
/// caller; see [`is_dot_segment`].
///
/// ```
/// use directory_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("ada@contoso.test"), "ada@contoso.test");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Whether URL normalization would treat `segment` as `.` or `..`.
pub fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
    )
}
