//! Percent-encoding for resource names interpolated into API paths.
//!
//! Data source and service account names are operator-supplied and may
//! contain spaces or slashes (`"Loki / prod"`). Without encoding, a slash
//! would address a different route and `?` or `#` would truncate the path.
//!
//! # Example
//!
//! ```
//! use grafana_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("Loki / prod"), "Loki%20%2F%20prod");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in a single path segment.
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
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
