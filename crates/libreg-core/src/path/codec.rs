use std::path::{Path, PathBuf};

/// Percent-encode a single key or value name for use as a file name.
///
/// Everything except ASCII alphanumerics and `-_.~` is escaped, including
/// `/`, so callers must split registry paths before encoding. The segments
/// `.` and `..` are escaped in full so they never name a parent or the
/// current directory on disk.
pub fn encode_segment(segment: &str) -> String {
    match segment {
        "." | ".." => segment.replace('.', "%2E"),
        _ => urlencoding::encode(segment).into_owned(),
    }
}

/// Decode a file name produced by [`encode_segment`].
///
/// Never fails: malformed `%` sequences pass through untouched and invalid
/// UTF-8 is replaced lossily.
pub fn decode_segment(encoded: &str) -> String {
    let bytes = urlencoding::decode_binary(encoded.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Join `base` with every non-empty segment of a relative registry path, encoded.
pub fn encoded_path(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |acc, segment| acc.join(encode_segment(segment)))
}
