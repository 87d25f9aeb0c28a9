//! Content type lookup for served files.

use std::path::Path;

/// Content type used when the extension is unknown or absent.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Maps a file extension (without the dot, any case) to a content type.
pub fn from_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "html" | "htm" => Some("text/html"),
        "css" => Some("text/css"),
        "js" => Some("application/javascript"),
        "jpeg" | "jpg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "swf" => Some("application/x-shockwave-flash"),
        "txt" => Some("text/plain"),
        _ => None,
    }
}

/// Content type for a filesystem path, falling back to
/// [`DEFAULT_CONTENT_TYPE`] for unknown and missing extensions.
pub fn content_type_for(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(from_extension)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
