//! Static file-extension to MIME type lookup for uploaded plant photos.
//!
//! Uploads are stored verbatim; the MIME type recorded alongside the bytes
//! comes solely from the uploaded file name, never from sniffing content.

/// Content type used when the extension is missing or unknown.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Known extensions (lowercase, without the dot) and their MIME types.
const MIME_TYPES: &[(&str, &str)] = &[
    ("avif", "image/avif"),
    ("bmp", "image/bmp"),
    ("gif", "image/gif"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("ico", "image/vnd.microsoft.icon"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("png", "image/png"),
    ("svg", "image/svg+xml"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("webp", "image/webp"),
    ("json", "application/json"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain; charset=utf-8"),
];

/// Extract the extension of a file name, lowercased, without the dot.
///
/// Returns `None` when the name has no dot, ends with a dot, or is a
/// dotfile such as `.hidden`.
pub fn file_extension(file_name: &str) -> Option<String> {
    let basename = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    match basename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext.to_lowercase()),
        _ => None,
    }
}

/// Look up the MIME type for a file name by its extension.
///
/// Matching is case-insensitive. Unknown extensions fall back to
/// [`FALLBACK_MIME_TYPE`].
///
/// ```
/// use leaflink_core::media::mime_type_for_file_name;
///
/// assert_eq!(mime_type_for_file_name("monstera.JPG"), "image/jpeg");
/// assert_eq!(mime_type_for_file_name("notes.xyz"), "application/octet-stream");
/// ```
pub fn mime_type_for_file_name(file_name: &str) -> &'static str {
    file_extension(file_name)
        .and_then(|ext| {
            MIME_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or(FALLBACK_MIME_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_variants() {
        assert_eq!(mime_type_for_file_name("a.jpg"), "image/jpeg");
        assert_eq!(mime_type_for_file_name("a.jpeg"), "image/jpeg");
        assert_eq!(mime_type_for_file_name("A.JPEG"), "image/jpeg");
    }

    #[test]
    fn png_and_webp() {
        assert_eq!(mime_type_for_file_name("leaf.png"), "image/png");
        assert_eq!(mime_type_for_file_name("leaf.webp"), "image/webp");
    }

    #[test]
    fn unknown_extension_falls_back() {
        assert_eq!(mime_type_for_file_name("plant.raw"), FALLBACK_MIME_TYPE);
    }

    #[test]
    fn missing_extension_falls_back() {
        assert_eq!(mime_type_for_file_name("plant"), FALLBACK_MIME_TYPE);
        assert_eq!(mime_type_for_file_name("plant."), FALLBACK_MIME_TYPE);
        assert_eq!(mime_type_for_file_name(""), FALLBACK_MIME_TYPE);
    }

    #[test]
    fn dotfile_has_no_extension() {
        assert_eq!(file_extension(".png"), None);
    }

    #[test]
    fn only_last_extension_counts() {
        assert_eq!(mime_type_for_file_name("archive.png.gz"), FALLBACK_MIME_TYPE);
        assert_eq!(mime_type_for_file_name("photo.backup.png"), "image/png");
    }

    #[test]
    fn directory_components_are_ignored() {
        assert_eq!(file_extension("photos.d/monstera"), None);
        assert_eq!(file_extension("C:\\photos\\ficus.GIF").as_deref(), Some("gif"));
    }
}
