/// Multipart field carrying the selected file. The HTML input reuses the
/// same string as both `id` and `name`.
pub const FIELD_BASE_IMAGE: &str = "base_image";
/// Multipart field carrying the text prompt.
pub const FIELD_PROMPT: &str = "prompt";

/// Extension whitelist mirrored from the server. Client side it only
/// feeds diagnostics; the server enforces it.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

pub fn allowed_file(filename: &str) -> bool {
    let Some((_, extension)) = filename.rsplit_once('.') else {
        return false;
    };
    ALLOWED_EXTENSIONS
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(extension))
}
