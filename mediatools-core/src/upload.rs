//! Selection validation for the upload pipeline.
//!
//! Browsers report MIME types unreliably (generic or empty strings are
//! common, especially on Windows and for dropped files), so acceptance is
//! a dual check: a known media type string OR a known filename extension.
//! Both lists must stay in sync with what the tool pages can handle.

use thiserror::Error;

/// Inclusive upper bound on accepted file size: 100 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// Declared media types accepted without consulting the filename.
pub const ACCEPTED_MEDIA_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/bmp",
    "image/tiff",
    "video/mp4",
    "video/quicktime",
    "video/x-msvideo",
    "video/x-ms-wmv",
    "video/x-matroska",
    "video/x-flv",
    "video/webm",
    "audio/mpeg",
    "audio/wav",
    "audio/aac",
    "audio/flac",
    "audio/mp4",
    "audio/ogg",
    "audio/x-ms-wma",
];

/// Extension fallback, matched case-insensitively. Covers the same media
/// families plus vector and document formats that browsers rarely give a
/// usable MIME type for.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "heic", "mp4", "mov", "avi", "wmv", "mkv",
    "flv", "webm", "mp3", "wav", "aac", "flac", "m4a", "ogg", "wma", "alac", "aiff", "eps", "ai",
    "svg", "cgm", "wmf", "emf", "pdf", "dxf", "cdr",
];

/// Broad family of an accepted selection, used to pick a preview style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    /// Previewed inline via a data URL.
    Image,
    /// Accepted but shown with a generic "file selected" indicator.
    Other,
}

/// Why a selection was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please select a valid image, video, or audio file.")]
    UnsupportedType,
    #[error("File size must be less than 100MB.")]
    TooLarge { size: u64 },
}

fn extension_of(name: &str) -> Option<&str> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() { None } else { Some(ext) }
}

/// Whether the declared media type is on the allow-list.
#[must_use]
pub fn media_type_allowed(mime: &str) -> bool {
    ACCEPTED_MEDIA_TYPES.contains(&mime)
}

/// Whether the filename carries an allow-listed extension (case-insensitive).
#[must_use]
pub fn extension_allowed(name: &str) -> bool {
    extension_of(name).is_some_and(|ext| {
        ACCEPTED_EXTENSIONS
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(ext))
    })
}

/// Validate a selected file by name, declared media type, and byte size.
///
/// Acceptance requires (type allow-listed OR extension allow-listed) AND
/// size within [`MAX_UPLOAD_BYTES`] inclusive. The type check runs before
/// the size check, mirroring the order the rejection notices are shown in.
///
/// # Errors
/// [`UploadError::UnsupportedType`] when neither check passes,
/// [`UploadError::TooLarge`] when the size limit is exceeded.
pub fn validate_selection(name: &str, mime: &str, size: u64) -> Result<MediaKind, UploadError> {
    if !media_type_allowed(mime) && !extension_allowed(name) {
        return Err(UploadError::UnsupportedType);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge { size });
    }
    Ok(if mime.starts_with("image/") {
        MediaKind::Image
    } else {
        MediaKind::Other
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_listed_mime_regardless_of_name() {
        assert_eq!(
            validate_selection("capture", "image/png", 1024),
            Ok(MediaKind::Image)
        );
    }

    #[test]
    fn accepts_listed_extension_with_empty_mime() {
        // Dropped files often arrive with no MIME type at all.
        assert_eq!(
            validate_selection("diagram.SVG", "", 1024),
            Ok(MediaKind::Other)
        );
        assert_eq!(
            validate_selection("scan.pdf", "application/octet-stream", 1024),
            Ok(MediaKind::Other)
        );
    }

    #[test]
    fn rejects_unknown_type_and_extension() {
        assert_eq!(
            validate_selection("notes.txt", "text/plain", 10),
            Err(UploadError::UnsupportedType)
        );
        assert_eq!(
            validate_selection("archive", "", 10),
            Err(UploadError::UnsupportedType)
        );
    }

    #[test]
    fn size_boundary_is_inclusive() {
        assert_eq!(
            validate_selection("movie.mp4", "video/mp4", MAX_UPLOAD_BYTES),
            Ok(MediaKind::Other)
        );
        assert_eq!(
            validate_selection("movie.mp4", "video/mp4", MAX_UPLOAD_BYTES + 1),
            Err(UploadError::TooLarge {
                size: MAX_UPLOAD_BYTES + 1
            })
        );
    }

    #[test]
    fn type_check_runs_before_size_check() {
        assert_eq!(
            validate_selection("blob.bin", "application/x-thing", MAX_UPLOAD_BYTES * 2),
            Err(UploadError::UnsupportedType)
        );
    }

    #[test]
    fn image_mime_previews_inline_even_via_extension_arm() {
        // "image/heic" is not on the MIME list; the extension arm accepts
        // it and the image/ prefix still selects the inline preview.
        assert_eq!(
            validate_selection("photo.heic", "image/heic", 1024),
            Ok(MediaKind::Image)
        );
    }

    #[test]
    fn trailing_dot_has_no_extension() {
        assert_eq!(
            validate_selection("oddname.", "", 10),
            Err(UploadError::UnsupportedType)
        );
    }

    #[test]
    fn rejection_messages_match_user_notices() {
        assert_eq!(
            UploadError::UnsupportedType.to_string(),
            "Please select a valid image, video, or audio file."
        );
        assert_eq!(
            UploadError::TooLarge { size: 1 }.to_string(),
            "File size must be less than 100MB."
        );
    }
}
