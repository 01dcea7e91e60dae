use crate::category::IconCategory;
use crate::mime::classify_mime;

/// Sniff a mimetype from raw clipboard bytes.
///
/// Clipboard backends do not always report a mimetype alongside the data,
/// so recognize the common image formats by signature and otherwise split on
/// whether the bytes are valid UTF-8.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.len() < 4 {
        return "text/plain";
    }

    // Check for common image signatures
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return "image/png";
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "image/jpeg";
    }
    if bytes.starts_with(&[0x47, 0x49, 0x46]) {
        return "image/gif";
    }
    if bytes.len() >= 12 && &bytes[8..12] == b"WEBP" {
        return "image/webp";
    }
    if bytes.starts_with(b"BM") {
        return "image/bmp";
    }

    if std::str::from_utf8(bytes).is_ok() {
        return "text/plain";
    }

    "application/octet-stream"
}

/// Icon category for clipboard bytes captured without a recorded mimetype.
pub fn icon_for_bytes(bytes: &[u8]) -> IconCategory {
    classify_mime(sniff_mime(bytes))
}
