use url::Url;

use crate::category::IconCategory;
use crate::mime::classify_mime;

/// Compact size for menu labels, KB below one MB.
pub fn human_size(size: usize) -> String {
    let kb = size as f64 / 1024.0;
    if kb < 1024.0 {
        format!("{:.0} KB", kb)
    } else {
        format!("{:.1} MB", kb / 1024.0)
    }
}

/// One-line summary of a history entry for menus and list rows.
pub fn entry_label(mime_type: &str, size: usize, source: Option<&str>) -> String {
    match classify_mime(mime_type) {
        IconCategory::Image => image_label(size, source),
        IconCategory::Text => format!("📝 Text ({} bytes)", size),
        _ => format!("📎 {} ({} bytes)", mime_type, size),
    }
}

fn image_label(size: usize, source: Option<&str>) -> String {
    if let Some(src) = source {
        if let Some(path) = src.strip_prefix("file://") {
            if let Some(fname) = std::path::Path::new(path).file_name() {
                return format!("🖼️ {} ({})", fname.to_string_lossy(), human_size(size));
            }
        } else if let Ok(url) = Url::parse(src) {
            let host = url.host_str().unwrap_or("web");
            let filename = url
                .path_segments()
                .and_then(|s| s.last())
                .unwrap_or("image");
            return format!("🖼️ {} / {} ({})", host, filename, human_size(size));
        }
    }

    format!("🖼️ Image ({})", human_size(size))
}
