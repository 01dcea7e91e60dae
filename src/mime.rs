use log::debug;

use crate::category::IconCategory;
use crate::urls::{favicon_for, is_url};

/// How a single classification rule matches the raw mimetype string.
enum Matcher {
    Prefix(&'static str),
    Exact(&'static str),
    ContainsAny(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, mime_type: &str) -> bool {
        match self {
            Matcher::Prefix(prefix) => mime_type.starts_with(prefix),
            Matcher::Exact(exact) => mime_type == *exact,
            Matcher::ContainsAny(needles) => needles.iter().any(|n| mime_type.contains(n)),
        }
    }
}

// Evaluated top to bottom, first match wins. `text/uri-list` never wins on
// its own entry; the `text/` prefix rule above it matches first.
const MIME_RULES: &[(Matcher, IconCategory)] = &[
    (Matcher::Prefix("image/"), IconCategory::Image),
    (Matcher::Prefix("text/"), IconCategory::Text),
    (Matcher::Exact("application/json"), IconCategory::Text),
    (Matcher::Exact("application/xml"), IconCategory::Text),
    (Matcher::Exact("application/javascript"), IconCategory::Text),
    (Matcher::Exact("text/uri-list"), IconCategory::File),
    (Matcher::Prefix("video/"), IconCategory::Video),
    (Matcher::Prefix("audio/"), IconCategory::Audio),
    (
        Matcher::ContainsAny(&["zip", "tar", "gz", "bz2", "xz", "7z", "rar"]),
        IconCategory::Archive,
    ),
    (Matcher::Exact("application/pdf"), IconCategory::Pdf),
];

/// Classify a mimetype into an icon category. Unmatched types count as
/// plain files.
pub fn classify_mime(mime_type: &str) -> IconCategory {
    MIME_RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(mime_type))
        .map(|(_, category)| *category)
        .unwrap_or(IconCategory::File)
}

/// Resolve the icon a history entry should display.
///
/// Plain-text entries whose content looks like a URL resolve to the site's
/// favicon location so the widget can show it instead of a generic text
/// icon. Everything else maps to the category tag for `mime_type`; an empty
/// mimetype yields an empty string.
pub fn icon_for_mime(mime_type: &str, content: &str) -> String {
    if mime_type.is_empty() {
        return String::new();
    }

    if mime_type == "text/plain" && is_url(content) {
        if let Some(favicon) = favicon_for(content) {
            return favicon;
        }
        debug!("url-like clipboard text did not parse, falling back to category icon");
    }

    classify_mime(mime_type).as_str().to_string()
}
