use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Generic fallback glyph for paths no group claims.
pub const DEFAULT_FILE_GLYPH: &str = "\u{f0214}";

// Nerd Font glyphs grouped by kind. Extensions must stay unique across
// groups so a path can never resolve to two glyphs.
const GLYPH_GROUPS: &[(&str, &[&str])] = &[
    // Programming languages
    ("\u{f031e}", &["js", "mjs"]),
    ("\u{f06e6}", &["ts"]),
    ("\u{f0320}", &["py"]),
    ("\u{f0b37}", &["java"]),
    ("\u{f0672}", &["cpp", "cc", "cxx"]),
    ("\u{f0671}", &["c"]),
    ("\u{f1617}", &["rs"]),
    ("\u{f07d3}", &["go"]),
    ("\u{f031f}", &["php"]),
    ("\u{f0d2d}", &["rb"]),
    // Web
    ("\u{f031d}", &["html", "htm"]),
    ("\u{f031c}", &["css"]),
    ("\u{f0626}", &["json"]),
    ("\u{f05c0}", &["xml"]),
    // Documents
    ("\u{f0226}", &["pdf"]),
    ("\u{f022c}", &["doc", "docx"]),
    ("\u{f021b}", &["xls", "xlsx"]),
    ("\u{f0227}", &["ppt", "pptx"]),
    ("\u{f0219}", &["txt"]),
    ("\u{f0354}", &["md"]),
    // Images
    ("\u{f021f}", &["png", "jpg", "jpeg", "gif", "bmp", "webp", "svg", "ico"]),
    // Video
    ("\u{f022b}", &["mp4", "mkv", "avi", "mov", "wmv", "flv", "webm"]),
    // Audio
    ("\u{f0223}", &["mp3", "wav", "flac", "ogg", "m4a", "wma"]),
    // Archives
    ("\u{f06eb}", &["zip", "tar", "gz", "bz2", "xz", "7z", "rar"]),
];

static EXTENSION_GLYPHS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (glyph, extensions) in GLYPH_GROUPS {
        for ext in *extensions {
            let previous = map.insert(*ext, *glyph);
            assert!(previous.is_none(), "extension '{}' mapped to two glyphs", ext);
        }
    }
    map
});

/// Nerd Font glyph for a file path, keyed on the extension after the last
/// `.` (case-insensitive). Empty paths yield an empty string; unknown
/// extensions yield the generic file glyph.
pub fn nerd_font_icon_for_path(path: &str) -> &'static str {
    if path.is_empty() {
        return "";
    }

    let ext = match path.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => path,
    }
    .to_ascii_lowercase();

    EXTENSION_GLYPHS
        .get(ext.as_str())
        .copied()
        .unwrap_or(DEFAULT_FILE_GLYPH)
}
