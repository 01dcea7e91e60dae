//! Stateless classification helpers for clipboard history widgets: mimetype
//! and byte-signature classification, URL/favicon detection, and Nerd Font
//! glyph lookup for file paths.

mod category;
mod glyph;
mod label;
mod mime;
mod sniff;
mod urls;

pub use category::IconCategory;
pub use glyph::{nerd_font_icon_for_path, DEFAULT_FILE_GLYPH};
pub use label::{entry_label, human_size};
pub use mime::{classify_mime, icon_for_mime};
pub use sniff::{icon_for_bytes, sniff_mime};
pub use urls::{favicon_for, favicon_url, is_url};
