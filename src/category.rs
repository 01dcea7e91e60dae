use std::fmt;

use serde::{Deserialize, Serialize};

/// High-level icon categories a clipboard history entry can render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    Image,
    Text,
    File,
    Video,
    Audio,
    Archive,
    Pdf,
}

impl IconCategory {
    /// The widget-facing tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::Image => "image",
            IconCategory::Text => "text",
            IconCategory::File => "file",
            IconCategory::Video => "video",
            IconCategory::Audio => "audio",
            IconCategory::Archive => "archive",
            IconCategory::Pdf => "pdf",
        }
    }
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_lowercase_tags() {
        assert_eq!(
            serde_json::to_string(&IconCategory::Image).unwrap(),
            "\"image\""
        );
        assert_eq!(
            serde_json::to_string(&IconCategory::Pdf).unwrap(),
            "\"pdf\""
        );
    }

    #[test]
    fn round_trips_through_serde() {
        let category: IconCategory = serde_json::from_str("\"archive\"").unwrap();
        assert_eq!(category, IconCategory::Archive);
    }

    #[test]
    fn display_matches_as_str() {
        let all = [
            IconCategory::Image,
            IconCategory::Text,
            IconCategory::File,
            IconCategory::Video,
            IconCategory::Audio,
            IconCategory::Archive,
            IconCategory::Pdf,
        ];
        for category in all {
            assert_eq!(category.to_string(), category.as_str());
        }
    }
}
