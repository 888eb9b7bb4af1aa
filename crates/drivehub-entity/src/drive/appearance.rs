//! Presentational attributes of a drive.

use serde::{Deserialize, Serialize};

/// Icon displayed next to a drive.
///
/// Values outside the known set deserialize to [`DriveIcon::Unknown`],
/// which consumers render with a generic fallback glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveIcon {
    /// A laptop or workstation.
    Laptop,
    /// A remote server rack.
    Server,
    /// A cloud account.
    Cloud,
    /// Unrecognized icon name; rendered with the fallback glyph.
    #[serde(other)]
    Unknown,
}

impl Default for DriveIcon {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Accent color used when rendering a drive card. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriveColor {
    Blue,
    Purple,
    Emerald,
    Rose,
}

impl Default for DriveColor {
    fn default() -> Self {
        Self::Blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_icon_falls_back() {
        let icon: DriveIcon = serde_json::from_str("\"Floppy\"").expect("deserialize");
        assert_eq!(icon, DriveIcon::Unknown);
    }

    #[test]
    fn test_known_icon_roundtrip() {
        let json = serde_json::to_string(&DriveIcon::Laptop).expect("serialize");
        assert_eq!(json, "\"Laptop\"");
        let icon: DriveIcon = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(icon, DriveIcon::Laptop);
    }

    #[test]
    fn test_color_is_lowercase() {
        let json = serde_json::to_string(&DriveColor::Emerald).expect("serialize");
        assert_eq!(json, "\"emerald\"");
    }
}
