use serde::{Deserialize, Serialize};

/// Fixed catalog of card faces. Deck construction draws a subset of these,
/// so two cards share a `TokenKind` exactly when they form a pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Coffee,
    Laptop,
    Camera,
    Key,
    Bike,
    Book,
    Umbrella,
    Flashlight,
}

pub const CATALOG: [TokenKind; 8] = [
    TokenKind::Coffee,
    TokenKind::Laptop,
    TokenKind::Camera,
    TokenKind::Key,
    TokenKind::Bike,
    TokenKind::Book,
    TokenKind::Umbrella,
    TokenKind::Flashlight,
];

impl TokenKind {
    /// Stable lowercase identifier, used in logs and scripts.
    pub fn key(self) -> &'static str {
        match self {
            Self::Coffee => "coffee",
            Self::Laptop => "laptop",
            Self::Camera => "camera",
            Self::Key => "key",
            Self::Bike => "bike",
            Self::Book => "book",
            Self::Umbrella => "umbrella",
            Self::Flashlight => "flashlight",
        }
    }

    /// Single-glyph face shown when the card is open.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Coffee => "☕",
            Self::Laptop => "💻",
            Self::Camera => "📷",
            Self::Key => "🔑",
            Self::Bike => "🚲",
            Self::Book => "📘",
            Self::Umbrella => "☂",
            Self::Flashlight => "🔦",
        }
    }
}
