use serde::{Deserialize, Serialize};

/// Sentinel label for palette records that carry no usable emotion data.
pub const UNKNOWN_LABEL: &str = "unknown";

/// A single emotion guess with an optional confidence percentage in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmotionEstimate {
    pub label: String,
    pub pct: Option<f64>,
}

impl EmotionEstimate {
    pub fn new(label: impl Into<String>, pct: Option<f64>) -> Self {
        Self {
            label: label.into(),
            pct,
        }
    }

    /// The placeholder estimate used when a palette record has no emotions.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_LABEL, None)
    }

    pub fn is_unknown(&self) -> bool {
        self.label == UNKNOWN_LABEL
    }
}

/// A user-selected color with its bias-corrected emotion estimates.
///
/// Immutable once built; removing or clearing the selection drops it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorSample {
    /// Normalized "#rrggbb" form of the input.
    pub hex: String,
    pub rgb: [u8; 3],
    pub top1: EmotionEstimate,
    pub top2: Option<EmotionEstimate>,
}

/// Normalizes a hex color string: trimmed, `#`-prefixed, lowercased.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize_hex(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with('#') {
        trimmed.to_lowercase()
    } else {
        format!("#{}", trimmed.to_lowercase())
    }
}

/// Parses a normalized or raw "#rrggbb" string into an RGB triple.
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some([r, g, b])
}
