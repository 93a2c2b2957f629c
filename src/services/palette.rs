use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::models::{hex_to_rgb, normalize_hex, EmotionEstimate};

/// Raw dataset record, as produced by the color analysis pipeline.
///
/// Individual records are parsed leniently: a record that fails to parse is
/// skipped rather than failing the whole load.
#[derive(Debug, Deserialize)]
struct RawPaletteRecord {
    color_code: Option<String>,
    #[serde(default)]
    color_name: Option<String>,
    #[serde(default)]
    top_emotions: Vec<String>,
    #[serde(default)]
    probs: Vec<Value>,
}

/// One normalized palette color with its top emotion estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    pub hex: String,
    pub rgb: [u8; 3],
    pub name: Option<String>,
    /// Ordered, non-empty sequence of up to two estimates. Records with no
    /// usable emotions get the single "unknown" sentinel.
    pub top: Vec<EmotionEstimate>,
}

impl PaletteEntry {
    fn first_pct(&self) -> f64 {
        self.top.first().and_then(|e| e.pct).unwrap_or(-1.0)
    }
}

/// The deduplicated color→emotion dataset, read-only after load.
///
/// Entries keep the dataset order of their first appearance, which makes
/// nearest-match ties deterministic: the earliest loaded entry wins.
#[derive(Debug, Default)]
pub struct PaletteIndex {
    entries: Vec<PaletteEntry>,
}

impl PaletteIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the dataset from disk.
    ///
    /// Fails softly: any read or parse error yields an empty index so
    /// downstream lookups simply find no match. The failure is only logged.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Palette dataset unreadable, starting with empty index");
                return Self::empty();
            }
        };

        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => {
                let index = Self::from_records(records);
                tracing::info!(path = %path.display(), entries = index.len(), "Palette dataset loaded");
                index
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Palette dataset is not a JSON array, starting with empty index");
                Self::empty()
            }
        }
    }

    /// Normalizes and deduplicates raw records into an index.
    ///
    /// When two records share a hex, the one whose first estimate has the
    /// higher pct wins, keeping the position of the first occurrence.
    pub fn from_records(records: Vec<Value>) -> Self {
        let mut entries: Vec<PaletteEntry> = Vec::new();

        for value in records {
            let record: RawPaletteRecord = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping malformed palette record");
                    continue;
                }
            };

            let Some(code) = record.color_code.as_deref() else {
                continue;
            };
            let hex = normalize_hex(code);
            if hex == "#" {
                continue;
            }
            let rgb = hex_to_rgb(&hex).unwrap_or([0, 0, 0]);

            let mut top: Vec<EmotionEstimate> = record
                .top_emotions
                .iter()
                .take(2)
                .enumerate()
                .map(|(idx, label)| {
                    let pct = record
                        .probs
                        .get(idx)
                        .and_then(Value::as_f64)
                        .map(|p| (p * 1000.0).round() / 10.0);
                    EmotionEstimate::new(label.clone(), pct)
                })
                .collect();
            if top.is_empty() {
                top.push(EmotionEstimate::unknown());
            }

            let entry = PaletteEntry {
                hex,
                rgb,
                name: record.color_name,
                top,
            };

            match entries.iter().position(|e| e.hex == entry.hex) {
                Some(idx) => {
                    if entry.first_pct() > entries[idx].first_pct() {
                        entries[idx] = entry;
                    }
                }
                None => entries.push(entry),
            }
        }

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Exact lookup by hex; the input is normalized first.
    pub fn entry_for_hex(&self, hex: &str) -> Option<&PaletteEntry> {
        let normalized = normalize_hex(hex);
        self.entries.iter().find(|e| e.hex == normalized)
    }

    /// Nearest entry by Euclidean distance in RGB space.
    ///
    /// Returns `None` on an empty index. Ties resolve to the entry that
    /// appeared first in the dataset (strict `<` during the scan).
    pub fn nearest_by_rgb(&self, rgb: [u8; 3]) -> Option<&PaletteEntry> {
        let mut best: Option<&PaletteEntry> = None;
        let mut min_distance = f64::INFINITY;
        for entry in &self.entries {
            let distance = rgb_distance(rgb, entry.rgb);
            if distance < min_distance {
                min_distance = distance;
                best = Some(entry);
            }
        }
        best
    }
}

fn rgb_distance(a: [u8; 3], b: [u8; 3]) -> f64 {
    let dr = a[0] as f64 - b[0] as f64;
    let dg = a[1] as f64 - b[1] as f64;
    let db = a[2] as f64 - b[2] as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}
