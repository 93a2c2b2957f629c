use crate::{
    error::{AppError, AppResult},
    models::{hex_to_rgb, normalize_hex, ColorSample, EmotionEstimate},
    services::{bias, palette::PaletteIndex},
};

/// The raw estimate used when no palette entry resolves for a color. Bias
/// rules still run on top of it.
fn default_estimate() -> EmotionEstimate {
    EmotionEstimate::new("love", None)
}

/// Builds an immutable [`ColorSample`] for a user-chosen color.
///
/// Resolution order: exact palette hit, then nearest RGB neighbor, then the
/// default estimate when the index is empty. The bias cascade runs last.
pub fn build_sample(palette: &PaletteIndex, input: &str) -> AppResult<ColorSample> {
    let hex = normalize_hex(input);
    let rgb = hex_to_rgb(&hex)
        .ok_or_else(|| AppError::InvalidInput(format!("not a #rrggbb color: {input}")))?;

    let entry = palette
        .entry_for_hex(&hex)
        .or_else(|| palette.nearest_by_rgb(rgb));

    let (raw_top1, raw_top2) = match entry {
        Some(entry) => (
            entry.top.first().cloned().unwrap_or_else(default_estimate),
            entry.top.get(1).cloned(),
        ),
        None => (default_estimate(), None),
    };

    let (top1, top2) = bias::apply_bias(rgb, raw_top1, raw_top2);

    Ok(ColorSample {
        hex,
        rgb,
        top1,
        top2,
    })
}

/// The working set of selected colors, owned by the application state.
///
/// Mutations happen only through serialized user actions; samples are
/// immutable once added.
#[derive(Debug, Default)]
pub struct Selection {
    samples: Vec<ColorSample>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[ColorSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn add(&mut self, sample: ColorSample) {
        self.samples.push(sample);
    }

    pub fn remove(&mut self, index: usize) -> Option<ColorSample> {
        if index < self.samples.len() {
            Some(self.samples.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn palette_with(records: Vec<serde_json::Value>) -> PaletteIndex {
        PaletteIndex::from_records(records)
    }

    #[test]
    fn test_build_sample_exact_hit() {
        let palette = palette_with(vec![json!({
            "color_code": "#0000ff",
            "top_emotions": ["sadness", "fear"],
            "probs": [0.7, 0.2],
        })]);

        let sample = build_sample(&palette, "0000FF").unwrap();
        assert_eq!(sample.hex, "#0000ff");
        assert_eq!(sample.rgb, [0, 0, 255]);
        assert_eq!(sample.top1, EmotionEstimate::new("sadness", Some(70.0)));
        assert_eq!(sample.top2, Some(EmotionEstimate::new("fear", Some(20.0))));
    }

    #[test]
    fn test_build_sample_falls_back_to_nearest() {
        let palette = palette_with(vec![json!({
            "color_code": "#0000ff",
            "top_emotions": ["sadness"],
            "probs": [0.7],
        })]);

        let sample = build_sample(&palette, "#0101ff").unwrap();
        assert_eq!(sample.hex, "#0101ff");
        assert_eq!(sample.top1.label, "sadness");
    }

    #[test]
    fn test_build_sample_empty_palette_defaults_to_love() {
        let sample = build_sample(&PaletteIndex::empty(), "#0000ff").unwrap();
        assert_eq!(sample.top1, EmotionEstimate::new("love", None));
        assert_eq!(sample.top2, None);
    }

    #[test]
    fn test_build_sample_bias_applies_after_lookup() {
        // pink input whose nearest entry says sadness: love must win
        let palette = palette_with(vec![json!({
            "color_code": "#ffc8dc",
            "top_emotions": ["sadness"],
            "probs": [0.7],
        })]);

        let sample = build_sample(&palette, "#ffc8dc").unwrap();
        assert_eq!(sample.top1, EmotionEstimate::new("love", Some(80.0)));
        assert_eq!(sample.top2, Some(EmotionEstimate::new("sadness", Some(70.0))));
    }

    #[test]
    fn test_build_sample_rejects_invalid_hex() {
        let result = build_sample(&PaletteIndex::empty(), "#zzz");
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_selection_add_remove_clear() {
        let mut selection = Selection::new();
        let sample = build_sample(&PaletteIndex::empty(), "#123456").unwrap();
        selection.add(sample.clone());
        selection.add(sample);
        assert_eq!(selection.len(), 2);

        assert!(selection.remove(0).is_some());
        assert_eq!(selection.len(), 1);
        assert!(selection.remove(5).is_none());

        selection.clear();
        assert!(selection.is_empty());
    }
}
