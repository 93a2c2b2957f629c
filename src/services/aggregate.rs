use crate::models::{ColorSample, Emotion, EmotionEstimate};

const TOP1_DEFAULT_WEIGHT: f64 = 60.0;
const TOP2_DEFAULT_WEIGHT: f64 = 40.0;
const TOP2_FACTOR: f64 = 0.5;

/// Reduces the estimates of an arbitrary number of selected colors into the
/// `k` dominant canonical emotions.
///
/// Each sample's top1 contributes its pct (default 60) to the emotion's
/// running total; top2 contributes half of its pct (default 40). Labels that
/// do not fold into the canonical set are ignored. Ties keep the order in
/// which an emotion first accumulated weight, so results are reproducible.
pub fn calc_dominant_emotions(samples: &[ColorSample], k: usize) -> Vec<Emotion> {
    let mut totals: Vec<(Emotion, f64)> = Vec::new();

    for sample in samples {
        accumulate(&mut totals, &sample.top1, TOP1_DEFAULT_WEIGHT, 1.0);
        if let Some(top2) = &sample.top2 {
            accumulate(&mut totals, top2, TOP2_DEFAULT_WEIGHT, TOP2_FACTOR);
        }
    }

    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals.into_iter().take(k).map(|(emotion, _)| emotion).collect()
}

fn accumulate(
    totals: &mut Vec<(Emotion, f64)>,
    estimate: &EmotionEstimate,
    default_weight: f64,
    factor: f64,
) {
    let Some(emotion) = Emotion::from_label(&estimate.label) else {
        return;
    };
    let weight = estimate.pct.unwrap_or(default_weight) * factor;
    match totals.iter_mut().find(|(e, _)| *e == emotion) {
        Some((_, total)) => *total += weight,
        None => totals.push((emotion, weight)),
    }
}
