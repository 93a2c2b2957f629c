use crate::models::EmotionEstimate;

const LOVE: &str = "love";
const JOY: &str = "joy";

/// Converts an RGB triple to HSL: hue in degrees [0, 360), saturation and
/// lightness in [0, 1].
pub fn rgb_to_hsl(rgb: [u8; 3]) -> (f64, f64, f64) {
    let r = rgb[0] as f64 / 255.0;
    let g = rgb[1] as f64 / 255.0;
    let b = rgb[2] as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let mut h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h *= 60.0;

    (h, s, l)
}

/// Light, vivid colors in the red or magenta hue bands read as pink.
pub fn is_pinkish(rgb: [u8; 3]) -> bool {
    let (h, s, l) = rgb_to_hsl(rgb);
    let red_ish = h >= 340.0 || h <= 20.0;
    let magenta_ish = (300.0..340.0).contains(&h);
    (red_ish || magenta_ish) && l >= 0.65 && s >= 0.20
}

/// The yellow band is hue-only; saturation and lightness do not matter.
pub fn is_yellowish(rgb: [u8; 3]) -> bool {
    let (h, _, _) = rgb_to_hsl(rgb);
    (40.0..=70.0).contains(&h)
}

/// Applies the hue-based corrective overrides to a raw palette estimate pair.
///
/// Two rules run in a fixed order, the second inspecting the output of the
/// first:
///
/// 1. pink → love: if the color is pinkish and love is not already top1,
///    promote love (swapping with top2 if love sits there, otherwise
///    demoting the old top1 and granting love its pct plus 10);
/// 2. yellow → joy: if the color is yellowish and the pair now leads with
///    love, joy takes top1 and love drops to top2.
///
/// The pink and yellow hue bands are disjoint, so rule 2 only rewrites a
/// love that came from the raw palette lookup itself.
pub fn apply_bias(
    rgb: [u8; 3],
    top1: EmotionEstimate,
    top2: Option<EmotionEstimate>,
) -> (EmotionEstimate, Option<EmotionEstimate>) {
    let (mut top1, mut top2) = (top1, top2);

    if is_pinkish(rgb) && top1.label != LOVE {
        if top2.as_ref().is_some_and(|t| t.label == LOVE) {
            let love = top2.take().unwrap_or_else(EmotionEstimate::unknown);
            top2 = Some(std::mem::replace(&mut top1, love));
        } else {
            let prior = top1;
            top1 = EmotionEstimate::new(LOVE, Some(prior.pct.unwrap_or(50.0) + 10.0));
            top2 = if prior.is_unknown() { None } else { Some(prior) };
        }
    }

    if is_yellowish(rgb) && top1.label == LOVE {
        let love_pct = top2.as_ref().and_then(|t| t.pct);
        top1 = EmotionEstimate::new(JOY, Some(top1.pct.unwrap_or(60.0)));
        top2 = Some(EmotionEstimate::new(LOVE, Some(love_pct.unwrap_or(40.0))));
    }

    (top1, top2)
}
