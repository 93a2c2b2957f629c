use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{ColorSample, MovieCandidate};

/// Per-emotion result lists plus the merged top-10, exactly as shown to the
/// user, for offline analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendResults {
    pub per_emotion: HashMap<String, Vec<MovieCandidate>>,
    pub combined_top10: Vec<MovieCandidate>,
}

/// One experiment record, sent fire-and-forget after a successful merge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperimentRecord {
    pub timestamp: DateTime<Utc>,
    pub selected_colors: Vec<String>,
    pub inferred_emotions: Vec<String>,
    pub color_details: Vec<ColorSample>,
    pub topk: usize,
    pub min_review_count: u32,
    pub use_boost: bool,
    pub recommend_results: RecommendResults,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmotionEstimate;

    #[test]
    fn test_record_serialization_shape() {
        let sample = ColorSample {
            hex: "#ff6699".to_string(),
            rgb: [255, 102, 153],
            top1: EmotionEstimate::new("love", Some(80.0)),
            top2: Some(EmotionEstimate::new("joy", Some(40.0))),
        };

        let record = ExperimentRecord {
            timestamp: Utc::now(),
            selected_colors: vec!["#ff6699".to_string()],
            inferred_emotions: vec!["love".to_string(), "joy".to_string()],
            color_details: vec![sample],
            topk: 10,
            min_review_count: 5,
            use_boost: true,
            recommend_results: RecommendResults {
                per_emotion: HashMap::new(),
                combined_top10: Vec::new(),
            },
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["selected_colors"][0], "#ff6699");
        assert_eq!(json["inferred_emotions"][1], "joy");
        assert_eq!(json["topk"], 10);
        assert_eq!(json["min_review_count"], 5);
        assert_eq!(json["use_boost"], true);
        assert!(json["recommend_results"]["combined_top10"]
            .as_array()
            .unwrap()
            .is_empty());
    }
}
