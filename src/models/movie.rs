use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A movie candidate as returned by the recommendation service.
///
/// Only `id`, `title` and `emotion_score` participate in the merge; the rest
/// is passed through untouched for clients and the experiment log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieCandidate {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<i64>,
    #[serde(default)]
    pub review_count_used: Option<i64>,
    #[serde(default)]
    pub genre_ids: Option<Vec<i32>>,
    /// Some upstream payloads carry resolved genre names instead of ids.
    #[serde(default)]
    pub genres: Option<serde_json::Value>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default, alias = "jp_certification")]
    pub certification: Option<String>,
    /// Which emotion's query produced this candidate.
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub emotion_score: Option<f64>,
    #[serde(default)]
    pub emotions_avg: Option<HashMap<String, f64>>,
}

/// Request body sent to the recommendation service, one per inferred emotion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationQuery {
    pub emotion: String,
    pub topk: usize,
    pub min_review_count: u32,
    pub use_boost: bool,
}

/// Response body from the recommendation service.
///
/// A present `error` field marks a failed query even on a 2xx status.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub results: Vec<MovieCandidate>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_deserializes_minimal_payload() {
        let json = r#"{"id": 42, "title": "Arrival"}"#;
        let candidate: MovieCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.id, 42);
        assert_eq!(candidate.title, "Arrival");
        assert_eq!(candidate.emotion_score, None);
        assert_eq!(candidate.genre_ids, None);
    }

    #[test]
    fn test_candidate_deserializes_full_payload() {
        let json = r#"{
            "id": 5,
            "title": "Amelie",
            "year": 2001,
            "vote_average": 7.9,
            "vote_count": 11000,
            "review_count_used": 48,
            "genre_ids": [35, 10749],
            "overview": "A shy waitress decides to help those around her.",
            "jp_certification": "G",
            "emotion": "love",
            "emotion_score": 0.412,
            "emotions_avg": {"love": 0.412, "joy": 0.31}
        }"#;

        let candidate: MovieCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.year, Some(2001));
        assert_eq!(candidate.genre_ids, Some(vec![35, 10749]));
        assert_eq!(candidate.certification, Some("G".to_string()));
        assert_eq!(candidate.emotion_score, Some(0.412));
        assert_eq!(
            candidate.emotions_avg.as_ref().and_then(|m| m.get("joy")),
            Some(&0.31)
        );
    }

    #[test]
    fn test_response_with_error_field() {
        let json = r#"{"results": [], "error": "unsupported emotion"}"#;
        let response: RecommendationResponse = serde_json::from_str(json).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.error, Some("unsupported emotion".to_string()));
    }

    #[test]
    fn test_query_serialization_shape() {
        let query = RecommendationQuery {
            emotion: "joy".to_string(),
            topk: 10,
            min_review_count: 5,
            use_boost: true,
        };

        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["emotion"], "joy");
        assert_eq!(json["topk"], 10);
        assert_eq!(json["min_review_count"], 5);
        assert_eq!(json["use_boost"], true);
    }
}
