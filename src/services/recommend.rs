use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{Emotion, MovieCandidate, RecommendationQuery, RecommendationResponse},
};

/// Fixed query configuration for every per-emotion request.
pub const TOP_K: usize = 10;
pub const MIN_REVIEW_COUNT: u32 = 5;
pub const USE_BOOST: bool = true;

/// Builds the fixed-shape request body for one emotion.
pub fn query_for(emotion: Emotion) -> RecommendationQuery {
    RecommendationQuery {
        emotion: emotion.as_str().to_string(),
        topk: TOP_K,
        min_review_count: MIN_REVIEW_COUNT,
        use_boost: USE_BOOST,
    }
}

/// Source of per-emotion movie lists.
///
/// The production implementation talks to the external recommendation
/// service; tests substitute their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait EmotionRecommender: Send + Sync {
    /// Fetches the ordered candidate list for a single emotion.
    async fn recommend(&self, emotion: Emotion) -> AppResult<Vec<MovieCandidate>>;
}

/// HTTP client for the external recommendation service.
#[derive(Clone)]
pub struct RecommenderClient {
    http_client: HttpClient,
    api_url: String,
}

impl RecommenderClient {
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl EmotionRecommender for RecommenderClient {
    async fn recommend(&self, emotion: Emotion) -> AppResult<Vec<MovieCandidate>> {
        let query = query_for(emotion);

        let response = self
            .http_client
            .post(&self.api_url)
            .json(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Recommendation service returned status {}: {}",
                status, body
            )));
        }

        let payload: RecommendationResponse = response.json().await?;

        if let Some(error) = payload.error {
            return Err(AppError::ExternalApi(format!(
                "Recommendation service rejected emotion {}: {}",
                emotion, error
            )));
        }

        tracing::info!(
            emotion = %emotion,
            results = payload.results.len(),
            "Per-emotion recommendations fetched"
        );

        Ok(payload.results)
    }
}
