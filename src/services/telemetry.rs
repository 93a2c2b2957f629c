use chrono::Utc;
use reqwest::Client as HttpClient;

use crate::{
    models::{ColorSample, Emotion, ExperimentRecord, RecommendResults},
    services::{
        merge::MergeOutcome,
        recommend::{MIN_REVIEW_COUNT, TOP_K, USE_BOOST},
    },
};

/// Best-effort sink for experiment records.
///
/// One record per successful merge, posted from a spawned task so the
/// response to the user never waits on it. Failures are logged and dropped;
/// there is no retry and the response body is ignored.
#[derive(Clone)]
pub struct ExperimentLogger {
    http_client: HttpClient,
    log_url: String,
}

impl ExperimentLogger {
    pub fn new(log_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            log_url,
        }
    }

    /// Assembles the record for one completed run.
    pub fn build_record(samples: &[ColorSample], outcome: &MergeOutcome) -> ExperimentRecord {
        ExperimentRecord {
            timestamp: Utc::now(),
            selected_colors: samples.iter().map(|s| s.hex.clone()).collect(),
            inferred_emotions: outcome
                .emotions
                .iter()
                .map(Emotion::to_string)
                .collect(),
            color_details: samples.to_vec(),
            topk: TOP_K,
            min_review_count: MIN_REVIEW_COUNT,
            use_boost: USE_BOOST,
            recommend_results: RecommendResults {
                per_emotion: outcome.per_emotion_map(),
                combined_top10: outcome.combined_top10.clone(),
            },
        }
    }

    /// Fires the record without blocking the caller.
    pub fn log_in_background(&self, record: ExperimentRecord) {
        let client = self.http_client.clone();
        let url = self.log_url.clone();

        tokio::spawn(async move {
            match client.post(&url).json(&record).send().await {
                Ok(response) => {
                    tracing::debug!(status = %response.status(), "Experiment record sent");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to send experiment record");
                }
            }
        });
    }
}
