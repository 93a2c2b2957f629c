use std::collections::HashMap;

use crate::{
    error::AppResult,
    models::{Emotion, MovieCandidate},
    services::recommend::{EmotionRecommender, TOP_K},
};

/// Result of the per-emotion fan-out: the untouched per-emotion lists and
/// the merged top-10. Both feed the experiment record.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub emotions: Vec<Emotion>,
    pub per_emotion: Vec<(Emotion, Vec<MovieCandidate>)>,
    pub combined_top10: Vec<MovieCandidate>,
}

impl MergeOutcome {
    /// Per-emotion lists keyed by label, for payloads that want an object.
    pub fn per_emotion_map(&self) -> HashMap<String, Vec<MovieCandidate>> {
        self.per_emotion
            .iter()
            .map(|(emotion, list)| (emotion.to_string(), list.clone()))
            .collect()
    }
}

/// Queries the recommendation service once per inferred emotion and merges
/// the results.
///
/// Fail-fast: the first failed query aborts the whole operation, dropping
/// any lists already fetched.
pub async fn recommend_for_emotions(
    recommender: &dyn EmotionRecommender,
    emotions: &[Emotion],
) -> AppResult<MergeOutcome> {
    let mut per_emotion = Vec::with_capacity(emotions.len());
    for &emotion in emotions {
        let list = recommender.recommend(emotion).await?;
        per_emotion.push((emotion, list));
    }

    let combined_top10 = merge_candidates(&per_emotion);

    tracing::info!(
        emotions = ?emotions.iter().map(|e| e.as_str()).collect::<Vec<_>>(),
        combined = combined_top10.len(),
        "Recommendation lists merged"
    );

    Ok(MergeOutcome {
        emotions: emotions.to_vec(),
        per_emotion,
        combined_top10,
    })
}

/// Merges per-emotion lists by movie id, keeping the best `emotion_score`
/// per id, then sorts by descending score and truncates to the top 10.
///
/// The reduction is a commutative max, so the emotion order never changes
/// the merged set. Candidates keep first-seen order going into the stable
/// sort, so equal scores resolve deterministically too.
pub fn merge_candidates(lists: &[(Emotion, Vec<MovieCandidate>)]) -> Vec<MovieCandidate> {
    let mut combined: Vec<MovieCandidate> = Vec::new();

    for (_, list) in lists {
        for candidate in list {
            let new_score = candidate.emotion_score.unwrap_or(0.0);
            match combined.iter_mut().find(|c| c.id == candidate.id) {
                Some(existing) => {
                    let old_score = existing.emotion_score.unwrap_or(f64::NEG_INFINITY);
                    if new_score > old_score {
                        *existing = candidate.clone();
                    }
                }
                None => combined.push(candidate.clone()),
            }
        }
    }

    combined.sort_by(|a, b| {
        let score_a = a.emotion_score.unwrap_or(0.0);
        let score_b = b.emotion_score.unwrap_or(0.0);
        score_b
            .partial_cmp(&score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    combined.truncate(TOP_K);
    combined
}
