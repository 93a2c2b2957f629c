use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::{
    palette::PaletteIndex, recommend::EmotionRecommender, selection::Selection,
    telemetry::ExperimentLogger,
};

/// Shared application state
///
/// The palette is read-only after load; the selection is the only mutable
/// piece and is guarded by a lock since user actions are serialized anyway.
#[derive(Clone)]
pub struct AppState {
    pub palette: Arc<PaletteIndex>,
    pub selection: Arc<RwLock<Selection>>,
    pub recommender: Arc<dyn EmotionRecommender>,
    pub logger: ExperimentLogger,
}

impl AppState {
    pub fn new(
        palette: PaletteIndex,
        recommender: Arc<dyn EmotionRecommender>,
        logger: ExperimentLogger,
    ) -> Self {
        Self {
            palette: Arc::new(palette),
            selection: Arc::new(RwLock::new(Selection::new())),
            recommender,
            logger,
        }
    }
}
