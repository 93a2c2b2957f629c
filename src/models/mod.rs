pub mod color;
pub mod emotion;
pub mod experiment;
pub mod movie;

pub use color::{hex_to_rgb, normalize_hex, ColorSample, EmotionEstimate, UNKNOWN_LABEL};
pub use emotion::Emotion;
pub use experiment::{ExperimentRecord, RecommendResults};
pub use movie::{MovieCandidate, RecommendationQuery, RecommendationResponse};
