use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the color→emotion dataset (JSON array of palette records)
    #[serde(default = "default_palette_path")]
    pub palette_path: String,

    /// Endpoint of the external emotion-based recommendation service
    #[serde(default = "default_recommender_url")]
    pub recommender_url: String,

    /// Endpoint receiving fire-and-forget experiment records
    #[serde(default = "default_experiment_log_url")]
    pub experiment_log_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_palette_path() -> String {
    "data/color_top2.json".to_string()
}

fn default_recommender_url() -> String {
    "http://localhost:8000/api/recommend_by_emotion".to_string()
}

fn default_experiment_log_url() -> String {
    "http://localhost:8000/api/log_color_experiment".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
