use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct UiSettings {
    /// Base URL of the game server. Applied at next launch.
    pub server_url: String,
    pub typing_interval_ms: u64,
    pub request_timeout_secs: u64,
    pub ui_scale: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000".into(),
            typing_interval_ms: 30,
            request_timeout_secs: 30,
            ui_scale: 1.0,
        }
    }
}
