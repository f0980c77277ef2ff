use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/hwibot.json";
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/recommend";
pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "추천할 장소를 찾지 못했어요😢";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub request_timeout_secs: u64,
    /// Shown in a bot row whose fetch succeeded with nothing to recommend.
    pub no_results_message: String,
    /// TTF/OTF file with Hangul glyphs, loaded at start-up when present.
    pub font_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
            font_path: None,
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Values given on the command line (or through the environment) win over the file.
    pub fn with_overrides(mut self, endpoint: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(timeout_secs) = timeout_secs {
            self.request_timeout_secs = timeout_secs;
        }
        self
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("hwibot-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("/definitely/not/here/hwibot.json");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let path = temp_config_path("partial");
        fs::write(&path, r#"{"endpoint":"http://example.test/rec"}"#).unwrap();

        let config = load_config(path.to_str().unwrap());
        fs::remove_file(&path).ok();

        assert_eq!(config.endpoint, "http://example.test/rec");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.no_results_message, DEFAULT_NO_RESULTS_MESSAGE);
        assert!(config.font_path.is_none());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = temp_config_path("malformed");
        fs::write(&path, "{ not json").unwrap();

        let config = load_config(path.to_str().unwrap());
        fs::remove_file(&path).ok();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = AppConfig::default().with_overrides(Some("http://other/".into()), Some(3));

        assert_eq!(config.endpoint, "http://other/");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));

        let untouched = AppConfig::default().with_overrides(None, None);
        assert_eq!(untouched, AppConfig::default());
    }
}
