use serde::Deserialize;

/// Which mood detector the service wires in at startup
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    /// Always reports `default_mood`
    Fixed,
    /// Guesses from keywords in the uploaded file name
    Filename,
    /// Calls a remote image-classification model
    Model,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Detector implementation to use
    #[serde(default = "default_detector")]
    pub mood_detector: DetectorKind,

    /// Label reported by the fixed detector and the filename fallback
    #[serde(default = "default_mood")]
    pub default_mood: String,

    /// Image classification endpoint, required for the model detector
    pub model_api_url: Option<String>,

    /// Bearer token for the classification endpoint
    pub model_api_key: Option<String>,

    /// Timeout for one classification call
    #[serde(default = "default_model_timeout_secs")]
    pub model_timeout_secs: u64,

    /// Largest accepted upload
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_detector() -> DetectorKind {
    DetectorKind::Filename
}

fn default_mood() -> String {
    "happy".to_string()
}

fn default_model_timeout_secs() -> u64 {
    30
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects combinations the service cannot start with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.mood_detector == DetectorKind::Model && self.model_api_url.is_none() {
            anyhow::bail!("MODEL_API_URL must be set when MOOD_DETECTOR=model");
        }
        if self.max_upload_bytes == 0 {
            anyhow::bail!("MAX_UPLOAD_BYTES must be greater than zero");
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()));
        envy::from_iter::<_, Config>(vars).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.mood_detector, DetectorKind::Filename);
        assert_eq!(config.default_mood, "happy");
        assert_eq!(config.model_timeout_secs, 30);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_model_detector_requires_url() {
        let config = from_pairs(&[("MOOD_DETECTOR", "model")]);
        assert!(config.validate().is_err());

        let config = from_pairs(&[
            ("MOOD_DETECTOR", "model"),
            ("MODEL_API_URL", "http://localhost:9000/classify"),
        ]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_upload_limit_rejected() {
        let config = from_pairs(&[("MAX_UPLOAD_BYTES", "0")]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_detector_fails_to_parse() {
        let vars = vec![("MOOD_DETECTOR".to_string(), "random".to_string())];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
