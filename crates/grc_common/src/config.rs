//! Configuration for the GRC AI Engine services.
//!
//! Loads settings from /etc/grc/config.toml or uses defaults. Secrets
//! (SECRET_KEY, GROQ_API_KEY) always come from the environment and override
//! anything in the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Config file path
pub const CONFIG_PATH: &str = "/etc/grc/config.toml";

/// Backend daemon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Address the lookup API binds to.
    #[serde(default = "default_engine_bind")]
    pub bind_addr: String,

    /// Shared secret for HS256 bearer token verification.
    #[serde(default)]
    pub secret_key: String,

    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Outbound text-generation provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Base URL of an OpenAI-compatible chat completions API.
    #[serde(default = "default_generator_endpoint")]
    pub endpoint: String,

    /// Provider API key. Populated from GROQ_API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_generator_model")]
    pub model: String,

    /// Fixed sampling temperature for recommendation prompts.
    #[serde(default = "default_generator_temperature")]
    pub temperature: f32,

    /// Response-size ceiling for a single generation.
    #[serde(default = "default_generator_max_tokens")]
    pub max_tokens: u32,

    /// Single-attempt request timeout. There is no retry.
    #[serde(default = "default_generator_timeout")]
    pub timeout_secs: u64,
}

fn default_engine_bind() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_generator_endpoint() -> String {
    "https://api.groq.com/openai".to_string()
}

fn default_generator_model() -> String {
    "meta-llama/llama-4-scout-17b-16e-instruct".to_string()
}

fn default_generator_temperature() -> f32 {
    0.4
}

fn default_generator_max_tokens() -> u32 {
    800
}

fn default_generator_timeout() -> u64 {
    30
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_generator_endpoint(),
            api_key: None,
            model: default_generator_model(),
            temperature: default_generator_temperature(),
            max_tokens: default_generator_max_tokens(),
            timeout_secs: default_generator_timeout(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_engine_bind(),
            secret_key: String::new(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load from the default path, falling back to defaults, then apply
    /// environment overrides.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_PATH)).with_env_overrides()
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(secret) = std::env::var("SECRET_KEY") {
            self.secret_key = secret;
        }
        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            self.generator.api_key = Some(key);
        }
        self
    }
}

/// Frontend relay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Address the form service binds to.
    #[serde(default = "default_web_bind")]
    pub bind_addr: String,

    /// Full URL of the backend lookup endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_web_bind() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_api_url() -> String {
    "http://127.0.0.1:8000/api/ai-engine/v1/lookup".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_web_bind(),
            api_url: default_api_url(),
        }
    }
}

impl WebConfig {
    pub fn load() -> Self {
        let mut config = EngineSection::load_web(Path::new(CONFIG_PATH));
        if let Ok(url) = std::env::var("GRC_API_URL") {
            config.api_url = url;
        }
        config
    }
}

/// The web section lives in the same file under `[web]`.
#[derive(Debug, Default, Deserialize)]
struct EngineSection {
    #[serde(default)]
    web: Option<WebConfig>,
}

impl EngineSection {
    fn load_web(path: &Path) -> WebConfig {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<EngineSection>(&contents) {
                Ok(section) => section.web.unwrap_or_default(),
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    WebConfig::default()
                }
            },
            Err(_) => WebConfig::default(),
        }
    }
}
