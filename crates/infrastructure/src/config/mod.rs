//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `config.toml`, then `RESEARCHDESK_*` environment variables using `__` as
//! the nesting separator (`RESEARCHDESK_INFERENCE__API_KEY`). A `.env` file is
//! read into the process environment first.
//!
//! Split into sub-modules:
//! - `server`: HTTP server settings
//! - `integrations`: model and web search settings (the sections with secrets)

mod integrations;
mod server;

use std::{collections::HashMap, path::PathBuf};

use application::ResearchConfig;
use domain::SourceKind;
use integration_arxiv::ArxivConfig;
use integration_weather::WeatherConfig;
use integration_wikipedia::WikipediaConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use integrations::{InferenceAppConfig, WebSearchAppConfig};
pub use server::ServerConfig;

use crate::telemetry::TelemetryConfig;

/// Prefix of the environment variables read into the configuration
pub const ENV_PREFIX: &str = "RESEARCHDESK";

/// Unprefixed variable accepted as the model API key
pub const FALLBACK_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Errors raised while loading or checking the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the expected shape
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// No model API key in any source
    #[error(
        "No model API key configured: set {FALLBACK_API_KEY_VAR} or {ENV_PREFIX}_INFERENCE__API_KEY"
    )]
    MissingApiKey,

    /// A value is outside its allowed range
    #[error("Invalid {section} configuration: {message}")]
    Invalid {
        section: &'static str,
        message: String,
    },

    /// A client could not be constructed from otherwise valid settings
    #[error("Failed to initialize {component}: {message}")]
    Startup {
        component: &'static str,
        message: String,
    },
}

impl ConfigError {
    fn invalid(section: &'static str) -> impl FnOnce(String) -> Self {
        move |message| Self::Invalid { section, message }
    }
}

/// Where [`AppConfig::load_from`] reads its layers from
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Config file to read; `None` looks for an optional `config.*` in the
    /// working directory
    pub file: Option<PathBuf>,

    /// Environment snapshot; `None` reads the process environment
    pub env: Option<HashMap<String, String>>,
}

impl ConfigSources {
    /// Read only the given variables, ignoring the process environment
    #[must_use]
    pub fn with_env<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            file: None,
            env: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    fn var(&self, name: &str) -> Option<String> {
        match &self.env {
            Some(vars) => vars.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
        .filter(|value| !value.trim().is_empty())
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Hosted model settings
    #[serde(default)]
    pub inference: InferenceAppConfig,

    /// Web search providers
    #[serde(default)]
    pub websearch: WebSearchAppConfig,

    /// Encyclopedia lookups
    #[serde(default)]
    pub wikipedia: WikipediaConfig,

    /// Preprint lookups
    #[serde(default)]
    pub arxiv: ArxivConfig,

    /// Geocoding and current weather
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Which sources the research pipeline consults and their failure policy
    #[serde(default)]
    pub research: ResearchConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load `.env`, then every configuration layer from the default locations
    ///
    /// The result is not validated; call [`AppConfig::validate`] before
    /// building services from it.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env is the normal case
        dotenvy::dotenv().ok();
        Self::load_from(&ConfigSources::default())
    }

    /// Load the configuration layers from explicit sources
    pub fn load_from(sources: &ConfigSources) -> Result<Self, ConfigError> {
        let file = match &sources.file {
            Some(path) => config::File::from(path.as_path()).required(true),
            None => config::File::with_name("config").required(false),
        };

        let mut environment = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        if let Some(vars) = &sources.env {
            environment = environment.source(Some(
                vars.iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ));
        }

        let builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .add_source(file)
            .add_source(environment);

        let mut config: Self = builder.build()?.try_deserialize()?;

        if config.inference.api_key().is_none() {
            config.inference.api_key = sources.var(FALLBACK_API_KEY_VAR).map(SecretString::from);
        }

        Ok(config)
    }

    /// Check that the configuration can run the research workflow
    ///
    /// A missing model API key is reported before any range problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_key()?;

        self.inference
            .validate()
            .map_err(ConfigError::invalid("inference"))?;
        self.websearch
            .to_websearch_config()
            .validate()
            .map_err(ConfigError::invalid("websearch"))?;
        self.wikipedia
            .validate()
            .map_err(ConfigError::invalid("wikipedia"))?;
        self.arxiv.validate().map_err(ConfigError::invalid("arxiv"))?;

        if !SourceKind::ALL
            .iter()
            .any(|kind| self.research.is_enabled(*kind))
        {
            return Err(ConfigError::Invalid {
                section: "research",
                message: "at least one research source must be enabled".to_string(),
            });
        }

        if self.weather.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                section: "weather",
                message: "timeout_secs must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// The model API key, or [`ConfigError::MissingApiKey`]
    pub fn api_key(&self) -> Result<&SecretString, ConfigError> {
        self.inference.api_key().ok_or(ConfigError::MissingApiKey)
    }

    /// Every client pointed at one mock server, with a dummy API key
    ///
    /// Paths follow the real services, so a single server can answer the
    /// model (`/models/...`), DuckDuckGo (`/html/`), MediaWiki (`/w/api.php`),
    /// arXiv (`/api/query`) and Open-Meteo (`/search`, `/forecast`).
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            inference: InferenceAppConfig {
                base_url: base.to_string(),
                timeout_ms: 5000,
                api_key: Some(SecretString::from("test-api-key")),
                ..Default::default()
            },
            websearch: WebSearchAppConfig {
                duckduckgo_base_url: base.to_string(),
                brave_base_url: base.to_string(),
                timeout_secs: 5,
                ..Default::default()
            },
            wikipedia: WikipediaConfig::for_testing(&format!("{base}/w/api.php")),
            arxiv: ArxivConfig::for_testing(base),
            weather: WeatherConfig::for_testing(base),
            ..Default::default()
        }
    }
}
