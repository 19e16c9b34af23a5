use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GROQ_API_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_TRANSLATE_API_BASE_URL: &str = "https://translate.googleapis.com";
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be set (copy .env.example to .env)")]
    MissingVar { name: &'static str },

    #[error("{name} has an invalid value '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_api_base_url: String,
    pub translate_api_base_url: String,
    pub static_dir: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let groq_api_key = lookup("GROQ_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingVar { name: "GROQ_API_KEY" })?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVar { name: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let or_default = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            groq_api_key,
            groq_api_base_url: or_default("GROQ_API_BASE_URL", DEFAULT_GROQ_API_BASE_URL),
            translate_api_base_url: or_default(
                "TRANSLATE_API_BASE_URL",
                DEFAULT_TRANSLATE_API_BASE_URL,
            ),
            static_dir: or_default("STATIC_DIR", DEFAULT_STATIC_DIR),
            port,
        })
    }
}
