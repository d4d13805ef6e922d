use dotenvy::dotenv;
use shared::utils::trim_trailing_slashes;
use std::env;

pub const PRODUCTION_BASE_URL: &str = "https://phytoecia-ecomet-chatbot-backend.hf.space";
pub const LOCAL_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Production,
    Local,
}

impl Profile {
    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "production" || v == "prod" => Profile::Production,
            _ => Profile::Local,
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            Profile::Production => PRODUCTION_BASE_URL,
            Profile::Local => LOCAL_BASE_URL,
        }
    }
}

/// Backend location, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub profile: Profile,
    pub base_url: String,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self::resolve(
            env::var("ECOMET_ENV").ok().as_deref(),
            env::var("ECOMET_API_URL").ok().as_deref(),
        )
    }

    /// `api_url` overrides the profile's default when it is set and non-blank.
    pub fn resolve(profile: Option<&str>, api_url: Option<&str>) -> Self {
        let profile = Profile::from_env_value(profile);
        let base_url = match api_url {
            Some(url) if !url.trim().is_empty() => trim_trailing_slashes(url),
            _ => profile.default_base_url().to_string(),
        };
        Self { profile, base_url }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
