use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub cosmic_api_url: String,
    pub cosmic_bucket_slug: String,
    pub cosmic_read_key: Option<String>,
    pub cms_timeout_secs: u64,
    /// Serve content from a local JSON file instead of the CMS.
    pub cms_fixtures_path: Option<PathBuf>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cms_fixtures_path = lookup("CMS_FIXTURES_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        // The bucket is only needed when talking to the real CMS.
        let cosmic_bucket_slug = match lookup("COSMIC_BUCKET_SLUG") {
            Some(slug) => slug,
            None if cms_fixtures_path.is_some() => String::new(),
            None => return Err(env::VarError::NotPresent),
        };

        Ok(Self {
            cosmic_api_url: lookup("COSMIC_API_URL")
                .unwrap_or_else(|| "https://api.cosmicjs.com/v3".to_string()),
            cosmic_bucket_slug,
            cosmic_read_key: lookup("COSMIC_READ_KEY").filter(|k| !k.is_empty()),
            cms_timeout_secs: lookup("CMS_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .unwrap_or(30),
            cms_fixtures_path,
            host: lookup("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("BACKEND_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        })
    }
}
