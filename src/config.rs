//! Application configuration loaded from environment variables.
//!
//! The remote KV backend is enabled only when both `KV_REST_API_URL` and
//! `KV_REST_API_TOKEN` are set; everything else has a usable default so
//! the server boots with zero configuration against local files.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote KV REST endpoint (e.g. an Upstash database URL)
    pub kv_rest_api_url: Option<String>,
    /// Bearer token for the remote KV REST endpoint
    pub kv_rest_api_token: Option<String>,
    /// Directory for local JSON document files
    pub data_dir: String,
    /// Username seeded for the initial super admin
    pub super_admin_username: String,
    /// Password seeded for the initial super admin
    pub super_admin_password: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            kv_rest_api_url: env::var("KV_REST_API_URL").ok().filter(|v| !v.is_empty()),
            kv_rest_api_token: env::var("KV_REST_API_TOKEN").ok().filter(|v| !v.is_empty()),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            super_admin_username: env::var("SUPER_ADMIN_USERNAME")
                .unwrap_or_else(|_| "admin".to_string()),
            super_admin_password: env::var("SUPER_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "password123".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        }
    }

    /// True when both remote KV variables are present.
    pub fn remote_configured(&self) -> bool {
        self.kv_rest_api_url.is_some() && self.kv_rest_api_token.is_some()
    }

    /// Default config for testing only: local files in the given directory,
    /// no remote backend.
    pub fn test_default(data_dir: &str) -> Self {
        Self {
            kv_rest_api_url: None,
            kv_rest_api_token: None,
            data_dir: data_dir.to_string(),
            super_admin_username: "admin".to_string(),
            super_admin_password: "password123".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_configured_requires_both_vars() {
        let mut config = Config::test_default("data");
        assert!(!config.remote_configured());

        config.kv_rest_api_url = Some("https://kv.example.test".to_string());
        assert!(!config.remote_configured());

        config.kv_rest_api_token = Some("secret".to_string());
        assert!(config.remote_configured());
    }
}
