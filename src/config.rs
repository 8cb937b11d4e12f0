use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL prefixed to every API path.
    pub api_base: String,
    /// OAuth client id handed to the Google sign-in widget.
    pub google_client_id: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            api_base: std::env::var("API_BASE").unwrap_or_else(|_| "/api".into()),
            google_client_id: std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_unset() {
        std::env::remove_var("API_BASE");
        std::env::remove_var("GOOGLE_CLIENT_ID");
        let cfg = AppConfig::from_env().expect("config should load");
        assert_eq!(cfg.api_base, "/api");
        assert_eq!(cfg.google_client_id, "");
    }
}
