/// Client configuration loaded from environment variables.
///
/// | Env var        | Default                   |
/// |----------------|---------------------------|
/// | `API_BASE_URL` | `http://localhost:8000`   |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin of the API server, without a trailing slash.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults. A `.env` file is read first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = std::env::var("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| Self::default().api_base_url);

        Self { api_base_url }
    }
}
