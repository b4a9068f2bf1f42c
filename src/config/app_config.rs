use std::fmt;

#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub invocation_code: String,
    pub login_base_url: String,
    pub graph_base_url: String,
    pub directory_timeout_secs: u64,
}

impl AppConfig {
    /// Missing variables fall back to defaults so startup never aborts; a
    /// blank credential simply surfaces later as a failed directory call.
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            tenant_id: std::env::var("TENANT_ID").unwrap_or_default(),
            client_id: std::env::var("CLIENT_ID").unwrap_or_default(),
            client_secret: std::env::var("CLIENT_SECRET").unwrap_or_default(),
            invocation_code: std::env::var("CLIENT_CODE").unwrap_or_default(),
            login_base_url: std::env::var("LOGIN_BASE_URL")
                .unwrap_or_else(|_| "https://login.microsoftonline.com".to_string()),
            graph_base_url: std::env::var("GRAPH_BASE_URL")
                .unwrap_or_else(|_| "https://graph.microsoft.com".to_string()),
            directory_timeout_secs: std::env::var("DIRECTORY_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
        }
    }
}

// The client secret and invocation code must never reach the logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AppConfig")
            .field("port", &self.port)
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("invocation_code", &"<redacted>")
            .field("login_base_url", &self.login_base_url)
            .field("graph_base_url", &self.graph_base_url)
            .field("directory_timeout_secs", &self.directory_timeout_secs)
            .finish()
    }
}
