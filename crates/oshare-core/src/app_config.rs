use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Service account the spreadsheet is shared with.
    pub google_client_email: String,
    /// PEM-encoded private key, with literal `\n` sequences already unescaped.
    pub google_private_key: String,
    pub google_sheet_id: String,
    pub worksheet_title: String,
    /// Seconds a rendered landing page is served before it is regenerated.
    pub revalidate_secs: u64,
    pub request_timeout_secs: u64,
    pub sheets_base_url: String,
    pub token_uri: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("google_client_email", &self.google_client_email)
            .field("google_private_key", &"[redacted]")
            .field("google_sheet_id", &self.google_sheet_id)
            .field("worksheet_title", &self.worksheet_title)
            .field("revalidate_secs", &self.revalidate_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("sheets_base_url", &self.sheets_base_url)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
