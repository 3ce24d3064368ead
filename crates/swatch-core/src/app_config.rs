use std::path::PathBuf;

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

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Storefront origin used when a command is not given one explicitly.
    pub storefront_url: Option<String>,
    pub cards_path: PathBuf,
    /// Tracked quantities at or below this count are flagged as low stock.
    pub low_stock_threshold: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
