use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Origin of the search listing site, without a trailing path.
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Upper bound on result pages read per run. Always at least 1.
    pub max_pages: usize,
    pub inter_page_delay_ms: u64,
    pub output_path: PathBuf,
}
