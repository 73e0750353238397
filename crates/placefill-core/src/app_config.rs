/// Environment variable consulted for the Places credential when the CLI
/// does not name a different one.
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

#[derive(Clone)]
pub struct AppConfig {
    pub places_api_key: String,
    pub places_base_url: String,
    pub language: String,
    pub log_level: String,
    pub request_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("places_api_key", &"[redacted]")
            .field("places_base_url", &self.places_base_url)
            .field("language", &self.language)
            .field("log_level", &self.log_level)
            .field("request_delay_ms", &self.request_delay_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
