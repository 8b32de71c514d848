use std::time::Duration;

pub const CATFACT_URL: &str = "https://catfact.ninja/fact";
pub const CATFACT_FIELD: &str = "fact";
pub const CATFACT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct CatFactConfig {
    pub url: String,
    /// Name of the JSON field holding the fact text
    pub field: String,
    pub timeout: Duration,
}

impl CatFactConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Default for CatFactConfig {
    fn default() -> Self {
        Self {
            url: CATFACT_URL.to_string(),
            field: CATFACT_FIELD.to_string(),
            timeout: CATFACT_TIMEOUT,
        }
    }
}
