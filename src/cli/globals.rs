use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:5001/api";

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: Url,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: Url) -> Self {
        Self { api_url }
    }
}
