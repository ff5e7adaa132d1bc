use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
pub const DEFAULT_TOOL: &str = "bioscript";
pub const DEFAULT_DATABASE: &str = "nucleotide";
pub const DEFAULT_MAX_RECORDS: usize = 500;
pub const DEFAULT_PAGE_SIZE: usize = 100;
/// Pause after every page, keeping under the E-utilities request rate limit
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(400);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// How many records to pull and in what batches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub max_records: usize,
    pub page_size: usize,
    pub throttle: Duration,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            max_records: DEFAULT_MAX_RECORDS,
            page_size: DEFAULT_PAGE_SIZE,
            throttle: DEFAULT_THROTTLE,
        }
    }
}

/// Everything the Entrez client needs; passed to [`crate::EntrezClient::new`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrezConfig {
    pub email: String,
    pub api_key: Option<String>,
    pub tool: String,
    pub base_url: String,
    pub database: String,
    pub timeout: Duration,
    pub paging: Paging,
}

impl EntrezConfig {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            api_key: None,
            tool: DEFAULT_TOOL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            paging: Paging::default(),
        }
    }

    /// Set the API key; blank keys are treated as absent
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        self
    }

    pub fn with_paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }

    /// Identification parameters sent with every request
    pub fn identity_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("tool", self.tool.clone()), ("email", self.email.clone())];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }
}
