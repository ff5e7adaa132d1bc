use bioscript_formats::{genbank, GenBankRecord};
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::EntrezConfig;
use crate::EntrezError;

/// Server-side history of a search, used to page through its results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryHandle {
    pub query_key: String,
    pub web_env: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub count: usize,
    pub history: Option<HistoryHandle>,
}

/// A remote sequence database that can be searched and paged through
pub trait SequenceDatabase {
    fn search(&self, taxid: &str) -> Result<SearchResult, EntrezError>;

    fn fetch_page(
        &self,
        history: &HistoryHandle,
        start: usize,
        size: usize,
    ) -> Result<Vec<GenBankRecord>, EntrezError>;
}

#[derive(Debug, Deserialize)]
struct EsearchEnvelope {
    esearchresult: Option<EsearchResult>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EsearchResult {
    count: Option<String>,
    querykey: Option<String>,
    webenv: Option<String>,
    #[serde(rename = "ERROR")]
    error: Option<String>,
}

/// Search term selecting every entry of an organism by taxonomy id
pub fn organism_term(taxid: &str) -> String {
    format!("txid{}[Organism]", taxid.trim())
}

/// Interpret the body of an `esearch` call made with `retmode=json`
pub fn parse_search_response(body: &str) -> Result<SearchResult, EntrezError> {
    let envelope: EsearchEnvelope = serde_json::from_str(body)?;
    if let Some(error) = envelope.error {
        return Err(EntrezError::Api(error));
    }
    let result = envelope
        .esearchresult
        .ok_or_else(|| EntrezError::Api("response has no esearchresult".to_string()))?;
    if let Some(error) = result.error {
        return Err(EntrezError::Api(error));
    }

    let raw_count = result.count.unwrap_or_default();
    let count = raw_count
        .trim()
        .parse::<usize>()
        .map_err(|_| EntrezError::InvalidCount(raw_count.clone()))?;

    let history = match (result.querykey, result.webenv) {
        (Some(query_key), Some(web_env)) => Some(HistoryHandle { query_key, web_env }),
        _ => None,
    };

    Ok(SearchResult { count, history })
}

/// Blocking client for the NCBI E-utilities
pub struct EntrezClient {
    config: EntrezConfig,
    http: Client,
}

impl EntrezClient {
    pub fn new(config: EntrezConfig) -> Result<Self, EntrezError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("{}/{}", config.tool, env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &EntrezConfig {
        &self.config
    }

    pub fn search_params(&self, taxid: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("db", self.config.database.clone()),
            ("term", organism_term(taxid)),
            ("usehistory", "y".to_string()),
            ("retmode", "json".to_string()),
        ];
        params.extend(self.config.identity_params());
        params
    }

    pub fn fetch_params(
        &self,
        history: &HistoryHandle,
        start: usize,
        size: usize,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("db", self.config.database.clone()),
            ("rettype", "gb".to_string()),
            ("retmode", "text".to_string()),
            ("retstart", start.to_string()),
            ("retmax", size.to_string()),
            ("WebEnv", history.web_env.clone()),
            ("query_key", history.query_key.clone()),
        ];
        params.extend(self.config.identity_params());
        params
    }

    fn get(&self, endpoint: &str, params: &[(&'static str, String)]) -> Result<String, EntrezError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        debug!("GET {} ({} params)", url, params.len());
        let response = self
            .http
            .get(&url)
            .query(params)
            .send()?
            .error_for_status()?;
        Ok(response.text()?)
    }
}

impl SequenceDatabase for EntrezClient {
    fn search(&self, taxid: &str) -> Result<SearchResult, EntrezError> {
        let body = self.get("esearch.fcgi", &self.search_params(taxid))?;
        let result = parse_search_response(&body)?;
        debug!("search for taxid {} matched {} records", taxid, result.count);
        Ok(result)
    }

    fn fetch_page(
        &self,
        history: &HistoryHandle,
        start: usize,
        size: usize,
    ) -> Result<Vec<GenBankRecord>, EntrezError> {
        let body = self.get("efetch.fcgi", &self.fetch_params(history, start, size))?;
        let records = genbank::parse_all(&body)?;
        debug!("page at {} returned {} records", start, records.len());
        Ok(records)
    }
}
