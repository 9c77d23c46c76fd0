//! Endpoint and walk configuration.

use std::time::Duration;

/// Origin every relative EDGAR link is resolved against.
pub const EDGAR_ORIGIN: &str = "https://www.sec.gov";

/// Company search endpoint path.
pub const SEARCH_PATH: &str = "/cgi-bin/browse-edgar";

/// Default number of search results requested (and walked).
pub const DEFAULT_RESULT_COUNT: usize = 40;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// User agent for SEC EDGAR requests (SEC requires identifying information)
pub const USER_AGENT: &str = "thirteenf/0.1 (contact@example.com)";

/// Filing type prefix descended into by the holdings walk.
pub const DEFAULT_FILING_PREFIX: &str = "13F";

/// Document type label of the holdings document inside a 13F filing.
pub const INFORMATION_TABLE: &str = "INFORMATION TABLE";

/// Id of the container holding the search results table.
pub const SEARCH_CONTAINER_ID: &str = "seriesDiv";

/// Id shared by the detail page containers; the last one holds the document table.
pub const DETAIL_CONTAINER_ID: &str = "formDiv";

/// Header rows preceding data in the information table document.
pub const DOCUMENT_HEADER_ROWS: usize = 3;

/// HTTP settings for talking to EDGAR.
#[derive(Debug, Clone)]
pub struct EdgarConfig {
    /// Scheme and host links are resolved against.
    pub origin: String,
    /// Path of the company search endpoint.
    pub search_path: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for EdgarConfig {
    fn default() -> Self {
        Self {
            origin: EDGAR_ORIGIN.to_string(),
            search_path: SEARCH_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Settings for the three-level walk.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum number of search rows requested and considered.
    pub max_records: usize,
    /// Case-sensitive filing type prefix a search row must carry to be descended into.
    pub filing_prefix: String,
    /// Exact document type label of the holdings document.
    pub document_type: String,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_records: DEFAULT_RESULT_COUNT,
            filing_prefix: DEFAULT_FILING_PREFIX.to_string(),
            document_type: INFORMATION_TABLE.to_string(),
        }
    }
}
