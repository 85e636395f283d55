use noi_model::TargetList;
use std::time::Duration;

/// User agent sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; NOI-Search/1.0)";

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Pause between consecutive requests.
pub const REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Maximum length of a translation excerpt, in characters.
pub const MAX_TRANSLATION_CHARS: usize = 300;

/// Text pulled out of one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extracted {
    /// Whole content block as plain text, whitespace collapsed.
    pub full_text: String,
    /// Excerpt between "TRANSLATION" and "PURPORT", or empty.
    pub translation: String,
}

/// HTTP client settings.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
    /// Skip certificate validation. Tolerates hosts with a broken local trust store.
    pub accept_invalid_certs: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            timeout: REQUEST_TIMEOUT,
            accept_invalid_certs: true,
        }
    }
}

/// Everything one scrape run needs, fixed at startup.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub targets: TargetList,
    pub fetch: FetchConfig,
    pub delay: Duration,
}

impl ScrapeConfig {
    pub fn new(targets: TargetList) -> Self {
        Self {
            targets,
            fetch: FetchConfig::default(),
            delay: REQUEST_DELAY,
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self::new(TargetList::default())
    }
}

/// Outcome counts for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub pages: usize,
    /// Pages that produced no text, usually failed fetches.
    pub empty: usize,
}
