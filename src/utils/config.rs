use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://pixabay.com/api/";
pub const DEFAULT_SITE_URL: &str = "https://pixabay.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.11 (KHTML, like Gecko) Chrome/23.0.1271.64 Safari/537.11";

/// Largest page size the search API accepts.
pub const MAX_PER_PAGE: u32 = 200;
const MIN_PER_PAGE: u32 = 3;

/// What a download run does when one image cannot be fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ItemFailurePolicy {
    /// Log the failure and move on to the next hit.
    #[default]
    Continue,
    /// Stop the run and return the failure.
    Abort,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_url: String,
    pub site_url: String,
    pub data: PathBuf,
    pub per_page: u32,
    pub max_pages: u32,
    pub page_delay_ms: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub item_failure: ItemFailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            data: PathBuf::from("./data"),
            per_page: MAX_PER_PAGE,
            max_pages: 3,
            page_delay_ms: 1000,
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            item_failure: ItemFailurePolicy::Continue,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = env::var("PIXABAY_API_KEY").ok().filter(|k| !k.trim().is_empty());
        let api_url = env::var("PIXABAY_API_URL").unwrap_or(defaults.api_url);
        let site_url = env::var("PIXABAY_SITE_URL").unwrap_or(defaults.site_url);
        let data = env::var("PIXABAY_DATA").map(PathBuf::from).unwrap_or(defaults.data);
        let per_page = env::var("PIXABAY_PER_PAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.per_page)
            .clamp(MIN_PER_PAGE, MAX_PER_PAGE);
        let max_pages = env::var("PIXABAY_MAX_PAGES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_pages)
            .max(1);
        let page_delay_ms = env::var("PIXABAY_PAGE_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.page_delay_ms);
        let timeout_secs = env::var("PIXABAY_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.timeout_secs);
        let user_agent = env::var("PIXABAY_USER_AGENT").unwrap_or(defaults.user_agent);
        let item_failure = env::var("PIXABAY_ABORT_ON_ITEM_ERROR")
            .map(|v| {
                if matches!(v.as_str(), "1" | "true" | "TRUE") {
                    ItemFailurePolicy::Abort
                } else {
                    ItemFailurePolicy::Continue
                }
            })
            .unwrap_or(defaults.item_failure);
        Self {
            api_key,
            api_url,
            site_url,
            data,
            per_page,
            max_pages,
            page_delay_ms,
            timeout_secs,
            user_agent,
            item_failure,
        }
    }
}

/// Loads `config/.env` and then `.env` from `dir` into the process
/// environment. Variables already set are left alone and missing files are
/// ignored.
pub fn load_dotenv(dir: &Path) -> Result<(), dotenvy::Error> {
    for candidate in [dir.join("config").join(".env"), dir.join(".env")] {
        if candidate.is_file() {
            dotenvy::from_path(&candidate)?;
        }
    }
    Ok(())
}
