use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;

/// Hard cap on `totalHits` reported by the search API.
pub const PROVIDER_HIT_CAP: u64 = 500;

/// One image record from the search API. Fields the client does not read are
/// kept in `extra` so the saved snapshot stays a faithful copy of the response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Hit {
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    #[serde(rename = "pageURL")]
    pub page_url: String,
    pub user: String,
    pub user_id: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchResponse {
    #[serde(rename = "totalHits")]
    pub total_hits: u64,
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitCount {
    Exact(u64),
    /// The provider capped the count; more images may match than can be fetched.
    AtMaximum(u64),
}

impl HitCount {
    pub fn from_total_hits(total_hits: u64) -> Self {
        if total_hits == PROVIDER_HIT_CAP {
            Self::AtMaximum(total_hits)
        } else {
            Self::Exact(total_hits)
        }
    }
}

impl fmt::Display for HitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "Found {} images", n),
            Self::AtMaximum(n) => write!(f, "Found {} images (the maximum available through the API)", n),
        }
    }
}

/// One row of `__credits.csv`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CreditEntry {
    #[serde(rename = "IMAGE_SLUG")]
    pub image_slug: String,
    #[serde(rename = "SOURCE_URL")]
    pub source_url: String,
    #[serde(rename = "AUTHOR")]
    pub author: String,
    #[serde(rename = "AUTHOR_URL")]
    pub author_url: String,
}

/// Hits written to disk by a search.
#[derive(Debug, Clone)]
pub struct StoredResultSet {
    pub slug: String,
    pub path: PathBuf,
    pub total_hits: u64,
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone)]
pub struct FailedItem {
    pub url: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct DownloadReport {
    pub downloaded: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<FailedItem>,
}

impl DownloadReport {
    pub fn total(&self) -> usize {
        self.downloaded.len() + self.skipped.len() + self.failed.len()
    }
}
