//! Blocking client for the Pixabay search API and its image CDN.
//!
//! Everything runs sequentially on the calling thread. Search pages are
//! requested one after another with a fixed pause in between; images are
//! downloaded one at a time and skipped when a file of the same name already
//! exists in the term's directory.

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Url;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::{
    CreditEntry, DownloadReport, FailedItem, Hit, HitCount, SearchParameters, SearchResponse,
    StoredResultSet,
};
use crate::store::{ledger, snapshot};
use crate::utils::config::{Config, ItemFailurePolicy};
use crate::utils::path::{author_url, image_filename, AssetPaths};

pub struct ImageSourceClient {
    config: Config,
    http: Client,
    asset_headers: HeaderMap,
}

impl ImageSourceClient {
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let asset_headers = asset_headers(&config.user_agent)?;
        Ok(Self {
            config,
            http,
            asset_headers,
        })
    }

    /// Requests the first page and reports how many images match.
    pub fn preview_search(&self, term: &str, params: &SearchParameters) -> Result<HitCount> {
        let response = self.search_page(term, params, 1)?;
        Ok(HitCount::from_total_hits(response.total_hits))
    }

    /// Collects up to `max_pages` pages of hits and writes them as the term's
    /// snapshot, replacing any previous one.
    pub fn fetch_and_persist(&self, term: &str, params: &SearchParameters) -> Result<StoredResultSet> {
        let paths = AssetPaths::for_term(&self.config.data, term)?;
        let delay = Duration::from_millis(self.config.page_delay_ms);

        info!("Collecting image data from Pixabay...");
        let mut hits: Vec<Hit> = Vec::new();
        let mut total_hits = 0;
        for page in 1..=self.config.max_pages {
            if page > 1 && !delay.is_zero() {
                thread::sleep(delay);
            }
            let response = self.search_page(term, params, page)?;
            total_hits = response.total_hits;
            let received = response.hits.len();
            hits.extend(response.hits);
            info!(" - Page {} collected ({} hits)", page, received);

            // Pages past the last result are rejected by the API.
            if received == 0 || hits.len() as u64 >= total_hits {
                break;
            }
        }

        paths.ensure_dir()?;
        let path = paths.results();
        snapshot::write(&path, &hits)?;
        info!("Saved {} results to {:?}", hits.len(), path);

        Ok(StoredResultSet {
            slug: paths.slug,
            path,
            total_hits,
            hits,
        })
    }

    /// Downloads every image in the term's snapshot that is not already on
    /// disk and records a credit row for each new file.
    pub fn download_assets(&self, term: &str) -> Result<DownloadReport> {
        let paths = AssetPaths::for_term(&self.config.data, term)?;
        if !paths.dir.is_dir() {
            return Err(Error::MissingSnapshot { path: paths.results() });
        }
        let credits = paths.credits();
        if ledger::ensure(&credits)? {
            debug!("Created credits ledger {:?}", credits);
        }
        let hits = snapshot::read(&paths.results())?;

        info!("Downloading individual images...");
        let mut report = DownloadReport::default();
        for hit in &hits {
            let filename = match image_filename(hit) {
                Ok(name) => name,
                Err(e) => {
                    self.item_failed(&mut report, &hit.large_image_url, e)?;
                    continue;
                }
            };
            let target = paths.image(&filename);
            if target.exists() {
                debug!("Skipping {}, already downloaded", filename);
                report.skipped.push(filename);
                continue;
            }

            if let Err(e) = self.fetch_to(&hit.large_image_url, &target) {
                self.item_failed(&mut report, &hit.large_image_url, e)?;
                continue;
            }

            let entry = CreditEntry {
                image_slug: filename.clone(),
                source_url: hit.page_url.clone(),
                author: hit.user.clone(),
                author_url: author_url(&self.config.site_url, &hit.user, hit.user_id),
            };
            ledger::append(&credits, &entry)?;
            info!(" - Saved {}", filename);
            report.downloaded.push(filename);
        }

        info!(
            "Downloads completed: {} saved, {} skipped, {} failed",
            report.downloaded.len(),
            report.skipped.len(),
            report.failed.len()
        );
        Ok(report)
    }

    fn search_page(&self, term: &str, params: &SearchParameters, page: u32) -> Result<SearchResponse> {
        let key = self.config.api_key.as_deref().ok_or(Error::MissingApiKey)?;
        let page = page.to_string();
        let per_page = self.config.per_page.to_string();
        let min_width = params.min_width.to_string();
        let min_height = params.min_height.to_string();
        let colors = params.colors.to_string();

        let mut query: Vec<(&str, &str)> = vec![
            ("key", key),
            ("q", term.trim()),
            ("page", page.as_str()),
            ("image_type", params.image_type.as_str()),
            ("orientation", params.orientation.as_str()),
            ("category", params.category.as_str()),
            ("min_width", min_width.as_str()),
            ("min_height", min_height.as_str()),
            ("safesearch", "true"),
            ("per_page", per_page.as_str()),
        ];
        if !colors.is_empty() {
            query.push(("colors", colors.as_str()));
        }

        let request = self.http.get(&self.config.api_url).query(&query).build()?;
        let shown = redact_key(request.url());
        debug!("GET {}", shown);
        let response = self.http.execute(request)?;
        let status = response.status();
        if !status.is_success() {
            warn!("Search request for {:?} failed: HTTP {}", term, status);
            return Err(Error::Transport {
                url: shown,
                status: status.as_u16(),
            });
        }
        Ok(response.json()?)
    }

    fn fetch_to(&self, url: &str, target: &Path) -> Result<()> {
        let response = self
            .http
            .get(url)
            .headers(self.asset_headers.clone())
            .send()
            .map_err(|e| Error::item_fetch(url, e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::item_fetch(url, format!("HTTP {}", status)));
        }
        let bytes = response.bytes().map_err(|e| Error::item_fetch(url, e.to_string()))?;

        // Only complete files ever carry the final name, so the skip check
        // never trusts a half-written image.
        let partial = partial_path(target);
        if let Err(e) = fs::write(&partial, &bytes) {
            let _ = fs::remove_file(&partial);
            return Err(Error::io(partial, e));
        }
        fs::rename(&partial, target).map_err(|e| Error::io(target, e))?;
        Ok(())
    }

    /// Records a per-item failure, or returns it when the policy says to abort.
    fn item_failed(&self, report: &mut DownloadReport, url: &str, err: Error) -> Result<()> {
        if !err.is_per_item() || self.config.item_failure == ItemFailurePolicy::Abort {
            return Err(err);
        }
        warn!("Skipping {}: {}", url, err);
        report.failed.push(FailedItem {
            url: url.to_string(),
            reason: err.to_string(),
        });
        Ok(())
    }
}

/// `<target>.part`, where an image is written before it is moved into place.
fn partial_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// Request URL as shown in logs and errors, with the API key masked.
fn redact_key(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "REDACTED".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    let mut shown = url.clone();
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}

fn asset_headers(user_agent: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let agent = HeaderValue::from_str(user_agent)
        .map_err(|e| Error::InvalidConfig(format!("user agent {:?}: {}", user_agent, e)))?;
    headers.insert(header::USER_AGENT, agent);
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.8"));
    Ok(headers)
}
