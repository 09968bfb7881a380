use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::Hit;
use crate::utils::slug::slugify;

pub const RESULTS_FILE: &str = "__results.json";
pub const CREDITS_FILE: &str = "__credits.csv";

/// Layout of the asset root: one directory per slugified search term holding
/// the results snapshot, the credits ledger and the downloaded images.
#[derive(Clone, Debug)]
pub struct AssetPaths {
    pub root: PathBuf,
    pub slug: String,
    pub dir: PathBuf,
}

impl AssetPaths {
    pub fn for_term(root: &Path, term: &str) -> Result<Self> {
        let slug = slugify(term);
        if slug.is_empty() {
            return Err(Error::InvalidTerm { term: term.to_string() });
        }
        Ok(Self {
            root: root.to_path_buf(),
            dir: root.join(&slug),
            slug,
        })
    }

    pub fn results(&self) -> PathBuf {
        self.dir.join(RESULTS_FILE)
    }

    pub fn credits(&self) -> PathBuf {
        self.dir.join(CREDITS_FILE)
    }

    pub fn image(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    pub fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| Error::io(&self.dir, e))
    }
}

/// Last non-empty path segment of a URL, without query or fragment and with
/// percent escapes decoded.
fn last_segment(url: &str) -> Option<String> {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let segment = without_query.trim_end_matches('/').rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    Some(decoded)
}

/// `<page-url-last-segment>.<image-extension>`, e.g. `ocean-wave-123456.jpg`.
pub fn image_filename(hit: &Hit) -> Result<String> {
    let invalid = |reason: &str| Error::InvalidHit {
        url: hit.large_image_url.clone(),
        reason: reason.to_string(),
    };
    let image_name = last_segment(&hit.large_image_url).ok_or_else(|| invalid("no file name in image URL"))?;
    let extension = match image_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => return Err(invalid("image URL has no file extension")),
    };
    let stem = last_segment(&hit.page_url).ok_or_else(|| invalid("page URL has no path segment"))?;
    if stem.contains(['/', '\\']) || stem == ".." {
        return Err(invalid("page URL segment is not a valid file name"));
    }
    Ok(format!("{}.{}", stem, extension))
}

/// `{site}/users/{name-with-underscores-lowercased}-{id}/`
pub fn author_url(site_url: &str, user: &str, user_id: u64) -> String {
    format!(
        "{}/users/{}-{}/",
        site_url.trim_end_matches('/'),
        user.replace(' ', "_").to_lowercase(),
        user_id
    )
}
