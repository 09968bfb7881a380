#![allow(dead_code)]

pub mod fixtures;

use httpmock::MockServer;
use pixabay_fetch::utils::config::{Config, ItemFailurePolicy};
use pixabay_fetch::ImageSourceClient;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const API_KEY: &str = "test-key";
pub const API_PATH: &str = "/api/";

/// Temporary asset root plus a config pointing the client at `server`.
pub fn setup(server: &MockServer) -> (TempDir, Config) {
    let tmp = TempDir::new().unwrap();
    let config = Config {
        api_key: Some(API_KEY.to_string()),
        api_url: server.url(API_PATH),
        data: tmp.path().join("data"),
        page_delay_ms: 0,
        timeout_secs: 5,
        ..Config::default()
    };
    (tmp, config)
}

pub fn client(config: Config) -> ImageSourceClient {
    ImageSourceClient::new(config).unwrap()
}

pub fn client_with_policy(mut config: Config, policy: ItemFailurePolicy) -> ImageSourceClient {
    config.item_failure = policy;
    ImageSourceClient::new(config).unwrap()
}

pub fn term_dir(config: &Config, slug: &str) -> PathBuf {
    config.data.join(slug)
}

/// Lines of a credits file, header included.
pub fn ledger_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}
