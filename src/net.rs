// src/net.rs
use std::error::Error;
use std::time::Duration;

use crate::params::WIKI_BASE;

/// One shared blocking client for the whole run. The page set is tiny and
/// fixed, so the transport's own timeout is the only policy we carry.
pub struct Client {
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("contest_scrape/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http })
    }

    /// Fetch one named wiki page and return its HTML body.
    pub fn fetch_page(&self, page: &str) -> Result<String, Box<dyn Error>> {
        let url = format!("{WIKI_BASE}{page}");
        log::debug!("GET {url}");
        let resp = self.http.get(&url).send()?;
        if !resp.status().is_success() {
            return Err(format!("HTTP {}: {}", resp.status(), url).into());
        }
        Ok(resp.text()?)
    }
}
