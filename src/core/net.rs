// src/core/net.rs
// Blocking HTTPS GET with a browser-like user agent.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::options::ScrapeOptions;
use crate::error::{Error, Result};

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.clone())
            .timeout(Duration::from_secs(opts.timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    pub fn get(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::page(url, format!("HTTP {status}")));
        }
        Ok(resp.text()?)
    }
}
