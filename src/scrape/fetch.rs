// src/scrape/fetch.rs
//
// Page access with the courtesy policy: every network request is preceded by a
// random pause. With the page cache on, pages are read from disk when present
// and saved after download; a cache hit never pauses.

use std::{fs, path::PathBuf, thread, time::Duration};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::options::ScrapeOptions;
use crate::core::net::HttpClient;
use crate::core::sanitize::sanitize_filename;
use crate::error::Result;
use crate::file::ensure_directory;

#[derive(Clone, Debug)]
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{}.html", sanitize_filename(stem, "page")))
    }

    pub fn load(&self, stem: &str) -> Option<String> {
        fs::read_to_string(self.path(stem)).ok()
    }

    pub fn store(&self, stem: &str, body: &str) -> Result<()> {
        ensure_directory(&self.dir)?;
        fs::write(self.path(stem), body)?;
        Ok(())
    }
}

pub struct Fetcher {
    http: HttpClient,
    cache: Option<PageCache>,
    pause_min_secs: f64,
    pause_max_secs: f64,
    network_requests: usize,
}

impl Fetcher {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(opts)?,
            cache: opts.page_cache.then(|| PageCache::new(&opts.cache_dir)),
            pause_min_secs: opts.pause_min_secs,
            pause_max_secs: opts.pause_max_secs,
            network_requests: 0,
        })
    }

    /// Body of `url`; `stem` names the page in the cache.
    pub fn page(&mut self, url: &str, stem: &str) -> Result<String> {
        if let Some(body) = self.cache.as_ref().and_then(|c| c.load(stem)) {
            debug!(stem, "page cache hit");
            return Ok(body);
        }

        self.pause();
        let body = self.http.get(url)?;
        self.network_requests += 1;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.store(stem, &body) {
                warn!(stem, error = %e, "could not cache page");
            }
        }
        Ok(body)
    }

    /// Requests that actually went to the network.
    pub fn network_requests(&self) -> usize {
        self.network_requests
    }

    fn pause(&self) {
        let (lo, hi) = (self.pause_min_secs.max(0.0), self.pause_max_secs.max(0.0));
        if hi <= 0.0 {
            return;
        }
        let secs = if lo >= hi { hi } else { rand::thread_rng().gen_range(lo..=hi) };
        info!(secs, "pausing before request");
        thread::sleep(Duration::from_secs_f64(secs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline(dir: &std::path::Path) -> ScrapeOptions {
        ScrapeOptions {
            page_cache: true,
            cache_dir: dir.to_path_buf(),
            pause_min_secs: 0.0,
            pause_max_secs: 0.0,
            ..ScrapeOptions::default()
        }
    }

    #[test]
    fn cache_stems_are_sanitized() {
        let cache = PageCache::new("pages");
        assert_eq!(cache.path("A/B: Testing"), PathBuf::from("pages/A_slash_B_Testing.html"));
    }

    #[test]
    fn cached_pages_skip_the_network() {
        let tmp = tempfile::tempdir().unwrap();
        let opts = offline(tmp.path());
        PageCache::new(tmp.path()).store("Jane Doe_citations", "<html>cached</html>").unwrap();

        let mut fetcher = Fetcher::new(&opts).unwrap();
        let body = fetcher.page("http://127.0.0.1:9/never", "Jane Doe_citations").unwrap();
        assert_eq!(body, "<html>cached</html>");
        assert_eq!(fetcher.network_requests(), 0);
    }
}
