// src/log.rs
//
// `tracing` subscriber for both binaries: formatted events on stderr, filtered by
// `RUST_LOG` when set, else by the verbosity level. Optionally teed (without
// colors) to `.store/debug.log`.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{LOG_FILE, STORE_DIR};

pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "gs_scrape=info",
        1 => "gs_scrape=debug",
        _ => "gs_scrape=trace",
    }
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

fn open_log_file() -> Option<File> {
    fs::create_dir_all(STORE_DIR).ok()?;
    OpenOptions::new().create(true).append(true).open(log_path()).ok()
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbosity: u8, to_file: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let file_layer = to_file
        .then(open_log_file)
        .flatten()
        .map(|f| fmt::layer().with_ansi(false).with_writer(Mutex::new(f)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init();
}
