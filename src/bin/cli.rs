// src/bin/cli.rs
use gs_scrape::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
