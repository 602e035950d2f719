// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::info;

use crate::config::consts::DEFAULT_ROSTER_FILE;
use crate::config::options::{AppOptions, ExportFormat};
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunRequest};
use crate::subject::SubjectArg;

/// Most cited and most recent papers for a roster member or a group.
#[derive(Debug, Parser)]
#[command(name = "gs_scrape", version)]
pub struct Args {
    /// A person's name (several words are joined), or a group file
    #[arg(value_name = "SUBJECT", required = true)]
    pub subject: Vec<String>,

    /// Only build the most-cited list
    #[arg(long)]
    pub by_citations: bool,

    /// Only build the most-recent list
    #[arg(long)]
    pub by_year: bool,

    /// Leave out papers dated before this year
    #[arg(long, value_name = "YEAR")]
    pub start: Option<i32>,

    /// Length of each list
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,

    /// Roster file: `Full Name, homepage, scholar profile` per line
    #[arg(long, env = "GS_SCRAPE_ROSTER", default_value = DEFAULT_ROSTER_FILE)]
    pub roster: PathBuf,

    /// Read records from a JSON records file instead of Scholar
    #[arg(long, value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// Save the collected records to a JSON records file
    #[arg(long, value_name = "FILE")]
    pub save_records: Option<PathBuf>,

    /// TOML options file (default: ./gs_scrape.toml when present)
    #[arg(long, env = "GS_SCRAPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Read/write pages in the local page cache; cached pages are not re-fetched
    #[arg(long)]
    pub cache: bool,

    /// -v debug, -vv trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Flags win over the options file.
    pub fn apply(&self, opts: &mut AppOptions) {
        if self.by_citations && !self.by_year {
            opts.rank.by_citations = true;
            opts.rank.by_year = false;
        }
        if self.by_year && !self.by_citations {
            opts.rank.by_year = true;
            opts.rank.by_citations = false;
        }
        if let Some(year) = self.start { opts.rank.first_year = year; }
        if let Some(max) = self.max { opts.rank.max = max; }
        if let Some(dir) = &self.out { opts.export.out_dir = dir.clone(); }
        if let Some(format) = self.format { opts.export.format = format; }
        if self.cache { opts.scrape.page_cache = true; }
    }

    pub fn request(&self) -> Result<RunRequest> {
        let subject = SubjectArg::from_words(&self.subject).ok_or_else(|| eyre!("no subject given"))?;
        Ok(RunRequest {
            subject,
            roster: self.roster.clone(),
            records: self.records.clone(),
            save_records: self.save_records.clone(),
            write_report: true,
        })
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    crate::log::init(args.verbose, true);

    let mut opts = AppOptions::load_or_default(args.config.as_deref())
        .wrap_err("could not load options")?;
    args.apply(&mut opts);
    info!(rank = ?opts.rank, "options");

    let req = args.request()?;
    let mut progress = ConsoleProgress::new();
    let outcome = runner::run(&opts, &req, Some(&mut progress))
        .wrap_err_with(|| format!("run for {:?} failed", args.subject.join(" ")))?;

    if let Some(path) = outcome.report {
        println!("{}", path.display());
    }
    Ok(())
}
