// src/runner.rs
//
// One run, start to finish: roster -> subject -> records -> rankings -> report.
// Frontends build a `RunRequest` and hand over a progress sink.

use std::path::PathBuf;

use tracing::info;

use crate::aggregate::{RankPlan, Rankings, aggregate};
use crate::config::options::AppOptions;
use crate::error::Result;
use crate::progress::Progress;
use crate::report::{self, Sections};
use crate::roster::Roster;
use crate::scrape::{self, RecordSource, RecordsFile, RecordsFileSource, ScholarSource};
use crate::subject::{Subject, SubjectArg};

#[derive(Clone, Debug)]
pub struct RunRequest {
    pub subject: SubjectArg,
    pub roster: PathBuf,
    /// Read records from this file instead of Scholar.
    pub records: Option<PathBuf>,
    /// Save the collected records here for later offline runs.
    pub save_records: Option<PathBuf>,
    /// Write the report under the export options' output directory.
    pub write_report: bool,
}

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub subject: Subject,
    pub rankings: Rankings,
    pub sections: Sections,
    pub report: Option<PathBuf>,
}

/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    req: &RunRequest,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunOutcome> {
    let roster = Roster::load(&req.roster)?;
    let mut subject = Subject::resolve(&req.subject, &roster, &opts.rank, &opts.export.homepage)?;
    info!(subject = subject.name(), people = subject.people().len(), "subject resolved");

    let mut source: Box<dyn RecordSource> = match &req.records {
        Some(path) => Box::new(RecordsFileSource::load(path)?),
        None => Box::new(ScholarSource::new(&opts.scrape)?),
    };
    scrape::collect(&mut subject, source.as_mut(), &roster, progress.as_deref_mut())?;

    if let Some(path) = &req.save_records {
        RecordsFile::from_subject(&subject).save(path)?;
        info!(path = %path.display(), "records saved");
    }

    let plan = RankPlan::from_options(&opts.rank);
    let rankings = aggregate(&subject, &plan);
    let sections = Sections::from_plan(&plan);

    let report = if req.write_report {
        let path = report::write_report(&subject, &rankings, sections, &opts.export)?;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Wrote {}", path.display()));
        }
        Some(path)
    } else {
        None
    };

    Ok(RunOutcome { subject, rankings, sections, report })
}
