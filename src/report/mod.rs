// src/report/mod.rs
//! Output for a finished run: HTML report, CSV/TSV rows or JSON.

pub mod delimited;
pub mod html;
pub mod json;

use std::path::PathBuf;

use tracing::info;

use crate::aggregate::{RankPlan, Rankings};
use crate::config::options::{ExportFormat, ExportOptions};
use crate::error::Result;
use crate::file::{out_path, write_file};
use crate::subject::Subject;

/// Which rankings were requested; disabled ones are left out of the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sections {
    pub cited: bool,
    pub recent: bool,
}

impl Sections {
    pub fn from_plan(plan: &RankPlan) -> Self {
        Self { cited: plan.cited_size > 0, recent: plan.recent_size > 0 }
    }
}

pub fn render(
    subject: &Subject,
    rankings: &Rankings,
    sections: Sections,
    export: &ExportOptions,
) -> Result<String> {
    Ok(match export.format {
        ExportFormat::Html => html::render(subject, rankings, sections, &export.banner),
        ExportFormat::Json => json::render(subject, rankings, sections)?,
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = export.format.delim().unwrap_or(',');
            let mut rows = Vec::new();
            if sections.cited {
                rows.extend(delimited::paper_rows("cited", &rankings.cited));
            }
            if sections.recent {
                rows.extend(delimited::paper_rows("recent", &rankings.recent));
            }
            delimited::to_export_string(&rows, export.include_headers, sep)
        }
    })
}

/// Render and write to `<out_dir>/<subject stem>.<ext>`. Returns the path written.
pub fn write_report(
    subject: &Subject,
    rankings: &Rankings,
    sections: Sections,
    export: &ExportOptions,
) -> Result<PathBuf> {
    let contents = render(subject, rankings, sections, export)?;
    let path = out_path(&export.out_dir, &subject.file_stem(), export.format.ext());
    write_file(&path, &contents)?;
    info!(path = %path.display(), "report written");
    Ok(path)
}
