// src/gui/actions/export.rs
use std::path::PathBuf;

use tracing::{error, info};

use crate::{gui::app::App, report};

pub fn export(app: &mut App) {
    let dir = app.out_dir_text.trim();
    if !dir.is_empty() {
        app.state.options.export.out_dir = PathBuf::from(dir);
    }

    let status_msg = match &app.outcome {
        None => s!("Nothing to export"),
        Some(outcome) => {
            let export = &app.state.options.export;
            match report::write_report(&outcome.subject, &outcome.rankings, outcome.sections, export) {
                Ok(path) => {
                    info!(path = %path.display(), "export ok");
                    format!("Exported {}", path.display())
                }
                Err(e) => {
                    error!(error = %e, "export failed");
                    format!("Export error: {e}")
                }
            }
        }
    };

    // mutate app only after the outcome borrow is gone
    app.status(status_msg);
}
