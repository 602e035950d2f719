// src/gui/actions/copy.rs
use eframe::egui;
use tracing::debug;

use crate::{
    gui::{app::App, table_model::papers_for},
    report::delimited::{paper_rows, to_export_string},
};

/// Current view as delimited text (TSV unless CSV is chosen).
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(outcome) = &app.outcome else {
        app.status("Nothing to copy");
        return;
    };

    let gui = &app.state.gui;
    let export = &app.state.options.export;
    let papers = papers_for(outcome, gui.tab, gui.selected_person);
    if papers.is_empty() {
        app.status("Nothing to copy");
        return;
    }

    let sep = export.format.delim().unwrap_or('\t');
    let rows = paper_rows(gui.tab.list_name(), papers);
    debug!(rows = rows.len(), "copy");
    ui_ctx.copy_text(to_export_string(&rows, export.include_headers, sep));
    app.status("Copied to clipboard");
}
