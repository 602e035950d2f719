// src/gui/actions/run.rs
use std::{path::PathBuf, sync::mpsc, thread};

use eframe::egui;
use tracing::info;

use crate::{
    gui::{app::App, progress::GuiProgress},
    runner::{self, RunRequest},
    subject::SubjectArg,
};

/// Start a run on a worker thread; `App::poll_worker` collects the result.
pub fn run(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }

    let gui = &app.state.gui;
    let words: Vec<&str> = gui.subject_text.split_whitespace().collect();
    let Some(subject) = SubjectArg::from_words(&words) else {
        app.status("Enter a name or a group file");
        return;
    };

    let records = gui.records_path.trim();
    let req = RunRequest {
        subject,
        roster: PathBuf::from(gui.roster_path.trim()),
        records: (!records.is_empty()).then(|| PathBuf::from(records)),
        save_records: None,
        write_report: false,
    };
    info!(?req, "run requested");

    let opts = app.state.options.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut progress = GuiProgress::new(status);
        let result = runner::run(&opts, &req, Some(&mut progress));
        let _ = tx.send(result);
        ctx.request_repaint();
    });

    app.worker = Some(rx);
    app.running = true;
    app.status("Starting…");
}
