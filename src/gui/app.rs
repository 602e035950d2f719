// src/gui/app.rs
use std::{
    sync::{Arc, Mutex, mpsc::{Receiver, TryRecvError}},
    time::Duration,
};

use eframe::egui;
use tracing::{error, info, warn};

use crate::{
    config::{options::AppOptions, state::AppState},
    error::Result,
    runner::RunOutcome,
};

use super::table_model::{self, TableData};

pub fn run(options: eframe::NativeOptions) -> eframe::Result<()> {
    let mut state = AppState::default();
    state.options = match AppOptions::load_or_default(None) {
        Ok(o) => o,
        Err(e) => {
            warn!(error = %e, "options file unreadable; using defaults");
            AppOptions::default()
        }
    };
    eframe::run_native(
        "Scholar Rankings",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output dir text field (mapped onto ExportOptions on export)
    pub out_dir_text: String,

    // last finished run and the table built from it
    pub outcome: Option<RunOutcome>,
    pub table: TableData,

    // status/progress (the worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub worker: Option<Receiver<Result<RunOutcome>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_dir_text = state.options.export.out_dir.to_string_lossy().into_owned();
        Self {
            state,
            out_dir_text,
            outcome: None,
            table: TableData::empty(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            worker: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Rebuild the table from the last outcome, tab and person selection.
    pub fn rebuild_view(&mut self) {
        let gui = &self.state.gui;
        self.table = table_model::build(self.outcome.as_ref(), gui.tab, gui.selected_person);
    }

    /// Pick up the worker's result once it arrives.
    fn poll_worker(&mut self) {
        let Some(rx) = &self.worker else { return };
        match rx.try_recv() {
            Ok(Ok(outcome)) => {
                info!(
                    subject = outcome.subject.name(),
                    cited = outcome.rankings.cited.len(),
                    recent = outcome.rankings.recent.len(),
                    "run finished"
                );
                self.status(format!(
                    "Ready: {} ({} cited, {} recent)",
                    outcome.subject.name(),
                    outcome.rankings.cited.len(),
                    outcome.rankings.recent.len()
                ));
                self.outcome = Some(outcome);
                self.state.gui.selected_person = None;
                self.rebuild_view();
            }
            Ok(Err(e)) => {
                error!(error = %e, "run failed");
                self.status(format!("Error: {e}"));
            }
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                error!("worker ended without a result");
                self.status("Error: run stopped unexpectedly");
            }
        }
        self.worker = None;
        self.running = false;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        egui::SidePanel::left("people")
            .resizable(false)
            .show(ctx, |ui| {
                super::components::people_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::run_bar::draw(ui, self);

            ui.separator();

            super::components::tabs::draw(ui, self);

            ui.separator();

            super::components::export_bar::draw(ui, self);

            ui.separator();

            super::components::paper_table::draw(ui, self);
        });
    }
}
