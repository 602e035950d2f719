// src/gui/components/run_bar.rs
//
// Inputs for a run (roster, subject, optional records file) plus the RUN button.

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    egui::Grid::new("run_inputs").num_columns(2).show(ui, |ui| {
        let gui = &mut app.state.gui;

        ui.label("Roster:");
        ui.add(egui::TextEdit::singleline(&mut gui.roster_path).font(egui::TextStyle::Monospace));
        ui.end_row();

        ui.label("Name or group file:");
        ui.text_edit_singleline(&mut gui.subject_text);
        ui.end_row();

        ui.label("Records file:");
        ui.add(
            egui::TextEdit::singleline(&mut gui.records_path)
                .hint_text("empty: fetch from Scholar")
                .font(egui::TextStyle::Monospace),
        );
        ui.end_row();
    });

    ui.horizontal(|ui| {
        let rank = &mut app.state.options.rank;
        ui.checkbox(&mut rank.by_citations, "Most cited");
        ui.checkbox(&mut rank.by_year, "Most recent");
        ui.label("Max:");
        ui.add(egui::DragValue::new(&mut rank.max).range(1..=100));
        ui.label("From year:");
        ui.add(egui::DragValue::new(&mut rank.first_year).range(1900..=2100));
        ui.checkbox(&mut app.state.options.scrape.page_cache, "Page cache");
    });

    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button_run = ui.add_enabled(
            !app.running,
            egui::Button::new(egui::RichText::new("RUN").color(black).strong()).fill(red),
        );
        if button_run.clicked() {
            actions::run(app, ui.ctx());
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
}
