// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.

use eframe::egui;
use tracing::debug;

use crate::config::state::Tab;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.tab;
        for tab in Tab::ALL {
            let selected = tab == cur;
            let enabled = match (&app.outcome, tab) {
                (Some(o), Tab::MostCited) => o.sections.cited,
                (Some(o), Tab::MostRecent) => o.sections.recent,
                (None, _) => true,
            };
            let resp = ui.add_enabled_ui(enabled, |ui| ui.selectable_label(selected, tab.title())).inner;
            if resp.clicked() && !selected {
                debug!(from = ?cur, to = ?tab, "tab switch");
                app.state.gui.tab = tab;
                app.rebuild_view();
            }
        }
    });
}
