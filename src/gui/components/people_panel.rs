// src/gui/components/people_panel.rs
//
// Left panel: the subject's people. Clicking a person shows their own lists;
// the top entry shows the combined ranking.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(outcome) = &app.outcome else {
        ui.heading("People");
        ui.label("Nothing loaded yet");
        return;
    };

    ui.heading(outcome.subject.name());
    ui.separator();

    // Match the scroll bar aesthetics used in the main table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 0.0;
        s.bar_outer_margin = -6.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let current = app.state.gui.selected_person;
    let mut clicked: Option<Option<usize>> = None;

    egui::ScrollArea::vertical()
        .id_salt("people_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            ui.set_width(w);

            let combined = if outcome.subject.is_group() { "Whole group" } else { "Ranked lists" };
            if ui.selectable_label(current.is_none(), combined).clicked() {
                clicked = Some(None);
            }
            ui.separator();

            for (idx, person) in outcome.subject.people().iter().enumerate() {
                let label = format!("{} ({}/{})", person.name(), person.cited.len(), person.recent.len());
                let resp = ui
                    .selectable_label(current == Some(idx), label)
                    .on_hover_text(person.identity.profile_url.as_str());
                if resp.clicked() {
                    clicked = Some(Some(idx));
                }
            }
        });

    if let Some(sel) = clicked {
        if sel != current && !app.running {
            app.state.gui.selected_person = sel;
            app.rebuild_view();
        }
    }
}
