// src/gui/components/paper_table.rs
//
// Draws the paper table for the current view. Purely a view over `app.table`.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::gui::table_model::{HEADERS, NUMERIC_COLUMNS};

const WIDTHS: [f32; 5] = [70.0, 50.0, 420.0, 200.0, 300.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.table.is_empty() {
        ui.label(if app.outcome.is_some() { "No papers in this list" } else { "Run a name or group to see papers" });
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let table = &app.table;
    let avail_h = ui.available_height();

    egui::ScrollArea::horizontal()
        .id_salt("paper_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui).striped(true).min_scrolled_height(0.0);
            for w in WIDTHS {
                builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            builder
                .header(24.0, |mut header| {
                    for (ci, h) in HEADERS.iter().enumerate() {
                        header.col(|ui| {
                            let label = egui::Label::new(RichText::new(*h).strong()).selectable(false);
                            if NUMERIC_COLUMNS.contains(&ci) {
                                ui.centered_and_justified(|ui| { ui.add(label); });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, table.nrows(), |mut row| {
                        let ix = row.index();
                        let Some(cells) = table.rows.get(ix) else { return };
                        let url = table.urls.get(ix).map(String::as_str).unwrap_or("");

                        for (ci, cell) in cells.iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if ci == 2 && !url.is_empty() {
                                    ui.hyperlink_to(cell.as_str(), url);
                                } else if NUMERIC_COLUMNS.contains(&ci) {
                                    ui.centered_and_justified(|ui| { ui.label(cell.as_str()); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell.as_str()); });
                                }
                            });
                        }
                    });
                });
        });
}
