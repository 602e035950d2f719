// src/gui/components/export_bar.rs

use std::path::{Path, PathBuf};

use eframe::egui;
use tracing::{debug, error, info};

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Html, "HTML");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            ui.selectable_value(&mut export.format, ExportFormat::Json, "JSON");

            let delimited = export.format.delim().is_some();
            ui.add_enabled(delimited, egui::Checkbox::new(&mut export.include_headers, "Include headers"));
        });

        if export.format != prev_fmt {
            debug!(format = ?export.format, "export format changed");
        }
    }

    let mut open_folder_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Output:");
        ui.add(egui::TextEdit::singleline(&mut app.out_dir_text).font(egui::TextStyle::Monospace));

        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_folder_clicked = true;
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(!app.running, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });

    // Handle open folder after the borrow ends
    if open_folder_clicked {
        open_output_folder(app);
    }
}

/// Open the output folder in the system file explorer.
fn open_output_folder(app: &App) {
    let folder = find_nearest_existing_parent(Path::new(app.out_dir_text.trim()));

    let absolute_folder = match std::fs::canonicalize(&folder) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            error!(error = %e, "cannot resolve folder path");
            app.status(format!("Cannot resolve folder path: {e}"));
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        error!(error = %e, "failed to open folder");
        app.status(format!("Failed to open folder: {e}"));
    } else {
        info!(folder = %absolute_folder.display(), "opened folder");
    }
}

/// Walk up the tree to the nearest existing directory, else the working directory.
fn find_nearest_existing_parent(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}

fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let program = "xdg-open";

    std::process::Command::new(program)
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("Failed to spawn {program}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_existing_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("not/yet/there");
        assert_eq!(find_nearest_existing_parent(&missing), tmp.path());
        assert_eq!(find_nearest_existing_parent(Path::new("no_such_dir_here")), PathBuf::from("."));
    }
}
