use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – stellar bodies
// ---------------------------------------------------------------------------

/// Render the body summary table.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Stellar bodies");
    ui.separator();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(18.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|_ui: &mut Ui| {});
            header.col(|ui: &mut Ui| {
                ui.strong("Body");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("T (K)");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Peak (μm)");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Wien (μm)");
            });
        })
        .body(|mut body| {
            for summary in &state.summaries {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 2.0, summary.swatch);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(summary.body.name);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.0}", summary.body.temperature_k));
                    });
                    row.col(|ui: &mut Ui| {
                        let text = summary
                            .sampled_peak_um
                            .map(|um| format!("{um:.3}"))
                            .unwrap_or_else(|| "–".to_string());
                        ui.label(text);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.3}", summary.wien_peak_um));
                    });
                });
            }
        });

    ui.add_space(8.0);
    ui.label(
        RichText::new(format!(
            "{} samples over [{:.2}, {:.2}] μm",
            state.spectra.grid.len(),
            state.spectra.grid.micrometers().first().copied().unwrap_or_default(),
            state.spectra.grid.micrometers().last().copied().unwrap_or_default(),
        ))
        .small(),
    );
}

// ---------------------------------------------------------------------------
// Bottom panel – caption
// ---------------------------------------------------------------------------

/// Render the wrapped caption of the current chart, centred and italic.
pub fn caption_panel(ui: &mut Ui, state: &AppState) {
    let Some(chart) = state.current_chart() else {
        return;
    };
    ui.add_space(4.0);
    ui.vertical_centered(|ui: &mut Ui| {
        for line in &chart.caption {
            ui.label(RichText::new(line).italics());
        }
    });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export curves…").clicked() {
                export_curves_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export charts…").clicked() {
                export_charts_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .add_enabled(state.has_previous(), egui::Button::new("◀ Previous"))
            .clicked()
        {
            state.previous_chart();
        }
        ui.label(format!(
            "Graph {} of {}",
            state.current_index() + 1,
            state.charts.len()
        ));
        if ui
            .add_enabled(state.has_next(), egui::Button::new("Next ▶"))
            .clicked()
        {
            state.next_chart();
        }
        if ui.button("Reset view").clicked() {
            state.reset_view();
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn export_curves_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export spectral curves")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .set_file_name("blackbody_curves.csv")
        .save_file();

    if let Some(path) = file {
        state.export_curves(&path);
    }
}

pub fn export_charts_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export chart definitions")
        .add_filter("JSON", &["json"])
        .set_file_name("blackbody_charts.json")
        .save_file();

    if let Some(path) = file {
        state.export_charts(&path);
    }
}
