use eframe::egui;

use crate::data::error::SpectralError;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BlackbodyApp {
    pub state: AppState,
}

impl BlackbodyApp {
    pub fn new() -> Result<Self, SpectralError> {
        Ok(Self {
            state: AppState::new()?,
        })
    }
}

impl eframe::App for BlackbodyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Keyboard navigation ----
        let (next, previous) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowLeft),
            )
        });
        if next {
            self.state.next_chart();
        }
        if previous {
            self.state.previous_chart();
        }

        // ---- Top panel: menu bar + chart navigation ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: caption ----
        egui::TopBottomPanel::bottom("caption_panel").show(ctx, |ui| {
            panels::caption_panel(ui, &self.state);
        });

        // ---- Left side panel: stellar bodies ----
        egui::SidePanel::left("body_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_plot(ui, &mut self.state);
        });
    }
}
