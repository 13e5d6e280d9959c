//! Rendering: egui panels and the egui_plot chart view.
pub mod panels;
pub mod plot;
