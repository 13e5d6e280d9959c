use std::path::Path;

use eframe::egui::Color32;

use crate::chart::catalog::build_catalog;
use crate::chart::spec::ChartSpec;
use crate::color::body_swatch;
use crate::data::error::SpectralError;
use crate::data::export;
use crate::data::model::{GridConfig, RadiationLaw, SpectrumSet, StellarBody, WavelengthGrid};
use crate::data::spectral::{peak_wavelength_um, wien_peak_um, SpectralModel};

// ---------------------------------------------------------------------------
// Per-body summary row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct BodySummary {
    pub body: StellarBody,
    pub swatch: Color32,
    /// Peak of the sampled Planck curve, in μm.
    pub sampled_peak_um: Option<f64>,
    /// Peak predicted by Wien's displacement law, in μm.
    pub wien_peak_um: f64,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Everything numeric is computed once in [`AppState::new`] and never
/// mutated afterwards; only the chart cursor, view reset and status line
/// change.
pub struct AppState {
    /// Full-range curves for every body and law.
    pub spectra: SpectrumSet,

    /// The charts, in display order.
    pub charts: Vec<ChartSpec>,

    /// Index into `charts` of the chart on screen.
    current: usize,

    /// Set when the plot must snap back to the chart's axis window.
    reset_view: bool,

    pub summaries: Vec<BodySummary>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Compute the reference grid, curves and charts.
    pub fn new() -> Result<Self, SpectralError> {
        Self::with_config(SpectralModel::default(), &GridConfig::default())
    }

    pub fn with_config(model: SpectralModel, grid: &GridConfig) -> Result<Self, SpectralError> {
        let grid = WavelengthGrid::linspace(grid)?;
        let spectra = model.spectra(grid, &StellarBody::ALL)?;
        let charts = build_catalog(&spectra)?;

        let summaries = StellarBody::ALL
            .iter()
            .map(|&body| BodySummary {
                body,
                swatch: body_swatch(&model, body.temperature_k),
                sampled_peak_um: spectra
                    .curve(RadiationLaw::Planck, body.name)
                    .and_then(|c| peak_wavelength_um(&spectra.grid, c)),
                wien_peak_um: wien_peak_um(body.temperature_k),
            })
            .collect();

        Ok(Self {
            spectra,
            charts,
            current: 0,
            reset_view: true,
            summaries,
            status_message: None,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_chart(&self) -> Option<&ChartSpec> {
        self.charts.get(self.current)
    }

    /// Jump to chart `index`, clamped to the last chart.
    pub fn select_chart(&mut self, index: usize) {
        let index = index.min(self.charts.len().saturating_sub(1));
        if index != self.current {
            self.current = index;
            self.reset_view = true;
            if let Some(chart) = self.current_chart() {
                log::info!("Showing {}", chart.title);
            }
        }
    }

    pub fn next_chart(&mut self) {
        self.select_chart(self.current + 1);
    }

    pub fn previous_chart(&mut self) {
        self.select_chart(self.current.saturating_sub(1));
    }

    /// Ask the plot to restore the current chart's axis window.
    pub fn reset_view(&mut self) {
        self.reset_view = true;
    }

    /// Whether a view reset is pending; clears the request.
    pub fn take_view_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_view)
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.charts.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    /// Write all curves to `path`; failures land in `status_message`.
    pub fn export_curves(&mut self, path: &Path) {
        let result = export::save_curves(path, &self.spectra);
        self.record_export(result, path);
    }

    /// Write the chart definitions to `path`; failures land in `status_message`.
    pub fn export_charts(&mut self, path: &Path) {
        let result = export::save_charts(path, &self.charts);
        self.record_export(result, path);
    }

    fn record_export(&mut self, result: anyhow::Result<()>, path: &Path) {
        match result {
            Ok(()) => {
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
