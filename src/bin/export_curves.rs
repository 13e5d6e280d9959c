//! Headless export of the curves and chart definitions the viewer shows.
//!
//! Writes `blackbody_curves.csv` and `blackbody_charts.json` to the current
//! directory.

use std::path::Path;

use anyhow::{Context, Result};
use blackbody_viewer::chart::catalog::build_catalog;
use blackbody_viewer::data::export::{save_charts, save_curves};
use blackbody_viewer::data::model::{GridConfig, StellarBody, WavelengthGrid};
use blackbody_viewer::data::spectral::SpectralModel;

const CURVES_PATH: &str = "blackbody_curves.csv";
const CHARTS_PATH: &str = "blackbody_charts.json";

fn main() -> Result<()> {
    env_logger::init();

    let model = SpectralModel::default();
    let grid = WavelengthGrid::linspace(&GridConfig::default()).context("building grid")?;
    let spectra = model
        .spectra(grid, &StellarBody::ALL)
        .context("evaluating spectra")?;
    let charts = build_catalog(&spectra).context("assembling charts")?;

    save_curves(Path::new(CURVES_PATH), &spectra)?;
    save_charts(Path::new(CHARTS_PATH), &charts)?;

    println!(
        "Wrote {} curves ({} samples each) to {CURVES_PATH} and {} charts to {CHARTS_PATH}",
        spectra.curves().len(),
        spectra.grid.len(),
        charts.len()
    );
    Ok(())
}
