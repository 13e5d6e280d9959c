use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::SpectrumSet;
use crate::chart::spec::ChartSpec;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Save every curve of `set` to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – one row per grid sample, one column per curve
/// * `.json` – the grid and curves as a single JSON object
pub fn save_curves(path: &Path, set: &SpectrumSet) -> Result<()> {
    match extension(path).as_str() {
        "csv" => {
            let file = create(path)?;
            write_curves_csv(file, set)
        }
        "json" => {
            let mut file = create(path)?;
            serde_json::to_writer_pretty(&mut file, set).context("writing curves JSON")?;
            file.flush().context("flushing JSON output")
        }
        other => bail!("Unsupported file extension: .{other}"),
    }?;
    log::info!(
        "Saved {} curves to {}",
        set.curves().len(),
        path.display()
    );
    Ok(())
}

/// Save chart definitions as a pretty-printed JSON array.
pub fn save_charts(path: &Path, charts: &[ChartSpec]) -> Result<()> {
    let ext = extension(path);
    if ext != "json" {
        bail!("Chart definitions can only be saved as .json, not .{ext}");
    }
    let mut file = create(path)?;
    write_charts_json(&mut file, charts)?;
    file.flush().context("flushing JSON output")?;
    log::info!("Saved {} charts to {}", charts.len(), path.display());
    Ok(())
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// CSV layout:
/// `wavelength_um,wavelength_m,Planck's Law (Sun),Rayleigh-Jeans Law (Sun),...`
///
/// Metres and densities use exponent notation; densities near λ = 0 reach
/// 1e-90 and below.
pub fn write_curves_csv<W: Write>(writer: W, set: &SpectrumSet) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);

    let mut header = vec!["wavelength_um".to_string(), "wavelength_m".to_string()];
    header.extend(set.curves().iter().map(|c| c.label()));
    out.write_record(&header).context("writing CSV header")?;

    let um = set.grid.micrometers();
    let m = set.grid.meters();
    for row in 0..set.grid.len() {
        let mut record = Vec::with_capacity(header.len());
        record.push(um[row].to_string());
        record.push(format!("{:e}", m[row]));
        record.extend(set.curves().iter().map(|c| format!("{:e}", c.density[row])));
        out.write_record(&record)
            .with_context(|| format!("writing CSV row {row}"))?;
    }

    out.flush().context("flushing CSV output")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

pub fn write_charts_json<W: Write>(writer: W, charts: &[ChartSpec]) -> Result<()> {
    serde_json::to_writer_pretty(writer, charts).context("writing charts JSON")
}
