use serde::Serialize;

use crate::data::error::SpectralError;
use crate::data::model::{SpectralCurve, SpectrumSet};

/// Column width captions are wrapped to.
pub const CAPTION_WIDTH: usize = 80;

pub const WAVELENGTH_LABEL: &str = "Wavelength (micrometers)";
pub const ENERGY_DENSITY_LABEL: &str = "Energy Density: f(λ)";

// ---------------------------------------------------------------------------
// Line styling
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineColor {
    Black,
    Red,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dash {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: LineColor,
    pub dash: Dash,
    pub width: f32,
}

impl LineStyle {
    pub const DEFAULT_WIDTH: f32 = 1.5;

    pub const fn new(color: LineColor, dash: Dash) -> Self {
        Self {
            color,
            dash,
            width: Self::DEFAULT_WIDTH,
        }
    }

    pub const BLACK_SOLID: Self = Self::new(LineColor::Black, Dash::Solid);
    pub const BLACK_DASHED: Self = Self::new(LineColor::Black, Dash::Dashed);
    pub const RED_SOLID: Self = Self::new(LineColor::Red, Dash::Solid);
    pub const RED_DASHED: Self = Self::new(LineColor::Red, Dash::Dashed);
    pub const BLUE_SOLID: Self = Self::new(LineColor::Blue, Dash::Solid);
}

// ---------------------------------------------------------------------------
// ChartSpec – one fully described chart
// ---------------------------------------------------------------------------

/// Axis window, `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// One plotted line. `values[i]` pairs with the chart's `wavelengths_um[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub style: LineStyle,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    /// Already wrapped; one entry per rendered line.
    pub caption: Vec<String>,
    pub wavelengths_um: Vec<f64>,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    pub fn builder(title: impl Into<String>, set: &SpectrumSet) -> ChartBuilder<'_> {
        ChartBuilder {
            set,
            spec: ChartSpec {
                title: title.into(),
                x_label: WAVELENGTH_LABEL.to_string(),
                y_label: ENERGY_DENSITY_LABEL.to_string(),
                x_range: AxisRange::new(0.0, 1.0),
                y_range: AxisRange::new(0.0, 1.0),
                caption: Vec::new(),
                wavelengths_um: set.grid.micrometers().to_vec(),
                series: Vec::new(),
            },
        }
    }

    /// `(x, y)` pairs of one series, ready for plotting.
    pub fn points(&self, series: &ChartSeries) -> Vec<[f64; 2]> {
        self.wavelengths_um
            .iter()
            .zip(&series.values)
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builds a [`ChartSpec`] whose x axis is the grid of one [`SpectrumSet`].
pub struct ChartBuilder<'a> {
    set: &'a SpectrumSet,
    spec: ChartSpec,
}

impl ChartBuilder<'_> {
    pub fn x_range(mut self, min: f64, max: f64) -> Self {
        self.spec.x_range = AxisRange::new(min, max);
        self
    }

    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.spec.y_range = AxisRange::new(min, max);
        self
    }

    pub fn caption(mut self, text: &str) -> Self {
        self.spec.caption = wrap_caption(text, CAPTION_WIDTH);
        self
    }

    /// Add a curve from the set. Fails if its length differs from the grid.
    pub fn series(
        mut self,
        curve: &SpectralCurve,
        style: LineStyle,
        label: impl Into<String>,
    ) -> Result<Self, SpectralError> {
        if curve.len() != self.set.grid.len() {
            return Err(SpectralError::LengthMismatch {
                expected: self.set.grid.len(),
                found: curve.len(),
            });
        }
        self.spec.series.push(ChartSeries {
            label: label.into(),
            style,
            values: curve.density.clone(),
        });
        Ok(self)
    }

    pub fn build(self) -> ChartSpec {
        self.spec
    }
}

// ---------------------------------------------------------------------------
// Caption wrapping
// ---------------------------------------------------------------------------

/// Greedy word wrap. Whitespace runs collapse to one space; a word longer
/// than `width` gets a line of its own and is never split.
pub fn wrap_caption(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
