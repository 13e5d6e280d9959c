use std::fmt;

use serde::Serialize;

use super::constants::METERS_PER_MICROMETER;
use super::error::SpectralError;

// ---------------------------------------------------------------------------
// GridConfig – how the wavelength axis is sampled
// ---------------------------------------------------------------------------

/// Sampling of the wavelength axis, in micrometres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridConfig {
    pub start_um: f64,
    pub end_um: f64,
    pub points: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            // Starts above zero: both laws are singular at λ = 0.
            start_um: 0.01,
            end_um: 30.0,
            points: 2000,
        }
    }
}

// ---------------------------------------------------------------------------
// WavelengthGrid – shared x axis of every curve
// ---------------------------------------------------------------------------

/// Strictly increasing, strictly positive wavelength samples.
///
/// Both units are stored side by side: micrometres for the chart axis and
/// metres for the formulas. Index `i` refers to the same sample in both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WavelengthGrid {
    micrometers: Vec<f64>,
    meters: Vec<f64>,
}

impl WavelengthGrid {
    /// Evenly spaced samples over `[start_um, end_um]`, both ends included.
    pub fn linspace(config: &GridConfig) -> Result<Self, SpectralError> {
        let GridConfig {
            start_um,
            end_um,
            points,
        } = *config;

        let valid = points >= 2
            && start_um.is_finite()
            && end_um.is_finite()
            && start_um > 0.0
            && start_um < end_um;
        if !valid {
            return Err(SpectralError::InvalidGrid {
                start_um,
                end_um,
                points,
            });
        }

        let step = (end_um - start_um) / (points - 1) as f64;
        let mut micrometers: Vec<f64> = (0..points).map(|i| start_um + i as f64 * step).collect();
        // Pin the endpoint so accumulated rounding never overshoots it.
        micrometers[points - 1] = end_um;

        log::info!("Built wavelength grid: {points} points over [{start_um}, {end_um}] μm");
        Ok(Self::from_micrometers_unchecked(micrometers))
    }

    /// Build from samples already known to be positive and increasing
    /// (e.g. a masked subset of a valid grid).
    pub(crate) fn from_micrometers_unchecked(micrometers: Vec<f64>) -> Self {
        let meters = micrometers
            .iter()
            .map(|&um| um * METERS_PER_MICROMETER)
            .collect();
        Self {
            micrometers,
            meters,
        }
    }

    pub fn micrometers(&self) -> &[f64] {
        &self.micrometers
    }

    pub fn meters(&self) -> &[f64] {
        &self.meters
    }

    pub fn len(&self) -> usize {
        self.micrometers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.micrometers.is_empty()
    }
}

// ---------------------------------------------------------------------------
// StellarBody – a named blackbody temperature
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StellarBody {
    pub name: &'static str,
    pub temperature_k: f64,
}

impl StellarBody {
    pub const SUN: Self = Self {
        name: "Sun",
        temperature_k: 5700.0,
    };
    pub const PROCYON: Self = Self {
        name: "Procyon",
        temperature_k: 6400.0,
    };
    pub const SIRIUS: Self = Self {
        name: "Sirius",
        temperature_k: 9200.0,
    };
    pub const BETELGEUSE: Self = Self {
        name: "Betelgeuse",
        temperature_k: 3400.0,
    };

    /// Every built-in body, in the order the charts introduce them.
    pub const ALL: [Self; 4] = [Self::SUN, Self::PROCYON, Self::SIRIUS, Self::BETELGEUSE];

    /// A custom body. Rejects temperatures that are not finite and positive.
    pub fn new(name: &'static str, temperature_k: f64) -> Result<Self, SpectralError> {
        if !(temperature_k.is_finite() && temperature_k > 0.0) {
            return Err(SpectralError::NonPositiveTemperature(temperature_k));
        }
        Ok(Self {
            name,
            temperature_k,
        })
    }
}

impl fmt::Display for StellarBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} T = {}K", self.name, self.temperature_k)
    }
}

// ---------------------------------------------------------------------------
// RadiationLaw
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RadiationLaw {
    Planck,
    RayleighJeans,
}

impl fmt::Display for RadiationLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadiationLaw::Planck => write!(f, "Planck's Law"),
            RadiationLaw::RayleighJeans => write!(f, "Rayleigh-Jeans Law"),
        }
    }
}

// ---------------------------------------------------------------------------
// SpectralCurve / SpectrumSet
// ---------------------------------------------------------------------------

/// Energy density of one body under one law, aligned with a grid.
///
/// The grid itself lives in the owning [`SpectrumSet`]; `density[i]`
/// belongs to the grid's sample `i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectralCurve {
    pub law: RadiationLaw,
    pub body: StellarBody,
    pub density: Vec<f64>,
}

impl SpectralCurve {
    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }

    /// Column / legend caption, e.g. `Planck's Law (Sun)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.law, self.body.name)
    }
}

/// A grid plus curves that are all aligned with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumSet {
    pub grid: WavelengthGrid,
    curves: Vec<SpectralCurve>,
}

impl SpectrumSet {
    pub fn new(grid: WavelengthGrid) -> Self {
        Self {
            grid,
            curves: Vec::new(),
        }
    }

    /// Add a curve; its length must match the grid.
    pub fn push(&mut self, curve: SpectralCurve) -> Result<(), SpectralError> {
        if curve.len() != self.grid.len() {
            return Err(SpectralError::LengthMismatch {
                expected: self.grid.len(),
                found: curve.len(),
            });
        }
        self.curves.push(curve);
        Ok(())
    }

    pub fn curves(&self) -> &[SpectralCurve] {
        &self.curves
    }

    /// Find the curve for `law` evaluated at the body called `body_name`.
    pub fn curve(&self, law: RadiationLaw, body_name: &str) -> Option<&SpectralCurve> {
        self.curves
            .iter()
            .find(|c| c.law == law && c.body.name == body_name)
    }
}
