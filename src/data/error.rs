use thiserror::Error;

use super::model::RadiationLaw;

/// Errors raised at the construction boundaries of the spectral data layer.
///
/// The formulas themselves never fail; these guard the inputs that feed them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectralError {
    #[error("invalid wavelength grid: {points} points over [{start_um}, {end_um}] μm")]
    InvalidGrid {
        start_um: f64,
        end_um: f64,
        points: usize,
    },

    #[error("temperature must be a positive number of kelvin, got {0}")]
    NonPositiveTemperature(f64),

    #[error("sequence length {found} does not match grid length {expected}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("mask selects no wavelengths")]
    EmptySelection,

    #[error("no {law} curve for {body}")]
    MissingCurve { law: RadiationLaw, body: String },
}
