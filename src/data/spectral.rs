use std::f64::consts::PI;

use super::constants::{PhysicalConstants, METERS_PER_MICROMETER, WIEN_B};
use super::error::SpectralError;
use super::model::{RadiationLaw, SpectralCurve, SpectrumSet, StellarBody, WavelengthGrid};

// ---------------------------------------------------------------------------
// Spectral model
// ---------------------------------------------------------------------------

/// How the `exp(x) - 1` denominator of Planck's law is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanckForm {
    /// `exp(x) - 1` as written. Loses precision for very small `x`.
    #[default]
    Direct,
    /// `exp_m1(x)`, free of cancellation at long wavelengths.
    Expm1,
}

/// Closed-form blackbody energy density, parameterised by its constants.
///
/// Inputs are wavelengths in metres and temperatures in kelvin. Nothing is
/// validated here: non-positive inputs yield inf/NaN which flow through.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpectralModel {
    pub constants: PhysicalConstants,
    pub form: PlanckForm,
}

impl SpectralModel {
    pub fn new(constants: PhysicalConstants, form: PlanckForm) -> Self {
        Self { constants, form }
    }

    /// `8πhc / (λ⁵ (exp(hc / λkT) - 1))`
    pub fn planck_at(&self, wavelength_m: f64, temperature_k: f64) -> f64 {
        let hc = self.constants.hc();
        let x = hc / (wavelength_m * self.constants.boltzmann_k * temperature_k);
        let denom = match self.form {
            PlanckForm::Direct => x.exp() - 1.0,
            PlanckForm::Expm1 => x.exp_m1(),
        };
        (8.0 * PI * hc) / (wavelength_m.powi(5) * denom)
    }

    /// `8πkT / λ⁴`
    pub fn rayleigh_jeans_at(&self, wavelength_m: f64, temperature_k: f64) -> f64 {
        (8.0 * PI * self.constants.boltzmann_k * temperature_k) / wavelength_m.powi(4)
    }

    /// Planck's law over every wavelength, same length and order as the input.
    pub fn planck(&self, wavelengths_m: &[f64], temperature_k: f64) -> Vec<f64> {
        wavelengths_m
            .iter()
            .map(|&lam| self.planck_at(lam, temperature_k))
            .collect()
    }

    /// Rayleigh-Jeans over every wavelength, same length and order as the input.
    pub fn rayleigh_jeans(&self, wavelengths_m: &[f64], temperature_k: f64) -> Vec<f64> {
        wavelengths_m
            .iter()
            .map(|&lam| self.rayleigh_jeans_at(lam, temperature_k))
            .collect()
    }

    /// Evaluate one law for one body across the grid.
    pub fn evaluate(
        &self,
        law: RadiationLaw,
        body: StellarBody,
        grid: &WavelengthGrid,
    ) -> SpectralCurve {
        let density = match law {
            RadiationLaw::Planck => self.planck(grid.meters(), body.temperature_k),
            RadiationLaw::RayleighJeans => self.rayleigh_jeans(grid.meters(), body.temperature_k),
        };

        let non_finite = density.iter().filter(|v| !v.is_finite()).count();
        if non_finite > 0 {
            log::warn!("{law} for {body}: {non_finite} non-finite samples");
        }
        log::info!("Evaluated {law} for {body} over {} samples", density.len());

        SpectralCurve { law, body, density }
    }

    /// Both laws for every body, aligned with `grid`.
    pub fn spectra(
        &self,
        grid: WavelengthGrid,
        bodies: &[StellarBody],
    ) -> Result<SpectrumSet, SpectralError> {
        let mut set = SpectrumSet::new(grid);
        for &body in bodies {
            for law in [RadiationLaw::Planck, RadiationLaw::RayleighJeans] {
                let curve = self.evaluate(law, body, &set.grid);
                set.push(curve)?;
            }
        }
        Ok(set)
    }
}

/// Planck's law with SI constants and the direct denominator.
pub fn planck(wavelengths_m: &[f64], temperature_k: f64) -> Vec<f64> {
    SpectralModel::default().planck(wavelengths_m, temperature_k)
}

/// Rayleigh-Jeans law with SI constants.
pub fn rayleigh_jeans(wavelengths_m: &[f64], temperature_k: f64) -> Vec<f64> {
    SpectralModel::default().rayleigh_jeans(wavelengths_m, temperature_k)
}

// ---------------------------------------------------------------------------
// Peaks
// ---------------------------------------------------------------------------

/// Index of the largest sample; NaN samples are skipped, first maximum wins.
pub fn peak_index(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

/// Sampled peak of `curve`, in micrometres of `grid`.
pub fn peak_wavelength_um(grid: &WavelengthGrid, curve: &SpectralCurve) -> Option<f64> {
    peak_index(&curve.density).and_then(|i| grid.micrometers().get(i).copied())
}

/// Wien's displacement law, `λ_max = b / T`, in micrometres.
pub fn wien_peak_um(temperature_k: f64) -> f64 {
    WIEN_B / temperature_k / METERS_PER_MICROMETER
}
