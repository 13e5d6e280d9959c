use super::error::SpectralError;
use super::model::{SpectralCurve, SpectrumSet, WavelengthGrid};

// ---------------------------------------------------------------------------
// Wavelength mask: which grid samples survive a zoom
// ---------------------------------------------------------------------------

/// A pointwise boolean mask over one grid.
///
/// The same mask is applied to the grid and to every curve sharing it, so
/// the filtered sequences stay index-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavelengthMask {
    keep: Vec<bool>,
}

impl WavelengthMask {
    /// Keep samples where `predicate(wavelength_um)` holds.
    pub fn from_fn(grid: &WavelengthGrid, predicate: impl Fn(f64) -> bool) -> Self {
        let keep: Vec<bool> = grid.micrometers().iter().map(|&um| predicate(um)).collect();
        let mask = Self { keep };
        log::debug!(
            "Wavelength mask keeps {} of {} samples",
            mask.selected_count(),
            mask.len()
        );
        mask
    }

    /// Keep samples with `λ ≤ max_um`.
    pub fn up_to(grid: &WavelengthGrid, max_um: f64) -> Self {
        Self::from_fn(grid, |um| um <= max_um)
    }

    pub fn len(&self) -> usize {
        self.keep.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keep.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.keep.iter().filter(|&&k| k).count()
    }

    fn check_len(&self, found: usize) -> Result<(), SpectralError> {
        if found != self.keep.len() {
            return Err(SpectralError::LengthMismatch {
                expected: self.keep.len(),
                found,
            });
        }
        Ok(())
    }

    /// Filter a sequence aligned with the mask's grid.
    pub fn apply(&self, values: &[f64]) -> Result<Vec<f64>, SpectralError> {
        self.check_len(values.len())?;
        Ok(values
            .iter()
            .zip(&self.keep)
            .filter(|(_, &k)| k)
            .map(|(&v, _)| v)
            .collect())
    }

    /// Filter the grid itself.
    pub fn apply_grid(&self, grid: &WavelengthGrid) -> Result<WavelengthGrid, SpectralError> {
        let kept = self.apply(grid.micrometers())?;
        Ok(WavelengthGrid::from_micrometers_unchecked(kept))
    }

    /// Filter a grid and all of its curves together.
    ///
    /// Fails with [`SpectralError::EmptySelection`] when nothing survives.
    pub fn apply_set(&self, set: &SpectrumSet) -> Result<SpectrumSet, SpectralError> {
        if self.selected_count() == 0 {
            return Err(SpectralError::EmptySelection);
        }
        let mut filtered = SpectrumSet::new(self.apply_grid(&set.grid)?);
        for curve in set.curves() {
            filtered.push(SpectralCurve {
                law: curve.law,
                body: curve.body,
                density: self.apply(&curve.density)?,
            })?;
        }
        Ok(filtered)
    }
}
