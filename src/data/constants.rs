use serde::Serialize;

// ---------------------------------------------------------------------------
// Physical constants (CODATA 2018, exact SI values)
// ---------------------------------------------------------------------------

/// Planck constant (J·s)
pub const PLANCK_H: f64 = 6.626_070_15e-34;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT_C: f64 = 2.997_924_58e8;

/// Boltzmann constant (J/K)
pub const BOLTZMANN_K: f64 = 1.380_649e-23;

/// Wien displacement constant (m·K)
pub const WIEN_B: f64 = 2.897_771_955e-3;

/// Metres per micrometre.
pub const METERS_PER_MICROMETER: f64 = 1e-6;

/// The constant set handed to the spectral model.
///
/// Kept as a value rather than read from globals so a model can be built
/// against alternative unit systems in tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalConstants {
    pub planck_h: f64,
    pub speed_of_light_c: f64,
    pub boltzmann_k: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::SI
    }
}

impl PhysicalConstants {
    pub const SI: Self = Self {
        planck_h: PLANCK_H,
        speed_of_light_c: SPEED_OF_LIGHT_C,
        boltzmann_k: BOLTZMANN_K,
    };

    /// `h·c`, shared by both terms of Planck's law.
    pub fn hc(&self) -> f64 {
        self.planck_h * self.speed_of_light_c
    }
}
