//! Data layer: physical constants, spectral model, masking and export.
//!
//! Architecture:
//! ```text
//!   GridConfig ──► WavelengthGrid (μm + m, strictly increasing)
//!                        │
//!                        ▼
//!   ┌───────────────┐  PhysicalConstants, StellarBody
//!   │   spectral     │  planck / rayleigh_jeans, elementwise
//!   └───────────────┘
//!                        │
//!                        ▼
//!   ┌───────────────┐
//!   │  SpectrumSet   │  grid + aligned SpectralCurves
//!   └───────────────┘
//!          │                     │
//!          ▼                     ▼
//!   ┌──────────┐          ┌──────────┐
//!   │  filter   │ mask     │  export   │ csv / json
//!   └──────────┘          └──────────┘
//! ```

pub mod constants;
pub mod error;
pub mod export;
pub mod filter;
pub mod model;
pub mod spectral;

#[cfg(test)]
mod filter_test;
