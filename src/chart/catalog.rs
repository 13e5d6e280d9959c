use crate::data::error::SpectralError;
use crate::data::filter::WavelengthMask;
use crate::data::model::{RadiationLaw, SpectralCurve, SpectrumSet, StellarBody};

use super::spec::{ChartBuilder, ChartSpec, LineStyle};

/// Upper wavelength of the zoomed charts' data, in micrometres.
pub const ZOOM_MAX_UM: f64 = 4.0;

const CAPTION_FULL_RANGE: &str = "Comparison of Planck's Law and Rayleigh-Jeans Law for the Sun \
     (T=5700K) over larger wavelengths. You can see that at large wavelength, Planck's Law and \
     Rayleigh-Jeans Law are fairly equal.";

const CAPTION_DIVERGENCE: &str = "Zoomed out view showing divergence between Planck's Law and \
     Rayleigh-Jeans Law at shorter wavelengths. Proving the 'ultraviolet catastrophe'.";

const CAPTION_FOUR_STARS: &str = "Comparison of energy emission for stars at different \
     temperatures. Higher temperature stars emit more energy and peak at shorter wavelengths. \
     This is why Sirius is blue and Betelgeuse is red.";

const CAPTION_SUN_BETELGEUSE: &str = "Zoomed in comparison showing the Sun vs Betelgeuse. \
     Betelgeuse is cooler and emits most of its energy at longer wavelengths making it redder.";

fn lookup<'a>(
    set: &'a SpectrumSet,
    law: RadiationLaw,
    body: StellarBody,
) -> Result<&'a SpectralCurve, SpectralError> {
    set.curve(law, body.name)
        .ok_or_else(|| SpectralError::MissingCurve {
            law,
            body: body.name.to_string(),
        })
}

/// Planck legend with the temperature spelled out: `Planck's Law (Sun T = 5700K)`.
fn planck_with_temperature(body: StellarBody) -> String {
    format!("{} ({body})", RadiationLaw::Planck)
}

/// The four charts, in display order.
///
/// `set` must hold Planck curves for every body in [`StellarBody::ALL`] and
/// the Rayleigh-Jeans curve for the Sun.
pub fn build_catalog(set: &SpectrumSet) -> Result<Vec<ChartSpec>, SpectralError> {
    let zoomed = WavelengthMask::up_to(&set.grid, ZOOM_MAX_UM).apply_set(set)?;
    let sun = StellarBody::SUN;

    let charts = vec![
        sun_vs_rayleigh_jeans(set, "Graph #1: Blackbody Radiation")?
            .x_range(0.0, 30.0)
            .y_range(0.0, 300.0)
            .caption(CAPTION_FULL_RANGE)
            .build(),
        sun_vs_rayleigh_jeans(&zoomed, "Graph #2: Blackbody Radiation")?
            .x_range(0.0, 4.0)
            .y_range(0.0, 2_000_000.0)
            .caption(CAPTION_DIVERGENCE)
            .build(),
        planck_comparison(
            &zoomed,
            "Graph #3: Blackbody Radiation of The Sun, Procyon, Sirius, and Betelgeuse",
            &[
                (sun, LineStyle::BLACK_SOLID),
                (StellarBody::PROCYON, LineStyle::BLACK_DASHED),
                (StellarBody::SIRIUS, LineStyle::BLUE_SOLID),
                (StellarBody::BETELGEUSE, LineStyle::RED_SOLID),
            ],
        )?
        .x_range(0.0, 2.0)
        .y_range(0.0, 12_000_000.0)
        .caption(CAPTION_FOUR_STARS)
        .build(),
        planck_comparison(
            &zoomed,
            "Graph #4: Blackbody Radiation of The Sun and Betelgeuse (zoomed in)",
            &[
                (sun, LineStyle::BLACK_SOLID),
                (StellarBody::BETELGEUSE, LineStyle::RED_SOLID),
            ],
        )?
        .x_range(0.0, 2.0)
        .y_range(0.0, 1_100_000.0)
        .caption(CAPTION_SUN_BETELGEUSE)
        .build(),
    ];

    log::info!("Assembled {} charts", charts.len());
    Ok(charts)
}

fn sun_vs_rayleigh_jeans<'a>(
    set: &'a SpectrumSet,
    title: &str,
) -> Result<ChartBuilder<'a>, SpectralError> {
    let sun = StellarBody::SUN;
    let planck = lookup(set, RadiationLaw::Planck, sun)?;
    let rj = lookup(set, RadiationLaw::RayleighJeans, sun)?;
    ChartSpec::builder(title, set)
        .series(planck, LineStyle::BLACK_SOLID, planck.label())?
        .series(rj, LineStyle::RED_DASHED, rj.label())
}

fn planck_comparison<'a>(
    set: &'a SpectrumSet,
    title: &str,
    bodies: &[(StellarBody, LineStyle)],
) -> Result<ChartBuilder<'a>, SpectralError> {
    bodies
        .iter()
        .try_fold(ChartSpec::builder(title, set), |builder, &(body, style)| {
            let curve = lookup(set, RadiationLaw::Planck, body)?;
            builder.series(curve, style, planck_with_temperature(body))
        })
}
