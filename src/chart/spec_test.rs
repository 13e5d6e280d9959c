use crate::chart::spec::{
    wrap_caption, ChartSpec, Dash, LineColor, LineStyle, CAPTION_WIDTH, ENERGY_DENSITY_LABEL,
    WAVELENGTH_LABEL,
};
use crate::data::error::SpectralError;
use crate::data::model::{
    GridConfig, RadiationLaw, SpectralCurve, SpectrumSet, StellarBody, WavelengthGrid,
};
use crate::data::spectral::SpectralModel;

fn three_point_set() -> SpectrumSet {
    let grid = WavelengthGrid::linspace(&GridConfig {
        start_um: 1.0,
        end_um: 3.0,
        points: 3,
    })
    .unwrap();
    SpectralModel::default()
        .spectra(grid, &[StellarBody::SUN])
        .unwrap()
}

// ============================================================================
// Caption wrapping
// ============================================================================

#[test]
fn wrap_respects_width_and_keeps_every_word() {
    let text = "Comparison of energy emission for stars at different temperatures. Higher \
                temperature stars emit more energy and peak at shorter wavelengths.";
    let lines = wrap_caption(text, CAPTION_WIDTH);

    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.chars().count() <= CAPTION_WIDTH));
    assert_eq!(lines.join(" "), text);
}

#[test]
fn wrap_fills_lines_greedily() {
    assert_eq!(
        wrap_caption("aa bb cc dd", 5),
        ["aa bb", "cc dd"].map(String::from)
    );
    assert_eq!(wrap_caption("aa bb cc", 8), ["aa bb cc"].map(String::from));
}

#[test]
fn wrap_never_splits_long_words() {
    assert_eq!(
        wrap_caption("a supercalifragilistic b", 5),
        ["a", "supercalifragilistic", "b"].map(String::from)
    );
}

#[test]
fn wrap_collapses_whitespace_and_handles_empty() {
    assert_eq!(wrap_caption("  one \n two\t", 80), ["one two"].map(String::from));
    assert!(wrap_caption("   ", 80).is_empty());
}

#[test]
fn wrap_counts_characters_not_bytes() {
    // "f(λ)" is 4 characters but 5 bytes.
    assert_eq!(wrap_caption("f(λ) ab", 7), ["f(λ) ab"].map(String::from));
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn builder_uses_shared_axis_labels_and_grid() {
    let set = three_point_set();
    let planck = set.curve(RadiationLaw::Planck, "Sun").unwrap();
    let chart = ChartSpec::builder("Test", &set)
        .x_range(0.0, 4.0)
        .y_range(0.0, 10.0)
        .caption("short caption")
        .series(planck, LineStyle::BLACK_SOLID, "Sun")
        .unwrap()
        .build();

    assert_eq!(chart.title, "Test");
    assert_eq!(chart.x_label, WAVELENGTH_LABEL);
    assert_eq!(chart.y_label, ENERGY_DENSITY_LABEL);
    assert_eq!(chart.x_range.max, 4.0);
    assert_eq!(chart.y_range.max, 10.0);
    assert_eq!(chart.caption, ["short caption"]);
    assert_eq!(chart.wavelengths_um, [1.0, 2.0, 3.0]);

    let points = chart.points(&chart.series[0]);
    assert_eq!(points.len(), 3);
    assert_eq!(points[1], [2.0, planck.density[1]]);
}

#[test]
fn builder_rejects_curve_from_another_grid() {
    let set = three_point_set();
    let stray = SpectralCurve {
        law: RadiationLaw::Planck,
        body: StellarBody::SIRIUS,
        density: vec![1.0; 5],
    };

    let result = ChartSpec::builder("Mismatch", &set).series(&stray, LineStyle::BLUE_SOLID, "x");
    assert!(matches!(
        result,
        Err(SpectralError::LengthMismatch {
            expected: 3,
            found: 5
        })
    ));
}

#[test]
fn line_style_shorthands() {
    assert_eq!(LineStyle::RED_DASHED.color, LineColor::Red);
    assert_eq!(LineStyle::RED_DASHED.dash, Dash::Dashed);
    assert_eq!(LineStyle::BLUE_SOLID.dash, Dash::Solid);
    assert_eq!(LineStyle::BLACK_DASHED.width, 1.5);
}
