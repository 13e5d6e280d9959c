use crate::chart::catalog::{build_catalog, ZOOM_MAX_UM};
use crate::chart::spec::{ChartSpec, LineStyle, CAPTION_WIDTH};
use crate::data::error::SpectralError;
use crate::data::model::{GridConfig, RadiationLaw, StellarBody, WavelengthGrid};
use crate::data::spectral::SpectralModel;

fn catalog() -> Vec<ChartSpec> {
    let grid = WavelengthGrid::linspace(&GridConfig::default()).unwrap();
    let set = SpectralModel::default()
        .spectra(grid, &StellarBody::ALL)
        .unwrap();
    build_catalog(&set).unwrap()
}

fn labels(chart: &ChartSpec) -> Vec<&str> {
    chart.series.iter().map(|s| s.label.as_str()).collect()
}

#[test]
fn four_charts_in_fixed_order() {
    let charts = catalog();
    let titles: Vec<&str> = charts.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Graph #1: Blackbody Radiation",
            "Graph #2: Blackbody Radiation",
            "Graph #3: Blackbody Radiation of The Sun, Procyon, Sirius, and Betelgeuse",
            "Graph #4: Blackbody Radiation of The Sun and Betelgeuse (zoomed in)",
        ]
    );
}

#[test]
fn axis_windows_are_explicit() {
    let charts = catalog();
    let windows: Vec<(f64, f64, f64, f64)> = charts
        .iter()
        .map(|c| (c.x_range.min, c.x_range.max, c.y_range.min, c.y_range.max))
        .collect();
    assert_eq!(
        windows,
        [
            (0.0, 30.0, 0.0, 300.0),
            (0.0, 4.0, 0.0, 2_000_000.0),
            (0.0, 2.0, 0.0, 12_000_000.0),
            (0.0, 2.0, 0.0, 1_100_000.0),
        ]
    );
}

#[test]
fn first_chart_uses_full_grid_and_the_rest_are_zoomed() {
    let charts = catalog();
    assert_eq!(charts[0].wavelengths_um.len(), 2000);
    for chart in &charts[1..] {
        assert_eq!(chart.wavelengths_um.len(), 266);
        assert!(chart.wavelengths_um.iter().all(|&um| um <= ZOOM_MAX_UM));
    }
}

#[test]
fn every_series_is_aligned_with_its_axis() {
    for chart in catalog() {
        assert!(!chart.series.is_empty());
        for series in &chart.series {
            assert_eq!(series.values.len(), chart.wavelengths_um.len(), "{}", chart.title);
        }
    }
}

#[test]
fn sun_against_rayleigh_jeans_styles() {
    let charts = catalog();
    for chart in &charts[..2] {
        assert_eq!(
            labels(chart),
            ["Planck's Law (Sun)", "Rayleigh-Jeans Law (Sun)"]
        );
        assert_eq!(chart.series[0].style, LineStyle::BLACK_SOLID);
        assert_eq!(chart.series[1].style, LineStyle::RED_DASHED);
    }
}

#[test]
fn star_comparisons_label_temperatures() {
    let charts = catalog();
    assert_eq!(
        labels(&charts[2]),
        [
            "Planck's Law (Sun T = 5700K)",
            "Planck's Law (Procyon T = 6400K)",
            "Planck's Law (Sirius T = 9200K)",
            "Planck's Law (Betelgeuse T = 3400K)",
        ]
    );
    let styles: Vec<LineStyle> = charts[2].series.iter().map(|s| s.style).collect();
    assert_eq!(
        styles,
        [
            LineStyle::BLACK_SOLID,
            LineStyle::BLACK_DASHED,
            LineStyle::BLUE_SOLID,
            LineStyle::RED_SOLID,
        ]
    );

    assert_eq!(
        labels(&charts[3]),
        [
            "Planck's Law (Sun T = 5700K)",
            "Planck's Law (Betelgeuse T = 3400K)",
        ]
    );
}

#[test]
fn zoomed_peaks_fit_inside_their_windows() {
    let charts = catalog();
    for chart in &charts[1..] {
        let planck_peak = chart.series[0]
            .values
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(planck_peak < chart.y_range.max, "{}", chart.title);
    }
    let sirius_peak = charts[2].series[2]
        .values
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(sirius_peak < charts[2].y_range.max);
}

#[test]
fn captions_are_wrapped() {
    for chart in catalog() {
        assert!(!chart.caption.is_empty());
        assert!(chart
            .caption
            .iter()
            .all(|line| line.chars().count() <= CAPTION_WIDTH));
    }
}

#[test]
fn missing_body_is_reported() {
    let grid = WavelengthGrid::linspace(&GridConfig::default()).unwrap();
    let set = SpectralModel::default()
        .spectra(grid, &[StellarBody::SUN])
        .unwrap();

    assert_eq!(
        build_catalog(&set),
        Err(SpectralError::MissingCurve {
            law: RadiationLaw::Planck,
            body: "Procyon".to_string(),
        })
    );
}
