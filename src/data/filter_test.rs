use crate::data::error::SpectralError;
use crate::data::filter::WavelengthMask;
use crate::data::model::{GridConfig, RadiationLaw, StellarBody, WavelengthGrid};
use crate::data::spectral::{planck, SpectralModel};

fn default_grid() -> WavelengthGrid {
    WavelengthGrid::linspace(&GridConfig::default()).unwrap()
}

#[test]
fn up_to_keeps_inclusive_prefix() {
    let grid = default_grid();
    let mask = WavelengthMask::up_to(&grid, 4.0);

    assert_eq!(mask.len(), grid.len());
    assert_eq!(mask.selected_count(), 266);

    let kept = mask.apply_grid(&grid).unwrap();
    assert!(kept.micrometers().iter().all(|&um| um <= 4.0));
    assert_eq!(kept.micrometers(), &grid.micrometers()[..266]);
}

#[test]
fn filter_then_compute_equals_compute_then_filter() {
    let grid = default_grid();
    let masks = [
        WavelengthMask::up_to(&grid, 4.0),
        WavelengthMask::from_fn(&grid, |um| (1.0..=2.5).contains(&um)),
        WavelengthMask::from_fn(&grid, |um| (um * 100.0).round() as i64 % 3 == 0),
    ];

    for body in StellarBody::ALL {
        let t = body.temperature_k;
        for mask in &masks {
            let compute_then_filter = mask.apply(&planck(grid.meters(), t)).unwrap();
            let filter_then_compute = planck(mask.apply_grid(&grid).unwrap().meters(), t);
            assert_eq!(compute_then_filter, filter_then_compute);
        }
    }
}

#[test]
fn apply_rejects_wrong_length() {
    let grid = default_grid();
    let mask = WavelengthMask::up_to(&grid, 4.0);
    assert_eq!(
        mask.apply(&[1.0, 2.0]),
        Err(SpectralError::LengthMismatch {
            expected: 2000,
            found: 2
        })
    );
}

#[test]
fn apply_set_keeps_every_curve_aligned() {
    let model = SpectralModel::default();
    let set = model.spectra(default_grid(), &StellarBody::ALL).unwrap();
    let zoomed = WavelengthMask::up_to(&set.grid, 4.0).apply_set(&set).unwrap();

    assert_eq!(zoomed.grid.len(), 266);
    assert_eq!(zoomed.curves().len(), set.curves().len());
    for curve in zoomed.curves() {
        assert_eq!(curve.len(), zoomed.grid.len());
        let full = set.curve(curve.law, curve.body.name).unwrap();
        assert_eq!(curve.density.as_slice(), &full.density[..266]);
    }

    let sun = zoomed.curve(RadiationLaw::Planck, "Sun").unwrap();
    assert_eq!(sun.body, StellarBody::SUN);
}

#[test]
fn apply_set_rejects_empty_selection() {
    let model = SpectralModel::default();
    let set = model.spectra(default_grid(), &[StellarBody::SUN]).unwrap();
    let mask = WavelengthMask::up_to(&set.grid, 0.001);

    assert_eq!(mask.selected_count(), 0);
    assert_eq!(mask.apply_set(&set), Err(SpectralError::EmptySelection));
}
