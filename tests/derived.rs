// tests/derived.rs

//! Labels and fermentation readings derived from stored recipes.

mod common;

use chrono::{TimeZone, Utc};
use kettle::{
    render_svg, simulate, FermentationDefaults, FermentationProfile, LabelContent, LabelDesign,
};

#[test]
fn test_label_of_stored_recipe() {
    let (_dir, store) = common::setup_store();
    let slug = store.save(&common::full_recipe()).unwrap();
    let recipe = store.load(&slug).unwrap().unwrap();

    let svg = render_svg(&LabelContent::from_recipe(&recipe), &LabelDesign::default());

    assert!(svg.contains("Fish &amp; Chips &lt;Bitter&gt;"));
    assert!(svg.contains("Best Bitter"));
    assert!(svg.contains("ABV 4.5%"));
}

#[test]
fn test_fermentation_of_stored_recipe() {
    let (_dir, store) = common::setup_store();
    let slug = store.save(&common::full_recipe()).unwrap();
    let recipe = store.load(&slug).unwrap().unwrap();

    let mut profile = FermentationProfile::from_recipe(&recipe, &FermentationDefaults::default());
    profile.seed = Some(99);
    let start = Utc.with_ymd_and_hms(2024, 10, 1, 8, 0, 0).unwrap();

    let readings = simulate(&profile, start);

    assert_eq!(readings.len(), 14 * 24 / 6 + 1);
    assert_eq!(readings[0].gravity, 1.045);
    for pair in readings.windows(2) {
        assert!(pair[1].gravity <= pair[0].gravity);
    }
    assert!(readings.iter().all(|r| r.gravity >= 1.011));
    assert_eq!(readings, simulate(&profile, start));
}
