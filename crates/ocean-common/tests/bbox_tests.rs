//! Integration tests for bounding boxes against the full region registry.

use ocean_common::{regions, LonSpan};

#[test]
fn every_region_box_contains_its_own_interior() {
    for region in regions() {
        let lat = (region.bounds.lat.min + region.bounds.lat.max) / 2.0;
        let (lon_min, lon_max) = region.bounds.lon.ranges()[0];
        let lon = (lon_min + lon_max) / 2.0;
        assert!(
            region.bounds.contains(lat, lon),
            "{} does not contain its own interior point ({lat}, {lon})",
            region.name
        );
    }
}

#[test]
fn pacific_spans_the_dateline() {
    let pacific = regions()
        .iter()
        .find(|r| r.name == "pacific ocean")
        .expect("pacific ocean in registry");

    assert!(matches!(
        pacific.bounds.lon,
        LonSpan::SplitAtDateline { .. }
    ));
    assert!(pacific.bounds.contains(0.0, 179.0));
    assert!(pacific.bounds.contains(0.0, -179.0));
    assert!(!pacific.bounds.contains(0.0, 0.0));
}

#[test]
fn every_point_belongs_to_at_most_one_region() {
    // Coarse sweep over the globe; regions are non-overlapping by construction.
    let mut lat = -89.0;
    while lat < 90.0 {
        let mut lon = -180.0;
        while lon < 180.0 {
            let owners: Vec<_> = regions()
                .iter()
                .filter(|r| r.bounds.contains(lat, lon))
                .map(|r| r.name)
                .collect();
            assert!(
                owners.len() <= 1,
                "point ({lat}, {lon}) claimed by {owners:?}"
            );
            lon += 3.0;
        }
        lat += 3.0;
    }
}
