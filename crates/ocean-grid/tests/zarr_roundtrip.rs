//! Integration test: generate a dataset, persist it to Zarr, read it back.
//!
//! 1. Generate a small seeded dataset
//! 2. Write it with `write_dataset`
//! 3. Open it with `open_dataset`
//! 4. Verify axes and cell values (NaN positions included) survive

use ocean_grid::{generate_dataset, open_dataset, write_dataset, GridConfig};

fn small_config() -> GridConfig {
    GridConfig {
        time_steps: 4,
        lat_step: 10.0,
        lon_step: 10.0,
        ..GridConfig::default()
    }
}

#[test]
fn test_roundtrip_preserves_everything() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store_path = dir.path().join("ocean.zarr");

    let original = generate_dataset(&small_config(), Some(99));
    write_dataset(&store_path, &original).expect("write dataset");

    let restored = open_dataset(&store_path).expect("open dataset");

    assert_eq!(restored.shape(), original.shape());
    assert_eq!(restored.times, original.times);
    assert_eq!(restored.lats, original.lats);
    assert_eq!(restored.lons, original.lons);

    assert_eq!(restored.variables().len(), original.variables().len());
    for (restored_var, original_var) in restored.variables().iter().zip(original.variables()) {
        assert_eq!(restored_var.name, original_var.name);
        assert_eq!(restored_var.units, original_var.units);
        assert_eq!(restored_var.data.len(), original_var.data.len());

        // Bit-level comparison keeps NaN positions honest.
        for (idx, (r, o)) in restored_var
            .data
            .iter()
            .zip(original_var.data.iter())
            .enumerate()
        {
            assert_eq!(
                r.to_bits(),
                o.to_bits(),
                "variable {} differs at flat index {idx}",
                restored_var.name
            );
        }
    }
}

#[test]
fn test_rewrite_replaces_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store_path = dir.path().join("ocean.zarr");

    let first = generate_dataset(&small_config(), Some(1));
    write_dataset(&store_path, &first).expect("first write");

    let second = generate_dataset(&small_config(), Some(2));
    write_dataset(&store_path, &second).expect("second write");

    let restored = open_dataset(&store_path).expect("open dataset");
    let restored_temp = &restored.variable("temperature").unwrap().data;
    let second_temp = &second.variable("temperature").unwrap().data;

    assert!(restored_temp
        .iter()
        .zip(second_temp.iter())
        .all(|(a, b)| a.to_bits() == b.to_bits()));
}
