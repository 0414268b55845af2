//! Common test utilities and fixture helpers.
//!
//! Integration tests load the shared equipment catalog and snapshot from
//! `docs/fixtures` at the workspace root.

use std::path::PathBuf;

use fleetlog_lib::{EquipmentCatalog, Inventory, Snapshot};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn catalog() -> EquipmentCatalog {
    EquipmentCatalog::from_path(&fixtures_dir().join("equipment.csv"))
        .expect("load fixture equipment.csv")
}

#[allow(dead_code)]
pub fn snapshot() -> Snapshot {
    Snapshot::from_path(&fixtures_dir().join("snapshot.json")).expect("load fixture snapshot.json")
}

/// The fixture snapshot with its inventory resolved against the fixture catalog.
#[allow(dead_code)]
pub fn loaded() -> (Snapshot, Inventory) {
    let snapshot = snapshot();
    let inventory = snapshot.inventory(&catalog());
    (snapshot, inventory)
}

/// Assert two floats agree to within `1e-9`.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
