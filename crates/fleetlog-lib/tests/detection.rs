mod common;

use common::assert_close;
use fleetlog_lib::detection::{
    sortie_detection, Detection, DetectionDisplayMode, NightRecon, NIGHT_RECON_SUFFIX,
    RELOAD_REQUIRED,
};

#[test]
fn first_fleet_terms_and_renderings() {
    let (snapshot, inventory) = common::loaded();
    let fleet = snapshot.fleet(1).expect("first fleet");
    let detection = Detection::for_fleet(&inventory, &fleet.ships, snapshot.hq_level);

    assert_eq!(detection.ship_count(), 4);
    assert_eq!(detection.hq_penalty(), -48.0);
    assert_eq!(detection.space_bonus(), 4.0);
    assert_close(detection.item_los(), 49.58);
    assert!(!detection.los_failed());

    assert_eq!(detection.render(DetectionDisplayMode::Single, 1.0), "26.829 (1.0)");
    assert_eq!(
        detection.render(DetectionDisplayMode::Breakdown, 1.0),
        "26.829 (21.249+49.580(1.0)-48.0+4.0)"
    );
    assert_eq!(
        detection.render(DetectionDisplayMode::CoefficientTable, 1.0),
        "26.829(1) / 76.409(2) / 125.989(3) / 175.569(4) / 225.149(5)"
    );
}

#[test]
fn single_ship_includes_synergy_and_ignores_unknown_extra_slot() {
    let (snapshot, inventory) = common::loaded();
    // Johnston carries an SK radar: 30 - 10 - 2 = 18
    let johnston = snapshot.ship(1, 4).expect("fourth ship");
    let detection = Detection::for_ship(&inventory, johnston);
    assert_close(detection.ship_los(), 18f64.sqrt());
    assert_close(detection.item_los(), 6.0);
    assert_eq!(detection.render(DetectionDisplayMode::Single, 1.0), "10.242 (1.0)");
}

#[test]
fn unclassified_equipment_requires_reload_in_detailed_modes() {
    let (snapshot, inventory) = common::loaded();
    let fleet = snapshot.fleet(3).expect("third fleet");
    let detection = Detection::for_fleet(&inventory, &fleet.ships, snapshot.hq_level);

    assert!(detection.los_failed());
    assert_eq!(detection.render(DetectionDisplayMode::Breakdown, 1.0), RELOAD_REQUIRED);
    assert_eq!(detection.render(DetectionDisplayMode::CoefficientTable, 2.0), RELOAD_REQUIRED);
    assert_eq!(detection.render(DetectionDisplayMode::Single, 1.0), "-32.077 (1.0)");
    // The numeric value stays available to non-display consumers.
    assert_close(detection.value(2.0), 4.123_105_625_617_661 + 3.6 - 48.0 + 10.0);
}

#[test]
fn sortie_sums_main_and_escort_without_escaped_ships() {
    let (snapshot, inventory) = common::loaded();
    let main = snapshot.fleet(1).expect("main");
    let escort = snapshot.fleet(2).expect("escort");

    let sortie = sortie_detection(&inventory, main, Some(escort), snapshot.hq_level);
    assert!(sortie.is_combined());
    assert_eq!(sortie.fleets()[1].ship_count(), 1);

    let expected = [-7.297_746_174_866_138, 42.282_253_825_133_85, 91.862_253_825_133_85, 141.442_253_825_133_83, 191.022_253_825_133_84];
    for (value, want) in sortie.values().iter().zip(expected) {
        assert_close(*value, want);
    }
}

#[test]
fn fleets_order_by_value() {
    let (snapshot, inventory) = common::loaded();
    let mut scores: Vec<(usize, Detection)> = (1..=3)
        .map(|n| {
            let fleet = snapshot.fleet(n).expect("fleet");
            (n, Detection::for_fleet(&inventory, &fleet.ships, snapshot.hq_level))
        })
        .collect();
    scores.sort_by(|a, b| a.1.cmp_value(&b.1, 1.0));
    let order: Vec<usize> = scores.iter().map(|(n, _)| *n).collect();
    assert_eq!(order, vec![2, 3, 1]);
}

#[test]
fn night_recon_of_first_fleet() {
    let (snapshot, inventory) = common::loaded();
    let fleet = snapshot.fleet(1).expect("first fleet");
    let recon = NightRecon::for_ships(&inventory, &fleet.ships);

    assert_close(recon.value(), 39.794_213_107_573_06);
    assert_eq!(recon.render(), format!("39.7 {NIGHT_RECON_SUFFIX}"));

    let escort = snapshot.fleet(2).expect("escort");
    assert_eq!(NightRecon::for_ships(&inventory, &escort.ships).value(), 0.0);
}
