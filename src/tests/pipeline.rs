//! Whole chain: load, match, estimate
use crate::prelude::*;
use crate::tests::init_logger;

fn data_file(name: &str) -> String {
    format!("{}/src/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn brno_scan() {
    init_logger();

    let cfg = Config::gsm900();

    let catalog = load_catalog(data_file("bts.csv")).unwrap();
    assert_eq!(catalog.len(), 4);

    let observations = load_observations(data_file("nearest.csv")).unwrap();
    assert_eq!(observations.len(), 5);

    let matched = match_stations(&observations, &catalog, &cfg);

    // 103 was never observed, 999-999 is not in the catalog,
    // 201-102 was reported twice and folds into one station
    assert_eq!(matched.len(), 3);
    assert_eq!(matched[0].key(), (200, 100));
    assert_eq!(matched[1].key(), (200, 101));
    assert_eq!(matched[2].key(), (201, 102));

    assert!((matched[0].distance_km - 0.39634294649924384).abs() < 1.0E-9);
    assert!((matched[1].distance_km - 0.4766718593750168).abs() < 1.0E-9);
    assert!((matched[2].distance_km - 0.4201418479688672).abs() < 1.0E-9);

    let fix = estimate_fix(&matched);
    assert!(fix.is_resolved());
    assert!((fix.latitude - 49.223956497801716).abs() < 1.0E-9);
    assert!((fix.longitude - 16.573829327528344).abs() < 1.0E-9);

    // the fix stays within the matched stations' convex hull
    assert!(fix.latitude > 49.21263888888889 && fix.latitude < 49.233919444444446);
    assert!(fix.longitude > 16.55301111111111 && fix.longitude < 16.598888888888887);

    assert_eq!(
        fix.maps_url(),
        format!("maps.google.com/maps?q={},{}", fix.latitude, fix.longitude),
    );
}

#[test]
fn sparse_scan() {
    init_logger();

    let cfg = Config::gsm900();

    let catalog = load_catalog(data_file("bts.csv")).unwrap();

    // two reports of the same tower: one matched station only
    let observations = vec![
        ObservationRecord::new(200, 100, -80.0, 30.0, 2.0),
        ObservationRecord::new(200, 100, -82.0, 30.0, 2.0),
    ];

    let matched = match_stations(&observations, &catalog, &cfg);
    assert_eq!(matched.len(), 1);
    assert_eq!(estimate_fix(&matched), Fix::INSUFFICIENT);
}
