use rangehist::LinearScale;

// Helper: approximate equality for round trips
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn map_hits_the_range_endpoints() {
    let scale = LinearScale::new((3.0, 17.0), (0.0, 100.0));
    assert_eq!(scale.map(3.0), 0.0);
    assert_eq!(scale.map(17.0), 100.0);
}

#[test]
fn map_and_invert_round_trip() {
    let scale = LinearScale::new((-4.0, 9.0), (0.0, 100.0));
    for i in 0..=50 {
        let v = -4.0 + 13.0 * i as f64 / 50.0;
        assert!(close(scale.invert(scale.map(v)), v), "round trip at {v}");
    }
}

#[test]
fn map_extrapolates_outside_the_domain() {
    let scale = LinearScale::percent((0.0, 10.0));
    assert_eq!(scale.map(-5.0), -50.0);
    assert_eq!(scale.map(20.0), 200.0);
}

#[test]
fn percent_constructor_targets_zero_to_hundred() {
    let scale = LinearScale::percent((2.0, 4.0));
    assert_eq!(scale.range(), (0.0, 100.0));
    assert_eq!(scale.map(3.0), 50.0);
}

#[test]
fn zero_width_domain_maps_to_range_start() {
    let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
    assert_eq!(scale.map(5.0), 0.0);
    assert_eq!(scale.map(99.0), 0.0);
}

#[test]
fn zero_width_range_inverts_to_domain_start() {
    let scale = LinearScale::new((1.0, 3.0), (40.0, 40.0));
    assert_eq!(scale.invert(40.0), 1.0);
    assert_eq!(scale.invert(0.0), 1.0);
}

#[test]
fn descending_range_still_inverts() {
    let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0));
    assert_eq!(scale.map(0.0), 100.0);
    assert_eq!(scale.map(10.0), 0.0);
    assert!(close(scale.invert(25.0), 7.5));
}
