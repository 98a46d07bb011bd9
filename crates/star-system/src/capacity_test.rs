use crate::capacity::{
    MAX_SATELLITE_ORBITS, max_orbits_for_orbit, max_satellite_orbits_for_orbit, world_size_mult,
};

#[test]
fn companion_capacity() {
    assert_eq!(max_orbits_for_orbit(0), 0);
    assert_eq!(max_orbits_for_orbit(1), 0);
    assert_eq!(max_orbits_for_orbit(2), 1);
    assert_eq!(max_orbits_for_orbit(3), 1);
    assert_eq!(max_orbits_for_orbit(9), 7);
}

#[test]
fn size_multiplier() {
    assert_eq!(world_size_mult(0), 1.0);
    assert_eq!(world_size_mult(8), 8.0);
    assert_eq!(world_size_mult(20), 20.0);
    assert_eq!(world_size_mult(21), 30.0);
    assert_eq!(world_size_mult(31), 250.0);
    assert_eq!(world_size_mult(40), 250.0);
}

#[test]
fn satellite_capacity() {
    assert_eq!(max_satellite_orbits_for_orbit(0, 8), 2);
    assert_eq!(max_satellite_orbits_for_orbit(3, 8), 3);
    assert_eq!(max_satellite_orbits_for_orbit(3, 25), 2);
    assert_eq!(max_satellite_orbits_for_orbit(10, 8), 4);
}

#[test]
fn satellite_capacity_is_bounded() {
    for orbit in 0..30 {
        for size in 0..32 {
            assert!(max_satellite_orbits_for_orbit(orbit, size) <= MAX_SATELLITE_ORBITS);
        }
    }
}

#[test]
fn bigger_worlds_hold_fewer_close_orbits() {
    assert!(max_satellite_orbits_for_orbit(5, 2) >= max_satellite_orbits_for_orbit(5, 30));
}
