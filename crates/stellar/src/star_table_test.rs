use crate::star_table::{HABITABLE_ZONE_TABLE, JUMP_LIMIT_TABLE, PRECLUDED_ORBITS_TABLE, StarTable};

#[test]
fn floor_lookup_uses_greatest_key_not_above_query() {
    // G0 V is the nearest reference below G2 V
    assert_eq!(HABITABLE_ZONE_TABLE.lookup("G2 V"), Some(2));
    assert_eq!(HABITABLE_ZONE_TABLE.lookup("K5 V"), Some(1));
    assert_eq!(HABITABLE_ZONE_TABLE.lookup("M0 V"), Some(0));
}

#[test]
fn exact_key_matches() {
    assert_eq!(HABITABLE_ZONE_TABLE.lookup("O0 Ia"), Some(15));
    assert_eq!(JUMP_LIMIT_TABLE.lookup("M5 V"), Some(-1));
    assert_eq!(PRECLUDED_ORBITS_TABLE.lookup("M0 Ia"), Some(8));
}

#[test]
fn below_first_key_is_none() {
    assert_eq!(PRECLUDED_ORBITS_TABLE.lookup("O5 Ia"), None);
    assert_eq!(PRECLUDED_ORBITS_TABLE.lookup("B5 Ia"), None);
}

#[test]
fn degenerate_stars_hit_the_last_band() {
    assert_eq!(HABITABLE_ZONE_TABLE.lookup("D"), Some(0));
    assert_eq!(HABITABLE_ZONE_TABLE.lookup("O5 D"), Some(1));
    assert_eq!(JUMP_LIMIT_TABLE.lookup("BD"), Some(-1));
}

#[test]
fn keys_are_sorted() {
    let keys = JUMP_LIMIT_TABLE.keys();
    assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(keys.first(), Some(&0));
    assert_eq!(keys.last(), Some(&600));
}

#[test]
fn custom_table_lookup_by_index() {
    static TABLE: StarTable = StarTable::new("test", &[("M0 V", 7), ("A0 V", 3)]);

    assert_eq!(TABLE.name(), "test");
    assert_eq!(TABLE.lookup_index(519), None);
    assert_eq!(TABLE.lookup_index(520), Some(3));
    assert_eq!(TABLE.lookup_index(559), Some(3));
    assert_eq!(TABLE.lookup_index(560), Some(7));
    assert_eq!(TABLE.lookup_index(10_000), Some(7));
}

#[test]
fn subdwarf_rows_override_main_sequence() {
    assert_eq!(HABITABLE_ZONE_TABLE.lookup("O5 V"), Some(3));
    assert_eq!(HABITABLE_ZONE_TABLE.lookup("G0 V"), Some(2));
    assert_eq!(HABITABLE_ZONE_TABLE.lookup("K0 V"), Some(1));
    assert_eq!(HABITABLE_ZONE_TABLE.lookup("G2 VI"), Some(2));

    assert_eq!(JUMP_LIMIT_TABLE.lookup("G0 V"), Some(2));
    assert_eq!(JUMP_LIMIT_TABLE.lookup("G5 V"), Some(1));
    assert_eq!(JUMP_LIMIT_TABLE.lookup("K0 V"), Some(0));
    assert_eq!(JUMP_LIMIT_TABLE.lookup("K5 V"), Some(1));
    assert_eq!(JUMP_LIMIT_TABLE.lookup("M0 V"), Some(0));
    assert_eq!(JUMP_LIMIT_TABLE.lookup("M5 V"), Some(-1));
    // A5 V has no subdwarf row
    assert_eq!(JUMP_LIMIT_TABLE.lookup("A5 V"), Some(4));
}

#[test]
fn duplicate_keys_keep_the_later_value() {
    static TABLE: StarTable = StarTable::new("dup", &[("G0 V", 3), ("K0 V", 2), ("G0 VI", 9)]);

    assert_eq!(TABLE.keys(), vec![540, 550]);
    assert_eq!(TABLE.lookup("G2 V"), Some(9));
    assert_eq!(TABLE.lookup("K2 V"), Some(2));
}
