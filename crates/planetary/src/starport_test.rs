use crate::starport::Starport;

#[test]
fn ordered_by_quality() {
    assert!(Starport::A > Starport::B);
    assert!(Starport::E > Starport::F);
    assert!(Starport::H > Starport::X);
    assert_eq!(Starport::C.min(Starport::G), Starport::G);
    assert_eq!(Starport::X.max(Starport::H), Starport::H);
}

#[test]
fn downgrade_walks_toward_none() {
    assert_eq!(Starport::A.downgrade(), Starport::B);
    assert_eq!(Starport::E.downgrade(), Starport::F);
    assert_eq!(Starport::H.downgrade(), Starport::X);
    assert_eq!(Starport::X.downgrade(), Starport::X);
}

#[test]
fn tech_modifiers() {
    assert_eq!(Starport::A.tech_modifier(), 6);
    assert_eq!(Starport::B.tech_modifier(), 4);
    assert_eq!(Starport::C.tech_modifier(), 2);
    assert_eq!(Starport::D.tech_modifier(), 0);
    assert_eq!(Starport::F.tech_modifier(), 1);
    assert_eq!(Starport::G.tech_modifier(), 0);
    assert_eq!(Starport::X.tech_modifier(), -4);
}

#[test]
fn codes_round_trip() {
    for port in Starport::ALL {
        assert_eq!(Starport::from_code(port.code()), Some(port));
        assert_eq!(port.to_string(), port.code().to_string());
    }
    assert_eq!(Starport::from_code('Y'), None);
}

#[test]
fn spaceports() {
    assert!(Starport::G.is_spaceport());
    assert!(!Starport::A.is_spaceport());
    assert!(!Starport::X.is_spaceport());
    assert_eq!(Starport::default(), Starport::X);
}
