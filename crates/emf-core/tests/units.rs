#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use emf_core::Unit;

#[test]
fn known_symbols_parse_and_render() {
    for (s, unit) in [
        ("Seconds", Unit::Seconds),
        ("Milliseconds", Unit::Milliseconds),
        ("Gigabytes", Unit::Gigabytes),
        ("Percent", Unit::Percent),
        ("Bytes/Second", Unit::BytesSecond),
        ("Count/Second", Unit::CountSecond),
        ("None", Unit::None),
    ] {
        let parsed: Unit = s.parse().unwrap();
        assert_eq!(parsed, unit);
        assert_eq!(unit.as_str(), s);
        assert_eq!(unit.to_string(), s);
        assert!(unit.is_known());
    }
}

#[test]
fn unknown_symbol_passes_through() {
    let u = Unit::from("Furlongs/Fortnight");
    assert_eq!(u, Unit::Other("Furlongs/Fortnight".into()));
    assert_eq!(u.as_str(), "Furlongs/Fortnight");
    assert!(!u.is_known());
}

#[test]
fn default_is_none() {
    assert_eq!(Unit::default(), Unit::None);
}

#[test]
fn serde_uses_plain_strings() {
    assert_eq!(serde_json::to_string(&Unit::KilobitsSecond).unwrap(), "\"Kilobits/Second\"");
    assert_eq!(serde_json::to_string(&Unit::Other("Lux".into())).unwrap(), "\"Lux\"");

    let u: Unit = serde_json::from_str("\"Microseconds\"").unwrap();
    assert_eq!(u, Unit::Microseconds);
    let u: Unit = serde_json::from_str("\"Gigabyte\"").unwrap();
    assert_eq!(u, Unit::Other("Gigabyte".into()));
}
