// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use showport::{
    args::{decode, parse_hex, PortGroup, PortMode},
    UsageError,
};

#[test]
fn hex_plain() {
    assert_eq!(parse_hex("21D0"), 0x21D0);
    assert_eq!(parse_hex("21d0"), 8656);
    assert_eq!(parse_hex("378"), 0x378);
}

#[test]
fn hex_prefix_and_whitespace() {
    assert_eq!(parse_hex("0x778"), 0x778);
    assert_eq!(parse_hex("  0X3BC"), 0x3BC);
    assert_eq!(parse_hex("+10"), 0x10);
}

#[test]
fn hex_malformed_is_zero() {
    assert_eq!(parse_hex("zz"), 0);
    assert_eq!(parse_hex(""), 0);
    assert_eq!(parse_hex("0x"), 0);
    assert_eq!(parse_hex("-"), 0);
}

#[test]
fn hex_stops_at_garbage() {
    assert_eq!(parse_hex("21D0zz"), 0x21D0);
    assert_eq!(parse_hex("0xg1"), 0);
}

#[test]
fn hex_truncates_to_port_width() {
    assert_eq!(parse_hex("121D0"), 0x21D0);
    assert_eq!(parse_hex("-1"), 0xFFFF);
}

#[test]
fn hex_overflow_clamps_like_strtol() {
    assert_eq!(parse_hex("10000000000000000000"), 0xFFFF);
    assert_eq!(parse_hex("7FFFFFFFFFFFFFFF"), 0xFFFF);
    assert_eq!(parse_hex("-10000000000000000000"), 0);
    assert_eq!(parse_hex("-8000000000000000"), 0);
    assert_eq!(parse_hex("FFFFFFFFFFFF21D0"), 0xFFFF);
}

#[test]
fn mode_letters() {
    for (arg, mode) in [
        ("s", PortMode::Spp),
        ("S", PortMode::Spp),
        ("e", PortMode::Epp),
        ("E", PortMode::Epp),
        ("n", PortMode::NoChange),
        ("N", PortMode::NoChange),
        ("epp", PortMode::Epp),
    ] {
        assert_eq!(PortMode::from_arg(arg), Ok(mode), "{arg}");
    }
}

#[test]
fn mode_invalid() {
    assert_eq!(
        PortMode::from_arg("x"),
        Err(UsageError::InvalidMode("x".into()))
    );
    assert_eq!(
        PortMode::from_arg(""),
        Err(UsageError::InvalidMode(String::new()))
    );
}

#[test]
fn decode_two_groups_in_order() {
    let groups = decode(&["21D0", "21C8", "s", "21C0", "21B8", "e"]).unwrap();
    assert_eq!(
        groups,
        vec![
            PortGroup {
                base: 0x21D0,
                extended: 0x21C8,
                mode: PortMode::Spp,
            },
            PortGroup {
                base: 0x21C0,
                extended: 0x21B8,
                mode: PortMode::Epp,
            },
        ]
    );
}

#[test]
fn decode_keeps_duplicates() {
    let groups = decode(&["378", "778", "n", "378", "778", "n"]).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0], groups[1]);
}

#[test]
fn decode_bad_count() {
    let empty: [&str; 0] = [];
    assert_eq!(decode(&empty), Err(UsageError::GroupCount(0)));
    assert_eq!(decode(&["378", "778"]), Err(UsageError::GroupCount(2)));
    assert_eq!(
        decode(&["378", "778", "s", "278"]),
        Err(UsageError::GroupCount(4))
    );
}

#[test]
fn decode_rejects_whole_line_on_late_bad_mode() {
    assert_eq!(
        decode(&["378", "778", "s", "278", "678", "q"]),
        Err(UsageError::InvalidMode("q".into()))
    );
}

#[test]
fn usage_messages() {
    assert_eq!(
        UsageError::GroupCount(1).to_string(),
        "Not enough arguments - Base Extended Mode"
    );
    assert_eq!(
        UsageError::InvalidMode("x".into()).to_string(),
        "Invalid Mode - s|S|e|E|n|N"
    );
}
