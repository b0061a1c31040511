// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use log::LevelFilter;
use showport::logger::level_from;

#[test]
fn level_default() {
    assert_eq!(level_from(None), LevelFilter::Warn);
    assert_eq!(level_from(Some("verbose")), LevelFilter::Warn);
}

#[test]
fn level_named() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("TRACE")), LevelFilter::Trace);
    assert_eq!(level_from(Some(" off ")), LevelFilter::Off);
}
