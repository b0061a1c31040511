// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use num_enum::TryFromPrimitive;

use crate::{
    error::UsageError,
    regs::{ExtendedControlReg, ECR_MODE_EPP, ECR_MODE_SPP},
};

pub const USAGE: &str = "  Usage: showport BASE_0 EXTENDED_0 s|S|e|E|n|N [ BASE_1 EXTENDED_1 s|S|e|E|n|N ] ...\n  s = SPP, e = EPP, n = No change\n";

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum PortMode {
    Spp = b's',
    Epp = b'e',
    NoChange = b'n',
}

impl PortMode {
    /// Decodes the first character of `arg`, ignoring case.
    pub fn from_arg(arg: &str) -> Result<Self, UsageError> {
        arg.bytes()
            .next()
            .and_then(|v| Self::try_from(v.to_ascii_lowercase()).ok())
            .ok_or_else(|| UsageError::InvalidMode(arg.to_owned()))
    }

    /// ECR value to write for this mode, or `None` if the register is left alone.
    #[must_use]
    pub const fn apply(self, ecr: ExtendedControlReg) -> Option<ExtendedControlReg> {
        match self {
            Self::Epp => Some(ecr.masked().with_mode(ECR_MODE_EPP)),
            Self::Spp => Some(ecr.masked().with_mode(ECR_MODE_SPP)),
            Self::NoChange => None,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Epp => "Setting mode to EPP",
            Self::Spp => "Setting mode to SPP",
            Self::NoChange => "No mode change",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortGroup {
    pub base: u16,
    pub extended: u16,
    pub mode: PortMode,
}

/// Parses an address the way `strtol(s, NULL, 16)` does, then truncates to a port number.
///
/// Leading whitespace, a sign and a `0x` prefix are accepted. Parsing stops at the first
/// non-hex character; no digits at all gives 0.
#[must_use]
pub fn parse_hex(s: &str) -> u16 {
    let s = s.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = match s.get(..2) {
        Some("0x" | "0X") if s[2..].starts_with(|c: char| c.is_ascii_hexdigit()) => &s[2..],
        _ => s,
    };

    // strtol clamps to the long range; the caller then keeps the low bits.
    let magnitude = digits
        .chars()
        .map_while(|c| c.to_digit(16))
        .try_fold(0u64, |acc, v| -> Option<u64> {
            acc.checked_mul(16)?.checked_add(v.into())
        });

    let value = match (negative, magnitude) {
        (false, Some(v)) if v <= i64::MAX as u64 => v as i64,
        (false, _) => i64::MAX,
        (true, Some(v)) if v <= i64::MIN.unsigned_abs() => (v as i64).wrapping_neg(),
        (true, _) => i64::MIN,
    };
    value as u16
}

/// Splits the arguments (program name excluded) into port groups.
///
/// Every group is decoded before returning, so a bad mode anywhere rejects the whole line.
pub fn decode<S: AsRef<str>>(args: &[S]) -> Result<Vec<PortGroup>, UsageError> {
    if args.is_empty() || !args.len().is_multiple_of(3) {
        return Err(UsageError::GroupCount(args.len()));
    }

    args.chunks_exact(3)
        .map(|group| -> Result<PortGroup, UsageError> {
            Ok(PortGroup {
                base: parse_hex(group[0].as_ref()),
                extended: parse_hex(group[1].as_ref()),
                mode: PortMode::from_arg(group[2].as_ref())?,
            })
        })
        .collect()
}
