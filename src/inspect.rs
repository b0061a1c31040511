// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use crate::{
    args::PortGroup,
    io::port::{PortAccess, RegisterBlock},
    regs::{BaseReg, ExtendedControlReg, ExtendedReg},
};

const SEPARATOR: &str = "~~~~~";

/// Everything observed and written while processing one [`PortGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupReport {
    pub group: PortGroup,
    /// Indexed like [`BaseReg::ALL`].
    pub base_regs: [u8; 5],
    pub config_a: u8,
    pub config_b: u8,
    pub ecr: u8,
    pub written: Option<u8>,
    pub ecr_after: u8,
}

/// Dumps both register blocks of `group`, applies its mode and reads the ECR back.
pub fn inspect_group(io: &mut impl PortAccess, group: PortGroup) -> GroupReport {
    let base = RegisterBlock::new(group.base);
    let extended = RegisterBlock::new(group.extended);

    let base_regs = BaseReg::ALL.map(|reg| base.read_off::<_, u8>(io, reg));
    let config_a = extended.read_off(io, ExtendedReg::ConfigA);
    let config_b = extended.read_off(io, ExtendedReg::ConfigB);
    let ecr = extended.read_off(io, ExtendedReg::ExtendedControl);

    // Fresh read: the ECR FIFO bits may have moved since the dump above.
    let current: ExtendedControlReg = extended.read_off(io, ExtendedReg::ExtendedControl);
    let written = group.mode.apply(current).map(|value| {
        debug!(
            "ECR @ {:#06X}: {:#04X} masked to {:#04X}, writing {:#04X}",
            extended.port(ExtendedReg::ExtendedControl),
            current.into_bits(),
            current.masked().into_bits(),
            value.into_bits()
        );
        extended.write_off(io, value, ExtendedReg::ExtendedControl);
        value.into_bits()
    });
    let ecr_after = extended.read_off(io, ExtendedReg::ExtendedControl);

    GroupReport {
        group,
        base_regs,
        config_a,
        config_b,
        ecr,
        written,
        ecr_after,
    }
}

/// Processes `groups` in order, writing each report to `out` as soon as it is complete.
pub fn run<W: std::io::Write>(
    io: &mut impl PortAccess,
    groups: &[PortGroup],
    out: &mut W,
) -> std::io::Result<Vec<GroupReport>> {
    groups
        .iter()
        .map(|&group| -> std::io::Result<GroupReport> {
            let report = inspect_group(io, group);
            write!(out, "{report}")?;
            Ok(report)
        })
        .collect()
}

impl core::fmt::Display for GroupReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "Base @ {:#x}", self.group.base)?;
        writeln!(f, "Extended @ {:#x}", self.group.extended)?;

        for (reg, value) in BaseReg::ALL.iter().zip(self.base_regs) {
            writeln!(f, "{}: {value}", reg.label())?;
        }
        writeln!(f)?;

        writeln!(f, "{}: {}", ExtendedReg::ConfigA.label(), self.config_a)?;
        writeln!(f, "{}: {}", ExtendedReg::ConfigB.label(), self.config_b)?;
        writeln!(f, "{}: {}", ExtendedReg::ExtendedControl.label(), self.ecr)?;
        writeln!(f, "{SEPARATOR}")?;

        writeln!(f, "{}", self.group.mode.message())?;
        writeln!(
            f,
            "{}: {}",
            ExtendedReg::ExtendedControl.label(),
            self.ecr_after
        )?;
        writeln!(f, "{SEPARATOR}")
    }
}
