// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use bitfield_struct::bitfield;
use num_enum::IntoPrimitive;

/// Standard (SPP) register block, relative to the base address.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
pub enum BaseReg {
    Data = 0,
    Status,
    Control,
    EppAddress,
    EppData,
}

impl BaseReg {
    pub const ALL: [Self; 5] = [
        Self::Data,
        Self::Status,
        Self::Control,
        Self::EppAddress,
        Self::EppData,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Data => "DPR",
            Self::Status => "DSR",
            Self::Control => "DCR",
            Self::EppAddress => "EPPA",
            Self::EppData => "EPPD",
        }
    }
}

/// ECP register block, relative to the extended address.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
pub enum ExtendedReg {
    ConfigA = 0,
    ConfigB,
    ExtendedControl,
}

impl ExtendedReg {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ConfigA => "CFA",
            Self::ConfigB => "CFB",
            Self::ExtendedControl => "ECR",
        }
    }
}

// Mode field values written for SPP and EPP.
pub const ECR_MODE_SPP: u8 = 0b001;
pub const ECR_MODE_EPP: u8 = 0b100;

#[bitfield(u8)]
#[derive(PartialEq, Eq)]
pub struct ExtendedControlReg {
    /// FIFO status and interrupt bits. Never touched by a mode change.
    #[bits(5)]
    pub low: u8,
    #[bits(3)]
    pub mode: u8,
}

impl ExtendedControlReg {
    /// Same register with the mode field cleared.
    #[must_use]
    pub const fn masked(self) -> Self {
        self.with_mode(0)
    }
}
