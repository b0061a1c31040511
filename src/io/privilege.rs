// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use super::port::PortAccess;
use crate::error::Error;

/// Ring 3 I/O privilege level; grants access to every port.
pub const IOPL_USER: u8 = 3;
pub const IOPL_NONE: u8 = 0;

#[cfg(all(target_os = "linux", any(target_arch = "x86", target_arch = "x86_64")))]
fn set_iopl(level: u8) -> std::io::Result<()> {
    extern "C" {
        fn iopl(level: core::ffi::c_int) -> core::ffi::c_int;
    }

    if unsafe { iopl(level.into()) } < 0 {
        Err(std::io::Error::last_os_error())
    } else {
        Ok(())
    }
}

#[cfg(not(all(target_os = "linux", any(target_arch = "x86", target_arch = "x86_64"))))]
fn set_iopl(_level: u8) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "port I/O requires Linux on x86",
    ))
}

/// Process-wide I/O port privilege. Holding one is what makes raw port access sound.
#[derive(Debug)]
pub struct IoPrivilege {
    _private: (),
}

impl IoPrivilege {
    pub fn acquire() -> Result<Self, Error> {
        set_iopl(IOPL_USER).map_err(|source| Error::Privilege {
            level: IOPL_USER,
            source,
        })?;
        debug!("Raised I/O privilege level to {IOPL_USER}");
        Ok(Self { _private: () })
    }

    pub fn release(self) -> Result<(), Error> {
        set_iopl(IOPL_NONE).map_err(|source| Error::Privilege {
            level: IOPL_NONE,
            source,
        })?;
        debug!("Dropped I/O privilege level to {IOPL_NONE}");
        Ok(())
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl PortAccess for IoPrivilege {
    fn read8(&mut self, port: u16) -> u8 {
        trace!("in {port:#06X}");
        unsafe { <u8 as super::port::PortIO>::read(port) }
    }

    fn write8(&mut self, port: u16, value: u8) {
        trace!("out {port:#06X} <- {value:#04X}");
        unsafe { <u8 as super::port::PortIO>::write(port, value) }
    }
}

// Unreachable in practice: `acquire` never succeeds off x86.
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
impl PortAccess for IoPrivilege {
    fn read8(&mut self, _port: u16) -> u8 {
        0xFF
    }

    fn write8(&mut self, _port: u16, _value: u8) {}
}
