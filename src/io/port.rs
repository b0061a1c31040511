// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

/// Raw byte-wide port instructions. Only sound once the process holds I/O privilege.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub trait PortIO: Sized {
    unsafe fn read(port: u16) -> Self;
    unsafe fn write(port: u16, value: Self);
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
impl PortIO for u8 {
    unsafe fn read(port: u16) -> Self {
        let ret: Self;
        core::arch::asm!("in al, dx", out("al") ret, in("dx") port, options(nomem, nostack, preserves_flags));
        ret
    }

    unsafe fn write(port: u16, value: Self) {
        core::arch::asm!("out dx, al", in("dx") port, in("al") value, options(nomem, nostack, preserves_flags));
    }
}

/// Capability to perform single-byte port I/O.
///
/// The inspector only ever talks to hardware through this, so a mock can stand in for
/// [`IoPrivilege`](super::privilege::IoPrivilege) under test.
pub trait PortAccess {
    fn read8(&mut self, port: u16) -> u8;
    fn write8(&mut self, port: u16, value: u8);
}

/// A block of byte registers addressed relative to `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterBlock {
    base: u16,
}

impl RegisterBlock {
    #[inline]
    #[must_use]
    pub const fn new(base: u16) -> Self {
        Self { base }
    }

    /// Absolute port of register `off`. Wraps at the top of the 16-bit port space.
    #[inline]
    #[must_use]
    pub fn port<A: Into<u16>>(&self, off: A) -> u16 {
        self.base.wrapping_add(off.into())
    }

    pub fn read_off<A: Into<u16>, R: From<u8>>(&self, io: &mut impl PortAccess, off: A) -> R {
        io.read8(self.port(off)).into()
    }

    pub fn write_off<A: Into<u16>, R: Into<u8>>(&self, io: &mut impl PortAccess, value: R, off: A) {
        io.write8(self.port(off), value.into());
    }
}
