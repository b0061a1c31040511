// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#![deny(warnings, clippy::nursery, unused_extern_crates)]
#![allow(clippy::missing_safety_doc)]

#[macro_use]
extern crate log;

pub mod args;
pub mod error;
pub mod inspect;
pub mod io;
pub mod logger;
pub mod regs;

pub use args::{PortGroup, PortMode};
pub use error::{Error, UsageError};
pub use io::{port::PortAccess, privilege::IoPrivilege};
