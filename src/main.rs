// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#![deny(warnings, clippy::nursery, unused_extern_crates)]

use std::{io::Write, process::ExitCode};

use showport::{args, inspect, logger, Error, IoPrivilege};

fn run(arguments: &[String]) -> Result<(), Error> {
    let groups = match args::decode(arguments) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("Rejected command line: {e:?}");
            print!("  {e}\n{}", args::USAGE);
            return Ok(());
        }
    };

    let mut ports = IoPrivilege::acquire()?;
    let mut stdout = std::io::stdout().lock();
    let result = inspect::run(&mut ports, &groups, &mut stdout)
        .and_then(|reports| stdout.flush().map(|()| reports));
    ports.release()?;

    let reports = result?;
    log::debug!("Processed {} port group(s)", reports.len());
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = logger::init() {
        eprintln!("{}", Error::from(e));
        return ExitCode::FAILURE;
    }

    let arguments: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|v| v.to_string_lossy().into_owned())
        .collect();
    match run(&arguments) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
