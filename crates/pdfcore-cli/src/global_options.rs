/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};

/// Sets up the global logger at the level named by the top-level
/// `--debug`/`--trace`/`--info`/`--warn` flags, defaulting to warn.
///
/// All subsystem diagnostics (row-local CCITT recovery, per-object key
/// derivation notes) flow through this sink; the core itself never prints.
pub fn setup_logger(options: &ArgMatches)
{
    let log_level = if options.get_flag("trace")
    {
        Level::Trace
    }
    else if options.get_flag("debug")
    {
        Level::Debug
    }
    else if options.get_flag("info")
    {
        Level::Info
    }
    else
    {
        Level::Warn
    };

    simple_logger::init_with_level(log_level).unwrap();
    info!("Initialized logger at level {log_level}");
}
