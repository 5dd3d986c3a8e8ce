/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

mod cmd_args;
mod file_io;
mod global_options;
mod workflow;

pub fn main()
{
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    global_options::setup_logger(&options);

    if let Err(reason) = workflow::run(&options)
    {
        println!();
        error!(" Could not complete workflow, reason {reason}");
        println!();
        exit(1);
    }
}
