/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs;
use std::io;

/// Reads an entire input file named by a `--in`-style argument.
pub fn read_file(path: &OsStr) -> io::Result<Vec<u8>>
{
    fs::read(path)
}

/// Writes an entire output file named by an `--out`-style argument.
pub fn write_file(path: &OsStr, data: &[u8]) -> io::Result<()>
{
    fs::write(path, data)
}

/// Decodes a hex string from a command-line argument. Accepts an empty
/// string as an empty buffer (some fields, like `/Perms`, are optional).
pub fn decode_hex(s: &str) -> Result<Vec<u8>, String>
{
    if s.len() % 2 != 0
    {
        return Err(format!("hex string {s:?} has odd length"));
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).map_err(|e| e.to_string()))
        .collect()
}
