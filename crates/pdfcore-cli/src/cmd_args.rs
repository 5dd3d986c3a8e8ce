/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::{value_parser, Arg, ArgAction, Command};

/// Builds the top-level `pdfcore` command: one subcommand per core
/// subsystem, mirroring the external interfaces in SPEC_FULL.md §6.
pub fn create_cmd_args() -> Command
{
    Command::new("pdfcore")
        .author("Caleb Etemesi")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and round-trip the binary codecs behind a PDF reader/writer")
        .next_line_help(false)
        .term_width(200)
        .arg(log_level_arg("debug", "Set log level to debug"))
        .arg(log_level_arg("trace", "Set log level to trace"))
        .arg(log_level_arg("info", "Set log level to info"))
        .arg(log_level_arg("warn", "Set log level to warn (default)"))
        .subcommand_required(true)
        .subcommand(ccitt_decode_cmd())
        .subcommand(ccitt_encode_cmd())
        .subcommand(jpeg_decode_cmd())
        .subcommand(type1_dump_cmd())
        .subcommand(crypt_authenticate_cmd())
}

fn log_level_arg(name: &'static str, help: &'static str) -> Arg
{
    Arg::new(name).long(name).help(help).action(ArgAction::SetTrue)
}

fn in_out_args(input_help: &'static str, output_help: &'static str) -> [Arg; 2]
{
    [
        Arg::new("in")
            .short('i')
            .long("in")
            .help(input_help)
            .action(ArgAction::Set)
            .value_parser(value_parser!(OsString))
            .required(true),
        Arg::new("out")
            .short('o')
            .long("out")
            .help(output_help)
            .action(ArgAction::Set)
            .value_parser(value_parser!(OsString))
            .required(true)
    ]
}

fn ccitt_shared_args() -> Vec<Arg>
{
    vec![
        Arg::new("columns")
            .long("columns")
            .help("Scanline width in pixels (/Columns)")
            .action(ArgAction::Set)
            .value_parser(value_parser!(u32))
            .required(true),
        Arg::new("rows")
            .long("rows")
            .help("Number of scanlines (/Rows); 0 means decode until end-of-block")
            .action(ArgAction::Set)
            .value_parser(value_parser!(u32))
            .default_value("0"),
        Arg::new("group")
            .long("group")
            .help("Encoding scheme (/K): g4, g3-1d, or g3-2d")
            .action(ArgAction::Set)
            .value_parser(["g4", "g3-1d", "g3-2d"])
            .default_value("g4"),
        Arg::new("k")
            .long("k")
            .help("Raw /K value when --group=g3-2d")
            .action(ArgAction::Set)
            .value_parser(value_parser!(i32))
            .default_value("1"),
        Arg::new("black-is-1")
            .long("black-is-1")
            .help("A set bit means black (/BlackIs1 true)")
            .action(ArgAction::SetTrue),
        Arg::new("byte-align")
            .long("byte-align")
            .help("Rows are byte-aligned (/EncodedByteAlign true)")
            .action(ArgAction::SetTrue),
        Arg::new("eol")
            .long("eol")
            .help("Rows carry EOL codes (/EndOfLine true)")
            .action(ArgAction::SetTrue),
        Arg::new("no-end-of-block")
            .long("no-end-of-block")
            .help("Stream has no EOFB/RTC terminator (/EndOfBlock false)")
            .action(ArgAction::SetTrue),
    ]
}

fn ccitt_decode_cmd() -> Command
{
    let mut cmd = Command::new("ccitt-decode")
        .about("Decode a CCITT Group 3/4 bitstream to a packed bitmap")
        .args(in_out_args(
            "Compressed CCITTFaxDecode bitstream to read",
            "Packed 1-bpp bitmap to write (rows padded to whole bytes)"
        ));
    for arg in ccitt_shared_args()
    {
        cmd = cmd.arg(arg);
    }
    cmd
}

fn ccitt_encode_cmd() -> Command
{
    let mut cmd = Command::new("ccitt-encode")
        .about("Encode a packed bitmap to a CCITT Group 3/4 bitstream")
        .args(in_out_args(
            "Packed 1-bpp bitmap to read (rows padded to whole bytes)",
            "Compressed CCITTFaxDecode bitstream to write"
        ));
    for arg in ccitt_shared_args()
    {
        cmd = cmd.arg(arg);
    }
    cmd
}

fn jpeg_decode_cmd() -> Command
{
    Command::new("jpeg-decode")
        .about("Decode a baseline JPEG (DCTDecode) image to a PPM file")
        .args(in_out_args("Baseline JPEG byte stream to read", "PPM (P6) image to write"))
}

fn type1_dump_cmd() -> Command
{
    Command::new("type1-dump")
        .about("Parse a Type 1 font and print its metadata, or one glyph's outline")
        .arg(
            Arg::new("in")
                .short('i')
                .long("in")
                .help("PFA, PFB, or PDF-embedded FontFile stream to read")
                .action(ArgAction::Set)
                .value_parser(value_parser!(OsString))
                .required(true)
        )
        .arg(
            Arg::new("length1")
                .long("length1")
                .help("/Length1 from the FontFile dictionary, if reading a PDF-embedded stream")
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
        )
        .arg(
            Arg::new("length2")
                .long("length2")
                .help("/Length2 from the FontFile dictionary, if reading a PDF-embedded stream")
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
        )
        .arg(
            Arg::new("glyph")
                .long("glyph")
                .help("Glyph name to interpret and print the outline of; otherwise lists all glyph names")
                .action(ArgAction::Set)
        )
}

fn crypt_authenticate_cmd() -> Command
{
    Command::new("crypt-authenticate")
        .about("Authenticate against an /Encrypt dictionary and print the resulting permissions")
        .arg(hex_arg("id", "Hex-encoded first document ID element (/ID[0])", true))
        .arg(hex_arg("o", "Hex-encoded owner password hash (/O)", true))
        .arg(hex_arg("u", "Hex-encoded user password hash (/U)", true))
        .arg(hex_arg("oe", "Hex-encoded /OE (AES-256 only)", false))
        .arg(hex_arg("ue", "Hex-encoded /UE (AES-256 only)", false))
        .arg(hex_arg("perms", "Hex-encoded /Perms (AES-256 only)", false))
        .arg(
            Arg::new("p")
                .long("p")
                .help("/P permission flags, as a signed 32-bit integer")
                .action(ArgAction::Set)
                .value_parser(value_parser!(i32))
                .required(true)
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("/V from the Encrypt dictionary")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u8))
                .required(true)
        )
        .arg(
            Arg::new("revision")
                .long("revision")
                .help("/R from the Encrypt dictionary")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u8))
                .required(true)
        )
        .arg(
            Arg::new("key-len")
                .long("key-len")
                .help("/Length in bytes (defaults to 5, the V1/R2 key length)")
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
                .default_value("5")
        )
        .arg(
            Arg::new("method")
                .long("method")
                .help("Crypt filter method named by /StmF's /CFM")
                .action(ArgAction::Set)
                .value_parser(["rc4", "aes128", "aes256"])
                .default_value("rc4")
        )
        .arg(
            Arg::new("no-encrypt-metadata")
                .long("no-encrypt-metadata")
                .help("/EncryptMetadata false")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("password")
                .long("password")
                .help("Candidate password to try (default: empty)")
                .action(ArgAction::Set)
                .default_value("")
        )
}

fn hex_arg(name: &'static str, help: &'static str, required: bool) -> Arg
{
    Arg::new(name)
        .long(name)
        .help(help)
        .action(ArgAction::Set)
        .required(required)
}
