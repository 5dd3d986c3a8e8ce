/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;

use clap::ArgMatches;
use log::info;
use pdfcore::ccitt::{compress, decompress, CcittOptions, EncodingMode};
use pdfcore::crypt::{authenticate, CryptMethod, EncryptionParams};
use pdfcore::jpeg::decode_with_options;
use pdfcore::type1::parse as parse_type1;
use pdfcore_core::options::DecoderOptions;

use crate::file_io::{decode_hex, read_file, write_file};

/// Dispatches to the subcommand named by `options`, the CLI's one entry
/// point after argument parsing and logger setup.
pub fn run(options: &ArgMatches) -> Result<(), String>
{
    match options.subcommand()
    {
        Some(("ccitt-decode", sub)) => ccitt_decode(sub),
        Some(("ccitt-encode", sub)) => ccitt_encode(sub),
        Some(("jpeg-decode", sub)) => jpeg_decode(sub),
        Some(("type1-dump", sub)) => type1_dump(sub),
        Some(("crypt-authenticate", sub)) => crypt_authenticate(sub),
        _ => unreachable!("clap enforces subcommand_required")
    }
}

fn ccitt_options(sub: &ArgMatches) -> CcittOptions
{
    let group = match sub.get_one::<String>("group").map(String::as_str)
    {
        Some("g3-1d") => EncodingMode::Group3_1D,
        Some("g3-2d") => EncodingMode::Group3_2D {
            k: *sub.get_one::<i32>("k").unwrap()
        },
        _ => EncodingMode::Group4
    };

    CcittOptions::default()
        .set_columns(*sub.get_one::<u32>("columns").unwrap())
        .set_rows(*sub.get_one::<u32>("rows").unwrap())
        .set_encoding(group)
        .set_black_is_1(sub.get_flag("black-is-1"))
        .set_encoded_byte_align(sub.get_flag("byte-align"))
}

fn ccitt_decode(sub: &ArgMatches) -> Result<(), String>
{
    let mut opts = ccitt_options(sub);
    opts.end_of_line = sub.get_flag("eol");
    opts.end_of_block = !sub.get_flag("no-end-of-block");

    let input = read_file(sub.get_one::<std::ffi::OsString>("in").unwrap()).map_err(|e| e.to_string())?;
    let bitmap = decompress(&input, &opts).map_err(|e| format!("{e:?}"))?;
    write_output(sub, &bitmap)
}

fn ccitt_encode(sub: &ArgMatches) -> Result<(), String>
{
    let mut opts = ccitt_options(sub);
    opts.end_of_block = !sub.get_flag("no-end-of-block");

    let input = read_file(sub.get_one::<std::ffi::OsString>("in").unwrap()).map_err(|e| e.to_string())?;
    let encoded = compress(&input, &opts).map_err(|e| format!("{e:?}"))?;
    write_output(sub, &encoded)
}

fn jpeg_decode(sub: &ArgMatches) -> Result<(), String>
{
    let input = read_file(sub.get_one::<std::ffi::OsString>("in").unwrap()).map_err(|e| e.to_string())?;
    let (info, pixels) = decode_with_options(&input, DecoderOptions::default()).map_err(|e| format!("{e:?}"))?;
    info!("decoded {}x{} ({} components)", info.width, info.height, info.components);

    let components = info.out_colorspace.num_components().max(1);
    let magic = if components == 1 { "P5" } else { "P6" };
    let mut ppm = format!("{magic}\n{} {}\n255\n", info.width, info.height).into_bytes();
    ppm.extend_from_slice(&pixels);
    write_output(sub, &ppm)
}

fn type1_dump(sub: &ArgMatches) -> Result<(), String>
{
    let data = read_file(sub.get_one::<std::ffi::OsString>("in").unwrap()).map_err(|e| e.to_string())?;
    let length1 = sub.get_one::<usize>("length1").copied();
    let length2 = sub.get_one::<usize>("length2").copied();

    let font = parse_type1(&data, length1, length2).map_err(|e| format!("{e:?}"))?;

    match sub.get_one::<String>("glyph")
    {
        Some(name) =>
        {
            let glyph = pdfcore::type1::outline(&font, name)
                .map_err(|e| format!("{e:?}"))?
                .ok_or_else(|| format!("font has no glyph named {name:?}"))?;
            println!("{name}: advance_width={:?} side_bearing={:?}", glyph.advance_width, glyph.side_bearing);
            for op in &glyph.path
            {
                println!("  {op:?}");
            }
        }
        None =>
        {
            println!("FontName: {:?}", font.header.font_name);
            println!("FamilyName: {:?}", font.header.family_name);
            println!("FullName: {:?}", font.header.full_name);
            let mut names: Vec<&str> = font.glyph_names().collect();
            names.sort_unstable();
            println!("{} glyphs: {}", names.len(), names.join(", "));
        }
    }
    Ok(())
}

fn crypt_authenticate(sub: &ArgMatches) -> Result<(), String>
{
    let method = match sub.get_one::<String>("method").map(String::as_str)
    {
        Some("aes128") => CryptMethod::Aes128,
        Some("aes256") => CryptMethod::Aes256,
        _ => CryptMethod::Rc4
    };

    let params = EncryptionParams {
        version: *sub.get_one::<u8>("version").unwrap(),
        revision: *sub.get_one::<u8>("revision").unwrap(),
        key_len_bytes: *sub.get_one::<usize>("key-len").unwrap(),
        o: decode_hex(sub.get_one::<String>("o").unwrap())?,
        u: decode_hex(sub.get_one::<String>("u").unwrap())?,
        oe: optional_hex(sub, "oe")?,
        ue: optional_hex(sub, "ue")?,
        perms: optional_hex(sub, "perms")?,
        p: *sub.get_one::<i32>("p").unwrap(),
        document_id: decode_hex(sub.get_one::<String>("id").unwrap())?,
        encrypt_metadata: !sub.get_flag("no-encrypt-metadata"),
        method
    };

    let password = sub.get_one::<String>("password").unwrap().as_bytes();
    let handler = authenticate(&params, password).map_err(|e| format!("{e:?}"))?;

    println!("authenticated as: {:?}", handler.authenticated_as);
    println!("permissions: {:?}", handler.permissions);
    Ok(())
}

fn optional_hex(sub: &ArgMatches, name: &str) -> Result<Option<Vec<u8>>, String>
{
    match sub.get_one::<String>(name)
    {
        Some(s) => Ok(Some(decode_hex(s)?)),
        None => Ok(None)
    }
}

fn write_output(sub: &ArgMatches, data: &[u8]) -> Result<(), String>
{
    let out: &OsStr = sub.get_one::<std::ffi::OsString>("out").unwrap();
    write_file(out, data).map_err(|e| e.to_string())
}
