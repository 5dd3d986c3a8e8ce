/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all crates in the pdfcore family
//!
//! This crate provides the set of routines shared across the bitstream,
//! CCITT, JPEG, Type 1 and security crates in this workspace:
//!
//! - A bytestream reader and writer with endian aware reads and writes
//! - A bit-level reader and writer (MSB-first), the shared primitive
//!   that the CCITT and JPEG entropy decoders are built on
//! - Colorspace and bit depth information shared by decoded rasters
//! - Decoder options
//!
//! This library is `#[no_std]` with `alloc` needed for `Vec`, which we
//! need for storing decoded bytes.
//!
//! # Features
//!  - `std`: Enables `std` facilities; off by default callers get
//!     `no_std` + `alloc` behavior.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub mod bit_depth;
pub mod bitstream;
pub mod bytestream;
pub mod colorspace;
pub mod options;
