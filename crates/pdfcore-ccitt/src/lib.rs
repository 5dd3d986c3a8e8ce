/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A CCITT Group 3 / Group 4 fax decoder and encoder for bi-level images.
//!
//! This crate implements the Modified Huffman (1-D), Modified READ (2-D,
//! Group 3), and Modified Modified READ (Group 4) schemes from ITU-T T.4
//! and T.6, as used by the PDF `CCITTFaxDecode` filter.
mod decode;
mod encode;
mod error;
mod options;
mod state;
mod tables;

pub use decode::decompress;
pub use encode::compress;
pub use error::CcittError;
pub use options::{CcittOptions, EncodingMode};
