//! A baseline (SOF0/SOF1) JPEG decoder.
//!
//! Scope is deliberately narrow: this only needs to pull pixel data out of
//! a `DCTDecode` image XObject embedded in a PDF, so progressive scans,
//! arithmetic coding, lossless JPEG and CMYK/YCCK frames are rejected with
//! [`errors::DecodeErrors::Unsupported`] rather than handled.
//!
//! ```no_run
//! use pdfcore_jpeg::JpegDecoder;
//!
//! let data = std::fs::read("image.jpg").unwrap();
//! let mut decoder = JpegDecoder::new(&data);
//! let info = decoder.decode_headers().unwrap();
//! let pixels = decoder.decode().unwrap();
//! println!("{}x{}, {} bytes", info.width, info.height, pixels.len());
//! ```

#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

pub use crate::decoder::{ImageInfo, JpegDecoder};

mod bitstream;
mod color_convert;
mod components;
mod decoder;
pub mod errors;
mod headers;
mod huffman;
mod idct;
mod marker;
mod mcu;
mod misc;
mod upsampler;
