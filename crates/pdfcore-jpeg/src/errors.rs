/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors produced while decoding a baseline JPEG.
use std::fmt::{Debug, Display, Formatter};

/// A frame type this decoder does not implement (see §4.C Stage 1).
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum UnsupportedSchemes
{
    /// SOF2 - progressive DCT, Huffman coding.
    ProgressiveDct,
    /// SOF3 - lossless, Huffman coding.
    Lossless,
    /// SOF9..SOF11 / DAC - arithmetic coding.
    Arithmetic,
    /// Any other SOFn marker this decoder has no case for.
    Other(u8)
}

impl UnsupportedSchemes
{
    pub(crate) fn from_sof(marker: u8) -> Self
    {
        match marker
        {
            2 => Self::ProgressiveDct,
            3 | 5 | 6 | 7 => Self::Lossless,
            9..=11 => Self::Arithmetic,
            n => Self::Other(n)
        }
    }
}

impl Debug for UnsupportedSchemes
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        match self
        {
            Self::ProgressiveDct => write!(f, "progressive DCT (SOF2)"),
            Self::Lossless => write!(f, "lossless (SOF3/5/6/7)"),
            Self::Arithmetic => write!(f, "arithmetic coding"),
            Self::Other(n) => write!(f, "SOF{n}")
        }
    }
}

/// All errors the JPEG decoder can return.
pub enum DecodeErrors
{
    /// The first two bytes of the stream were not `FF D8`.
    IllegalMagicBytes(u16),
    /// A frame type this decoder does not implement.
    Unsupported(UnsupportedSchemes),
    /// A Huffman prefix in the entropy-coded stream matched no code.
    HuffmanDecode(String),
    /// A marker segment's declared length or contents were malformed.
    Format(String),
    /// As [`Format`](Self::Format), for messages known at compile time.
    FormatStatic(&'static str),
    /// Image width or height in SOF was zero.
    ZeroDimensions,
    /// The entropy-coded stream ended before the image was fully decoded.
    TruncatedInput,
    /// Ran out of input while parsing a marker segment.
    UnexpectedEof
}

impl Debug for DecodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::IllegalMagicBytes(bytes) => write!(f, "Illegal starting bytes, expected 0xffd8, found {bytes:X}"),
            Self::Unsupported(scheme) => write!(f, "Unsupported JPEG feature: {scheme:?}"),
            Self::HuffmanDecode(reason) => write!(f, "Error decoding huffman code: {reason}"),
            Self::Format(reason) => write!(f, "{reason}"),
            Self::FormatStatic(reason) => write!(f, "{reason}"),
            Self::ZeroDimensions => write!(f, "Image width or height is zero"),
            Self::TruncatedInput => write!(f, "Entropy-coded stream ended before the image was fully decoded"),
            Self::UnexpectedEof => write!(f, "Ran out of bytes while parsing a marker segment")
        }
    }
}

impl Display for DecodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for DecodeErrors {}

impl From<pdfcore_core::bytestream::ZByteIoError> for DecodeErrors
{
    fn from(_: pdfcore_core::bytestream::ZByteIoError) -> Self
    {
        Self::UnexpectedEof
    }
}

#[allow(dead_code)]
pub(crate) fn format(args: std::fmt::Arguments) -> DecodeErrors
{
    DecodeErrors::Format(format!("{args}"))
}
