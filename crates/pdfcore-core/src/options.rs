//! Decoder options
//!
//! This module exposes a struct through which all decoders in the pdfcore
//! family take their configuration. All supported options are put into one
//! `DecoderOptions` so the same value can be threaded through JPEG and CCITT
//! decoding without each crate growing its own options type.

use crate::colorspace::ColorSpace;

/// Decoder options.
///
/// Not all options are respected by every decoder; each field documents
/// which decoders honor it.
///
/// To remove the annoyance of getters and setters, all exposed options are
/// declared public.
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions
{
    /// Maximum width for which decoders will not try to decode images
    /// larger than the specified width.
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    pub max_width: usize,
    /// Maximum height for which decoders will not try to decode images
    /// larger than the specified height.
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    pub max_height: usize,
    /// Treat some warnings as errors.
    ///
    /// Some inputs have recoverable errors, e.g a CCITT scanline that
    /// disagrees on pixel count with the header, or a JPEG without an
    /// EOI marker. When set to false this logs the condition via the
    /// `log` crate and recovers where possible. When set to true this
    /// returns an `Err` instead.
    ///
    /// - Default value: false
    /// - Respected by: `ccitt`, `jpeg`
    pub strict_mode: bool,
    /// Output colorspace.
    ///
    /// The JPEG decoder allows conversion to a separate colorspace than
    /// the frame's native one, i.e you can request `Luma` out of a
    /// 3-component frame without a caller-side conversion pass.
    ///
    /// - Default value: `ColorSpace::RGB`
    /// - Respected by: `jpeg`
    pub out_colorspace: ColorSpace
}

impl Default for DecoderOptions
{
    fn default() -> Self
    {
        Self {
            max_width:      1 << 14,
            max_height:     1 << 14,
            strict_mode:    false,
            out_colorspace: ColorSpace::RGB
        }
    }
}

impl DecoderOptions
{
    /// Create decoder options with all defaults.
    pub fn new_safe() -> DecoderOptions
    {
        DecoderOptions::default()
    }

    /// Get maximum width configured for which the decoder should not try
    /// to decode images greater than this width.
    pub const fn get_max_width(&self) -> usize
    {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should not
    /// try to decode images greater than this height.
    pub const fn get_max_height(&self) -> usize
    {
        self.max_height
    }

    /// Set maximum width for which the decoder should not try decoding
    /// images greater than that width.
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self
    {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try decoding
    /// images greater than that height.
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self
    {
        self.max_height = height;
        self
    }

    /// Return true whether the decoder should be in strict mode and
    /// reject recoverable errors instead of logging and continuing.
    pub const fn get_strict_mode(&self) -> bool
    {
        self.strict_mode
    }

    /// Set whether the decoder should be in standards-conforming strict
    /// mode. This reduces error tolerance: conditions that would
    /// otherwise be logged and recovered from are instead returned as
    /// an `Err`.
    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self
    {
        self.strict_mode = yes;
        self
    }

    /// Get expected output colorspace set by the caller for which the
    /// image is expected to be reconstructed into.
    pub const fn jpeg_get_out_colorspace(&self) -> ColorSpace
    {
        self.out_colorspace
    }

    /// Set expected colorspace for which the JPEG output is expected to
    /// be in.
    ///
    /// This is provided as-is; not every input colorspace can convert to
    /// every requested output colorspace, and the decoder returns an
    /// error if the conversion is not supported.
    #[must_use]
    pub fn jpeg_set_out_colorspace(mut self, colorspace: ColorSpace) -> Self
    {
        self.out_colorspace = colorspace;
        self
    }
}
