//! A single-call wrapper around [`pdfcore_jpeg::JpegDecoder`] for callers
//! that just want the pixels out of a `DCTDecode` image XObject.
use pdfcore_core::options::DecoderOptions;
pub use pdfcore_jpeg::{errors::DecodeErrors, ImageInfo, JpegDecoder};

/// Decode a baseline JPEG byte stream to interleaved pixel data, using
/// default decoder options.
pub fn decode(data: &[u8]) -> Result<(ImageInfo, Vec<u8>), DecodeErrors>
{
    decode_with_options(data, DecoderOptions::default())
}

/// Decode a baseline JPEG byte stream with caller-supplied limits (max
/// dimensions, strict mode, output colorspace).
pub fn decode_with_options(data: &[u8], options: DecoderOptions) -> Result<(ImageInfo, Vec<u8>), DecodeErrors>
{
    let mut decoder = JpegDecoder::new_with_options(data, options);
    let info = decoder.decode_headers()?;
    let pixels = decoder.decode()?;
    Ok((info, pixels))
}
