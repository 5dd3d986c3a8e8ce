//! Top-level decoder: marker scanning and the public decode entry point.

use pdfcore_core::bytestream::{ZCursor, ZReader};
use pdfcore_core::colorspace::ColorSpace;
use pdfcore_core::options::DecoderOptions;

use crate::components::Component;
use crate::errors::{DecodeErrors, UnsupportedSchemes};
use crate::huffman::HuffmanTable;
use crate::marker::Marker;
use crate::{headers, mcu};

/// Dimensions and component layout discovered while parsing the frame and
/// scan headers, available after [`JpegDecoder::decode_headers`].
#[derive(Clone, Debug)]
pub struct ImageInfo
{
    pub width:          u16,
    pub height:         u16,
    pub components:     usize,
    pub out_colorspace: ColorSpace
}

/// A baseline (SOF0/SOF1) JPEG decoder.
pub struct JpegDecoder<'a>
{
    data:    &'a [u8],
    options: DecoderOptions,

    pub(crate) width:  u16,
    pub(crate) height: u16,

    pub(crate) components: Vec<Component>,
    pub(crate) qt_tables: [Option<[u16; 64]>; 4],
    pub(crate) dc_huffman_tables: [Option<HuffmanTable>; 4],
    pub(crate) ac_huffman_tables: [Option<HuffmanTable>; 4],
    pub(crate) restart_interval: u16,
    pub(crate) scan_order: Vec<u8>,

    headers_decoded: bool,
    entropy_offset:  usize
}

impl<'a> JpegDecoder<'a>
{
    pub fn new(data: &'a [u8]) -> JpegDecoder<'a>
    {
        Self::new_with_options(data, DecoderOptions::default())
    }

    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> JpegDecoder<'a>
    {
        JpegDecoder {
            data,
            options,
            width: 0,
            height: 0,
            components: Vec::new(),
            qt_tables: [None, None, None, None],
            dc_huffman_tables: [None, None, None, None],
            ac_huffman_tables: [None, None, None, None],
            restart_interval: 0,
            scan_order: Vec::new(),
            headers_decoded: false,
            entropy_offset: 0
        }
    }

    /// Parse every marker segment up to and including the first SOS,
    /// leaving the decoder positioned to decode the entropy-coded scan
    /// that follows.
    pub fn decode_headers(&mut self) -> Result<ImageInfo, DecodeErrors>
    {
        if self.headers_decoded
        {
            return Ok(self.image_info());
        }

        let mut reader = ZReader::new(ZCursor::new(self.data));

        let marker = next_marker(&mut reader)?;
        if marker != Some(Marker::SOI)
        {
            return Err(DecodeErrors::IllegalMagicBytes(0));
        }

        loop
        {
            match next_marker(&mut reader)?
            {
                Some(Marker::SOF(0)) | Some(Marker::SOF(1)) =>
                {
                    let (width, height, components) = headers::parse_sof(&mut reader, &self.options)?;
                    self.width = width;
                    self.height = height;
                    self.components = components;
                }
                Some(Marker::SOF(n)) =>
                {
                    return Err(DecodeErrors::Unsupported(UnsupportedSchemes::from_sof(0xC0 + n)));
                }
                Some(Marker::DQT) =>
                {
                    headers::parse_dqt(&mut reader, &mut self.qt_tables)?;
                }
                Some(Marker::DHT) =>
                {
                    headers::parse_dht(&mut reader, &mut self.dc_huffman_tables, &mut self.ac_huffman_tables)?;
                }
                Some(Marker::DRI) =>
                {
                    self.restart_interval = headers::parse_dri(&mut reader)?;
                }
                Some(Marker::SOS) =>
                {
                    if self.components.is_empty()
                    {
                        return Err(DecodeErrors::FormatStatic("SOS encountered before any SOF"));
                    }
                    self.scan_order = headers::parse_sos(&mut reader, &mut self.components)?;
                    self.entropy_offset = usize::try_from(reader.position()?).unwrap_or(self.data.len());
                    break;
                }
                Some(Marker::APP(_)) | Some(Marker::COM) =>
                {
                    headers::skip_segment(&mut reader)?;
                }
                Some(Marker::EOI) =>
                {
                    return Err(DecodeErrors::FormatStatic("Reached end of image before any scan data"));
                }
                Some(Marker::RST(_)) | Some(Marker::SOI) =>
                {
                    // Stray marker between segments; ignore and keep scanning.
                }
                Some(Marker::Other(_)) | None =>
                {
                    headers::skip_segment(&mut reader)?;
                }
            }
        }

        self.headers_decoded = true;
        Ok(self.image_info())
    }

    fn image_info(&self) -> ImageInfo
    {
        ImageInfo {
            width:          self.width,
            height:         self.height,
            components:     self.components.len(),
            out_colorspace: self.options.jpeg_get_out_colorspace()
        }
    }

    pub fn dimensions(&self) -> (u16, u16)
    {
        (self.width, self.height)
    }

    pub fn options(&self) -> &DecoderOptions
    {
        &self.options
    }

    /// Decode the full image into interleaved samples of
    /// `options().jpeg_get_out_colorspace()`.
    pub fn decode(&mut self) -> Result<Vec<u8>, DecodeErrors>
    {
        self.decode_headers()?;
        let entropy_data = &self.data[self.entropy_offset..];
        mcu::decode_scan(self, entropy_data)
    }
}

/// Scan forward to the next marker, skipping any `0xFF` fill bytes, and
/// classify it.
fn next_marker(reader: &mut ZReader<ZCursor<&[u8]>>) -> Result<Option<Marker>, DecodeErrors>
{
    loop
    {
        let byte = reader.read_u8_err()?;
        if byte != 0xFF
        {
            continue;
        }
        let mut next = reader.read_u8_err()?;
        while next == 0xFF
        {
            next = reader.read_u8_err()?;
        }
        if next == 0x00
        {
            continue;
        }
        return Ok(Marker::from_u8(next));
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn decode_headers_without_sos_is_an_error_not_a_panic()
    {
        // SOI immediately followed by EOI: well-formed markers, but no
        // SOF/SOS ever appears.
        let data = [0xFF, 0xD8, 0xFF, 0xD9];
        let mut decoder = JpegDecoder::new_with_options(&data, DecoderOptions::default());
        assert!(decoder.decode_headers().is_err());
    }

    #[test]
    fn progressive_sof2_is_reported_as_unsupported()
    {
        // SOI, SOF2 with a minimal (truncated) length so the error fires
        // before any length-dependent parsing would panic.
        let data = [0xFF, 0xD8, 0xFF, 0xC2, 0x00, 0x00];
        let mut decoder = JpegDecoder::new_with_options(&data, DecoderOptions::default());
        assert!(matches!(decoder.decode_headers(), Err(DecodeErrors::Unsupported(_))));
    }
}
