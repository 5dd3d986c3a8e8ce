//! Marker segment parsing (ITU-T T.81 Annex B).

use pdfcore_core::bytestream::{ZCursor, ZReader};
use pdfcore_core::options::DecoderOptions;

use crate::components::Component;
use crate::errors::DecodeErrors;
use crate::huffman::HuffmanTable;

type Reader<'a> = ZReader<ZCursor<&'a [u8]>>;

/// Parse an SOF0/SOF1 frame header: sample precision, dimensions and the
/// per-component sampling/quantization-table assignments.
pub fn parse_sof(reader: &mut Reader, options: &DecoderOptions) -> Result<(u16, u16, Vec<Component>), DecodeErrors>
{
    let _length = reader.get_u16_be_err()?;
    let precision = reader.read_u8_err()?;
    if precision != 8
    {
        return Err(DecodeErrors::FormatStatic("Only 8-bit sample precision is supported"));
    }

    let height = reader.get_u16_be_err()?;
    let width = reader.get_u16_be_err()?;
    if width == 0 || height == 0
    {
        return Err(DecodeErrors::ZeroDimensions);
    }
    if usize::from(width) > options.get_max_width() || usize::from(height) > options.get_max_height()
    {
        return Err(DecodeErrors::FormatStatic("Image dimensions exceed the configured maximum"));
    }

    let num_components = reader.read_u8_err()?;
    if num_components == 0 || num_components > 3
    {
        // 4-component (CMYK/YCCK) frames are out of scope for a PDF
        // image-XObject decoder: PDF represents CMYK image data directly
        // rather than wrapping it in a JPEG with an Adobe APP14 marker.
        return Err(DecodeErrors::FormatStatic("Only 1- or 3-component (grayscale/YCbCr) frames are supported"));
    }

    let mut components = Vec::with_capacity(usize::from(num_components));
    for _ in 0..num_components
    {
        let id = reader.read_u8_err()?;
        let sampling = reader.read_u8_err()?;
        let qt_id = reader.read_u8_err()?;
        let h = sampling >> 4;
        let v = sampling & 0x0F;
        if h == 0 || h > 4 || v == 0 || v > 4
        {
            return Err(DecodeErrors::FormatStatic("Invalid component sampling factor"));
        }
        components.push(Component::new(id, h, v, qt_id));
    }

    Ok((width, height, components))
}

/// Parse a DQT segment, storing each table exactly as it appears on the
/// wire (zig-zag scan order); un-zig-zagging happens at dequantization
/// time, alongside the IDCT, not here.
pub fn parse_dqt(reader: &mut Reader, qt_tables: &mut [Option<[u16; 64]>; 4]) -> Result<(), DecodeErrors>
{
    let length = usize::from(reader.get_u16_be_err()?);
    let mut remaining = length.checked_sub(2).ok_or(DecodeErrors::FormatStatic("DQT segment length too short"))?;

    while remaining > 0
    {
        let pq_tq = reader.read_u8_err()?;
        remaining -= 1;
        let precision = pq_tq >> 4;
        let id = usize::from(pq_tq & 0x0F);
        if id >= 4
        {
            return Err(DecodeErrors::FormatStatic("DQT references a table index >= 4"));
        }

        let mut table = [0u16; 64];
        for slot in table.iter_mut()
        {
            if precision == 0
            {
                *slot = u16::from(reader.read_u8_err()?);
                remaining = remaining.checked_sub(1).ok_or(DecodeErrors::FormatStatic("DQT segment too short"))?;
            }
            else
            {
                *slot = reader.get_u16_be_err()?;
                remaining = remaining.checked_sub(2).ok_or(DecodeErrors::FormatStatic("DQT segment too short"))?;
            }
        }
        qt_tables[id] = Some(table);
    }

    Ok(())
}

/// Parse a DHT segment, building one [`HuffmanTable`] per table definition
/// it contains (a segment may define several).
pub fn parse_dht(
    reader: &mut Reader, dc_tables: &mut [Option<HuffmanTable>; 4], ac_tables: &mut [Option<HuffmanTable>; 4]
) -> Result<(), DecodeErrors>
{
    let length = usize::from(reader.get_u16_be_err()?);
    let mut remaining = length.checked_sub(2).ok_or(DecodeErrors::FormatStatic("DHT segment length too short"))?;

    while remaining > 0
    {
        let tc_th = reader.read_u8_err()?;
        remaining = remaining.checked_sub(1).ok_or(DecodeErrors::FormatStatic("DHT segment too short"))?;
        let is_ac = (tc_th >> 4) != 0;
        let id = usize::from(tc_th & 0x0F);
        if id >= 4
        {
            return Err(DecodeErrors::FormatStatic("DHT references a table index >= 4"));
        }

        let mut bits = [0u8; 16];
        let mut total = 0usize;
        for b in bits.iter_mut()
        {
            *b = reader.read_u8_err()?;
            total += usize::from(*b);
        }
        remaining = remaining.checked_sub(16).ok_or(DecodeErrors::FormatStatic("DHT segment too short"))?;

        let mut symbols = Vec::with_capacity(total);
        for _ in 0..total
        {
            symbols.push(reader.read_u8_err()?);
        }
        remaining = remaining.checked_sub(total).ok_or(DecodeErrors::FormatStatic("DHT segment too short"))?;

        let table = HuffmanTable::new(&bits, symbols)?;
        if is_ac
        {
            ac_tables[id] = Some(table);
        }
        else
        {
            dc_tables[id] = Some(table);
        }
    }

    Ok(())
}

/// Parse a DRI segment, returning the restart interval in MCUs (0 means
/// restart markers are not used).
pub fn parse_dri(reader: &mut Reader) -> Result<u16, DecodeErrors>
{
    let _length = reader.get_u16_be_err()?;
    reader.get_u16_be_err().map_err(Into::into)
}

/// Parse an SOS header, wiring each scan component to the DC/AC Huffman
/// tables it names and returning the components in scan order.
pub fn parse_sos(reader: &mut Reader, components: &mut [Component]) -> Result<Vec<u8>, DecodeErrors>
{
    let _length = reader.get_u16_be_err()?;
    let ns = reader.read_u8_err()?;
    if ns == 0 || usize::from(ns) > components.len()
    {
        return Err(DecodeErrors::FormatStatic("SOS scan component count does not match the frame"));
    }

    let mut scan_order = Vec::with_capacity(usize::from(ns));
    for _ in 0..ns
    {
        let id = reader.read_u8_err()?;
        let td_ta = reader.read_u8_err()?;
        let component = components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DecodeErrors::FormatStatic("SOS references a component id absent from SOF"))?;
        component.dc_huffman_table = td_ta >> 4;
        component.ac_huffman_table = td_ta & 0x0F;
        scan_order.push(id);
    }

    let spectral_start = reader.read_u8_err()?;
    let spectral_end = reader.read_u8_err()?;
    let _approx = reader.read_u8_err()?;
    if spectral_start != 0 || spectral_end != 63
    {
        return Err(DecodeErrors::Unsupported(crate::errors::UnsupportedSchemes::ProgressiveDct));
    }

    Ok(scan_order)
}

/// Skip an APPn/COM/other length-prefixed segment this decoder has no use
/// for (EXIF, XMP, ICC profiles, Adobe colour-transform hints, and so on
/// are all out of scope).
pub fn skip_segment(reader: &mut Reader) -> Result<(), DecodeErrors>
{
    let length = usize::from(reader.get_u16_be_err()?);
    reader.skip(length.saturating_sub(2))?;
    Ok(())
}
