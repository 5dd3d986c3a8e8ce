//! CCITT Group 3/Group 4 decoding.

use pdfcore_core::bitstream::{BitReader, BitWriter};

use crate::error::CcittError;
use crate::options::{CcittOptions, EncodingMode};
use crate::state::{Color, ColorChange, ReferenceLine};
use crate::tables::{
    Mode, BLACK_MAKEUP, BLACK_TERMINATING, EOL_BITS, EOL_CODE, EXTENDED_MAKEUP, MODE_CODES, WHITE_MAKEUP,
    WHITE_TERMINATING
};

/// Decode a CCITT-compressed bilevel image into a packed bitmap.
///
/// The returned buffer holds `ceil(opts.columns / 8) * rows_decoded` bytes:
/// one row per scanline, each row padded to a whole byte, bits MSB-first.
/// A set bit means black when `opts.black_is_1` is set, white otherwise.
///
/// Row-local failures (an unmatched Huffman prefix, or a row whose decoded
/// pixel count does not equal `opts.columns`) are logged and the row is
/// kept as decoded so far, zero (white) padded to `opts.columns`; decoding
/// then resumes at the next row. This function only returns `Err` for a
/// configuration that cannot produce any row at all.
pub fn decompress(data: &[u8], opts: &CcittOptions) -> Result<Vec<u8>, CcittError>
{
    if opts.columns == 0
    {
        return Err(CcittError::WidthOverflow(0));
    }

    let width = opts.columns as usize;
    let mut reader = BitReader::new(data);
    let mut reference = ReferenceLine::all_white(opts.columns);
    let mut rows: Vec<Vec<bool>> = Vec::new();

    loop
    {
        if opts.rows > 0 && rows.len() as u32 >= opts.rows
        {
            break;
        }
        if reader.is_at_end()
        {
            break;
        }

        if matches!(opts.encoding, EncodingMode::Group3_1D | EncodingMode::Group3_2D { .. })
        {
            let eol_count = consume_eols(&mut reader);
            if opts.end_of_block && eol_count >= 6
            {
                break;
            }
        }
        else if opts.end_of_block && peek_eofb(&mut reader)
        {
            reader.skip_bits(2 * EOL_BITS);
            break;
        }

        if reader.is_at_end()
        {
            break;
        }

        let is_2d = match opts.encoding
        {
            EncodingMode::Group4 => true,
            EncodingMode::Group3_1D => false,
            EncodingMode::Group3_2D { .. } => !reader.read_bit()
        };

        let (mut pixels, changes, exact) = if is_2d
        {
            decode_2d_row(&mut reader, &reference, width)
        }
        else
        {
            decode_1d_row(&mut reader, width)
        };

        if !exact
        {
            log::warn!(
                "ccitt: row {} decoded {} of {} pixels, padding with white and continuing",
                rows.len(),
                pixels.len(),
                width
            );
            pixels.resize(width, false);
        }

        reference = ReferenceLine::from_changes(changes);
        rows.push(pixels);

        if opts.encoded_byte_align
        {
            reader.align_to_byte();
        }
    }

    Ok(pack_rows(&rows, width, opts.black_is_1))
}

/// A bi-level row under construction, tracking both its pixels and the
/// colour-change positions a following 2-D row needs as its reference.
struct RowBuilder
{
    pixels:  Vec<bool>,
    changes: Vec<ColorChange>
}

impl RowBuilder
{
    fn new() -> Self
    {
        Self { pixels: Vec::new(), changes: Vec::new() }
    }

    /// Append `count` pixels of `color`. A colour change is only recorded
    /// when it differs from the last recorded change (an imaginary white
    /// pixel precedes the row, so the very first change is only recorded
    /// if `color` is black) — a zero-length run, or a run whose colour
    /// matches the running colour (as happens in Pass mode), extends the
    /// current run without adding a new reference-line entry.
    fn push(&mut self, color: Color, count: usize)
    {
        if count == 0
        {
            return;
        }
        let is_change = self.changes.last().map_or(!color.is_white(), |c| c.color != color);
        if is_change
        {
            self.changes.push(ColorChange { idx: self.pixels.len() as u32, color });
        }
        self.pixels.extend(core::iter::repeat(color == Color::Black).take(count));
    }
}

fn decode_1d_row(reader: &mut BitReader, width: usize) -> (Vec<bool>, Vec<ColorChange>, bool)
{
    let mut row = RowBuilder::new();
    let mut color = Color::White;

    while row.pixels.len() < width
    {
        let run = match decode_run(reader, color)
        {
            Ok(r) => r as usize,
            Err(_) => return (row.pixels, row.changes, false)
        };
        let take = run.min(width - row.pixels.len());
        row.push(color, take);
        color = color.opposite();
        if take != run
        {
            return (row.pixels, row.changes, false);
        }
    }

    let exact = row.pixels.len() == width;
    (row.pixels, row.changes, exact)
}

fn decode_2d_row(reader: &mut BitReader, reference: &ReferenceLine, width: usize) -> (Vec<bool>, Vec<ColorChange>, bool)
{
    let mut row = RowBuilder::new();
    let mut color = Color::White;
    let mut a0: Option<u32> = None;
    let w = width as u32;

    while row.pixels.len() < width
    {
        let mode = match decode_mode(reader)
        {
            Ok(m) => m,
            Err(_) => return (row.pixels, row.changes, false)
        };

        let pos = row.pixels.len() as u32;

        match mode
        {
            Mode::Pass =>
            {
                let b1 = reference.b1(a0, color, w);
                let b2 = reference.b2(b1, w);
                let run = b2.saturating_sub(pos).min(w - pos);
                row.push(color, run as usize);
                a0 = Some(b2);
            }
            Mode::Horizontal =>
            {
                let r1 = match decode_run(reader, color)
                {
                    Ok(r) => r,
                    Err(_) => return (row.pixels, row.changes, false)
                };
                let take1 = (r1 as u32).min(w - pos);
                row.push(color, take1 as usize);

                let other = color.opposite();
                let r2 = match decode_run(reader, other)
                {
                    Ok(r) => r,
                    Err(_) => return (row.pixels, row.changes, false)
                };
                let pos2 = row.pixels.len() as u32;
                let take2 = (r2 as u32).min(w - pos2);
                row.push(other, take2 as usize);

                a0 = Some(row.pixels.len() as u32);
            }
            Mode::Vertical(d) =>
            {
                let b1 = reference.b1(a0, color, w);
                let a1 = b1.saturating_add_signed(i32::from(d)).min(w);
                let run = a1.saturating_sub(pos);
                row.push(color, run as usize);
                a0 = Some(a1);
                color = color.opposite();
            }
        }
    }

    let exact = row.pixels.len() == width;
    (row.pixels, row.changes, exact)
}

/// Decode one run length: zero or more make-up codes followed by exactly
/// one terminating code (T.4 section 4.1).
pub(crate) fn decode_run(reader: &mut BitReader, color: Color) -> Result<u32, CcittError>
{
    let (terminating, makeup) = match color
    {
        Color::White => (WHITE_TERMINATING, WHITE_MAKEUP),
        Color::Black => (BLACK_TERMINATING, BLACK_MAKEUP)
    };

    let mut total: u32 = 0;
    loop
    {
        if let Some(run) = lookup_code(reader, terminating)
        {
            total += u32::from(run);
            return Ok(total);
        }
        if let Some(run) = lookup_code(reader, makeup)
        {
            total += u32::from(run);
            continue;
        }
        if let Some(run) = lookup_code(reader, EXTENDED_MAKEUP)
        {
            total += u32::from(run);
            continue;
        }
        return Err(CcittError::InvalidRunCode);
    }
}

fn decode_mode(reader: &mut BitReader) -> Result<Mode, CcittError>
{
    for len in 1..=7u8
    {
        let probe = reader.peek_bits(len) as u16;
        for &(bits, code, mode) in MODE_CODES
        {
            if bits == len && code == probe
            {
                reader.skip_bits(len);
                return Ok(mode);
            }
        }
    }
    Err(CcittError::InvalidModeCode)
}

/// Try every code in `table`, shortest prefix first (the tables are
/// prefix-free, so a match at a given length is the only match).
fn lookup_code(reader: &mut BitReader, table: &[(u8, u16, u16)]) -> Option<u16>
{
    let max_len = table.iter().map(|&(bits, _, _)| bits).max().unwrap_or(0);
    for len in 1..=max_len
    {
        let probe = reader.peek_bits(len) as u16;
        for &(bits, code, run) in table
        {
            if bits == len && code == probe
            {
                reader.skip_bits(len);
                return Some(run);
            }
        }
    }
    None
}

fn consume_eols(reader: &mut BitReader) -> u32
{
    let mut count = 0;
    while !reader.is_at_end() && reader.peek_bits(EOL_BITS) as u16 == EOL_CODE
    {
        reader.skip_bits(EOL_BITS);
        count += 1;
    }
    count
}

fn peek_eofb(reader: &mut BitReader) -> bool
{
    let probe = reader.peek_bits(2 * EOL_BITS);
    let eofb = (u32::from(EOL_CODE) << EOL_BITS) | u32::from(EOL_CODE);
    probe == eofb
}

fn pack_rows(rows: &[Vec<bool>], width: usize, black_is_1: bool) -> Vec<u8>
{
    let mut writer = BitWriter::new();
    for row in rows
    {
        for i in 0..width
        {
            let is_black = row.get(i).copied().unwrap_or(false);
            let bit = if black_is_1 { is_black } else { !is_black };
            writer.write_bit(bit);
        }
        writer.align_to_byte();
    }
    writer.finish()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn decode_run_reads_white_terminating_code()
    {
        // White run of 2 is 0111 (4 bits), left-justified in the byte.
        let data = [0b0111_0000];
        let mut reader = BitReader::new(&data);
        assert_eq!(decode_run(&mut reader, Color::White).unwrap(), 2);
    }

    #[test]
    fn decode_run_chains_makeup_then_terminating()
    {
        // White make-up 64 is 11011 (5 bits), followed by white
        // terminating 2, 0111 (4 bits) => run of 66.
        let mut w = BitWriter::new();
        w.write_bits(0b11011, 5);
        w.write_bits(0b0111, 4);
        let data = w.finish();

        let mut reader = BitReader::new(&data);
        assert_eq!(decode_run(&mut reader, Color::White).unwrap(), 66);
    }

    #[test]
    fn decode_mode_reads_vertical_zero()
    {
        let data = [0b1000_0000];
        let mut reader = BitReader::new(&data);
        assert_eq!(decode_mode(&mut reader).unwrap(), Mode::Vertical(0));
    }

    #[test]
    fn decode_mode_reads_pass()
    {
        let data = [0b0001_0000];
        let mut reader = BitReader::new(&data);
        assert_eq!(decode_mode(&mut reader).unwrap(), Mode::Pass);
    }

    #[test]
    fn row_pixel_count_mismatch_is_logged_and_padded()
    {
        // Request a 16-wide row but only supply a single white run of 4,
        // leaving no further valid codes: the row should come back padded
        // to width with `exact = false`.
        let mut w = BitWriter::new();
        w.write_bits(0b1011, 4); // white run of 4
        let data = w.finish();

        let mut reader = BitReader::new(&data);
        let (pixels, _changes, exact) = decode_1d_row(&mut reader, 16);
        assert!(!exact);
        assert_eq!(pixels.len(), 4);
    }
}
