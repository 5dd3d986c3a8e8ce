//! CCITT Group 3/Group 4 encoding.

use pdfcore_core::bitstream::BitWriter;

use crate::error::CcittError;
use crate::options::{CcittOptions, EncodingMode};
use crate::state::{Color, ColorChange, ReferenceLine};
use crate::tables::{
    Mode, BLACK_MAKEUP, BLACK_TERMINATING, EOL_BITS, EOL_CODE, EXTENDED_MAKEUP, MODE_CODES, WHITE_MAKEUP,
    WHITE_TERMINATING
};

/// Encode a packed bilevel bitmap (the same layout `decompress` returns)
/// into a CCITT bitstream.
///
/// The encoder's mode choice at each step follows the tie-breaking rule in
/// T.4 section 4.2.1.3: prefer Vertical when `|a1 - b1| <= 3`, else prefer
/// Pass when `b2 < a1`, else Horizontal. A terminator (EOFB for Group 4,
/// RTC for Group 3) is appended only when `opts.end_of_block` is set.
pub fn compress(bitmap: &[u8], opts: &CcittOptions) -> Result<Vec<u8>, CcittError>
{
    if opts.columns == 0
    {
        return Err(CcittError::WidthOverflow(0));
    }

    let width = opts.columns as usize;
    let row_bytes = width.div_ceil(8);
    if row_bytes == 0
    {
        return Err(CcittError::WidthOverflow(width));
    }

    let available_rows = bitmap.len() / row_bytes;
    let rows_count = if opts.rows > 0 { (opts.rows as usize).min(available_rows) } else { available_rows };

    let mut writer = BitWriter::new();
    let mut reference = ReferenceLine::all_white(opts.columns);

    for r in 0..rows_count
    {
        let row_start = r * row_bytes;
        let row_slice = &bitmap[row_start..row_start + row_bytes];
        let pixels = unpack_row(row_slice, width, opts.black_is_1);
        let changes = changes_of_row(&pixels);

        if opts.end_of_line
        {
            writer.write_bits(u32::from(EOL_CODE), EOL_BITS);
        }

        match opts.encoding
        {
            EncodingMode::Group3_1D => encode_1d_row(&mut writer, &changes, opts.columns),
            EncodingMode::Group4 => encode_2d_row(&mut writer, &changes, &reference, opts.columns),
            EncodingMode::Group3_2D { .. } =>
            {
                // Mixed mode: a leading tag bit selects 1-D (1) or 2-D (0)
                // for this row (T.4 section 4.2). Coding every row 2-D
                // keeps the encoder simple and is always a legal choice.
                writer.write_bit(false);
                encode_2d_row(&mut writer, &changes, &reference, opts.columns);
            }
        }

        reference = ReferenceLine::from_changes(changes);

        if opts.encoded_byte_align
        {
            writer.align_to_byte();
        }
    }

    if opts.end_of_block
    {
        match opts.encoding
        {
            EncodingMode::Group4 =>
            {
                writer.write_bits(u32::from(EOL_CODE), EOL_BITS);
                writer.write_bits(u32::from(EOL_CODE), EOL_BITS);
            }
            EncodingMode::Group3_1D | EncodingMode::Group3_2D { .. } =>
            {
                for _ in 0..6
                {
                    writer.write_bits(u32::from(EOL_CODE), EOL_BITS);
                }
            }
        }
    }

    Ok(writer.finish())
}

fn unpack_row(row: &[u8], width: usize, black_is_1: bool) -> Vec<bool>
{
    let mut pixels = Vec::with_capacity(width);
    for i in 0..width
    {
        let byte = row[i / 8];
        let bit = (byte >> (7 - (i % 8))) & 1;
        let is_black = if black_is_1 { bit == 1 } else { bit == 0 };
        pixels.push(is_black);
    }
    pixels
}

fn changes_of_row(pixels: &[bool]) -> Vec<ColorChange>
{
    let mut changes = Vec::new();
    let mut prev = Color::White;
    for (i, &is_black) in pixels.iter().enumerate()
    {
        let color = if is_black { Color::Black } else { Color::White };
        if color != prev
        {
            changes.push(ColorChange { idx: i as u32, color });
            prev = color;
        }
    }
    changes
}

/// First change at or after `after_exclusive + 1` (i.e strictly right of
/// `after_exclusive`), or `width` if none remain. Mirrors
/// `ReferenceLine::b1`'s search but without a colour filter, since the
/// encoder already knows ground truth and just wants "the next actual
/// transition".
fn next_change(changes: &[ColorChange], a0: Option<u32>, width: u32) -> u32
{
    let min_idx = a0.map_or(0, |a| a + 1);
    for change in changes
    {
        if change.idx >= min_idx
        {
            return change.idx;
        }
    }
    width
}

fn encode_1d_row(writer: &mut BitWriter, changes: &[ColorChange], width: u32)
{
    let mut pos = 0u32;
    let mut color = Color::White;
    for change in changes
    {
        encode_run(writer, color, change.idx - pos);
        pos = change.idx;
        color = change.color;
    }
    encode_run(writer, color, width - pos);
}

fn encode_2d_row(writer: &mut BitWriter, changes: &[ColorChange], reference: &ReferenceLine, width: u32)
{
    let mut color = Color::White;
    let mut a0: Option<u32> = None;

    loop
    {
        let pos = a0.unwrap_or(0);
        if pos >= width
        {
            break;
        }

        let b1 = reference.b1(a0, color, width);
        let b2 = reference.b2(b1, width);
        let a1 = next_change(changes, a0, width);

        let diff = i64::from(a1) - i64::from(b1);

        if diff.abs() <= 3
        {
            write_mode_code(writer, Mode::Vertical(diff as i8));
            color = color.opposite();
            a0 = Some(a1);
        }
        else if b2 < a1
        {
            write_mode_code(writer, Mode::Pass);
            a0 = Some(b2);
        }
        else
        {
            write_mode_code(writer, Mode::Horizontal);
            let a2 = next_change(changes, Some(a1), width);
            encode_run(writer, color, a1 - pos);
            encode_run(writer, color.opposite(), a2 - a1);
            a0 = Some(a2);
        }
    }
}

fn write_mode_code(writer: &mut BitWriter, mode: Mode)
{
    let &(bits, code, _) = MODE_CODES
        .iter()
        .find(|&&(_, _, m)| m == mode)
        .expect("MODE_CODES covers Pass/Horizontal/Vertical(-3..=3)");
    writer.write_bits(u32::from(code), bits);
}

/// Emit zero or more make-up codes summing to `64 * (run / 64)` followed
/// by exactly one terminating code for `run % 64` (T.4 section 4.1's
/// encoder contract).
fn encode_run(writer: &mut BitWriter, color: Color, mut run: u32)
{
    while run >= 64
    {
        let (bits, code, value) = largest_makeup_at_most(color, run);
        writer.write_bits(u32::from(code), bits);
        run -= u32::from(value);
    }

    let terminating = match color
    {
        Color::White => WHITE_TERMINATING,
        Color::Black => BLACK_TERMINATING
    };
    let &(bits, code, _) = terminating
        .iter()
        .find(|&&(_, _, r)| u32::from(r) == run)
        .expect("terminating tables cover every run length 0..=63");
    writer.write_bits(u32::from(code), bits);
}

fn largest_makeup_at_most(color: Color, run: u32) -> (u8, u16, u16)
{
    let makeup = match color
    {
        Color::White => WHITE_MAKEUP,
        Color::Black => BLACK_MAKEUP
    };

    makeup
        .iter()
        .chain(EXTENDED_MAKEUP.iter())
        .filter(|&&(_, _, value)| u32::from(value) <= run)
        .max_by_key(|&&(_, _, value)| value)
        .copied()
        .expect("makeup tables cover every multiple of 64 up to 2560, and run >= 64 here")
}

#[cfg(test)]
mod tests
{
    use pdfcore_core::bitstream::BitReader;

    use super::*;
    use crate::decode::decode_run;

    #[test]
    fn literal_run_length_scenario()
    {
        let mut w = BitWriter::new();
        encode_run(&mut w, Color::White, 10);
        let bytes = w.finish();

        // 00111, 5 bits, left-justified: 0b00111_000.
        assert_eq!(bytes, vec![0b0011_1000]);

        let mut r = BitReader::new(&bytes);
        assert_eq!(decode_run(&mut r, Color::White).unwrap(), 10);
    }

    #[test]
    fn literal_eol_scenario()
    {
        let mut w = BitWriter::new();
        w.write_bits(u32::from(EOL_CODE), EOL_BITS);
        let bytes = w.finish();

        // 0000 0000 0001, 12 bits.
        assert_eq!(bytes, vec![0b0000_0000, 0b0001_0000]);
    }
}
