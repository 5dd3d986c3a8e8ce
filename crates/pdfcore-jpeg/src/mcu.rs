//! MCU-level entropy decoding and block assembly (ITU-T T.81 Annex A/E).

use pdfcore_core::colorspace::ColorSpace;

use crate::bitstream::BitReader;
use crate::color_convert;
use crate::decoder::JpegDecoder;
use crate::errors::DecodeErrors;
use crate::huffman::HuffmanTable;
use crate::idct;

fn ceil_div(a: usize, b: usize) -> usize
{
    (a + b - 1) / b
}

/// One component's working pixel plane: a multiple-of-8 sized buffer the
/// decoded blocks are written into, plus the logical (pre-padding,
/// pre-upsample) sample dimensions it represents.
struct Plane
{
    pixels:      Vec<u8>,
    stride:      usize,
    sample_w:    usize,
    sample_h:    usize,
    h_sample:    u8,
    v_sample:    u8,
    qt_index:    u8,
    dc_table:    u8,
    ac_table:    u8
}

/// Decode one 8x8 block's DC difference and AC run-lengths into 64
/// dequantized-and-inverse-transformed samples.
fn decode_block(
    reader: &mut BitReader, dc_table: &HuffmanTable, ac_table: &HuffmanTable, dc_pred: &mut i32, qt: &[u16; 64]
) -> Result<[u8; 64], DecodeErrors>
{
    let mut coefficients = [0i32; 64];

    let dc_size = dc_table.decode(reader)?;
    let diff = reader.receive_extend(dc_size)?;
    *dc_pred += diff;
    coefficients[0] = *dc_pred;

    let mut k = 1usize;
    while k < 64
    {
        let rs = ac_table.decode(reader)?;
        let run = rs >> 4;
        let size = rs & 0x0F;

        if size == 0
        {
            if run == 15
            {
                // ZRL: 16 zero coefficients, keep scanning for more.
                k += 16;
                continue;
            }
            // EOB: remaining coefficients in this block are zero.
            break;
        }

        k += usize::from(run);
        if k >= 64
        {
            break;
        }
        coefficients[k] = reader.receive_extend(size)?;
        k += 1;
    }

    Ok(idct::dequantize_and_idct(&coefficients, qt))
}

fn write_block(plane: &mut [u8], stride: usize, block_x: usize, block_y: usize, samples: &[u8; 64])
{
    for row in 0..8
    {
        let dst_y = block_y * 8 + row;
        let dst_start = dst_y * stride + block_x * 8;
        plane[dst_start..dst_start + 8].copy_from_slice(&samples[row * 8..row * 8 + 8]);
    }
}

/// Decode the entropy-coded scan that begins at `entropy_data` (the
/// decoder's cursor is already positioned just past SOS) into interleaved
/// samples of `decoder.options().jpeg_get_out_colorspace()`.
pub fn decode_scan(decoder: &mut JpegDecoder, entropy_data: &[u8]) -> Result<Vec<u8>, DecodeErrors>
{
    let width = usize::from(decoder.width);
    let height = usize::from(decoder.height);
    if decoder.components.is_empty()
    {
        return Err(DecodeErrors::FormatStatic("No frame header was parsed before the scan"));
    }

    let h_max = usize::from(decoder.components.iter().map(|c| c.horizontal_sample).max().unwrap_or(1));
    let v_max = usize::from(decoder.components.iter().map(|c| c.vertical_sample).max().unwrap_or(1));

    // A scan naming only one component is non-interleaved (T.81 A.2.2):
    // its blocks are coded in plain raster order over its own
    // sampling-scaled dimensions, not grouped into multi-component MCUs.
    let non_interleaved = decoder.scan_order.len() == 1;

    let mcus_per_row = ceil_div(width, 8 * h_max);
    let mcu_rows = ceil_div(height, 8 * v_max);

    let mut planes: Vec<Plane> = Vec::with_capacity(decoder.components.len());
    for component in &decoder.components
    {
        let h_sample = component.horizontal_sample;
        let v_sample = component.vertical_sample;
        let sample_w = ceil_div(width * usize::from(h_sample), h_max);
        let sample_h = ceil_div(height * usize::from(v_sample), v_max);

        let (blocks_w, blocks_h) = if non_interleaved
        {
            (ceil_div(sample_w, 8), ceil_div(sample_h, 8))
        }
        else
        {
            (mcus_per_row * usize::from(h_sample), mcu_rows * usize::from(v_sample))
        };

        planes.push(Plane {
            pixels: vec![0u8; blocks_w * 8 * blocks_h * 8],
            stride: blocks_w * 8,
            sample_w,
            sample_h,
            h_sample,
            v_sample,
            qt_index: component.quantization_table,
            dc_table: component.dc_huffman_table,
            ac_table: component.ac_huffman_table
        });
    }

    let mut reader = BitReader::new(entropy_data);
    let restart_interval = usize::from(decoder.restart_interval);
    let mut units_until_restart = if restart_interval > 0 { restart_interval } else { usize::MAX };

    for component in &mut decoder.components
    {
        component.reset_dc_prediction();
    }

    if non_interleaved
    {
        let plane = &mut planes[0];
        let blocks_w = plane.stride / 8;
        let blocks_h = plane.pixels.len() / 8 / plane.stride;
        let qt = decoder.qt_tables[usize::from(plane.qt_index)]
            .ok_or(DecodeErrors::FormatStatic("Scan references a quantization table that was never defined"))?;
        let dc_table = decoder.dc_huffman_tables[usize::from(plane.dc_table)]
            .clone()
            .ok_or(DecodeErrors::FormatStatic("Scan references a DC Huffman table that was never defined"))?;
        let ac_table = decoder.ac_huffman_tables[usize::from(plane.ac_table)]
            .clone()
            .ok_or(DecodeErrors::FormatStatic("Scan references an AC Huffman table that was never defined"))?;
        let mut dc_pred = 0i32;

        'blocks: for by in 0..blocks_h
        {
            for bx in 0..blocks_w
            {
                let samples = match decode_block(&mut reader, &dc_table, &ac_table, &mut dc_pred, &qt)
                {
                    Ok(s) => s,
                    Err(err) =>
                    {
                        log::warn!("jpeg: stopping decode early at block ({bx},{by}): {err}");
                        break 'blocks;
                    }
                };
                write_block(&mut plane.pixels, plane.stride, bx, by, &samples);

                units_until_restart -= 1;
                if units_until_restart == 0
                {
                    handle_restart(&mut reader, &mut dc_pred);
                    units_until_restart = restart_interval;
                }
            }
        }
    }
    else
    {
        let qts = decoder.qt_tables;
        let dc_tables = decoder.dc_huffman_tables.clone();
        let ac_tables = decoder.ac_huffman_tables.clone();

        'mcus: for mcu_y in 0..mcu_rows
        {
            for mcu_x in 0..mcus_per_row
            {
                for (component, plane) in decoder.components.iter_mut().zip(planes.iter_mut())
                {
                    let qt = qts[usize::from(plane.qt_index)].ok_or(DecodeErrors::FormatStatic(
                        "Scan references a quantization table that was never defined"
                    ))?;
                    let dc_table = dc_tables[usize::from(plane.dc_table)].as_ref().ok_or(
                        DecodeErrors::FormatStatic("Scan references a DC Huffman table that was never defined")
                    )?;
                    let ac_table = ac_tables[usize::from(plane.ac_table)].as_ref().ok_or(
                        DecodeErrors::FormatStatic("Scan references an AC Huffman table that was never defined")
                    )?;

                    for by in 0..usize::from(plane.v_sample)
                    {
                        for bx in 0..usize::from(plane.h_sample)
                        {
                            let block_x = mcu_x * usize::from(plane.h_sample) + bx;
                            let block_y = mcu_y * usize::from(plane.v_sample) + by;
                            let samples =
                                match decode_block(&mut reader, dc_table, ac_table, &mut component.dc_pred, &qt)
                                {
                                    Ok(s) => s,
                                    Err(err) =>
                                    {
                                        log::warn!(
                                            "jpeg: stopping decode early at MCU ({mcu_x},{mcu_y}): {err}"
                                        );
                                        break 'mcus;
                                    }
                                };
                            write_block(&mut plane.pixels, plane.stride, block_x, block_y, &samples);
                        }
                    }
                }

                units_until_restart -= 1;
                if units_until_restart == 0
                {
                    for component in &mut decoder.components
                    {
                        component.reset_dc_prediction();
                    }
                    if reader.marker().is_some()
                    {
                        reader.restart();
                    }
                    units_until_restart = restart_interval;
                }
            }
        }
    }

    Ok(assemble(&planes, width, height, decoder.options().jpeg_get_out_colorspace()))
}

fn handle_restart(reader: &mut BitReader, dc_pred: &mut i32)
{
    if reader.marker().is_some()
    {
        reader.restart();
    }
    *dc_pred = 0;
}

/// Crop each plane to its logical sample dimensions, upsample chroma back
/// up to the luma grid, and interleave into the requested colour space.
fn assemble(planes: &[Plane], width: usize, height: usize, out_colorspace: ColorSpace) -> Vec<u8>
{
    let h_max = planes.iter().map(|p| p.h_sample).max().unwrap_or(1);
    let v_max = planes.iter().map(|p| p.v_sample).max().unwrap_or(1);

    let full_planes: Vec<Vec<u8>> = planes
        .iter()
        .map(|plane| {
            let cropped = crop(&plane.pixels, plane.stride, plane.sample_w, plane.sample_h);
            let h_ratio = usize::from(h_max / plane.h_sample.max(1));
            let v_ratio = usize::from(v_max / plane.v_sample.max(1));
            let upsampled = crate::upsampler::upsample_plane(&cropped, plane.sample_w, plane.sample_h, h_ratio, v_ratio);
            crop(&upsampled, plane.sample_w * h_ratio, width, height)
        })
        .collect();

    let components = out_colorspace.num_components().max(1);
    let mut out = Vec::with_capacity(width * height * components);

    for i in 0..width * height
    {
        if full_planes.len() == 1
        {
            color_convert::ycbcr_to_out(full_planes[0][i], 128, 128, out_colorspace, &mut out);
        }
        else
        {
            color_convert::ycbcr_to_out(full_planes[0][i], full_planes[1][i], full_planes[2][i], out_colorspace, &mut out);
        }
    }

    out
}

fn crop(plane: &[u8], stride: usize, width: usize, height: usize) -> Vec<u8>
{
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height
    {
        let row_start = y * stride;
        if row_start + width <= plane.len()
        {
            out.extend_from_slice(&plane[row_start..row_start + width]);
        }
        else
        {
            out.resize(out.len() + width, 0);
        }
    }
    out
}
