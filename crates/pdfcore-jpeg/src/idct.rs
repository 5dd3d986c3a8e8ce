//! Dequantization and the inverse DCT (ITU-T T.81 A.3.3).
//!
//! This is the direct floating-point formulation rather than one of the
//! fast integer approximations (AAN, Loeffler); baseline decoding of
//! PDF-embedded images is not performance sensitive enough to warrant the
//! extra bookkeeping a fast IDCT needs.

use std::sync::OnceLock;

use crate::misc::UN_ZIGZAG;

const PI: f32 = core::f32::consts::PI;

fn cosine_table() -> &'static [[f32; 8]; 8]
{
    static TABLE: OnceLock<[[f32; 8]; 8]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [[0f32; 8]; 8];
        for (x, row) in table.iter_mut().enumerate()
        {
            for (u, cell) in row.iter_mut().enumerate()
            {
                *cell = ((2 * x + 1) as f32 * u as f32 * PI / 16.0).cos();
            }
        }
        table
    })
}

fn coefficient_scale(u: usize) -> f32
{
    if u == 0
    {
        core::f32::consts::FRAC_1_SQRT_2
    }
    else
    {
        1.0
    }
}

/// One-dimensional inverse DCT of length 8, scaled by `1/2` so that
/// applying it along rows and then columns yields the standard `1/4`
/// two-dimensional scale factor.
fn idct_1d(input: &[f32; 8]) -> [f32; 8]
{
    let cos = cosine_table();
    let mut out = [0f32; 8];
    for (x, slot) in out.iter_mut().enumerate()
    {
        let mut sum = 0f32;
        for u in 0..8
        {
            sum += coefficient_scale(u) * input[u] * cos[x][u];
        }
        *slot = 0.5 * sum;
    }
    out
}

fn idct_2d(block: &mut [f32; 64])
{
    // Rows: transform each fixed vertical frequency's 8 horizontal
    // coefficients into 8 horizontal samples.
    for v in 0..8
    {
        let row: [f32; 8] = block[v * 8..v * 8 + 8].try_into().unwrap();
        let transformed = idct_1d(&row);
        block[v * 8..v * 8 + 8].copy_from_slice(&transformed);
    }
    // Columns: transform each fixed horizontal sample's 8 vertical
    // frequencies into 8 vertical samples.
    for x in 0..8
    {
        let col = [
            block[x], block[8 + x], block[16 + x], block[24 + x], block[32 + x], block[40 + x], block[48 + x],
            block[56 + x]
        ];
        let transformed = idct_1d(&col);
        for (v, value) in transformed.into_iter().enumerate()
        {
            block[v * 8 + x] = value;
        }
    }
}

/// Dequantize a block of 64 coefficients (still in zig-zag scan order, as
/// they arrived from the entropy decoder) against a quantization table
/// stored in the same zig-zag order, run the inverse DCT, level-shift by
/// +128 and clamp to `u8`.
pub fn dequantize_and_idct(coefficients: &[i32; 64], quant_table: &[u16; 64]) -> [u8; 64]
{
    let mut block = [0f32; 64];
    for i in 0..64
    {
        block[UN_ZIGZAG[i]] = (coefficients[i] * i32::from(quant_table[i])) as f32;
    }

    idct_2d(&mut block);

    let mut out = [0u8; 64];
    for (sample, value) in out.iter_mut().zip(block.iter())
    {
        *sample = (value + 128.0).round().clamp(0.0, 255.0) as u8;
    }
    out
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn dc_only_block_is_flat()
    {
        // A pure DC coefficient should produce a flat block after the
        // inverse transform.
        let mut coeffs = [0i32; 64];
        coeffs[0] = 8;
        let qt = [1u16; 64];
        let block = dequantize_and_idct(&coeffs, &qt);
        let first = block[0];
        assert!(block.iter().all(|&p| p.abs_diff(first) <= 1));
    }

    #[test]
    fn zero_block_is_mid_gray()
    {
        let coeffs = [0i32; 64];
        let qt = [1u16; 64];
        let block = dequantize_and_idct(&coeffs, &qt);
        assert!(block.iter().all(|&p| p == 128));
    }
}
