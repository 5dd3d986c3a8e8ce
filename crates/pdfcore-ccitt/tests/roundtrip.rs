use pdfcore_ccitt::{compress, decompress, CcittOptions, EncodingMode};

fn pack_row(bits: &[bool]) -> Vec<u8>
{
    let mut out = vec![0u8; bits.len().div_ceil(8)];
    for (i, &b) in bits.iter().enumerate()
    {
        if b
        {
            out[i / 8] |= 1 << (7 - (i % 8));
        }
    }
    out
}

#[test]
fn group4_round_trips_a_simple_pattern()
{
    let width = 16usize;
    // Row 0: all white. Row 1: black in the middle. Row 2: all black.
    let row0 = vec![false; width];
    let mut row1 = vec![false; width];
    for b in row1.iter_mut().skip(4).take(8)
    {
        *b = true;
    }
    let row2 = vec![true; width];

    let mut bitmap = Vec::new();
    bitmap.extend(pack_row(&row0));
    bitmap.extend(pack_row(&row1));
    bitmap.extend(pack_row(&row2));

    let opts = CcittOptions::default()
        .set_columns(width as u32)
        .set_rows(3)
        .set_encoding(EncodingMode::Group4);

    let encoded = compress(&bitmap, &opts).expect("encode should succeed");
    let decoded = decompress(&encoded, &opts).expect("decode should succeed");

    assert_eq!(decoded, bitmap);
}

#[test]
fn group3_1d_round_trips_alternating_runs()
{
    let width = 32usize;
    let mut row = vec![false; width];
    for (i, b) in row.iter_mut().enumerate()
    {
        *b = (i / 5) % 2 == 1;
    }

    let bitmap = pack_row(&row);

    let opts = CcittOptions::default()
        .set_columns(width as u32)
        .set_rows(1)
        .set_encoding(EncodingMode::Group3_1D);

    let encoded = compress(&bitmap, &opts).unwrap();
    let decoded = decompress(&encoded, &opts).unwrap();

    assert_eq!(decoded, bitmap);
}

#[test]
fn all_white_row_decodes_to_all_zero_black_bits()
{
    let width = 64usize;
    let bitmap = pack_row(&vec![false; width]);

    let opts = CcittOptions::default().set_columns(width as u32).set_rows(1).set_encoding(EncodingMode::Group4);

    let encoded = compress(&bitmap, &opts).unwrap();
    let decoded = decompress(&encoded, &opts).unwrap();

    // black_is_1 defaults to false, so an all-white row is all 1 bits.
    assert!(decoded.iter().all(|&b| b == 0xFF));
}

#[test]
fn black_is_1_flips_polarity()
{
    let width = 8usize;
    let bitmap = pack_row(&[true; 8]);

    let opts =
        CcittOptions::default().set_columns(width as u32).set_rows(1).set_encoding(EncodingMode::Group4).set_black_is_1(true);

    let encoded = compress(&bitmap, &opts).unwrap();
    let decoded = decompress(&encoded, &opts).unwrap();

    assert_eq!(decoded, vec![0xFF]);
}

#[test]
fn group4_all_white_wide_image_compresses_well()
{
    let width = 1728usize;
    let height = 16usize;
    let row = pack_row(&vec![false; width]);
    let mut bitmap = Vec::new();
    for _ in 0..height
    {
        bitmap.extend_from_slice(&row);
    }

    let opts = CcittOptions::default().set_columns(width as u32).set_rows(height as u32).set_encoding(EncodingMode::Group4);

    let encoded = compress(&bitmap, &opts).unwrap();
    assert!(encoded.len() < bitmap.len() / 10);

    let decoded = decompress(&encoded, &opts).unwrap();
    assert_eq!(decoded, bitmap);
}
