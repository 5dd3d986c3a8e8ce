//! Small constant tables shared by header parsing and block decoding.

/// Maps a zig-zag scan index (as coefficients arrive in the entropy-coded
/// stream) to its natural row-major position in an 8x8 block.
#[rustfmt::skip]
pub const UN_ZIGZAG: [usize; 64] = [
    0,  1,  8,  16, 9,  2,  3,  10,
    17, 24, 32, 25, 18, 11, 4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13, 6,  7,  14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63
];

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn literal_zig_zag_scenario()
    {
        // UN_ZIGZAG maps a zig-zag index to its natural-order position, so
        // the natural-order-to-zig-zag direction is its inverse: natural
        // index 1 comes from zig-zag index 1, natural index 8 from
        // zig-zag index 2, natural index 63 from zig-zag index 63.
        assert_eq!(UN_ZIGZAG[1], 1);
        assert_eq!(UN_ZIGZAG[2], 8);
        assert_eq!(UN_ZIGZAG[63], 63);
    }
}
