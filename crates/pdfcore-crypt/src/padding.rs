//! Password padding (ISO 32000-1 Table 21, Algorithm 2 step (a)).

/// The fixed 32-byte string every password is padded with before hashing.
#[rustfmt::skip]
pub const PADDING: [u8; 32] = [
    0x28, 0xBF, 0x4E, 0x5E, 0x4E, 0x75, 0x8A, 0x41, 0x64, 0x00, 0x4E, 0x56, 0xFF, 0xFA, 0x01, 0x08,
    0x2E, 0x2E, 0x00, 0xB6, 0xD0, 0x68, 0x3E, 0x80, 0x2F, 0x0C, 0xA9, 0xFE, 0x64, 0x53, 0x69, 0x7A,
];

/// Truncate or pad `password` to exactly 32 bytes with the tail of
/// [`PADDING`], as Algorithm 2 step (a) requires.
pub fn pad_password(password: &[u8]) -> [u8; 32]
{
    let mut out = [0u8; 32];
    if password.len() >= 32
    {
        out.copy_from_slice(&password[..32]);
    }
    else
    {
        out[..password.len()].copy_from_slice(password);
        out[password.len()..].copy_from_slice(&PADDING[..32 - password.len()]);
    }
    out
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn empty_password_is_pure_padding()
    {
        assert_eq!(pad_password(b""), PADDING);
    }

    #[test]
    fn long_password_is_truncated()
    {
        let password = [b'x'; 40];
        assert_eq!(pad_password(&password), [b'x'; 32]);
    }

    #[test]
    fn short_password_keeps_its_bytes_then_pads()
    {
        let out = pad_password(b"abc");
        assert_eq!(&out[..3], b"abc");
        assert_eq!(&out[3..], &PADDING[..29]);
    }
}
