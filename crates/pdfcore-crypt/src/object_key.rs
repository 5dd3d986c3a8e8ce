//! Algorithm 1: per-object key derivation for revisions 2-4.
//!
//! Revisions 5 and 6 use the file key directly for every object and skip
//! this step entirely (ISO 32000-2 7.6.2, "Algorithm 1.A").

use md5::{Digest, Md5};

const AES_SALT: &[u8; 4] = b"sAlT";

/// Derive the key used to decrypt one indirect object's strings and
/// streams, given the file encryption key, the object's number and
/// generation, and whether the crypt filter is an AES variant (`true`)
/// or RC4 (`false`).
pub fn object_key(file_key: &[u8], obj_num: u32, generation: u16, is_aes: bool) -> Vec<u8>
{
    let mut hasher = Md5::new();
    hasher.update(file_key);
    hasher.update(&obj_num.to_le_bytes()[..3]);
    hasher.update(&generation.to_le_bytes()[..2]);
    if is_aes
    {
        hasher.update(AES_SALT);
    }
    let digest = hasher.finalize();

    // RC4's key grows with the file key, capped at 16 bytes; AES-128 always
    // consumes the full 16-byte digest regardless of the file key's length.
    let key_len = if is_aes { 16 } else { (file_key.len() + 5).min(16) };
    digest[..key_len].to_vec()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn key_length_is_capped_at_sixteen()
    {
        let file_key = [0x11u8; 16];
        let key = object_key(&file_key, 7, 0, true);
        assert_eq!(key.len(), 16);
    }

    #[test]
    fn short_file_key_grows_by_five_bytes()
    {
        let file_key = [0x22u8; 5];
        let key = object_key(&file_key, 1, 0, false);
        assert_eq!(key.len(), 10);
    }

    #[test]
    fn aes_and_rc4_derive_different_keys()
    {
        let file_key = [0x33u8; 16];
        let aes_key = object_key(&file_key, 3, 0, true);
        let rc4_key = object_key(&file_key, 3, 0, false);
        assert_ne!(aes_key, rc4_key);
    }

    #[test]
    fn different_objects_get_different_keys()
    {
        let file_key = [0x44u8; 16];
        assert_ne!(object_key(&file_key, 1, 0, true), object_key(&file_key, 2, 0, true));
    }

    #[test]
    fn literal_algorithm_1_vector()
    {
        // file_key = 00 01 02 03 04, object 10, generation 0.
        let file_key = [0x00u8, 0x01, 0x02, 0x03, 0x04];

        let rc4_key = object_key(&file_key, 10, 0, false);
        assert_eq!(rc4_key, [0x94, 0x6b, 0x23, 0x7d, 0x74, 0xe3, 0x13, 0x7f, 0xd2, 0xfa]);

        let aes_key = object_key(&file_key, 10, 0, true);
        assert_eq!(
            aes_key,
            [0xa6, 0x1a, 0x3d, 0x9a, 0xe6, 0x6e, 0xf0, 0xb4, 0xe4, 0xc9, 0xc3, 0xc2, 0xf0, 0x4d, 0x6a, 0x27]
        );
    }
}
