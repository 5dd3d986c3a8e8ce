//! File encryption key derivation (Algorithm 2, revisions 2-4) and the
//! intermediate keys Algorithm 2.A needs for revisions 5 and 6.

use md5::{Digest, Md5};

use crate::hash::algorithm_2b;
use crate::padding::pad_password;

/// Algorithm 2: derive the file encryption key from a (padded) user
/// password, the `/O` entry, the `/P` permissions, the first element of
/// `/ID`, the key length in bytes and the revision.
///
/// `encrypt_metadata` is the `/EncryptMetadata` flag; for `R < 4` it has
/// no effect, matching the spec.
pub fn compute_file_key(
    password: &[u8], owner_entry: &[u8], permissions: i32, file_id: &[u8], revision: u8,
    key_len: usize, encrypt_metadata: bool
) -> Vec<u8>
{
    let mut hasher = Md5::new();
    hasher.update(pad_password(password));
    hasher.update(owner_entry);
    hasher.update(permissions.to_le_bytes());
    hasher.update(file_id);
    if revision >= 4 && !encrypt_metadata
    {
        hasher.update([0xFF, 0xFF, 0xFF, 0xFF]);
    }
    let mut digest = hasher.finalize().to_vec();

    let n = if revision == 2 { 5 } else { key_len };

    if revision >= 3
    {
        for _ in 0..50
        {
            digest = Md5::digest(&digest[..n]).to_vec();
        }
    }

    digest.truncate(n);
    digest
}

/// Algorithm 2.A (revisions 5 and 6): derive the intermediate key used to
/// unwrap `/UE` or `/OE` into the file encryption key, given the already
/// validated user (or owner) password and the relevant 8-byte key salt.
///
/// `owner_u_entry` is the full 48-byte `/U` string, required only for the
/// owner-password variant; pass an empty slice for the user variant.
pub fn intermediate_key_r6(password: &[u8], key_salt: &[u8], owner_u_entry: &[u8]) -> [u8; 32]
{
    algorithm_2b(password, key_salt, owner_u_entry)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn revision_2_key_is_five_bytes()
    {
        let key = compute_file_key(b"", &[0u8; 32], -4, &[0u8; 16], 2, 5, true);
        assert_eq!(key.len(), 5);
    }

    #[test]
    fn revision_4_key_respects_key_len()
    {
        let key = compute_file_key(b"", &[0u8; 32], -4, &[0u8; 16], 4, 16, true);
        assert_eq!(key.len(), 16);
    }

    #[test]
    fn disabling_metadata_encryption_changes_the_key()
    {
        let with_metadata = compute_file_key(b"", &[0u8; 32], -4, &[0u8; 16], 4, 16, true);
        let without_metadata = compute_file_key(b"", &[0u8; 32], -4, &[0u8; 16], 4, 16, false);
        assert_ne!(with_metadata, without_metadata);
    }

    #[test]
    fn intermediate_key_is_deterministic()
    {
        let a = intermediate_key_r6(b"secret", b"saltsalt", &[]);
        let b = intermediate_key_r6(b"secret", b"saltsalt", &[]);
        assert_eq!(a, b);
    }
}
