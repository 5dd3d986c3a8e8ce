//! Algorithm 2.B (ISO 32000-2, revisions 5 and 6): the hardened hash used
//! to turn a password into an intermediate key for AES-256 handlers.

use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::cipher::aes128_cbc_encrypt_no_padding;

/// Run Algorithm 2.B over `password ++ salt ++ extra` (`extra` is the
/// owner hash for the owner-password variant, empty otherwise).
///
/// Revision 5 is the single-SHA-256 predecessor to this algorithm: callers
/// that only need R5 behavior should hash directly instead of calling
/// this function.
pub fn algorithm_2b(password: &[u8], salt: &[u8], extra: &[u8]) -> [u8; 32]
{
    let mut input = Vec::with_capacity(password.len() + salt.len() + extra.len());
    input.extend_from_slice(password);
    input.extend_from_slice(salt);
    input.extend_from_slice(extra);

    let mut k: Vec<u8> = Sha256::digest(&input).to_vec();

    let mut round = 0u32;
    loop
    {
        let mut k1 = Vec::with_capacity(64 * (password.len() + k.len() + extra.len()));
        for _ in 0..64
        {
            k1.extend_from_slice(password);
            k1.extend_from_slice(&k);
            k1.extend_from_slice(extra);
        }

        let aes_key: [u8; 16] = k[0..16].try_into().expect("k has at least 16 bytes");
        let iv: [u8; 16] = k[16..32].try_into().expect("k has at least 32 bytes");
        let e = aes128_cbc_encrypt_no_padding(&aes_key, &iv, &k1);

        let modulus: u32 = e[0..16]
            .iter()
            .fold(0u32, |acc, &b| acc + u32::from(b))
            % 3;

        k = match modulus
        {
            0 => Sha256::digest(&e).to_vec(),
            1 => Sha384::digest(&e).to_vec(),
            _ => Sha512::digest(&e).to_vec()
        };

        round += 1;
        if round >= 64 && usize::from(*e.last().expect("e is never empty")) <= round as usize - 32
        {
            break;
        }
    }

    let mut out = [0u8; 32];
    out.copy_from_slice(&k[..32]);
    out
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn deterministic_for_same_input()
    {
        let a = algorithm_2b(b"password", b"somesalt", b"");
        let b = algorithm_2b(b"password", b"somesalt", b"");
        assert_eq!(a, b);
    }

    #[test]
    fn differs_with_salt()
    {
        let a = algorithm_2b(b"password", b"saltsalt", b"");
        let b = algorithm_2b(b"password", b"altsalts", b"");
        assert_ne!(a, b);
    }

    #[test]
    fn differs_with_extra()
    {
        let a = algorithm_2b(b"password", b"somesalt", b"");
        let b = algorithm_2b(b"password", b"somesalt", b"ownerhash-48-bytes-of-filler-00000000000");
        assert_ne!(a, b);
    }
}
