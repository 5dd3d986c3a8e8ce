//! Low-level symmetric primitives the security handler is built from.
//!
//! Nothing here reads a PDF object; this only wraps `aes`/`cbc`/`rc4` with
//! the key/IV handling the string and stream decryptors use.

use aes::cipher::block_padding::{NoPadding, Pkcs7};
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, StreamCipher};
use rc4::{KeyInit, Rc4};

use crate::error::CryptError;

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Apply RC4 with `key` to `data`, returning the result (RC4 is its own
/// inverse, so this serves for both encryption and decryption).
pub fn rc4_crypt(key: &[u8], data: &[u8]) -> Vec<u8>
{
    let mut out = data.to_vec();
    let mut cipher = Rc4::new(key.into());
    cipher.apply_keystream(&mut out);
    out
}

/// Decrypt `ciphertext` (a leading 16-byte IV followed by AES-CBC
/// ciphertext) under a 128- or 256-bit `key`, then strip a trailing PKCS#7
/// pad only when the plaintext actually ends in one.
///
/// PDF readers must tolerate streams that don't decrypt to a validly
/// padded plaintext (truncated files, or streams encrypted under a
/// different key than the one recovered): the spec calls for stripping
/// "only when all trailing bytes equal the padding length and that length
/// is in [1, 16]", otherwise returning the plaintext unstripped rather
/// than failing outright.
pub fn aes_cbc_decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptError>
{
    if ciphertext.len() < 16 || (ciphertext.len() - 16) % 16 != 0
    {
        return Err(CryptError::MisalignedCiphertext);
    }
    let (iv, body) = ciphertext.split_at(16);
    let mut buf = body.to_vec();

    match key.len()
    {
        16 => Aes128CbcDec::new_from_slices(key, iv)
            .map_err(|_| CryptError::MalformedParameter("key"))?
            .decrypt_padded_mut::<NoPadding>(&mut buf)
            .map_err(|_| CryptError::MisalignedCiphertext)?,
        32 => Aes256CbcDec::new_from_slices(key, iv)
            .map_err(|_| CryptError::MalformedParameter("key"))?
            .decrypt_padded_mut::<NoPadding>(&mut buf)
            .map_err(|_| CryptError::MisalignedCiphertext)?,
        _ => return Err(CryptError::MalformedParameter("key"))
    };

    strip_pkcs7_if_valid(&mut buf);
    Ok(buf)
}

/// Remove a trailing PKCS#7 pad from `buf` in place, but only when it is
/// one: the last byte `n` must be in `[1, 16]` and the last `n` bytes must
/// all equal `n`. Any other trailing content is left untouched.
fn strip_pkcs7_if_valid(buf: &mut Vec<u8>)
{
    let Some(&last) = buf.last() else { return };
    let n = last as usize;
    if n == 0 || n > 16 || n > buf.len()
    {
        return;
    }
    if buf[buf.len() - n..].iter().all(|&b| b as usize == n)
    {
        buf.truncate(buf.len() - n);
    }
}

/// Encrypt `plaintext` under `key`, generating `iv` fresh and prefixing it
/// to the returned ciphertext, PKCS#7 padded as PDF's AES crypt filters
/// require.
pub fn aes_cbc_encrypt(key: &[u8], iv: [u8; 16], plaintext: &[u8]) -> Result<Vec<u8>, CryptError>
{
    let block_len = plaintext.len() + (16 - plaintext.len() % 16);
    let mut buf = vec![0u8; block_len];
    buf[..plaintext.len()].copy_from_slice(plaintext);

    let ciphertext_len = match key.len()
    {
        16 => Aes128CbcEnc::new_from_slices(key, &iv)
            .map_err(|_| CryptError::MalformedParameter("key"))?
            .encrypt_padded_mut::<Pkcs7>(&mut buf, plaintext.len())
            .map_err(|_| CryptError::MisalignedCiphertext)?
            .len(),
        32 => Aes256CbcEnc::new_from_slices(key, &iv)
            .map_err(|_| CryptError::MalformedParameter("key"))?
            .encrypt_padded_mut::<Pkcs7>(&mut buf, plaintext.len())
            .map_err(|_| CryptError::MisalignedCiphertext)?
            .len(),
        _ => return Err(CryptError::MalformedParameter("key"))
    };

    let mut out = Vec::with_capacity(16 + ciphertext_len);
    out.extend_from_slice(&iv);
    out.extend_from_slice(&buf[..ciphertext_len]);
    Ok(out)
}

/// AES-128-CBC with no padding, exactly as Algorithm 2.B's round function
/// needs: the input is always a whole number of blocks already.
pub fn aes128_cbc_encrypt_no_padding(key: &[u8; 16], iv: &[u8; 16], data: &[u8]) -> Vec<u8>
{
    use aes::cipher::block_padding::NoPadding;

    let mut buf = data.to_vec();
    let len = Aes128CbcEnc::new(key.into(), iv.into())
        .encrypt_padded_mut::<NoPadding>(&mut buf, data.len())
        .expect("input is already block aligned")
        .len();
    buf.truncate(len);
    buf
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn rc4_round_trips()
    {
        let key = b"secretkey";
        let plaintext = b"hello, encrypted pdf stream";
        let ciphertext = rc4_crypt(key, plaintext);
        assert_ne!(ciphertext, plaintext);
        assert_eq!(rc4_crypt(key, &ciphertext), plaintext);
    }

    #[test]
    fn aes128_cbc_round_trips()
    {
        let key = [0x42u8; 16];
        let iv = [0x24u8; 16];
        let plaintext = b"a stream of PDF object data";
        let ciphertext = aes_cbc_encrypt(&key, iv, plaintext).unwrap();
        let decrypted = aes_cbc_decrypt(&key, &ciphertext).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn aes_cbc_decrypt_leaves_invalid_padding_unstripped()
    {
        let key = [0x11u8; 16];
        let iv = [0x22u8; 16];
        // Correctly block-aligned, but corrupting a ciphertext byte makes
        // the recovered "padding" invalid: the decryptor must hand back
        // the full, unstripped plaintext rather than erroring out.
        let mut ciphertext = aes_cbc_encrypt(&key, iv, b"0123456789abcdef").unwrap();
        ciphertext[16] ^= 0xFF;

        let decrypted = aes_cbc_decrypt(&key, &ciphertext).unwrap();
        assert_eq!(decrypted.len(), ciphertext.len() - 16);
    }

    #[test]
    fn aes_cbc_decrypt_strips_valid_padding()
    {
        let key = [0x33u8; 16];
        let iv = [0x44u8; 16];
        let plaintext = b"not a block multiple";
        let ciphertext = aes_cbc_encrypt(&key, iv, plaintext).unwrap();
        let decrypted = aes_cbc_decrypt(&key, &ciphertext).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn strip_pkcs7_if_valid_ignores_out_of_range_last_byte()
    {
        let mut buf = vec![1u8, 2, 3, 0];
        strip_pkcs7_if_valid(&mut buf);
        assert_eq!(buf, vec![1, 2, 3, 0]);

        let mut buf = vec![1u8, 2, 3, 200];
        strip_pkcs7_if_valid(&mut buf);
        assert_eq!(buf, vec![1, 2, 3, 200]);
    }

    #[test]
    fn strip_pkcs7_if_valid_strips_a_genuine_pad()
    {
        let mut buf = vec![1u8, 2, 3, 3, 3, 3];
        strip_pkcs7_if_valid(&mut buf);
        assert_eq!(buf, vec![1, 2, 3]);
    }
}
