//! The standard security handler: authentication and per-object
//! encrypt/decrypt, tying together [`crate::key`], [`crate::object_key`],
//! [`crate::hash`] and [`crate::cipher`].

use aes::cipher::block_padding::NoPadding;
use aes::cipher::{BlockDecryptMut, KeyIvInit};
use md5::{Digest, Md5};

use crate::cipher::{aes_cbc_decrypt, aes_cbc_encrypt, rc4_crypt};
use crate::error::CryptError;
use crate::key::{compute_file_key, intermediate_key_r6};
use crate::object_key::object_key;
use crate::padding::{pad_password, PADDING};
use crate::permissions::Permissions;

/// Which cipher a crypt filter applies to objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptMethod
{
    Rc4,
    Aes128,
    Aes256
}

/// Parsed contents of a PDF `/Encrypt` dictionary, the input needed to
/// authenticate and build per-object keys.
#[derive(Debug, Clone)]
pub struct EncryptionParams
{
    pub version: u8,
    pub revision: u8,
    pub key_len_bytes: usize,
    pub o: Vec<u8>,
    pub u: Vec<u8>,
    pub oe: Option<Vec<u8>>,
    pub ue: Option<Vec<u8>>,
    pub perms: Option<Vec<u8>>,
    pub p: i32,
    pub document_id: Vec<u8>,
    pub encrypt_metadata: bool,
    pub method: CryptMethod
}

/// Whether a password authenticated as the user or the owner; determines
/// what the caller is allowed to do with an already-open document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticatedAs
{
    User,
    Owner
}

/// A successfully authenticated document: holds the file encryption key
/// and enough state to derive per-object keys.
#[derive(Debug, Clone)]
pub struct SecurityHandler
{
    file_key: Vec<u8>,
    method: CryptMethod,
    revision: u8,
    pub authenticated_as: AuthenticatedAs,
    pub permissions: Permissions
}

impl SecurityHandler
{
    /// Try `password` as the user password, falling back to the owner
    /// password, and finally an empty password, exactly as real readers
    /// do for documents opened without a prompt.
    pub fn authenticate(params: &EncryptionParams, password: &[u8]) -> Result<Self, CryptError>
    {
        for candidate in [password, b""]
        {
            if let Some(handler) = Self::try_user_password(params, candidate)?
            {
                return Ok(handler);
            }
            if let Some(handler) = Self::try_owner_password(params, candidate)?
            {
                return Ok(handler);
            }
        }
        Err(CryptError::WrongPassword)
    }

    /// Algorithm 4 (R2) / Algorithm 5 (R3-4): compare the candidate
    /// against `/U`.
    fn try_user_password(params: &EncryptionParams, password: &[u8]) -> Result<Option<Self>, CryptError>
    {
        if params.revision >= 5
        {
            return Self::try_user_password_r6(params, password);
        }

        let file_key = compute_file_key(
            password,
            &params.o,
            params.p,
            &params.document_id,
            params.revision,
            params.key_len_bytes,
            params.encrypt_metadata
        );

        let expected = Self::algorithm4_or_5(&file_key, &params.document_id, params.revision);
        let matches = if params.revision == 2
        {
            expected == params.u
        }
        else
        {
            params.u.len() >= 16 && expected[..16] == params.u[..16]
        };

        if matches
        {
            Ok(Some(Self {
                file_key,
                method: params.method,
                revision: params.revision,
                authenticated_as: AuthenticatedAs::User,
                permissions: Permissions::from_raw(params.p)
            }))
        }
        else
        {
            Ok(None)
        }
    }

    /// Algorithm 7: derive a key from the owner password alone (no
    /// O/P/id mixed in), use it to recover a user password candidate
    /// from `/O`, then defer to [`Self::try_user_password`].
    fn try_owner_password(params: &EncryptionParams, password: &[u8]) -> Result<Option<Self>, CryptError>
    {
        if params.revision >= 5
        {
            return Self::try_owner_password_r6(params, password);
        }

        let mut owner_key = Md5::digest(pad_password(password)).to_vec();
        if params.revision >= 3
        {
            for _ in 0..50
            {
                owner_key = Md5::digest(&owner_key).to_vec();
            }
        }
        let n = if params.revision == 2 { 5 } else { params.key_len_bytes };
        owner_key.truncate(n);

        let user_password_candidate = if params.revision == 2
        {
            rc4_crypt(&owner_key, &params.o)
        }
        else
        {
            let mut data = params.o.clone();
            for i in (0..20u8).rev()
            {
                let round_key: Vec<u8> = owner_key.iter().map(|b| b ^ i).collect();
                data = rc4_crypt(&round_key, &data);
            }
            data
        };

        let result = Self::try_user_password(params, &user_password_candidate)?;
        Ok(result.map(|mut handler| {
            handler.authenticated_as = AuthenticatedAs::Owner;
            handler
        }))
    }

    fn try_user_password_r6(params: &EncryptionParams, password: &[u8]) -> Result<Option<Self>, CryptError>
    {
        if params.u.len() < 48
        {
            return Err(CryptError::MalformedParameter("U"));
        }
        let validation_salt = &params.u[32..40];
        let key_salt = &params.u[40..48];

        let check = crate::hash::algorithm_2b(password, validation_salt, &[]);
        if check[..32] != params.u[..32]
        {
            return Ok(None);
        }

        let intermediate = intermediate_key_r6(password, key_salt, &[]);
        let ue = params.ue.as_ref().ok_or(CryptError::MalformedParameter("UE"))?;
        let file_key = decrypt_ue_oe(&intermediate, ue)?;

        Ok(Some(Self {
            file_key,
            method: params.method,
            revision: params.revision,
            authenticated_as: AuthenticatedAs::User,
            permissions: Permissions::from_raw(params.p)
        }))
    }

    fn try_owner_password_r6(params: &EncryptionParams, password: &[u8]) -> Result<Option<Self>, CryptError>
    {
        if params.o.len() < 48 || params.u.len() < 48
        {
            return Err(CryptError::MalformedParameter("O"));
        }
        let validation_salt = &params.o[32..40];
        let key_salt = &params.o[40..48];

        let check = crate::hash::algorithm_2b(password, validation_salt, &params.u[..48]);
        if check[..32] != params.o[..32]
        {
            return Ok(None);
        }

        let intermediate = intermediate_key_r6(password, key_salt, &params.u[..48]);
        let oe = params.oe.as_ref().ok_or(CryptError::MalformedParameter("OE"))?;
        let file_key = decrypt_ue_oe(&intermediate, oe)?;

        Ok(Some(Self {
            file_key,
            method: params.method,
            revision: params.revision,
            authenticated_as: AuthenticatedAs::Owner,
            permissions: Permissions::from_raw(params.p)
        }))
    }

    /// Algorithm 4 (R2) / Algorithm 5 (R>=3): the expected `/U` value for
    /// the given file key.
    fn algorithm4_or_5(file_key: &[u8], document_id: &[u8], revision: u8) -> Vec<u8>
    {
        if revision == 2
        {
            rc4_crypt(file_key, &PADDING)
        }
        else
        {
            let mut hasher = Md5::new();
            hasher.update(PADDING);
            hasher.update(document_id);
            let mut digest = hasher.finalize().to_vec();

            for i in 0..20u8
            {
                let round_key: Vec<u8> = file_key.iter().map(|b| b ^ i).collect();
                digest = rc4_crypt(&round_key, &digest);
            }
            digest
        }
    }

    /// Algorithm 1: the key used to decrypt one indirect object's strings
    /// and streams. A no-op for R5/R6, which encrypt every object
    /// directly under the file key.
    fn key_for_object(&self, obj_num: u32, generation: u16) -> Vec<u8>
    {
        if self.revision >= 5
        {
            self.file_key.clone()
        }
        else
        {
            object_key(&self.file_key, obj_num, generation, self.method != CryptMethod::Rc4)
        }
    }

    /// Decrypt one stream or string body belonging to indirect object
    /// `(obj_num, generation)`.
    pub fn decrypt(&self, data: &[u8], obj_num: u32, generation: u16) -> Result<Vec<u8>, CryptError>
    {
        let key = self.key_for_object(obj_num, generation);
        match self.method
        {
            CryptMethod::Rc4 => Ok(rc4_crypt(&key, data)),
            CryptMethod::Aes128 | CryptMethod::Aes256 => aes_cbc_decrypt(&key, data)
        }
    }

    /// Encrypt one stream or string body for a newly authored document,
    /// the mirror image of [`SecurityHandler::decrypt`].
    pub fn encrypt(&self, data: &[u8], obj_num: u32, generation: u16, iv: [u8; 16]) -> Result<Vec<u8>, CryptError>
    {
        let key = self.key_for_object(obj_num, generation);
        match self.method
        {
            CryptMethod::Rc4 => Ok(rc4_crypt(&key, data)),
            CryptMethod::Aes128 | CryptMethod::Aes256 => aes_cbc_encrypt(&key, iv, data)
        }
    }
}

/// Unwrap `/UE` or `/OE` (Algorithm 2.A steps d/e): AES-256-CBC with a
/// zero IV and no padding, since the 32-byte entry is always block
/// aligned.
fn decrypt_ue_oe(intermediate_key: &[u8; 32], entry: &[u8]) -> Result<Vec<u8>, CryptError>
{
    if entry.len() != 32
    {
        return Err(CryptError::MalformedParameter("UE/OE"));
    }
    let iv = [0u8; 16];
    let mut buf = entry.to_vec();
    let len = cbc::Decryptor::<aes::Aes256>::new(intermediate_key.into(), &iv.into())
        .decrypt_padded_mut::<NoPadding>(&mut buf)
        .map_err(|_| CryptError::MisalignedCiphertext)?
        .len();
    buf.truncate(len);
    Ok(buf)
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn r2_params() -> EncryptionParams
    {
        let document_id = vec![0xAAu8; 16];
        let p = -4;
        let file_key = compute_file_key(b"", &PADDING, p, &document_id, 2, 5, true);
        let u = rc4_crypt(&file_key, &PADDING);

        EncryptionParams {
            version: 1,
            revision: 2,
            key_len_bytes: 5,
            o: PADDING.to_vec(),
            u,
            oe: None,
            ue: None,
            perms: None,
            p,
            document_id,
            encrypt_metadata: true,
            method: CryptMethod::Rc4
        }
    }

    #[test]
    fn empty_user_password_authenticates_against_itself()
    {
        let params = r2_params();
        let handler = SecurityHandler::authenticate(&params, b"").unwrap();
        assert_eq!(handler.authenticated_as, AuthenticatedAs::User);
    }

    #[test]
    fn wrong_password_is_rejected()
    {
        let params = r2_params();
        let err = SecurityHandler::authenticate(&params, b"not the password");
        assert!(err.is_err());
    }

    #[test]
    fn object_key_derivation_matches_algorithm_1_example()
    {
        let file_key = [0x00u8, 0x01, 0x02, 0x03, 0x04];
        let rc4_key = object_key(&file_key, 10, 0, false);
        assert_eq!(rc4_key.len(), 10);
        let aes_key = object_key(&file_key, 10, 0, true);
        assert_eq!(aes_key.len(), 16);
    }

    #[test]
    fn rc4_stream_round_trips_through_handler()
    {
        let params = r2_params();
        let handler = SecurityHandler::authenticate(&params, b"").unwrap();
        let plaintext = b"object stream contents";
        let ciphertext = handler.encrypt(plaintext, 5, 0, [0u8; 16]).unwrap();
        let decrypted = handler.decrypt(&ciphertext, 5, 0).unwrap();
        assert_eq!(decrypted, plaintext);
    }
}
