//! Re-exports the standard security handler, plus call-site conveniences
//! matching the `authenticate`/`decrypt`/`encrypt` shape the rest of the
//! facade follows.
pub use pdfcore_crypt::{
    compute_file_key, object_key, AuthenticatedAs, CryptError, CryptMethod, EncryptionParams, Permissions,
    SecurityHandler
};

/// Authenticate against an `/Encrypt` dictionary with a candidate
/// password (tried as the user password, then owner, then empty).
pub fn authenticate(params: &EncryptionParams, password: &[u8]) -> Result<SecurityHandler, CryptError>
{
    SecurityHandler::authenticate(params, password)
}

/// Decrypt one indirect object's string or stream body.
pub fn decrypt(handler: &SecurityHandler, data: &[u8], obj_num: u32, generation: u16) -> Result<Vec<u8>, CryptError>
{
    handler.decrypt(data, obj_num, generation)
}

/// Encrypt one indirect object's string or stream body for a newly
/// authored document.
pub fn encrypt(
    handler: &SecurityHandler, data: &[u8], obj_num: u32, generation: u16, iv: [u8; 16]
) -> Result<Vec<u8>, CryptError>
{
    handler.encrypt(data, obj_num, generation, iv)
}
