//! Errors possible while authenticating or decrypting an encrypted PDF.
use std::fmt::{Debug, Display, Formatter};

/// All possible errors the standard security handler can return.
pub enum CryptError
{
    /// Neither the user nor the owner password matched.
    WrongPassword,
    /// `/R` named a revision this handler does not implement.
    UnsupportedRevision(u8),
    /// `/V` named a crypt filter method this handler does not implement.
    UnsupportedMethod(&'static str),
    /// A ciphertext's length was not a multiple of the cipher's block size.
    MisalignedCiphertext,
    /// `/O`, `/U`, `/OE`, `/UE` or the first element of `/ID` had an
    /// unexpected length for the stated revision.
    MalformedParameter(&'static str)
}

impl Debug for CryptError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::WrongPassword => write!(f, "Neither the user nor the owner password was accepted"),
            Self::UnsupportedRevision(r) => write!(f, "Unsupported standard security handler revision: {r}"),
            Self::UnsupportedMethod(m) => write!(f, "Unsupported crypt filter method: {m}"),
            Self::MisalignedCiphertext => write!(f, "Ciphertext length is not a multiple of the block size"),
            Self::MalformedParameter(name) => write!(f, "Encryption dictionary parameter {name} has an invalid length")
        }
    }
}

impl Display for CryptError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for CryptError {}
