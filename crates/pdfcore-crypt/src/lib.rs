//! The PDF standard security handler: password authentication and the
//! RC4/AES stream and string ciphers it unlocks.
//!
//! ```no_run
//! use pdfcore_crypt::{AuthenticatedAs, CryptMethod, EncryptionParams, SecurityHandler};
//!
//! # fn example(params: EncryptionParams, stream: &[u8]) -> Result<(), pdfcore_crypt::CryptError> {
//! let handler = SecurityHandler::authenticate(&params, b"")?;
//! let plaintext = handler.decrypt(stream, 12, 0)?;
//! # Ok(())
//! # }
//! ```

mod cipher;
mod error;
mod handler;
mod hash;
mod key;
mod object_key;
mod padding;
mod permissions;

pub use error::CryptError;
pub use handler::{AuthenticatedAs, CryptMethod, EncryptionParams, SecurityHandler};
pub use permissions::Permissions;

pub use key::compute_file_key;
pub use object_key::object_key;
