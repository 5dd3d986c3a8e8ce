//! A PDF document core: the binary codec layer and the encrypted object
//! graph that feeds it.
//!
//! This crate composes four independent subsystem crates behind one
//! facade, each gated by its own feature (on by default):
//!
//! | Module  | Crate            | Handles |
//! |---------|------------------|---------|
//! | [`ccitt`] | `pdfcore-ccitt` | `CCITTFaxDecode` bi-level fax images |
//! | [`jpeg`]  | `pdfcore-jpeg`  | `DCTDecode` baseline JPEG images |
//! | [`type1`] | `pdfcore-type1` | Type 1 `FontFile` glyph outlines |
//! | [`crypt`] | `pdfcore-crypt` | The standard security handler (RC4/AES) |
//!
//! ```no_run
//! use pdfcore::jpeg;
//!
//! # fn example(data: &[u8]) -> Result<(), pdfcore::errors::PdfCoreError> {
//! let (info, pixels) = jpeg::decode(data)?;
//! println!("{}x{}, {} bytes", info.width, info.height, pixels.len());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "ccitt")]
pub mod ccitt;
#[cfg(feature = "crypt")]
pub mod crypt;
pub mod errors;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "type1")]
pub mod type1;
