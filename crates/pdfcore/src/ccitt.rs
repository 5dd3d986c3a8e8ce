//! Re-exports the CCITT Group 3/Group 4 fax codec.
pub use pdfcore_ccitt::{compress, decompress, CcittOptions, EncodingMode};
