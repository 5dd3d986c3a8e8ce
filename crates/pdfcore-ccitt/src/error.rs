//! Errors possible during CCITT fax decoding and encoding.
use std::fmt::{Debug, Display, Formatter};

/// All possible errors the CCITT codec can return.
pub enum CcittError
{
    /// A row's 1-D Huffman prefix did not match any known run code.
    InvalidRunCode,
    /// A 2-D mode prefix did not match Pass/Horizontal/Vertical(-3..+3).
    InvalidModeCode,
    /// The bitstream ended before `rows` scanlines were produced and no
    /// end-of-block marker was found.
    UnexpectedEndOfData,
    /// The caller asked for a row wider than fits in a `u32` pixel count.
    WidthOverflow(usize)
}

impl Debug for CcittError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::InvalidRunCode => writeln!(f, "No run-length code matched the bitstream"),
            Self::InvalidModeCode => writeln!(f, "No 2-D mode code matched the bitstream"),
            Self::UnexpectedEndOfData =>
            {
                writeln!(f, "Bitstream ended before the requested number of rows was decoded")
            }
            Self::WidthOverflow(width) => writeln!(f, "Row width {width} does not fit a u32 pixel count")
        }
    }
}

impl Display for CcittError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for CcittError {}
