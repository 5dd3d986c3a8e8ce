//! Settings controlling CCITT decoding and encoding.

/// The encoding scheme used by a CCITT-compressed scanline stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EncodingMode
{
    /// Group 4 (T.6), two-dimensional coding throughout, no EOL codes.
    Group4,
    /// Group 3, one-dimensional coding only (T.4 section 4.1).
    Group3_1D,
    /// Group 3, mixed one- and two-dimensional coding (T.4 section 4.2).
    /// `k` is the value of the `K` parameter from the image's `/K` entry;
    /// only its sign matters to the decoder (K > 0 selects this mode).
    Group3_2D
    {
        k: i32
    }
}

/// Settings controlling how a CCITT bitstream is read or written.
///
/// Mirrors the fields a PDF `CCITTFaxDecode` filter's parameter dictionary
/// would carry (`/Columns`, `/Rows`, `/K`, `/EndOfBlock`, `/EndOfLine`,
/// `/EncodedByteAlign`, `/BlackIs1`).
#[derive(Copy, Clone, Debug)]
pub struct CcittOptions
{
    /// Width of a scanline, in pixels.
    pub columns: u32,
    /// Number of scanlines to decode. When `end_of_block` is set, decoding
    /// stops early if an EOFB/RTC terminator is found before this many
    /// rows are produced.
    pub rows: u32,
    /// Whether the stream may carry an EOFB (Group 4) or RTC (Group 3)
    /// end-of-block terminator.
    pub end_of_block: bool,
    /// Whether the stream carries EOL codes before each row.
    pub end_of_line: bool,
    /// Whether each row is padded to a byte boundary.
    pub encoded_byte_align: bool,
    /// The encoding scheme in use.
    pub encoding: EncodingMode,
    /// When true, a 1 bit in the decoded output means black (matches
    /// `/BlackIs1 true`); when false (the PDF default), a 0 bit means
    /// black.
    pub black_is_1: bool
}

impl Default for CcittOptions
{
    fn default() -> Self
    {
        Self {
            columns: 1728,
            rows: 0,
            end_of_block: true,
            end_of_line: false,
            encoded_byte_align: false,
            encoding: EncodingMode::Group4,
            black_is_1: false
        }
    }
}

impl CcittOptions
{
    /// Start from defaults and set the scanline width.
    #[must_use]
    pub fn set_columns(mut self, columns: u32) -> Self
    {
        self.columns = columns;
        self
    }

    /// Set the number of rows to decode.
    #[must_use]
    pub fn set_rows(mut self, rows: u32) -> Self
    {
        self.rows = rows;
        self
    }

    /// Set the encoding scheme.
    #[must_use]
    pub fn set_encoding(mut self, encoding: EncodingMode) -> Self
    {
        self.encoding = encoding;
        self
    }

    /// Set whether rows are padded to a byte boundary.
    #[must_use]
    pub fn set_encoded_byte_align(mut self, yes: bool) -> Self
    {
        self.encoded_byte_align = yes;
        self
    }

    /// Set whether a set bit in the output means black.
    #[must_use]
    pub fn set_black_is_1(mut self, yes: bool) -> Self
    {
        self.black_is_1 = yes;
        self
    }
}
