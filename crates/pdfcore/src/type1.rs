//! Re-exports the Type 1 font parser and charstring interpreter, plus a
//! couple of call-site conveniences.
pub use pdfcore_type1::{FontHeader, Glyph, PathOp, Type1Error, Type1Font};

/// Parse a standalone `.pfa`/`.pfb` file or a PDF-embedded `FontFile`
/// stream (pass `length1`/`length2` from the stream dictionary to parse
/// the latter; `None` parses as a standalone file).
pub fn parse(data: &[u8], length1: Option<usize>, length2: Option<usize>) -> Result<Type1Font, Type1Error>
{
    match length1
    {
        Some(length1) => Type1Font::parse_pdf_embedded(data, length1, length2),
        None => Type1Font::parse_file(data)
    }
}

/// Interpret the named glyph's charstring into its outline.
pub fn outline(font: &Type1Font, glyph_name: &str) -> Result<Option<Glyph>, Type1Error>
{
    font.glyph(glyph_name)
}

/// Interpret the glyph mapped to `char_code` into its outline, via the
/// font's built-in encoding table and falling back to StandardEncoding.
pub fn outline_for_code(font: &Type1Font, char_code: u8) -> Result<Option<Glyph>, Type1Error>
{
    font.glyph_for_code(char_code)
}
