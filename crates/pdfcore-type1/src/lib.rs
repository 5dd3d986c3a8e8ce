//! A Type 1 PostScript font parser and charstring interpreter for fonts
//! embedded in PDF `FontFile` streams, as well as standalone `.pfa`/`.pfb`
//! files.
//!
//! ```no_run
//! use pdfcore_type1::Type1Font;
//!
//! # fn example(bytes: &[u8]) -> Result<(), pdfcore_type1::Type1Error> {
//! let font = Type1Font::parse_file(bytes)?;
//! if let Some(glyph) = font.glyph("A")? {
//!     println!("{} path ops", glyph.path.len());
//! }
//! # Ok(())
//! # }
//! ```

mod charstring;
mod cipher;
mod container;
mod error;
mod header;
mod private_dict;
mod standard_encoding;

pub use charstring::{Glyph, PathOp};
pub use error::Type1Error;
pub use header::FontHeader;
pub use private_dict::PrivateDict;
pub use standard_encoding::STANDARD_ENCODING;

/// A fully parsed Type 1 font: decrypted private dictionary plus
/// cleartext metadata, ready for glyph-by-glyph interpretation.
pub struct Type1Font
{
    pub header: FontHeader,
    dict: PrivateDict
}

impl Type1Font
{
    /// Parse a standalone `.pfa` or `.pfb` file.
    pub fn parse_file(data: &[u8]) -> Result<Self, Type1Error>
    {
        let sections = container::from_file_bytes(data)?;
        Self::from_sections(sections)
    }

    /// Parse a PDF-embedded `FontFile` stream, given `/Length1` and
    /// `/Length2` from the stream's dictionary.
    pub fn parse_pdf_embedded(data: &[u8], length1: usize, length2: Option<usize>) -> Result<Self, Type1Error>
    {
        let sections = container::from_pdf_embedded(data, length1, length2)?;
        Self::from_sections(sections)
    }

    fn from_sections(sections: container::FontSections) -> Result<Self, Type1Error>
    {
        let header = header::parse(&sections.cleartext);
        let dict = private_dict::parse(&sections.decrypted_private)?;
        Ok(Type1Font { header, dict })
    }

    /// Interpret the named glyph's charstring into an outline, or `None`
    /// if the font has no such glyph.
    pub fn glyph(&self, name: &str) -> Result<Option<Glyph>, Type1Error>
    {
        match self.dict.charstrings.get(name)
        {
            Some(code) => Ok(Some(charstring::interpret(code, &self.dict.subrs)?)),
            None => Ok(None)
        }
    }

    /// Interpret the glyph mapped to `code` by the font's built-in
    /// encoding vector, falling back to Adobe StandardEncoding when the
    /// font's own encoding has no entry for `code` (spec: "via the
    /// encoding table, falling back to StandardEncoding").
    pub fn glyph_for_code(&self, code: u8) -> Result<Option<Glyph>, Type1Error>
    {
        let name = self.header.encoding.get(&code).map(String::as_str).or_else(|| standard_encoding::lookup(code));
        match name
        {
            Some(name) => self.glyph(name),
            None => Ok(None)
        }
    }

    /// Every glyph name this font defines a charstring for.
    pub fn glyph_names(&self) -> impl Iterator<Item = &str>
    {
        self.dict.charstrings.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn encrypt(initial_r: u16, plain: &[u8]) -> Vec<u8>
    {
        let mut r = initial_r;
        let mut out = Vec::with_capacity(plain.len());
        for &p in plain
        {
            let c = p ^ (r >> 8) as u8;
            r = (u16::from(c).wrapping_add(r)).wrapping_mul(52845).wrapping_add(22719);
            out.push(c);
        }
        out
    }

    fn build_pfa_with_encoding_line(encoding_line: &[u8]) -> Vec<u8>
    {
        let charstring_plain = [0u8, 0, 0, 0, 139, 139, 13, 139 + 10, 139 + 20, 21, 14];
        let charstring_cipher = encrypt(4330, &charstring_plain);

        let mut private = Vec::new();
        private.extend_from_slice(b"dup /Private 10 dict dup begin\n/lenIV 4 def\n");
        private.extend_from_slice(b"/CharStrings 1 dict dup begin\n");
        private.extend_from_slice(format!("/A {} RD ", charstring_cipher.len()).as_bytes());
        private.extend_from_slice(&charstring_cipher);
        private.extend_from_slice(b" ND\nend\nend\n");

        let mut private_with_lead_in = vec![0u8; 4];
        private_with_lead_in.extend_from_slice(&private);
        let private_cipher = encrypt(55665, &private_with_lead_in);
        let mut hex = String::new();
        for b in &private_cipher
        {
            hex.push_str(&format!("{b:02X}"));
        }

        let mut pfa = Vec::new();
        pfa.extend_from_slice(b"%!PS-AdobeFont-1.0: Test\n");
        pfa.extend_from_slice(b"/FontName (Test) def\n");
        pfa.extend_from_slice(encoding_line);
        pfa.extend_from_slice(b"currentfile eexec\n");
        pfa.extend_from_slice(hex.as_bytes());
        pfa
    }

    fn build_pfa() -> Vec<u8>
    {
        build_pfa_with_encoding_line(b"dup 65 /A put\n")
    }

    #[test]
    fn parses_font_name_and_glyph()
    {
        let pfa = build_pfa();
        let font = Type1Font::parse_file(&pfa).unwrap();
        assert_eq!(font.header.font_name.as_deref(), Some("Test"));

        let glyph = font.glyph("A").unwrap().unwrap();
        assert_eq!(glyph.path[0], PathOp::MoveTo(10.0, 20.0));
    }

    #[test]
    fn glyph_lookup_by_encoded_code_matches_by_name()
    {
        let pfa = build_pfa();
        let font = Type1Font::parse_file(&pfa).unwrap();
        let by_name = font.glyph("A").unwrap().unwrap();
        let by_code = font.glyph_for_code(65).unwrap().unwrap();
        assert_eq!(by_name.path, by_code.path);
    }

    #[test]
    fn glyph_for_code_falls_back_to_standard_encoding()
    {
        // No `dup 65 /A put` in this font's own encoding vector, so code 65
        // must resolve through Adobe StandardEncoding's "A" instead.
        let pfa = build_pfa_with_encoding_line(b"");
        let font = Type1Font::parse_file(&pfa).unwrap();
        assert!(font.header.encoding.is_empty());

        let by_name = font.glyph("A").unwrap().unwrap();
        let by_code = font.glyph_for_code(65).unwrap().unwrap();
        assert_eq!(by_name.path, by_code.path);
    }

    #[test]
    fn unknown_glyph_name_returns_none()
    {
        let pfa = build_pfa();
        let font = Type1Font::parse_file(&pfa).unwrap();
        assert!(font.glyph("ZZZ").unwrap().is_none());
    }
}
