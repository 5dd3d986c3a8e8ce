//! Parses the handful of cleartext header entries interpreters care
//! about: font identity, the encoding vector, and the font matrix/bbox.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::bytes::Regex;

/// Metadata and the built-in encoding vector taken from a font's
/// cleartext header.
#[derive(Debug, Default)]
pub struct FontHeader
{
    pub font_name: Option<String>,
    pub family_name: Option<String>,
    pub full_name: Option<String>,
    pub font_matrix: Option<[f64; 6]>,
    pub font_bbox: Option<[f64; 4]>,
    /// Maps character codes (0-255) to glyph names, from `dup code /name put`.
    pub encoding: HashMap<u8, String>
}

fn field_regex(key: &str) -> Regex
{
    Regex::new(&format!(r"/{key}\s*\(([^)]*)\)")).unwrap()
}

fn matrix_regex() -> &'static Regex
{
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"/FontMatrix\s*\[\s*([-0-9.eE]+)\s+([-0-9.eE]+)\s+([-0-9.eE]+)\s+([-0-9.eE]+)\s+([-0-9.eE]+)\s+([-0-9.eE]+)\s*\]").unwrap()
    })
}

fn bbox_regex() -> &'static Regex
{
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"/FontBBox\s*\{\s*([-0-9.eE]+)\s+([-0-9.eE]+)\s+([-0-9.eE]+)\s+([-0-9.eE]+)\s*\}").unwrap()
    })
}

fn encoding_entry_regex() -> &'static Regex
{
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"dup\s+(\d+)\s*/([^\s/]+)\s+put").unwrap())
}

fn parse_f64(bytes: &[u8]) -> f64
{
    std::str::from_utf8(bytes).ok().and_then(|s| s.parse().ok()).unwrap_or(0.0)
}

/// Parse the cleartext header bytes (reinterpreted as Latin-1 text).
pub fn parse(data: &[u8]) -> FontHeader
{
    let mut header = FontHeader::default();

    header.font_name = field_regex("FontName")
        .captures(data)
        .map(|c| String::from_utf8_lossy(&c[1]).into_owned());
    header.family_name = field_regex("FamilyName")
        .captures(data)
        .map(|c| String::from_utf8_lossy(&c[1]).into_owned());
    header.full_name = field_regex("FullName")
        .captures(data)
        .map(|c| String::from_utf8_lossy(&c[1]).into_owned());

    if let Some(c) = matrix_regex().captures(data)
    {
        header.font_matrix = Some([
            parse_f64(&c[1]),
            parse_f64(&c[2]),
            parse_f64(&c[3]),
            parse_f64(&c[4]),
            parse_f64(&c[5]),
            parse_f64(&c[6])
        ]);
    }

    if let Some(c) = bbox_regex().captures(data)
    {
        header.font_bbox = Some([parse_f64(&c[1]), parse_f64(&c[2]), parse_f64(&c[3]), parse_f64(&c[4])]);
    }

    for cap in encoding_entry_regex().captures_iter(data)
    {
        if let Ok(code) = std::str::from_utf8(&cap[1]).unwrap_or("").parse::<u16>()
        {
            if code <= 255
            {
                header.encoding.insert(code as u8, String::from_utf8_lossy(&cap[2]).into_owned());
            }
        }
    }

    header
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn parses_font_name()
    {
        let header = parse(b"/FontName (Helvetica) def\n");
        assert_eq!(header.font_name.as_deref(), Some("Helvetica"));
    }

    #[test]
    fn parses_font_matrix()
    {
        let header = parse(b"/FontMatrix [0.001 0 0 0.001 0 0] readonly def\n");
        assert_eq!(header.font_matrix, Some([0.001, 0.0, 0.0, 0.001, 0.0, 0.0]));
    }

    #[test]
    fn parses_font_bbox()
    {
        let header = parse(b"/FontBBox {-10 -20 900 950} readonly def\n");
        assert_eq!(header.font_bbox, Some([-10.0, -20.0, 900.0, 950.0]));
    }

    #[test]
    fn parses_encoding_entries()
    {
        let header = parse(b"dup 65 /A put\ndup 66 /B put\n");
        assert_eq!(header.encoding.get(&65), Some(&"A".to_string()));
        assert_eq!(header.encoding.get(&66), Some(&"B".to_string()));
    }
}
