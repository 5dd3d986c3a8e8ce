//! Adobe StandardEncoding (PDF32000-1 Annex D), consulted whenever a font's
//! own built-in encoding vector has no entry for a requested character code.
//!
//! An empty string marks a code StandardEncoding leaves undefined.

#[rustfmt::skip]
pub const STANDARD_ENCODING: [&str; 256] = [
    "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "",
    "space", "exclam", "quotedbl", "numbersign", "dollar", "percent", "ampersand", "quoteright",
    "parenleft", "parenright", "asterisk", "plus", "comma", "hyphen", "period", "slash",
    "zero", "one", "two", "three", "four", "five", "six", "seven",
    "eight", "nine", "colon", "semicolon", "less", "equal", "greater", "question",
    "at", "A", "B", "C", "D", "E", "F", "G",
    "H", "I", "J", "K", "L", "M", "N", "O",
    "P", "Q", "R", "S", "T", "U", "V", "W",
    "X", "Y", "Z", "bracketleft", "backslash", "bracketright", "asciicircum", "underscore",
    "quoteleft", "a", "b", "c", "d", "e", "f", "g",
    "h", "i", "j", "k", "l", "m", "n", "o",
    "p", "q", "r", "s", "t", "u", "v", "w",
    "x", "y", "z", "braceleft", "bar", "braceright", "asciitilde", "",
    "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "",
    "", "exclamdown", "cent", "sterling", "fraction", "yen", "florin", "section",
    "currency", "quotesingle", "quotedblleft", "guillemotleft", "guilsinglleft", "guilsinglright", "fi", "fl",
    "", "endash", "dagger", "daggerdbl", "periodcentered", "", "paragraph", "bullet",
    "quotesinglbase", "quotedblbase", "quotedblright", "guillemotright", "ellipsis", "perthousand", "", "questiondown",
    "", "grave", "acute", "circumflex", "tilde", "macron", "breve", "dotaccent",
    "dieresis", "", "ring", "cedilla", "", "hungarumlaut", "ogonek", "caron",
    "emdash", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "AE", "", "ordfeminine", "", "", "", "",
    "Lslash", "Oslash", "OE", "ordmasculine", "", "", "", "",
    "", "ae", "", "", "", "dotlessi", "", "",
    "lslash", "oslash", "oe", "germandbls", "", "", "", ""
];

/// Look up the glyph name StandardEncoding assigns to `code`, or `None` if
/// the code is undefined in the table.
pub fn lookup(code: u8) -> Option<&'static str>
{
    let name = STANDARD_ENCODING[code as usize];
    if name.is_empty()
    {
        None
    }
    else
    {
        Some(name)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn maps_ascii_letters()
    {
        assert_eq!(lookup(b'A'), Some("A"));
        assert_eq!(lookup(b'z'), Some("z"));
        assert_eq!(lookup(b' '), Some("space"));
    }

    #[test]
    fn undefined_codes_return_none()
    {
        assert_eq!(lookup(0), None);
        assert_eq!(lookup(127), None);
        assert_eq!(lookup(128), None);
    }

    #[test]
    fn maps_high_codes()
    {
        assert_eq!(lookup(161), Some("exclamdown"));
        assert_eq!(lookup(225), Some("AE"));
        assert_eq!(lookup(251), Some("germandbls"));
    }
}
