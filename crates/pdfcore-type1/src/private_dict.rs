//! Scans the decrypted private dictionary for the handful of key/value
//! patterns a Type 1 font actually uses, without a full PostScript
//! interpreter.
//!
//! Matching happens against the raw byte slice reinterpreted as Latin-1
//! text; offsets located by the regexes slice back into the original
//! bytes so binary charstring payloads are never re-encoded.

use std::collections::HashMap;

use regex::bytes::Regex;
use std::sync::OnceLock;

use crate::cipher::decrypt_charstring;
use crate::error::Type1Error;

/// Everything the interpreter needs out of a font's private dictionary
/// and its surrounding cleartext header.
#[derive(Debug, Default)]
pub struct PrivateDict
{
    pub len_iv: usize,
    pub subrs: HashMap<usize, Vec<u8>>,
    pub charstrings: HashMap<String, Vec<u8>>
}

fn len_iv_regex() -> &'static Regex
{
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/lenIV\s+(\d+)\s+def").unwrap())
}

fn subrs_header_regex() -> &'static Regex
{
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/Subrs\s+(\d+)").unwrap())
}

fn subr_entry_regex() -> &'static Regex
{
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"dup\s+(\d+)\s+(\d+)\s+(?:RD|-\|)[ ]").unwrap())
}

fn charstrings_header_regex() -> &'static Regex
{
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/CharStrings\s+(\d+)").unwrap())
}

fn charstring_entry_regex() -> &'static Regex
{
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/([^\s/]+)\s+(\d+)\s+(?:RD|-\|)[ ]").unwrap())
}

fn parse_usize(bytes: &[u8]) -> usize
{
    std::str::from_utf8(bytes).ok().and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// Parse a decrypted private dictionary, collecting `/lenIV`, every
/// `Subrs` entry and every named entry in `CharStrings`.
///
/// Fatal per the `/lenIV` out-of-range rule: a value outside `[0, 16]`
/// cannot be a genuine discard count and is rejected rather than silently
/// over- or under-discarding charstring bytes.
pub fn parse(data: &[u8]) -> Result<PrivateDict, Type1Error>
{
    let len_iv = len_iv_regex()
        .captures(data)
        .map(|c| parse_usize(&c[1]))
        .unwrap_or(4);

    if len_iv > 16
    {
        return Err(Type1Error::UnsupportedLenIv(len_iv));
    }

    let mut subrs = HashMap::new();
    if let Some(header) = subrs_header_regex().find(data)
    {
        let search_start = header.end();
        for cap in subr_entry_regex().captures_iter(&data[search_start..])
        {
            let index = parse_usize(&cap[1]);
            let length = parse_usize(&cap[2]);
            let whole = cap.get(0).unwrap();
            let payload_start = search_start + whole.end();
            let payload_end = payload_start + length;
            if payload_end > data.len()
            {
                break;
            }
            let charstring = decrypt_charstring(&data[payload_start..payload_end], len_iv);
            subrs.insert(index, charstring);
        }
    }

    let mut charstrings = HashMap::new();
    if let Some(header) = charstrings_header_regex().find(data)
    {
        let search_start = header.end();
        for cap in charstring_entry_regex().captures_iter(&data[search_start..])
        {
            let name = String::from_utf8_lossy(&cap[1]).into_owned();
            let length = parse_usize(&cap[2]);
            let whole = cap.get(0).unwrap();
            let payload_start = search_start + whole.end();
            let payload_end = payload_start + length;
            if payload_end > data.len()
            {
                break;
            }
            let charstring = decrypt_charstring(&data[payload_start..payload_end], len_iv);
            charstrings.insert(name, charstring);
        }
    }

    Ok(PrivateDict { len_iv, subrs, charstrings })
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn encrypt_charstring(plain: &[u8]) -> Vec<u8>
    {
        let mut r = 4330u16;
        let mut out = Vec::with_capacity(plain.len());
        for &p in plain
        {
            let c = p ^ (r >> 8) as u8;
            r = (u16::from(c).wrapping_add(r)).wrapping_mul(52845).wrapping_add(22719);
            out.push(c);
        }
        out
    }

    #[test]
    fn parses_len_iv()
    {
        let dict = parse(b"/lenIV 4 def\n").unwrap();
        assert_eq!(dict.len_iv, 4);
    }

    #[test]
    fn defaults_len_iv_to_four_when_absent()
    {
        let dict = parse(b"/CharStrings 0 dict dup begin\nend\n").unwrap();
        assert_eq!(dict.len_iv, 4);
    }

    #[test]
    fn len_iv_out_of_range_is_rejected()
    {
        let err = parse(b"/lenIV 99 def\n");
        assert!(matches!(err, Err(Type1Error::UnsupportedLenIv(99))));
    }

    #[test]
    fn len_iv_at_upper_bound_is_accepted()
    {
        let dict = parse(b"/lenIV 16 def\n").unwrap();
        assert_eq!(dict.len_iv, 16);
    }

    #[test]
    fn extracts_a_single_charstring()
    {
        let payload = [0u8, 0, 0, 0, 13, 14]; // lenIV=4 discard, then hsbw endchar
        let cipher_bytes = encrypt_charstring(&payload);

        let mut data = Vec::new();
        data.extend_from_slice(b"/lenIV 4 def\n/CharStrings 1 dict dup begin\n");
        data.extend_from_slice(format!("/A {} RD ", cipher_bytes.len()).as_bytes());
        data.extend_from_slice(&cipher_bytes);
        data.extend_from_slice(b" ND\nend\n");

        let dict = parse(&data).unwrap();
        assert_eq!(dict.charstrings.get("A").unwrap(), &payload[4..]);
    }

    #[test]
    fn extracts_a_subr_entry()
    {
        let payload = [0u8, 0, 0, 0, 11]; // return
        let cipher_bytes = encrypt_charstring(&payload);

        let mut data = Vec::new();
        data.extend_from_slice(b"/lenIV 4 def\n/Subrs 1 array\n");
        data.extend_from_slice(format!("dup 0 {} RD ", cipher_bytes.len()).as_bytes());
        data.extend_from_slice(&cipher_bytes);
        data.extend_from_slice(b" NP\n");

        let dict = parse(&data).unwrap();
        assert_eq!(dict.subrs.get(&0).unwrap(), &payload[4..]);
    }
}
