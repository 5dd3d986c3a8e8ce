//! Container detection: PFB segments, PFA ASCII/hex, and PDF-embedded
//! `FontFile` streams all wrap the same cleartext-header + eexec-body +
//! trailer shape differently.

use crate::error::Type1Error;

/// The two sections every Type 1 font splits into once its container is
/// peeled away: the cleartext header (font name, encoding, matrix…) and
/// the eexec-encrypted private section, already decrypted to binary.
pub struct FontSections
{
    pub cleartext: Vec<u8>,
    pub decrypted_private: Vec<u8>
}

const PFB_MARKER: u8 = 0x80;
const PFB_ASCII: u8 = 1;
const PFB_BINARY: u8 = 2;
const PFB_EOF: u8 = 3;

/// Parse a PFB file: a sequence of `0x80 type length4LE payload` segments.
fn split_pfb(data: &[u8]) -> Result<(Vec<u8>, Vec<u8>), Type1Error>
{
    let mut cleartext = Vec::new();
    let mut binary = Vec::new();
    let mut pos = 0usize;

    while pos < data.len()
    {
        if data[pos] != PFB_MARKER || pos + 6 > data.len()
        {
            return Err(Type1Error::UnrecognizedContainer);
        }
        let segment_type = data[pos + 1];
        if segment_type == PFB_EOF
        {
            break;
        }

        let len = u32::from_le_bytes([data[pos + 2], data[pos + 3], data[pos + 4], data[pos + 5]]) as usize;
        let start = pos + 6;
        let end = start.checked_add(len).ok_or(Type1Error::TruncatedSegment)?;
        if end > data.len()
        {
            return Err(Type1Error::TruncatedSegment);
        }

        match segment_type
        {
            PFB_ASCII => cleartext.extend_from_slice(&data[start..end]),
            PFB_BINARY => binary.extend_from_slice(&data[start..end]),
            _ => return Err(Type1Error::UnrecognizedContainer)
        }
        pos = end;
    }

    Ok((cleartext, binary))
}

/// Convert a hex-encoded PFA eexec section to binary, stripping the
/// trailing run of zeros ("512 zeros" sentinel, though readers must
/// tolerate any length) and any interleaved whitespace.
fn dehex(data: &[u8]) -> Vec<u8>
{
    let mut nibble: Option<u8> = None;
    let mut out = Vec::with_capacity(data.len() / 2);

    for &b in data
    {
        let value = match b
        {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => continue
        };
        match nibble.take()
        {
            Some(high) => out.push((high << 4) | value),
            None => nibble = Some(value)
        }
    }

    while out.last() == Some(&0)
    {
        out.pop();
    }
    out
}

const EEXEC_MARKER: &[u8] = b"eexec";

/// Locate the `eexec` keyword and the start of its payload, skipping the
/// whitespace that follows it.
fn find_eexec_payload(data: &[u8]) -> Option<usize>
{
    let pos = data.windows(EEXEC_MARKER.len()).position(|w| w == EEXEC_MARKER)?;
    let mut start = pos + EEXEC_MARKER.len();
    while start < data.len() && data[start].is_ascii_whitespace()
    {
        start += 1;
    }
    Some(start)
}

/// Split a PFA (or PDF-embedded font treated as PFA) file's cleartext
/// header from its hex-encoded, eexec-encrypted body.
fn split_pfa(data: &[u8]) -> Result<(Vec<u8>, Vec<u8>), Type1Error>
{
    let payload_start = find_eexec_payload(data).ok_or(Type1Error::UnrecognizedContainer)?;
    let cleartext = data[..payload_start].to_vec();
    let binary = dehex(&data[payload_start..]);
    Ok((cleartext, binary))
}

/// Parse a raw PDF-embedded `FontFile` stream, given the `/Length1` (and
/// optionally `/Length2`) values from the stream dictionary.
///
/// When `length1 >= data.len()` or `length1 == length2`, the eexec
/// section cannot be a distinct binary segment and the stream is treated
/// as PFA (the common case for fonts subset by authoring tools that
/// leave the eexec section hex-encoded even inside a PDF stream).
pub fn from_pdf_embedded(data: &[u8], length1: usize, length2: Option<usize>) -> Result<FontSections, Type1Error>
{
    let treat_as_pfa = length1 >= data.len() || length2 == Some(length1);

    let (cleartext, binary) = if treat_as_pfa
    {
        split_pfa(data)?
    }
    else
    {
        let header = data.get(..length1).ok_or(Type1Error::TruncatedSegment)?;
        let body_end = length2.map_or(data.len(), |l2| (length1 + l2).min(data.len()));
        let body = data.get(length1..body_end).ok_or(Type1Error::TruncatedSegment)?;
        (header.to_vec(), body.to_vec())
    };

    Ok(FontSections {
        cleartext,
        decrypted_private: crate::cipher::decrypt_eexec(&binary)
    })
}

/// Parse a standalone `.pfb` or `.pfa` file, auto-detecting the container
/// by its leading byte.
pub fn from_file_bytes(data: &[u8]) -> Result<FontSections, Type1Error>
{
    if data.first() == Some(&PFB_MARKER)
    {
        let (cleartext, binary) = split_pfb(data)?;
        Ok(FontSections { cleartext, decrypted_private: crate::cipher::decrypt_eexec(&binary) })
    }
    else
    {
        let (cleartext, binary) = split_pfa(data)?;
        Ok(FontSections { cleartext, decrypted_private: crate::cipher::decrypt_eexec(&binary) })
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn encrypt_eexec(plain: &[u8]) -> Vec<u8>
    {
        let mut r = 55665u16;
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
    fn pfb_round_trips_header_and_body()
    {
        let header = b"%!PS-AdobeFont-1.0\n";
        let plaintext_private = [0u8, 0, 0, 0, b'd', b'u', b'p'].to_vec();
        let body = encrypt_eexec(&plaintext_private);

        let mut pfb = Vec::new();
        pfb.push(PFB_MARKER);
        pfb.push(PFB_ASCII);
        pfb.extend_from_slice(&(header.len() as u32).to_le_bytes());
        pfb.extend_from_slice(header);
        pfb.push(PFB_MARKER);
        pfb.push(PFB_BINARY);
        pfb.extend_from_slice(&(body.len() as u32).to_le_bytes());
        pfb.extend_from_slice(&body);
        pfb.push(PFB_MARKER);
        pfb.push(PFB_EOF);

        let sections = from_file_bytes(&pfb).unwrap();
        assert_eq!(sections.cleartext, header);
        assert_eq!(sections.decrypted_private, b"dup");
    }

    #[test]
    fn dehex_strips_trailing_zero_sentinel()
    {
        let hex = b"4475700A3030303030303030";
        let decoded = dehex(hex);
        assert_eq!(decoded, b"Dup\n");
    }

    #[test]
    fn pfa_locates_eexec_payload()
    {
        let mut pfa = Vec::new();
        pfa.extend_from_slice(b"%!PS-AdobeFont-1.0\ncurrentfile eexec\n");
        pfa.extend_from_slice(b"4475700A");
        let sections = split_pfa(&pfa).unwrap();
        assert_eq!(sections.1, b"Dup\n");
        assert!(sections.0.ends_with(b"eexec\n"));
    }
}
