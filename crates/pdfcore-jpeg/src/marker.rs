//! JPEG marker codes (ITU-T T.81 Table B.1).

/// A marker encountered while scanning the bytestream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Marker
{
    /// Start of image, 0xFFD8.
    SOI,
    /// End of image, 0xFFD9.
    EOI,
    /// Baseline DCT frame header, 0xFFC0.
    SOF(u8),
    /// Define Huffman Table, 0xFFC4.
    DHT,
    /// Define Quantization Table, 0xFFDB.
    DQT,
    /// Define Restart Interval, 0xFFDD.
    DRI,
    /// Start of Scan, 0xFFDA.
    SOS,
    /// Restart marker 0-7, 0xFFD0-0xFFD7.
    RST(u8),
    /// Application segment 0-15, 0xFFE0-0xFFEF.
    APP(u8),
    /// Comment, 0xFFFE.
    COM,
    /// Any other marker this decoder does not special-case.
    Other(u8)
}

impl Marker
{
    /// Parse a marker from its second byte (the byte following `0xFF`).
    ///
    /// Returns `None` for `0x00` (a stuffed byte, never a marker) and for
    /// `0xFF` (a fill byte preceding the real marker).
    pub fn from_u8(byte: u8) -> Option<Marker>
    {
        match byte
        {
            0x00 | 0xFF => None,
            0xD8 => Some(Marker::SOI),
            0xD9 => Some(Marker::EOI),
            0xC0 | 0xC1 => Some(Marker::SOF(byte - 0xC0)),
            0xC2..=0xCF if byte != 0xC4 && byte != 0xC8 && byte != 0xCC => Some(Marker::SOF(byte - 0xC0)),
            0xC4 => Some(Marker::DHT),
            0xDB => Some(Marker::DQT),
            0xDD => Some(Marker::DRI),
            0xDA => Some(Marker::SOS),
            0xD0..=0xD7 => Some(Marker::RST(byte - 0xD0)),
            0xE0..=0xEF => Some(Marker::APP(byte - 0xE0)),
            0xFE => Some(Marker::COM),
            _ => Some(Marker::Other(byte))
        }
    }
}
