//! Entropy-coded segment bit reader.
//!
//! JPEG's entropy-coded data is MSB-first, like the primitive in
//! `pdfcore_core::bitstream`, but it additionally byte-stuffs a `0x00`
//! after every literal `0xFF` byte so that the decoder can tell a stuffed
//! byte from a real marker. That destuffing has to happen as bytes are
//! pulled into the bit buffer, not beforehand, because a marker can appear
//! at any byte boundary and must stop refilling immediately rather than be
//! copied into a destuffed buffer first, so this reader is implemented
//! fresh here instead of reusing the shared primitive.

use crate::errors::DecodeErrors;

/// Reads bits MSB-first out of an entropy-coded segment, destuffing
/// `0xFF 0x00` to `0xFF` and stopping at the first real marker it meets.
pub struct BitReader<'a>
{
    data: &'a [u8],
    pos:  usize,

    bit_buffer: u64,
    bits_left:  u8,

    /// Second byte of a marker this reader stopped at (`FF xx`), if any.
    /// `self.pos` still points at the marker's leading `0xFF` byte.
    marker: Option<u8>
}

impl<'a> BitReader<'a>
{
    pub fn new(data: &'a [u8]) -> BitReader<'a>
    {
        BitReader { data, pos: 0, bit_buffer: 0, bits_left: 0, marker: None }
    }

    fn refill(&mut self)
    {
        while self.bits_left <= 56 && self.marker.is_none()
        {
            if self.pos >= self.data.len()
            {
                self.marker = Some(0xD9);
                break;
            }

            let byte = self.data[self.pos];
            if byte != 0xFF
            {
                self.bit_buffer = (self.bit_buffer << 8) | u64::from(byte);
                self.bits_left += 8;
                self.pos += 1;
                continue;
            }

            match self.data.get(self.pos + 1)
            {
                Some(0x00) =>
                {
                    self.bit_buffer = (self.bit_buffer << 8) | 0xFF;
                    self.bits_left += 8;
                    self.pos += 2;
                }
                Some(0xFF) =>
                {
                    // A fill byte preceding the real marker; drop it and
                    // look again at the next byte.
                    self.pos += 1;
                }
                Some(&next) =>
                {
                    self.marker = Some(next);
                }
                None =>
                {
                    self.marker = Some(0xD9);
                }
            }
        }
    }

    /// Read a single bit, padding with 1-bits once a marker is reached
    /// (the conventional recovery for a slightly truncated scan).
    pub fn next_bit(&mut self) -> Result<bool, DecodeErrors>
    {
        if self.bits_left == 0
        {
            self.refill();
        }
        if self.bits_left == 0
        {
            return Ok(true);
        }
        self.bits_left -= 1;
        Ok(((self.bit_buffer >> self.bits_left) & 1) == 1)
    }

    /// Look at the next `n` (<= 16) bits without consuming them, MSB-first,
    /// padding with 1-bits past the end of the entropy section exactly as
    /// [`Self::next_bit`] does. Used by the Huffman decoder's 8-bit
    /// lookahead table to probe a whole byte at once.
    pub fn peek_bits(&mut self, n: u8) -> u32
    {
        if self.bits_left < n
        {
            self.refill();
        }

        if self.bits_left >= n
        {
            ((self.bit_buffer >> (self.bits_left - n)) & ((1u64 << n) - 1)) as u32
        }
        else
        {
            let have = self.bits_left;
            let avail = (self.bit_buffer & ((1u64 << have) - 1)) as u32;
            let pad = n - have;
            (avail << pad) | ((1u32 << pad) - 1)
        }
    }

    /// Discard `n` bits already inspected with [`Self::peek_bits`].
    pub fn consume_bits(&mut self, n: u8)
    {
        self.bits_left = self.bits_left.saturating_sub(n);
    }

    /// JPEG's `RECEIVE_EXTEND`: read `size` bits and sign-extend them into
    /// a DC difference or AC coefficient magnitude (Annex F.2.2.1).
    pub fn receive_extend(&mut self, size: u8) -> Result<i32, DecodeErrors>
    {
        if size == 0
        {
            return Ok(0);
        }
        let mut value: i32 = 0;
        for _ in 0..size
        {
            value = (value << 1) | i32::from(self.next_bit()?);
        }
        let half = 1i32 << (size - 1);
        if value < half
        {
            value += (-1i32 << size) + 1;
        }
        Ok(value)
    }

    /// The marker this reader is currently stalled at, if any. Its leading
    /// `0xFF` byte is still unconsumed.
    pub fn marker(&self) -> Option<u8>
    {
        self.marker
    }

    /// Consume the marker this reader stopped at and clear buffered bits,
    /// ready to resume entropy decoding after it (used for restart
    /// markers, which are swallowed silently between MCU groups).
    pub fn restart(&mut self)
    {
        if self.marker.is_some()
        {
            self.pos += 2;
        }
        self.marker = None;
        self.bit_buffer = 0;
        self.bits_left = 0;
    }

    /// Byte offset of the next unread byte (or of the pending marker's
    /// leading `0xFF`).
    pub fn position(&self) -> usize
    {
        self.pos
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn destuffs_ff_00_to_ff()
    {
        let data = [0xFF, 0x00, 0b1010_1010];
        let mut reader = BitReader::new(&data);
        let mut bits = Vec::new();
        for _ in 0..16
        {
            bits.push(reader.next_bit().unwrap());
        }
        let byte: u8 = bits[..8].iter().fold(0, |acc, &b| (acc << 1) | u8::from(b));
        assert_eq!(byte, 0xFF);
    }

    #[test]
    fn stops_at_real_marker()
    {
        let data = [0b1111_1111, 0xFF, 0xD9];
        let mut reader = BitReader::new(&data);
        for _ in 0..8
        {
            reader.next_bit().unwrap();
        }
        assert_eq!(reader.marker(), Some(0xD9));
    }

    #[test]
    fn peek_bits_does_not_consume()
    {
        let data = [0b1011_0000];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.peek_bits(4), 0b1011);
        assert_eq!(reader.peek_bits(4), 0b1011);
        reader.consume_bits(4);
        assert_eq!(reader.peek_bits(4), 0b0000);
    }

    #[test]
    fn receive_extend_sign_extends()
    {
        // size=3, bits "011" = 3, which is >= half(4)? half=4, 3<4 so value += (-1<<3)+1 = -7 -> -4
        let data = [0b0110_0000];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.receive_extend(3).unwrap(), -4);
    }
}
