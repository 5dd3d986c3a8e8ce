//! Canonical Huffman table construction and decoding (ITU-T T.81 Annex C/F).

use crate::bitstream::BitReader;
use crate::errors::DecodeErrors;

/// A decoding table built from a DHT segment's `BITS`/`HUFFVAL` arrays.
///
/// Codes of 8 bits or fewer decode through `lookahead`: a 256-entry table
/// indexed by the next 8 bits of the stream, whose entry is `(symbol,
/// bit_length)` with `bit_length = 0` marking a miss (the code is longer
/// than 8 bits). Codes longer than 8 bits fall back to Annex F.2.2.3's
/// `mincode`/`maxcode`/`valptr` scheme: bits are pulled one at a time, a
/// code of length `l` is valid once it does not exceed `maxcode[l]`, and
/// its symbol is read out of `huffval` at `valptr[l] + (code - mincode[l])`.
#[derive(Clone)]
pub struct HuffmanTable
{
    huffval:   Vec<u8>,
    mincode:   [i32; 17],
    maxcode:   [i32; 18],
    valptr:    [i32; 17],
    lookahead: [(u8, u8); 256]
}

impl HuffmanTable
{
    /// `bits[l]` (1-indexed through `bits[16]`) is the number of codes of
    /// length `l`; `huffval` lists the symbols in code order.
    pub fn new(bits: &[u8; 16], huffval: Vec<u8>) -> Result<HuffmanTable, DecodeErrors>
    {
        let total: usize = bits.iter().map(|&b| b as usize).sum();
        if total != huffval.len()
        {
            return Err(DecodeErrors::FormatStatic(
                "Huffman table BITS counts do not match the number of symbols supplied"
            ));
        }
        if total > 256
        {
            return Err(DecodeErrors::FormatStatic("Huffman table declares more than 256 symbols"));
        }

        let mut huffcode = [0i32; 256];
        let mut huffsize = [0u8; 256];
        let mut k = 0usize;
        for (l, &count) in bits.iter().enumerate()
        {
            for _ in 0..count
            {
                huffsize[k] = (l + 1) as u8;
                k += 1;
            }
        }

        let mut code = 0i32;
        let mut si = if k > 0 { huffsize[0] } else { 0 };
        let mut p = 0usize;
        while p < k
        {
            while p < k && huffsize[p] == si
            {
                huffcode[p] = code;
                code += 1;
                p += 1;
            }
            code <<= 1;
            si += 1;
        }

        let mut mincode = [0i32; 17];
        let mut maxcode = [-1i32; 18];
        let mut valptr = [0i32; 17];
        let mut p = 0usize;
        for l in 1..=16usize
        {
            if bits[l - 1] > 0
            {
                valptr[l] = p as i32;
                mincode[l] = huffcode[p];
                p += bits[l - 1] as usize;
                maxcode[l] = huffcode[p - 1];
            }
            else
            {
                maxcode[l] = -1;
            }
        }
        maxcode[17] = i32::MAX;

        // For every symbol whose code is 8 bits or shorter, fill every
        // 8-bit prefix consistent with that code (i.e. every way of
        // extending it to 8 bits) with the symbol and its true bit length.
        let mut lookahead = [(0u8, 0u8); 256];
        for (idx, &len) in huffsize.iter().enumerate().take(k)
        {
            if len == 0 || len > 8
            {
                continue;
            }
            let shift = 8 - len as u32;
            let base = (huffcode[idx] as u32) << shift;
            let span = 1u32 << shift;
            for prefix in base..base + span
            {
                lookahead[prefix as usize] = (huffval[idx], len);
            }
        }

        Ok(HuffmanTable { huffval, mincode, maxcode, valptr, lookahead })
    }

    /// Decode one symbol from `reader`.
    ///
    /// Codes of 8 bits or fewer resolve in one step through `lookahead`;
    /// anything longer falls back to walking `mincode`/`maxcode`/`valptr`
    /// bit by bit, starting over from the first bit (the lookahead probe
    /// only peeks, it never consumes).
    pub fn decode(&self, reader: &mut BitReader) -> Result<u8, DecodeErrors>
    {
        let prefix = reader.peek_bits(8) as usize;
        let (symbol, len) = self.lookahead[prefix];
        if len > 0
        {
            reader.consume_bits(len);
            return Ok(symbol);
        }

        let mut code = i32::from(reader.next_bit()?);
        let mut l = 1usize;

        while code > self.maxcode[l]
        {
            code = (code << 1) | i32::from(reader.next_bit()?);
            l += 1;
            if l > 16
            {
                return Err(DecodeErrors::HuffmanDecode(
                    "no Huffman code matched the entropy-coded stream".into()
                ));
            }
        }

        let index = (self.valptr[l] + (code - self.mincode[l])) as usize;
        self.huffval.get(index).copied().ok_or(DecodeErrors::HuffmanDecode(
            "Huffman symbol index out of range".into()
        ))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn single_symbol_table_decodes_its_one_bit_code()
    {
        // One symbol of length 1: code "0".
        let bits = [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let table = HuffmanTable::new(&bits, vec![7]).unwrap();
        let data = [0b0000_0000];
        let mut reader = BitReader::new(&data);
        assert_eq!(table.decode(&mut reader).unwrap(), 7);
    }

    #[test]
    fn two_symbol_table_distinguishes_codes()
    {
        // Two symbols of length 1: "0" -> 1, "1" -> 2.
        let bits = [2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let table = HuffmanTable::new(&bits, vec![1, 2]).unwrap();

        let data = [0b1000_0000];
        let mut reader = BitReader::new(&data);
        assert_eq!(table.decode(&mut reader).unwrap(), 2);
    }

    #[test]
    fn lookahead_prefixes_match_their_canonical_codes()
    {
        // Two codes of length 2 ("00" -> 10, "01" -> 20) and two of length 3
        // ("100" -> 30, "101" -> 40).
        let bits = [0, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let table = HuffmanTable::new(&bits, vec![10, 20, 30, 40]).unwrap();
        let codes: [(u32, u8, u8); 4] = [(0b00, 2, 10), (0b01, 2, 20), (0b100, 3, 30), (0b101, 3, 40)];

        for prefix in 0u16..256
        {
            let (symbol, len) = table.lookahead[prefix as usize];
            if len == 0
            {
                continue;
            }

            // First `len` bits of `prefix`, MSB-first.
            let leading = (prefix as u32) >> (8 - len as u32);
            let expected = codes
                .iter()
                .find(|&&(code, l, _)| l == len && code == leading)
                .unwrap_or_else(|| panic!("prefix {prefix:#010b} claims a {len}-bit code not in the table"));
            assert_eq!(symbol, expected.2);
        }
    }
}
