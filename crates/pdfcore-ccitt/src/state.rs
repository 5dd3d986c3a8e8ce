//! Reference-line bookkeeping shared by the 2-D decoder and encoder.
//!
//! A CCITT 2-D line is coded relative to the previous ("reference") line's
//! colour-change positions. `ReferenceLine` tracks those positions and
//! answers the `b1`/`b2` lookups the state machine in T.4 section 4.2.1.3
//! is built on.

/// Pixel colour in a bi-level scanline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color
{
    White,
    Black
}

impl Color
{
    pub const fn opposite(self) -> Self
    {
        match self
        {
            Self::White => Self::Black,
            Self::Black => Self::White
        }
    }

    pub const fn is_white(self) -> bool
    {
        matches!(self, Self::White)
    }
}

/// A colour change at a given pixel index on a line.
#[derive(Copy, Clone, Debug)]
pub struct ColorChange
{
    pub idx:   u32,
    pub color: Color
}

/// The set of colour changes making up one scanline, consulted as the
/// reference line when decoding or encoding the next one.
pub struct ReferenceLine
{
    changes: Vec<ColorChange>
}

impl ReferenceLine
{
    /// An implicit all-white line of the given width, used as the
    /// reference for row 0 (T.4 section 4.2.1.3.1).
    pub fn all_white(width: u32) -> Self
    {
        let _ = width;
        Self { changes: Vec::new() }
    }

    pub fn from_changes(changes: Vec<ColorChange>) -> Self
    {
        Self { changes }
    }

    pub fn changes(&self) -> &[ColorChange]
    {
        &self.changes
    }

    /// `b1`: the first changing element on this line strictly to the
    /// right of `a0`, of colour opposite to `a0_color`, whose own
    /// predecessor (on this line) is of colour `a0_color`. Equivalently:
    /// the first change at or after `min_idx` whose colour is the
    /// opposite of `a0_color` (the alternating-colour invariant of a
    /// change list makes the "predecessor colour" condition automatic).
    pub fn b1(&self, a0: Option<u32>, a0_color: Color, width: u32) -> u32
    {
        let min_idx = a0.map_or(0, |a| a + 1);
        let target = a0_color.opposite();

        for change in &self.changes
        {
            if change.idx < min_idx
            {
                continue;
            }
            if change.color == target
            {
                return change.idx;
            }
        }
        width
    }

    /// `b2`: the next changing element to the right of `b1` on this line.
    pub fn b2(&self, b1: u32, width: u32) -> u32
    {
        for change in &self.changes
        {
            if change.idx > b1
            {
                return change.idx;
            }
        }
        width
    }
}
