//! Errors possible while parsing a Type 1 font or interpreting its glyphs.
use std::fmt::{Debug, Display, Formatter};

/// All possible errors the Type 1 parser and interpreter can return.
pub enum Type1Error
{
    /// The container was neither a recognisable PFB segment sequence nor
    /// plausible PFA/PDF-embedded ASCII.
    UnrecognizedContainer,
    /// A PFB segment header's declared length ran past the end of the file.
    TruncatedSegment,
    /// The eexec section never produced a `cleartomark` before the input
    /// was exhausted.
    MissingCleartomark,
    /// `/CharStrings` or `/Subrs` referenced an index or name that was
    /// never defined.
    UndefinedCharstring(String),
    /// The charstring interpreter's argument or call stack overflowed.
    StackOverflow,
    /// The charstring interpreter's argument stack underflowed a command
    /// that needed more operands than were pushed.
    StackUnderflow,
    /// A `callsubr`/`callothersubr` nested deeper than is plausible for a
    /// well-formed font, taken as a sign of a cyclic subroutine.
    RecursionLimitExceeded,
    /// `/lenIV` was declared outside the supported `[0, 16]` range.
    UnsupportedLenIv(usize)
}

impl Debug for Type1Error
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::UnrecognizedContainer => write!(f, "Not a PFA, PFB or PDF-embedded Type 1 font"),
            Self::TruncatedSegment => write!(f, "A PFB segment's declared length exceeds the remaining data"),
            Self::MissingCleartomark => write!(f, "eexec section has no cleartomark terminator"),
            Self::UndefinedCharstring(name) => write!(f, "Reference to undefined charstring {name:?}"),
            Self::StackOverflow => write!(f, "Charstring interpreter argument stack overflowed"),
            Self::StackUnderflow => write!(f, "Charstring interpreter argument stack underflowed"),
            Self::RecursionLimitExceeded => write!(f, "Charstring subroutine recursion exceeded the limit"),
            Self::UnsupportedLenIv(n) => write!(f, "/lenIV {n} is outside the supported range [0, 16]")
        }
    }
}

impl Display for Type1Error
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Type1Error {}
