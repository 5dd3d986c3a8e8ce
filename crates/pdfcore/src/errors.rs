//! The facade's aggregate error type: every subsystem error folds into
//! this one so callers driving several codecs from one call site don't
//! need to match on four different error enums.
use std::fmt::{Debug, Display, Formatter};

/// All errors any enabled pdfcore subsystem can return.
pub enum PdfCoreError
{
    #[cfg(feature = "ccitt")]
    Ccitt(pdfcore_ccitt::CcittError),
    #[cfg(feature = "jpeg")]
    Jpeg(pdfcore_jpeg::errors::DecodeErrors),
    #[cfg(feature = "type1")]
    Type1(pdfcore_type1::Type1Error),
    #[cfg(feature = "crypt")]
    Crypt(pdfcore_crypt::CryptError),
    /// The caller asked for a subsystem whose feature was not compiled in.
    FeatureNotEnabled(&'static str)
}

impl Debug for PdfCoreError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            #[cfg(feature = "ccitt")]
            Self::Ccitt(err) => write!(f, "{err:?}"),
            #[cfg(feature = "jpeg")]
            Self::Jpeg(err) => write!(f, "{err:?}"),
            #[cfg(feature = "type1")]
            Self::Type1(err) => write!(f, "{err:?}"),
            #[cfg(feature = "crypt")]
            Self::Crypt(err) => write!(f, "{err:?}"),
            Self::FeatureNotEnabled(name) => write!(f, "The \"{name}\" feature was not enabled for this build")
        }
    }
}

impl Display for PdfCoreError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PdfCoreError {}

#[cfg(feature = "ccitt")]
impl From<pdfcore_ccitt::CcittError> for PdfCoreError
{
    fn from(value: pdfcore_ccitt::CcittError) -> Self
    {
        Self::Ccitt(value)
    }
}

#[cfg(feature = "jpeg")]
impl From<pdfcore_jpeg::errors::DecodeErrors> for PdfCoreError
{
    fn from(value: pdfcore_jpeg::errors::DecodeErrors) -> Self
    {
        Self::Jpeg(value)
    }
}

#[cfg(feature = "type1")]
impl From<pdfcore_type1::Type1Error> for PdfCoreError
{
    fn from(value: pdfcore_type1::Type1Error) -> Self
    {
        Self::Type1(value)
    }
}

#[cfg(feature = "crypt")]
impl From<pdfcore_crypt::CryptError> for PdfCoreError
{
    fn from(value: pdfcore_crypt::CryptError) -> Self
    {
        Self::Crypt(value)
    }
}
