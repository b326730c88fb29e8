use thiserror::Error;

/// Every way a conversion can fail. Wire-facing messages for the kinds
/// the original service reported verbatim are kept stable, callers match
/// on the variant rather than the text.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// base64 only covers non-negative values
    #[error("negative numbers have no base64 representation")]
    NegativeNumber,

    #[error("Invalid base64 input")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("invalid digit for base {radix} number: {literal:?}")]
    InvalidDigit { literal: String, radix: u32 },

    #[error("Unable to convert text to number")]
    UnknownWord,

    #[error("number too large to convert to text")]
    TextOutOfRange,

    #[error("Invalid input type")]
    InvalidInputType,

    #[error("Invalid output type")]
    InvalidOutputType,
}
