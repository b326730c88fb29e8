use num_bigint::BigInt;

use crate::{b64, error::ConvertError, radix, words};

/// The representations the conversion matrix speaks. Wire names are the
/// lowercase form used by the HTTP API and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
    Base64,
}

impl Format {
    pub const ALL: [Format; 6] = [
        Format::Text,
        Format::Binary,
        Format::Octal,
        Format::Decimal,
        Format::Hexadecimal,
        Format::Base64,
    ];

    /// Parse a wire name. The caller decides whether a miss is an
    /// invalid input type or an invalid output type.
    pub fn parse(s: &str) -> Option<Format> {
        match s {
            "text" => Some(Format::Text),
            "binary" => Some(Format::Binary),
            "octal" => Some(Format::Octal),
            "decimal" => Some(Format::Decimal),
            "hexadecimal" => Some(Format::Hexadecimal),
            "base64" => Some(Format::Base64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Binary => "binary",
            Format::Octal => "octal",
            Format::Decimal => "decimal",
            Format::Hexadecimal => "hexadecimal",
            Format::Base64 => "base64",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an input string under the given format into a number.
pub fn parse_number(input: &str, format: Format) -> Result<BigInt, ConvertError> {
    match format {
        Format::Text => words::text_to_number(input),
        Format::Binary => radix::parse_radix(input, 2),
        Format::Octal => radix::parse_radix(input, 8),
        Format::Decimal => radix::parse_radix(input, 10),
        Format::Hexadecimal => radix::parse_radix(input, 16),
        Format::Base64 => b64::base64_to_number(input),
    }
}

/// Render a number under the given format.
pub fn format_number(n: &BigInt, format: Format) -> Result<String, ConvertError> {
    match format {
        Format::Text => words::number_to_text(n),
        Format::Binary => Ok(radix::format_radix(n, 2)),
        Format::Octal => Ok(radix::format_radix(n, 8)),
        Format::Decimal => Ok(radix::format_radix(n, 10)),
        Format::Hexadecimal => Ok(radix::format_radix(n, 16)),
        Format::Base64 => b64::number_to_base64(n),
    }
}

pub fn convert(input: &str, from: Format, to: Format) -> Result<String, ConvertError> {
    let n = parse_number(input, from)?;
    format_number(&n, to)
}
