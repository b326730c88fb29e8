use num_bigint::BigInt;

use crate::error::ConvertError;

/// Parse an integer literal in the given base (2, 8, 10 or 16).
/// A leading `-` is allowed, digits outside the base are not.
pub fn parse_radix(input: &str, radix: u32) -> Result<BigInt, ConvertError> {
    let literal = input.trim();
    if literal.is_empty() {
        return Err(ConvertError::InvalidDigit {
            literal: literal.to_string(),
            radix,
        });
    }

    BigInt::parse_bytes(literal.as_bytes(), radix).ok_or_else(|| ConvertError::InvalidDigit {
        literal: literal.to_string(),
        radix,
    })
}

/// Render an integer in the given base, lowercase digits, no prefix,
/// `-` for negative values.
pub fn format_radix(n: &BigInt, radix: u32) -> String {
    n.to_str_radix(radix)
}
