use base64::{engine::general_purpose::STANDARD, Engine as _};
use num_bigint::{BigInt, BigUint, Sign};

use crate::error::ConvertError;

/// Encode a non-negative integer as standard padded base64.
///
/// The integer is first written as its minimal little-endian byte
/// sequence, zero becomes a single zero byte so the sequence is never
/// empty.
pub fn number_to_base64(n: &BigInt) -> Result<String, ConvertError> {
    if n.sign() == Sign::Minus {
        return Err(ConvertError::NegativeNumber);
    }

    let bytes = n.magnitude().to_bytes_le();
    Ok(STANDARD.encode(bytes))
}

/// Decode a standard padded base64 string and read its bytes as a
/// little-endian unsigned integer.
///
/// Decoding is strict: characters outside the standard alphabet, wrong
/// padding or a wrong length all fail, nothing is silently dropped.
pub fn base64_to_number(input: &str) -> Result<BigInt, ConvertError> {
    let bytes = STANDARD.decode(input)?;
    Ok(BigUint::from_bytes_le(&bytes).into())
}
