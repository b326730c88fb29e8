use num_bigint::{BigInt, Sign};

use crate::error::ConvertError;

/// words understood by [`text_to_number`], the original service only
/// ever accepted this table
const SMALL_WORDS: [(&str, u8); 12] = [
    ("zero", 0),
    ("nil", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// short scale group words, one per 3-digit group above the first
const SCALES: [&str; 12] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

/// Look a number word up, case-insensitively and ignoring punctuation.
pub fn text_to_number(input: &str) -> Result<BigInt, ConvertError> {
    let cleaned = input
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();

    SMALL_WORDS
        .iter()
        .find(|(word, _)| *word == cleaned)
        .map(|(_, value)| BigInt::from(*value))
        .ok_or(ConvertError::UnknownWord)
}

/// Render a number as English cardinal words.
pub fn number_to_text(n: &BigInt) -> Result<String, ConvertError> {
    match n.sign() {
        Sign::NoSign => Ok("zero".to_string()),
        Sign::Minus => Ok(format!("minus {}", magnitude_to_text(n)?)),
        Sign::Plus => magnitude_to_text(n),
    }
}

fn magnitude_to_text(n: &BigInt) -> Result<String, ConvertError> {
    let groups = digit_groups(&n.magnitude().to_str_radix(10));
    if groups.len() > SCALES.len() {
        return Err(ConvertError::TextOutOfRange);
    }

    let mut parts = Vec::new();
    for (i, group) in groups.iter().enumerate().rev() {
        if *group == 0 {
            continue;
        }

        let mut text = group_to_text(*group);
        if i > 0 {
            text = format!("{} {}", text, SCALES[i]);
        } else if *group < 100 && !parts.is_empty() {
            // one thousand and one
            text = format!("and {}", text);
        }
        parts.push(text);
    }

    Ok(parts.join(" "))
}

/// split a decimal digit string into u32 groups of three, least
/// significant group first
fn digit_groups(digits: &str) -> Vec<u32> {
    let mut groups = Vec::new();
    let mut end = digits.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        let group = digits[start..end]
            .chars()
            .fold(0u32, |acc, c| acc * 10 + c.to_digit(10).unwrap_or(0));
        groups.push(group);
        end = start;
    }
    groups
}

fn group_to_text(group: u32) -> String {
    let hundreds = (group / 100) as usize;
    let rem = (group % 100) as usize;

    let mut parts = Vec::new();
    if hundreds > 0 {
        parts.push(format!("{} hundred", ONES[hundreds]));
    }
    if rem > 0 {
        let tail = if rem < 20 {
            ONES[rem].to_string()
        } else if rem % 10 == 0 {
            TENS[rem / 10].to_string()
        } else {
            format!("{}-{}", TENS[rem / 10], ONES[rem % 10])
        };
        if hundreds > 0 {
            parts.push(format!("and {}", tail));
        } else {
            parts.push(tail);
        }
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_number() {
        assert_eq!(text_to_number("one").unwrap(), BigInt::from(1));
        assert_eq!(text_to_number("two").unwrap(), BigInt::from(2));
        assert_eq!(text_to_number("five").unwrap(), BigInt::from(5));
        assert_eq!(text_to_number("ten").unwrap(), BigInt::from(10));
        assert_eq!(text_to_number("zero").unwrap(), BigInt::from(0));
        assert_eq!(text_to_number("nil").unwrap(), BigInt::from(0));
    }

    #[test]
    fn test_text_to_number_folds_case_and_punctuation() {
        assert_eq!(text_to_number("ONE").unwrap(), BigInt::from(1));
        assert_eq!(text_to_number("Two").unwrap(), BigInt::from(2));
        assert_eq!(text_to_number("one!").unwrap(), BigInt::from(1));
        assert_eq!(text_to_number("two...").unwrap(), BigInt::from(2));
        assert_eq!(text_to_number("five@#$").unwrap(), BigInt::from(5));
    }

    #[test]
    fn test_text_to_number_rejects_unknown_words() {
        for input in ["eleven", "hundred", "invalid", ""] {
            let err = text_to_number(input).unwrap_err();
            assert!(matches!(err, ConvertError::UnknownWord), "{:?}", input);
        }
    }

    #[test]
    fn test_number_to_text_small() {
        assert_eq!(number_to_text(&BigInt::from(0)).unwrap(), "zero");
        assert_eq!(number_to_text(&BigInt::from(1)).unwrap(), "one");
        assert_eq!(number_to_text(&BigInt::from(5)).unwrap(), "five");
        assert_eq!(number_to_text(&BigInt::from(10)).unwrap(), "ten");
        assert_eq!(number_to_text(&BigInt::from(13)).unwrap(), "thirteen");
        assert_eq!(number_to_text(&BigInt::from(40)).unwrap(), "forty");
        assert_eq!(number_to_text(&BigInt::from(42)).unwrap(), "forty-two");
    }

    #[test]
    fn test_number_to_text_larger() {
        assert_eq!(number_to_text(&BigInt::from(100)).unwrap(), "one hundred");
        assert_eq!(
            number_to_text(&BigInt::from(123)).unwrap(),
            "one hundred and twenty-three"
        );
        assert_eq!(number_to_text(&BigInt::from(1000)).unwrap(), "one thousand");
        assert_eq!(
            number_to_text(&BigInt::from(1001)).unwrap(),
            "one thousand and one"
        );
        assert_eq!(
            number_to_text(&BigInt::from(1234)).unwrap(),
            "one thousand two hundred and thirty-four"
        );
        assert_eq!(
            number_to_text(&BigInt::from(1000000)).unwrap(),
            "one million"
        );
    }

    #[test]
    fn test_number_to_text_negative() {
        assert_eq!(number_to_text(&BigInt::from(-1)).unwrap(), "minus one");
        assert_eq!(
            number_to_text(&BigInt::from(-42)).unwrap(),
            "minus forty-two"
        );
    }

    #[test]
    fn test_number_to_text_out_of_range() {
        // one group past decillion
        let n = format!("1{}", "0".repeat(36)).parse::<BigInt>().unwrap();
        let err = number_to_text(&n).unwrap_err();
        assert!(matches!(err, ConvertError::TextOutOfRange));
    }
}
