//! Trebuchet calibration values
//!
//! A calibration value is the two-digit number formed by the first and last digit
//! appearing in a line. Part two of the puzzle also counts spelled-out digits, which
//! are first rewritten into numerals by [`translate_word_digits`].

use thiserror::Error;

/// Spelled-out digits and their numeral replacements
const DIGIT_WORDS: [(&str, char); 9] = [
    ("one", '1'),
    ("two", '2'),
    ("three", '3'),
    ("four", '4'),
    ("five", '5'),
    ("six", '6'),
    ("seven", '7'),
    ("eight", '8'),
    ("nine", '9'),
];

/// Error type for lines that carry no calibration value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalibrationError {
    #[error("no digits found in line {0:?}")]
    NoDigits(String),
}

/// Replace the first letter of every digit word with its numeral
///
/// Words may overlap: in `eightwo` both `eight` and `two` are recognised because
/// every position is matched against the original line, while replacements go to a
/// separate output buffer. Each replacement writes exactly one character, so the
/// output has the same number of characters as the input.
///
/// # Examples
/// ```
/// use aoc2023::core::translate_word_digits;
///
/// assert_eq!(translate_word_digits("eightwothree"), "8igh2wo3hree");
/// assert_eq!(translate_word_digits("abc"), "abc");
/// ```
#[must_use]
pub fn translate_word_digits(line: &str) -> String {
    let mut translated = String::with_capacity(line.len());

    for (index, ch) in line.char_indices() {
        let rest = &line[index..];
        let digit = DIGIT_WORDS
            .iter()
            .find(|(word, _)| rest.starts_with(word))
            .map_or(ch, |&(_, digit)| digit);
        translated.push(digit);
    }

    translated
}

/// Combine the first and last digit of a line into its calibration value
///
/// A line with a single digit uses it as both the first and the last digit.
///
/// # Errors
///
/// Returns [`CalibrationError::NoDigits`] if the line contains no ASCII digit.
///
/// # Examples
/// ```
/// use aoc2023::core::find_calibration_value;
///
/// assert_eq!(find_calibration_value("pqr3stu8vwx").unwrap(), 38);
/// assert_eq!(find_calibration_value("treb7uchet").unwrap(), 77);
/// assert!(find_calibration_value("trebuchet").is_err());
/// ```
pub fn find_calibration_value(line: &str) -> Result<u32, CalibrationError> {
    let mut digits = line.chars().filter_map(|c| c.to_digit(10));

    let first = digits
        .next()
        .ok_or_else(|| CalibrationError::NoDigits(line.to_string()))?;
    let last = digits.next_back().unwrap_or(first);

    Ok(first * 10 + last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CALIBRATION_VALUES: [(&str, u32); 4] = [
        ("1abc2", 12),
        ("pqr3stu8vwx", 38),
        ("a1b2c3d4e5f", 15),
        ("treb7uchet", 77),
    ];

    const CALIBRATION_VALUES_WITH_TRANSLATION: [(&str, u32); 7] = [
        ("two1nine", 29),
        ("eightwothree", 83),
        ("abcone2threexyz", 13),
        ("xtwone3four", 24),
        ("4nineeightseven2", 42),
        ("zoneight234", 14),
        ("7pqrstsixteen", 76),
    ];

    #[test]
    fn calibration_value_from_digits() {
        for (line, expected) in CALIBRATION_VALUES {
            assert_eq!(find_calibration_value(line), Ok(expected), "line {line}");
        }
    }

    #[test]
    fn calibration_value_with_translation() {
        for (line, expected) in CALIBRATION_VALUES_WITH_TRANSLATION {
            let translated = translate_word_digits(line);
            assert_eq!(
                find_calibration_value(&translated),
                Ok(expected),
                "line {line} translated to {translated}"
            );
        }
    }

    #[test]
    fn calibration_value_single_digit_is_first_and_last() {
        assert_eq!(find_calibration_value("abc5def"), Ok(55));
    }

    #[test]
    fn calibration_value_without_digits_fails() {
        assert_eq!(
            find_calibration_value("trebuchet"),
            Err(CalibrationError::NoDigits("trebuchet".to_string()))
        );
        assert!(find_calibration_value("").is_err());
    }

    #[test]
    fn translate_overlapping_words() {
        assert_eq!(translate_word_digits("eightwothree"), "8igh2wo3hree");
        assert_eq!(translate_word_digits("twone"), "2w1ne");
        assert_eq!(translate_word_digits("oneight"), "1n8ight");
    }

    #[test]
    fn translate_leaves_other_characters() {
        assert_eq!(translate_word_digits("a1b-2c"), "a1b-2c");
        assert_eq!(translate_word_digits(""), "");
        assert_eq!(translate_word_digits("on"), "on");
    }

    #[test]
    fn translate_does_not_match_zero() {
        assert_eq!(translate_word_digits("zero"), "zero");
    }

    proptest! {
        #[test]
        fn translation_preserves_length(line in "[a-z0-9]{0,40}") {
            let translated = translate_word_digits(&line);
            prop_assert_eq!(translated.len(), line.len());
        }

        #[test]
        fn translation_idempotent_without_digit_words(line in "[ab0-9xyz]{1,30}") {
            let once = translate_word_digits(&line);
            let twice = translate_word_digits(&once);
            prop_assert_eq!(&once, &line);
            prop_assert_eq!(
                find_calibration_value(&twice),
                find_calibration_value(&line)
            );
        }

        #[test]
        fn calibration_value_is_two_digits(
            prefix in "[a-z]{0,5}",
            first in 1u32..10,
            middle in "[a-z0-9]{0,10}",
            last in 0u32..10,
            suffix in "[a-z]{0,5}",
        ) {
            let line = format!("{prefix}{first}{middle}{last}{suffix}");
            prop_assert_eq!(find_calibration_value(&line), Ok(first * 10 + last));
        }
    }
}
