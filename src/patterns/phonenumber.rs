use regex::Regex;
use lazy_static::lazy_static;
use crate::registry::CountryDialingRegistry;
use super::strip_non_digits;

lazy_static! {
    // "+<code digits><rest>", rest empty for compact values like "+85212345678".
    // ASCII digits only; rest may span lines.
    static ref INTERNATIONAL_PATTERN: Regex = Regex::new(
        r"(?s)^\s*\+([0-9]+)(.*?)\s*$"
    ).unwrap();
}

/// A stored value split into calling code and national digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedValue {
    pub calling_code: Option<&'static str>,
    pub national_digits: String,
}

/// Splits `value` into a registered calling code and the remaining digits.
///
/// A delimited token (`+1 416...`) is taken as the code when it is registered on its
/// own; anything else falls back to the longest registered prefix of all digits.
/// Values without a recognizable code keep every digit as national digits.
pub fn parse_committed(registry: &CountryDialingRegistry, value: &str) -> ParsedValue {
    let caps = match INTERNATIONAL_PATTERN.captures(value) {
        Some(caps) => caps,
        None => {
            return ParsedValue {
                calling_code: None,
                national_digits: strip_non_digits(value),
            }
        }
    };

    let token = &caps[1];
    let rest = &caps[2];

    if !rest.is_empty() {
        if let Some(code) = registry.exact_calling_code(token) {
            return ParsedValue {
                calling_code: Some(code),
                national_digits: strip_non_digits(rest),
            };
        }
    }

    let all_digits = format!("{}{}", token, strip_non_digits(rest));
    match registry.match_calling_code_prefix(&all_digits) {
        Some(code) => ParsedValue {
            calling_code: Some(code),
            national_digits: all_digits[code.len() - 1..].to_string(),
        },
        None => ParsedValue {
            calling_code: None,
            national_digits: all_digits,
        },
    }
}
