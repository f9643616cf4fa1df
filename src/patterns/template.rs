/// Digit slot marker in grouping templates.
pub const SLOT: char = '#';

pub fn slot_count(template: &str) -> usize {
    template.chars().filter(|&c| c == SLOT).count()
}

/// Fills template slots with `digits`, left to right.
///
/// Punctuation is held back until the digit after it is placed, so the output for any
/// prefix of `digits` is a prefix of the output for `digits`. Digits past the last slot
/// are appended as-is.
pub fn apply(template: &str, digits: &str) -> String {
    let mut out = String::with_capacity(template.len() + digits.len());
    let mut pending = String::new();
    let mut remaining = digits.chars().peekable();

    for token in template.chars() {
        if remaining.peek().is_none() {
            break;
        }
        if token == SLOT {
            out.push_str(&pending);
            pending.clear();
            if let Some(digit) = remaining.next() {
                out.push(digit);
            }
        } else {
            pending.push(token);
        }
    }

    out.extend(remaining);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_fill() {
        let template = "(###) ###-####";
        let cases = vec![
            ("", ""),
            ("5", "(5"),
            ("555", "(555"),
            ("5551", "(555) 1"),
            ("555123", "(555) 123"),
            ("5551234", "(555) 123-4"),
            ("5551234567", "(555) 123-4567"),
        ];

        for (digits, expected) in cases {
            assert_eq!(apply(template, digits), expected, "Template fill for {}", digits);
        }
    }

    #[test]
    fn test_overflow_digits_are_appended() {
        assert_eq!(apply("#### ####", "1234567890"), "1234 567890");
        assert_eq!(apply("", "123"), "123");
    }

    #[test]
    fn test_prefix_stability() {
        let templates = vec!["(###) ###-####", "## ### ## ##", "###-####-####", "# ## ## ## ##"];
        let digits = "98765432109876";

        for template in templates {
            let full = apply(template, digits);
            for end in 0..=digits.len() {
                let partial = apply(template, &digits[..end]);
                assert!(full.starts_with(&partial), "{} is not a prefix of {} ({})", partial, full, template);
            }
        }
    }

    #[test]
    fn test_slot_count() {
        assert_eq!(slot_count("(###) ###-####"), 10);
        assert_eq!(slot_count("#### ####"), 8);
        assert_eq!(slot_count(""), 0);
    }
}
