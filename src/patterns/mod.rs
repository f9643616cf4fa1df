pub mod phonenumber;
pub mod rules;
pub mod template;

/// Renders a national digit buffer as a display string.
pub trait NationalFormatter {
    fn format(&self, digits: &str) -> String;
}

/// Grouping descriptor for one country.
///
/// `national` is a template where `#` is a digit slot and every other character is
/// punctuation. When the buffer starts with the trunk prefix, the trunk template is
/// used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRule {
    pub national: &'static str,
    pub trunk: Option<(&'static str, &'static str)>,
}

impl FormatRule {
    pub const fn plain(national: &'static str) -> Self {
        Self { national, trunk: None }
    }

    pub const fn with_trunk(national: &'static str, prefix: &'static str, trunk_template: &'static str) -> Self {
        Self {
            national,
            trunk: Some((prefix, trunk_template)),
        }
    }

    /// Template selected for `digits`. Depends only on the leading digits.
    pub fn template_for(&self, digits: &str) -> &'static str {
        match self.trunk {
            Some((prefix, trunk_template)) if digits.starts_with(prefix) => trunk_template,
            _ => self.national,
        }
    }

    pub fn trunk_prefix(&self) -> Option<&'static str> {
        self.trunk.map(|(prefix, _)| prefix)
    }

    /// Slot count of the longest template.
    pub fn max_slots(&self) -> usize {
        let national = template::slot_count(self.national);
        match self.trunk {
            Some((_, trunk_template)) => national.max(template::slot_count(trunk_template)),
            None => national,
        }
    }
}

impl NationalFormatter for FormatRule {
    fn format(&self, digits: &str) -> String {
        template::apply(self.template_for(digits), digits)
    }
}

/// Formats a digit buffer for `iso_code`. Unknown codes get the digits back unpunctuated.
pub fn format_national(iso_code: &str, digits: &str) -> String {
    match rules::rule_for(iso_code) {
        Some(rule) => rule.format(digits),
        None => digits.to_string(),
    }
}

/// Keeps ASCII digits only.
pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
