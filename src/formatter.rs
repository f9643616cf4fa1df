//! As-you-type formatting and length gating for a single phone field.
//!
//! A [`FormatterSession`] is a plain value: every operation on [`PhoneFormatter`]
//! returns a new session and never mutates the one passed in. Hosts keep the latest
//! accepted session per field and persist [`FormatterSession::committed_value`].

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::config::FormatterConfig;
use crate::patterns::phonenumber::parse_committed;
use crate::patterns::rules::rule_for;
use crate::patterns::{format_national, strip_non_digits};
use crate::registry::{CountryDialingEntry, FALLBACK_ENTRY, REGISTRY};

/// Where a digit buffer sits relative to its country's ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthVerdict {
    Empty,
    Incomplete,
    Complete,
    TooLong,
}

impl LengthVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthVerdict::Empty => "empty",
            LengthVerdict::Incomplete => "incomplete",
            LengthVerdict::Complete => "complete",
            LengthVerdict::TooLong => "too_long",
        }
    }
}

impl fmt::Display for LengthVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field state: selected country and the digits typed so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterSession {
    iso_code: String,
    calling_code: String,
    digits: String,
    display: String,
}

impl FormatterSession {
    fn new(entry: &CountryDialingEntry, digits: String) -> Self {
        let display = format_national(entry.iso_code, &digits);
        Self {
            iso_code: entry.iso_code.to_string(),
            calling_code: entry.calling_code.to_string(),
            digits,
            display,
        }
    }

    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    pub fn calling_code(&self) -> &str {
        &self.calling_code
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// `"<calling code> <display>"`, the value hosts persist.
    pub fn committed_value(&self) -> String {
        format!("{} {}", self.calling_code, self.display)
    }

    pub fn verdict(&self) -> LengthVerdict {
        classify_digits(&self.iso_code, &self.digits)
    }
}

/// Result of feeding one edit into a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputOutcome {
    pub session: FormatterSession,
    pub accepted: bool,
    pub display: String,
}

impl InputOutcome {
    fn accept(session: FormatterSession) -> Self {
        let display = session.display.clone();
        Self { session, accepted: true, display }
    }

    fn reject(session: &FormatterSession) -> Self {
        Self {
            session: session.clone(),
            accepted: false,
            display: session.display.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PhoneFormatter {
    default_entry: &'static CountryDialingEntry,
}

impl Default for PhoneFormatter {
    fn default() -> Self {
        Self::new(&FormatterConfig::default())
    }
}

impl PhoneFormatter {
    pub fn new(config: &FormatterConfig) -> Self {
        let default_entry = match REGISTRY.lookup_by_iso_code(&config.default_iso_code) {
            Some(entry) => entry,
            None => {
                warn!(
                    "Default country '{}' not registered, using {}",
                    config.default_iso_code, FALLBACK_ENTRY.iso_code
                );
                &FALLBACK_ENTRY
            }
        };
        Self { default_entry }
    }

    pub fn default_iso_code(&self) -> &'static str {
        self.default_entry.iso_code
    }

    /// Builds a session for a field that has no earlier country selection.
    pub fn initialize(&self, existing_value: &str, country_hint: Option<&str>) -> FormatterSession {
        self.initialize_with_selection(existing_value, country_hint, None)
    }

    /// Builds a session from a stored value.
    ///
    /// For a calling code shared by several countries, `prior_iso` wins when it uses
    /// that code (a field that already shows Canada stays Canada on `+1`). Otherwise
    /// the first registered country for the code is chosen.
    pub fn initialize_with_selection(
        &self,
        existing_value: &str,
        country_hint: Option<&str>,
        prior_iso: Option<&str>,
    ) -> FormatterSession {
        let prior = prior_iso.and_then(|iso| REGISTRY.lookup_by_iso_code(iso));
        let trimmed = existing_value.trim();

        if trimmed.is_empty() {
            let entry = country_hint
                .and_then(|hint| REGISTRY.lookup_by_country_name(hint))
                .or(prior)
                .unwrap_or(self.default_entry);
            debug!("Empty value, starting with country {}", entry.iso_code);
            return FormatterSession::new(entry, String::new());
        }

        let parsed = parse_committed(&REGISTRY, trimmed);
        let entry = match parsed.calling_code {
            Some(code) => match prior {
                Some(selected) if selected.calling_code == code => selected,
                _ => REGISTRY
                    .primary_for_calling_code(code)
                    .unwrap_or(self.default_entry),
            },
            None => {
                debug!("No calling code recognized in stored value, keeping digits only");
                prior.unwrap_or(self.default_entry)
            }
        };

        FormatterSession::new(entry, parsed.national_digits)
    }

    /// Rebuilds a session from its persisted parts. Non-digits in `digits` are dropped.
    pub fn restore(&self, iso_code: &str, digits: &str) -> FormatterSession {
        let entry = REGISTRY
            .lookup_by_iso_code(iso_code)
            .unwrap_or(self.default_entry);
        FormatterSession::new(entry, strip_non_digits(digits))
    }

    /// Reformats the same digits for another country.
    pub fn change_country(&self, session: &FormatterSession, new_iso_code: &str) -> FormatterSession {
        let entry = match REGISTRY.lookup_by_iso_code(new_iso_code) {
            Some(entry) => entry,
            None => {
                warn!(
                    "Unknown country '{}', formatting as {}",
                    new_iso_code, self.default_entry.iso_code
                );
                self.default_entry
            }
        };
        FormatterSession::new(entry, session.digits.clone())
    }

    /// Feeds the full field content after an edit.
    ///
    /// Edits that drop digits, or shorten the field without adding digits, are always
    /// accepted. Anything else is rejected once the digit count passes the ceiling.
    pub fn apply_input(&self, session: &FormatterSession, new_raw_input: &str) -> InputOutcome {
        let candidate = strip_non_digits(new_raw_input);
        let previous_count = session.digits.len();

        let fewer_digits = candidate.len() < previous_count;
        let shorter_field = new_raw_input.chars().count() < session.display.chars().count()
            && candidate.len() <= previous_count;

        if fewer_digits || shorter_field {
            return InputOutcome::accept(self.with_digits(session, candidate));
        }

        if candidate == session.digits {
            return InputOutcome::accept(session.clone());
        }

        if classify_digits(&session.iso_code, &candidate) == LengthVerdict::TooLong {
            debug!(
                "Rejected input for {}: {} digits over ceiling",
                session.iso_code,
                candidate.len()
            );
            return InputOutcome::reject(session);
        }

        InputOutcome::accept(self.with_digits(session, candidate))
    }

    fn with_digits(&self, session: &FormatterSession, digits: String) -> FormatterSession {
        let entry = REGISTRY
            .lookup_by_iso_code(&session.iso_code)
            .unwrap_or(self.default_entry);
        FormatterSession::new(entry, digits)
    }
}

/// Classifies `digits` against the ceiling for `iso_code`.
///
/// Unknown countries are never too long, there is nothing to gate on.
pub fn classify_digits(iso_code: &str, digits: &str) -> LengthVerdict {
    if digits.is_empty() {
        return LengthVerdict::Empty;
    }

    let ceiling = match REGISTRY.lookup_by_iso_code(iso_code) {
        Some(entry) => entry.example_national_length,
        None => return LengthVerdict::Incomplete,
    };

    let count = digits.len();
    if count > ceiling {
        return LengthVerdict::TooLong;
    }
    if count == ceiling {
        return LengthVerdict::Complete;
    }

    // Without the optional trunk prefix the number is complete one group earlier.
    let trunk = rule_for(iso_code).and_then(|rule| rule.trunk_prefix());
    match trunk {
        Some(prefix) if !digits.starts_with(prefix) && count + prefix.len() == ceiling => {
            LengthVerdict::Complete
        }
        _ => LengthVerdict::Incomplete,
    }
}
