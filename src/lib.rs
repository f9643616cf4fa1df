pub mod config;
pub mod error;
pub mod formatter;
pub mod mcp_server;
pub mod patterns;
pub mod registry;

pub use config::FormatterConfig;
pub use error::ServiceError;
pub use formatter::{classify_digits, FormatterSession, InputOutcome, LengthVerdict, PhoneFormatter};
pub use registry::{CountryDialingEntry, CountryDialingRegistry, REGISTRY};

/// Classifies a stored phone value against its country's length ceiling
pub fn classify(value: &str) -> LengthVerdict {
    PhoneFormatter::default().initialize(value, None).verdict()
}

/// Normalizes a stored or free-typed value into `"<calling code> <national>"`
pub fn format_phone(value: &str, country_hint: Option<&str>) -> String {
    PhoneFormatter::default()
        .initialize(value, country_hint)
        .committed_value()
}

/// Drop-down labels keyed by ISO code, in picker order
pub fn country_picker_options() -> Vec<(&'static str, String)> {
    registry::entries_sorted_by_country_name()
        .into_iter()
        .map(|entry| (entry.iso_code, entry.picker_label()))
        .collect()
}
