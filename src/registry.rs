use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// One row of the dialing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryDialingEntry {
    pub country_name: &'static str,
    pub iso_code: &'static str,
    pub calling_code: &'static str,
    /// Longest plausible national number, trunk prefix included where one is optional.
    pub example_national_length: usize,
}

impl CountryDialingEntry {
    /// Calling code without the leading `+`.
    pub fn calling_digits(&self) -> &'static str {
        self.calling_code.trim_start_matches('+')
    }

    pub fn picker_label(&self) -> String {
        format!("{} ({})", self.country_name, self.calling_code)
    }
}

// (name, iso, calling code, ceiling)
// Order matters for shared calling codes: the first row with a code is its primary entry.
const DIALING_TABLE: &[(&str, &str, &str, usize)] = &[
    ("United States", "US", "+1", 10),
    ("Canada", "CA", "+1", 10),
    ("Bahamas", "BS", "+1", 10),
    ("Barbados", "BB", "+1", 10),
    ("Dominican Republic", "DO", "+1", 10),
    ("Jamaica", "JM", "+1", 10),
    ("Puerto Rico", "PR", "+1", 10),
    ("Trinidad and Tobago", "TT", "+1", 10),
    ("Russia", "RU", "+7", 11),
    ("Kazakhstan", "KZ", "+7", 11),
    ("Egypt", "EG", "+20", 11),
    ("South Africa", "ZA", "+27", 10),
    ("Greece", "GR", "+30", 10),
    ("Netherlands", "NL", "+31", 10),
    ("Belgium", "BE", "+32", 10),
    ("France", "FR", "+33", 10),
    ("Spain", "ES", "+34", 9),
    ("Italy", "IT", "+39", 10),
    ("Switzerland", "CH", "+41", 10),
    ("United Kingdom", "GB", "+44", 11),
    ("Denmark", "DK", "+45", 8),
    ("Sweden", "SE", "+46", 10),
    ("Norway", "NO", "+47", 8),
    ("Poland", "PL", "+48", 9),
    ("Germany", "DE", "+49", 12),
    ("Peru", "PE", "+51", 9),
    ("Mexico", "MX", "+52", 10),
    ("Argentina", "AR", "+54", 11),
    ("Brazil", "BR", "+55", 11),
    ("Chile", "CL", "+56", 9),
    ("Colombia", "CO", "+57", 10),
    ("Malaysia", "MY", "+60", 11),
    ("Australia", "AU", "+61", 10),
    ("Indonesia", "ID", "+62", 12),
    ("Philippines", "PH", "+63", 11),
    ("New Zealand", "NZ", "+64", 10),
    ("Singapore", "SG", "+65", 8),
    ("Thailand", "TH", "+66", 10),
    ("Japan", "JP", "+81", 11),
    ("South Korea", "KR", "+82", 11),
    ("Vietnam", "VN", "+84", 10),
    ("China", "CN", "+86", 11),
    ("Turkey", "TR", "+90", 11),
    ("India", "IN", "+91", 11),
    ("Pakistan", "PK", "+92", 11),
    ("Sri Lanka", "LK", "+94", 10),
    ("Nigeria", "NG", "+234", 11),
    ("Kenya", "KE", "+254", 10),
    ("Portugal", "PT", "+351", 9),
    ("Ireland", "IE", "+353", 10),
    ("Finland", "FI", "+358", 10),
    ("Hong Kong", "HK", "+852", 8),
    ("Macau", "MO", "+853", 8),
    ("Bangladesh", "BD", "+880", 11),
    ("Taiwan", "TW", "+886", 10),
    ("Israel", "IL", "+972", 10),
    ("United Arab Emirates", "AE", "+971", 10),
    ("Saudi Arabia", "SA", "+966", 10),
    ("Nepal", "NP", "+977", 10),
];

/// Row used when a configured default country is not in the table.
pub static FALLBACK_ENTRY: CountryDialingEntry = CountryDialingEntry {
    country_name: "United States",
    iso_code: "US",
    calling_code: "+1",
    example_national_length: 10,
};

lazy_static! {
    pub static ref REGISTRY: CountryDialingRegistry = CountryDialingRegistry::builtin();
}

/// Read-only lookup from ISO code, country name or calling code to dialing metadata.
pub struct CountryDialingRegistry {
    entries: Vec<CountryDialingEntry>,
    by_iso: HashMap<&'static str, usize>,
    by_name: HashMap<&'static str, usize>,
    by_calling_code: HashMap<&'static str, Vec<usize>>,
}

impl CountryDialingRegistry {
    pub fn builtin() -> Self {
        Self::from_entries(
            DIALING_TABLE
                .iter()
                .map(|&(country_name, iso_code, calling_code, example_national_length)| {
                    CountryDialingEntry {
                        country_name,
                        iso_code,
                        calling_code,
                        example_national_length,
                    }
                })
                .collect(),
        )
    }

    pub fn from_entries(entries: Vec<CountryDialingEntry>) -> Self {
        let mut by_iso = HashMap::new();
        let mut by_name = HashMap::new();
        let mut by_calling_code: HashMap<&'static str, Vec<usize>> = HashMap::new();

        for (index, entry) in entries.iter().enumerate() {
            by_iso.insert(entry.iso_code, index);
            by_name.insert(entry.country_name, index);
            by_calling_code.entry(entry.calling_code).or_default().push(index);
        }

        Self {
            entries,
            by_iso,
            by_name,
            by_calling_code,
        }
    }

    pub fn entries(&self) -> &[CountryDialingEntry] {
        &self.entries
    }

    pub fn lookup_by_iso_code(&self, iso_code: &str) -> Option<&CountryDialingEntry> {
        let normalized = iso_code.trim().to_ascii_uppercase();
        self.by_iso
            .get(normalized.as_str())
            .map(|&index| &self.entries[index])
    }

    /// Exact name match. Fuzzy resolution of free-text country fields is the caller's job.
    pub fn lookup_by_country_name(&self, name: &str) -> Option<&CountryDialingEntry> {
        self.by_name
            .get(name.trim())
            .map(|&index| &self.entries[index])
    }

    /// Picker order: case-insensitive by name, ties broken by ISO code.
    pub fn entries_sorted_by_country_name(&self) -> Vec<&CountryDialingEntry> {
        let mut sorted: Vec<&CountryDialingEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| {
            a.country_name
                .to_lowercase()
                .cmp(&b.country_name.to_lowercase())
                .then_with(|| a.iso_code.cmp(b.iso_code))
        });
        sorted
    }

    pub fn entries_for_calling_code(&self, calling_code: &str) -> Vec<&CountryDialingEntry> {
        self.by_calling_code
            .get(calling_code)
            .map(|indices| indices.iter().map(|&index| &self.entries[index]).collect())
            .unwrap_or_default()
    }

    /// First declared entry for a calling code.
    pub fn primary_for_calling_code(&self, calling_code: &str) -> Option<&CountryDialingEntry> {
        self.by_calling_code
            .get(calling_code)
            .and_then(|indices| indices.first())
            .map(|&index| &self.entries[index])
    }

    pub fn is_shared_calling_code(&self, calling_code: &str) -> bool {
        self.by_calling_code
            .get(calling_code)
            .is_some_and(|indices| indices.len() > 1)
    }

    /// Longest registered calling code whose digits prefix `digits`.
    pub fn match_calling_code_prefix(&self, digits: &str) -> Option<&'static str> {
        self.by_calling_code
            .keys()
            .copied()
            .filter(|code| digits.starts_with(code.trim_start_matches('+')))
            .max_by_key(|code| code.len())
    }

    /// Registered calling code equal to `+<digits>`.
    pub fn exact_calling_code(&self, digits: &str) -> Option<&'static str> {
        self.by_calling_code
            .keys()
            .copied()
            .find(|code| code.trim_start_matches('+') == digits)
    }
}

pub fn lookup_by_iso_code(iso_code: &str) -> Option<&'static CountryDialingEntry> {
    REGISTRY.lookup_by_iso_code(iso_code)
}

pub fn lookup_by_country_name(name: &str) -> Option<&'static CountryDialingEntry> {
    REGISTRY.lookup_by_country_name(name)
}

pub fn entries_sorted_by_country_name() -> Vec<&'static CountryDialingEntry> {
    REGISTRY.entries_sorted_by_country_name()
}
