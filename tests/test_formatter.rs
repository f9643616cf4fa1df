use phone_input::{
    classify, country_picker_options, format_phone, LengthVerdict, PhoneFormatter, REGISTRY,
};

const SAMPLE_DIGITS: &str = "2345678901234";

fn sample(len: usize) -> String {
    SAMPLE_DIGITS[..len].to_string()
}

#[test]
fn test_round_trip_every_country() {
    let formatter = PhoneFormatter::default();

    for entry in REGISTRY.entries() {
        let start = formatter.initialize("", Some(entry.country_name));
        assert_eq!(start.iso_code(), entry.iso_code, "Hint should resolve {}", entry.country_name);

        let selected = formatter.change_country(&start, entry.iso_code);
        let typed = formatter.apply_input(&selected, &sample(entry.example_national_length));
        assert!(typed.accepted, "Full-length number should be accepted for {}", entry.iso_code);

        let committed = typed.session.committed_value();
        let reloaded = formatter.initialize_with_selection(&committed, None, Some(typed.session.iso_code()));
        assert_eq!(reloaded.iso_code(), entry.iso_code, "ISO code after reload of {}", committed);
        assert_eq!(reloaded.digits(), typed.session.digits(), "Digits after reload of {}", committed);
        assert_eq!(reloaded.display(), typed.session.display());

        // empty buffer round trip
        let empty = formatter.initialize_with_selection(&selected.committed_value(), None, Some(entry.iso_code));
        assert_eq!(empty.iso_code(), entry.iso_code);
        assert_eq!(empty.digits(), "");
    }
}

#[test]
fn test_round_trip_without_selection_for_unshared_codes() {
    let formatter = PhoneFormatter::default();

    for entry in REGISTRY.entries() {
        if REGISTRY.is_shared_calling_code(entry.calling_code) {
            continue;
        }
        let session = formatter.restore(entry.iso_code, &sample(entry.example_national_length));
        let reloaded = formatter.initialize(&session.committed_value(), None);
        assert_eq!(reloaded, session, "Reload of {}", session.committed_value());
    }
}

#[test]
fn test_no_growth_past_ceiling() {
    let formatter = PhoneFormatter::default();

    for entry in REGISTRY.entries() {
        let digits = sample(entry.example_national_length);
        let session = formatter.restore(entry.iso_code, &digits);

        let outcome = formatter.apply_input(&session, &format!("{}1", digits));
        assert!(!outcome.accepted, "Extra digit should be rejected for {}", entry.iso_code);
        assert_eq!(outcome.session.digits(), digits);

        let outcome = formatter.apply_input(&session, &format!("{}1", session.display()));
        assert!(!outcome.accepted, "Extra digit after display should be rejected for {}", entry.iso_code);
        assert_eq!(outcome.display, session.display());
    }
}

#[test]
fn test_backspace_always_accepted() {
    let formatter = PhoneFormatter::default();

    for entry in REGISTRY.entries() {
        // one digit over the ceiling, as a stored value can be
        let session = formatter.restore(entry.iso_code, &sample(entry.example_national_length + 1));
        let display = session.display().to_string();

        for end in (0..display.len()).rev() {
            let outcome = formatter.apply_input(&session, &display[..end]);
            assert!(outcome.accepted, "Backspace to {:?} should be accepted for {}", &display[..end], entry.iso_code);
        }
    }
}

#[test]
fn test_refeeding_display_is_a_no_op() {
    let formatter = PhoneFormatter::default();

    for entry in REGISTRY.entries() {
        for len in 0..=entry.example_national_length + 1 {
            let session = formatter.restore(entry.iso_code, &sample(len));
            let outcome = formatter.apply_input(&session, session.display());
            assert!(outcome.accepted, "Re-feed should be accepted for {} ({} digits)", entry.iso_code, len);
            assert_eq!(outcome.session, session);
            assert_eq!(outcome.display, session.display());
        }
    }
}

#[test]
fn test_non_ascii_digits_never_reach_the_buffer() {
    let formatter = PhoneFormatter::default();
    let values = vec!["+1٣٣٣٣٣٣٣٣٣", "+852 1234 ٣٣5678", "+٣٣٣ 123", "٣٣٣"];

    for value in values {
        let session = formatter.initialize(value, None);
        assert!(
            session.digits().chars().all(|c| c.is_ascii_digit()),
            "Non-ASCII digits kept for {}: {}",
            value,
            session.digits()
        );
        assert_ne!(session.verdict(), LengthVerdict::TooLong, "Verdict for {}", value);

        let outcome = formatter.apply_input(&session, session.display());
        assert!(outcome.accepted, "Re-feed should be accepted for {}", value);
        assert_eq!(outcome.session, session, "Re-feed changed the session for {}", value);
    }
}

#[test]
fn test_typing_never_rewrites_earlier_output() {
    let formatter = PhoneFormatter::default();

    for entry in REGISTRY.entries() {
        for digits in [sample(entry.example_national_length), format!("0{}", sample(entry.example_national_length - 1))] {
            let mut session = formatter.initialize("", Some(entry.country_name));
            let mut displays = Vec::new();

            for digit in digits.chars() {
                let outcome = formatter.apply_input(&session, &format!("{}{}", session.display(), digit));
                assert!(outcome.accepted, "Typing {} should be accepted for {}", digits, entry.iso_code);
                session = outcome.session;
                displays.push(session.display().to_string());
            }

            let last = session.display();
            for display in displays {
                assert!(last.starts_with(&display), "{} jumped to {} for {}", display, last, entry.iso_code);
            }
        }
    }
}

#[test]
fn test_hong_kong_scenario() {
    let formatter = PhoneFormatter::default();
    let session = formatter.initialize("", Some("Hong Kong"));
    assert_eq!(REGISTRY.lookup_by_iso_code("HK").map(|e| e.example_national_length), Some(8));

    let outcome = formatter.apply_input(&session, "12345678");
    assert!(outcome.accepted);
    assert_eq!(outcome.session.committed_value(), "+852 1234 5678");

    let ninth = formatter.apply_input(&outcome.session, "123456789");
    assert!(!ninth.accepted);
    assert_eq!(ninth.session.digits(), "12345678");
}

#[test]
fn test_shared_calling_code_resolution() {
    let formatter = PhoneFormatter::default();

    let session = formatter.initialize("+1 416 555 0199", None);
    assert_eq!(session.iso_code(), "US");
    assert_eq!(session.calling_code(), "+1");
    assert_eq!(session.digits(), "4165550199");

    let compact = formatter.initialize("+12425550199", None);
    assert_eq!(compact.calling_code(), "+1");
    assert_eq!(compact.digits(), "2425550199");

    let hong_kong = formatter.initialize("+85212345678", None);
    assert_eq!(hong_kong.iso_code(), "HK");
}

#[test]
fn test_australian_trunk_digit() {
    let formatter = PhoneFormatter::default();
    let session = formatter.initialize("", Some("Australia"));

    let without_trunk = formatter.apply_input(&session, "412345678");
    assert!(without_trunk.accepted);
    assert_eq!(without_trunk.display, "412 345 678");
    assert_eq!(without_trunk.session.verdict(), LengthVerdict::Complete);

    let with_trunk = formatter.apply_input(&session, "0412345678");
    assert!(with_trunk.accepted);
    assert_eq!(with_trunk.display, "0412 345 678");
    assert_eq!(with_trunk.session.verdict(), LengthVerdict::Complete);

    let too_long = formatter.apply_input(&with_trunk.session, "04123456789");
    assert!(!too_long.accepted);
}

#[test]
fn test_library_helpers() {
    assert_eq!(format_phone("+852 12345678", None), "+852 1234 5678");
    assert_eq!(format_phone("", Some("Japan")), "+81 ");
    assert_eq!(classify("+1 555 123 4567"), LengthVerdict::Complete);
    assert_eq!(classify("+1 555 123 45678"), LengthVerdict::TooLong);
    assert_eq!(classify(""), LengthVerdict::Empty);

    let options = country_picker_options();
    assert_eq!(options.len(), REGISTRY.entries().len());
    assert!(options.contains(&("HK", "Hong Kong (+852)".to_string())));
}
