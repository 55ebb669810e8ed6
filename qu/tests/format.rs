use proptest::prelude::*;
use qu::format::{Human, currency_symbol, int_to_human, percent, py_float, round_to, signed};

#[test]
fn human_counts() {
    assert_eq!(int_to_human(None), Human::NotAvailable);
    assert_eq!(int_to_human(Some(0.0)).to_string(), "0");
    assert_eq!(int_to_human(Some(999.0)).to_string(), "999");
    assert_eq!(int_to_human(Some(2_500.0)).to_string(), "2.5K");
    assert_eq!(int_to_human(Some(1_500_000.0)).to_string(), "1.5M");
    assert_eq!(int_to_human(Some(108e9)).to_string(), "108.0B");
}

#[test]
fn currency_codes() {
    let cases = [
        ("AUD", Some("$")),
        ("CAD", Some("$")),
        ("USD", Some("$")),
        ("CNY", Some("¥")),
        ("JPY", Some("¥")),
        ("EUR", Some("€")),
        ("GBP", Some("£")),
        ("HKD", Some("元")),
        ("INR", Some("R")),
        ("ZAR", Some("R")),
        ("PHP", Some("₱")),
        ("XYZ", None),
        ("usd", None),
        ("", None),
    ];
    for (code, want) in cases {
        assert_eq!(currency_symbol(code), want, "code {code:?}");
    }
}

#[test]
fn signs_and_percentages() {
    assert_eq!(signed(2.5), "+2.5");
    assert_eq!(signed(0.0), "+0.0");
    assert_eq!(signed(-0.3), "-0.3");
    assert_eq!(percent(0.0123), "1.23%");
    assert_eq!(percent(0.0051), "0.51%");
}

proptest! {
    #[test]
    fn py_float_round_trips(x in -1e12f64..1e12f64) {
        let text = py_float(x);
        prop_assert_eq!(text.parse::<f64>().unwrap(), x);
        prop_assert!(text.contains('.') || text.contains('e'));
    }

    #[test]
    fn round_to_is_idempotent(x in -1e9f64..1e9f64, places in 0i32..6) {
        let once = round_to(x, places);
        prop_assert_eq!(round_to(once, places), once);
    }

    #[test]
    fn human_suffix_tracks_magnitude(n in 1u64..1_000_000_000_000u64) {
        let text = int_to_human(Some(n as f64)).to_string();
        let expected = if n >= 1_000_000_000 {
            'B'
        } else if n >= 1_000_000 {
            'M'
        } else if n >= 1_000 {
            'K'
        } else {
            prop_assert_eq!(text, n.to_string());
            return Ok(());
        };
        prop_assert!(text.ends_with(expected), "{} -> {}", n, text);
        prop_assert_eq!(int_to_human(Some(n as f64)).to_string(), text);
    }
}
