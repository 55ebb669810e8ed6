use qu_core::{Capability, QuError, QuConnector};

#[test]
fn unsupported_carries_capability_label() {
    let e = QuError::unsupported(Capability::OptionsExpirations);
    assert_eq!(e.to_string(), "unsupported capability: options-expirations");
}

#[test]
fn json_errors_become_data_errors() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let e: QuError = err.into();
    assert!(matches!(e, QuError::Data(_)));
}

#[test]
fn not_found_helper() {
    let e = QuError::not_found("profile for ZZZ");
    assert!(matches!(e, QuError::NotFound { ref what } if what == "profile for ZZZ"));
    assert_eq!(e.to_string(), "not found: profile for ZZZ");
}

struct Bare;

impl QuConnector for Bare {
    fn name(&self) -> &'static str {
        "bare"
    }
}

#[test]
fn connector_defaults_advertise_nothing() {
    let c = Bare;
    assert_eq!(c.vendor(), "unknown");
    assert!(c.as_info_provider().is_none());
    assert!(c.as_history_provider().is_none());
    assert!(c.as_dividends_provider().is_none());
    assert!(c.as_options_expirations_provider().is_none());
    assert!(c.as_fast_info_provider().is_none());
}
