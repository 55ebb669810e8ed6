use qu::style::{
    DescThresholds, PLACEHOLDER, QuadThresholds, Styled, Tone, color_bias, color_pct_trigger,
    color_trigger, quadcolor_bias_low, quadcolor_trigger, tricolor_bias_high, tricolor_bias_low,
};

fn tone(s: &Styled) -> Tone {
    s.tone
}

#[test]
fn sign_bias() {
    assert_eq!(tone(&color_bias("-0.5")), Tone::BadBold);
    assert_eq!(tone(&color_bias("+1.34%")), Tone::Good);
    assert_eq!(tone(&color_bias("-0.49%")), Tone::BadBold);
    assert_eq!(tone(&color_bias(12)), Tone::Good);
    assert_eq!(tone(&color_trigger("189.5", -0.1)), Tone::BadBold);
    assert_eq!(color_trigger("189.5", 2.5).text, "189.5");
}

#[test]
fn tricolor_tiers() {
    assert_eq!(tone(&tricolor_bias_low(0.0, 4.0)), Tone::BadBold);
    assert_eq!(tone(&tricolor_bias_low(1.3, 4.0)), Tone::Good);
    assert_eq!(tone(&tricolor_bias_low(4.0, 4.0)), Tone::Warn);

    let few = tricolor_bias_high(3.0, 4.0);
    assert_eq!((few.text.as_str(), few.tone), ("3", Tone::Warn));
    assert_eq!(tone(&tricolor_bias_high(4.0, 4.0)), Tone::Warn);
    assert_eq!(tone(&tricolor_bias_high(38.0, 4.0)), Tone::Good);
    assert_eq!(tone(&tricolor_bias_high(0.0, 4.0)), Tone::BadBold);
}

#[test]
fn quad_tiers_ascending() {
    let th = QuadThresholds::default();
    let q = |v: f64| quadcolor_trigger(Some(v), None, th).tone;
    assert_eq!(q(0.94), Tone::BadBold);
    assert_eq!(q(1.0), Tone::Bad);
    assert_eq!(q(1.07), Tone::Warn);
    assert_eq!(q(1.5), Tone::Warn);
    assert_eq!(q(2.0), Tone::GoodBold);
    assert_eq!(q(2.5), Tone::GoodBold);
    assert_eq!(q(2.51), Tone::Great);

    let s = quadcolor_trigger(Some(2.0), Some(2.0), th);
    assert_eq!((s.text.as_str(), s.tone), ("2.0", Tone::GoodBold));
}

#[test]
fn quad_missing_or_zero_is_placeholder() {
    let th = QuadThresholds::default();
    assert!(quadcolor_trigger(None, Some(3.0), th).is_placeholder());
    assert!(quadcolor_trigger(Some(0.0), None, th).is_placeholder());
    assert_eq!(Styled::placeholder().text, PLACEHOLDER);
}

#[test]
fn quad_uses_trigger_but_shows_value() {
    // target 204.31 against 189.5 is a ratio of ~1.08: below the target tiers
    let s = quadcolor_trigger(Some(204.31), Some(204.31 / 189.5), QuadThresholds::TARGET);
    assert_eq!(s.text, "204.31");
    assert_eq!(s.tone, Tone::BadBold);

    // PEG 0.9 inverts to ~1.11: top of the good tier
    let s = quadcolor_trigger(Some(0.9), Some(1.0 / 0.9), QuadThresholds::PEG);
    assert_eq!(s.tone, Tone::Great);
    let s = quadcolor_trigger(Some(2.4), Some(1.0 / 2.4), QuadThresholds::PEG);
    assert_eq!(s.tone, Tone::BadBold);
}

#[test]
fn quad_descending() {
    let th = DescThresholds {
        warn: 5.0,
        ..DescThresholds::default()
    };
    let q = |v: f64| quadcolor_bias_low(Some(v), th).tone;
    assert_eq!(q(-1.0), Tone::BadBold);
    assert_eq!(q(0.8), Tone::Great);
    assert_eq!(q(1.2), Tone::GoodBold);
    assert_eq!(q(1.62), Tone::Warn);
    assert_eq!(q(145.0), Tone::BadBold);
    assert!(quadcolor_bias_low(None, th).is_placeholder());
    assert!(quadcolor_bias_low(Some(0.0), th).is_placeholder());
}

#[test]
fn quad_descending_boundaries_are_inclusive() {
    let th = DescThresholds {
        warn: 5.0,
        ..DescThresholds::default()
    };
    let q = |v: f64| quadcolor_bias_low(Some(v), th).tone;
    assert_eq!(q(1.0), Tone::Great);
    assert_eq!(q(1.001), Tone::Great);
    assert_eq!(q(1.01), Tone::GoodBold);
    assert_eq!(q(1.5), Tone::GoodBold);
    assert_eq!(q(1.51), Tone::Warn);
    assert_eq!(q(5.0), Tone::Warn);
    assert_eq!(q(5.01), Tone::BadBold);
}

#[test]
fn pct_trigger_prefixes_gains() {
    let up = color_pct_trigger(120.0, 100.0, Tone::Great, Tone::Warn);
    assert_eq!((up.prefix, up.text.as_str(), up.tone), ("+", "120.0%", Tone::Great));
    assert_eq!(up.width(), 7);

    let down = color_pct_trigger(51_234_567.0, 60_000_000.0, Tone::Great, Tone::Warn);
    assert_eq!((down.prefix, down.text.as_str(), down.tone), ("", "85.39%", Tone::Warn));
    let down = color_pct_trigger(80.0, 100.0, Tone::Great, Tone::Warn);
    assert_eq!((down.prefix, down.text.as_str()), ("", "80.0%"));

    assert!(color_pct_trigger(1.0, 0.0, Tone::Great, Tone::Warn).is_placeholder());
}

#[test]
fn padding_counts_visible_characters() {
    colored::control::set_override(false);
    let s = color_pct_trigger(120.0, 100.0, Tone::Great, Tone::Warn);
    assert_eq!(format!("{s:>9}"), "  +120.0%");
    assert_eq!(format!("{s:<9}|"), "+120.0%  |");
    assert_eq!(format!("{:>4}", Styled::placeholder()), "   -");
}
