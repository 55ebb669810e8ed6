//! Metric classifiers: map a number (and optionally a trigger) to a styled cell.

use std::fmt;

use colored::Colorize;

use crate::format::{py_float, round_to};

/// Placeholder shown for missing or zero values.
pub const PLACEHOLDER: &str = "-";

/// Terminal style for a classified value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// No styling.
    Plain,
    /// Green.
    Good,
    /// Green, bold.
    GoodBold,
    /// Yellow, bold.
    Warn,
    /// Red.
    Bad,
    /// Red, bold.
    BadBold,
    /// Cyan, bold.
    Great,
}

/// A classified value: its text plus the tone it is painted with.
///
/// `Display` paints with `colored` and pads by the visible width, so
/// `format!("{:>10}", styled)` lines up whether or not colour is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styled {
    /// Visible text.
    pub text: String,
    /// Style selector.
    pub tone: Tone,
    /// Unstyled prefix written before the painted text (`+` for gains).
    pub prefix: &'static str,
}

impl Styled {
    /// Text with a tone and no prefix.
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            prefix: "",
        }
    }

    /// Unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }

    /// The `-` placeholder.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::plain(PLACEHOLDER)
    }

    /// True when this is the unstyled placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.tone == Tone::Plain && self.prefix.is_empty() && self.text == PLACEHOLDER
    }

    /// Number of visible characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.prefix.chars().count() + self.text.chars().count()
    }

    fn painted(&self) -> String {
        let t = self.text.as_str();
        let body = match self.tone {
            Tone::Plain => t.normal(),
            Tone::Good => t.green(),
            Tone::GoodBold => t.green().bold(),
            Tone::Warn => t.yellow().bold(),
            Tone::Bad => t.red(),
            Tone::BadBold => t.red().bold(),
            Tone::Great => t.cyan().bold(),
        };
        format!("{}{body}", self.prefix)
    }
}

impl fmt::Display for Styled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let painted = self.painted();
        let pad = f.width().unwrap_or(0).saturating_sub(self.width());
        if pad == 0 {
            return f.write_str(&painted);
        }
        let fill = |n: usize| " ".repeat(n);
        match f.align() {
            Some(fmt::Alignment::Right) => write!(f, "{}{painted}", fill(pad)),
            Some(fmt::Alignment::Center) => {
                write!(f, "{}{painted}{}", fill(pad / 2), fill(pad - pad / 2))
            }
            _ => write!(f, "{painted}{}", fill(pad)),
        }
    }
}

fn sign_tone(trigger: f64) -> Tone {
    if trigger < 0.0 { Tone::BadBold } else { Tone::Good }
}

/// Colour a value by its own sign: negative is bold red, otherwise green.
///
/// A trailing `%` is ignored when reading the sign; text that does not parse
/// is treated as non-negative.
pub fn color_bias(value: impl fmt::Display) -> Styled {
    let text = value.to_string();
    let numeric = text
        .trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .unwrap_or(0.0);
    Styled::new(text, sign_tone(numeric))
}

/// Colour `text` by the sign of `trigger`.
pub fn color_trigger(text: impl Into<String>, trigger: f64) -> Styled {
    Styled::new(text, sign_tone(trigger))
}

/// Three tiers where low is bad: `<= 0` bold red, `>= cutoff` warning, else green.
#[must_use]
pub fn tricolor_bias_low(value: f64, cutoff: f64) -> Styled {
    let tone = if value <= 0.0 {
        Tone::BadBold
    } else if value >= cutoff {
        Tone::Warn
    } else {
        Tone::Good
    };
    Styled::new(py_float(value), tone)
}

/// Three tiers where a small positive count is a warning: `<= 0` bold red,
/// `<= cutoff` warning, else green.
#[must_use]
pub fn tricolor_bias_high(value: f64, cutoff: f64) -> Styled {
    let tone = if value <= 0.0 {
        Tone::BadBold
    } else if value <= cutoff {
        Tone::Warn
    } else {
        Tone::Good
    };
    Styled::new(format_count(value), tone)
}

fn format_count(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        py_float(value)
    }
}

/// Ascending tier boundaries for [`quadcolor_trigger`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadThresholds {
    /// Below this the value is bad.
    pub neg: f64,
    /// Upper bound of the warning tier.
    pub warn: f64,
    /// Upper bound of the good tier; above it is great.
    pub good: f64,
}

impl Default for QuadThresholds {
    fn default() -> Self {
        Self {
            neg: 1.0,
            warn: 1.5,
            good: 2.5,
        }
    }
}

impl QuadThresholds {
    /// Tiers for price targets, triggered by `target / current`.
    pub const TARGET: Self = Self {
        neg: 1.5,
        warn: 3.0,
        good: 4.0,
    };

    /// Tiers for PEG ratios, triggered by `1 / peg`.
    pub const PEG: Self = Self {
        neg: 0.5,
        warn: 1.05,
        good: 1.11,
    };
}

/// Four ascending tiers. Missing or zero values render the placeholder; a
/// missing or zero trigger falls back to the value itself.
///
/// `t < neg` bold red, `(neg, warn]` warning, `(warn, good]` bold green,
/// `> good` cyan, and exactly `neg` plain red.
#[must_use]
pub fn quadcolor_trigger(value: Option<f64>, trigger: Option<f64>, th: QuadThresholds) -> Styled {
    let Some(value) = value.filter(|v| *v != 0.0) else {
        return Styled::placeholder();
    };
    let trigger = trigger.filter(|t| *t != 0.0).unwrap_or(value);
    let text = py_float(round_to(value, 2));

    let tone = if trigger < th.neg {
        Tone::BadBold
    } else if trigger > th.neg && trigger <= th.warn {
        Tone::Warn
    } else if trigger > th.warn && trigger <= th.good {
        Tone::GoodBold
    } else if trigger > th.good {
        Tone::Great
    } else {
        Tone::Bad
    };
    Styled::new(text, tone)
}

/// Descending tier boundaries for [`quadcolor_bias_low`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescThresholds {
    /// Upper bound of the great tier.
    pub great: f64,
    /// Upper bound of the good tier.
    pub good: f64,
    /// Upper bound of the warning tier; above it is bad.
    pub warn: f64,
}

impl Default for DescThresholds {
    fn default() -> Self {
        Self {
            great: 1.0,
            good: 1.5,
            warn: 2.0,
        }
    }
}

/// Four descending tiers where smaller positive values are better. Missing
/// or zero values render the placeholder.
#[must_use]
pub fn quadcolor_bias_low(value: Option<f64>, th: DescThresholds) -> Styled {
    let Some(value) = value.filter(|v| *v != 0.0) else {
        return Styled::placeholder();
    };
    let v = round_to(value, 2);
    let tone = if v < 0.0 {
        Tone::BadBold
    } else if v > 0.0 && v <= th.great {
        Tone::Great
    } else if v > th.great && v <= th.good {
        Tone::GoodBold
    } else if v > th.good && v <= th.warn {
        Tone::Warn
    } else if v > th.warn {
        Tone::BadBold
    } else {
        Tone::Bad
    };
    Styled::new(py_float(v), tone)
}

/// `num` as a percentage of `trigger`. At or above the trigger the text gets a
/// `+` prefix and the `pos` tone; below it the `neg` tone. A zero trigger
/// yields the placeholder.
#[must_use]
pub fn color_pct_trigger(num: f64, trigger: f64, pos: Tone, neg: Tone) -> Styled {
    if trigger == 0.0 {
        return Styled::placeholder();
    }
    let text = format!("{}%", py_float(round_to(num / trigger * 100.0, 2)));
    if num < trigger {
        Styled::new(text, neg)
    } else {
        Styled {
            text,
            tone: pos,
            prefix: "+",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_padding_uses_visible_text() {
        colored::control::set_override(true);
        let s = Styled {
            text: "12.5%".into(),
            tone: Tone::Great,
            prefix: "+",
        };
        let out = format!("{s:>8}");
        assert!(out.starts_with("  +"));
        assert!(out.contains('\u{1b}'));
        colored::control::unset_override();
    }

    #[test]
    fn exact_neg_boundary_is_plain_red() {
        let s = quadcolor_trigger(Some(1.0), None, QuadThresholds::default());
        assert_eq!(s.tone, Tone::Bad);
        assert_eq!(s.text, "1.0");
    }
}
