//! Number and string formatting helpers.

use std::fmt;

/// Render a float the way a Python `str(float)` would for the magnitudes
/// shown here: integral values keep one decimal (`2.0`), everything else uses
/// the shortest round-trip representation (`0.1`, `189.52`).
#[must_use]
pub fn py_float(x: f64) -> String {
    if !x.is_finite() {
        return if x.is_nan() {
            "nan".to_string()
        } else if x > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }
    if x.fract() == 0.0 && x.abs() < 1e16 {
        format!("{x:.1}")
    } else {
        format!("{x}")
    }
}

/// Round half away from zero to `places` decimals.
#[must_use]
pub fn round_to(x: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = x * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        x
    }
}

/// A large count in abbreviated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Human {
    /// The value was missing.
    NotAvailable,
    /// The value was exactly zero.
    Zero,
    /// Abbreviated text such as `1.5M`.
    Scaled(String),
}

impl fmt::Display for Human {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => f.pad("N/A"),
            Self::Zero => f.pad("0"),
            Self::Scaled(s) => f.pad(s),
        }
    }
}

/// Abbreviate a count with `B`/`M`/`K` suffixes and one decimal.
#[must_use]
pub fn int_to_human(n: Option<f64>) -> Human {
    let Some(n) = n else {
        return Human::NotAvailable;
    };
    if n == 0.0 {
        return Human::Zero;
    }
    let text = if n >= 1e9 {
        format!("{:.1}B", n / 1e9)
    } else if n >= 1e6 {
        format!("{:.1}M", n / 1e6)
    } else if n >= 1e3 {
        format!("{:.1}K", n / 1e3)
    } else if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        py_float(n)
    };
    Human::Scaled(text)
}

/// Display symbol for an ISO currency code.
#[must_use]
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    Some(match code {
        "AUD" | "CAD" | "USD" => "$",
        "CNY" | "JPY" => "¥",
        "EUR" => "€",
        "GBP" => "£",
        "HKD" => "元",
        "INR" | "ZAR" => "R",
        "PHP" => "₱",
        _ => return None,
    })
}

/// `+` prefix on non-negative values.
#[must_use]
pub fn signed(x: f64) -> String {
    if x >= 0.0 {
        format!("+{}", py_float(x))
    } else {
        py_float(x)
    }
}

/// A fraction as a percentage with two decimals: `0.0123` becomes `1.23%`.
#[must_use]
pub fn percent(fraction: f64) -> String {
    format!("{}%", py_float(round_to(fraction * 100.0, 2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn py_float_matches_python_repr() {
        assert_eq!(py_float(2.0), "2.0");
        assert_eq!(py_float(-3.0), "-3.0");
        assert_eq!(py_float(0.1), "0.1");
        assert_eq!(py_float(189.52), "189.52");
        assert_eq!(py_float(0.0), "0.0");
    }

    #[test]
    fn round_to_is_half_away_from_zero() {
        assert_eq!(round_to(1.005_f64 * 1000.0, 0), 1005.0);
        assert_eq!(round_to(2.345_678, 2), 2.35);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn human_pads_like_a_str() {
        assert_eq!(format!("{:>5}", Human::NotAvailable), "  N/A");
        assert_eq!(format!("{:>5}", int_to_human(Some(15.46e9))), "15.5B");
    }
}
