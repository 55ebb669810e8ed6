use chrono_tz::Tz;

/// Presentation settings for [`crate::Qu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuConfig {
    /// Most recent dividends listed in the dividend table.
    pub dividend_rows: usize,
    /// Zone used for the `Time:` line and dividend dates.
    pub timezone: Tz,
    /// Width of the `=` rule printed between symbols.
    pub separator_width: usize,
}

impl Default for QuConfig {
    fn default() -> Self {
        Self {
            dividend_rows: 12,
            timezone: chrono_tz::US::Eastern,
            separator_width: 80,
        }
    }
}
