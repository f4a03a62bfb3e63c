//! # Shop Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`NURSERY_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Most decimal places a currency may be configured with.
const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Shop configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopConfig {
    /// Shop name (navbar heading)
    pub store_name: String,

    /// Line under the name
    pub tagline: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            store_name: "Paradise Nursery".to_string(),
            tagline: "Where Green Meets Serenity".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl ShopConfig {
    /// Creates a ShopConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `NURSERY_STORE_NAME`: Override store name
    /// - `NURSERY_TAGLINE`: Override tagline
    /// - `NURSERY_CURRENCY_SYMBOL`: Override currency symbol
    /// - `NURSERY_CURRENCY_DECIMALS`: Override decimal places (0-4)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShopConfig::default();

        if let Some(store_name) = lookup("NURSERY_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(tagline) = lookup("NURSERY_TAGLINE") {
            config.tagline = tagline;
        }

        if let Some(symbol) = lookup("NURSERY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("NURSERY_CURRENCY_DECIMALS") {
            match raw.trim().parse::<u8>() {
                Ok(decimals) if decimals <= MAX_CURRENCY_DECIMALS => {
                    config.currency_decimals = decimals;
                }
                _ => warn!(value = %raw, "ignoring NURSERY_CURRENCY_DECIMALS"),
            }
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// `cents` is always hundredths, whatever `currency_decimals` says; the
    /// amount is rescaled to the configured precision before display.
    ///
    /// ## Example
    /// ```rust
    /// use nursery_shop::state::ShopConfig;
    ///
    /// let config = ShopConfig::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let decimals = u32::from(self.currency_decimals);
        let minor = rescale_cents(cents, decimals);
        let divisor = 10_i128.pow(decimals);
        let whole = (minor / divisor).unsigned_abs();
        let frac = (minor % divisor).unsigned_abs();
        let sign = if minor < 0 { "-" } else { "" };

        if decimals > 0 {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.currency_symbol,
                whole,
                frac,
                width = decimals as usize
            )
        } else {
            format!("{}{}{}", sign, self.currency_symbol, whole)
        }
    }
}

/// Converts hundredths to `decimals` minor units, rounding half away from zero.
fn rescale_cents(cents: i64, decimals: u32) -> i128 {
    let cents = i128::from(cents);
    if decimals >= 2 {
        cents * 10_i128.pow(decimals - 2)
    } else {
        let step = 10_i128.pow(2 - decimals);
        let rounded = (cents.abs() + step / 2) / step;
        if cents < 0 {
            -rounded
        } else {
            rounded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_currency_positive() {
        let config = ShopConfig::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ShopConfig::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
        assert_eq!(config.format_currency(-5), "-$0.05");
    }

    #[test]
    fn test_format_currency_without_decimals() {
        let config = ShopConfig {
            currency_symbol: "¥".to_string(),
            currency_decimals: 0,
            ..ShopConfig::default()
        };
        assert_eq!(config.format_currency(1500), "¥15");
        assert_eq!(config.format_currency(1250), "¥13");
        assert_eq!(config.format_currency(1249), "¥12");
        assert_eq!(config.format_currency(-1250), "-¥13");
    }

    #[test]
    fn test_format_currency_rescales_cents() {
        let three = ShopConfig {
            currency_decimals: 3,
            ..ShopConfig::default()
        };
        assert_eq!(three.format_currency(1500), "$15.000");
        assert_eq!(three.format_currency(-5), "-$0.050");

        let one = ShopConfig {
            currency_decimals: 1,
            ..ShopConfig::default()
        };
        assert_eq!(one.format_currency(1234), "$12.3");
        assert_eq!(one.format_currency(1235), "$12.4");

        let four = ShopConfig {
            currency_decimals: 4,
            ..ShopConfig::default()
        };
        assert_eq!(four.format_currency(i64::MAX), "$92233720368547758.0700");
    }

    #[test]
    fn test_overrides() {
        let config = ShopConfig::from_lookup(lookup(&[
            ("NURSERY_STORE_NAME", "Fern Gully"),
            ("NURSERY_CURRENCY_SYMBOL", "€"),
            ("NURSERY_CURRENCY_DECIMALS", "3"),
        ]));
        assert_eq!(config.store_name, "Fern Gully");
        assert_eq!(config.tagline, "Where Green Meets Serenity");
        assert_eq!(config.format_currency(1234), "€12.340");
    }

    #[test]
    fn test_bad_decimals_ignored() {
        for raw in ["nine", "-1", "12"] {
            let config = ShopConfig::from_lookup(lookup(&[("NURSERY_CURRENCY_DECIMALS", raw)]));
            assert_eq!(config.currency_decimals, 2, "{raw}");
        }
    }
}
