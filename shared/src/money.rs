//! Money helpers using rust_decimal for precision
//!
//! Prices are stored as `f64`. Sums go through `Decimal` so that totals of
//! decimal prices are exact; prices `Decimal` cannot represent (NaN,
//! infinities, magnitudes beyond ~7.9e28) fall back to plain `f64`
//! arithmetic instead of being replaced by zero.

use rust_decimal::prelude::*;

/// Convert f64 to Decimal for calculation; `None` if not representable
#[inline]
pub fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Sum prices, exact in Decimal when every price fits
///
/// The result is not rounded.
pub fn sum_prices(prices: impl IntoIterator<Item = f64>) -> f64 {
    let prices: Vec<f64> = prices.into_iter().collect();

    let exact = prices
        .iter()
        .try_fold(Decimal::ZERO, |acc, &p| acc.checked_add(to_decimal(p)?))
        .and_then(|sum| sum.to_f64());

    exact.unwrap_or_else(|| prices.iter().sum())
}

/// Format a price with exactly two decimals and a `.` separator
///
/// Independent of locale, e.g. `2.5` → `"2.50"`.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}
