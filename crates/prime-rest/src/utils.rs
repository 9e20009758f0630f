//! Order-sizing helpers

use rust_decimal::Decimal;

/// Round a quantity down to a product's increment
///
/// Sizing always rounds DOWN so an order never exceeds the intended
/// notional or the available balance. An increment of zero returns the
/// value unchanged.
///
/// # Arguments
/// * `value` - Raw quantity (e.g., computed from a notional)
/// * `increment` - The product's `base_increment` or `quote_increment`
pub fn round_to_increment(value: Decimal, increment: Decimal) -> Decimal {
    if increment.is_zero() {
        return value;
    }
    (value / increment).floor() * increment
}
