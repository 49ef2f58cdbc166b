//! Display formatting for table cells.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};

/// Fractional digits shown for a rupee amount.
const PRICE_DECIMALS: u32 = 2;

/// Renders a price as Indian-rupee currency, e.g. `₹1,250.00`.
pub fn format_price(price: Decimal) -> String {
    let mut amount = price.round_dp(PRICE_DECIMALS);
    amount.rescale(PRICE_DECIMALS);
    Money::from_decimal(amount, iso::INR).to_string()
}

/// Stock renders as a plain integer.
pub fn format_stock(stock: u32) -> String {
    stock.to_string()
}
