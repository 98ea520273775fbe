pub const TAX_RATE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub discount: f64,
    pub taxes: f64,
    pub total: f64,
}

/// Derives the order amounts for `quantity` tickets at `unit_price`, less
/// `discount`. Nothing is rounded here; use [`format_amount`] for display.
pub fn price_breakdown(unit_price: u64, quantity: u32, discount: f64) -> PriceBreakdown {
    let subtotal = unit_price as f64 * f64::from(quantity);
    let after_discount = subtotal - discount;
    let taxes = (after_discount * TAX_RATE).max(0.0);

    PriceBreakdown {
        subtotal,
        discount,
        taxes,
        total: after_discount + taxes,
    }
}

/// Whole-rupee display amount, e.g. `₹1050`.
pub fn format_amount(amount: f64) -> String {
    format!("₹{:.0}", amount.round())
}
