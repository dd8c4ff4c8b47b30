use rust_decimal::Decimal;

/// Goods and Services Tax rate applied to every invoice (18%)
pub const GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Maps an invoice amount to its GST amount at a fixed rate.
///
/// The calculator performs no validation; callers reject negative amounts
/// before asking for a tax figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GstCalculator {
    rate: Decimal,
}

impl GstCalculator {
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// gst_amount = amount × rate
    pub fn calculate_gst(&self, amount: Decimal) -> Decimal {
        amount * self.rate
    }
}

impl Default for GstCalculator {
    fn default() -> Self {
        Self::new(GST_RATE)
    }
}
