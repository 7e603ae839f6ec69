use rust_decimal::Decimal;

use crate::modules::taxes::models::TaxCategory;

/// TaxCalculator produces the live estimate shown while a transaction is typed
///
/// Pure and deterministic: the form calls it on every field change. The
/// amount it returns is a preview; the stored `tax_amount` comes back from
/// the backend.
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate tax amount for a taxable base
    ///
    /// amount = base × rate, rate chosen by category: PPN 11%, PPh 23 2%,
    /// PPh 21 `manual_rate_percent` / 100. An absent base estimates to zero,
    /// as does a product too large for `Decimal`.
    ///
    /// The base must already be validated as non-negative by the caller.
    pub fn calculate(
        &self,
        category: TaxCategory,
        base: Option<Decimal>,
        manual_rate_percent: Option<Decimal>,
    ) -> Decimal {
        match base {
            Some(base) if !base.is_zero() => base
                .checked_mul(category.rate(manual_rate_percent))
                .unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        }
    }

    /// Stored form of a calculated amount: truncated to whole Rupiah
    pub fn settle(&self, amount: Decimal) -> Decimal {
        amount.trunc()
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
