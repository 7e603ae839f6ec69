use rust_decimal::Decimal;

/// Indonesian Rupiah rules for amounts entered in and shown by the client
///
/// IDR has no decimal places: taxable bases are whole Rupiah and displayed
/// amounts are rounded to the nearest Rupiah.
pub struct Rupiah;

impl Rupiah {
    /// Display prefix
    pub const SYMBOL: &'static str = "Rp";

    /// Returns the decimal scale for IDR
    pub fn scale() -> u32 {
        0
    }

    /// Rounds a decimal value to whole Rupiah (banker's rounding)
    pub fn round(amount: Decimal) -> Decimal {
        amount.round_dp(Self::scale())
    }

    /// Validates that a decimal value is a usable taxable base
    ///
    /// Trailing zero decimals are accepted ("1000.00"), fractional Rupiah are not.
    pub fn validate_amount(amount: Decimal) -> Result<(), String> {
        if amount < Decimal::ZERO {
            return Err("Amount cannot be negative".to_string());
        }

        if amount.normalize().scale() > Self::scale() {
            return Err("Amount must be a whole number of Rupiah".to_string());
        }

        Ok(())
    }

    /// Formats an amount the way id-ID does: `Rp 1.000.000`
    pub fn format(amount: Decimal) -> String {
        let rounded = Self::round(amount);
        let negative = rounded < Decimal::ZERO;
        let digits = rounded.abs().trunc().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        if negative {
            format!("-{} {}", Self::SYMBOL, grouped)
        } else {
            format!("{} {}", Self::SYMBOL, grouped)
        }
    }

    /// Formats a whole-Rupiah integer amount as returned by the backend
    pub fn format_whole(amount: i64) -> String {
        Self::format(Decimal::from(amount))
    }
}
