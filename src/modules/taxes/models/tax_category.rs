use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tax categories the bookkeeping tool records
///
/// Each variant carries its own rate policy, see [`TaxCategory::rate`].
/// Adding a category means adding a variant here together with its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxCategory {
    /// PPN, value-added tax, fixed 11%
    Ppn,
    /// PPh 23, withholding tax on services and rent, fixed 2%
    Pph23,
    /// PPh 21, withholding tax on salary and honoraria, manual rate
    Pph21,
}

impl TaxCategory {
    /// All categories in form order
    pub const ALL: [TaxCategory; 3] = [TaxCategory::Ppn, TaxCategory::Pph23, TaxCategory::Pph21];

    /// Rate suggested by the input form for PPh 21, in percent
    pub const SUGGESTED_MANUAL_RATE_PERCENT: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

    /// Wire value used by the backend API
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxCategory::Ppn => "ppn",
            TaxCategory::Pph23 => "pph23",
            TaxCategory::Pph21 => "pph21",
        }
    }

    /// Long label shown in lists
    pub fn label(&self) -> &'static str {
        match self {
            TaxCategory::Ppn => "PPN (Pajak Pertambahan Nilai)",
            TaxCategory::Pph21 => "PPh 21 (Orang Pribadi)",
            TaxCategory::Pph23 => "PPh 23 (Jasa/Sewa)",
        }
    }

    /// Short label for cards and badges
    pub fn short_label(&self) -> &'static str {
        match self {
            TaxCategory::Ppn => "PPN",
            TaxCategory::Pph23 => "PPh 23",
            TaxCategory::Pph21 => "PPh 21",
        }
    }

    /// Option text of the category selector
    pub fn form_option(&self) -> &'static str {
        match self {
            TaxCategory::Ppn => "PPN (11%) - Pembelian Barang/Jasa",
            TaxCategory::Pph23 => "PPh 23 (2%) - Sewa/Jasa",
            TaxCategory::Pph21 => "PPh 21 (Manual) - Gaji/Honor",
        }
    }

    /// Whether the rate is supplied per transaction instead of fixed
    pub fn requires_manual_rate(&self) -> bool {
        matches!(self, TaxCategory::Pph21)
    }

    /// Rate as a fraction of the base
    ///
    /// Fixed categories ignore `manual_rate_percent`. PPh 21 uses it and falls
    /// back to zero when none is given.
    pub fn rate(&self, manual_rate_percent: Option<Decimal>) -> Decimal {
        match self {
            TaxCategory::Ppn => Decimal::new(11, 2),
            TaxCategory::Pph23 => Decimal::new(2, 2),
            TaxCategory::Pph21 => manual_rate_percent.unwrap_or(Decimal::ZERO) / Decimal::ONE_HUNDRED,
        }
    }
}

impl fmt::Display for TaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaxCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "ppn" => Ok(TaxCategory::Ppn),
            "pph23" => Ok(TaxCategory::Pph23),
            "pph21" => Ok(TaxCategory::Pph21),
            _ => Err(format!("Invalid tax category: {}", s)),
        }
    }
}
