use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Rupiah;
use crate::modules::taxes::TaxCategory;

/// A recorded tax transaction as returned by the backend
///
/// Immutable on the client: it is replaced wholesale on every fetch and only
/// ever removed through a delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,

    /// Transaction date
    pub date: NaiveDate,

    /// Tax category
    pub tax_type: TaxCategory,

    /// Taxable base (DPP) in whole Rupiah
    pub dpp: i64,

    /// Applied rate as a fraction, e.g. 0.11
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_rate: Decimal,

    /// Tax amount of record in whole Rupiah
    pub tax_amount: i64,

    pub description: String,

    pub created_at: NaiveDateTime,
}

impl Transaction {
    /// Applied rate in percent, e.g. 11 for PPN
    pub fn rate_percent(&self) -> Decimal {
        (self.tax_rate * Decimal::ONE_HUNDRED).normalize()
    }

    pub fn formatted_dpp(&self) -> String {
        Rupiah::format_whole(self.dpp)
    }

    pub fn formatted_tax_amount(&self) -> String {
        Rupiah::format_whole(self.tax_amount)
    }
}

/// Body of `POST /transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionPayload {
    pub date: NaiveDate,
    pub tax_type: TaxCategory,
    pub dpp: i64,
    pub description: String,

    /// Only sent for PPh 21
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub manual_rate_percent: Option<Decimal>,
}

/// Response of `DELETE /transactions/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteAck {
    #[serde(default)]
    pub message: String,
}
