use serde::{Deserialize, Serialize};

use crate::modules::taxes::TaxCategory;

/// Aggregated figures shown on the dashboard
///
/// Computed by the backend. `Default` is the zeroed summary used whenever the
/// summary cannot be fetched, so the dashboard always has something to show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Sum of tax amounts over all transactions
    pub total_tax: i64,
    /// Number of recorded transactions
    pub total_transactions: i64,
    /// Tax amount per category
    pub breakdown: CategoryBreakdown,
}

/// Per-category subtotals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    #[serde(default)]
    pub ppn: i64,
    #[serde(default)]
    pub pph21: i64,
    #[serde(default)]
    pub pph23: i64,
}

impl CategoryBreakdown {
    pub fn get(&self, category: TaxCategory) -> i64 {
        match category {
            TaxCategory::Ppn => self.ppn,
            TaxCategory::Pph21 => self.pph21,
            TaxCategory::Pph23 => self.pph23,
        }
    }

    pub fn add(&mut self, category: TaxCategory, amount: i64) {
        match category {
            TaxCategory::Ppn => self.ppn += amount,
            TaxCategory::Pph21 => self.pph21 += amount,
            TaxCategory::Pph23 => self.pph23 += amount,
        }
    }

    /// Categories with a non-zero subtotal, in chart order (PPN, PPh 23, PPh 21)
    pub fn non_zero(&self) -> Vec<(TaxCategory, i64)> {
        TaxCategory::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
            .filter(|(_, amount)| *amount > 0)
            .collect()
    }
}

impl DashboardSummary {
    /// Share of the total tax held by one category, in whole percent
    pub fn share_percent(&self, category: TaxCategory) -> i64 {
        if self.total_tax <= 0 {
            return 0;
        }
        // Rounded half up
        (self.breakdown.get(category) * 200 + self.total_tax) / (self.total_tax * 2)
    }
}
