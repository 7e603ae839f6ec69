use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::{AppError, Result, Rupiah};
use crate::modules::api::TaxApi;
use crate::modules::session::Session;
use crate::modules::taxes::{TaxCalculator, TaxCategory};
use crate::modules::transactions::models::{CreateTransactionPayload, Transaction};

/// State of the "new transaction" form
///
/// Fields hold the raw text as typed. Every change to the base, category or
/// manual rate recomputes the estimate synchronously; nothing touches the
/// network until [`TransactionForm::submit`].
pub struct TransactionForm {
    calculator: TaxCalculator,
    date: String,
    category: TaxCategory,
    base: String,
    description: String,
    manual_rate: String,
    submitting: bool,
    error: Option<String>,
    preview: Decimal,
}

/// Editable fields, as addressed by the terminal `set` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    Category,
    Base,
    Description,
    ManualRate,
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(FormField::Date),
            "category" | "type" | "tax_type" => Ok(FormField::Category),
            "base" | "dpp" => Ok(FormField::Base),
            "description" | "desc" => Ok(FormField::Description),
            "rate" | "manual_rate" => Ok(FormField::ManualRate),
            _ => Err(format!("Unknown form field: {}", s)),
        }
    }
}

impl TransactionForm {
    /// Empty form dated `today`, PPN selected, PPh 21 rate pre-filled with 5
    pub fn new(today: NaiveDate) -> Self {
        Self {
            calculator: TaxCalculator::new(),
            date: today.format("%Y-%m-%d").to_string(),
            category: TaxCategory::Ppn,
            base: String::new(),
            description: String::new(),
            manual_rate: TaxCategory::SUGGESTED_MANUAL_RATE_PERCENT.to_string(),
            submitting: false,
            error: None,
            preview: Decimal::ZERO,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn category(&self) -> TaxCategory {
        self.category
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn manual_rate(&self) -> &str {
        &self.manual_rate
    }

    /// Manual rate input is only shown for categories that need one
    pub fn shows_manual_rate(&self) -> bool {
        self.category.requires_manual_rate()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current estimate
    pub fn preview(&self) -> Decimal {
        self.preview
    }

    pub fn formatted_preview(&self) -> String {
        Rupiah::format(self.preview)
    }

    pub fn set_date(&mut self, value: impl Into<String>) {
        self.date = value.into();
    }

    pub fn set_category(&mut self, category: TaxCategory) {
        self.category = category;
        self.recompute();
    }

    pub fn set_base(&mut self, value: impl Into<String>) {
        self.base = value.into();
        self.recompute();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_manual_rate(&mut self, value: impl Into<String>) {
        self.manual_rate = value.into();
        self.recompute();
    }

    /// Set a field from text
    ///
    /// Only the category can be rejected here; every other field accepts any
    /// text and is checked on submit.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<()> {
        match field {
            FormField::Date => self.set_date(value.trim()),
            FormField::Category => {
                let category = value.parse::<TaxCategory>().map_err(AppError::Validation)?;
                self.set_category(category);
            }
            FormField::Base => self.set_base(value.trim()),
            FormField::Description => self.set_description(value),
            FormField::ManualRate => self.set_manual_rate(value.trim()),
        }
        Ok(())
    }

    fn recompute(&mut self) {
        let manual_rate = if self.category.requires_manual_rate() {
            parse_non_negative(&self.manual_rate)
        } else {
            None
        };
        self.preview = self
            .calculator
            .calculate(self.category, parse_non_negative(&self.base), manual_rate);
    }

    /// Check the fields and build the request body
    pub fn validate(&self) -> Result<CreateTransactionPayload> {
        let base_text = self.base.trim();
        if base_text.is_empty() {
            return Err(AppError::validation("Taxable base (DPP) is required"));
        }

        let base = parse_decimal(base_text)
            .ok_or_else(|| AppError::validation("Taxable base (DPP) must be a number"))?;
        // A zero base is treated as not filled in
        if base.is_zero() {
            return Err(AppError::validation("Taxable base (DPP) is required"));
        }
        Rupiah::validate_amount(base).map_err(AppError::Validation)?;
        let dpp = base
            .to_i64()
            .ok_or_else(|| AppError::validation("Taxable base (DPP) is too large"))?;

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::validation("Date must be in YYYY-MM-DD format"))?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err(AppError::validation("Description is required"));
        }

        let manual_rate_percent = if self.category.requires_manual_rate() {
            let rate = parse_decimal(self.manual_rate.trim())
                .ok_or_else(|| AppError::validation("PPh 21 rate must be a number"))?;
            if rate < Decimal::ZERO {
                return Err(AppError::validation("PPh 21 rate cannot be negative"));
            }
            if rate > Decimal::ONE_HUNDRED {
                return Err(AppError::validation("PPh 21 rate cannot exceed 100%"));
            }
            Some(rate)
        } else {
            None
        };

        Ok(CreateTransactionPayload {
            date,
            tax_type: self.category,
            dpp,
            description: description.to_string(),
            manual_rate_percent,
        })
    }

    /// Validate and send the transaction
    ///
    /// On success the base and description are cleared and the created
    /// transaction is returned for the parent view. On failure the message is
    /// kept in [`TransactionForm::error`] and every field is left as typed.
    pub async fn submit(&mut self, api: &dyn TaxApi, session: &Session) -> Result<Transaction> {
        self.error = None;

        let payload = match self.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.error = Some(e.user_message());
                return Err(e);
            }
        };

        self.submitting = true;
        let result = api.create_transaction(session, &payload).await;
        self.submitting = false;

        match result {
            Ok(created) => {
                info!("Transaction {} saved from form", created.id);
                self.base.clear();
                self.description.clear();
                self.recompute();
                Ok(created)
            }
            Err(e) => {
                warn!("Form submission failed: {}", e);
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    let cleaned: String = text.chars().filter(|c| *c != '_' && !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Parsed value usable by the calculator; negative or garbage input is none
fn parse_non_negative(text: &str) -> Option<Decimal> {
    parse_decimal(text).filter(|value| *value >= Decimal::ZERO)
}
