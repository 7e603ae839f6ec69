pub mod tax_category;

pub use tax_category::TaxCategory;
