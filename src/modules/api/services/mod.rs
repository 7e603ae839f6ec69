pub mod api_trait;
pub mod http_client;

pub use api_trait::TaxApi;
pub use http_client::HttpTaxApi;
