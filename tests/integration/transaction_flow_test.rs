// Integration tests for the create / delete flow through the app shell
//
// Tests:
// - A 1,000,000 PPN transaction is stored with 110,000 tax
// - The form clears base and description after a successful submit
// - A failed submit keeps every field and shows the error inline
// - Deleting removes the record from the next list and dashboard fetch
// - A failed delete raises an alert and keeps the UI usable

use std::sync::Arc;

use rust_decimal_macros::dec;
use taxdesk::api::{HttpTaxApi, TaxApi};
use taxdesk::shell::{App, Tab};
use taxdesk::taxes::TaxCategory;

#[path = "../helpers/mod.rs"]
mod helpers;
use helpers::*;

fn logged_in_app(backend: &FakeBackend) -> App {
    let (session, _store) = TestDataFactory::authenticated_session();
    let api: Arc<dyn TaxApi> = Arc::new(HttpTaxApi::new(backend.api_config()));
    App::new(api, session, TestDataFactory::date())
}

fn fill_form(app: &mut App, category: TaxCategory, base: &str, description: &str) {
    let form = app.form_mut();
    form.set_category(category);
    form.set_base(base);
    form.set_description(description);
}

#[actix_web::test]
async fn test_created_ppn_transaction_is_persisted_with_backend_amount() {
    let backend = spawn_fake_backend();
    let mut app = logged_in_app(&backend);
    app.start().await;
    app.select_tab(Tab::Input).await;

    fill_form(&mut app, TaxCategory::Ppn, "1000000", "Pembelian server");
    assert_eq!(app.form().preview(), dec!(110000));

    let created = app.submit_form().await.unwrap();
    assert_eq!(created.tax_amount, 110_000);
    assert_eq!(created.tax_rate, dec!(0.11));

    // Shell moved to the list, which holds the stored record
    assert_eq!(app.active_tab(), Tab::List);
    assert_eq!(app.transactions(), &[created]);
    assert_eq!(app.dashboard().unwrap().total_tax, 110_000);
    assert_eq!(app.dashboard().unwrap().breakdown.ppn, 110_000);
}

#[actix_web::test]
async fn test_successful_submit_clears_base_and_description() {
    let backend = spawn_fake_backend();
    let mut app = logged_in_app(&backend);
    app.select_tab(Tab::Input).await;

    fill_form(&mut app, TaxCategory::Pph21, "8000000", "Honor narasumber");
    app.form_mut().set_manual_rate("7.5");
    app.submit_form().await.unwrap();

    let form = app.form();
    assert_eq!(form.base(), "");
    assert_eq!(form.description(), "");
    assert_eq!(form.preview(), dec!(0));
    // Date, category and rate stay for the next entry
    assert_eq!(form.category(), TaxCategory::Pph21);
    assert_eq!(form.manual_rate(), "7.5");
    assert_eq!(form.date(), "2025-03-14");
    assert!(form.error().is_none());
    assert!(!form.is_submitting());

    assert_eq!(backend.state.transactions()[0].tax_amount, 600_000);
}

#[actix_web::test]
async fn test_failed_submit_keeps_fields_for_retry() {
    let backend = spawn_fake_backend();
    backend.state.set_failing(HIT_CREATE, true);
    let mut app = logged_in_app(&backend);
    app.select_tab(Tab::Input).await;

    fill_form(&mut app, TaxCategory::Pph23, "2500000", "Sewa gudang");
    assert!(app.submit_form().await.is_err());

    assert_eq!(app.active_tab(), Tab::Input);
    let form = app.form();
    assert_eq!(form.base(), "2500000");
    assert_eq!(form.description(), "Sewa gudang");
    assert_eq!(form.error(), Some("Failed to save transaction"));
    assert!(!form.is_submitting());
    assert!(app.render().contains("! Failed to save transaction"));

    // Retry once the backend recovers
    backend.state.set_failing(HIT_CREATE, false);
    let created = app.submit_form().await.unwrap();
    assert_eq!(created.tax_amount, 50_000);
    assert!(app.form().error().is_none());
}

#[actix_web::test]
async fn test_invalid_form_sends_nothing() {
    let backend = spawn_fake_backend();
    let mut app = logged_in_app(&backend);
    app.select_tab(Tab::Input).await;

    fill_form(&mut app, TaxCategory::Ppn, "", "Tanpa nominal");
    assert!(app.submit_form().await.is_err());

    assert_eq!(backend.state.hits(HIT_CREATE), 0);
    assert_eq!(app.form().error(), Some("Taxable base (DPP) is required"));
}

#[actix_web::test]
async fn test_delete_removes_from_list_and_totals() {
    let backend = spawn_fake_backend();
    let (session, _store) = TestDataFactory::authenticated_session();
    let api = HttpTaxApi::new(backend.api_config());

    let kept = api
        .create_transaction(&session, &TestDataFactory::payload(TaxCategory::Ppn, 1_000_000, "Laptop"))
        .await
        .unwrap();
    let removed = api
        .create_transaction(&session, &TestDataFactory::payload(TaxCategory::Pph23, 3_000_000, "Sewa"))
        .await
        .unwrap();

    let mut app = logged_in_app(&backend);
    app.start().await;
    assert_eq!(app.transactions().len(), 2);
    assert_eq!(app.dashboard().unwrap().total_tax, 170_000);

    app.delete_transaction(removed.id).await.unwrap();

    assert_eq!(app.transactions(), &[kept]);
    let summary = app.dashboard().unwrap();
    assert_eq!(summary.total_tax, 110_000);
    assert_eq!(summary.total_transactions, 1);
    assert_eq!(summary.breakdown.pph23, 0);
    assert!(app.alert().is_none());
}

#[actix_web::test]
async fn test_failed_delete_raises_alert() {
    let backend = spawn_fake_backend();
    let mut app = logged_in_app(&backend);
    app.start().await;
    app.select_tab(Tab::List).await;
    let fetches = backend.state.hits(HIT_LIST);

    assert!(app.delete_transaction(99).await.is_err());
    assert_eq!(app.alert(), Some("Failed to delete transaction"));
    assert!(app.render().contains("! Failed to delete transaction"));
    // No refresh after a failed delete
    assert_eq!(backend.state.hits(HIT_LIST), fetches);

    app.dismiss_alert();
    assert!(app.alert().is_none());
}
