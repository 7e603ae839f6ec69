// Integration tests for the HTTP client against the fake backend
//
// Tests:
// - Login success and AuthError on bad credentials
// - Bearer token injection on authenticated calls
// - FetchError / SubmitError / DeleteError on non-success statuses
// - Dashboard summary falls back to the zeroed default instead of failing

use rust_decimal_macros::dec;
use taxdesk::api::{HttpTaxApi, TaxApi};
use taxdesk::config::ApiConfig;
use taxdesk::core::AppError;
use taxdesk::dashboard::DashboardSummary;
use taxdesk::taxes::TaxCategory;

#[path = "../helpers/mod.rs"]
mod helpers;
use helpers::*;

#[actix_web::test]
async fn test_login_returns_token() {
    let backend = spawn_fake_backend();
    let api = HttpTaxApi::new(backend.api_config());

    let token = api.login(TEST_USERNAME, TEST_PASSWORD).await.unwrap();
    assert_eq!(token.access_token, TEST_TOKEN);
    assert_eq!(token.token_type.as_deref(), Some("bearer"));
}

#[actix_web::test]
async fn test_login_with_bad_password_is_auth_error() {
    let backend = spawn_fake_backend();
    let api = HttpTaxApi::new(backend.api_config());

    let result = api.login(TEST_USERNAME, "wrong").await;
    assert!(matches!(result, Err(AppError::Auth(_))), "got {:?}", result);
    assert_eq!(backend.state.hits(HIT_LOGIN), 1);
}

#[actix_web::test]
async fn test_authenticated_calls_send_bearer_token() {
    let backend = spawn_fake_backend();
    let api = HttpTaxApi::new(backend.api_config());
    let (session, _store) = TestDataFactory::authenticated_session();

    api.list_transactions(&session).await.unwrap();
    api.dashboard_summary(&session).await;

    assert_eq!(
        backend.state.seen_tokens(),
        vec![Some(TEST_TOKEN.to_string()), Some(TEST_TOKEN.to_string())]
    );
}

#[actix_web::test]
async fn test_anonymous_session_sends_no_authorization() {
    let backend = spawn_fake_backend();
    let api = HttpTaxApi::new(backend.api_config());
    let (session, _store) = TestDataFactory::anonymous_session();

    let result = api.list_transactions(&session).await;
    assert!(matches!(result, Err(AppError::Fetch(_))), "got {:?}", result);
    assert_eq!(backend.state.seen_tokens(), vec![None]);
}

#[actix_web::test]
async fn test_create_returns_backend_record() {
    let backend = spawn_fake_backend();
    let api = HttpTaxApi::new(backend.api_config());
    let (session, _store) = TestDataFactory::authenticated_session();

    let payload = TestDataFactory::pph21_payload(8_000_000, dec!(5));
    let created = api.create_transaction(&session, &payload).await.unwrap();

    assert_eq!(created.tax_type, TaxCategory::Pph21);
    assert_eq!(created.dpp, 8_000_000);
    assert_eq!(created.tax_rate, dec!(0.05));
    assert_eq!(created.tax_amount, 400_000);
    assert_eq!(created.date, TestDataFactory::date());

    let listed = api.list_transactions(&session).await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[actix_web::test]
async fn test_create_failure_is_submit_error() {
    let backend = spawn_fake_backend();
    backend.state.set_failing(HIT_CREATE, true);
    let api = HttpTaxApi::new(backend.api_config());
    let (session, _store) = TestDataFactory::authenticated_session();

    let payload = TestDataFactory::payload(TaxCategory::Ppn, 1_000_000, "Pembelian laptop");
    let result = api.create_transaction(&session, &payload).await;

    assert!(matches!(result, Err(AppError::Submit(_))), "got {:?}", result);
    assert!(backend.state.transactions().is_empty());
}

#[actix_web::test]
async fn test_delete_unknown_id_is_delete_error() {
    let backend = spawn_fake_backend();
    let api = HttpTaxApi::new(backend.api_config());
    let (session, _store) = TestDataFactory::authenticated_session();

    let result = api.delete_transaction(&session, 404).await;
    assert!(matches!(result, Err(AppError::Delete(_))), "got {:?}", result);
}

#[actix_web::test]
async fn test_list_failure_is_fetch_error() {
    let backend = spawn_fake_backend();
    backend.state.set_failing(HIT_LIST, true);
    let api = HttpTaxApi::new(backend.api_config());
    let (session, _store) = TestDataFactory::authenticated_session();

    let result = api.list_transactions(&session).await;
    assert!(matches!(result, Err(AppError::Fetch(_))), "got {:?}", result);
}

#[actix_web::test]
async fn test_dashboard_failure_yields_zeroed_summary() {
    let backend = spawn_fake_backend();
    let api = HttpTaxApi::new(backend.api_config());
    let (session, _store) = TestDataFactory::authenticated_session();

    api.create_transaction(
        &session,
        &TestDataFactory::payload(TaxCategory::Ppn, 1_000_000, "Pembelian laptop"),
    )
    .await
    .unwrap();

    backend.state.set_failing(HIT_DASHBOARD, true);
    let summary = api.dashboard_summary(&session).await;

    assert_eq!(summary, DashboardSummary::default());
    assert_eq!(summary.total_tax, 0);
    assert_eq!(summary.total_transactions, 0);
    assert_eq!(
        (summary.breakdown.ppn, summary.breakdown.pph21, summary.breakdown.pph23),
        (0, 0, 0)
    );
}

#[actix_web::test]
async fn test_dashboard_unreachable_backend_yields_zeroed_summary() {
    // Nothing listens on port 1
    let api = HttpTaxApi::new(ApiConfig::new("http://127.0.0.1:1"));
    let (session, _store) = TestDataFactory::authenticated_session();

    assert_eq!(api.dashboard_summary(&session).await, DashboardSummary::default());
}

#[actix_web::test]
async fn test_failed_call_is_not_retried() {
    let backend = spawn_fake_backend();
    backend.state.set_failing(HIT_DELETE, true);
    let api = HttpTaxApi::new(backend.api_config());
    let (session, _store) = TestDataFactory::authenticated_session();

    let _ = api.delete_transaction(&session, 1).await;
    assert_eq!(backend.state.hits(HIT_DELETE), 1);
}
