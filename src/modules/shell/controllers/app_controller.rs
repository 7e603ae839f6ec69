use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use crate::core::{AppError, Result};
use crate::modules::api::TaxApi;
use crate::modules::dashboard::DashboardSummary;
use crate::modules::session::Session;
use crate::modules::shell::models::Tab;
use crate::modules::shell::views;
use crate::modules::transactions::{Transaction, TransactionForm};

/// Message shown on the login screen after a rejected login
pub const LOGIN_HINT: &str =
    "Login failed. Try username: admin, password: admin123 (if the backend was just started).";

/// Handle for one refresh cycle
///
/// Results are applied only while their ticket is the most recent one, so a
/// slow response can never overwrite the state written by a later refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
}

impl RefreshTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Results of fetching summary and list together
#[derive(Debug)]
pub struct RefreshOutcome {
    pub summary: DashboardSummary,
    pub transactions: Result<Vec<Transaction>>,
}

/// Top-level UI state: session, active tab, loaded data and the input form
///
/// Every user action is one method call, handled to completion before the
/// next. Logging in and switching tabs re-fetch both the dashboard summary
/// and the transaction list.
pub struct App {
    api: Arc<dyn TaxApi>,
    session: Session,
    active_tab: Tab,
    dashboard: Option<DashboardSummary>,
    transactions: Vec<Transaction>,
    loading: bool,
    auth_error: Option<String>,
    alert: Option<String>,
    form: TransactionForm,
    today: NaiveDate,
    latest_refresh: u64,
}

impl App {
    pub fn new(api: Arc<dyn TaxApi>, session: Session, today: NaiveDate) -> Self {
        Self {
            api,
            session,
            active_tab: Tab::Dashboard,
            dashboard: None,
            transactions: Vec::new(),
            loading: false,
            auth_error: None,
            alert: None,
            form: TransactionForm::new(today),
            today,
            latest_refresh: 0,
        }
    }

    /// Initial load: a session restored from storage fetches right away
    pub async fn start(&mut self) {
        if self.is_logged_in() {
            self.refresh().await;
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn dashboard(&self) -> Option<&DashboardSummary> {
        self.dashboard.as_ref()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn auth_error(&self) -> Option<&str> {
        self.auth_error.as_deref()
    }

    /// Last alert, e.g. a failed delete
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn form(&self) -> &TransactionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TransactionForm {
        &mut self.form
    }

    /// Name shown in the header
    pub fn display_name(&self) -> &str {
        self.session.username().unwrap_or("Admin")
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        self.auth_error = None;

        let token = match self.api.login(username, password).await {
            Ok(token) => token,
            Err(e) => {
                warn!("Login rejected for {}: {}", username, e);
                self.auth_error = Some(LOGIN_HINT.to_string());
                return Err(e);
            }
        };

        if let Err(e) = self.session.begin(token.access_token, username) {
            error!("Failed to store credential: {}", e);
            self.auth_error = Some(e.user_message());
            return Err(e);
        }

        self.refresh().await;
        Ok(())
    }

    /// Drop the credential and everything loaded with it
    pub fn logout(&mut self) -> Result<()> {
        // Outstanding refreshes belong to the old session
        self.latest_refresh += 1;

        self.active_tab = Tab::Dashboard;
        self.dashboard = None;
        self.transactions.clear();
        self.loading = false;
        self.auth_error = None;
        self.alert = None;
        self.form = TransactionForm::new(self.today);

        let result = self.session.end();
        info!("Logged out");
        result
    }

    /// Switch views; returns whether the tab actually changed
    ///
    /// A change always re-fetches summary and list once. Selecting the tab
    /// already shown does nothing.
    pub async fn select_tab(&mut self, tab: Tab) -> bool {
        if tab == self.active_tab {
            return false;
        }

        debug!("Switching tab {} -> {}", self.active_tab, tab);
        self.active_tab = tab;
        self.refresh().await;
        true
    }

    /// Start a refresh cycle; supersedes every earlier ticket
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.latest_refresh += 1;
        self.loading = true;
        RefreshTicket {
            generation: self.latest_refresh,
        }
    }

    /// Fetch summary and list together; both settle before this returns
    pub async fn fetch_all(api: &dyn TaxApi, session: &Session) -> RefreshOutcome {
        let (summary, transactions) =
            tokio::join!(api.dashboard_summary(session), api.list_transactions(session));
        RefreshOutcome {
            summary,
            transactions,
        }
    }

    /// Store a refresh result; returns false when the ticket is stale
    ///
    /// A failed list fetch is logged and keeps the previous list.
    pub fn apply_refresh(&mut self, ticket: RefreshTicket, outcome: RefreshOutcome) -> bool {
        if ticket.generation != self.latest_refresh {
            debug!(
                "Discarding stale refresh {} (latest is {})",
                ticket.generation, self.latest_refresh
            );
            return false;
        }

        self.dashboard = Some(outcome.summary);
        match outcome.transactions {
            Ok(transactions) => self.transactions = transactions,
            Err(e) => error!("Failed to fetch data: {}", e),
        }
        self.loading = false;
        true
    }

    /// Re-fetch summary and list, when logged in
    pub async fn refresh(&mut self) {
        if !self.is_logged_in() {
            return;
        }

        let ticket = self.begin_refresh();
        let api = Arc::clone(&self.api);
        let outcome = Self::fetch_all(api.as_ref(), &self.session).await;
        self.apply_refresh(ticket, outcome);
    }

    /// Submit the input form; on success show the list
    pub async fn submit_form(&mut self) -> Result<Transaction> {
        let created = self.form.submit(self.api.as_ref(), &self.session).await?;

        if self.active_tab == Tab::List {
            self.refresh().await;
        } else {
            self.select_tab(Tab::List).await;
        }
        Ok(created)
    }

    /// Delete a transaction and re-fetch; a failure raises an alert
    pub async fn delete_transaction(&mut self, id: i64) -> Result<()> {
        self.alert = None;

        match self.api.delete_transaction(&self.session, id).await {
            Ok(_) => {
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                warn!("Delete of transaction {} failed: {}", id, e);
                self.alert = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Look up a loaded transaction, for the delete confirmation
    pub fn find_transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Require a logged-in session for actions of the main screen
    pub fn ensure_logged_in(&self) -> Result<()> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(AppError::auth("Please log in first"))
        }
    }

    /// Current screen as text
    pub fn render(&self) -> String {
        if !self.is_logged_in() {
            return views::layout::render_login(self.auth_error());
        }
        views::layout::render_shell(self)
    }
}
