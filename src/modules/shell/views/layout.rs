//! Login screen and the navigation shell around the three views.

use crate::modules::shell::controllers::App;
use crate::modules::shell::models::Tab;

use super::{dashboard_view, form_view, list_view};

pub const APP_NAME: &str = "TaxManager";

pub fn render_login(auth_error: Option<&str>) -> String {
    let mut lines = vec![
        format!("=== {} Indonesia ===", APP_NAME),
        "Sign in to manage company taxes".to_string(),
        String::new(),
    ];

    if let Some(error) = auth_error {
        lines.push(format!("! {}", error));
        lines.push(String::new());
    }

    lines.push("login <username> <password>".to_string());
    lines.push("Hint: start the backend first. Default: admin / admin123".to_string());
    lines.join("\n")
}

/// Navigation bar; the active tab is bracketed
fn render_nav(active: Tab) -> String {
    let links: Vec<String> = Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.nav_label())
            } else {
                format!(" {} ", tab.nav_label())
            }
        })
        .collect();
    format!("{} | {} | logout", APP_NAME, links.join(" "))
}

pub fn render_shell(app: &App) -> String {
    let tab = app.active_tab();
    let mut lines = vec![
        render_nav(tab),
        String::new(),
        format!("{}  (User: {})", tab.title(), app.display_name()),
        "Manage company taxes with ease.".to_string(),
        String::new(),
    ];

    if let Some(alert) = app.alert() {
        lines.push(format!("! {}", alert));
        lines.push(String::new());
    }

    if app.is_loading() && app.dashboard().is_none() {
        lines.push("Loading...".to_string());
        return lines.join("\n");
    }

    let body = match tab {
        Tab::Dashboard => dashboard_view::render(app.dashboard()),
        Tab::Input => form_view::render(app.form()),
        Tab::List => list_view::render(app.transactions()),
    };
    lines.push(body);
    lines.join("\n")
}
