use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use taxdesk::api::HttpTaxApi;
use taxdesk::config::{Config, LogFormat};
use taxdesk::core::TimezoneConverter;
use taxdesk::session::{FileCredentialStore, MemoryCredentialStore, Session};
use taxdesk::shell::controllers::{is_confirmation, HELP};
use taxdesk::shell::{App, Command, Tab};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Input = Lines<BufReader<Stdin>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting TaxDesk");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Backend API: {}", config.api.base_url);

    let session = match Session::load(Arc::new(FileCredentialStore::new(&config.storage.path))) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(
                "Cannot read {}: {}; continuing without stored credential",
                config.storage.path.display(),
                e
            );
            Session::anonymous(Arc::new(MemoryCredentialStore::new()))
        }
    };

    let api = Arc::new(HttpTaxApi::new(config.api.clone()));
    let mut app = App::new(api, session, TimezoneConverter::today_in_jakarta());
    app.start().await;
    println!("{}", app.render());

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt("> ")?;
        let Some(line) = input.next_line().await? else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        if !handle(&mut app, command, &mut input).await? {
            continue;
        }
        println!("{}", app.render());
    }

    tracing::info!("TaxDesk stopped");
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("taxdesk={}", config.app.log_level).into());
    let registry = tracing_subscriber::registry().with(filter);

    // Logs on stderr, views on stdout
    match config.app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn prompt(text: &str) -> std::io::Result<()> {
    print!("{}", text);
    std::io::stdout().flush()
}

/// Run one command; returns whether the screen should be redrawn
async fn handle(app: &mut App, command: Command, input: &mut Input) -> anyhow::Result<bool> {
    let command = match command {
        Command::Help => {
            println!("{}", HELP);
            return Ok(false);
        }
        Command::Show => return Ok(true),
        Command::Login { username, password } => {
            if app.is_logged_in() {
                println!("Already logged in, logout first");
                return Ok(false);
            }
            // A rejected login is shown on the login screen
            if let Err(e) = app.login(&username, &password).await {
                tracing::debug!("Login not completed: {}", e);
            }
            return Ok(true);
        }
        other => other,
    };

    if let Err(e) = app.ensure_logged_in() {
        println!("{}", e.user_message());
        return Ok(false);
    }

    match command {
        Command::Logout => {
            if let Err(e) = app.logout() {
                println!("! {}", e.user_message());
            }
        }
        Command::Tab(tab) => {
            app.dismiss_alert();
            app.select_tab(tab).await;
        }
        Command::Set { field, value } => {
            if let Err(e) = app.form_mut().set_field(field, &value) {
                println!("! {}", e.user_message());
                return Ok(false);
            }
        }
        Command::Submit => {
            if app.active_tab() != Tab::Input {
                println!("Open the input tab first (tab input)");
                return Ok(false);
            }
            // Errors stay on the form
            if let Err(e) = app.submit_form().await {
                tracing::debug!("Submit not completed: {}", e);
            }
        }
        Command::Delete(id) => {
            let label = match app.find_transaction(id) {
                Some(trx) => format!("{} ({})", trx.description, trx.formatted_tax_amount()),
                None => format!("#{}", id),
            };
            prompt(&format!("Delete {}? [y/N] ", label))?;
            let answer = input.next_line().await?.unwrap_or_default();
            if !is_confirmation(&answer) {
                return Ok(false);
            }
            // A failed delete is shown as an alert
            if let Err(e) = app.delete_transaction(id).await {
                tracing::debug!("Delete not completed: {}", e);
            }
        }
        Command::Help | Command::Show | Command::Login { .. } | Command::Quit => {}
    }

    Ok(true)
}
