use std::str::FromStr;

use crate::modules::shell::models::Tab;
use crate::modules::transactions::FormField;

/// One line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Logout,
    Tab(Tab),
    Set { field: FormField, value: String },
    Submit,
    Delete(i64),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  login <username> <password>   sign in
  logout                        sign out and forget the stored credential
  tab <dashboard|input|list>    switch view (also: dashboard, input, list)
  set <field> <value>           edit the form: date, category, base, description, rate
  submit                        save the transaction in the form
  delete <id>                   delete a transaction (asks for confirmation)
  show                          redraw the current view
  help                          this text
  quit                          exit";

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "login" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(username), Some(password), None) => Ok(Command::Login {
                        username: username.to_string(),
                        password: password.to_string(),
                    }),
                    _ => Err("Usage: login <username> <password>".to_string()),
                }
            }
            "logout" => Ok(Command::Logout),
            "tab" => rest.parse::<Tab>().map(Command::Tab),
            "dashboard" | "input" | "list" if rest.is_empty() => verb.parse::<Tab>().map(Command::Tab),
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(field, value)| (field, value.trim()))
                    .unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err("Usage: set <field> <value>".to_string());
                }
                Ok(Command::Set {
                    field: field.parse()?,
                    value: value.to_string(),
                })
            }
            "submit" | "save" => Ok(Command::Submit),
            "delete" | "rm" => rest
                .parse::<i64>()
                .map(Command::Delete)
                .map_err(|_| "Usage: delete <id>".to_string()),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command: {} (type help)", other)),
        }
    }
}

/// Answer to a yes/no confirmation prompt; anything but yes declines
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "ya")
}
