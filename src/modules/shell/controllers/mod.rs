pub mod app_controller;
pub mod command;

pub use app_controller::{App, RefreshOutcome, RefreshTicket, LOGIN_HINT};
pub use command::{is_confirmation, Command, HELP};
