// Navigation shell and text views

pub mod controllers;
pub mod models;
pub mod views;

pub use controllers::{App, Command};
pub use models::Tab;
