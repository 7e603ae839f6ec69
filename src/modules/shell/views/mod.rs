pub mod dashboard_view;
pub mod form_view;
pub mod layout;
pub mod list_view;
