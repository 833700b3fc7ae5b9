pub mod config;
pub mod domain;
pub mod services;
pub mod store;
pub mod ui_dioxus;
pub mod utils;

// Make test_helpers available for integration tests
pub mod test_helpers;
