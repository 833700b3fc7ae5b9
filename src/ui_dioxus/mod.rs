// Dioxus UI module
pub mod app;
pub mod components;
pub mod platform;
pub mod router;
pub mod views;

pub use app::App;
