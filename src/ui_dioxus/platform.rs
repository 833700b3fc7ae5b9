//! Browser capabilities the pages need beyond the store.

use std::fmt::Debug;

use dioxus_router::prelude::Navigator;
use tracing::{info, warn};

use crate::ui_dioxus::router::Route;

pub trait Navigate {
    fn push(&self, route: Route);
}

/// Blocking, user-facing notification (`window.alert` in the browser).
pub trait Notify {
    fn alert(&self, message: &str);
}

impl Navigate for Navigator {
    fn push(&self, route: Route) {
        info!(route = %route, "Navigating");
        let target = route.to_string();
        let failure = Navigator::push(self, route);
        report_navigation(&target, failure);
    }
}

/// Logs a refused navigation. Returns whether the router refused it.
fn report_navigation<F: Debug>(target: &str, failure: Option<F>) -> bool {
    match failure {
        Some(failure) => {
            warn!(route = %target, failure = ?failure, "Navigation failed");
            true
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserNotifier;

impl Notify for BrowserNotifier {
    fn alert(&self, message: &str) {
        info!(message = %message, "Notifying user");

        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                tracing::warn!(error = ?e, "window.alert failed");
            }
        }
    }
}
