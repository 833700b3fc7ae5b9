use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::config::StorefrontConfig;
use crate::services::{HttpProductApi, ProductApi};
use crate::store::{AppState, Store};
use crate::ui_dioxus::router::Route;
use crate::utils::storage;

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| {
        StorefrontConfig::load().unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to default configuration");
            StorefrontConfig::default()
        })
    });

    // Restore the session persisted by the login flow
    let state = use_signal(|| AppState::with_user(storage::load_user_info()));

    use_context_provider(|| {
        let api: Rc<dyn ProductApi> = Rc::new(HttpProductApi::from_config(&config));
        Store::new(state, api)
    });

    rsx! {
        div { class: "app-container",
            nav { class: "navbar",
                a { class: "nav-brand", href: "/", "Storefront" }
            }
            main { class: "app-main",
                Router::<Route> {}
            }
        }
    }
}
