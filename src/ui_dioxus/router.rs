use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::ProductId;
use crate::ui_dioxus::components::{Message, MessageVariant};
use crate::ui_dioxus::views::ProductDetailsView;

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/product/:id")]
    ProductDetails { id: String },

    #[route("/product-update/:id")]
    ProductUpdate { id: String },

    #[route("/:id/checkout")]
    Checkout { id: String },
}

impl Route {
    pub fn product_details(id: &ProductId) -> Self {
        Route::ProductDetails { id: id.to_string() }
    }

    pub fn product_update(id: &ProductId) -> Self {
        Route::ProductUpdate { id: id.to_string() }
    }

    pub fn checkout(id: &ProductId) -> Self {
        Route::Checkout { id: id.to_string() }
    }
}

/// Link target of the "Pay with Stripe" button. The router parses it to the
/// same `Route::Checkout` that clicking the link pushes.
pub fn checkout_href(id: &ProductId) -> String {
    format!("/{id}/checkout/")
}

#[component]
fn Home() -> Element {
    rsx! {
        div { class: "container home",
            h3 { "Latest Products" }
        }
    }
}

#[component]
fn ProductDetails(id: String) -> Element {
    rsx! { ProductDetailsView { id } }
}

// Editing and checkout live in their own flows; these routes only land there.
#[component]
fn ProductUpdate(id: String) -> Element {
    rsx! {
        div { class: "container product-update",
            Message { variant: MessageVariant::Info, "Editing product {id}" }
        }
    }
}

#[component]
fn Checkout(id: String) -> Element {
    rsx! {
        div { class: "container checkout",
            Message { variant: MessageVariant::Info, "Checkout for product {id}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_href_keeps_trailing_slash() {
        assert_eq!(checkout_href(&ProductId::new("7")), "/7/checkout/");
    }

    #[test]
    fn test_route_paths() {
        let id = ProductId::new("7");
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::product_details(&id).to_string(), "/product/7");
        assert_eq!(Route::checkout(&id).to_string(), "/7/checkout");
        assert_eq!(Route::product_update(&id).to_string(), "/product-update/7");
    }

    #[test]
    fn test_trailing_slash_links_match_pushed_routes() {
        let id = ProductId::new("7");
        assert_eq!(
            checkout_href(&id).parse::<Route>().ok(),
            Some(Route::checkout(&id))
        );
        assert_eq!(
            "/product-update/7/".parse::<Route>().ok(),
            Some(Route::product_update(&id))
        );
    }

    #[test]
    fn test_parse_product_route() {
        let route = "/product/42".parse::<Route>().ok();
        assert_eq!(route, Some(Route::ProductDetails { id: "42".to_string() }));
    }
}
