use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::config::StorefrontConfig;
use crate::domain::{ProductId, Size};
use crate::store::{Store, StoreReader};
use crate::ui_dioxus::components::{ConfirmationDialog, Loader, Message, MessageVariant};
use crate::ui_dioxus::platform::{BrowserNotifier, Navigate};
use crate::ui_dioxus::router::Route;
use crate::ui_dioxus::views::product_details_model::{
    delete_prompt, view_from_store, PageView, ProductDetail, ProductDetailsController, Purchase,
};

/// Product details page wired to the store, router and browser.
#[component]
pub fn ProductDetailsView(id: ReadOnlySignal<String>) -> Element {
    let store = use_context::<Store>();
    let config = use_context::<StorefrontConfig>();
    let navigator = use_navigator();
    let mut controller = use_signal(ProductDetailsController::new);

    // Fetch on mount and whenever the route id changes
    use_effect({
        let store = store.clone();
        move || {
            let product_id = ProductId::new(id());
            controller.write().mount(product_id, &store);
        }
    });

    // Delete success is handled once per transition, not once per render
    use_effect({
        let store = store.clone();
        let notice = config.deletion_notice.clone();
        move || {
            let status = store.product_delete();
            controller
                .write()
                .observe_delete(&status, &store, &navigator, &BrowserNotifier, &notice);
        }
    });

    let view = view_from_store(&store, &config);
    let dialog_open = controller.read().dialog_open();
    let size = controller.read().size();

    rsx! {
        div { class: "product-details-page",
            ProductDetailsBody {
                view,
                size,
                dialog_open,
                on_delete: move |_: ()| controller.write().open_delete_dialog(),
                on_confirm_delete: {
                    let store = store.clone();
                    move |_: ()| {
                        controller.write().confirm_delete(&store);
                    }
                },
                on_cancel_delete: move |_: ()| controller.write().cancel_delete(),
                on_edit: move |route: Route| Navigate::push(&navigator, route),
                on_checkout: move |route: Route| Navigate::push(&navigator, route),
                on_size: move |size: Size| controller.write().select_size(size),
            }
        }
    }
}

/// Presentational body: renders exactly one of loading, error or detail, plus
/// the delete dialog over a loaded product.
#[component]
pub fn ProductDetailsBody(
    view: PageView,
    size: Size,
    dialog_open: bool,
    on_delete: EventHandler<()>,
    on_confirm_delete: EventHandler<()>,
    on_cancel_delete: EventHandler<()>,
    on_edit: EventHandler<Route>,
    on_checkout: EventHandler<Route>,
    on_size: EventHandler<Size>,
) -> Element {
    match view {
        PageView::Loading => rsx! {
            Loader { label: "Getting Product Details".to_string() }
        },
        PageView::Error(error) => rsx! {
            Message { variant: MessageVariant::Danger, "{error}" }
        },
        PageView::Detail(detail) => {
            let prompt = delete_prompt(&detail.product);
            rsx! {
                if dialog_open {
                    ConfirmationDialog {
                        title: "Delete Confirmation".to_string(),
                        message: prompt,
                        confirm_text: "Confirm Delete".to_string(),
                        cancel_text: "Cancel".to_string(),
                        danger: true,
                        on_confirm: on_confirm_delete,
                        on_cancel: on_cancel_delete,
                    }
                }
                ProductDetailCard {
                    detail,
                    size,
                    on_delete,
                    on_edit,
                    on_checkout,
                    on_size,
                }
            }
        }
    }
}

#[component]
fn ProductDetailCard(
    detail: ProductDetail,
    size: Size,
    on_delete: EventHandler<()>,
    on_edit: EventHandler<Route>,
    on_checkout: EventHandler<Route>,
    on_size: EventHandler<Size>,
) -> Element {
    let ProductDetail {
        product,
        price_label,
        admin_controls,
        purchase,
        edit_route,
    } = detail;
    let image = product.image.unwrap_or_default();
    let name = product.name;
    let description = product.description;

    let buy = match purchase {
        Purchase::Checkout { href, route } => rsx! {
            a {
                class: "checkout-link",
                href: "{href}",
                prevent_default: "onclick",
                onclick: move |_| on_checkout.call(route.clone()),
                button { class: "btn btn-primary",
                    span { "Pay with Stripe" }
                }
            }
        },
        Purchase::OutOfStock => rsx! {
            Message { variant: MessageVariant::Danger, "Out Of Stock!" }
        },
    };

    rsx! {
        div { class: "container product-details",
            div { class: "row",
                div { class: "col-md-6",
                    img {
                        class: "card-img-top",
                        src: "{image}",
                        alt: "{name}",
                        height: "420",
                    }
                    if admin_controls {
                        span { class: "admin-controls", style: "display: flex;",
                            button {
                                class: "btn mt-2 btn-danger btn-sm",
                                style: "width: 100%;",
                                onclick: move |_| on_delete.call(()),
                                "Delete Product"
                            }
                            button {
                                class: "ml-2 mt-2 btn btn-primary btn-sm",
                                style: "width: 100%;",
                                onclick: move |_| on_edit.call(edit_route.clone()),
                                "Edit Product"
                            }
                        }
                    }
                }

                div { class: "col-sm",
                    b { "{name}" }
                    hr {}
                    span { class: "justify-description-css",
                        p { "{description}" }
                    }
                    span {
                        class: "price",
                        style: "display: flex; justify-content: center; border: 1px solid; border-color: #C6ACE7; padding: 2px;",
                        "Price:"
                        span { class: "text-success ml-2", "{price_label}" }
                    }
                    SizeSelect { selected: size, on_change: on_size }
                }

                div { class: "col-sm",
                    b { "Buy" }
                    hr {}
                    {buy}
                }
            }
        }
    }
}

#[component]
fn SizeSelect(selected: Size, on_change: EventHandler<Size>) -> Element {
    rsx! {
        div { class: "form-group",
            label { r#for: "size-select", "Select Size" }
            select {
                id: "size-select",
                class: "form-control",
                onchange: move |evt: FormEvent| {
                    if let Ok(size) = evt.value().parse::<Size>() {
                        on_change.call(size);
                    }
                },
                for option_size in Size::ALL {
                    option {
                        key: "{option_size}",
                        value: "{option_size}",
                        selected: option_size == selected,
                        "{option_size}"
                    }
                }
            }
        }
    }
}
