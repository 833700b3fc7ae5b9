use dioxus::prelude::*;
use storefront::config::StorefrontConfig;
use storefront::domain::{Product, Size, Stock, UserInfo};
use storefront::store::RequestStatus;
use storefront::test_helpers::{admin_user, customer_user, sample_product};
use storefront::ui_dioxus::router::Route;
use storefront::ui_dioxus::views::product_details_model::build_view;
use storefront::ui_dioxus::views::{PageView, ProductDetailsBody};

#[component]
fn BodyHarness(view: PageView, dialog_open: bool) -> Element {
    rsx! {
        ProductDetailsBody {
            view,
            size: Size::M,
            dialog_open,
            on_delete: |_: ()| {},
            on_confirm_delete: |_: ()| {},
            on_cancel_delete: |_: ()| {},
            on_edit: |_: Route| {},
            on_checkout: |_: Route| {},
            on_size: |_: Size| {},
        }
    }
}

fn render_with_dialog(view: PageView, dialog_open: bool) -> String {
    let mut dom = VirtualDom::new_with_props(BodyHarness, BodyHarnessProps { view, dialog_open });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_body(view: PageView) -> String {
    render_with_dialog(view, false)
}

fn loaded_view(stock: Stock, user: Option<UserInfo>) -> PageView {
    let details = RequestStatus::Succeeded(Product {
        stock,
        ..sample_product()
    });
    build_view(&details, user.as_ref(), &StorefrontConfig::default())
}

fn render_loaded(stock: Stock, user: Option<UserInfo>) -> String {
    render_body(loaded_view(stock, user))
}

#[test]
fn test_loading_renders_indicator_only() {
    let html = render_body(build_view(
        &RequestStatus::Loading,
        Some(&admin_user()),
        &StorefrontConfig::default(),
    ));

    assert!(html.contains("Getting Product Details"));
    assert!(html.contains("spinner-border"));
    assert!(!html.contains("Linen Shirt"));
    assert!(!html.contains("Delete Product"));
}

#[test]
fn test_error_replaces_detail_view() {
    let html = render_body(build_view(
        &RequestStatus::Failed("Not found.".to_string()),
        Some(&admin_user()),
        &StorefrontConfig::default(),
    ));

    assert!(html.contains("Not found."));
    assert!(html.contains("alert-danger"));
    assert!(!html.contains("Getting Product Details"));
    assert!(!html.contains("Pay with Stripe"));
    assert!(!html.contains("card-img-top"));
}

#[test]
fn test_detail_shows_product_fields() {
    let html = render_loaded(Stock::Count(3), None);

    assert!(html.contains("Linen Shirt"));
    assert!(html.contains("Breathable summer shirt"));
    assert!(html.contains("/images/linen.png"));
    assert!(html.contains("₹ 499.00"));
    assert!(html.contains("Select Size"));
    for size in Size::ALL {
        assert!(html.contains(&format!(">{size}<")), "missing size option {size}");
    }
}

#[test]
fn test_out_of_stock_has_no_checkout_link() {
    let html = render_loaded(Stock::Count(0), None);

    assert!(html.contains("Out Of Stock!"));
    assert!(!html.contains("Pay with Stripe"));
    assert!(!html.contains("/checkout/"));
}

#[test]
fn test_in_stock_links_to_checkout() {
    let html = render_loaded(Stock::Flag(true), None);

    assert!(html.contains("href=\"/7/checkout/\""));
    assert!(html.contains("Pay with Stripe"));
    assert!(!html.contains("Out Of Stock!"));
}

#[test]
fn test_admin_controls_follow_admin_flag() {
    let customer = render_loaded(Stock::Count(3), Some(customer_user()));
    assert!(!customer.contains("Delete Product"));
    assert!(!customer.contains("Edit Product"));

    let anonymous = render_loaded(Stock::Count(3), None);
    assert!(!anonymous.contains("Delete Product"));

    let admin = render_loaded(Stock::Count(3), Some(admin_user()));
    assert!(admin.contains("Delete Product"));
    assert!(admin.contains("Edit Product"));
}

#[test]
fn test_open_dialog_renders_product_prompt() {
    let html = render_with_dialog(loaded_view(Stock::Count(3), Some(admin_user())), true);

    assert!(html.contains("Delete Confirmation"));
    assert!(html.contains("Are you sure you want to delete this product"));
    assert!(html.contains("Linen Shirt"));
    assert!(html.contains("Confirm Delete"));
    assert!(html.contains("Cancel"));
    assert!(html.contains("fa-exclamation-triangle"));
    // The card stays rendered underneath the dialog.
    assert!(html.contains("Pay with Stripe"));
}

#[test]
fn test_closed_dialog_is_not_rendered() {
    let html = render_with_dialog(loaded_view(Stock::Count(3), Some(admin_user())), false);

    assert!(html.contains("Delete Product"));
    assert!(!html.contains("Delete Confirmation"));
    assert!(!html.contains("Confirm Delete"));
}

#[test]
fn test_dialog_needs_a_loaded_product() {
    let html = render_with_dialog(PageView::Loading, true);

    assert!(html.contains("Getting Product Details"));
    assert!(!html.contains("Delete Confirmation"));
}
