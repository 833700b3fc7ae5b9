//! Page logic for the product details view, kept free of Dioxus so it can be
//! driven directly with test doubles.

use tracing::{debug, info, warn};

use crate::config::StorefrontConfig;
use crate::domain::session::can_manage_products;
use crate::domain::{Product, ProductId, Size, UserInfo};
use crate::store::{Command, Dispatcher, RequestStatus, ResetFlag, StoreReader};
use crate::ui_dioxus::platform::{Navigate, Notify};
use crate::ui_dioxus::router::{checkout_href, Route};

/// Form flags cleared whenever the page is (re)mounted.
pub const MOUNT_RESETS: [ResetFlag; 3] = [
    ResetFlag::UpdateProduct,
    ResetFlag::CreateProduct,
    ResetFlag::CardCreate,
];

/// Where the page stands in the delete flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    ConfirmOpen,
    /// A delete was dispatched; a failure leaves the page here.
    Requested,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Purchase {
    Checkout { href: String, route: Route },
    OutOfStock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub price_label: String,
    pub admin_controls: bool,
    pub purchase: Purchase,
    pub edit_route: Route,
}

/// The three mutually exclusive renderings of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Loading,
    Error(String),
    Detail(ProductDetail),
}

impl PageView {
    pub fn product(&self) -> Option<&Product> {
        match self {
            PageView::Detail(detail) => Some(&detail.product),
            _ => None,
        }
    }
}

pub fn build_view(
    details: &RequestStatus<Product>,
    user: Option<&UserInfo>,
    config: &StorefrontConfig,
) -> PageView {
    match details {
        RequestStatus::Idle | RequestStatus::Loading => PageView::Loading,
        RequestStatus::Failed(error) => PageView::Error(error.clone()),
        RequestStatus::Succeeded(product) => {
            let purchase = if product.in_stock() {
                Purchase::Checkout {
                    href: checkout_href(&product.id),
                    route: Route::checkout(&product.id),
                }
            } else {
                Purchase::OutOfStock
            };

            PageView::Detail(ProductDetail {
                price_label: config.format_price(product.price),
                admin_controls: can_manage_products(user),
                purchase,
                edit_route: Route::product_update(&product.id),
                product: product.clone(),
            })
        }
    }
}

/// Body of the delete confirmation dialog.
pub fn delete_prompt(product: &Product) -> String {
    format!(
        "Are you sure you want to delete this product \"{}\"?",
        product.name
    )
}

pub fn view_from_store(reader: &dyn StoreReader, config: &StorefrontConfig) -> PageView {
    build_view(&reader.product_details(), reader.user_info().as_ref(), config)
}

/// Transient state owned by one mounted details page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDetailsController {
    product_id: Option<ProductId>,
    delete_flow: DeleteFlow,
    size: Size,
    // Set while the store reports a successful delete that has been handled.
    delete_success_handled: bool,
}

impl ProductDetailsController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `id` and clears stale form banners. Called on mount and on
    /// every change of the route id.
    pub fn mount(&mut self, id: ProductId, dispatcher: &dyn Dispatcher) {
        info!(product_id = %id, "Mounting product details");

        self.delete_flow = DeleteFlow::Idle;
        self.size = Size::default();
        self.product_id = Some(id.clone());

        dispatcher.dispatch(Command::FetchProduct(id));
        for flag in MOUNT_RESETS {
            dispatcher.dispatch(Command::Reset(flag));
        }
    }

    pub fn product_id(&self) -> Option<&ProductId> {
        self.product_id.as_ref()
    }

    pub fn delete_flow(&self) -> DeleteFlow {
        self.delete_flow
    }

    pub fn dialog_open(&self) -> bool {
        self.delete_flow == DeleteFlow::ConfirmOpen
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn select_size(&mut self, size: Size) {
        debug!(size = %size, "Size selected");
        self.size = size;
    }

    pub fn open_delete_dialog(&mut self) {
        if self.delete_flow == DeleteFlow::Idle {
            self.delete_flow = DeleteFlow::ConfirmOpen;
        }
    }

    pub fn cancel_delete(&mut self) {
        if self.delete_flow == DeleteFlow::ConfirmOpen {
            self.delete_flow = DeleteFlow::Idle;
        }
    }

    /// Dispatches the delete and closes the dialog. Returns whether a delete
    /// was dispatched.
    pub fn confirm_delete(&mut self, dispatcher: &dyn Dispatcher) -> bool {
        if self.delete_flow != DeleteFlow::ConfirmOpen {
            return false;
        }

        let Some(id) = self.product_id.clone() else {
            warn!("Delete confirmed before a product was mounted");
            self.delete_flow = DeleteFlow::Idle;
            return false;
        };

        info!(product_id = %id, "Delete confirmed");
        dispatcher.dispatch(Command::DeleteProduct(id));
        self.delete_flow = DeleteFlow::Requested;
        true
    }

    /// Reacts to the delete status. The success side effects (notice,
    /// navigation home, reset) run once per transition into success, however
    /// often this is called while the status stays there.
    pub fn observe_delete(
        &mut self,
        status: &RequestStatus<()>,
        dispatcher: &dyn Dispatcher,
        navigator: &dyn Navigate,
        notifier: &dyn Notify,
        notice: &str,
    ) -> bool {
        match status {
            RequestStatus::Succeeded(()) => {
                if self.delete_success_handled {
                    return false;
                }
                self.delete_success_handled = true;
                self.delete_flow = DeleteFlow::Idle;

                notifier.alert(notice);
                navigator.push(Route::Home {});
                dispatcher.dispatch(Command::Reset(ResetFlag::DeleteProduct));
                true
            }
            RequestStatus::Failed(error) => {
                if self.delete_flow == DeleteFlow::Requested {
                    warn!(error = %error, "Product deletion failed");
                }
                self.delete_success_handled = false;
                false
            }
            RequestStatus::Idle | RequestStatus::Loading => {
                self.delete_success_handled = false;
                false
            }
        }
    }
}
