//! Async action runners: each one reports its progress to the store as
//! `Request -> Success | Fail` actions.

use tracing::{info, instrument, warn};

use crate::domain::ProductId;
use crate::services::error_handling::LogHelper;
use crate::services::{ProductApi, StorefrontError};
use crate::store::Action;

#[instrument(skip(api, sink))]
pub async fn fetch_product<F>(api: &dyn ProductApi, id: &ProductId, mut sink: F)
where
    F: FnMut(Action),
{
    sink(Action::ProductDetailsRequest);

    match api.get_product(id).await {
        Ok(product) => {
            info!(product_id = %id, name = %product.name, "Product loaded");
            sink(Action::ProductDetailsSuccess(product));
        }
        Err(e) => {
            LogHelper::log_error_with_context("fetch_product", &e);
            sink(Action::ProductDetailsFail(e.to_string()));
        }
    }
}

#[instrument(skip(api, token, sink))]
pub async fn delete_product<F>(api: &dyn ProductApi, id: &ProductId, token: Option<&str>, mut sink: F)
where
    F: FnMut(Action),
{
    sink(Action::DeleteProductRequest);

    let Some(token) = token else {
        warn!(product_id = %id, "Delete requested without an access token");
        sink(Action::DeleteProductFail(
            StorefrontError::AuthenticationRequired.to_string(),
        ));
        return;
    };

    match api.delete_product(id, token).await {
        Ok(()) => {
            LogHelper::log_product_operation("delete", id, true);
            sink(Action::DeleteProductSuccess);
        }
        Err(e) => {
            LogHelper::log_product_operation("delete", id, false);
            LogHelper::log_error_with_context("delete_product", &e);
            sink(Action::DeleteProductFail(e.to_string()));
        }
    }
}
