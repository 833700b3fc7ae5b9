use tracing::debug;

use crate::domain::{Product, UserInfo};
use crate::store::{RequestStatus, ResetFlag};

/// Flags raised by the edit/create/card forms after a successful submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormFlags {
    pub product_updated: bool,
    pub product_created: bool,
    pub card_created: bool,
}

/// State transitions applied by [`AppState::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ProductDetailsRequest,
    ProductDetailsSuccess(Product),
    ProductDetailsFail(String),
    DeleteProductRequest,
    DeleteProductSuccess,
    DeleteProductFail(String),
    UpdateProductSuccess,
    CreateProductSuccess,
    CardCreateSuccess,
    Reset(ResetFlag),
    UserLogin(UserInfo),
    UserLogout,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub product_details: RequestStatus<Product>,
    pub product_delete: RequestStatus<()>,
    pub user_info: Option<UserInfo>,
    pub form_flags: FormFlags,
}

impl AppState {
    pub fn with_user(user_info: Option<UserInfo>) -> Self {
        Self {
            user_info,
            ..Self::default()
        }
    }

    pub fn reduce(&mut self, action: Action) {
        debug!(action = ?action, "Reducing action");

        match action {
            Action::ProductDetailsRequest => self.product_details = RequestStatus::Loading,
            Action::ProductDetailsSuccess(product) => {
                self.product_details = RequestStatus::Succeeded(product)
            }
            Action::ProductDetailsFail(error) => {
                self.product_details = RequestStatus::Failed(error)
            }
            Action::DeleteProductRequest => self.product_delete = RequestStatus::Loading,
            Action::DeleteProductSuccess => self.product_delete = RequestStatus::Succeeded(()),
            Action::DeleteProductFail(error) => self.product_delete = RequestStatus::Failed(error),
            Action::UpdateProductSuccess => self.form_flags.product_updated = true,
            Action::CreateProductSuccess => self.form_flags.product_created = true,
            Action::CardCreateSuccess => self.form_flags.card_created = true,
            Action::Reset(flag) => self.reset(flag),
            Action::UserLogin(user) => self.user_info = Some(user),
            Action::UserLogout => self.user_info = None,
        }
    }

    fn reset(&mut self, flag: ResetFlag) {
        match flag {
            ResetFlag::UpdateProduct => self.form_flags.product_updated = false,
            ResetFlag::CreateProduct => self.form_flags.product_created = false,
            ResetFlag::CardCreate => self.form_flags.card_created = false,
            ResetFlag::DeleteProduct => self.product_delete = RequestStatus::Idle,
        }
    }
}
