//! Shared application state and the capabilities pages use to reach it.
//!
//! Pages never touch the store directly: they read through [`StoreReader`]
//! and write through [`Dispatcher`], so page logic can be driven by test
//! doubles.

pub mod signal_store;
pub mod state;

pub use signal_store::Store;
pub use state::{Action, AppState, FormFlags};

use crate::domain::{Product, ProductId, UserInfo};

/// Status of one remote request as seen by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestStatus<T> {
    Idle,
    Loading,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for RequestStatus<T> {
    fn default() -> Self {
        RequestStatus::Idle
    }
}

impl<T> RequestStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, RequestStatus::Succeeded(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestStatus::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestStatus::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// One-shot flags cleared by pages once their outcome has been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetFlag {
    UpdateProduct,
    CreateProduct,
    CardCreate,
    DeleteProduct,
}

/// What a page asks the store to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchProduct(ProductId),
    DeleteProduct(ProductId),
    Reset(ResetFlag),
}

impl Command {
    /// The state change a command makes before any async work starts, so the
    /// next frame already reflects it.
    pub fn immediate_action(&self) -> Action {
        match self {
            Command::FetchProduct(_) => Action::ProductDetailsRequest,
            Command::DeleteProduct(_) => Action::DeleteProductRequest,
            Command::Reset(flag) => Action::Reset(*flag),
        }
    }
}

/// Read-only selectors over the shared state.
pub trait StoreReader {
    fn product_details(&self) -> RequestStatus<Product>;

    fn user_info(&self) -> Option<UserInfo>;

    fn product_delete(&self) -> RequestStatus<()>;
}

pub trait Dispatcher {
    fn dispatch(&self, command: Command);
}
