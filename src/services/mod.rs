pub mod error_handling;
pub mod product_actions;
mod product_api;

pub use error_handling::StorefrontError;
pub use product_api::{HttpProductApi, ProductApi};
