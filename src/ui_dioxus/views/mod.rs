pub mod product_details;
pub mod product_details_model;

pub use product_details::{ProductDetailsBody, ProductDetailsView};
pub use product_details_model::{PageView, ProductDetailsController};
