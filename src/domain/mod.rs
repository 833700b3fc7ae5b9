pub mod product;
pub mod session;

pub use product::{Product, ProductId, Size, Stock};
pub use session::UserInfo;
