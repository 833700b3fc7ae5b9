pub mod confirmation_dialog;
pub mod loader;
pub mod message;

pub use confirmation_dialog::ConfirmationDialog;
pub use loader::Loader;
pub use message::{Message, MessageVariant};
