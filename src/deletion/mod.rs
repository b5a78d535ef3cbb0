pub mod modal;
pub mod ports;
pub mod prompt;

pub use modal::{ConfirmDeleteModal, DEFAULT_LISTING_PATH};
pub use ports::{ActionDispatch, DeletionService, Navigator};
pub use prompt::{compose_prompt, DeletionPrompt};
