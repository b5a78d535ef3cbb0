pub mod action;
pub mod models;
pub mod selection;

pub use action::{SearchAction, SearchState};
pub use models::{DashboardSection, ItemKind, SearchItem, SectionKind};
pub use selection::{checked_uids, DeletionRequest, SelectionCounts};
