//! The incremental list controller and its state.

mod controller;
mod state;

pub use controller::{ListController, DEFAULT_DEBOUNCE, DEFAULT_PAGE_SIZE};
pub use state::ListState;
