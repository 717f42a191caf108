//! Core cinelog types.
//!
//! These types enforce invariants at construction time, ensuring invalid
//! states are unrepresentable.

mod api_url;
mod entry_id;
mod user;

pub use api_url::ApiUrl;
pub use entry_id::EntryId;
pub use user::User;
