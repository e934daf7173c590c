//! Headless workspace core (state / action / effect).
//!
//! The host feeds actions into [`Store::dispatch`] and re-renders from
//! read-only state snapshots whenever `state_changed` is reported; the
//! kernel never performs I/O of its own.

pub mod action;
pub mod effect;
pub mod error;
pub mod navigate;
pub mod search;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use error::ErrorKind;
pub use navigate::{CursorTarget, Navigator};
pub use search::{FileMatchGroup, SearchState};
pub use state::AppState;
pub use store::{DispatchResult, Store};
