//! Debounced suggestion search input
//!
//! Pure state lives in `state`; timers and browser hand-off live beside it.

pub mod debounce;
pub mod navigation;
pub mod state;

pub use debounce::{Debouncer, TaskSlot};
pub use state::{Lookup, SearchState};
