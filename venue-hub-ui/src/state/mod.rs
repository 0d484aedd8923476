//! State Management
//!
//! Global UI state, browser storage and the navigation context.

pub mod global;
pub mod navigation;
pub mod storage;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use navigation::{provide_nav_context, use_nav_context};
pub use storage::LocalStore;
