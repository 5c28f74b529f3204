//! State Management
//!
//! Toast state and the browser-backed session.

pub mod global;
pub mod session;

pub use global::{provide_global_state, GlobalState};
pub use session::{provide_session, LocalStorage, SessionContext};
