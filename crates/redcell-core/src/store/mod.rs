//! The application store: state, getters, mutations and actions.
//!
//! Getters and mutations are pure functions over the state; actions on
//! [`Store`] are the only layer that talks to the backend, the token
//! store or the navigator.

pub mod actions;
pub mod getters;
pub mod mutations;
mod state;

#[cfg(test)]
mod tests;

pub use actions::Store;
pub use state::{AdminState, AppState, MainState, StateHandle};
