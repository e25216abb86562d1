#![doc = include_str!("../README.md")]

/// The single-method seam through which flows report actions.
pub mod dispatch;

/// Reducer trait describing how actions transform state.
pub mod reducer;

/// Observable store applying a reducer to dispatched actions.
pub mod store;

pub use dispatch::Dispatch;
pub use reducer::Reducer;
pub use store::Store;
