//! Nullable infrastructure substitutes for testing.

pub mod store;

pub use store::NullStateStore;
