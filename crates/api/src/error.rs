// Path: crates/api/src/error.rs
//! Re-exports all core error types from the central `ward-types` crate.

pub use ward_types::error::{ErrorCode, SetupError};
