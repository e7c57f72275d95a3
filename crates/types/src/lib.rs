// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]

//! # Ward Setup Types
//!
//! This crate is the foundational library for the Ward setup SDK, containing
//! the installation parameter structures, the canonical parameter codec, the
//! permission data model, and the unified error enum.
//!
//! ## Architectural Role
//!
//! As the base crate, `ward-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. This structure prevents
//! circular dependencies and provides a single, canonical definition for
//! shared types like `InstallationParameters`, `PermissionGrant`, and
//! `SetupError`.

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::SetupError> = std::result::Result<T, E>;

/// The canonical head/tail binary codec for installation parameter buffers.
pub mod abi;
/// A unified set of all error types used across the SDK.
pub mod error;
/// The permission data model: grants, capability tags, prepared payloads.
pub mod permission;
/// Installation parameter structures (voting, token, and mint settings).
pub mod settings;
/// Capability descriptors for voting-weight token resources.
pub mod token;

pub use alloy_primitives::{Address, FixedBytes, U256};
