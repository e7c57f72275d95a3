// Path: crates/api/src/lib.rs

//! # Ward Setup API Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
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
#![forbid(unsafe_code)]
#![deny(missing_docs)]
//! # Ward Setup API
//!
//! Core traits for the Ward setup SDK. This crate defines the stable contract
//! between the installer and its host environment: the chain it probes, the
//! factories it provisions through, and the authority that owns the resulting
//! permission delta. The installer itself never mutates authority state; it
//! returns a permission delta for the authority to apply.

/// The `AuthorityContext` capability handed in by the hosting authority.
pub mod authority;
/// Read-only probes against deployed contracts.
pub mod chain;
/// Re-exports all core error types from the central `ward-types` crate.
pub mod error;
/// Factory capabilities for provisioning tokens and module instances.
pub mod factory;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::authority::AuthorityContext;
    pub use crate::chain::ChainAccess;
    pub use crate::error::{ErrorCode, SetupError};
    pub use crate::factory::{InstallEnvironment, ModuleFactory, TokenFactory};
}
