// Path: crates/setup/src/lib.rs
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

//! # Ward Setup
//!
//! The installation/uninstallation lifecycle controller for the Ward veto
//! governance module. Given an opaque parameter buffer, it provisions the
//! module's voting-weight token (reused or freshly minted), deploys a module
//! instance, and computes the exact permission delta the hosting authority
//! must apply atomically.
//!
//! Everything here is a pure, deterministic function of (installed state,
//! parameter buffer); the host environment guarantees whole-call atomicity
//! and rolls back partial effects on failure.

/// The installation and uninstallation coordinators.
pub mod lifecycle;
/// Construction of the canonical permission delta.
pub mod permissions;
/// Resolution of the module's voting-weight token.
pub mod token;

pub use lifecycle::VetoModuleSetup;
