// Path: crates/test_utils/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]
#![forbid(unsafe_code)]

//! # Ward Setup Test Utilities
//!
//! Deterministic in-memory stand-ins for the host environment: a mock chain
//! with a contract registry and a mock authority with grant/revoke
//! bookkeeping. No randomness anywhere; repeated runs provision identical
//! addresses.

pub mod fixtures;
pub mod mock_authority;
pub mod mock_chain;

pub use mock_authority::MockAuthority;
pub use mock_chain::MockChain;
