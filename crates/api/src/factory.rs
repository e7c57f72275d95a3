// Path: crates/api/src/factory.rs
//! Factory capabilities for provisioning tokens and module instances.
//!
//! Both factories hand back a fresh, uniquely-addressed instance on every
//! call. Callers must not assume any caching or deduplication; installing
//! twice with identical inputs yields two distinct instances.

use alloy_primitives::{Address, U256};
use ward_types::error::SetupError;
use ward_types::settings::VotingSettings;

use crate::chain::ChainAccess;

/// Creates and initializes mintable voting-weight tokens.
pub trait TokenFactory {
    /// Deploys a fresh mintable voting-weight token under the given labels.
    fn create_token(&mut self, name: &str, symbol: &str) -> Result<Address, SetupError>;

    /// Mints `amount` onto `to`'s balance of `token`. Repeated mints to the
    /// same receiver accumulate.
    fn mint(&mut self, token: Address, to: Address, amount: U256) -> Result<(), SetupError>;
}

/// Deploys module instances from a shared implementation.
pub trait ModuleFactory {
    /// Clones `implementation` into a fresh module instance bound to
    /// `authority` and `token`, initialized with `settings`.
    fn clone_module(
        &mut self,
        implementation: Address,
        authority: Address,
        token: Address,
        settings: &VotingSettings,
    ) -> Result<Address, SetupError>;
}

/// The full host environment an installation runs against.
pub trait InstallEnvironment: ChainAccess + TokenFactory + ModuleFactory {}

impl<T: ChainAccess + TokenFactory + ModuleFactory> InstallEnvironment for T {}
