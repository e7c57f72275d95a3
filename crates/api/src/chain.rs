// Path: crates/api/src/chain.rs
//! Read-only probes against deployed contracts.

use alloy_primitives::{Address, U256};
use ward_types::token::TokenCapabilities;

/// A read-only view of the chain the installer runs against.
///
/// The installer uses this to vet an externally supplied token before reusing
/// it: first a code check, then the ERC20-shaped balance probe. Neither call
/// mutates anything; implementations must be safe to call repeatedly within
/// one install.
pub trait ChainAccess {
    /// Whether executable code is deployed at `addr`.
    fn is_contract(&self, addr: Address) -> bool;

    /// Performs a `balanceOf(holder)` call against `token`.
    ///
    /// Returns `None` when the contract does not answer the query with a
    /// 32-byte value, which is the ERC20-compatibility probe failing.
    fn balance_of(&self, token: Address, holder: Address) -> Option<U256>;

    /// The token's display name, when it exposes one.
    fn token_name(&self, token: Address) -> Option<String>;

    /// The token's display symbol, when it exposes one.
    fn token_symbol(&self, token: Address) -> Option<String>;

    /// Capability introspection for `token`.
    ///
    /// Used defensively: the install control flow never branches on this,
    /// but the resolver surfaces a warning when a reused token lacks
    /// [`TokenCapabilities::VOTING_WEIGHT`].
    fn token_capabilities(&self, token: Address) -> TokenCapabilities;
}
