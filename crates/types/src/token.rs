// Path: crates/types/src/token.rs
//! Capability descriptors for voting-weight token resources.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// A bitmask describing what a token resource exposes to the installer.
    ///
    /// This is what the defensive capability-introspection probe reports; it
    /// is distinct from the ERC20 balance probe, which is load-bearing.
    #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[serde(transparent)]
    pub struct TokenCapabilities: u32 {
        /// The resource exposes a mint-with-initial-balances initializer.
        const MINTABLE = 0b0001;
        /// The resource exposes voting-weight snapshotting.
        const VOTING_WEIGHT = 0b0010;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_bits_are_stable() {
        assert_eq!(TokenCapabilities::MINTABLE.bits(), 1);
        assert_eq!(TokenCapabilities::VOTING_WEIGHT.bits(), 2);
        let both = TokenCapabilities::MINTABLE | TokenCapabilities::VOTING_WEIGHT;
        assert!(both.contains(TokenCapabilities::VOTING_WEIGHT));
    }
}
