// Path: crates/test_utils/src/fixtures.rs
//! Shared fixtures for lifecycle tests.

use alloy_primitives::{Address, U256};
use ward_types::settings::{InstallationParameters, MintSettings, TokenSettings, VotingSettings};

/// A short address filled with `byte`.
pub fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

/// The voting settings used across fixtures: 10% veto ratio, 5-day minimum
/// duration, no proposer threshold.
pub fn default_voting_settings() -> VotingSettings {
    VotingSettings {
        min_veto_ratio: 100_000,
        min_duration: 432_000,
        min_proposer_voting_power: U256::ZERO,
    }
}

/// Parameters that mint a fresh token with the given initial balances.
pub fn fresh_token_parameters(entries: &[(Address, u64)]) -> InstallationParameters {
    let receivers = entries.iter().map(|(who, _)| *who).collect();
    let amounts = entries.iter().map(|(_, amount)| U256::from(*amount)).collect();
    InstallationParameters {
        voting: default_voting_settings(),
        token: TokenSettings::fresh("Ward Voting Token", "WVT"),
        mint: MintSettings::new(receivers, amounts)
            .unwrap_or_default(),
    }
}

/// Parameters that reuse an already deployed token.
pub fn reuse_token_parameters(token: Address) -> InstallationParameters {
    InstallationParameters {
        voting: default_voting_settings(),
        token: TokenSettings::existing(token),
        mint: MintSettings::none(),
    }
}
