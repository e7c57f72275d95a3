// Path: crates/types/src/settings.rs
//! Installation parameter structures.
//!
//! These are the decoded form of the opaque buffer handed to the installer.
//! They are constructed once per install call (by [`crate::abi`] or by
//! off-chain tooling preparing a buffer) and discarded after use; nothing in
//! this crate persists them.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// The base of the fixed-point veto ratio, in parts per million.
///
/// `min_veto_ratio == RATIO_BASE` means 100%.
pub const RATIO_BASE: u32 = 1_000_000;

/// Governance settings the installed module is initialized with.
///
/// No validation is performed here; range checks (if any) belong to the
/// module being installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingSettings {
    /// Minimum ratio of veto votes that defeats a proposal, over
    /// [`RATIO_BASE`].
    pub min_veto_ratio: u32,
    /// Minimum proposal duration in seconds.
    pub min_duration: u64,
    /// Minimum voting power required to open a proposal.
    pub min_proposer_voting_power: U256,
}

/// Describes where the module's voting-weight token comes from.
///
/// Absence of an external token is encoded as [`Address::ZERO`];
/// `name`/`symbol` are meaningful only in that case, when a fresh token is
/// minted under those labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSettings {
    /// An externally supplied token contract, or the zero address.
    pub addr: Address,
    /// Display name for a newly minted token.
    pub name: String,
    /// Display symbol for a newly minted token.
    pub symbol: String,
}

impl TokenSettings {
    /// Settings that reuse an already deployed token contract.
    pub fn existing(addr: Address) -> Self {
        Self {
            addr,
            name: String::new(),
            symbol: String::new(),
        }
    }

    /// Settings that mint a fresh token under the given labels.
    pub fn fresh(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            addr: Address::ZERO,
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// Whether an external token was supplied.
    pub fn is_existing(&self) -> bool {
        !self.addr.is_zero()
    }
}

/// Initial balances minted onto a freshly created voting-weight token.
///
/// Receivers are paired positionally with amounts; the two sequences are
/// always the same length. The fields are private and deserialization funnels
/// through [`MintSettings::new`], so the invariant cannot be broken after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "MintSettingsRaw")]
pub struct MintSettings {
    receivers: Vec<Address>,
    amounts: Vec<U256>,
}

#[derive(Deserialize)]
struct MintSettingsRaw {
    receivers: Vec<Address>,
    amounts: Vec<U256>,
}

impl TryFrom<MintSettingsRaw> for MintSettings {
    type Error = SetupError;

    fn try_from(raw: MintSettingsRaw) -> Result<Self, Self::Error> {
        Self::new(raw.receivers, raw.amounts)
    }
}

impl MintSettings {
    /// Builds mint settings, rejecting mismatched sequence lengths.
    pub fn new(receivers: Vec<Address>, amounts: Vec<U256>) -> Result<Self, SetupError> {
        if receivers.len() != amounts.len() {
            return Err(SetupError::MalformedParameters(format!(
                "mint receivers/amounts length mismatch: {} vs {}",
                receivers.len(),
                amounts.len()
            )));
        }
        Ok(Self { receivers, amounts })
    }

    /// Mint settings with no initial balances.
    pub fn none() -> Self {
        Self::default()
    }

    /// The receiver addresses, in mint order.
    pub fn receivers(&self) -> &[Address] {
        &self.receivers
    }

    /// The amounts, positionally paired with [`Self::receivers`].
    pub fn amounts(&self) -> &[U256] {
        &self.amounts
    }

    /// Number of mint entries.
    pub fn len(&self) -> usize {
        self.receivers.len()
    }

    /// Whether there are no mint entries.
    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
    }

    /// Iterates over `(receiver, amount)` pairs in mint order.
    pub fn pairs(&self) -> impl Iterator<Item = (Address, U256)> + '_ {
        self.receivers
            .iter()
            .copied()
            .zip(self.amounts.iter().copied())
    }
}

/// The full decoded installation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationParameters {
    /// Governance settings for the module instance.
    pub voting: VotingSettings,
    /// Where the voting-weight token comes from.
    pub token: TokenSettings,
    /// Initial balances for a freshly minted token.
    pub mint: MintSettings,
}
