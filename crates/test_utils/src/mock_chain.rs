// Path: crates/test_utils/src/mock_chain.rs
//! An in-memory chain with a contract registry and factory capabilities.

use std::collections::BTreeMap;

use alloy_primitives::{Address, U256};
use ward_api::chain::ChainAccess;
use ward_api::factory::{ModuleFactory, TokenFactory};
use ward_types::error::SetupError;
use ward_types::settings::VotingSettings;
use ward_types::token::TokenCapabilities;

/// A deployed mock token.
#[derive(Debug, Clone, Default)]
pub struct MockToken {
    /// Display name.
    pub name: String,
    /// Display symbol.
    pub symbol: String,
    /// What the capability-introspection probe reports.
    pub capabilities: TokenCapabilities,
    /// Balances by holder.
    pub balances: BTreeMap<Address, U256>,
}

/// A deployed mock module instance, recording its construction bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockModule {
    /// The implementation this instance was cloned from.
    pub implementation: Address,
    /// The authority the instance is bound to.
    pub authority: Address,
    /// The voting-weight token the instance reads.
    pub token: Address,
    /// The governance settings the instance was initialized with.
    pub settings: VotingSettings,
}

#[derive(Debug, Clone)]
enum MockContract {
    Token(MockToken),
    Module(MockModule),
    /// Has code but exposes no ERC20 surface.
    Inert,
}

/// A deterministic in-memory chain.
///
/// Every deployment yields a fresh address derived from an instance counter;
/// addresses never repeat within one chain and never depend on anything but
/// deployment order.
#[derive(Debug, Default)]
pub struct MockChain {
    contracts: BTreeMap<Address, MockContract>,
    next_instance: u64,
}

impl MockChain {
    /// An empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_address(&mut self) -> Address {
        self.next_instance += 1;
        let counter = self.next_instance.to_be_bytes();
        let mut bytes = [0u8; 20];
        for (dst, src) in bytes.iter_mut().rev().zip(counter.iter().rev()) {
            *dst = *src;
        }
        if let Some(first) = bytes.first_mut() {
            *first = 0xC0;
        }
        Address::from(bytes)
    }

    /// Deploys a contract with code but no ERC20 surface.
    pub fn register_inert_contract(&mut self) -> Address {
        let addr = self.fresh_address();
        self.contracts.insert(addr, MockContract::Inert);
        addr
    }

    /// Deploys a pre-existing token with the given capability set.
    pub fn register_token(
        &mut self,
        name: &str,
        symbol: &str,
        capabilities: TokenCapabilities,
    ) -> Address {
        let addr = self.fresh_address();
        self.contracts.insert(
            addr,
            MockContract::Token(MockToken {
                name: name.to_string(),
                symbol: symbol.to_string(),
                capabilities,
                balances: BTreeMap::new(),
            }),
        );
        addr
    }

    /// Overwrites a holder's balance on a registered token.
    pub fn set_balance(&mut self, token: Address, holder: Address, amount: U256) {
        if let Some(MockContract::Token(t)) = self.contracts.get_mut(&token) {
            t.balances.insert(holder, amount);
        }
    }

    /// Number of deployed contracts of any kind.
    pub fn contract_count(&self) -> usize {
        self.contracts.len()
    }

    /// The module instance at `addr`, if one was deployed there.
    pub fn module(&self, addr: Address) -> Option<&MockModule> {
        match self.contracts.get(&addr) {
            Some(MockContract::Module(m)) => Some(m),
            _ => None,
        }
    }

    /// The token at `addr`, if one was deployed there.
    pub fn token(&self, addr: Address) -> Option<&MockToken> {
        match self.contracts.get(&addr) {
            Some(MockContract::Token(t)) => Some(t),
            _ => None,
        }
    }
}

impl ChainAccess for MockChain {
    fn is_contract(&self, addr: Address) -> bool {
        self.contracts.contains_key(&addr)
    }

    fn balance_of(&self, token: Address, holder: Address) -> Option<U256> {
        match self.contracts.get(&token) {
            Some(MockContract::Token(t)) => {
                Some(t.balances.get(&holder).copied().unwrap_or_default())
            }
            _ => None,
        }
    }

    fn token_name(&self, token: Address) -> Option<String> {
        self.token(token).map(|t| t.name.clone())
    }

    fn token_symbol(&self, token: Address) -> Option<String> {
        self.token(token).map(|t| t.symbol.clone())
    }

    fn token_capabilities(&self, token: Address) -> TokenCapabilities {
        self.token(token)
            .map(|t| t.capabilities)
            .unwrap_or_default()
    }
}

impl TokenFactory for MockChain {
    fn create_token(&mut self, name: &str, symbol: &str) -> Result<Address, SetupError> {
        Ok(self.register_token(
            name,
            symbol,
            TokenCapabilities::MINTABLE | TokenCapabilities::VOTING_WEIGHT,
        ))
    }

    fn mint(&mut self, token: Address, to: Address, amount: U256) -> Result<(), SetupError> {
        match self.contracts.get_mut(&token) {
            Some(MockContract::Token(t)) => {
                let balance = t.balances.entry(to).or_default();
                *balance = balance.checked_add(amount).ok_or_else(|| {
                    SetupError::Environment(format!("balance overflow minting to {to}"))
                })?;
                Ok(())
            }
            _ => Err(SetupError::Environment(format!(
                "mint target {token} is not a token"
            ))),
        }
    }
}

impl ModuleFactory for MockChain {
    fn clone_module(
        &mut self,
        implementation: Address,
        authority: Address,
        token: Address,
        settings: &VotingSettings,
    ) -> Result<Address, SetupError> {
        let addr = self.fresh_address();
        self.contracts.insert(
            addr,
            MockContract::Module(MockModule {
                implementation,
                authority,
                token,
                settings: *settings,
            }),
        );
        Ok(addr)
    }
}
