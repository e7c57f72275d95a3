// Path: crates/setup/src/token.rs
//! Resolution of the module's voting-weight token.

use alloy_primitives::Address;
use ward_api::factory::InstallEnvironment;
use ward_types::error::SetupError;
use ward_types::settings::{MintSettings, TokenSettings};
use ward_types::token::TokenCapabilities;

/// Produces exactly one voting-weight token for the module being installed.
///
/// Priority order:
/// 1. An externally supplied token is vetted (code check, then the ERC20
///    balance probe) and used as-is. No wrapping step is performed even when
///    the token does not expose voting-weight snapshotting; the caller owns
///    compatibility with the module's voting-weight interface. The resolver
///    logs a warning when the defensive capability probe reports the gap.
/// 2. Otherwise a fresh mintable token is created under
///    `settings.name`/`settings.symbol` and the initial balances from `mint`
///    are applied positionally. Duplicate receivers accumulate; an empty
///    mint list is valid.
///
/// Exactly one token is created or referenced per call. The reuse path is
/// read-only; the mint path mutates only the token it just created.
pub fn resolve_token(
    env: &mut dyn InstallEnvironment,
    settings: &TokenSettings,
    mint: &MintSettings,
) -> Result<Address, SetupError> {
    if settings.is_existing() {
        let addr = settings.addr;
        if !env.is_contract(addr) {
            return Err(SetupError::NotAContract(addr));
        }
        if env.balance_of(addr, Address::ZERO).is_none() {
            return Err(SetupError::NotErc20Compatible(addr));
        }
        if !env
            .token_capabilities(addr)
            .contains(TokenCapabilities::VOTING_WEIGHT)
        {
            log::warn!(
                "reusing token {addr} without voting-weight snapshotting; \
                 the caller owns compatibility with the module"
            );
        }
        log::debug!("reusing existing voting-weight token {addr}");
        return Ok(addr);
    }

    let token = env.create_token(&settings.name, &settings.symbol)?;
    for (receiver, amount) in mint.pairs() {
        env.mint(token, receiver, amount)?;
    }
    log::info!(
        "minted new voting-weight token {token} ({}, {} initial balances)",
        settings.symbol,
        mint.len()
    );
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use ward_api::chain::ChainAccess;
    use ward_test_utils::mock_chain::MockChain;

    #[test]
    fn reuse_path_is_read_only() {
        let mut chain = MockChain::new();
        let existing = chain.register_token("Existing", "EXT", TokenCapabilities::VOTING_WEIGHT);
        let before = chain.contract_count();

        let resolved = resolve_token(
            &mut chain,
            &TokenSettings::existing(existing),
            &MintSettings::none(),
        )
        .unwrap();

        assert_eq!(resolved, existing);
        assert_eq!(chain.contract_count(), before);
    }

    #[test]
    fn mint_path_creates_one_token() {
        let mut chain = MockChain::new();
        let before = chain.contract_count();

        let resolved = resolve_token(
            &mut chain,
            &TokenSettings::fresh("Fresh", "FRS"),
            &MintSettings::new(vec![Address::repeat_byte(1)], vec![U256::from(5u64)]).unwrap(),
        )
        .unwrap();

        assert_eq!(chain.contract_count(), before + 1);
        assert_eq!(
            chain.balance_of(resolved, Address::repeat_byte(1)),
            Some(U256::from(5u64))
        );
    }

    #[test]
    fn rejects_code_free_addresses_before_probing() {
        let mut chain = MockChain::new();
        let nobody = Address::repeat_byte(0xEE);
        let err = resolve_token(
            &mut chain,
            &TokenSettings::existing(nobody),
            &MintSettings::none(),
        )
        .unwrap_err();
        assert_eq!(err, SetupError::NotAContract(nobody));
        assert_eq!(chain.contract_count(), 0);
    }
}
