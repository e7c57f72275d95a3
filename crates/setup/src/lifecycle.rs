// Path: crates/setup/src/lifecycle.rs
//! The installation and uninstallation coordinators.

use alloy_primitives::Address;
use ward_api::authority::AuthorityContext;
use ward_api::factory::InstallEnvironment;
use ward_types::abi;
use ward_types::error::SetupError;
use ward_types::permission::{PermissionGrant, PreparedInstallation, UninstallPayload};

use crate::permissions;
use crate::token::resolve_token;

/// The lifecycle controller for one veto-module implementation.
///
/// The held implementation address is the only configuration this controller
/// carries; every installation clones it into a fresh module instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VetoModuleSetup {
    implementation: Address,
}

impl VetoModuleSetup {
    /// A controller that installs clones of `implementation`.
    pub fn new(implementation: Address) -> Self {
        Self { implementation }
    }

    /// The module implementation address, exposed for version tracking.
    pub fn implementation(&self) -> Address {
        self.implementation
    }

    /// Prepares an installation for `authority` from a raw parameter buffer.
    ///
    /// Decodes the buffer, resolves the voting-weight token, deploys a fresh
    /// module instance bound to the authority and the token, and computes
    /// the permission delta. Re-running with identical parameters deploys a
    /// distinct instance; nothing is cached. Any failure aborts the call
    /// with no partial state visible (the host rolls back).
    pub fn prepare_installation(
        &self,
        env: &mut dyn InstallEnvironment,
        authority: &dyn AuthorityContext,
        data: &[u8],
    ) -> Result<PreparedInstallation, SetupError> {
        let params = abi::decode_installation_parameters(data)?;
        let authority_addr = authority.address();

        let token = resolve_token(env, &params.token, &params.mint)?;
        let module = env.clone_module(self.implementation, authority_addr, token, &params.voting)?;
        let permissions = permissions::install_grants(module, authority_addr);

        log::info!(
            "prepared installation of module {module} for authority {authority_addr} \
             with token {token}"
        );
        Ok(PreparedInstallation {
            module,
            helpers: vec![token],
            permissions,
        })
    }

    /// Prepares an uninstallation for `authority`.
    ///
    /// Validates the helper list shape and returns the mirrored revoke list.
    /// Read-only: neither the module nor the token is destroyed here.
    pub fn prepare_uninstallation(
        &self,
        authority: &dyn AuthorityContext,
        payload: &UninstallPayload,
    ) -> Result<Vec<PermissionGrant>, SetupError> {
        if payload.current_helpers.len() != 1 {
            return Err(SetupError::WrongHelperCount(payload.current_helpers.len()));
        }
        log::info!(
            "prepared uninstallation of module {} for authority {}",
            payload.module,
            authority.address()
        );
        Ok(permissions::uninstall_revokes(
            payload.module,
            authority.address(),
        ))
    }
}
