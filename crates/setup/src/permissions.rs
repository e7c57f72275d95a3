// Path: crates/setup/src/permissions.rs
//! Construction of the canonical permission delta.
//!
//! The ordering and contents of these lists are part of the external
//! contract: auditors and off-chain tooling diff permission sets, so the
//! order below is fixed and the uninstall list is always the install list
//! with every operation flipped.

use alloy_primitives::Address;
use ward_types::permission::{
    PermissionGrant, PermissionOperation, EXECUTE_PERMISSION_ID,
    UPDATE_VOTING_SETTINGS_PERMISSION_ID, UPGRADE_MODULE_PERMISSION_ID,
};

/// The grants an installation asks the authority to apply, in canonical
/// order:
///
/// 1. The authority may update the module's governance settings.
/// 2. The authority may upgrade the module implementation.
/// 3. The module may cause the authority to execute actions.
///
/// Every grant is unconditional. Exactly three entries are emitted on every
/// path, whether the token was reused or freshly minted.
pub fn install_grants(module: Address, authority: Address) -> Vec<PermissionGrant> {
    vec![
        PermissionGrant::unconditional(
            PermissionOperation::Grant,
            module,
            authority,
            UPDATE_VOTING_SETTINGS_PERMISSION_ID,
        ),
        PermissionGrant::unconditional(
            PermissionOperation::Grant,
            module,
            authority,
            UPGRADE_MODULE_PERMISSION_ID,
        ),
        PermissionGrant::unconditional(
            PermissionOperation::Grant,
            authority,
            module,
            EXECUTE_PERMISSION_ID,
        ),
    ]
}

/// The revocations an uninstallation asks the authority to apply: the
/// install list with each operation flipped and every other field identical,
/// in the same order.
pub fn uninstall_revokes(module: Address, authority: Address) -> Vec<PermissionGrant> {
    install_grants(module, authority)
        .iter()
        .map(PermissionGrant::flipped)
        .collect()
}
