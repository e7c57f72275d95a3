// Path: crates/types/src/permission.rs
//! The permission data model.
//!
//! A [`PermissionGrant`] is a capability-tag-scoped authorization tuple the
//! hosting authority applies to allow (or disallow) an actor from invoking a
//! guarded action on a target. The installer only *computes* these tuples;
//! applying them is the authority's prerogative.

use alloy_primitives::{Address, FixedBytes};
use serde::{Deserialize, Serialize};

/// An opaque 32-byte capability tag identifying a guarded action.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct PermissionId(pub FixedBytes<32>);

impl PermissionId {
    /// Builds a permission id from a short ASCII tag, zero-padded to 32
    /// bytes. Tags longer than 32 bytes are a compile-time error.
    pub const fn from_tag(tag: &[u8]) -> Self {
        assert!(tag.len() <= 32, "permission tag exceeds 32 bytes");
        let mut id = [0u8; 32];
        let mut i = 0;
        while i < tag.len() {
            id[i] = tag[i];
            i += 1;
        }
        Self(FixedBytes(id))
    }
}

impl core::fmt::Display for PermissionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Render printable ASCII tags as text, anything else as hex.
        let bytes = self.0.as_slice();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        match bytes.get(..end).map(core::str::from_utf8) {
            Some(Ok(tag)) if !tag.is_empty() && tag.bytes().all(|b| b.is_ascii_graphic()) => {
                f.write_str(tag)
            }
            _ => write!(f, "{}", self.0),
        }
    }
}

/// Allows the authority to update the installed module's governance settings.
pub const UPDATE_VOTING_SETTINGS_PERMISSION_ID: PermissionId =
    PermissionId::from_tag(b"UPDATE_VOTING_SETTINGS");

/// Allows the authority to upgrade the installed module's implementation.
pub const UPGRADE_MODULE_PERMISSION_ID: PermissionId = PermissionId::from_tag(b"UPGRADE_MODULE");

/// Allows the module to cause the authority to execute actions.
pub const EXECUTE_PERMISSION_ID: PermissionId = PermissionId::from_tag(b"EXECUTE");

/// Whether a permission change adds or removes an authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionOperation {
    /// Add the authorization.
    Grant,
    /// Remove the authorization.
    Revoke,
}

impl PermissionOperation {
    /// The inverse operation.
    pub fn flipped(self) -> Self {
        match self {
            Self::Grant => Self::Revoke,
            Self::Revoke => Self::Grant,
        }
    }
}

/// One entry of a permission delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrant {
    /// Grant or revoke.
    pub operation: PermissionOperation,
    /// The resource the permission guards ("where").
    pub target: Address,
    /// The actor being authorized ("who").
    pub who: Address,
    /// An optional guard contract; `None` means unconditional.
    pub condition: Option<Address>,
    /// The capability tag being granted or revoked.
    pub permission_id: PermissionId,
}

impl PermissionGrant {
    /// An unconditional permission change.
    pub fn unconditional(
        operation: PermissionOperation,
        target: Address,
        who: Address,
        permission_id: PermissionId,
    ) -> Self {
        Self {
            operation,
            target,
            who,
            condition: None,
            permission_id,
        }
    }

    /// The same entry with the operation inverted and every other field
    /// untouched.
    pub fn flipped(&self) -> Self {
        Self {
            operation: self.operation.flipped(),
            ..self.clone()
        }
    }
}

/// The result of preparing an installation, returned to the hosting
/// authority. The authority alone decides whether to apply the permission
/// delta; this core never mutates authority state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedInstallation {
    /// The freshly deployed module instance.
    pub module: Address,
    /// Provisioned helper resources, in provisioning order.
    pub helpers: Vec<Address>,
    /// The permission delta the authority must apply atomically.
    pub permissions: Vec<PermissionGrant>,
}

/// Caller-supplied input to uninstallation. Read-only for this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UninstallPayload {
    /// The module instance being uninstalled.
    pub module: Address,
    /// The helper list the prior installation returned.
    pub current_helpers: Vec<Address>,
    /// Opaque extra data; unused by this module's uninstall path.
    pub data: Vec<u8>,
}
