// Path: crates/test_utils/src/mock_authority.rs
//! A mock authority with grant/revoke bookkeeping.

use std::collections::BTreeSet;

use alloy_primitives::Address;
use ward_api::authority::AuthorityContext;
use ward_types::error::SetupError;
use ward_types::permission::{PermissionGrant, PermissionId, PermissionOperation};

/// Records applied permission changes as a set of `(target, who, id)`
/// tuples. Revoking a permission that was never granted is an error, which
/// makes mirror-shaped deltas easy to assert on.
#[derive(Debug, Clone)]
pub struct MockAuthority {
    address: Address,
    granted: BTreeSet<(Address, Address, PermissionId)>,
}

impl MockAuthority {
    /// An authority at `address` with no permissions applied.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            granted: BTreeSet::new(),
        }
    }

    /// Number of currently granted permissions.
    pub fn permission_count(&self) -> usize {
        self.granted.len()
    }

    /// Whether `who` holds `id` on `target`.
    pub fn is_granted(&self, target: Address, who: Address, id: PermissionId) -> bool {
        self.granted.contains(&(target, who, id))
    }
}

impl AuthorityContext for MockAuthority {
    fn address(&self) -> Address {
        self.address
    }

    fn apply_permission_changes(&mut self, changes: &[PermissionGrant]) -> Result<(), SetupError> {
        for change in changes {
            let key = (change.target, change.who, change.permission_id);
            match change.operation {
                PermissionOperation::Grant => {
                    self.granted.insert(key);
                }
                PermissionOperation::Revoke => {
                    if !self.granted.remove(&key) {
                        return Err(SetupError::Environment(format!(
                            "revoking permission {} that was never granted",
                            change.permission_id
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
