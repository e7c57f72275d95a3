// Path: crates/api/src/authority.rs
//! The `AuthorityContext` capability handed in by the hosting authority.

use alloy_primitives::Address;
use ward_types::error::SetupError;
use ward_types::permission::PermissionGrant;

/// The hosting authority, abstracted away from any concrete framework type.
///
/// The installer only ever reads the authority's address; applying a
/// permission delta is the authority runtime's own move, made after it has
/// inspected the prepared installation. Executing actions on the authority's
/// behalf is a capability of the *installed module*, not of this SDK, and is
/// deliberately absent here.
pub trait AuthorityContext {
    /// The authority's address.
    fn address(&self) -> Address;

    /// Applies a permission delta atomically, in list order.
    ///
    /// Called by the authority runtime (and test harnesses), never by the
    /// installer itself.
    fn apply_permission_changes(&mut self, changes: &[PermissionGrant]) -> Result<(), SetupError>;
}
