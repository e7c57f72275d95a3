// Path: crates/types/src/error/mod.rs
//! Core error types for the Ward setup SDK.

use alloy_primitives::Address;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors raised by the installation/uninstallation lifecycle.
///
/// Every failure is terminal for the call that raised it: there is no local
/// recovery or retry below the caller, and each variant names the offending
/// value to aid diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The parameter buffer cannot be decoded into the expected structure.
    #[error("malformed installation parameters: {0}")]
    MalformedParameters(String),
    /// The supplied token address has no contract code deployed at it.
    #[error("no contract code at token address {0}")]
    NotAContract(Address),
    /// The supplied token address failed the ERC20 balance probe.
    #[error("token at {0} does not answer the ERC20 balance probe")]
    NotErc20Compatible(Address),
    /// An uninstall payload referenced the wrong number of helper resources.
    #[error("uninstall payload must reference exactly 1 helper, got {0}")]
    WrongHelperCount(usize),
    /// A host-environment collaborator (factory, deployment primitive)
    /// reported a failure; the host rolls back the whole call.
    #[error("host environment failure: {0}")]
    Environment(String),
}

impl ErrorCode for SetupError {
    fn code(&self) -> &'static str {
        match self {
            Self::MalformedParameters(_) => "SETUP_MALFORMED_PARAMETERS",
            Self::NotAContract(_) => "SETUP_NOT_A_CONTRACT",
            Self::NotErc20Compatible(_) => "SETUP_NOT_ERC20_COMPATIBLE",
            Self::WrongHelperCount(_) => "SETUP_WRONG_HELPER_COUNT",
            Self::Environment(_) => "SETUP_ENVIRONMENT_FAILURE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_value() {
        let addr = Address::repeat_byte(0xAB);
        let err = SetupError::NotAContract(addr);
        assert!(err.to_string().contains(&addr.to_string()));
        assert_eq!(err.code(), "SETUP_NOT_A_CONTRACT");

        let err = SetupError::WrongHelperCount(3);
        assert!(err.to_string().contains('3'));
        assert_eq!(err.code(), "SETUP_WRONG_HELPER_COUNT");
    }
}
