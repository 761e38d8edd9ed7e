//! Error kinds shared by every pattern in the catalog.

use thiserror::Error;

/// Everything that can go wrong while running a pattern scenario.
///
/// Only `UnsupportedOperation` is meant to be inspected and recovered from;
/// every other variant ends the scenario that produced it.
#[derive(Error, Debug)]
pub enum PatternError {
    /// An abstract role's operation was reached without a concrete variant behind it.
    #[error("{role}::{operation} must be overridden by a concrete variant")]
    UnimplementedOperation {
        role: &'static str,
        operation: &'static str,
    },

    /// The abstract role itself was asked to construct an instance.
    #[error("cannot instantiate abstract role {role}")]
    AbstractInstantiation { role: &'static str },

    /// A domain rule of the scenario was violated (division by zero, missing collaborator...).
    #[error("{0}")]
    InvalidOperation(String),

    /// A structural mutation was requested on a node that cannot hold children.
    #[error("cannot {operation} on leaf '{node}'")]
    UnsupportedOperation {
        operation: &'static str,
        node: String,
    },

    #[error("failed to write transcript: {0}")]
    Io(#[from] std::io::Error),
}

impl PatternError {
    pub fn unimplemented(role: &'static str, operation: &'static str) -> Self {
        Self::UnimplementedOperation { role, operation }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    /// True for the reported, non-fatal conditions a scenario may continue past.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_role_and_operation() {
        let err = PatternError::unimplemented("Strategy", "execute");
        assert_eq!(
            err.to_string(),
            "Strategy::execute must be overridden by a concrete variant"
        );

        let err = PatternError::AbstractInstantiation {
            role: "AbstractProductA",
        };
        assert_eq!(err.to_string(), "cannot instantiate abstract role AbstractProductA");
    }

    #[test]
    fn test_only_unsupported_is_recoverable() {
        let unsupported = PatternError::UnsupportedOperation {
            operation: "add",
            node: "leaf1".to_string(),
        };
        assert!(unsupported.is_recoverable());
        assert_eq!(unsupported.to_string(), "cannot add on leaf 'leaf1'");

        assert!(!PatternError::invalid("Division by zero!").is_recoverable());
        assert!(!PatternError::unimplemented("Command", "execute").is_recoverable());
    }
}
