//! The abstract-role convention every pattern builds on.
//!
//! A role is a trait with required methods, so a concrete variant cannot
//! compile without the full operation set. Two pieces remain for the cases the
//! compiler cannot rule out:
//!
//! - [`Placeholder`] stands in for "the role itself": each role module
//!   implements its trait for it, and every operation fails with
//!   [`PatternError::UnimplementedOperation`]. Useful as a deliberately
//!   partial test double.
//! - [`Target`] names what a constructor should build. Asking an abstract-only
//!   role for [`Target::Role`] fails with
//!   [`PatternError::AbstractInstantiation`] before any side effect happens.

use crate::error::{PatternError, Result};

/// A role-level stand-in with no concrete behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placeholder;

impl Placeholder {
    /// Shorthand used by the role impls: always the `UnimplementedOperation` error.
    pub fn fail<T>(role: &'static str, operation: &'static str) -> Result<T> {
        tracing::debug!(role, operation, "placeholder operation invoked");
        Err(PatternError::unimplemented(role, operation))
    }
}

/// What a constructor is asked to build: the abstract role, or one concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<V> {
    Role,
    Variant(V),
}

impl<V> Target<V> {
    /// Resolve to the concrete variant, rejecting the abstract role.
    pub fn concrete(self, role: &'static str) -> Result<V> {
        match self {
            Target::Role => Err(PatternError::AbstractInstantiation { role }),
            Target::Variant(variant) => Ok(variant),
        }
    }
}

impl<V> From<V> for Target<V> {
    fn from(variant: V) -> Self {
        Target::Variant(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_target_is_rejected() {
        let target: Target<u8> = Target::Role;
        let err = target.concrete("AbstractWidget").unwrap_err();
        assert!(matches!(
            err,
            PatternError::AbstractInstantiation {
                role: "AbstractWidget"
            }
        ));
    }

    #[test]
    fn test_variant_target_resolves() {
        let target: Target<u8> = 7.into();
        assert_eq!(target.concrete("AbstractWidget").unwrap(), 7);
    }

    #[test]
    fn test_placeholder_fail_names_operation() {
        let err = Placeholder::fail::<()>("Device", "turn_on").unwrap_err();
        assert!(matches!(
            err,
            PatternError::UnimplementedOperation {
                role: "Device",
                operation: "turn_on"
            }
        ));
    }
}
