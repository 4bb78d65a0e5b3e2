use thiserror::Error;
use crate::Space;

/// Errors of the functional algebra, the operators and the solvers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionalError
{
    /// Operand spaces differ where the same space is required.
    #[error("domain mismatch: expected {expected}, found {found}")]
    DomainMismatch {
        expected: Space,
        found: Space,
    },

    /// Buffer length does not fit the space.
    #[error("length mismatch: {len} values do not fit {space}")]
    LengthMismatch {
        len: usize,
        space: Space,
    },

    /// Scaling factor or step size outside of the admissible range.
    #[error("invalid scaling {scaling:e}: {reason}")]
    InvalidScaling {
        scaling: f64,
        reason: &'static str,
    },

    /// No closed form or algorithm is known for the requested quantity.
    #[error("not implemented: {0}")]
    Unsupported(&'static str),

    /// The functional is not differentiable at the requested point.
    #[error("not differentiable: {0}")]
    NotDifferentiable(&'static str),

    /// An operand of the wrong kind, e.g. a complex scalar.
    #[error("type mismatch: {0}")]
    TypeMismatch(&'static str),
}

impl FunctionalError
{
    pub(crate) fn invalid_scaling<F: num_traits::Float>(scaling: F, reason: &'static str) -> Self
    {
        FunctionalError::InvalidScaling {
            scaling: scaling.to_f64().unwrap_or(f64::NAN),
            reason,
        }
    }
}
