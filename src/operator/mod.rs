//! Operators between spaces

use std::rc::Rc;
use crate::{Element, FunctionalError, LinAlg, Space};

/// Operator trait
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// A mapping \\(A: X \to Y\\) from [`Operator::domain`] \\(X\\) to [`Operator::range`] \\(Y\\),
/// not necessarily linear.
pub trait Operator<L: LinAlg>
{
    /// Space \\(X\\) of the arguments.
    fn domain(&self) -> &Space;

    /// Space \\(Y\\) of the results.
    fn range(&self) -> &Space;

    /// Calculate \\(A x\\).
    ///
    /// Returns an element of \\(Y\\),
    /// or [`FunctionalError::DomainMismatch`] if `x` is not in \\(X\\).
    fn apply(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>;

    /// Whether \\(A\\) is linear.
    fn is_linear(&self) -> bool
    {
        false
    }

    /// Adjoint operator \\(A^*: Y \to X\\) of a linear operator.
    fn adjoint(&self) -> Result<OperatorRef<L>, FunctionalError>
    {
        Err(FunctionalError::Unsupported("adjoint"))
    }

    /// Linearization of \\(A\\) at `x`.
    ///
    /// Linear operators return themselves.
    fn derivative(&self, x: &Element<L>) -> Result<OperatorRef<L>, FunctionalError>
    {
        let _ = x;
        Err(FunctionalError::Unsupported("operator derivative"))
    }
}

/// Shared reference to an [`Operator`].
pub type OperatorRef<L> = Rc<dyn Operator<L>>;

//

mod scaling;
mod matop;
mod fnop;
mod vecmult;

pub use scaling::*;
pub use matop::*;
pub use fnop::*;
pub use vecmult::*;
