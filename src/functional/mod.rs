//! Functionals and their algebra

use num_traits::Float;
use std::rc::Rc;
use crate::{Element, FunctionalError, LinAlg, OperatorRef, Space};

/// Functional trait
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// A mapping \\(F: X \to {\bf R} \cup \lbrace \infty \rbrace\\) on a real space \\(X\\).
///
/// Every accessor that is not available for a functional returns
/// [`FunctionalError::Unsupported`] by default.
pub trait Functional<L: LinAlg>
{
    /// Space \\(X\\) of the arguments.
    fn domain(&self) -> &Space;

    /// Calculate \\(F(x)\\).
    ///
    /// Returns the value, possibly infinite,
    /// or [`FunctionalError::DomainMismatch`] if `x` is not in \\(X\\).
    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>;

    /// Calculate \\(\nabla F(x)\\).
    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        let _ = x;
        Err(FunctionalError::Unsupported("gradient"))
    }

    /// Directional derivative \\(p \mapsto \langle \nabla F(x), p \rangle\\) at `x`.
    fn derivative(&self, x: &Element<L>) -> Result<FunctionalRef<L>, FunctionalError>
    {
        let grad = self.gradient(x)?;
        Ok(Rc::new(InnerProductFunctional::new(&grad)?))
    }

    /// Proximal operator
    /// \\(\mathrm{prox}\_{\sigma F}(x) = \arg\min_z F(z) + \frac{1}{2\sigma}\\|z - x\\|^2\\).
    ///
    /// Returns the operator,
    /// or [`FunctionalError::InvalidScaling`] if `sigma` is negative.
    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        let _ = sigma;
        Err(FunctionalError::Unsupported("proximal"))
    }

    /// Convex conjugate \\(F^*(y) = \sup_x \langle x, y \rangle - F(x)\\).
    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        Err(FunctionalError::Unsupported("convex conjugate"))
    }

    /// Lipschitz constant of \\(\nabla F\\), infinite if unknown.
    fn grad_lipschitz(&self) -> L::F
    {
        L::F::infinity()
    }

    /// Moves `self` behind a shared reference.
    fn into_ref(self) -> FunctionalRef<L>
    where Self: Sized + 'static
    {
        Rc::new(self)
    }
}

/// Shared reference to a [`Functional`].
pub type FunctionalRef<L> = Rc<dyn Functional<L>>;

//

mod default;     // library
mod scalar_mult; // c F, F(c .)
mod sum;         // F + G, F + c
mod translation; // F(. - y)
mod composition; // F(A .)
mod conjugate;   // transforms of F*
mod algebra;     // entry points

pub use default::*;
pub use scalar_mult::*;
pub use sum::*;
pub use translation::*;
pub use composition::*;
pub use conjugate::*;
pub use algebra::*;
