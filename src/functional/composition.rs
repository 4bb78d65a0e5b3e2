use crate::{Element, FunctionalError, LinAlg, OperatorRef, Space};
use super::{Functional, FunctionalRef};

/// Composition \\(x \mapsto F(A x)\\) with an operator \\(A\\).
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// The gradient follows the chain rule
/// \\(\nabla (F \circ A)(x) = A'(x)^* \nabla F(A x)\\).
pub struct FunctionalComposition<L: LinAlg>
{
    func: FunctionalRef<L>,
    op: OperatorRef<L>,
}

impl<L: LinAlg> FunctionalComposition<L>
{
    /// Creates an instance.
    ///
    /// Returns [`FunctionalComposition`] instance,
    /// or [`FunctionalError::DomainMismatch`] if the range of `op` is not the domain of `func`.
    pub fn new(func: &FunctionalRef<L>, op: &OperatorRef<L>) -> Result<Self, FunctionalError>
    {
        func.domain().check(op.range())?;

        Ok(FunctionalComposition {
            func: func.clone(),
            op: op.clone(),
        })
    }

    pub fn operator(&self) -> &OperatorRef<L>
    {
        &self.op
    }
}

impl<L: LinAlg> Functional<L> for FunctionalComposition<L>
{
    fn domain(&self) -> &Space
    {
        self.op.domain()
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        self.func.evaluate(&self.op.apply(x)?)
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        let grad = self.func.gradient(&self.op.apply(x)?)?;
        self.op.derivative(x)?.adjoint()?.apply(&grad)
    }
}
