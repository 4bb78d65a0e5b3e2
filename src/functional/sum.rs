use crate::{Element, FunctionalError, LinAlg, OperatorRef, Space};
use super::{Functional, FunctionalRef, functional_add_scalar};

/// Sum of functionals \\((F + G)(x) = F(x) + G(x)\\).
///
/// Neither the proximal operator nor the convex conjugate is available.
pub struct FunctionalSum<L: LinAlg>
{
    left: FunctionalRef<L>,
    right: FunctionalRef<L>,
}

impl<L: LinAlg> FunctionalSum<L>
{
    /// Creates an instance.
    ///
    /// Returns [`FunctionalSum`] instance,
    /// or [`FunctionalError::DomainMismatch`] if the domains differ.
    pub fn new(left: &FunctionalRef<L>, right: &FunctionalRef<L>) -> Result<Self, FunctionalError>
    {
        left.domain().check(right.domain())?;

        Ok(FunctionalSum {
            left: left.clone(),
            right: right.clone(),
        })
    }
}

impl<L: LinAlg> Functional<L> for FunctionalSum<L>
{
    fn domain(&self) -> &Space
    {
        self.left.domain()
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        Ok(self.left.evaluate(x)? + self.right.evaluate(x)?)
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        &self.left.gradient(x)? + &self.right.gradient(x)?
    }

    fn proximal(&self, _sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        Err(FunctionalError::Unsupported("proximal of a sum of functionals"))
    }

    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        Err(FunctionalError::Unsupported("convex conjugate of a sum of functionals"))
    }

    fn grad_lipschitz(&self) -> L::F
    {
        self.left.grad_lipschitz() + self.right.grad_lipschitz()
    }
}

//

/// Functional plus a real constant \\((F + c)(x) = F(x) + c\\).
pub struct FunctionalScalarSum<L: LinAlg>
{
    func: FunctionalRef<L>,
    scalar: L::F,
}

impl<L: LinAlg> FunctionalScalarSum<L>
{
    pub fn new(func: &FunctionalRef<L>, scalar: L::F) -> Self
    {
        FunctionalScalarSum {
            func: func.clone(),
            scalar,
        }
    }

    pub fn scalar(&self) -> L::F
    {
        self.scalar
    }
}

impl<L: LinAlg> Functional<L> for FunctionalScalarSum<L>
{
    fn domain(&self) -> &Space
    {
        self.func.domain()
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        Ok(self.func.evaluate(x)? + self.scalar)
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        self.func.gradient(x)
    }

    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        self.func.proximal(sigma)
    }

    /// \\((F + c)^* = F^* - c\\).
    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        functional_add_scalar(&self.func.convex_conj()?, -self.scalar)
    }

    fn grad_lipschitz(&self) -> L::F
    {
        self.func.grad_lipschitz()
    }
}
