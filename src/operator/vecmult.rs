use std::rc::Rc;
use crate::{Element, FunctionalError, FunctionalRef, LinAlg, Space};
use super::{FnOp, MatOp, Operator, OperatorRef};

/// A functional seen as an operator into [`Space::real_numbers`].
pub struct FunctionalOp<L: LinAlg>
{
    func: FunctionalRef<L>,
    range: Space,
}

impl<L: LinAlg> FunctionalOp<L>
{
    pub fn new(func: &FunctionalRef<L>) -> Self
    {
        FunctionalOp {
            func: func.clone(),
            range: Space::real_numbers(),
        }
    }
}

impl<L: LinAlg> Operator<L> for FunctionalOp<L>
{
    fn domain(&self) -> &Space
    {
        self.func.domain()
    }

    fn range(&self) -> &Space
    {
        &self.range
    }

    fn apply(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        let v = self.func.evaluate(x)?;
        Element::new(&self.range, vec![v])
    }

    /// \\(p \mapsto \langle \nabla F(x), p \rangle\\) as a single-row [`MatOp`].
    fn derivative(&self, x: &Element<L>) -> Result<OperatorRef<L>, FunctionalError>
    {
        let grad = self.func.gradient(x)?;
        let row = grad.scaled(grad.weight()).into_vec();
        Ok(Rc::new(MatOp::new(self.domain(), &self.range, row)))
    }
}

//

/// Operator \\(x \mapsto A(y \cdot x)\\) with the pointwise product \\(y \cdot x\\).
///
/// `y` belongs to the domain of \\(A\\).
pub struct OperatorRightVectorMult<L: LinAlg>
{
    op: OperatorRef<L>,
    vector: Element<L>,
}

impl<L: LinAlg> OperatorRightVectorMult<L>
{
    /// Creates an instance.
    ///
    /// Returns [`OperatorRightVectorMult`] instance,
    /// or [`FunctionalError::DomainMismatch`] if `vector` is not in the domain of `op`.
    pub fn new(op: &OperatorRef<L>, vector: &Element<L>) -> Result<Self, FunctionalError>
    {
        vector.check_space(op.domain())?;

        Ok(OperatorRightVectorMult {
            op: op.clone(),
            vector: vector.clone(),
        })
    }

    pub fn vector(&self) -> &Element<L>
    {
        &self.vector
    }
}

impl<L: LinAlg> Operator<L> for OperatorRightVectorMult<L>
{
    fn domain(&self) -> &Space
    {
        self.op.domain()
    }

    fn range(&self) -> &Space
    {
        self.op.range()
    }

    fn apply(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        self.op.apply(&self.vector.multiply(x)?)
    }

    fn is_linear(&self) -> bool
    {
        self.op.is_linear()
    }

    /// \\(x \mapsto y \cdot A^* x\\), for linear \\(A\\).
    fn adjoint(&self) -> Result<OperatorRef<L>, FunctionalError>
    {
        if !self.is_linear() {
            return Err(FunctionalError::Unsupported("adjoint of a nonlinear operator"));
        }

        let adj = self.op.adjoint()?;
        let vector = self.vector.clone();
        Ok(Rc::new(FnOp::<L, _>::new(self.range(), self.domain(), move |x| {
            vector.multiply(&adj.apply(x)?)
        })))
    }

    fn derivative(&self, x: &Element<L>) -> Result<OperatorRef<L>, FunctionalError>
    {
        let deriv = self.op.derivative(&self.vector.multiply(x)?)?;
        Ok(Rc::new(OperatorRightVectorMult::new(&deriv, &self.vector)?))
    }
}

//

/// Operator \\(x \mapsto F(x)\ y\\) from the domain of a functional \\(F\\)
/// into the space of \\(y\\).
///
/// `y` may belong to any space.
pub struct FunctionalLeftVectorMult<L: LinAlg>
{
    func: FunctionalRef<L>,
    vector: Element<L>,
}

impl<L: LinAlg> FunctionalLeftVectorMult<L>
{
    pub fn new(func: &FunctionalRef<L>, vector: &Element<L>) -> Self
    {
        FunctionalLeftVectorMult {
            func: func.clone(),
            vector: vector.clone(),
        }
    }

    pub fn vector(&self) -> &Element<L>
    {
        &self.vector
    }
}

impl<L: LinAlg> Operator<L> for FunctionalLeftVectorMult<L>
{
    fn domain(&self) -> &Space
    {
        self.func.domain()
    }

    fn range(&self) -> &Space
    {
        self.vector.space()
    }

    fn apply(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        Ok(self.vector.scaled(self.func.evaluate(x)?))
    }

    fn derivative(&self, x: &Element<L>) -> Result<OperatorRef<L>, FunctionalError>
    {
        Ok(Rc::new(FunctionalLeftVectorMult::new(&self.func.derivative(x)?, &self.vector)))
    }
}
