use core::marker::PhantomData;
use crate::{Element, FunctionalError, LinAlg, Space};
use super::Operator;

/// Operator defined by a function
///
/// Checks the domain of the argument, then calls the function.
/// Proximal operators are built from this.
pub struct FnOp<L, M>
where L: LinAlg, M: Fn(&Element<L>) -> Result<Element<L>, FunctionalError>
{
    ph_l: PhantomData<L>,
    domain: Space,
    range: Space,
    func: M,
}

impl<L, M> FnOp<L, M>
where L: LinAlg, M: Fn(&Element<L>) -> Result<Element<L>, FunctionalError>
{
    /// Creates an instance.
    ///
    /// Returns [`FnOp`] instance.
    /// * `func` shall return an element of `range` for each element of `domain`.
    pub fn new(domain: &Space, range: &Space, func: M) -> Self
    {
        FnOp {
            ph_l: PhantomData,
            domain: domain.clone(),
            range: range.clone(),
            func,
        }
    }
}

impl<L, M> Operator<L> for FnOp<L, M>
where L: LinAlg, M: Fn(&Element<L>) -> Result<Element<L>, FunctionalError>
{
    fn domain(&self) -> &Space
    {
        &self.domain
    }

    fn range(&self) -> &Space
    {
        &self.range
    }

    fn apply(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        x.check_space(&self.domain)?;

        let y = (self.func)(x)?;
        y.check_space(&self.range)?;
        Ok(y)
    }
}
