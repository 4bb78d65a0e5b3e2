use num_traits::{Float, One, Zero};
use core::marker::PhantomData;
use std::rc::Rc;
use crate::{Element, FunctionalError, LinAlg, Space};
use super::{Operator, OperatorRef};

/// Identity operator \\(x \mapsto x\\) on a space.
pub struct IdentityOperator<L: LinAlg>
{
    ph_l: PhantomData<L>,
    space: Space,
}

impl<L: LinAlg> IdentityOperator<L>
{
    pub fn new(space: &Space) -> Self
    {
        IdentityOperator {
            ph_l: PhantomData,
            space: space.clone(),
        }
    }
}

impl<L: LinAlg> Operator<L> for IdentityOperator<L>
{
    fn domain(&self) -> &Space
    {
        &self.space
    }

    fn range(&self) -> &Space
    {
        &self.space
    }

    fn apply(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        x.check_space(&self.space)?;
        Ok(x.clone())
    }

    fn is_linear(&self) -> bool
    {
        true
    }

    fn adjoint(&self) -> Result<OperatorRef<L>, FunctionalError>
    {
        Ok(Rc::new(Self::new(&self.space)))
    }

    fn derivative(&self, _x: &Element<L>) -> Result<OperatorRef<L>, FunctionalError>
    {
        Ok(Rc::new(Self::new(&self.space)))
    }
}

//

/// Scaling operator \\(x \mapsto c x\\) on a space.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Self-adjoint.
pub struct ScalingOperator<L: LinAlg>
{
    space: Space,
    scalar: L::F,
}

impl<L: LinAlg> ScalingOperator<L>
{
    pub fn new(space: &Space, scalar: L::F) -> Self
    {
        ScalingOperator {
            space: space.clone(),
            scalar,
        }
    }

    pub fn scalar(&self) -> L::F
    {
        self.scalar
    }

    /// Inverse operator \\(x \mapsto c^{-1} x\\).
    pub fn inverse(&self) -> Result<Self, FunctionalError>
    {
        if self.scalar == L::F::zero() {
            return Err(FunctionalError::invalid_scaling(self.scalar, "zero scaling is not invertible"));
        }

        Ok(Self::new(&self.space, self.scalar.recip()))
    }
}

impl<L: LinAlg> Operator<L> for ScalingOperator<L>
{
    fn domain(&self) -> &Space
    {
        &self.space
    }

    fn range(&self) -> &Space
    {
        &self.space
    }

    fn apply(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        x.check_space(&self.space)?;
        if self.scalar == L::F::one() {
            Ok(x.clone())
        }
        else {
            Ok(x.scaled(self.scalar))
        }
    }

    fn is_linear(&self) -> bool
    {
        true
    }

    fn adjoint(&self) -> Result<OperatorRef<L>, FunctionalError>
    {
        Ok(Rc::new(Self::new(&self.space, self.scalar)))
    }

    fn derivative(&self, _x: &Element<L>) -> Result<OperatorRef<L>, FunctionalError>
    {
        Ok(Rc::new(Self::new(&self.space, self.scalar)))
    }
}

//

#[test]
fn test_scaling_op1()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let space = Space::rn(3);
    let x = Element::<L>::new(&space, vec![1., -2., 4.]).unwrap();

    let op = ScalingOperator::<L>::new(&space, -0.5);
    let y = op.apply(&x).unwrap();
    assert_float_eq!(y.as_slice(), [-0.5, 1., -2.].as_ref(), abs_all <= 1e-12);

    let z = op.adjoint().unwrap().apply(&x).unwrap();
    assert_float_eq!(z.as_slice(), y.as_slice(), abs_all <= 1e-12);

    let w = op.inverse().unwrap().apply(&y).unwrap();
    assert_float_eq!(w.as_slice(), x.as_slice(), abs_all <= 1e-12);

    let other = Element::<L>::zero(&Space::rn(2));
    assert!(IdentityOperator::<L>::new(&space).apply(&other).is_err());
}
