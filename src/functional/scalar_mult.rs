use num_traits::Float;
use std::rc::Rc;
use crate::{Element, FunctionalError, LinAlg, OperatorRef, Space};
use crate::proximal::{check_step, proximal_arg_scaling};
use super::{Functional, FunctionalRef, ConvexConjugateArgScaling, ConvexConjugateFuncScaling};

fn check_positive<F: Float>(scalar: F, reason: &'static str) -> Result<(), FunctionalError>
{
    if scalar > F::zero() {
        Ok(())
    }
    else {
        Err(FunctionalError::invalid_scaling(scalar, reason))
    }
}

//

/// Left scalar multiplication \\((c F)(x) = c F(x)\\).
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// The proximal operator and the convex conjugate require \\(c > 0\\).
pub struct FunctionalLeftScalarMult<L: LinAlg>
{
    func: FunctionalRef<L>,
    scalar: L::F,
}

impl<L: LinAlg> FunctionalLeftScalarMult<L>
{
    pub fn new(func: &FunctionalRef<L>, scalar: L::F) -> Self
    {
        FunctionalLeftScalarMult {
            func: func.clone(),
            scalar,
        }
    }

    pub fn functional(&self) -> &FunctionalRef<L>
    {
        &self.func
    }

    pub fn scalar(&self) -> L::F
    {
        self.scalar
    }
}

impl<L: LinAlg> Functional<L> for FunctionalLeftScalarMult<L>
{
    fn domain(&self) -> &Space
    {
        self.func.domain()
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        Ok(self.scalar * self.func.evaluate(x)?)
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        Ok(self.func.gradient(x)?.scaled(self.scalar))
    }

    /// \\(\mathrm{prox}\_{\sigma (c F)} = \mathrm{prox}\_{(\sigma c) F}\\).
    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        check_step(sigma)?;
        check_positive(self.scalar, "proximal of a nonpositive multiple")?;

        self.func.proximal(sigma * self.scalar)
    }

    /// \\((c F)^*(y) = c F^*(y / c)\\).
    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        check_positive(self.scalar, "convex conjugate of a nonpositive multiple")?;

        Ok(Rc::new(ConvexConjugateFuncScaling::new(&self.func.convex_conj()?, self.scalar)?))
    }

    fn grad_lipschitz(&self) -> L::F
    {
        self.scalar.abs() * self.func.grad_lipschitz()
    }
}

//

/// Right scalar multiplication \\((F c)(x) = F(c x)\\).
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// The proximal operator and the convex conjugate require \\(c > 0\\).
pub struct FunctionalRightScalarMult<L: LinAlg>
{
    func: FunctionalRef<L>,
    scalar: L::F,
}

impl<L: LinAlg> FunctionalRightScalarMult<L>
{
    pub fn new(func: &FunctionalRef<L>, scalar: L::F) -> Self
    {
        FunctionalRightScalarMult {
            func: func.clone(),
            scalar,
        }
    }

    pub fn functional(&self) -> &FunctionalRef<L>
    {
        &self.func
    }

    pub fn scalar(&self) -> L::F
    {
        self.scalar
    }
}

impl<L: LinAlg> Functional<L> for FunctionalRightScalarMult<L>
{
    fn domain(&self) -> &Space
    {
        self.func.domain()
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        x.check_space(self.domain())?;
        self.func.evaluate(&x.scaled(self.scalar))
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        x.check_space(self.domain())?;
        Ok(self.func.gradient(&x.scaled(self.scalar))?.scaled(self.scalar))
    }

    /// \\(\mathrm{prox}\_{\sigma (F c)}(x) = c^{-1} \mathrm{prox}\_{\sigma c^2 F}(c x)\\).
    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        check_positive(self.scalar, "proximal of a nonpositive argument scaling")?;

        proximal_arg_scaling(&self.func, sigma, self.scalar)
    }

    /// \\((F c)^*(y) = F^*(y / c)\\).
    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        check_positive(self.scalar, "convex conjugate of a nonpositive argument scaling")?;

        Ok(Rc::new(ConvexConjugateArgScaling::new(&self.func.convex_conj()?, self.scalar)?))
    }

    fn grad_lipschitz(&self) -> L::F
    {
        self.scalar * self.scalar * self.func.grad_lipschitz()
    }
}

//

#[test]
fn test_left_scalar_mult1()
{
    use float_eq::assert_float_eq;
    use crate::{FloatGeneric, L2NormSquared};

    type L = FloatGeneric<f64>;

    let space = Space::rn(2);
    let f = L2NormSquared::<L>::new(&space).unwrap().into_ref();
    let x = Element::<L>::new(&space, vec![1., -2.]).unwrap();

    let cf = FunctionalLeftScalarMult::new(&f, 3.);
    assert_float_eq!(cf.evaluate(&x).unwrap(), 15., abs <= 1e-12);
    assert_float_eq!(cf.grad_lipschitz(), 6., abs <= 1e-12);

    let neg = FunctionalLeftScalarMult::new(&f, -3.);
    assert!(matches!(neg.convex_conj(), Err(FunctionalError::InvalidScaling {..})));
    assert!(matches!(neg.proximal(1.), Err(FunctionalError::InvalidScaling {..})));
    assert!(FunctionalLeftScalarMult::new(&f, 0.).proximal(1.).is_err());
}
