use num_traits::{Float, One, Zero};
use core::marker::PhantomData;
use std::rc::Rc;
use crate::{Element, FnOp, FunctionalError, LinAlg, OperatorRef, Scalar, Space};
use crate::proximal::{check_step, proximal_const, proximal_identity};
use super::{Functional, FunctionalRef, functional_add_scalar, functional_scale, functional_translate};

fn real_space(space: &Space) -> Result<Space, FunctionalError>
{
    space.check_real()?;
    Ok(space.clone())
}

//

/// Zero functional \\(F(x) = 0\\).
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
pub struct ZeroFunctional<L: LinAlg>
{
    ph_l: PhantomData<L>,
    space: Space,
}

impl<L: LinAlg> ZeroFunctional<L>
{
    /// Creates an instance.
    ///
    /// Returns [`ZeroFunctional`] instance,
    /// or [`FunctionalError::TypeMismatch`] if `space` is not real.
    pub fn new(space: &Space) -> Result<Self, FunctionalError>
    {
        Ok(ZeroFunctional {
            ph_l: PhantomData,
            space: real_space(space)?,
        })
    }
}

impl<L: LinAlg> Functional<L> for ZeroFunctional<L>
{
    fn domain(&self) -> &Space
    {
        &self.space
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        x.check_space(&self.space)?;
        Ok(L::F::zero())
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        x.check_space(&self.space)?;
        Ok(Element::zero(&self.space))
    }

    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        check_step(sigma)?;
        Ok(proximal_identity(&self.space))
    }

    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        Ok(IndicatorZero::new(&self.space)?.into_ref())
    }

    fn grad_lipschitz(&self) -> L::F
    {
        L::F::zero()
    }
}

//

/// Constant functional \\(F(x) = c\\).
pub struct ConstantFunctional<L: LinAlg>
{
    space: Space,
    constant: L::F,
}

impl<L: LinAlg> ConstantFunctional<L>
{
    /// Creates an instance.
    ///
    /// Returns [`ConstantFunctional`] instance,
    /// or [`FunctionalError::TypeMismatch`] if `space` or `constant` is not real.
    pub fn new<S: Into<Scalar<L::F>>>(space: &Space, constant: S) -> Result<Self, FunctionalError>
    {
        Ok(ConstantFunctional {
            space: real_space(space)?,
            constant: constant.into().real()?,
        })
    }

    pub fn constant(&self) -> L::F
    {
        self.constant
    }
}

impl<L: LinAlg> Functional<L> for ConstantFunctional<L>
{
    fn domain(&self) -> &Space
    {
        &self.space
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        x.check_space(&self.space)?;
        Ok(self.constant)
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        x.check_space(&self.space)?;
        Ok(Element::zero(&self.space))
    }

    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        check_step(sigma)?;
        Ok(proximal_identity(&self.space))
    }

    /// \\(\iota_{\lbrace 0 \rbrace} - c\\).
    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        functional_add_scalar(&IndicatorZero::new(&self.space)?.into_ref(), -self.constant)
    }

    fn grad_lipschitz(&self) -> L::F
    {
        L::F::zero()
    }
}

//

/// Linear functional \\(F(x) = \langle g, x \rangle\\).
pub struct InnerProductFunctional<L: LinAlg>
{
    vector: Element<L>,
}

impl<L: LinAlg> InnerProductFunctional<L>
{
    /// Creates an instance.
    ///
    /// Returns [`InnerProductFunctional`] instance on the space of `vector`,
    /// or [`FunctionalError::TypeMismatch`] if that space is not real.
    pub fn new(vector: &Element<L>) -> Result<Self, FunctionalError>
    {
        vector.space().check_real()?;

        Ok(InnerProductFunctional {
            vector: vector.clone(),
        })
    }

    pub fn vector(&self) -> &Element<L>
    {
        &self.vector
    }
}

impl<L: LinAlg> Functional<L> for InnerProductFunctional<L>
{
    fn domain(&self) -> &Space
    {
        self.vector.space()
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        self.vector.inner(x)
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        x.check_space(self.domain())?;
        Ok(self.vector.clone())
    }

    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        check_step(sigma)?;

        let vector = self.vector.clone();
        Ok(Rc::new(FnOp::<L, _>::new(self.domain(), self.domain(), move |x| {
            Element::lincomb(L::F::one(), x, -sigma, &vector)
        })))
    }

    /// \\(\iota_{\lbrace 0 \rbrace}(\cdot - g)\\).
    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        functional_translate(&IndicatorZero::new(self.domain())?.into_ref(), &self.vector)
    }

    fn grad_lipschitz(&self) -> L::F
    {
        L::F::zero()
    }
}

//

/// 1-norm \\(F(x) = \\|x\\|_1\\), weighted by the cell volume.
pub struct L1Norm<L: LinAlg>
{
    ph_l: PhantomData<L>,
    space: Space,
}

impl<L: LinAlg> L1Norm<L>
{
    pub fn new(space: &Space) -> Result<Self, FunctionalError>
    {
        Ok(L1Norm {
            ph_l: PhantomData,
            space: real_space(space)?,
        })
    }
}

impl<L: LinAlg> Functional<L> for L1Norm<L>
{
    fn domain(&self) -> &Space
    {
        &self.space
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        x.check_space(&self.space)?;
        Ok(x.weighted_abssum())
    }

    /// Pointwise sign, \\(0\\) at \\(0\\).
    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        x.check_space(&self.space)?;

        let f0 = L::F::zero();
        let f1 = L::F::one();

        Ok(x.map(|v| {
            if v > f0 {f1} else if v < f0 {-f1} else {f0}
        }))
    }

    /// Soft thresholding.
    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        check_step(sigma)?;

        Ok(Rc::new(FnOp::<L, _>::new(&self.space, &self.space, move |x| {
            let f0 = L::F::zero();
            Ok(x.map(|v| v.signum() * (v.abs() - sigma).max(f0)))
        })))
    }

    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        Ok(IndicatorUnitBall::new(&self.space, UnitBallNorm::Inf)?.into_ref())
    }
}

//

/// 2-norm \\(F(x) = \\|x\\|_2\\).
pub struct L2Norm<L: LinAlg>
{
    ph_l: PhantomData<L>,
    space: Space,
}

impl<L: LinAlg> L2Norm<L>
{
    pub fn new(space: &Space) -> Result<Self, FunctionalError>
    {
        Ok(L2Norm {
            ph_l: PhantomData,
            space: real_space(space)?,
        })
    }
}

impl<L: LinAlg> Functional<L> for L2Norm<L>
{
    fn domain(&self) -> &Space
    {
        &self.space
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        x.check_space(&self.space)?;
        Ok(x.norm())
    }

    /// \\(x / \\|x\\|_2\\); fails with [`FunctionalError::NotDifferentiable`] at \\(0\\).
    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        x.check_space(&self.space)?;

        let norm = x.norm();
        if norm == L::F::zero() {
            return Err(FunctionalError::NotDifferentiable("2-norm at zero"));
        }
        Ok(x.scaled(norm.recip()))
    }

    /// Block soft thresholding.
    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        check_step(sigma)?;

        Ok(Rc::new(FnOp::<L, _>::new(&self.space, &self.space, move |x| {
            let norm = x.norm();
            if norm <= sigma {
                Ok(Element::zero(x.space()))
            }
            else {
                Ok(x.scaled(L::F::one() - sigma / norm))
            }
        })))
    }

    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        Ok(IndicatorUnitBall::new(&self.space, UnitBallNorm::Two)?.into_ref())
    }
}

//

/// Squared 2-norm \\(F(x) = \\|x\\|_2^2\\).
pub struct L2NormSquared<L: LinAlg>
{
    ph_l: PhantomData<L>,
    space: Space,
}

impl<L: LinAlg> L2NormSquared<L>
{
    pub fn new(space: &Space) -> Result<Self, FunctionalError>
    {
        Ok(L2NormSquared {
            ph_l: PhantomData,
            space: real_space(space)?,
        })
    }
}

impl<L: LinAlg> Functional<L> for L2NormSquared<L>
{
    fn domain(&self) -> &Space
    {
        &self.space
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        x.check_space(&self.space)?;

        let norm = x.norm();
        Ok(norm * norm)
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        x.check_space(&self.space)?;

        let f1 = L::F::one();
        Ok(x.scaled(f1 + f1))
    }

    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        check_step(sigma)?;

        let f1 = L::F::one();
        let f2 = f1 + f1;
        let scale = (f1 + f2 * sigma).recip();
        Ok(Rc::new(FnOp::<L, _>::new(&self.space, &self.space, move |x| Ok(x.scaled(scale)))))
    }

    /// \\(\frac14 \\|\cdot\\|_2^2\\).
    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        let f1 = L::F::one();
        let f4 = f1 + f1 + f1 + f1;
        functional_scale(&L2NormSquared::new(&self.space)?.into_ref(), f4.recip())
    }

    fn grad_lipschitz(&self) -> L::F
    {
        let f1 = L::F::one();
        f1 + f1
    }
}

//

/// Indicator function of the origin.
pub struct IndicatorZero<L: LinAlg>
{
    ph_l: PhantomData<L>,
    space: Space,
}

impl<L: LinAlg> IndicatorZero<L>
{
    pub fn new(space: &Space) -> Result<Self, FunctionalError>
    {
        Ok(IndicatorZero {
            ph_l: PhantomData,
            space: real_space(space)?,
        })
    }
}

impl<L: LinAlg> Functional<L> for IndicatorZero<L>
{
    fn domain(&self) -> &Space
    {
        &self.space
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        x.check_space(&self.space)?;

        if x.as_slice().iter().all(|v| v.is_zero()) {
            Ok(L::F::zero())
        }
        else {
            Ok(L::F::infinity())
        }
    }

    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        check_step(sigma)?;
        Ok(proximal_const(&Element::zero(&self.space)))
    }

    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        Ok(ZeroFunctional::new(&self.space)?.into_ref())
    }
}

//

/// Norm defining an [`IndicatorUnitBall`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitBallNorm
{
    /// 2-norm ball.
    Two,
    /// Max-norm ball.
    Inf,
}

/// Indicator function of the closed unit ball of a norm.
pub struct IndicatorUnitBall<L: LinAlg>
{
    ph_l: PhantomData<L>,
    space: Space,
    norm: UnitBallNorm,
}

impl<L: LinAlg> IndicatorUnitBall<L>
{
    pub fn new(space: &Space, norm: UnitBallNorm) -> Result<Self, FunctionalError>
    {
        Ok(IndicatorUnitBall {
            ph_l: PhantomData,
            space: real_space(space)?,
            norm,
        })
    }

    pub fn norm(&self) -> UnitBallNorm
    {
        self.norm
    }
}

impl<L: LinAlg> Functional<L> for IndicatorUnitBall<L>
{
    fn domain(&self) -> &Space
    {
        &self.space
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        x.check_space(&self.space)?;

        let f1 = L::F::one();
        let inside = match self.norm {
            UnitBallNorm::Two => x.norm() <= f1,
            UnitBallNorm::Inf => x.as_slice().iter().all(|v| v.abs() <= f1),
        };

        Ok(if inside {L::F::zero()} else {L::F::infinity()})
    }

    /// Projection onto the ball.
    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        check_step(sigma)?;

        let norm = self.norm;
        Ok(Rc::new(FnOp::<L, _>::new(&self.space, &self.space, move |x| {
            let f1 = L::F::one();
            match norm {
                UnitBallNorm::Two => Ok(x.scaled(x.norm().max(f1).recip())),
                UnitBallNorm::Inf => Ok(x.map(|v| v.max(-f1).min(f1))),
            }
        })))
    }

    /// Dual norm: \\(\\|\cdot\\|_2\\) for the 2-norm ball, \\(\\|\cdot\\|_1\\) for the max-norm ball.
    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        match self.norm {
            UnitBallNorm::Two => Ok(L2Norm::new(&self.space)?.into_ref()),
            UnitBallNorm::Inf => Ok(L1Norm::new(&self.space)?.into_ref()),
        }
    }
}

//

/// Indicator function of the nonnegative orthant.
pub struct IndicatorNonnegativity<L: LinAlg>
{
    ph_l: PhantomData<L>,
    space: Space,
}

impl<L: LinAlg> IndicatorNonnegativity<L>
{
    pub fn new(space: &Space) -> Result<Self, FunctionalError>
    {
        Ok(IndicatorNonnegativity {
            ph_l: PhantomData,
            space: real_space(space)?,
        })
    }
}

impl<L: LinAlg> Functional<L> for IndicatorNonnegativity<L>
{
    fn domain(&self) -> &Space
    {
        &self.space
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        x.check_space(&self.space)?;

        let f0 = L::F::zero();
        if x.as_slice().iter().all(|v| *v >= f0) {
            Ok(f0)
        }
        else {
            Ok(L::F::infinity())
        }
    }

    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        check_step(sigma)?;

        Ok(Rc::new(FnOp::<L, _>::new(&self.space, &self.space, |x| {
            Ok(x.map(|v| v.max(L::F::zero())))
        })))
    }

    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        Ok(IndicatorNonpositivity::new(&self.space)?.into_ref())
    }
}

//

/// Indicator function of the nonpositive orthant.
pub struct IndicatorNonpositivity<L: LinAlg>
{
    ph_l: PhantomData<L>,
    space: Space,
}

impl<L: LinAlg> IndicatorNonpositivity<L>
{
    pub fn new(space: &Space) -> Result<Self, FunctionalError>
    {
        Ok(IndicatorNonpositivity {
            ph_l: PhantomData,
            space: real_space(space)?,
        })
    }
}

impl<L: LinAlg> Functional<L> for IndicatorNonpositivity<L>
{
    fn domain(&self) -> &Space
    {
        &self.space
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        x.check_space(&self.space)?;

        let f0 = L::F::zero();
        if x.as_slice().iter().all(|v| *v <= f0) {
            Ok(f0)
        }
        else {
            Ok(L::F::infinity())
        }
    }

    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        check_step(sigma)?;

        Ok(Rc::new(FnOp::<L, _>::new(&self.space, &self.space, |x| {
            Ok(x.map(|v| v.min(L::F::zero())))
        })))
    }

    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        Ok(IndicatorNonnegativity::new(&self.space)?.into_ref())
    }
}

//

#[test]
fn test_l1norm_prox()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let space = Space::rn(4);
    let f = L1Norm::<L>::new(&space).unwrap();
    let x = Element::<L>::new(&space, vec![2., -0.5, 0., -3.]).unwrap();

    assert_float_eq!(f.evaluate(&x).unwrap(), 5.5, abs <= 1e-12);

    let g = f.gradient(&x).unwrap();
    assert_float_eq!(g.as_slice(), [1., -1., 0., -1.].as_ref(), abs_all <= 1e-12);

    let p = f.proximal(1.).unwrap().apply(&x).unwrap();
    assert_float_eq!(p.as_slice(), [1., 0., 0., -2.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_l2norm_not_differentiable()
{
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let space = Space::rn(2);
    let f = L2Norm::<L>::new(&space).unwrap();

    assert!(matches!(f.gradient(&Element::zero(&space)), Err(FunctionalError::NotDifferentiable(_))));
    assert!(matches!(f.proximal(-1.), Err(FunctionalError::InvalidScaling {..})));
    assert!(matches!(L2Norm::<L>::new(&Space::cn(2)), Err(FunctionalError::TypeMismatch(_))));
}

#[test]
fn test_indicator_ball()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let space = Space::rn(2);
    let x = Element::<L>::new(&space, vec![3., -4.]).unwrap();

    let ball2 = IndicatorUnitBall::<L>::new(&space, UnitBallNorm::Two).unwrap();
    assert!(ball2.evaluate(&x).unwrap().is_infinite());
    let p = ball2.proximal(1.).unwrap().apply(&x).unwrap();
    assert_float_eq!(p.as_slice(), [0.6, -0.8].as_ref(), abs_all <= 1e-12);
    assert_float_eq!(ball2.evaluate(&p.scaled(0.5)).unwrap(), 0., abs <= 1e-12);

    let ball_inf = IndicatorUnitBall::<L>::new(&space, UnitBallNorm::Inf).unwrap();
    let q = ball_inf.proximal(1.).unwrap().apply(&x).unwrap();
    assert_float_eq!(q.as_slice(), [1., -1.].as_ref(), abs_all <= 1e-12);

    // dual norm of the max-norm is the 1-norm
    let conj = ball_inf.convex_conj().unwrap();
    assert_float_eq!(conj.evaluate(&x).unwrap(), 7., abs <= 1e-12);
}

#[test]
fn test_indicator_orthants()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let space = Space::rn(3);
    let x = Element::<L>::new(&space, vec![2., -1., 0.]).unwrap();

    let nonpos = IndicatorNonnegativity::<L>::new(&space).unwrap().convex_conj().unwrap();
    assert!(nonpos.evaluate(&x).unwrap().is_infinite());
    assert_float_eq!(nonpos.evaluate(&Element::zero(&space)).unwrap(), 0., abs <= 0.);

    let p = nonpos.proximal(1.).unwrap().apply(&x).unwrap();
    assert_float_eq!(p.as_slice(), [0., -1., 0.].as_ref(), abs_all <= 1e-12);
    assert_float_eq!(nonpos.evaluate(&p).unwrap(), 0., abs <= 0.);

    // back to the nonnegative orthant
    let nonneg = nonpos.convex_conj().unwrap();
    let q = nonneg.proximal(1.).unwrap().apply(&x).unwrap();
    assert_float_eq!(q.as_slice(), [2., 0., 0.].as_ref(), abs_all <= 1e-12);
}
