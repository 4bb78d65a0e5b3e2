//! Proximal operator transforms
//!
//! <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
//! <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
//!
//! Each function builds \\(\mathrm{prox}\_{\sigma G}\\) of a functional \\(G\\)
//! derived from \\(F\\) out of the proximal operators of \\(F\\).

use num_traits::{Float, One, Zero};
use std::rc::Rc;
use crate::{Element, FnOp, FunctionalError, FunctionalRef, LinAlg, OperatorRef, Space};

/// Fails with [`FunctionalError::InvalidScaling`] for a negative or NaN step size.
pub fn check_step<F: Float>(sigma: F) -> Result<(), FunctionalError>
{
    if sigma >= F::zero() {
        Ok(())
    }
    else {
        Err(FunctionalError::invalid_scaling(sigma, "step size must be nonnegative"))
    }
}

/// Proximal operator of the zero functional, the identity.
pub fn proximal_identity<L: LinAlg>(space: &Space) -> OperatorRef<L>
{
    Rc::new(crate::IdentityOperator::new(space))
}

/// Proximal operator that maps everything to `value`.
pub fn proximal_const<L: LinAlg>(value: &Element<L>) -> OperatorRef<L>
{
    let space = value.space().clone();
    let value = value.clone();
    Rc::new(FnOp::<L, _>::new(&space, &space, move |_| Ok(value.clone())))
}

/// \\(\mathrm{prox}\_{\sigma F(\cdot - y)}(x) = y + \mathrm{prox}\_{\sigma F}(x - y)\\).
pub fn proximal_translation<L: LinAlg>(func: &FunctionalRef<L>, sigma: L::F, y: &Element<L>) -> Result<OperatorRef<L>, FunctionalError>
{
    y.check_space(func.domain())?;

    let prox = func.proximal(sigma)?;
    let y = y.clone();
    Ok(Rc::new(FnOp::<L, _>::new(func.domain(), func.domain(), move |x| {
        let mut z = prox.apply(&(x - &y)?)?;
        z.add_scaled(L::F::one(), &y)?;
        Ok(z)
    })))
}

/// \\(\mathrm{prox}\_{\sigma F(c\ \cdot)}(x) = c^{-1} \mathrm{prox}\_{\sigma c^2 F}(c x)\\).
///
/// `c` shall be nonzero.
pub fn proximal_arg_scaling<L: LinAlg>(func: &FunctionalRef<L>, sigma: L::F, c: L::F) -> Result<OperatorRef<L>, FunctionalError>
{
    check_step(sigma)?;
    if c == L::F::zero() {
        return Err(FunctionalError::invalid_scaling(c, "argument scaling must be nonzero"));
    }

    let prox = func.proximal(sigma * c * c)?;
    Ok(Rc::new(FnOp::<L, _>::new(func.domain(), func.domain(), move |x| {
        Ok(prox.apply(&x.scaled(c))?.scaled(c.recip()))
    })))
}

/// Proximal operator of the perturbed functional
/// \\(F(x) + a \\|x\\|^2 + \langle u, x \rangle\\):
/// \\(\mathrm{prox}\_{\sigma' F}\left(\frac{x - \sigma u}{1 + 2 \sigma a}\right)\\)
/// with \\(\sigma' = \frac{\sigma}{1 + 2 \sigma a}\\).
///
/// `a` shall be nonnegative. `u` is zero if `None`.
pub fn proximal_quadratic_perturbation<L: LinAlg>(func: &FunctionalRef<L>, sigma: L::F, a: L::F, u: Option<&Element<L>>) -> Result<OperatorRef<L>, FunctionalError>
{
    check_step(sigma)?;
    if a < L::F::zero() || a.is_nan() {
        return Err(FunctionalError::invalid_scaling(a, "quadratic coefficient must be nonnegative"));
    }
    if let Some(u) = u {
        u.check_space(func.domain())?;
    }

    let f1 = L::F::one();
    let f2 = f1 + f1;

    let denom = f1 + f2 * sigma * a;
    let prox = func.proximal(sigma / denom)?;
    let u = u.cloned();
    Ok(Rc::new(FnOp::<L, _>::new(func.domain(), func.domain(), move |x| {
        let mut z = x.clone();
        if let Some(u) = &u {
            z.add_scaled(-sigma, u)?;
        }
        z.scale(denom.recip());
        prox.apply(&z)
    })))
}

//

#[test]
fn test_check_step()
{
    assert!(check_step(0.).is_ok());
    assert!(check_step(2.).is_ok());
    assert!(matches!(check_step(-1.), Err(FunctionalError::InvalidScaling {..})));
    assert!(check_step(f64::NAN).is_err());
}

#[test]
fn test_proximal_const()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let space = Space::uniform_discr(&[0.], &[1.], &[2]);
    let c = Element::<L>::new(&space, vec![1., -1.]).unwrap();
    let op = proximal_const(&c);

    let x = Element::<L>::new(&space, vec![5., 7.]).unwrap();
    assert_float_eq!(op.apply(&x).unwrap().as_slice(), c.as_slice(), abs_all <= 0.);
    assert!(op.apply(&Element::zero(&Space::rn(2))).is_err());
}
