//! Convex conjugates of transformed functionals
//!
//! <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
//! <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
//!
//! Each combinator is built from the conjugate \\(F^*\\) of a functional \\(F\\)
//! and represents the conjugate of a transform of \\(F\\).

use num_traits::{Float, One, Zero};
use crate::{Element, FunctionalError, InnerProductFunctional, LinAlg, OperatorRef, Space};
use crate::proximal::{proximal_arg_scaling, proximal_quadratic_perturbation, proximal_translation};
use super::{Functional, FunctionalRef, functional_add, functional_scale, functional_scale_arg, functional_translate};

/// \\((F(\cdot - y))^*(x) = F^*(x) + \langle x, y \rangle\\).
pub struct ConvexConjugateTranslation<L: LinAlg>
{
    conj: FunctionalRef<L>,
    translation: Element<L>,
}

impl<L: LinAlg> ConvexConjugateTranslation<L>
{
    /// Creates an instance from \\(F^*\\) and \\(y\\).
    ///
    /// Returns [`ConvexConjugateTranslation`] instance,
    /// or [`FunctionalError::DomainMismatch`] if `translation` is not in the domain.
    pub fn new(conj: &FunctionalRef<L>, translation: &Element<L>) -> Result<Self, FunctionalError>
    {
        translation.check_space(conj.domain())?;

        Ok(ConvexConjugateTranslation {
            conj: conj.clone(),
            translation: translation.clone(),
        })
    }
}

impl<L: LinAlg> Functional<L> for ConvexConjugateTranslation<L>
{
    fn domain(&self) -> &Space
    {
        self.conj.domain()
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        Ok(self.conj.evaluate(x)? + x.inner(&self.translation)?)
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        let mut grad = self.conj.gradient(x)?;
        grad.add_scaled(L::F::one(), &self.translation)?;
        Ok(grad)
    }

    /// \\(\mathrm{prox}\_{\sigma F^*}(x - \sigma y)\\).
    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        proximal_quadratic_perturbation(&self.conj, sigma, L::F::zero(), Some(&self.translation))
    }

    /// \\(F^{**}(\cdot - y)\\).
    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        functional_translate(&self.conj.convex_conj()?, &self.translation)
    }

    fn grad_lipschitz(&self) -> L::F
    {
        self.conj.grad_lipschitz()
    }
}

//

/// \\((F(s\ \cdot))^*(x) = F^*(x / s)\\), \\(s \ne 0\\).
pub struct ConvexConjugateArgScaling<L: LinAlg>
{
    conj: FunctionalRef<L>,
    scaling: L::F,
}

impl<L: LinAlg> ConvexConjugateArgScaling<L>
{
    /// Creates an instance from \\(F^*\\) and \\(s\\).
    ///
    /// Returns [`ConvexConjugateArgScaling`] instance,
    /// or [`FunctionalError::InvalidScaling`] if `scaling` is zero.
    pub fn new(conj: &FunctionalRef<L>, scaling: L::F) -> Result<Self, FunctionalError>
    {
        if scaling == L::F::zero() || scaling.is_nan() {
            return Err(FunctionalError::invalid_scaling(scaling, "argument scaling must be nonzero"));
        }

        Ok(ConvexConjugateArgScaling {
            conj: conj.clone(),
            scaling,
        })
    }
}

impl<L: LinAlg> Functional<L> for ConvexConjugateArgScaling<L>
{
    fn domain(&self) -> &Space
    {
        self.conj.domain()
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        x.check_space(self.domain())?;
        self.conj.evaluate(&x.scaled(self.scaling.recip()))
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        x.check_space(self.domain())?;

        let s_inv = self.scaling.recip();
        Ok(self.conj.gradient(&x.scaled(s_inv))?.scaled(s_inv))
    }

    /// \\(s\ \mathrm{prox}\_{(\sigma / s^2) F^*}(x / s)\\).
    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        proximal_arg_scaling(&self.conj, sigma, self.scaling.recip())
    }

    /// \\(F^{**}(s\ \cdot)\\).
    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        functional_scale_arg(&self.conj.convex_conj()?, self.scaling)
    }

    fn grad_lipschitz(&self) -> L::F
    {
        self.conj.grad_lipschitz() / (self.scaling * self.scaling)
    }
}

//

/// \\((s F)^*(x) = s F^*(x / s)\\), \\(s > 0\\).
pub struct ConvexConjugateFuncScaling<L: LinAlg>
{
    conj: FunctionalRef<L>,
    scaling: L::F,
}

impl<L: LinAlg> ConvexConjugateFuncScaling<L>
{
    /// Creates an instance from \\(F^*\\) and \\(s\\).
    ///
    /// Returns [`ConvexConjugateFuncScaling`] instance,
    /// or [`FunctionalError::InvalidScaling`] if `scaling` is not positive.
    pub fn new(conj: &FunctionalRef<L>, scaling: L::F) -> Result<Self, FunctionalError>
    {
        if scaling <= L::F::zero() || scaling.is_nan() {
            return Err(FunctionalError::invalid_scaling(scaling, "functional scaling must be positive"));
        }

        Ok(ConvexConjugateFuncScaling {
            conj: conj.clone(),
            scaling,
        })
    }
}

impl<L: LinAlg> Functional<L> for ConvexConjugateFuncScaling<L>
{
    fn domain(&self) -> &Space
    {
        self.conj.domain()
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        x.check_space(self.domain())?;
        Ok(self.scaling * self.conj.evaluate(&x.scaled(self.scaling.recip()))?)
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        x.check_space(self.domain())?;
        self.conj.gradient(&x.scaled(self.scaling.recip()))
    }

    /// \\(s\ \mathrm{prox}\_{(\sigma / s) F^*}(x / s)\\).
    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        proximal_arg_scaling(&self.conj, sigma * self.scaling, self.scaling.recip())
    }

    /// \\(s F^{**}\\).
    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        functional_scale(&self.conj.convex_conj()?, self.scaling)
    }

    fn grad_lipschitz(&self) -> L::F
    {
        self.conj.grad_lipschitz() / self.scaling
    }
}

//

/// \\((F + \langle y, \cdot \rangle)^*(x) = F^*(x - y)\\).
pub struct ConvexConjugateLinearPerturb<L: LinAlg>
{
    conj: FunctionalRef<L>,
    perturbation: Element<L>,
}

impl<L: LinAlg> ConvexConjugateLinearPerturb<L>
{
    /// Creates an instance from \\(F^*\\) and \\(y\\).
    ///
    /// Returns [`ConvexConjugateLinearPerturb`] instance,
    /// or [`FunctionalError::DomainMismatch`] if `perturbation` is not in the domain.
    pub fn new(conj: &FunctionalRef<L>, perturbation: &Element<L>) -> Result<Self, FunctionalError>
    {
        perturbation.check_space(conj.domain())?;

        Ok(ConvexConjugateLinearPerturb {
            conj: conj.clone(),
            perturbation: perturbation.clone(),
        })
    }
}

impl<L: LinAlg> Functional<L> for ConvexConjugateLinearPerturb<L>
{
    fn domain(&self) -> &Space
    {
        self.conj.domain()
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        self.conj.evaluate(&(x - &self.perturbation)?)
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        self.conj.gradient(&(x - &self.perturbation)?)
    }

    /// \\(y + \mathrm{prox}\_{\sigma F^*}(x - y)\\).
    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        proximal_translation(&self.conj, sigma, &self.perturbation)
    }

    /// \\(F^{**} + \langle y, \cdot \rangle\\).
    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        let linear = InnerProductFunctional::new(&self.perturbation)?.into_ref();
        functional_add(&self.conj.convex_conj()?, &linear)
    }

    fn grad_lipschitz(&self) -> L::F
    {
        self.conj.grad_lipschitz()
    }
}
