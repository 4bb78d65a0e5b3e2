use std::rc::Rc;
use crate::{Element, FunctionalError, LinAlg, OperatorRef, Space};
use crate::proximal::proximal_translation;
use super::{Functional, FunctionalRef, ConvexConjugateTranslation};

/// Translated functional \\(x \mapsto F(x - y)\\).
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
pub struct FunctionalTranslation<L: LinAlg>
{
    func: FunctionalRef<L>,
    translation: Element<L>,
}

impl<L: LinAlg> FunctionalTranslation<L>
{
    /// Creates an instance.
    ///
    /// Returns [`FunctionalTranslation`] instance,
    /// or [`FunctionalError::DomainMismatch`] if `translation` is not in the domain of `func`.
    pub fn new(func: &FunctionalRef<L>, translation: &Element<L>) -> Result<Self, FunctionalError>
    {
        translation.check_space(func.domain())?;

        Ok(FunctionalTranslation {
            func: func.clone(),
            translation: translation.clone(),
        })
    }

    pub fn translation(&self) -> &Element<L>
    {
        &self.translation
    }
}

impl<L: LinAlg> Functional<L> for FunctionalTranslation<L>
{
    fn domain(&self) -> &Space
    {
        self.func.domain()
    }

    fn evaluate(&self, x: &Element<L>) -> Result<L::F, FunctionalError>
    {
        self.func.evaluate(&(x - &self.translation)?)
    }

    fn gradient(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        self.func.gradient(&(x - &self.translation)?)
    }

    /// \\(\mathrm{prox}\_{\sigma F(\cdot - y)}(x) = y + \mathrm{prox}\_{\sigma F}(x - y)\\).
    fn proximal(&self, sigma: L::F) -> Result<OperatorRef<L>, FunctionalError>
    {
        proximal_translation(&self.func, sigma, &self.translation)
    }

    fn convex_conj(&self) -> Result<FunctionalRef<L>, FunctionalError>
    {
        Ok(Rc::new(ConvexConjugateTranslation::new(&self.func.convex_conj()?, &self.translation)?))
    }

    fn grad_lipschitz(&self) -> L::F
    {
        self.func.grad_lipschitz()
    }
}
