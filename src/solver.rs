//! Difference-of-convex solvers

use num_traits::{Float, Zero};
use crate::{Element, Functional, FunctionalError, LinAlg, Operator};

//

/// Solver parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DcParam<F: Float>
{
    /// Number of iterations. There is no other termination criterion.
    pub niter: usize,
    /// Primal step size, shall be positive.
    pub gamma: F,
    /// Dual step size of [`DcSolver::doubleprox_dc`], shall be positive.
    pub mu: F,
    /// Period of iterations to output progress log(for debug/trace level).
    pub log_period: usize,
}

impl<F: Float> Default for DcParam<F>
{
    fn default() -> Self
    {
        DcParam {
            niter: 100,
            gamma: F::one(),
            mu: F::one(),
            log_period: 10,
        }
    }
}

//

/// Difference-of-convex solver
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Heuristically minimizes \\(g(x) - h(x)\\) for proper, convex and lower semicontinuous
/// functionals \\(g\\), \\(h\\), updating the solution in place
/// for exactly [`DcParam::niter`] iterations.
///
/// Each method calls `callback` with the iteration number and the current solution
/// after every iteration.
pub struct DcSolver<L: LinAlg>
{
    /// solver parameters.
    pub par: DcParam<L::F>,
}

impl<L: LinAlg> DcSolver<L>
{
    /// Creates an instance.
    ///
    /// Returns [`DcSolver`] instance.
    pub fn new() -> Self
    {
        DcSolver {
            par: DcParam::default(),
        }
    }

    /// Changes solver parameters.
    ///
    /// Returns [`DcSolver`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut DcParam<L::F>)
    {
        f(&mut self.par);
        self
    }
}

impl<L: LinAlg> Default for DcSolver<L>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<L: LinAlg> DcSolver<L>
{
    fn check_step(name: &str, step: L::F) -> Result<(), FunctionalError>
    {
        if step > L::F::zero() {
            Ok(())
        }
        else {
            log::error!("{} {:e} must be positive", name, step);
            Err(FunctionalError::invalid_scaling(step, "step size must be positive"))
        }
    }

    fn log_iter(&self, i: usize, step: L::F)
    {
        let log_trig = if self.par.log_period > 0 {
            i % self.par.log_period == 0
        }
        else {
            if i == 0 && log::log_enabled!(log::Level::Debug) {
                log::warn!("log_period == 0: no periodic log");
            }
            false
        };

        if log_trig || i + 1 == self.par.niter {
            log::debug!("{}: step {:.2e}", i, step);
        }
        else {
            log::trace!("{}: step {:.2e}", i, step);
        }
    }

    // Replaces x and returns the norm of the change.
    fn update(x: &mut Element<L>, x_new: &Element<L>) -> Result<L::F, FunctionalError>
    {
        let step = (x_new - &*x)?.norm();
        x.assign(x_new)?;
        Ok(step)
    }

    fn iterate<S>(&self, mut step_fn: S) -> Result<(), FunctionalError>
    where S: FnMut(usize) -> Result<L::F, FunctionalError>
    {
        log::info!("----- Started");
        for i in 0.. self.par.niter {
            let step = step_fn(i).map_err(|e| {
                log::error!("{}: {}", i, e);
                e
            })?;
            self.log_iter(i, step);
        }
        log::info!("----- Finished");
        Ok(())
    }

    /// DC algorithm.
    ///
    /// Iterates \\(x \leftarrow \nabla g^*(v)\\) with \\(v = \nabla h(x)\\),
    /// i.e. \\(x \leftarrow \arg\min_z g(z) - \langle v, z \rangle\\).
    /// The gradient of \\(h\\) may be a subgradient.
    ///
    /// Returns `Ok(())` after the iterations,
    /// or the first error raised by \\(g\\), \\(h\\) or the elements.
    pub fn dca<C>(&self, x: &mut Element<L>, g: &dyn Functional<L>, h: &dyn Functional<L>, mut callback: C) -> Result<(), FunctionalError>
    where C: FnMut(usize, &Element<L>)
    {
        log::debug!("{:?}", self.par);

        let g_conj = g.convex_conj().map_err(|e| {
            log::error!("convex conjugate of g: {}", e);
            e
        })?;

        self.iterate(|i| {
            let v = h.gradient(x)?;
            let x_new = g_conj.gradient(&v)?;
            let step = Self::update(x, &x_new)?;
            callback(i, x);
            Ok(step)
        })
    }

    /// Proximal DC algorithm.
    ///
    /// Iterates \\(x \leftarrow \mathrm{prox}\_{\gamma g}(x + \gamma \nabla h(x))\\)
    /// with \\(\gamma\\) = [`DcParam::gamma`].
    ///
    /// Returns `Ok(())` after the iterations,
    /// or the first error raised by \\(g\\), \\(h\\) or the elements.
    pub fn prox_dca<C>(&self, x: &mut Element<L>, g: &dyn Functional<L>, h: &dyn Functional<L>, mut callback: C) -> Result<(), FunctionalError>
    where C: FnMut(usize, &Element<L>)
    {
        log::debug!("{:?}", self.par);

        let gamma = self.par.gamma;
        Self::check_step("gamma", gamma)?;

        let prox_g = g.proximal(gamma).map_err(|e| {
            log::error!("proximal of g: {}", e);
            e
        })?;

        self.iterate(|i| {
            let mut z = x.clone();
            z.add_scaled(gamma, &h.gradient(x)?)?;
            let x_new = prox_g.apply(&z)?;
            let step = Self::update(x, &x_new)?;
            callback(i, x);
            Ok(step)
        })
    }

    /// Double-proximal DC algorithm.
    ///
    /// Heuristically minimizes \\(g(x) + \varphi(x) - h(K x)\\)
    /// with a linear operator \\(K\\) and a differentiable \\(\varphi\\),
    /// together with the dual variable \\(y\\) of the Toland dual problem:
    /// \\[
    /// \begin{array}{l}
    /// x \leftarrow \mathrm{prox}\_{\gamma g}(x + \gamma (K^* y - \nabla \varphi(x))), \\\\
    /// y \leftarrow \mathrm{prox}\_{\mu h^*}(y + \mu K x),
    /// \end{array}
    /// \\]
    /// where \\(\gamma\\) = [`DcParam::gamma`] and \\(\mu\\) = [`DcParam::mu`].
    ///
    /// Returns `Ok(())` after the iterations,
    /// or the first error raised by the functionals, `k` or the elements.
    #[allow(clippy::too_many_arguments)]
    pub fn doubleprox_dc<C>(&self, x: &mut Element<L>, y: &mut Element<L>, g: &dyn Functional<L>, h: &dyn Functional<L>, phi: &dyn Functional<L>, k: &dyn Operator<L>, mut callback: C) -> Result<(), FunctionalError>
    where C: FnMut(usize, &Element<L>)
    {
        log::debug!("{:?}", self.par);

        let gamma = self.par.gamma;
        let mu = self.par.mu;
        Self::check_step("gamma", gamma)?;
        Self::check_step("mu", mu)?;

        let prep = || -> Result<_, FunctionalError> {
            Ok((g.proximal(gamma)?, h.convex_conj()?.proximal(mu)?, k.adjoint()?))
        };
        let (prox_g, prox_h_conj, k_adj) = prep().map_err(|e| {
            log::error!("{}", e);
            e
        })?;

        self.iterate(|i| {
            let mut z = x.clone();
            z.add_scaled(gamma, &k_adj.apply(y)?)?;
            z.add_scaled(-gamma, &phi.gradient(x)?)?;
            let x_new = prox_g.apply(&z)?;
            let step = Self::update(x, &x_new)?;

            let mut w = y.clone();
            w.add_scaled(mu, &k.apply(x)?)?;
            let y_new = prox_h_conj.apply(&w)?;
            y.assign(&y_new)?;

            log::trace!("{}: y {:?}", i, y.as_slice());
            callback(i, x);
            Ok(step)
        })
    }
}

//

/// Runs [`DcSolver::dca`] for `niter` iterations.
pub fn dca<L: LinAlg>(x: &mut Element<L>, g: &dyn Functional<L>, h: &dyn Functional<L>, niter: usize) -> Result<(), FunctionalError>
{
    DcSolver::<L>::new()
        .par(|p| p.niter = niter)
        .dca(x, g, h, |_, _| {})
}

/// Runs [`DcSolver::prox_dca`] for `niter` iterations with the step size `gamma`.
pub fn prox_dca<L: LinAlg>(x: &mut Element<L>, g: &dyn Functional<L>, h: &dyn Functional<L>, niter: usize, gamma: L::F) -> Result<(), FunctionalError>
{
    DcSolver::<L>::new()
        .par(|p| {
            p.niter = niter;
            p.gamma = gamma;
        })
        .prox_dca(x, g, h, |_, _| {})
}

/// Runs [`DcSolver::doubleprox_dc`] for `niter` iterations with the step sizes `gamma` and `mu`.
#[allow(clippy::too_many_arguments)]
pub fn doubleprox_dc<L: LinAlg>(x: &mut Element<L>, y: &mut Element<L>, g: &dyn Functional<L>, h: &dyn Functional<L>, phi: &dyn Functional<L>, k: &dyn Operator<L>, niter: usize, gamma: L::F, mu: L::F) -> Result<(), FunctionalError>
{
    DcSolver::<L>::new()
        .par(|p| {
            p.niter = niter;
            p.gamma = gamma;
            p.mu = mu;
        })
        .doubleprox_dc(x, y, g, h, phi, k, |_, _| {})
}

//

#[test]
fn test_invalid_step()
{
    use crate::{FloatGeneric, L1Norm, L2NormSquared, Space};

    type L = FloatGeneric<f64>;

    let space = Space::rn(1);
    let g = L2NormSquared::<L>::new(&space).unwrap();
    let h = L1Norm::<L>::new(&space).unwrap();
    let mut x = Element::<L>::zero(&space);

    let r = prox_dca(&mut x, &g, &h, 10, 0.);
    assert!(matches!(r, Err(FunctionalError::InvalidScaling {..})));
}

#[test]
fn test_callback_count()
{
    use crate::{FloatGeneric, L1Norm, L2NormSquared, Space};

    type L = FloatGeneric<f64>;

    let space = Space::rn(1);
    let g = L2NormSquared::<L>::new(&space).unwrap();
    let h = L1Norm::<L>::new(&space).unwrap();
    let mut x = Element::<L>::constant(&space, 1.);

    let mut count = 0;
    DcSolver::<L>::new()
        .par(|p| p.niter = 7)
        .dca(&mut x, &g, &h, |i, _| {
            assert_eq!(i, count);
            count += 1;
        })
        .unwrap();
    assert_eq!(count, 7);
}
