use float_eq::assert_float_eq;
use convalg::prelude::*;
use convalg::*;

type La = FloatGeneric<f64>;
type AElement = Element<La>;

fn setup() -> (Space, FunctionalRef<La>, AElement, AElement)
{
    let space = Space::rn(3);
    // conjugate of ||.||^2, that is ||.||^2 / 4
    let f_conj = L2NormSquared::<La>::new(&space).unwrap().convex_conj().unwrap();
    let x = AElement::new(&space, vec![1., -2., 0.5]).unwrap();
    let y = AElement::new(&space, vec![3., 1., -1.]).unwrap();

    (space, f_conj, x, y)
}

//

#[test]
fn test_cc_translation()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let (_, f_conj, x, y) = setup();
    let sigma = 1.2;

    let cc = ConvexConjugateTranslation::new(&f_conj, &y).unwrap();

    let sq = x.norm().powi(2);
    assert_float_eq!(cc.evaluate(&x).unwrap(), sq / 4. + x.inner(&y).unwrap(), abs <= 1e-8);

    let grad = AElement::lincomb(0.5, &x, 1., &y).unwrap();
    assert_float_eq!(cc.gradient(&x).unwrap().as_slice(), grad.as_slice(), abs_all <= 1e-8);

    let prox = AElement::lincomb(1., &x, -sigma, &y).unwrap().scaled(1. / (sigma / 2. + 1.));
    assert_float_eq!(cc.proximal(sigma).unwrap().apply(&x).unwrap().as_slice(), prox.as_slice(), abs_all <= 1e-8);

    // biconjugate is ||. - y||^2
    let bi = cc.convex_conj().unwrap();
    assert_float_eq!(bi.evaluate(&x).unwrap(), (&x - &y).unwrap().norm().powi(2), abs <= 1e-8);

    let other = AElement::zero(&Space::rn(2));
    assert!(matches!(ConvexConjugateTranslation::new(&f_conj, &other), Err(FunctionalError::DomainMismatch {..})));
}

#[test]
fn test_cc_arg_scaling()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let (_, f_conj, x, _) = setup();
    let sigma = 1.2;

    for s in [2.5, -0.5] {
        let cc = ConvexConjugateArgScaling::new(&f_conj, s).unwrap();

        let sq = x.norm().powi(2);
        assert_float_eq!(cc.evaluate(&x).unwrap(), sq / (4. * s * s), abs <= 1e-8);
        assert_float_eq!(cc.gradient(&x).unwrap().as_slice(), x.scaled(1. / (2. * s * s)).as_slice(), abs_all <= 1e-8);

        let prox = x.scaled(1. / (sigma / (2. * s * s) + 1.));
        assert_float_eq!(cc.proximal(sigma).unwrap().apply(&x).unwrap().as_slice(), prox.as_slice(), abs_all <= 1e-8);
    }

    assert!(matches!(ConvexConjugateArgScaling::new(&f_conj, 0.), Err(FunctionalError::InvalidScaling {..})));
}

#[test]
fn test_cc_func_scaling()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let (_, f_conj, x, _) = setup();
    let sigma = 1.2;
    let s = 2.5;

    let cc = ConvexConjugateFuncScaling::new(&f_conj, s).unwrap();

    let sq = x.norm().powi(2);
    assert_float_eq!(cc.evaluate(&x).unwrap(), sq / (4. * s), abs <= 1e-8);
    assert_float_eq!(cc.gradient(&x).unwrap().as_slice(), x.scaled(1. / (2. * s)).as_slice(), abs_all <= 1e-8);

    let prox = x.scaled(1. / (sigma / (2. * s) + 1.));
    assert_float_eq!(cc.proximal(sigma).unwrap().apply(&x).unwrap().as_slice(), prox.as_slice(), abs_all <= 1e-8);

    // biconjugate is s ||.||^2
    let bi = cc.convex_conj().unwrap();
    assert_float_eq!(bi.evaluate(&x).unwrap(), s * sq, abs <= 1e-8);

    assert!(matches!(ConvexConjugateFuncScaling::new(&f_conj, 0.), Err(FunctionalError::InvalidScaling {..})));
    assert!(matches!(ConvexConjugateFuncScaling::new(&f_conj, -1.), Err(FunctionalError::InvalidScaling {..})));
}

#[test]
fn test_cc_linear_perturb()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let (_, f_conj, x, y) = setup();
    let sigma = 1.2;

    let cc = ConvexConjugateLinearPerturb::new(&f_conj, &y).unwrap();
    let x_y = (&x - &y).unwrap();

    assert_float_eq!(cc.evaluate(&x).unwrap(), x_y.norm().powi(2) / 4., abs <= 1e-8);
    assert_float_eq!(cc.gradient(&x).unwrap().as_slice(), x_y.scaled(0.5).as_slice(), abs_all <= 1e-8);

    let prox = AElement::lincomb(2., &x, sigma, &y).unwrap().scaled(1. / (sigma + 2.));
    assert_float_eq!(cc.proximal(sigma).unwrap().apply(&x).unwrap().as_slice(), prox.as_slice(), abs_all <= 1e-8);

    // biconjugate is ||.||^2 + <y, .>
    let bi = cc.convex_conj().unwrap();
    assert_float_eq!(bi.evaluate(&x).unwrap(), x.norm().powi(2) + x.inner(&y).unwrap(), abs <= 1e-8);

    let other = AElement::zero(&Space::rn(2));
    assert!(matches!(ConvexConjugateLinearPerturb::new(&f_conj, &other), Err(FunctionalError::DomainMismatch {..})));
}

#[test]
fn test_library_conjugates()
{
    let space = Space::rn(3);
    let x = AElement::new(&space, vec![0.5, -0.25, 1.]).unwrap();
    let far = AElement::new(&space, vec![2., 0., 0.]).unwrap();

    // 1-norm and the max-norm ball
    let l1 = L1Norm::<La>::new(&space).unwrap();
    let l1_conj = l1.convex_conj().unwrap();
    assert_float_eq!(l1_conj.evaluate(&x).unwrap(), 0., abs <= 1e-12);
    assert!(l1_conj.evaluate(&far).unwrap().is_infinite());

    // 2-norm and the 2-norm ball
    let l2 = L2Norm::<La>::new(&space).unwrap();
    let l2_conj = l2.convex_conj().unwrap();
    assert!(l2_conj.evaluate(&x).unwrap().is_infinite()); // |x| = 1.146
    assert_float_eq!(l2_conj.evaluate(&x.scaled(0.5)).unwrap(), 0., abs <= 1e-12);
    assert_float_eq!(l2_conj.convex_conj().unwrap().evaluate(&far).unwrap(), 2., abs <= 1e-12);

    // zero and the indicator of the origin
    let zero = ZeroFunctional::<La>::new(&space).unwrap();
    let ind = zero.convex_conj().unwrap();
    assert!(ind.evaluate(&x).unwrap().is_infinite());
    assert_float_eq!(ind.evaluate(&AElement::zero(&space)).unwrap(), 0., abs <= 1e-12);
    assert_float_eq!(ind.proximal(1.).unwrap().apply(&x).unwrap().as_slice(), [0., 0., 0.].as_ref(), abs_all <= 1e-12);

    // constant c and the indicator of the origin minus c
    let cst = ConstantFunctional::<La>::new(&space, 3.).unwrap();
    let cst_conj = cst.convex_conj().unwrap();
    assert_float_eq!(cst_conj.evaluate(&AElement::zero(&space)).unwrap(), -3., abs <= 1e-12);

    // linear and the indicator of its gradient
    let lin = InnerProductFunctional::new(&x).unwrap();
    let lin_conj = lin.convex_conj().unwrap();
    assert_float_eq!(lin_conj.evaluate(&x).unwrap(), 0., abs <= 1e-12);
    assert!(lin_conj.evaluate(&far).unwrap().is_infinite());
    let p = lin.proximal(2.).unwrap().apply(&far).unwrap();
    assert_float_eq!(p.as_slice(), [1., 0.5, -2.].as_ref(), abs_all <= 1e-12);

    // nonnegative orthant and nonpositive orthant
    let nonneg = IndicatorNonnegativity::<La>::new(&space).unwrap();
    assert!(nonneg.evaluate(&x).unwrap().is_infinite());
    assert_float_eq!(nonneg.proximal(1.).unwrap().apply(&x).unwrap().as_slice(), [0.5, 0., 1.].as_ref(), abs_all <= 1e-12);
    let nonpos = nonneg.convex_conj().unwrap();
    assert_float_eq!(nonpos.evaluate(&far.scaled(-1.)).unwrap(), 0., abs <= 1e-12);
    assert!(nonpos.evaluate(&far).unwrap().is_infinite());
    assert_float_eq!(nonpos.proximal(1.).unwrap().apply(&x).unwrap().as_slice(), [0., -0.25, 0.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_fenchel_young_weighted()
{
    // Fenchel-Young equality F(x) + F*(g) = <x, g> for g = grad F(x)
    let space = Space::uniform_discr(&[0., 0.], &[2., 1.], &[2, 2]);
    let x = AElement::new(&space, vec![1., -2., 0.5, 3.]).unwrap();

    let funcs: Vec<FunctionalRef<La>> = vec![
        L1Norm::<La>::new(&space).unwrap().into_ref(),
        L2NormSquared::<La>::new(&space).unwrap().into_ref(),
    ];

    for f in funcs {
        let g = f.gradient(&x).unwrap();
        let lhs = f.evaluate(&x).unwrap() + f.convex_conj().unwrap().evaluate(&g).unwrap();
        assert_float_eq!(lhs, x.inner(&g).unwrap(), abs <= 1e-8);
    }
}
