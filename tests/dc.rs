use float_eq::assert_float_eq;
use convalg::prelude::*;
use convalg::*;

type La = FloatGeneric<f64>;
type AElement = Element<La>;
type ADcSolver = DcSolver<La>;

// min_x a/2 (x - b)^2 - |x| with a = 0.5, b = 0.5
// has the critical points b - 1/a, 0 and b + 1/a.
fn problem() -> (Space, FunctionalRef<La>, FunctionalRef<La>)
{
    let a = 0.5;
    let b = 0.5;
    let space = Space::rn(1);

    let g = functional_scale(
        &functional_translate(
            &L2NormSquared::<La>::new(&space).unwrap().into_ref(),
            &AElement::constant(&space, b),
        ).unwrap(),
        a / 2.,
    ).unwrap();
    let h = L1Norm::<La>::new(&space).unwrap().into_ref();

    (space, g, h)
}

fn dist(x: &AElement) -> f64
{
    let v = x.as_slice()[0];
    [-1.5, 0., 2.5].iter()
        .map(|e| (e - v).abs())
        .fold(f64::INFINITY, f64::min)
}

//

#[test]
fn test_dca()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let (space, g, h) = problem();
    let mut x = AElement::constant(&space, -0.5);

    dca(&mut x, &*g, &*h, 50).unwrap();

    assert_float_eq!(dist(&x), 0., abs <= 1e-6);
    assert_float_eq!(x.as_slice()[0], -1.5, abs <= 1e-6);
}

#[test]
fn test_prox_dca()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let (space, g, h) = problem();
    let mut x = AElement::constant(&space, -0.5);

    prox_dca(&mut x, &*g, &*h, 50, 1.).unwrap();

    assert_float_eq!(dist(&x), 0., abs <= 1e-6);
    assert_float_eq!(x.as_slice()[0], -1.5, abs <= 1e-6);
}

#[test]
fn test_doubleprox_dc()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let (space, g, h) = problem();
    let phi = ZeroFunctional::<La>::new(&space).unwrap();
    let k = IdentityOperator::<La>::new(&space);
    let mut x = AElement::constant(&space, -0.5);
    let mut y = AElement::constant(&space, 3.);

    doubleprox_dc(&mut x, &mut y, &*g, &*h, &phi, &k, 50, 1., 1.).unwrap();

    assert_float_eq!(dist(&x), 0., abs <= 1e-6);
    assert_float_eq!(x.as_slice()[0], 2.5, abs <= 1e-6);
    // dual variable stays in the unit ball
    assert_float_eq!(y.as_slice()[0], 1., abs <= 1e-6);
}

#[test]
fn test_doubleprox_dc_matop()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let (space, g, h) = problem();
    let phi = ZeroFunctional::<La>::new(&space).unwrap();
    let k = MatOp::<La>::new(&space, &space, vec![1.]);
    let mut x = AElement::constant(&space, -0.5);
    let mut y = AElement::constant(&space, 3.);

    let s = ADcSolver::new().par(|p| {
        p.niter = 60;
        p.log_period = 20;
    });
    let mut last = Vec::new();
    s.doubleprox_dc(&mut x, &mut y, &*g, &*h, &phi, &k, |i, x| {
        if i + 1 == 60 {
            last = x.as_slice().to_vec();
        }
    }).unwrap();

    assert_float_eq!(last.as_slice(), x.as_slice(), abs_all <= 0.);
    assert_float_eq!(dist(&x), 0., abs <= 1e-6);
}

#[test]
fn test_doubleprox_dc_orthant()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // h is the indicator of x >= 0, whose conjugate projects onto y <= 0
    let (space, g, _) = problem();
    let h = IndicatorNonnegativity::<La>::new(&space).unwrap();
    let phi = ZeroFunctional::<La>::new(&space).unwrap();
    let k = IdentityOperator::<La>::new(&space);
    let mut x = AElement::constant(&space, -0.5);
    let mut y = AElement::zero(&space);

    doubleprox_dc(&mut x, &mut y, &*g, &h, &phi, &k, 2, 1., 1.).unwrap();

    assert_float_eq!(x.as_slice()[0], -1. / 18., abs <= 1e-12);
    assert_float_eq!(y.as_slice()[0], -2. / 9., abs <= 1e-12);
}

#[test]
fn test_solver_domain_mismatch()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let (_, g, h) = problem();
    let mut x = AElement::constant(&Space::rn(2), -0.5);

    let r = ADcSolver::new().par(|p| p.niter = 5).prox_dca(&mut x, &*g, &*h, |_, _| {});
    assert!(matches!(r, Err(FunctionalError::DomainMismatch {..})));
}

#[test]
fn test_dca_without_conjugate()
{
    let (space, _, h) = problem();
    let g = functional_add(&h, &h).unwrap();
    let mut x = AElement::constant(&space, -0.5);

    let r = dca(&mut x, &*g, &*h, 5);
    assert!(matches!(r, Err(FunctionalError::Unsupported(_))));
    assert_float_eq!(x.as_slice()[0], -0.5, abs <= 0.);
}
