use float_eq::assert_float_eq;
use std::rc::Rc;
use convalg::prelude::*;
use convalg::*;
use convalg::proximal::proximal_translation;

type La = FloatGeneric<f64>;
type AElement = Element<La>;

fn space() -> Space
{
    Space::uniform_discr(&[0.], &[1.], &[4])
}

fn elem(space: &Space, v: &[f64]) -> AElement
{
    AElement::new(space, v.to_vec()).unwrap()
}

fn l2sq(space: &Space) -> FunctionalRef<La>
{
    L2NormSquared::<La>::new(space).unwrap().into_ref()
}

//

#[test]
fn test_left_scalar_mult()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let space = space();
    let f = l2sq(&space);
    let x = elem(&space, &[1., -2., 3., 0.5]);
    let c = 2.5;

    let cf = functional_scale(&f, c).unwrap();

    assert_float_eq!(cf.evaluate(&x).unwrap(), c * f.evaluate(&x).unwrap(), abs <= 1e-8);
    assert_float_eq!(cf.gradient(&x).unwrap().as_slice(), f.gradient(&x).unwrap().scaled(c).as_slice(), abs_all <= 1e-8);

    // (c F)* = c F*(. / c)
    let f_conj = f.convex_conj().unwrap();
    let cf_conj = cf.convex_conj().unwrap();
    assert_float_eq!(cf_conj.evaluate(&x).unwrap(), c * f_conj.evaluate(&x.scaled(1. / c)).unwrap(), abs <= 1e-8);

    // prox of c F with step s is prox of F with step s c
    let sigma = 0.7;
    let p1 = cf.proximal(sigma).unwrap().apply(&x).unwrap();
    let p2 = f.proximal(sigma * c).unwrap().apply(&x).unwrap();
    assert_float_eq!(p1.as_slice(), p2.as_slice(), abs_all <= 1e-8);

    let neg = functional_scale(&f, -1.).unwrap();
    assert!(matches!(neg.convex_conj(), Err(FunctionalError::InvalidScaling {..})));
    assert!(matches!(neg.proximal(sigma), Err(FunctionalError::InvalidScaling {..})));
}

#[test]
fn test_right_scalar_mult()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let space = space();
    let f = l2sq(&space);
    let x = elem(&space, &[1., -2., 3., 0.5]);
    let c = 1.5;

    let fc = functional_scale_arg(&f, c).unwrap();

    assert_float_eq!(fc.evaluate(&x).unwrap(), f.evaluate(&x.scaled(c)).unwrap(), abs <= 1e-8);
    assert_float_eq!(fc.gradient(&x).unwrap().as_slice(), f.gradient(&x.scaled(c)).unwrap().scaled(c).as_slice(), abs_all <= 1e-8);

    // (F c)* = F*(. / c)
    let f_conj = f.convex_conj().unwrap();
    let fc_conj = fc.convex_conj().unwrap();
    assert_float_eq!(fc_conj.evaluate(&x).unwrap(), f_conj.evaluate(&x.scaled(1. / c)).unwrap(), abs <= 1e-8);

    // prox_{s (F c)}(x) = prox_{s c^2 F}(c x) / c
    let sigma = 0.3;
    let p1 = fc.proximal(sigma).unwrap().apply(&x).unwrap();
    let p2 = f.proximal(sigma * c * c).unwrap().apply(&x.scaled(c)).unwrap().scaled(1. / c);
    assert_float_eq!(p1.as_slice(), p2.as_slice(), abs_all <= 1e-8);

    // closed form of ||c x||^2
    let p3 = x.scaled(1. / (1. + 2. * sigma * c * c));
    assert_float_eq!(p1.as_slice(), p3.as_slice(), abs_all <= 1e-8);

    let neg = functional_scale_arg(&f, -c).unwrap();
    assert!(matches!(neg.convex_conj(), Err(FunctionalError::InvalidScaling {..})));
    assert!(matches!(neg.proximal(sigma), Err(FunctionalError::InvalidScaling {..})));
}

#[test]
fn test_derivative()
{
    let space = space();
    let x = elem(&space, &[1., -2., 3., 0.5]);
    let p = elem(&space, &[0.5, 0.5, -1., 2.]);

    let funcs: Vec<FunctionalRef<La>> = vec![
        l2sq(&space),
        L1Norm::<La>::new(&space).unwrap().into_ref(),
        L2Norm::<La>::new(&space).unwrap().into_ref(),
        functional_scale(&l2sq(&space), 3.).unwrap(),
        functional_translate(&l2sq(&space), &p).unwrap(),
        functional_scale_arg(&l2sq(&space), -1.5).unwrap(),
    ];

    for f in funcs {
        let d = f.derivative(&x).unwrap().evaluate(&p).unwrap();
        let g = p.inner(&f.gradient(&x).unwrap()).unwrap();
        assert_float_eq!(d, g, abs <= 1e-8);
    }

    // (F c)'(x) p = c F'(c x) p
    let c = 1.5;
    let f = L1Norm::<La>::new(&space).unwrap().into_ref();
    let fc = functional_scale_arg(&f, c).unwrap();
    let d = fc.derivative(&x).unwrap().evaluate(&p).unwrap();
    let d_c = f.derivative(&x.scaled(c)).unwrap().evaluate(&p).unwrap();
    assert_float_eq!(d, c * d_c, abs <= 1e-8);
}

#[test]
fn test_translation()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let space = space();
    let f = l2sq(&space);
    let x = elem(&space, &[1., -2., 3., 0.5]);
    let y = elem(&space, &[-1., 0., 2., 1.]);
    let x_y = (&x - &y).unwrap();

    let ft = functional_translate(&f, &y).unwrap();

    assert_float_eq!(ft.evaluate(&x).unwrap(), f.evaluate(&x_y).unwrap(), abs <= 1e-8);
    assert_float_eq!(ft.gradient(&x).unwrap().as_slice(), f.gradient(&x_y).unwrap().as_slice(), abs_all <= 1e-8);

    let sigma = 0.4;
    let p1 = ft.proximal(sigma).unwrap().apply(&x).unwrap();
    let p2 = proximal_translation(&f, sigma, &y).unwrap().apply(&x).unwrap();
    assert_float_eq!(p1.as_slice(), p2.as_slice(), abs_all <= 1e-8);

    // y + (x - y) / (1 + 2 sigma)
    let p3 = AElement::lincomb(1., &y, 1. / (1. + 2. * sigma), &x_y).unwrap();
    assert_float_eq!(p1.as_slice(), p3.as_slice(), abs_all <= 1e-8);

    // (F(. - y))* = F* + <., y>
    let conj = ft.convex_conj().unwrap();
    let expected = ConvexConjugateTranslation::new(&f.convex_conj().unwrap(), &y).unwrap();
    assert_float_eq!(conj.evaluate(&x).unwrap(), expected.evaluate(&x).unwrap(), abs <= 1e-8);
    assert_float_eq!(conj.evaluate(&x).unwrap(), 0.25 * x.norm().powi(2) + x.inner(&y).unwrap(), abs <= 1e-8);

    let other = AElement::zero(&Space::rn(4));
    assert!(matches!(functional_translate(&f, &other), Err(FunctionalError::DomainMismatch {..})));
}

#[test]
fn test_sum()
{
    let space = space();
    let f = l2sq(&space);
    let g: FunctionalRef<La> = L1Norm::<La>::new(&space).unwrap().into_ref();
    let x = elem(&space, &[1., -2., 3., 0.5]);

    let fg = functional_add(&f, &g).unwrap();

    assert_float_eq!(fg.evaluate(&x).unwrap(), f.evaluate(&x).unwrap() + g.evaluate(&x).unwrap(), abs <= 1e-8);

    let grad = (&f.gradient(&x).unwrap() + &g.gradient(&x).unwrap()).unwrap();
    assert_float_eq!(fg.gradient(&x).unwrap().as_slice(), grad.as_slice(), abs_all <= 1e-8);

    assert!(matches!(fg.proximal(1.), Err(FunctionalError::Unsupported(_))));
    assert!(matches!(fg.convex_conj(), Err(FunctionalError::Unsupported(_))));

    let h: FunctionalRef<La> = L1Norm::<La>::new(&Space::rn(4)).unwrap().into_ref();
    assert!(matches!(functional_add(&f, &h), Err(FunctionalError::DomainMismatch {..})));
}

#[test]
fn test_scalar_sum()
{
    let space = space();
    let f = l2sq(&space);
    let x = elem(&space, &[1., -2., 3., 0.5]);
    let c = -1.25;

    let fc = functional_add_scalar(&f, c).unwrap();

    assert_float_eq!(fc.evaluate(&x).unwrap(), f.evaluate(&x).unwrap() + c, abs <= 1e-8);
    assert_float_eq!(fc.gradient(&x).unwrap().as_slice(), f.gradient(&x).unwrap().as_slice(), abs_all <= 1e-8);

    let p1 = fc.proximal(0.5).unwrap().apply(&x).unwrap();
    let p2 = f.proximal(0.5).unwrap().apply(&x).unwrap();
    assert_float_eq!(p1.as_slice(), p2.as_slice(), abs_all <= 1e-8);

    // (F + c)* = F* - c
    let fc_conj = fc.convex_conj().unwrap();
    let f_conj = f.convex_conj().unwrap();
    assert_float_eq!(fc_conj.evaluate(&x).unwrap(), f_conj.evaluate(&x).unwrap() - c, abs <= 1e-8);
    assert_float_eq!(fc_conj.gradient(&x).unwrap().as_slice(), f_conj.gradient(&x).unwrap().as_slice(), abs_all <= 1e-8);

    let complex = Scalar::Complex {re: 1., im: 1.};
    assert!(matches!(functional_add_scalar(&f, complex), Err(FunctionalError::TypeMismatch(_))));
    assert!(matches!(functional_scale(&f, complex), Err(FunctionalError::TypeMismatch(_))));
}

#[test]
fn test_composition()
{
    let space = space();
    let f = l2sq(&space);
    let x = elem(&space, &[1., -2., 3., 0.5]);
    let s = -3.;

    let op: OperatorRef<La> = Rc::new(ScalingOperator::<La>::new(&space, s));
    let fop = functional_compose(&f, &op).unwrap();

    assert_float_eq!(fop.evaluate(&x).unwrap(), f.evaluate(&x.scaled(s)).unwrap(), abs <= 1e-8);
    // 2 s^2 x
    assert_float_eq!(fop.gradient(&x).unwrap().as_slice(), x.scaled(2. * s * s).as_slice(), abs_all <= 1e-8);

    assert!(matches!(fop.proximal(1.), Err(FunctionalError::Unsupported(_))));
    assert!(matches!(fop.convex_conj(), Err(FunctionalError::Unsupported(_))));

    let other: OperatorRef<La> = Rc::new(IdentityOperator::<La>::new(&Space::rn(4)));
    assert!(matches!(functional_compose(&f, &other), Err(FunctionalError::DomainMismatch {..})));
}

#[test]
fn test_composition_matop()
{
    let x_space = Space::rn(2);
    let y_space = Space::rn(3);
    let op: OperatorRef<La> = Rc::new(MatOp::<La>::new(&x_space, &y_space, vec![
        1., 0., 2.,
        0., 1., -1.,
    ]));
    let f: FunctionalRef<La> = L2NormSquared::<La>::new(&y_space).unwrap().into_ref();
    let fop = functional_compose(&f, &op).unwrap();

    let x = elem(&x_space, &[1., 2.]);
    // A x = [1, 2, 0]
    assert_float_eq!(fop.evaluate(&x).unwrap(), 5., abs <= 1e-8);
    // A^T 2 A x = [2, 4]
    assert_float_eq!(fop.gradient(&x).unwrap().as_slice(), [2., 4.].as_ref(), abs_all <= 1e-8);
}

#[test]
fn test_vector_mult()
{
    let space = space();
    let f = l2sq(&space);
    let x = elem(&space, &[1., -2., 3., 0.5]);
    let y = elem(&space, &[2., 0., -1., 4.]);

    let right = functional_right_vector_mult(&f, &y).unwrap();
    assert_eq!(right.range(), &Space::real_numbers());
    let v = right.apply(&x).unwrap();
    assert_float_eq!(v.as_slice()[0], f.evaluate(&y.multiply(&x).unwrap()).unwrap(), abs <= 1e-8);

    // linearization at x is p -> <grad F(y x), y p>, with an adjoint
    let p = elem(&space, &[0., 1., -1., 0.5]);
    let d = right.derivative(&x).unwrap();
    assert!(d.is_linear());
    let grad = f.gradient(&y.multiply(&x).unwrap()).unwrap();
    let dp = d.apply(&p).unwrap();
    assert_float_eq!(dp.as_slice()[0], grad.inner(&y.multiply(&p).unwrap()).unwrap(), abs <= 1e-8);
    let t = AElement::new(&Space::real_numbers(), vec![2.]).unwrap();
    let adj_t = d.adjoint().unwrap().apply(&t).unwrap();
    assert_float_eq!(dp.inner(&t).unwrap(), p.inner(&adj_t).unwrap(), abs <= 1e-8);

    let other = elem(&Space::rn(2), &[1., -1.]);
    assert!(matches!(functional_right_vector_mult(&f, &other), Err(FunctionalError::DomainMismatch {..})));

    // any space for the left vector
    let left = functional_left_vector_mult(&f, &other);
    assert_eq!(left.domain(), &space);
    assert_eq!(left.range(), &Space::rn(2));
    let w = left.apply(&x).unwrap();
    let fx = f.evaluate(&x).unwrap();
    assert_float_eq!(w.as_slice(), [fx, -fx].as_ref(), abs_all <= 1e-8);

    // d/dx F(x) y at x in direction p is <grad F(x), p> y
    let p = elem(&space, &[0., 1., 0., 0.]);
    let d = left.derivative(&x).unwrap().apply(&p).unwrap();
    let dp = p.inner(&f.gradient(&x).unwrap()).unwrap();
    assert_float_eq!(d.as_slice(), [dp, -dp].as_ref(), abs_all <= 1e-8);
}

#[test]
fn test_complex_space()
{
    let space = Space::cn(3);

    assert!(matches!(L1Norm::<La>::new(&space), Err(FunctionalError::TypeMismatch(_))));
    assert!(matches!(ZeroFunctional::<La>::new(&space), Err(FunctionalError::TypeMismatch(_))));
    assert!(matches!(ConstantFunctional::<La>::new(&Space::rn(3), Scalar::Complex {re: 0., im: 1.}), Err(FunctionalError::TypeMismatch(_))));
}

#[test]
fn test_domain_mismatch_evaluate()
{
    let f = l2sq(&space());
    let x = AElement::zero(&Space::rn(4));

    assert!(matches!(f.evaluate(&x), Err(FunctionalError::DomainMismatch {..})));
    assert!(matches!(functional_scale(&f, 2.).unwrap().gradient(&x), Err(FunctionalError::DomainMismatch {..})));
}
