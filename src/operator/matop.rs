use num_traits::{NumCast, One, Zero};
use std::rc::Rc;
use crate::{Element, FunctionalError, LinAlg, Space};
use super::{Operator, OperatorRef};

//

/// Dense matrix operator
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Expresses a matrix \\(G \in {\bf R}^{m \times n}\\), stored in column-major,
/// as a linear operator from a space of \\(n\\) samples to a space of \\(m\\) samples.
/// The array is shared with the adjoint, which is \\(\frac{w_Y}{w_X} G^T\\)
/// for the cell volumes \\(w_X\\), \\(w_Y\\) of the domain and the range.
pub struct MatOp<L: LinAlg>
{
    domain: Space,
    range: Space,
    array: Rc<[L::F]>,
    transpose: bool,
    alpha: L::F,
}

impl<L: LinAlg> MatOp<L>
{
    /// Creates an instance.
    ///
    /// Returns [`MatOp`] instance.
    /// * `domain` is a space of \\(n\\) samples.
    /// * `range` is a space of \\(m\\) samples.
    /// * `array` is \\(G\\) in column-major. The length shall be \\(mn\\).
    ///
    /// # Panics
    ///
    /// Panics if the length of `array` is not \\(mn\\).
    pub fn new(domain: &Space, range: &Space, array: Vec<L::F>) -> Self
    {
        assert_eq!(array.len(), domain.len() * range.len());

        MatOp {
            domain: domain.clone(),
            range: range.clone(),
            array: array.into(),
            transpose: false,
            alpha: L::F::one(),
        }
    }

    /// Size of the operator matrix.
    ///
    /// Returns a tuple of \\(m\\) and \\(n\\).
    pub fn size(&self) -> (usize, usize)
    {
        (self.range.len(), self.domain.len())
    }

    fn weight_ratio(&self) -> L::F
    {
        let wx = <L::F as NumCast>::from(self.domain.cell_volume()).unwrap_or_else(L::F::one);
        let wy = <L::F as NumCast>::from(self.range.cell_volume()).unwrap_or_else(L::F::one);
        wy / wx
    }
}

impl<L: LinAlg> Operator<L> for MatOp<L>
{
    fn domain(&self) -> &Space
    {
        &self.domain
    }

    fn range(&self) -> &Space
    {
        &self.range
    }

    fn apply(&self, x: &Element<L>) -> Result<Element<L>, FunctionalError>
    {
        x.check_space(&self.domain)?;

        let mut y = Element::zero(&self.range);
        let (m, n) = self.size();
        if m > 0 && n > 0 {
            let (n_row, n_col) = if self.transpose {(n, m)} else {(m, n)};
            L::transform_ge(self.transpose, n_row, n_col, self.alpha, &self.array, x.as_slice(), L::F::zero(), y.as_mut_slice());
        }
        Ok(y)
    }

    fn is_linear(&self) -> bool
    {
        true
    }

    fn adjoint(&self) -> Result<OperatorRef<L>, FunctionalError>
    {
        Ok(Rc::new(MatOp::<L> {
            domain: self.range.clone(),
            range: self.domain.clone(),
            array: self.array.clone(),
            transpose: !self.transpose,
            alpha: self.alpha * self.weight_ratio(),
        }))
    }

    fn derivative(&self, _x: &Element<L>) -> Result<OperatorRef<L>, FunctionalError>
    {
        Ok(Rc::new(MatOp::<L> {
            domain: self.domain.clone(),
            range: self.range.clone(),
            array: self.array.clone(),
            transpose: self.transpose,
            alpha: self.alpha,
        }))
    }
}

//

#[test]
fn test_matop1()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let x_space = Space::rn(3);
    let y_space = Space::rn(2);
    let array = vec![ // column-major 2x3
        1., 4.,
        2., 5.,
        3., 6.,
    ];
    let op = MatOp::<L>::new(&x_space, &y_space, array);

    let x = Element::<L>::new(&x_space, vec![1., 0., -1.]).unwrap();
    let y = op.apply(&x).unwrap();
    assert_float_eq!(y.as_slice(), [-2., -2.].as_ref(), abs_all <= 1e-12);

    let adj = op.adjoint().unwrap();
    assert_eq!(adj.domain(), &y_space);
    assert_eq!(adj.range(), &x_space);

    let u = Element::<L>::new(&y_space, vec![1., -1.]).unwrap();
    let v = adj.apply(&u).unwrap();
    assert_float_eq!(v.as_slice(), [-3., -3., -3.].as_ref(), abs_all <= 1e-12);

    // <G x, u> == <x, G^T u>
    assert_float_eq!(y.inner(&u).unwrap(), x.inner(&v).unwrap(), abs <= 1e-12);

    assert!(op.apply(&u).is_err());
}

#[test]
fn test_matop_weighted_adjoint()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let x_space = Space::uniform_discr(&[0.], &[1.], &[2]);
    let y_space = Space::uniform_discr(&[0.], &[3.], &[2]);
    let op = MatOp::<L>::new(&x_space, &y_space, vec![1., 2., 3., 4.]);

    let x = Element::<L>::new(&x_space, vec![0.5, -1.]).unwrap();
    let u = Element::<L>::new(&y_space, vec![2., 1.]).unwrap();

    let lhs = op.apply(&x).unwrap().inner(&u).unwrap();
    let rhs = x.inner(&op.adjoint().unwrap().apply(&u).unwrap()).unwrap();
    assert_float_eq!(lhs, rhs, abs <= 1e-12);
}
