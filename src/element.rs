//! Vector space elements

use num_traits::{Float, NumCast, One, Zero};
use core::fmt::{self, Debug};
use core::ops::{Add, Mul, Neg, Sub};
use crate::{FunctionalError, LinAlg, Space};

/// A point of a [`Space`].
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// The shape is fixed by the space; the values may be mutated in place.
/// Binary operations require both operands to belong to the same space
/// and fail with [`FunctionalError::DomainMismatch`] otherwise.
///
/// `&x + &y` and `&x - &y` return `Result`, `&x * a` scales by a scalar.
pub struct Element<L: LinAlg>
{
    space: Space,
    data: Vec<L::F>,
}

impl<L: LinAlg> Element<L>
{
    /// Creates an element from raw values.
    ///
    /// Returns [`Element`] instance,
    /// or [`FunctionalError::LengthMismatch`] if `data` does not fit `space`.
    pub fn new(space: &Space, data: Vec<L::F>) -> Result<Self, FunctionalError>
    {
        if data.len() != space.len() {
            return Err(FunctionalError::LengthMismatch {
                len: data.len(),
                space: space.clone(),
            });
        }

        Ok(Element {
            space: space.clone(),
            data,
        })
    }

    /// Zero element of `space`.
    pub fn zero(space: &Space) -> Self
    {
        Self::constant(space, L::F::zero())
    }

    /// Element of `space` with all values set to `value`.
    pub fn constant(space: &Space, value: L::F) -> Self
    {
        Element {
            space: space.clone(),
            data: vec![value; space.len()],
        }
    }

    pub fn space(&self) -> &Space
    {
        &self.space
    }

    pub fn len(&self) -> usize
    {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[L::F]
    {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut[L::F]
    {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<L::F>
    {
        self.data
    }

    /// Inner product weight, the cell volume of the space.
    pub(crate) fn weight(&self) -> L::F
    {
        <L::F as NumCast>::from(self.space.cell_volume()).unwrap_or_else(L::F::one)
    }

    /// Fails with [`FunctionalError::DomainMismatch`] unless this element belongs to `space`.
    pub fn check_space(&self, space: &Space) -> Result<(), FunctionalError>
    {
        space.check(&self.space)
    }

    /// Overwrites all values with those of `x`.
    pub fn assign(&mut self, x: &Self) -> Result<(), FunctionalError>
    {
        self.space.check(&x.space)?;
        L::copy(&x.data, &mut self.data);
        Ok(())
    }

    /// Calculates \\(\alpha x + \mathtt{self}\\) in place.
    pub fn add_scaled(&mut self, alpha: L::F, x: &Self) -> Result<(), FunctionalError>
    {
        self.space.check(&x.space)?;
        L::add(alpha, &x.data, &mut self.data);
        Ok(())
    }

    /// Calculates \\(\alpha\ \mathtt{self}\\) in place.
    pub fn scale(&mut self, alpha: L::F)
    {
        L::scale(alpha, &mut self.data);
    }

    /// Returns \\(\alpha\ \mathtt{self}\\).
    pub fn scaled(&self, alpha: L::F) -> Self
    {
        let mut z = self.clone();
        z.scale(alpha);
        z
    }

    /// Returns \\(a x + b y\\) in the common space of `x` and `y`.
    pub fn lincomb(a: L::F, x: &Self, b: L::F, y: &Self) -> Result<Self, FunctionalError>
    {
        x.space.check(&y.space)?;

        let mut z = x.scaled(a);
        L::add(b, &y.data, &mut z.data);
        Ok(z)
    }

    /// Pointwise product.
    pub fn multiply(&self, other: &Self) -> Result<Self, FunctionalError>
    {
        self.space.check(&other.space)?;

        let f0 = L::F::zero();
        let f1 = L::F::one();

        let mut z = Self::zero(&self.space);
        L::transform_di(f1, &self.data, &other.data, f0, &mut z.data);
        Ok(z)
    }

    /// Applies `m` to every value.
    pub fn map<M: Fn(L::F) -> L::F>(&self, m: M) -> Self
    {
        Element {
            space: self.space.clone(),
            data: self.data.iter().map(|v| m(*v)).collect(),
        }
    }

    /// Weighted inner product \\(\langle \mathtt{self}, y \rangle\\).
    pub fn inner(&self, other: &Self) -> Result<L::F, FunctionalError>
    {
        self.space.check(&other.space)?;

        Ok(self.weight() * L::inner(&self.data, &other.data))
    }

    /// Norm induced by [`Element::inner`].
    pub fn norm(&self) -> L::F
    {
        self.weight().sqrt() * L::norm(&self.data)
    }

    /// Unweighted sum of absolute values.
    pub(crate) fn abssum(&self) -> L::F
    {
        L::abssum(&self.data, 1)
    }

    /// Cell-volume weighted sum of absolute values.
    pub(crate) fn weighted_abssum(&self) -> L::F
    {
        self.weight() * self.abssum()
    }
}

impl<L: LinAlg> Clone for Element<L>
{
    fn clone(&self) -> Self
    {
        Element {
            space: self.space.clone(),
            data: self.data.clone(),
        }
    }
}

impl<L: LinAlg> Debug for Element<L>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("Element")
            .field("space", &format_args!("{}", self.space))
            .field("data", &self.data)
            .finish()
    }
}

impl<L: LinAlg> AsRef<[L::F]> for Element<L>
{
    fn as_ref(&self) -> &[L::F]
    {
        &self.data
    }
}

//

impl<'a, L: LinAlg> Add for &'a Element<L>
{
    type Output = Result<Element<L>, FunctionalError>;

    fn add(self, rhs: Self) -> Self::Output
    {
        let f1 = L::F::one();
        Element::lincomb(f1, self, f1, rhs)
    }
}

impl<'a, L: LinAlg> Sub for &'a Element<L>
{
    type Output = Result<Element<L>, FunctionalError>;

    fn sub(self, rhs: Self) -> Self::Output
    {
        let f1 = L::F::one();
        Element::lincomb(f1, self, -f1, rhs)
    }
}

impl<'a, L: LinAlg> Mul<L::F> for &'a Element<L>
{
    type Output = Element<L>;

    fn mul(self, rhs: L::F) -> Self::Output
    {
        self.scaled(rhs)
    }
}

impl<'a, L: LinAlg> Neg for &'a Element<L>
{
    type Output = Element<L>;

    fn neg(self) -> Self::Output
    {
        self.scaled(-L::F::one())
    }
}

//

#[test]
fn test_element_ops()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let space = Space::uniform_discr(&[0.], &[2.], &[4]); // cell volume 0.5
    let x = Element::<L>::new(&space, vec![1., 2., 3., 4.]).unwrap();
    let y = Element::<L>::constant(&space, 1.);

    assert_float_eq!(x.inner(&y).unwrap(), 5., abs <= 1e-12);
    assert_float_eq!(x.norm(), (0.5_f64 * 30.).sqrt(), abs <= 1e-12);

    let d = (&x - &y).unwrap();
    assert_float_eq!(d.as_slice(), [0., 1., 2., 3.].as_ref(), abs_all <= 1e-12);

    let p = x.multiply(&x).unwrap();
    assert_float_eq!(p.as_slice(), [1., 4., 9., 16.].as_ref(), abs_all <= 1e-12);

    let other = Element::<L>::zero(&Space::rn(4));
    assert!(matches!(&x + &other, Err(FunctionalError::DomainMismatch {..})));
    assert!(matches!(Element::<L>::new(&space, vec![1.]), Err(FunctionalError::LengthMismatch {..})));
}
