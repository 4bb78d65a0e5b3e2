//! Spaces and scalar fields

use core::fmt::{self, Display};
use crate::FunctionalError;

/// Scalar field of a [`Space`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field
{
    /// Real numbers.
    Real,
    /// Complex numbers.
    Complex,
}

#[derive(Debug, Clone, PartialEq)]
enum Kind
{
    Tensor,
    UniformDiscr {
        min_pt: Vec<f64>,
        max_pt: Vec<f64>,
    },
    Scalars,
}

/// Structural description of a finite-dimensional space.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Two spaces are the same space if and only if their descriptions compare equal;
/// a clone of a space is the same space.
///
/// The inner product is the weighted euclidean one
/// \\(\langle x, y \rangle = w \sum_i x_i y_i\\),
/// where \\(w\\) is [`Space::cell_volume`].
#[derive(Debug, Clone, PartialEq)]
pub struct Space
{
    kind: Kind,
    shape: Vec<usize>,
    field: Field,
}

impl Space
{
    /// Real coordinate space \\(\mathbb{R}^n\\).
    pub fn rn(n: usize) -> Self
    {
        Space {
            kind: Kind::Tensor,
            shape: vec![n],
            field: Field::Real,
        }
    }

    /// Complex coordinate space \\(\mathbb{C}^n\\).
    ///
    /// Only its description is supported; functionals reject it.
    pub fn cn(n: usize) -> Self
    {
        Space {
            kind: Kind::Tensor,
            shape: vec![n],
            field: Field::Complex,
        }
    }

    /// Uniform discretization of the rectangle spanned by `min_pt` and `max_pt`
    /// with `shape` samples along each axis.
    ///
    /// * `min_pt`, `max_pt` and `shape` shall have the same length,
    ///   `min_pt < max_pt` and `shape > 0` component-wise.
    ///
    /// # Panics
    ///
    /// Panics if the arguments violate the conditions above,
    /// as [`crate::MatOp::new`] does for a wrongly sized array.
    pub fn uniform_discr(min_pt: &[f64], max_pt: &[f64], shape: &[usize]) -> Self
    {
        assert_eq!(min_pt.len(), max_pt.len());
        assert_eq!(min_pt.len(), shape.len());
        assert!(min_pt.iter().zip(max_pt).all(|(a, b)| a < b));
        assert!(shape.iter().all(|n| *n > 0));

        Space {
            kind: Kind::UniformDiscr {
                min_pt: min_pt.to_vec(),
                max_pt: max_pt.to_vec(),
            },
            shape: shape.to_vec(),
            field: Field::Real,
        }
    }

    /// The real numbers viewed as a one-dimensional space.
    ///
    /// This is the range of every functional seen as an operator.
    pub fn real_numbers() -> Self
    {
        Space {
            kind: Kind::Scalars,
            shape: vec![1],
            field: Field::Real,
        }
    }

    pub fn field(&self) -> Field
    {
        self.field
    }

    pub fn shape(&self) -> &[usize]
    {
        &self.shape
    }

    /// Number of scalars an element of this space holds.
    pub fn len(&self) -> usize
    {
        self.shape.iter().product()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Volume of one discretization cell, used as the inner product weight.
    pub fn cell_volume(&self) -> f64
    {
        match &self.kind {
            Kind::UniformDiscr {min_pt, max_pt} => {
                min_pt.iter().zip(max_pt).zip(&self.shape)
                    .map(|((a, b), n)| (b - a) / *n as f64)
                    .product()
            },
            Kind::Tensor | Kind::Scalars => 1.,
        }
    }

    /// Fails with [`FunctionalError::DomainMismatch`] unless `other` is this space.
    pub fn check(&self, other: &Space) -> Result<(), FunctionalError>
    {
        if self == other {
            Ok(())
        }
        else {
            Err(FunctionalError::DomainMismatch {
                expected: self.clone(),
                found: other.clone(),
            })
        }
    }

    /// Fails with [`FunctionalError::TypeMismatch`] unless the field is real.
    pub fn check_real(&self) -> Result<(), FunctionalError>
    {
        match self.field {
            Field::Real => Ok(()),
            Field::Complex => Err(FunctionalError::TypeMismatch("functionals require a real field")),
        }
    }
}

impl Display for Space
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match (&self.kind, self.field) {
            (Kind::Tensor, Field::Real) => write!(f, "rn({})", self.len()),
            (Kind::Tensor, Field::Complex) => write!(f, "cn({})", self.len()),
            (Kind::UniformDiscr {min_pt, max_pt}, _) => {
                write!(f, "uniform_discr({:?}, {:?}, {:?})", min_pt, max_pt, self.shape)
            },
            (Kind::Scalars, Field::Real) => write!(f, "RealNumbers"),
            (Kind::Scalars, Field::Complex) => write!(f, "ComplexNumbers"),
        }
    }
}

//

/// A scalar offered to the functional algebra.
///
/// Functionals are defined over real fields only,
/// so the [`Scalar::Complex`] variant is always rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<F>
{
    Real(F),
    Complex {
        re: F,
        im: F,
    },
}

impl<F> Scalar<F>
{
    /// Returns the real value, or [`FunctionalError::TypeMismatch`] for a complex scalar.
    pub fn real(self) -> Result<F, FunctionalError>
    {
        match self {
            Scalar::Real(v) => Ok(v),
            Scalar::Complex {..} => Err(FunctionalError::TypeMismatch("scalar is not in the real field")),
        }
    }
}

impl<F> From<F> for Scalar<F>
{
    fn from(v: F) -> Self
    {
        Scalar::Real(v)
    }
}

//

#[test]
fn test_space_equality()
{
    let a = Space::uniform_discr(&[0., 0.], &[1., 1.], &[3, 3]);
    let b = Space::uniform_discr(&[0., 0.], &[1., 1.], &[3, 3]);
    let c = Space::uniform_discr(&[1., 0.], &[2., 1.], &[3, 3]);

    assert_eq!(a, b);
    assert!(a.check(&b).is_ok());
    assert!(matches!(a.check(&c), Err(FunctionalError::DomainMismatch {..})));
    assert_ne!(Space::rn(3), Space::cn(3));
    assert_eq!(a.len(), 9);
    assert!((a.cell_volume() - 1. / 9.).abs() < 1e-15);
    assert!(Space::cn(2).check_real().is_err());
}

#[test]
#[should_panic]
fn test_uniform_discr_empty_axis()
{
    let _ = Space::uniform_discr(&[0.], &[1.], &[0]);
}
