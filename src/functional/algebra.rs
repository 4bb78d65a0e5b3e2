//! Named entry points of the functional algebra

use std::rc::Rc;
use crate::{Element, FunctionalError, FunctionalLeftVectorMult, FunctionalOp, LinAlg, OperatorRef, OperatorRightVectorMult, Scalar};
use super::{FunctionalRef, FunctionalComposition, FunctionalLeftScalarMult, FunctionalRightScalarMult, FunctionalScalarSum, FunctionalSum, FunctionalTranslation};

/// \\(F + G\\).
///
/// Fails with [`FunctionalError::DomainMismatch`] if the domains differ.
pub fn functional_add<L: LinAlg>(f: &FunctionalRef<L>, g: &FunctionalRef<L>) -> Result<FunctionalRef<L>, FunctionalError>
{
    Ok(Rc::new(FunctionalSum::new(f, g)?))
}

/// \\(F + c\\).
///
/// Fails with [`FunctionalError::TypeMismatch`] if `c` is not real.
pub fn functional_add_scalar<L: LinAlg, S: Into<Scalar<L::F>>>(f: &FunctionalRef<L>, c: S) -> Result<FunctionalRef<L>, FunctionalError>
{
    Ok(Rc::new(FunctionalScalarSum::new(f, c.into().real()?)))
}

/// \\(c F\\).
///
/// Fails with [`FunctionalError::TypeMismatch`] if `c` is not real.
pub fn functional_scale<L: LinAlg, S: Into<Scalar<L::F>>>(f: &FunctionalRef<L>, c: S) -> Result<FunctionalRef<L>, FunctionalError>
{
    Ok(Rc::new(FunctionalLeftScalarMult::new(f, c.into().real()?)))
}

/// \\(F(c\ \cdot)\\).
///
/// Fails with [`FunctionalError::TypeMismatch`] if `c` is not real.
pub fn functional_scale_arg<L: LinAlg, S: Into<Scalar<L::F>>>(f: &FunctionalRef<L>, c: S) -> Result<FunctionalRef<L>, FunctionalError>
{
    Ok(Rc::new(FunctionalRightScalarMult::new(f, c.into().real()?)))
}

/// \\(F(\cdot - y)\\).
///
/// Fails with [`FunctionalError::DomainMismatch`] if `y` is not in the domain of `f`.
pub fn functional_translate<L: LinAlg>(f: &FunctionalRef<L>, y: &Element<L>) -> Result<FunctionalRef<L>, FunctionalError>
{
    Ok(Rc::new(FunctionalTranslation::new(f, y)?))
}

/// \\(F \circ A\\).
///
/// Fails with [`FunctionalError::DomainMismatch`] if the range of `op` is not the domain of `f`.
pub fn functional_compose<L: LinAlg>(f: &FunctionalRef<L>, op: &OperatorRef<L>) -> Result<FunctionalRef<L>, FunctionalError>
{
    Ok(Rc::new(FunctionalComposition::new(f, op)?))
}

/// Operator \\(x \mapsto F(y \cdot x)\\) into [`crate::Space::real_numbers`].
///
/// Fails with [`FunctionalError::DomainMismatch`] if `y` is not in the domain of `f`.
pub fn functional_right_vector_mult<L: LinAlg>(f: &FunctionalRef<L>, y: &Element<L>) -> Result<OperatorRef<L>, FunctionalError>
{
    let op: OperatorRef<L> = Rc::new(FunctionalOp::new(f));
    Ok(Rc::new(OperatorRightVectorMult::new(&op, y)?))
}

/// Operator \\(x \mapsto F(x)\ y\\) into the space of `y`, which may be any space.
pub fn functional_left_vector_mult<L: LinAlg>(f: &FunctionalRef<L>, y: &Element<L>) -> OperatorRef<L>
{
    Rc::new(FunctionalLeftVectorMult::new(f, y))
}
