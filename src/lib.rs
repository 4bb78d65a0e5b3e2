/*!
Convex functionals, their algebra and difference-of-convex solvers.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

This crate for Rust provides **functionals** \\(F: X \to {\bf R} \cup \lbrace \infty \rbrace\\)
on discretized spaces together with their gradients, proximal operators and convex conjugates,
and the **d.c. solvers** [`dca`], [`prox_dca`] and [`doubleprox_dc`] that heuristically minimize
\\(g - h\\) for convex \\(g\\) and \\(h\\).

# General usage

1. Describe the space you work on with [`Space`], and create [`Element`]s of it.
1. Choose a [`LinAlg`] implementation to use:
   * [`FloatGeneric`] -
     `num::Float`-generic, pure Rust.
1. Build functionals from the library ([`L1Norm`], [`L2NormSquared`], [`IndicatorUnitBall`], ...)
   and combine them with the algebra functions
   ([`functional_add`], [`functional_scale`], [`functional_translate`], [`functional_compose`], ...).
   Gradients, proximal operators and convex conjugates of the combinations
   follow from those of their operands.
1. Create a [`DcSolver`] instance and optionally set its parameters,
   or call one of the solver functions directly.

# Examples

\\[
{\rm minimize} \quad {1 \over 4} (x - 0.5)^2 - |x|
\\]
has the critical points \\(-1.5\\), \\(0\\) and \\(2.5\\).

```
use float_eq::assert_float_eq;
use convalg::prelude::*;
use convalg::*;

//env_logger::init(); // Use any logger crate as `convalg` uses `log` crate.

type La = FloatGeneric<f64>;

let space = Space::rn(1);

let g = functional_scale(
    &functional_translate(
        &L2NormSquared::<La>::new(&space).unwrap().into_ref(),
        &Element::constant(&space, 0.5),
    ).unwrap(),
    0.25,
).unwrap();
let h = L1Norm::<La>::new(&space).unwrap();

let mut x = Element::constant(&space, -0.5);
dca(&mut x, &*g, &h, 50).unwrap();

assert_float_eq!(x.as_slice()[0], -1.5, abs <= 1e-6);
```
*/

pub mod linalg;
pub mod proximal;
pub mod solver;

//

mod floatgeneric;

pub use linalg::LinAlg;
pub use floatgeneric::*;

//

mod error;
mod space;
mod element;

pub use error::*;
pub use space::*;
pub use element::*;

//

mod operator;
mod functional;

pub use operator::*;
pub use functional::*;

pub use solver::{dca, prox_dca, doubleprox_dc};

/// Prelude
pub mod prelude
{
    pub use crate::linalg::LinAlg;
    pub use crate::{Functional, Operator};
    pub use crate::solver::{DcParam, DcSolver};
}
