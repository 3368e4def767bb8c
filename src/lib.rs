/*!
`posit` implements the Type-III Posit number system: a runtime-parameterized
`(size, es)` codec, real-value evaluation, conversion from `f64`, and
bit-exact multiplication.

Unlike IEEE 754, a posit's precision is not fixed: the regime field's
variable-length unary code trades mantissa bits for dynamic range as a
value's magnitude moves away from 1, so `size` and `es` alone determine the
whole format. This crate targets widths up to 64 bits, represented on the
stack as a `u128` bit register with no heap allocation anywhere in the
numeric core.

This is primarily a software oracle: bit-exact agreement with a hardware
posit implementation matters more here than raw throughput, so every
algorithm is ported to match its reference implementation's rounding and
saturation behavior exactly, including a couple of open questions around
carry propagation during `f64` conversion (see `DESIGN.md` in the repo
root).

```
use posit::{from_bits, from_double};

let a = from_double(3.0, 16, 1).unwrap();
let b = from_bits(a.bit_repr(), 16, 1).unwrap();
assert_eq!(a, b);
```
*/

mod bits;
pub mod context;
pub mod convert;
pub mod decode;
mod display;
mod error;
mod f64view;
pub mod mul;
pub mod number;
pub mod presets;
mod regime;

pub use context::PositContext;
pub use convert::from_double;
pub use decode::from_bits;
pub use error::PositError;
pub use mul::mul;
pub use number::Posit;
pub use presets::{posit16, posit16_from_bits, posit32, posit32_from_bits, posit8, posit8_from_bits};
