//! `posit8`/`posit16`/`posit32`: the standard Posit Working Group presets,
//! matching the original's `posit8`/`posit16`/`posit32` convenience helpers.

use crate::convert::from_double;
use crate::decode::from_bits;
use crate::error::PositError;
use crate::number::Posit;

/// An 8-bit, `es=0` posit converted from `x`.
pub fn posit8(x: f64) -> Result<Posit, PositError> {
    from_double(x, 8, 0)
}

/// An 8-bit, `es=0` posit decoded from `bits`.
pub fn posit8_from_bits(bits: u128) -> Result<Posit, PositError> {
    from_bits(bits, 8, 0)
}

/// A 16-bit, `es=1` posit converted from `x`.
pub fn posit16(x: f64) -> Result<Posit, PositError> {
    from_double(x, 16, 1)
}

/// A 16-bit, `es=1` posit decoded from `bits`.
pub fn posit16_from_bits(bits: u128) -> Result<Posit, PositError> {
    from_bits(bits, 16, 1)
}

/// A 32-bit, `es=2` posit converted from `x`.
pub fn posit32(x: f64) -> Result<Posit, PositError> {
    from_double(x, 32, 2)
}

/// A 32-bit, `es=2` posit decoded from `bits`.
pub fn posit32_from_bits(bits: u128) -> Result<Posit, PositError> {
    from_bits(bits, 32, 2)
}
