//! `PositContext`: a validated `(size, es)` configuration handle, the
//! runtime-parameterized counterpart of the teacher's `PositContext`
//! (`src/posit/round.rs`), minus the arbitrary-precision `Real`/
//! `RoundingContext` machinery this crate has no use for.

use crate::convert;
use crate::decode;
use crate::error::{self, PositError};
use crate::number::Posit;

/// A validated `(size, es)` pair, plus the derived quantities (`useed`,
/// `rmax`/`rmin`, `emax`/`emin`, `maxval`/`minval`) that show up repeatedly
/// when reasoning about a format's dynamic range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositContext {
    size: usize,
    es: usize,
}

impl PositContext {
    /// Validates `(size, es)` against this crate's implementation limits
    /// (`2 <= size <= 64`, `es <= size - 1`).
    pub fn new(size: usize, es: usize) -> Result<Self, PositError> {
        error::validate(size, es)?;
        Ok(PositContext { size, es })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn es(&self) -> usize {
        self.es
    }

    /// Posit terminology for `2^(2^es)`.
    pub fn useed(&self) -> f64 {
        2f64.powf((1u128 << self.es) as f64)
    }

    /// The exponent scale, `2^es`.
    pub fn rscale(&self) -> i64 {
        1i64 << self.es
    }

    /// The largest representable regime, `size - 2`.
    pub fn rmax(&self) -> i32 {
        self.size as i32 - 2
    }

    /// The smallest representable regime, `-(size - 2)`.
    pub fn rmin(&self) -> i32 {
        -(self.size as i32 - 2)
    }

    /// The largest representable (normalized) exponent, `rscale * rmax`.
    pub fn emax(&self) -> i64 {
        self.rscale() * self.rmax() as i64
    }

    /// The smallest representable (normalized) exponent, `rscale * rmin`.
    pub fn emin(&self) -> i64 {
        self.rscale() * self.rmin() as i64
    }

    /// The largest finite magnitude representable in this format.
    pub fn maxval(&self) -> Posit {
        decode::from_bits(crate::bits::mask(self.size) >> 1, self.size, self.es).unwrap()
    }

    /// The smallest positive magnitude representable in this format.
    pub fn minval(&self) -> Posit {
        decode::from_bits(1, self.size, self.es).unwrap()
    }

    /// The zero value in this format.
    pub fn zero(&self) -> Posit {
        decode::from_bits(0, self.size, self.es).unwrap()
    }

    /// The NaR (not-a-real) value in this format.
    pub fn nar(&self) -> Posit {
        decode::from_bits(crate::bits::msb(self.size), self.size, self.es).unwrap()
    }

    /// Decodes `bits` against this context's `(size, es)`.
    pub fn from_bits(&self, bits: u128) -> Result<Posit, PositError> {
        decode::from_bits(bits, self.size, self.es)
    }

    /// Converts `x` against this context's `(size, es)`.
    pub fn from_double(&self, x: f64) -> Result<Posit, PositError> {
        convert::from_double(x, self.size, self.es)
    }
}
