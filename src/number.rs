//! The `Posit` value type: its bit encoding, real-value evaluation, and the
//! small set of well-defined integer-bit-space operations spec'd alongside
//! the codec (increment/decrement, bitwise distance).

use crate::bits;
use crate::error::PositError;
use crate::regime::{field_layout, Regime};

/// A decoded Type-III posit: `size` total bits, `es`-bit exponent field,
/// sign, regime, exponent, and mantissa.
///
/// Two posits are `PartialEq` when every field matches structurally (not
/// when they evaluate equal) -- this mirrors bit-pattern identity, which is
/// what a hardware cross-check cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Posit {
    pub(crate) size: usize,
    pub(crate) es: usize,
    pub(crate) sign: u8,
    pub(crate) regime: Regime,
    pub(crate) exp: u64,
    pub(crate) mant: u128,
}

impl Posit {
    /// Builds a posit from already-decomposed fields. Callers (`decode`,
    /// `convert`, `mul`) are responsible for having derived `regime`/`exp`/
    /// `mant` correctly for `(size, es)`; this only guards the one
    /// precondition cheap enough to check unconditionally.
    pub(crate) fn new(size: usize, es: usize, sign: u8, regime: Regime, exp: u64, mant: u128) -> Self {
        debug_assert!(es == 0 && exp == 0 || exp <= (1u64 << es) - 1, "exponent does not fit in `es` bits");
        Posit {
            size,
            es,
            sign,
            regime,
            exp,
            mant,
        }
    }

    /// The zero (`sign == 0`) or NaR (`sign == 1`) special value for
    /// `(size, es)`.
    pub(crate) fn special(size: usize, es: usize, sign: u8) -> Self {
        Posit {
            size,
            es,
            sign,
            regime: Regime::new(size, None),
            exp: 0,
            mant: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn es(&self) -> usize {
        self.es
    }

    /// True for the zero and NaR (infinity) encodings, which carry no
    /// regime/exponent/mantissa.
    pub fn is_special(&self) -> bool {
        self.regime.k().is_none()
    }

    /// Width of the mantissa field, `0` for a special value. Derived via
    /// [`field_layout`], which clamps to the bits actually available after
    /// the sign and regime -- see `SPEC_FULL.md` §3.
    pub fn mant_len(&self) -> usize {
        if self.is_special() {
            return 0;
        }
        let (_, mant_len) = field_layout(self.size, self.es, self.regime.reg_len_raw());
        mant_len
    }

    /// Encodes this posit back into its `size`-bit two's-complement word.
    pub fn bit_repr(&self) -> u128 {
        if self.is_special() {
            return if self.sign == 0 { 0 } else { bits::msb(self.size) };
        }

        let sign_shift = self.size as i64 - 1;
        let regime_shift = sign_shift - self.regime.reg_len_raw() as i64;
        let exp_shift = regime_shift - self.es as i64;

        let composed = bits::shl(self.sign as u128, sign_shift, self.size)
            | bits::shl(self.regime.bits(), regime_shift, self.size)
            | bits::shl(self.exp as u128, exp_shift, self.size)
            | self.mant;

        if self.sign == 0 {
            composed
        } else {
            bits::c2(composed & !bits::msb(self.size), self.size)
        }
    }

    /// The real value this posit represents, per spec.md §4.6:
    /// `(-1)^sign * useed^k * 2^exp * (1 + mant / 2^F)`.
    ///
    /// `useed^k * 2^exp` collapses to a single `2f64.powf` of the *combined*
    /// exponent `2^es * k + exp` rather than `useed.powf(k)` and
    /// `2f64.powi(exp)` as separate factors: `useed = 2^(2^es)` alone
    /// overflows to infinity for `es >= 10` regardless of `k`, and
    /// `inf.powf(negative_k)` collapses to `0.0` even when the true combined
    /// exponent is small and the value is a normal finite double. Computing
    /// the sum first and exponentiating once means overflow/underflow is
    /// decided on the aggregate, matching spec.md §4.4's overflow rule,
    /// instead of on an artificially isolated `useed` term.
    pub fn eval(&self) -> f64 {
        if self.is_special() {
            return if self.sign == 0 { 0.0 } else { f64::INFINITY };
        }

        let k = self.regime.k().unwrap() as f64;
        let sign = if self.sign == 0 { 1.0 } else { -1.0 };
        let combined_exp = (1u128 << self.es) as f64 * k + self.exp as f64;
        let scale = 2f64.powf(combined_exp);
        let frac = 1.0 + (self.mant as f64) / 2f64.powi(self.mant_len() as i32);

        sign * scale * frac
    }

    pub fn lt(&self, other: &Posit) -> bool {
        self.eval() < other.eval()
    }

    pub fn gt(&self, other: &Posit) -> bool {
        self.eval() > other.eval()
    }

    pub fn le(&self, other: &Posit) -> bool {
        self.eval() <= other.eval()
    }

    pub fn ge(&self, other: &Posit) -> bool {
        self.eval() >= other.eval()
    }

    /// Steps this posit by `n` in integer bit-pattern space, wrapping at
    /// the `size`-bit boundary, then re-decodes the result.
    ///
    /// This is the well-defined replacement for the original's `__add__`,
    /// which doubled its increment (`bits += (bits + rhs) & mask`) rather
    /// than adding it once -- not reproduced here, see `DESIGN.md`.
    pub fn increment(&self, n: i128) -> Result<Posit, PositError> {
        let modulus = 1i128 << self.size;
        let wrapped = (self.bit_repr() as i128 + n).rem_euclid(modulus) as u128;
        crate::decode::from_bits(wrapped, self.size, self.es)
    }

    pub fn decrement(&self, n: i128) -> Result<Posit, PositError> {
        self.increment(-n)
    }

    /// The distance between two posits' bit patterns, ordered by their real
    /// value (not by raw unsigned bit-pattern magnitude, which disagrees
    /// with `eval()` ordering across the two's-complement negative range).
    pub fn bit_abs(p1: &Posit, p2: &Posit) -> u128 {
        if p1.gt(p2) {
            p1.bit_repr() - p2.bit_repr()
        } else {
            p2.bit_repr() - p1.bit_repr()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::from_bits;

    #[test]
    fn zero_is_special_and_evaluates_to_zero() {
        let p = from_bits(0, 8, 2).unwrap();
        assert!(p.is_special());
        assert_eq!(p.eval(), 0.0);
    }

    #[test]
    fn nar_is_special_and_evaluates_to_infinity() {
        let p = from_bits(1 << 7, 8, 2).unwrap();
        assert!(p.is_special());
        assert_eq!(p.eval(), f64::INFINITY);
    }

    #[test]
    fn increment_wraps_at_the_word_boundary() {
        let p = from_bits((1 << 7) - 1, 8, 2).unwrap();
        let next = p.increment(1).unwrap();
        assert_eq!(next.bit_repr(), 1 << 7);
    }

    #[test]
    fn bit_abs_is_ordered_by_eval_not_raw_bits() {
        let neg_one = crate::convert::from_double(-1.0, 8, 0).unwrap();
        let pos_one = crate::convert::from_double(1.0, 8, 0).unwrap();
        assert_eq!(Posit::bit_abs(&neg_one, &pos_one), Posit::bit_abs(&pos_one, &neg_one));
    }
}
