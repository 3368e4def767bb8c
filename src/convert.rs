//! `f64 -> Posit` conversion (spec.md §4.6).

use crate::bits;
use crate::decode::from_bits;
use crate::error::{self, PositError};
use crate::f64view::{F64View, EXP_BIAS, MANT_BITS};
use crate::number::Posit;
use crate::regime::Regime;

/// Converts `x` to the nearest `size`-bit, `es`-exponent-bit posit, rounding
/// to nearest with the original's sign-asymmetric tie rule (ties round away
/// from zero for negative values, per spec.md §4.6 step 6 and §9 open
/// question 2 -- reproduced exactly, not "fixed" to round-half-to-even).
///
/// `x`'s mantissa-rollover-on-rounding carry is deliberately *not*
/// propagated into the exponent/regime (spec.md §9 open question 3): the
/// rounded mantissa can overflow its field and bleed into the exponent bits
/// via `bit_repr`'s field composition rather than correctly carrying the
/// regime, exactly as `original_source` does it.
pub fn from_double(x: f64, size: usize, es: usize) -> Result<Posit, PositError> {
    error::validate(size, es)?;

    if x == 0.0 {
        return from_bits(0, size, es);
    }
    if x == f64::INFINITY || x == f64::NEG_INFINITY || x.is_nan() {
        return from_bits(1u128 << (size - 1), size, es);
    }

    let view = F64View::new(x);
    let p_sign = view.sign();

    let f64_exp_wo_bias = view.exp() as i64 - EXP_BIAS;

    // when `es == 0` this reduces to `k = f64_exp_wo_bias`, `p_exp = 0`.
    let k = f64_exp_wo_bias.div_euclid(1i64 << es) as i32;
    let p_exp = (f64_exp_wo_bias - ((1i64 << es) * k as i64)) as u64;

    let regime = Regime::new(size, Some(k));

    // Unclamped per spec.md §4.6 / `original_source.from_double`
    // (`mant_len = size - 1 - es - reg_len`): this can go negative once the
    // regime saturates and consumes more than `size - 1 - es` bits. That is
    // deliberate here -- unlike `eval()`/`mul()`'s mantissa *alignment*,
    // which need a non-negative field width and so go through
    // `field_layout`'s clamped `es_effective`, the rounding threshold below
    // must track the same (possibly negative) `mant_len` the original uses,
    // or the rounding decision itself comes out wrong at the saturation
    // boundary.
    let mant_len = size as i64 - 1 - es as i64 - regime.reg_len_raw() as i64;

    // `mant_len_diff` is the count of f64 mantissa bits collapsed into a
    // narrower posit mantissa field, or -- when a posit field is wider than
    // an `f64` has precision for, which only arises near this crate's
    // 64-bit implementation ceiling -- a negative count of zero-padding
    // bits appended on the right. A widening has nothing to discard, so
    // rounding never triggers in that branch.
    let mant_len_diff = MANT_BITS as i64 - mant_len;

    let mut p_mant = bits::shr(view.mant() as u128, mant_len_diff, 128);

    if mant_len_diff > 0 && mant_len_diff < 64 {
        let diff = mant_len_diff as u32;
        let mant_discarded = view.mant() & ((1u64 << diff) - 1);
        let threshold = (1u64 << diff) >> 1;
        let round_up = if p_sign == 0 {
            mant_discarded > threshold
        } else {
            mant_discarded >= threshold
        };
        if round_up {
            p_mant += 1;
        }
    }
    // `mant_len_diff >= 64`: the discarded fraction is bounded by the
    // mantissa's own 52 bits while the rounding threshold is at least
    // `2^63` -- rounding can never trigger, so the comparison is skipped
    // rather than computed with a shift amount `u64` can't perform.

    Ok(Posit::new(size, es, p_sign, regime, p_exp, p_mant))
}
