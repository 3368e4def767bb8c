//! Bit-exact posit multiplication (spec.md §4.7).

use crate::bits;
use crate::number::Posit;
use crate::regime::{field_layout, Regime};
use std::ops::Mul;

/// Multiplies two posits of identical `(size, es)`.
///
/// Panics if the operands' widths or exponent sizes differ -- per spec.md
/// §7.1/§9, a width/ES mismatch is a programming error at the call site,
/// not a recoverable input error, so it is not folded into [`crate::PositError`].
pub fn mul(p1: &Posit, p2: &Posit) -> Posit {
    assert_eq!(p1.size, p2.size, "posit multiplication requires operands of equal width");
    assert_eq!(p1.es, p2.es, "posit multiplication requires operands of equal exponent width");

    let size = p1.size;
    let es = p1.es;
    let sign = p1.sign ^ p2.sign;

    // 0 * NaR and NaR * 0 both land on NaR.
    if (p1.is_special() && p1.sign == 0 && p2.is_special() && p2.sign == 1)
        || (p1.is_special() && p1.sign == 1 && p2.is_special() && p2.sign == 0)
    {
        return Posit::special(size, es, 1);
    }
    // anything * 0 is 0.
    if (p1.is_special() && p1.sign == 0) || (p2.is_special() && p2.sign == 0) {
        return Posit::special(size, es, 0);
    }
    // anything * NaR is NaR.
    if (p1.is_special() && p1.sign == 1) || (p2.is_special() && p2.sign == 1) {
        return Posit::special(size, es, 1);
    }

    let f1_len = p1.mant_len();
    let f2_len = p2.mant_len();

    let mut k = p1.regime.k().unwrap() + p2.regime.k().unwrap();
    let mut exp = p1.exp + p2.exp;

    let mant1_aligned = p1.mant << (size - 1 - f1_len);
    let mant2_aligned = p2.mant << (size - 1 - f2_len);

    // left-align with an implicit leading 1, giving a fixed-point `1.fff..`
    // representation, then multiply on `2*size` bits.
    let f1 = bits::msb(size) | mant1_aligned;
    let f2 = bits::msb(size) | mant2_aligned;
    let mut mant = (f1 * f2) & bits::mask(2 * size);

    let mant_carry = (mant & bits::msb(2 * size)) != 0;

    let mut exp_carry = (exp & (1u64 << es)) != 0;
    if exp_carry {
        k += 1;
        exp &= (1u64 << es) - 1;
    }

    if mant_carry {
        exp += 1;
        exp_carry = (exp & (1u64 << es)) != 0;
        if exp_carry {
            k += 1;
            exp &= (1u64 << es) - 1;
        }
        mant >>= 1;
    }

    let regime = Regime::new(size, Some(k));
    let k_is_oob = regime.is_out_of_range();
    k = regime.k().unwrap();
    let reg_len_raw = regime.reg_len_raw();

    let (_, mant_len) = field_layout(size, es, reg_len_raw);
    let total_product_bits = 2 * size - 2;
    let mant_fractional_part = mant & bits::mask(total_product_bits);

    let len_discarded = total_product_bits - mant_len;
    let mant_fractional_part_discarded = mant_fractional_part & bits::mask(len_discarded);
    let mut mant_fractional_part_left = mant_fractional_part >> len_discarded;

    let threshold = (1u128 << len_discarded) >> 1;

    if !k_is_oob {
        let round_up = if sign == 0 {
            mant_fractional_part_discarded > threshold
        } else {
            mant_fractional_part_discarded >= threshold
        };
        if round_up {
            let mant_max = bits::mask(mant_len);
            if mant_fractional_part_left < mant_max {
                mant_fractional_part_left += 1;
            } else {
                mant_fractional_part_left = 0;
                if exp < (1u64 << es) - 1 {
                    exp += 1;
                } else {
                    exp = 0;
                    if k < size as i32 - 2 {
                        k += 1;
                    }
                }
            }
        }
    }

    Posit::new(size, es, sign, Regime::new(size, Some(k)), exp, mant_fractional_part_left)
}

impl Mul for Posit {
    type Output = Posit;

    fn mul(self, rhs: Posit) -> Posit {
        mul(&self, &rhs)
    }
}
