//! The posit decoder: turns a raw `size`-bit word into a [`Posit`].

use crate::bits;
use crate::error::{self, PositError};
use crate::number::Posit;
use crate::regime::Regime;

/// Decodes `bits` as a `size`-bit, `es`-exponent-bit posit.
///
/// Errors when `es` can't fit alongside the sign bit in `size` bits, `size`
/// is outside this crate's `[2, 64]` implementation limit, or `bits` itself
/// doesn't fit in `size` bits.
pub fn from_bits(bits_in: u128, size: usize, es: usize) -> Result<Posit, PositError> {
    error::validate(size, es)?;
    if bits_in > bits::mask(size) {
        return Err(PositError::BitsOverflow { bits: bits_in, size });
    }

    let sign = (bits_in >> (size - 1)) as u8;

    // zero or NaR: every bit but the sign is clear.
    if bits::shl(bits_in, 1, size) == 0 {
        return Ok(Posit::special(size, es, sign));
    }

    let u_bits = if sign == 0 { bits_in } else { bits::c2(bits_in, size) };
    let reg_msb = 1u128 << (size - 2);
    let reg_s = (u_bits & reg_msb) != 0;

    let k = if reg_s {
        bits::cls(u_bits << 1, size, 1) as i32 - 1
    } else {
        -(bits::cls(u_bits << 1, size, 0) as i32)
    };

    let regime = Regime::new(size, Some(k));
    let reg_len = regime.reg_len_raw();

    // align what's left of `u_bits` to the top after dropping the sign (1
    // bit) and the regime (`reg_len` bits).
    let exp = bits::shr(bits::shl(u_bits, 1 + reg_len as i64, size), (size - es) as i64, size) as u64;
    let mant = bits::shr(bits::shl(u_bits, (1 + reg_len + es) as i64, size), (1 + reg_len + es) as i64, size);

    Ok(Posit::new(size, es, sign, regime, exp, mant))
}
