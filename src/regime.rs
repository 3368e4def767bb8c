//! The variable-length regime field: a unary run-length code for the signed
//! "useed scale" `k`.

use crate::bits;

/// A posit's regime field, carrying the signed run-length `k` plus whether
/// it had to be saturated to fit.
///
/// `k == None` marks the zero/NaR special case, where the regime is
/// undefined rather than merely zero-length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Regime {
    size: usize,
    k: Option<i32>,
    is_out_of_range: bool,
}

impl Regime {
    /// Builds a regime for a `size`-bit posit, saturating `k` into
    /// `[-(size-2), size-2]` if it falls outside that range.
    pub(crate) fn new(size: usize, k: Option<i32>) -> Self {
        match k {
            None => Regime {
                size,
                k: None,
                is_out_of_range: false,
            },
            Some(k) => {
                let bound = size as i32 - 2;
                if k > bound {
                    Regime {
                        size,
                        k: Some(bound),
                        is_out_of_range: true,
                    }
                } else if k < -bound {
                    Regime {
                        size,
                        k: Some(-bound),
                        is_out_of_range: true,
                    }
                } else {
                    Regime {
                        size,
                        k: Some(k),
                        is_out_of_range: false,
                    }
                }
            }
        }
    }

    /// The (possibly saturated) run-length, or `None` for zero/NaR.
    pub fn k(&self) -> Option<i32> {
        self.k
    }

    /// Set when the caller-requested `k` had to be clipped to fit this
    /// format. [`crate::mul`] reads this to suppress post-rounding regime
    /// carry on an already-saturated result.
    pub fn is_out_of_range(&self) -> bool {
        self.is_out_of_range
    }

    /// The *unclamped* regime length: `k+2` ones-then-zero for `k >= 0`,
    /// `-k+1` zeros-then-one for `k < 0`. This can exceed `size - 1` (the
    /// bits actually available after the sign) when `k` sits at its
    /// saturation boundary; callers that need a shift *amount* (encode,
    /// decode) want exactly this value, since [`bits::shl`]/[`bits::shr`]
    /// truncate an over-long shift the same way the missing regime
    /// terminator bit truncates physically. Callers that need a field
    /// *width* (mantissa length, `es_effective`) must clamp via
    /// [`field_layout`] instead. See `SPEC_FULL.md` §3 for the full
    /// rationale.
    pub(crate) fn reg_len_raw(&self) -> usize {
        match self.k {
            None => 0,
            Some(k) if k >= 0 => (k + 2) as usize,
            Some(k) => (-k + 1) as usize,
        }
    }

    /// The clamped regime length actually representable in the word
    /// (`reg_len_raw()` saturated to `size - 1`), i.e. the number of bits
    /// physically spent on the regime once the terminator may be absent.
    pub fn reg_len(&self) -> Option<usize> {
        self.k.map(|_| self.reg_len_raw().min(self.size - 1))
    }

    /// The regime's own bit payload, at its unclamped width: `(2^(k+1)-1)<<1`
    /// (a run of ones, terminated by zero) for `k >= 0`, or `1` (a run of
    /// zeros, terminated by one) for `k < 0`. Composing this into the full
    /// word relies on [`bits::shl`] truncating an over-long shift.
    ///
    /// Returns `0` for the zero/NaR special case (there is no regime
    /// payload to encode).
    ///
    /// The `reg_len_raw() == size` branch below (an all-zero-bits negative
    /// regime that would collide with the zero special) is unreachable:
    /// `k` is saturated to `>= -(size - 2)` by [`Regime::new`], so
    /// `reg_len_raw()` for a negative `k` is at most `size - 1`.
    pub(crate) fn bits(&self) -> u128 {
        match self.k {
            None => 0,
            Some(k) if k >= 0 => bits::mask(k as usize + 1) << 1,
            Some(_) => {
                debug_assert!(self.reg_len_raw() < self.size);
                1
            }
        }
    }
}

/// Splits the bits available after sign and regime into an effective
/// exponent width and the mantissa width, per `SPEC_FULL.md` §3:
/// `es_effective = min(es, max(0, size - 1 - reg_len))`,
/// `mant_len = max(0, size - 1 - reg_len) - es_effective`.
///
/// `reg_len` here is the *unclamped* [`Regime::reg_len_raw`]; clamping
/// happens inside this function via the `max(0, ..)`, which is exactly
/// what keeps `mant_len` well-defined (non-negative) even when the regime
/// alone already exceeds the bits available after the sign.
pub(crate) fn field_layout(size: usize, es: usize, reg_len_raw: usize) -> (usize, usize) {
    let available = (size as i64 - 1 - reg_len_raw as i64).max(0) as usize;
    let es_effective = es.min(available);
    (es_effective, available - es_effective)
}
