//! A diagnostic `Display` for [`Posit`], grouping its bit pattern into
//! sign/regime/exponent/mantissa segments -- the non-ANSI, non-essential
//! descendant of the original's `color_code`/`break_down`.

use std::fmt;

use crate::number::Posit;

impl fmt::Display for Posit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.bit_repr();

        if self.is_special() {
            let body = "0".repeat(self.size - 1);
            return write!(f, "P<{},{}> {}|{}", self.size, self.es, self.sign, body);
        }

        let reg_len = self.regime.reg_len().unwrap().min(self.size - 1);
        let es_len = self.es.min(self.size - 1 - reg_len);
        let mant_len = self.size - 1 - reg_len - es_len;

        let bin = |value: u128, width: usize| -> String {
            if width == 0 {
                String::new()
            } else {
                format!("{value:0width$b}", value = value, width = width)
            }
        };

        let regime_field = (bits >> (self.size - 1 - reg_len)) & ((1u128 << reg_len) - 1);
        let exp_field = if es_len == 0 { 0 } else { (bits >> mant_len) & ((1u128 << es_len) - 1) };
        let mant_field = if mant_len == 0 { 0 } else { bits & ((1u128 << mant_len) - 1) };

        write!(
            f,
            "P<{},{}> {}|{}|{}|{}",
            self.size,
            self.es,
            self.sign,
            bin(regime_field, reg_len),
            bin(exp_field, es_len),
            bin(mant_field, mant_len),
        )
    }
}
