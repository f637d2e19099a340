//! Common utility for number formatting
//!
//! These are left public for convenience.
//!
//! FEMTIC files write numbers in scientific notation with a signed exponent
//! padded to at least two digits. The default rust `LowerExp` does neither.

// standard library
use std::fmt::LowerExp;

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends primitives with more specific formatting options
pub trait NumFormat {
    /// Better scientific number formatting
    ///
    /// The default is not very consistent for scientific in particular, so this
    /// allows easy definition.
    ///
    /// Works for anything that can be represented as scientific using the
    /// `LowerExp` trait, which is pretty much every numerical primitive.
    ///
    /// ```rust
    /// # use femtools_format::NumFormat;
    /// let number = -1.0;
    /// assert_eq!(number.sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!((1.0).sci(6, 2), "1.000000e+00".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;

    /// Scientific formatting right-justified to a fixed field width
    ///
    /// Uses [NumFormat::sci] with a two digit exponent. Numbers wider than the
    /// field are never truncated.
    ///
    /// ```rust
    /// # use femtools_format::NumFormat;
    /// assert_eq!((0.5_f64).sci_field(15, 6), "   5.000000e-01".to_string());
    /// assert_eq!((-2.5_f64).sci_field(15, 6), "  -2.500000e+00".to_string());
    /// ```
    fn sci_field(&self, width: usize, precision: usize) -> String {
        f!("{:>width$}", self.sci(precision, 2), width = width)
    }
}

impl<T: LowerExp> NumFormat for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", &self, precision = precision);
        // `inf` and `NaN` have no exponent to fix up
        let exp = match num.find('e') {
            Some(i) => num.split_off(i),
            None => return num,
        };
        // Make sure the exponent is signed
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        // Pad the exponent with zeros if needed and put it back on the number
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_is_signed_and_padded() {
        assert_eq!((1234.5_f64).sci(6, 2), "1.234500e+03");
        assert_eq!((0.001_f64).sci(6, 2), "1.000000e-03");
        assert_eq!((0.0_f64).sci(6, 2), "0.000000e+00");
    }

    #[test]
    fn wide_exponents_are_kept() {
        assert_eq!((1.0e100_f64).sci(6, 2), "1.000000e+100");
        assert_eq!((1.0e-100_f64).sci(6, 2), "1.000000e-100");
    }

    #[test]
    fn non_finite_values_are_unchanged() {
        assert_eq!(f64::INFINITY.sci(6, 2), "inf");
        assert_eq!(f64::NEG_INFINITY.sci(6, 2), "-inf");
        assert_eq!(f64::NAN.sci(6, 2), "NaN");
        assert_eq!(f64::INFINITY.sci_field(15, 6), "            inf");
    }

    #[test]
    fn field_is_right_justified() {
        assert_eq!((1.0_f64).sci_field(15, 6).len(), 15);
        assert_eq!((1.0e100_f64).sci_field(15, 6), "  1.000000e+100");
        assert_eq!((1.0_f64).sci_field(4, 6), "1.000000e+00");
    }
}
