/// Formats real numbers the way C's `%g` conversion does.
///
/// Output CSVs written by earlier versions of this tool used `%g` for the
/// real-valued metrics, so values are rendered with six significant digits,
/// trailing zeros removed, switching to scientific notation for very small
/// or very large magnitudes.
///
/// # Examples
///
/// ```
/// use music_manager::traits::GeneralFormat;
/// assert_eq!(0.5_f64.format_general(), "0.5");
/// assert_eq!(0.123456789_f64.format_general(), "0.123457");
/// assert_eq!(1234567.0_f64.format_general(), "1.23457e+06");
/// ```
pub trait GeneralFormat {
    /// Formats the number with six significant digits.
    ///
    /// The output uses:
    /// - fixed notation when the decimal exponent is between -4 and 5
    /// - scientific notation (`1.5e-05`, `2e+06`) otherwise
    ///
    /// In both forms trailing zeros of the fraction, and a dangling decimal
    /// point, are dropped. Exponents have at least two digits.
    fn format_general(&self) -> String;
}

const SIGNIFICANT_DIGITS: i32 = 6;

impl GeneralFormat for f64 {
    fn format_general(&self) -> String {
        if self.is_nan() {
            return "nan".to_string();
        }
        if self.is_infinite() {
            return if *self > 0.0 { "inf" } else { "-inf" }.to_string();
        }
        if *self == 0.0 {
            return if self.is_sign_negative() { "-0" } else { "0" }.to_string();
        }

        // Rounding to six digits can carry into the next power of ten, so the
        // exponent is read back from the rounded scientific form.
        let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, self);
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (scientific.as_str(), 0),
        };

        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!(
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.abs()
            )
        } else {
            let decimals = (SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;
            trim_fraction(&format!("{:.*}", decimals, self)).to_string()
        }
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
