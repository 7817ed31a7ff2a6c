//! Display rounding and number formatting.
//!
//! Results are rounded to a fixed number of fractional digits before they
//! reach the display, which keeps float noise such as
//! `0.30000000000000004` off the screen.

use serde::{Deserialize, Serialize};

/// Default number of fractional digits kept in a displayed result.
pub const DEFAULT_DECIMALS: u32 = 6;

/// Largest supported number of fractional digits.
///
/// Beyond this, `10^d` scaling pushes ordinary values past the 53-bit
/// mantissa and rounding stops being meaningful.
pub const MAX_DECIMALS: u32 = 15;

/// How ties (values exactly halfway between two candidates) are resolved.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// `2.5 -> 3`, `-2.5 -> -3`
    #[default]
    HalfAwayFromZero,
    /// `2.5 -> 2`, `3.5 -> 4`
    HalfEven,
    /// Ties toward positive infinity: `2.5 -> 3`, `-2.5 -> -2`
    HalfUp,
}

impl RoundingMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HalfAwayFromZero => "half-away-from-zero",
            Self::HalfEven => "half-even",
            Self::HalfUp => "half-up",
        }
    }

    fn round(&self, value: f64) -> f64 {
        match self {
            Self::HalfAwayFromZero => value.round(),
            Self::HalfEven => value.round_ties_even(),
            Self::HalfUp => {
                // Exact for every f64, unlike `(value + 0.5).floor()`.
                let floor = value.floor();
                if value - floor >= 0.5 {
                    floor + 1.0
                } else {
                    floor
                }
            }
        }
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "half-away-from-zero" => Ok(Self::HalfAwayFromZero),
            "half-even" => Ok(Self::HalfEven),
            "half-up" => Ok(Self::HalfUp),
            other => Err(format!(
                "unknown rounding mode '{other}' (expected half-away-from-zero, half-even or half-up)"
            )),
        }
    }
}

/// Rounding policy: `round(value * 10^decimals) / 10^decimals`.
///
/// # Example
///
/// ```rust
/// use abacus::core::Rounding;
///
/// let rounding = Rounding::default();
/// assert_eq!(rounding.apply(0.1 + 0.2), 0.3);
/// assert_eq!(rounding.apply(2.0 / 3.0), 0.666667);
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Rounding {
    pub decimals: u32,
    pub mode: RoundingMode,
}

impl Default for Rounding {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            mode: RoundingMode::default(),
        }
    }
}

impl Rounding {
    pub fn new(decimals: u32, mode: RoundingMode) -> Self {
        Self { decimals, mode }
    }

    /// Round a value to the configured precision (pure).
    ///
    /// Non-finite values pass through, and so do values too large to be
    /// scaled without overflowing.
    pub fn apply(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let factor = 10f64.powi(self.decimals as i32);
        let scaled = value * factor;
        if !scaled.is_finite() {
            return value;
        }
        self.mode.round(scaled) / factor
    }
}

/// Render a number the way the display shows it.
///
/// Integral values carry no fractional part (`8`, not `8.0`), negative zero
/// shows as `0`, and non-finite values render as `NaN`, `Infinity` and
/// `-Infinity`. Magnitudes of `1e21` and above, or below `1e-6`, switch to
/// exponent form with an explicit sign: `1e+21`, `-2.5e+22`, `1e-7`.
pub fn format_number(value: f64) -> String {
    match value {
        v if v.is_nan() => "NaN".to_string(),
        v if v == f64::INFINITY => "Infinity".to_string(),
        v if v == f64::NEG_INFINITY => "-Infinity".to_string(),
        v if v == 0.0 => "0".to_string(),
        v if v.abs() >= 1e21 || v.abs() < 1e-6 => exponent_form(v),
        v => v.to_string(),
    }
}

fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Parse display text as an operand.
///
/// Reads the longest leading numeral and ignores whatever follows it, so
/// `"5."` is 5 and `"1e+"` is 1. Text with no leading numeral, such as the
/// `"."` or `"-"` fragments left behind by editing, is `NaN` rather than
/// zero. `"Infinity"` and `"-Infinity"` read back as themselves.
pub fn parse_operand(text: &str) -> f64 {
    let text = text.trim_start();
    let unsigned = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    if unsigned.starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    text[..numeral_len(text)].parse::<f64>().unwrap_or(f64::NAN)
}

/// Byte length of the numeral at the start of `text`, or 0 if there is none.
fn numeral_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_end = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = digits_end(start);
    let mut digits = end - start;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_end(end + 1);
        digits += fraction_end - (end + 1);
        end = fraction_end;
    }
    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_start = end + 1 + sign;
        let exponent_end = digits_end(exponent_start);
        if exponent_end > exponent_start {
            end = exponent_end;
        }
    }
    end
}
