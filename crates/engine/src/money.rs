use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use crate::ValidationError;

/// Monetary amount backed by an exact decimal.
///
/// Every amount read from input or from the store goes through this type, so
/// monthly totals are exact sums instead of accumulated floating-point drift.
/// The scale of the input is kept: `12.345` stays `12.345`.
///
/// # Examples
///
/// ```rust
/// use engine::Amount;
///
/// let amount = Amount::new(250_00);
/// assert_eq!(amount.to_string(), "250.00");
/// ```
///
/// Parsing accepts plain decimals and scientific notation:
///
/// ```rust
/// use engine::Amount;
///
/// assert_eq!("10".parse::<Amount>().unwrap(), Amount::new(10_00));
/// assert_eq!("12.345".parse::<Amount>().unwrap().to_string(), "12.345");
/// assert_eq!("1e-05".parse::<Amount>().unwrap().to_string(), "0.00001");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(Decimal);

/// Exponents beyond this either overflow or round to zero.
const MAX_EXPONENT: u32 = 64;

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub fn new(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Returns the exact decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Sums `amounts`, or `None` as soon as the running total overflows.
    pub fn checked_sum(amounts: impl IntoIterator<Item = Amount>) -> Option<Amount> {
        amounts
            .into_iter()
            .try_fold(Amount::ZERO, |acc, amount| acc.checked_add(amount))
    }
}

impl fmt::Display for Amount {
    /// At least two fractional digits, more when the value carries them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        match text.split_once('.') {
            None => write!(f, "{text}.00"),
            Some((_, frac)) if frac.len() < 2 => write!(f, "{text}0"),
            Some(_) => f.write_str(&text),
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    /// Parses decimal text such as `250`, `-0.5`, `.5`, `12.345` or `1e-05`.
    ///
    /// Accepts `.` as decimal separator, an optional leading `+`/`-` and an
    /// optional `e`/`E` exponent. The sign is kept so callers can tell "not a
    /// number" apart from "not positive". Values outside the decimal range
    /// are rejected as not numeric.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::NotNumeric(s.to_string());

        let trimmed = s.trim();
        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let (mantissa, exponent) = match rest.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (rest, None),
        };

        let (units, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        // `.5` and `5.` are both fine, a lone `.` is not.
        if units.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !units.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units = if units.is_empty() { "0" } else { units };
        let canonical = if frac.is_empty() {
            units.to_string()
        } else {
            format!("{units}.{frac}")
        };
        let mut value: Decimal = canonical.parse().map_err(|_| invalid())?;

        if let Some(exponent) = exponent {
            let exponent = parse_exponent(exponent).ok_or_else(invalid)?;
            value = scale_by_exponent(value, exponent).ok_or_else(invalid)?;
        }

        Ok(Amount(if negative { -value } else { value }))
    }
}

/// Optional sign followed by at least one digit.
fn parse_exponent(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    // Saturate very long exponents, they are clamped below anyway.
    Some(text.parse().unwrap_or(if text.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

fn scale_by_exponent(mut value: Decimal, exponent: i64) -> Option<Decimal> {
    let steps = exponent.unsigned_abs().min(u64::from(MAX_EXPONENT));
    if exponent < 0 {
        let scale = u64::from(value.scale()) + steps;
        if let Ok(scale) = u32::try_from(scale)
            && value.set_scale(scale).is_ok()
        {
            return Some(value);
        }
    }
    for _ in 0..steps {
        value = if exponent > 0 {
            value.checked_mul(Decimal::TEN)?
        } else {
            value.checked_div(Decimal::TEN)?
        };
    }
    Some(value)
}
