//! Money type for representing currency amounts
//!
//! Internally stores amounts as a count of currency minor units (i64) to avoid
//! floating-point drift. How many minor units make a major unit, and how
//! fractional results are rounded, is described by a [`Currency`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest supported number of decimal places for a currency
pub const MAX_DECIMAL_PLACES: u32 = 6;

/// Represents a monetary amount stored as a count of minor units (e.g. cents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use splitledger::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50 with two decimal places
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value, saturating at the largest amount
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Checked addition, `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction, `None` on overflow
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Checked negation, `None` for the most negative amount
    pub fn checked_neg(self) -> Option<Self> {
        self.0.checked_neg().map(Self)
    }

    /// Checked sum of a sequence of amounts, `None` on overflow
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, amount| acc.checked_add(amount))
    }

    /// The amount as an exact decimal count of minor units
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Displays the raw minor-unit count. Use [`Currency::format`] for presentation.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// How a fractional minor-unit result is rounded to a whole minor unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// 2.5 -> 3, -2.5 -> -3
    #[default]
    HalfAwayFromZero,
    /// Banker's rounding: 2.5 -> 2, 3.5 -> 4
    HalfEven,
    /// Truncate toward zero
    TowardZero,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::TowardZero => RoundingStrategy::ToZero,
        }
    }

    /// Round a decimal count of minor units to a whole Money amount
    ///
    /// Returns `None` if the result does not fit in an i64.
    pub fn round(self, minor_units: Decimal) -> Option<Money> {
        minor_units
            .round_dp_with_strategy(0, self.strategy())
            .to_i64()
            .map(Money::from_minor)
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HalfAwayFromZero => write!(f, "half_away_from_zero"),
            Self::HalfEven => write!(f, "half_even"),
            Self::TowardZero => write!(f, "toward_zero"),
        }
    }
}

/// Currency presentation and precision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Symbol printed before amounts
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Number of decimal places in one major unit (2 for cents)
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,

    /// Rounding applied when a computation yields fractional minor units
    #[serde(default)]
    pub rounding: RoundingMode,
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            decimal_places: default_decimal_places(),
            rounding: RoundingMode::default(),
        }
    }
}

impl Currency {
    /// Number of minor units in one major unit
    pub fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places)
    }

    /// Format an amount with the currency symbol, e.g. `-$10.50`
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, self.symbol, self.digits(amount))
    }

    /// Format an amount without a symbol, e.g. `-10.50`
    pub fn format_plain(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!("{}{}", sign, self.digits(amount))
    }

    /// Unsigned major and fractional digits of an amount
    fn digits(&self, amount: Money) -> String {
        let scale = self.minor_per_major().unsigned_abs();
        let minor = amount.minor().unsigned_abs();
        let whole = minor / scale;
        if self.decimal_places == 0 {
            return whole.to_string();
        }
        format!(
            "{}.{:0width$}",
            whole,
            minor % scale,
            width = self.decimal_places as usize
        )
    }

    /// Parse an amount in major units
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10". More fractional
    /// digits than the currency's precision are rejected, never rounded.
    pub fn parse(&self, s: &str) -> Result<Money, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input),
        };
        let rest = rest.strip_prefix(self.symbol.as_str()).unwrap_or(rest);
        if rest.is_empty() {
            return Err(invalid());
        }

        let (whole_str, frac_str) = match rest.split_once('.') {
            Some((w, f)) => (w, f),
            None => (rest, ""),
        };
        if whole_str.is_empty() && frac_str.is_empty() {
            return Err(invalid());
        }
        if !whole_str.chars().all(|c| c.is_ascii_digit())
            || !frac_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        if frac_str.len() > self.decimal_places as usize {
            return Err(MoneyParseError::TooPrecise {
                input: input.to_string(),
                decimal_places: self.decimal_places,
            });
        }

        let whole: i64 = if whole_str.is_empty() {
            0
        } else {
            whole_str.parse().map_err(|_| invalid())?
        };
        let frac: i64 = if frac_str.is_empty() {
            0
        } else {
            let padding = self.decimal_places - frac_str.len() as u32;
            frac_str.parse::<i64>().map_err(|_| invalid())? * 10_i64.pow(padding)
        };

        let minor = whole
            .checked_mul(self.minor_per_major())
            .and_then(|m| m.checked_add(frac))
            .ok_or_else(invalid)?;

        Ok(Money::from_minor(if negative { -minor } else { minor }))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise { input: String, decimal_places: u32 },
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise {
                input,
                decimal_places,
            } => write!(
                f,
                "Amount {} has more than {} decimal places",
                input, decimal_places
            ),
        }
    }
}

impl std::error::Error for MoneyParseError {}
