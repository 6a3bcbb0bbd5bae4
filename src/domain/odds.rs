//! Odds and probability arithmetic.
//!
//! Conversions between American moneyline odds, decimal odds and implied
//! probability, plus Kelly criterion sizing.
//!
//! Two validated newtypes guard the numeric domains:
//!
//! - [`AmericanOdds`]: finite, `>= +100` or `<= -100`
//! - [`Probability`]: open interval `(0, 1)`
//!
//! A missing price is modelled as `Option::None` and is never confused with
//! an out-of-domain value, which is a [`DomainError`].
//!
//! The Kelly criterion formula:
//!     f* = (b*p - q) / b
//!
//! Where:
//!     b = decimal odds - 1 (net payout per unit staked)
//!     p = probability of winning
//!     q = 1 - p

use std::fmt;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Decimal odds at which the American encoding flips sign.
const EVEN_MONEY_DECIMAL: f64 = 2.0;

/// A probability strictly between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    /// Validate and wrap a raw probability.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ProbabilityOutOfRange`] for `p <= 0`, `p >= 1`
    /// or NaN. Boundary values are rejected, never clamped.
    pub fn try_new(value: f64) -> Result<Self, DomainError> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(DomainError::ProbabilityOutOfRange { value })
        }
    }

    /// The raw value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Probability of the opposing outcome, `1 - p`.
    ///
    /// # Errors
    ///
    /// Fails only when `p` is so close to a boundary that `1 - p` rounds onto it.
    pub fn complement(self) -> Result<Self, DomainError> {
        Self::try_new(1.0 - self.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> Self {
        p.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// A moneyline price in American format.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AmericanOdds(f64);

impl AmericanOdds {
    /// Validate and wrap a raw American price.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmericanOdds`] for non-finite values,
    /// for anything strictly between -100 and +100, and for prices so
    /// extreme that the implied probability rounds to 0 or 1.
    pub fn try_new(value: f64) -> Result<Self, DomainError> {
        let in_domain = value.is_finite() && (value >= 100.0 || value <= -100.0);
        if in_domain {
            let implied = Self(value).raw_implied();
            if implied > 0.0 && implied < 1.0 {
                return Ok(Self(value));
            }
        }
        Err(DomainError::InvalidAmericanOdds { value })
    }

    /// The raw value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// True for underdog (plus) prices.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    /// Decimal odds: total return per unit staked, stake included.
    #[must_use]
    pub fn to_decimal(self) -> f64 {
        if self.is_positive() {
            1.0 + self.0 / 100.0
        } else {
            1.0 + 100.0 / -self.0
        }
    }

    /// Probability implied by this price, ignoring bookmaker margin.
    ///
    /// # Errors
    ///
    /// Never fails for a value built through [`AmericanOdds::try_new`].
    pub fn implied_probability(self) -> Result<Probability, DomainError> {
        Probability::try_new(self.raw_implied())
    }

    fn raw_implied(self) -> f64 {
        if self.is_positive() {
            100.0 / (self.0 + 100.0)
        } else {
            -self.0 / (-self.0 + 100.0)
        }
    }
}

impl TryFrom<f64> for AmericanOdds {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<AmericanOdds> for f64 {
    fn from(odds: AmericanOdds) -> Self {
        odds.0
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:+.0}", self.0)
        } else {
            write!(f, "{:+.2}", self.0)
        }
    }
}

/// Implied probability of an optional price.
///
/// A missing price yields `Ok(None)`: there is no probability to compare,
/// which is different from a probability of zero.
///
/// # Errors
///
/// Propagates [`AmericanOdds::implied_probability`] failures.
pub fn american_to_probability(
    odds: Option<AmericanOdds>,
) -> Result<Option<Probability>, DomainError> {
    odds.map(AmericanOdds::implied_probability).transpose()
}

/// Fair American price for a probability.
///
/// Prices at or longer than even money come out positive, shorter prices
/// negative. `p = 0.5` maps to `+100`.
///
/// # Errors
///
/// Fails when `p` is so close to 0 or 1 that the fair price would imply a
/// probability that rounds to 0 or 1.
pub fn probability_to_american(p: Probability) -> Result<AmericanOdds, DomainError> {
    let decimal = 1.0 / p.value();
    if decimal >= EVEN_MONEY_DECIMAL {
        AmericanOdds::try_new((decimal - 1.0) * 100.0)
    } else {
        AmericanOdds::try_new(-100.0 / (decimal - 1.0))
    }
}

/// Full-Kelly fraction of bankroll to stake.
///
/// Returns 0.0 when the price is missing or the edge is non-positive: a
/// losing proposition is sized as "do not bet", never as a negative stake.
/// The result always lies in `[0, 1)`.
///
/// # Examples
/// ```
/// use sharpline::domain::odds::{kelly_fraction, AmericanOdds, Probability};
///
/// let p = Probability::try_new(0.60).unwrap();
/// let price = AmericanOdds::try_new(120.0).unwrap();
/// let f = kelly_fraction(p, Some(price)); // (1.2 * 0.6 - 0.4) / 1.2
/// assert!((f - 0.266_666).abs() < 1e-5);
/// ```
#[must_use]
pub fn kelly_fraction(p: Probability, odds: Option<AmericanOdds>) -> f64 {
    let Some(odds) = odds else {
        return 0.0;
    };

    let b = odds.to_decimal() - 1.0;
    let q = 1.0 - p.value();
    ((b * p.value() - q) / b).max(0.0)
}

/// Currency stake for a bankroll fraction, rounded to cents.
#[must_use]
pub fn kelly_stake(fraction: f64, bankroll: Decimal) -> Decimal {
    let fraction = Decimal::from_f64(fraction).unwrap_or(Decimal::ZERO);
    (bankroll * fraction).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn odds(value: f64) -> AmericanOdds {
        AmericanOdds::try_new(value).unwrap()
    }

    fn prob(value: f64) -> Probability {
        Probability::try_new(value).unwrap()
    }

    #[test]
    fn test_probability_rejects_boundaries() {
        assert!(Probability::try_new(0.0).is_err());
        assert!(Probability::try_new(1.0).is_err());
        assert!(Probability::try_new(-0.2).is_err());
        assert!(Probability::try_new(f64::NAN).is_err());
        assert!(Probability::try_new(0.5).is_ok());
    }

    #[test]
    fn test_american_odds_domain() {
        assert!(AmericanOdds::try_new(100.0).is_ok());
        assert!(AmericanOdds::try_new(-100.0).is_ok());
        assert!(AmericanOdds::try_new(99.5).is_err());
        assert!(AmericanOdds::try_new(-99.0).is_err());
        assert!(AmericanOdds::try_new(0.0).is_err());
        assert!(AmericanOdds::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_american_odds_rejects_prices_implying_certainty() {
        // 1e19 + 100 rounds to 1e19, so the implied probability would be 1.0.
        assert_eq!(
            AmericanOdds::try_new(-1e19),
            Err(DomainError::InvalidAmericanOdds { value: -1e19 })
        );
        assert!(AmericanOdds::try_new(-1e6).unwrap().implied_probability().is_ok());
    }

    #[test]
    fn test_implied_probability_underdog() {
        let p = odds(120.0).implied_probability().unwrap();
        assert!((p.value() - 0.454_545).abs() < 1e-6);
    }

    #[test]
    fn test_implied_probability_favourite() {
        let p = odds(-110.0).implied_probability().unwrap();
        assert!((p.value() - 0.523_809).abs() < 1e-6);
    }

    #[test]
    fn test_missing_price_is_not_zero_probability() {
        assert_eq!(american_to_probability(None).unwrap(), None);
    }

    #[test]
    fn test_probability_to_american_sign_flip() {
        assert_eq!(probability_to_american(prob(0.5)).unwrap().value(), 100.0);
        assert!((probability_to_american(prob(0.4)).unwrap().value() - 150.0).abs() < 1e-9);
        assert!((probability_to_american(prob(0.8)).unwrap().value() + 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_decimal_odds() {
        assert!((odds(150.0).to_decimal() - 2.5).abs() < 1e-12);
        assert!((odds(-200.0).to_decimal() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_kelly_positive_edge() {
        let f = kelly_fraction(prob(0.60), Some(odds(120.0)));
        assert!((f - (1.2 * 0.6 - 0.4) / 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_kelly_negative_edge_is_zero() {
        assert_eq!(kelly_fraction(prob(0.50), Some(odds(-110.0))), 0.0);
    }

    #[test]
    fn test_kelly_missing_price_is_zero() {
        assert_eq!(kelly_fraction(prob(0.90), None), 0.0);
    }

    #[test]
    fn test_kelly_stake_rounds_to_cents() {
        assert_eq!(kelly_stake(0.266_666_7, dec!(100)), dec!(26.67));
        assert_eq!(kelly_stake(0.0, dec!(100)), dec!(0));
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(odds(120.0).to_string(), "+120");
        assert_eq!(odds(-110.0).to_string(), "-110");
        assert_eq!(odds(122.5).to_string(), "+122.50");
        assert_eq!(prob(0.6).to_string(), "0.600");
    }
}
