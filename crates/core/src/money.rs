//! Money value object (fixed-point decimal amounts in Brazilian reais).

use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Prefix written in front of every rendered amount.
pub const CURRENCY_PREFIX: &str = "R$";

/// Number of fractional digits kept by [`Money::round_to_cents`].
const CENT_DIGITS: u32 = 2;

/// A monetary amount.
///
/// Backed by a base-10 decimal so `0.99 * 15` is exactly `14.85`. Two amounts
/// with the same value compare equal regardless of trailing zeros.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Unit amount multiplied by a quantity, without rounding.
    ///
    /// Saturates at the decimal range limits instead of overflowing.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Rounds to two fractional digits, ties to even (`0.125 -> 0.12`).
    pub fn round_to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(CENT_DIGITS, RoundingStrategy::MidpointNearestEven),
        )
    }

    /// Renders the bare amount: shortest form with at least one fractional
    /// digit (`39.8`, `14.85`, `10.0`).
    pub fn format_amount(&self) -> String {
        let normalized = self.0.normalize();
        if normalized.scale() == 0 {
            format!("{normalized}.0")
        } else {
            normalized.to_string()
        }
    }
}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| DomainError::validation(format!("amount `{s}`: {e}")))?;
        Ok(Self(amount))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{CURRENCY_PREFIX}{}", self.format_amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn display_uses_prefix_and_shortest_form() {
        assert_eq!(Money::new(dec!(1.99)).to_string(), "R$1.99");
        assert_eq!(Money::new(dec!(39.80)).to_string(), "R$39.8");
        assert_eq!(Money::new(dec!(10)).to_string(), "R$10.0");
        assert_eq!(Money::new(dec!(10.00)).to_string(), "R$10.0");
        assert_eq!(Money::new(dec!(0)).to_string(), "R$0.0");
    }

    #[test]
    fn times_is_exact() {
        let total = Money::new(dec!(0.99)).times(15);
        assert_eq!(total.amount(), dec!(14.85));
        assert_eq!(total.round_to_cents().format_amount(), "14.85");
    }

    #[test]
    fn rounding_ties_go_to_even() {
        assert_eq!(Money::new(dec!(0.125)).round_to_cents().amount(), dec!(0.12));
        assert_eq!(Money::new(dec!(0.135)).round_to_cents().amount(), dec!(0.14));
        assert_eq!(Money::new(dec!(2.675)).round_to_cents().amount(), dec!(2.68));
        assert_eq!(Money::new(dec!(1.2349)).round_to_cents().amount(), dec!(1.23));
    }

    #[test]
    fn equality_ignores_trailing_zeros() {
        fn same_value<T: ValueObject>(a: T, b: T) -> bool {
            a == b
        }
        assert!(same_value(Money::new(dec!(39.8)), Money::new(dec!(39.80))));
    }

    #[test]
    fn from_str_accepts_decimal_text() {
        let m: Money = " 7.99 ".parse().unwrap();
        assert_eq!(m, Money::new(dec!(7.99)));
        assert_eq!(m, "7.990".parse::<Money>().unwrap());
    }

    #[test]
    fn from_str_rejects_garbage() {
        let err = "sete reais".parse::<Money>().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("sete reais")),
            _ => panic!("Expected Validation error for non-numeric amount"),
        }
    }

    #[test]
    fn negative_zero_is_not_negative() {
        assert!(!Money::new(dec!(-0.00)).is_negative());
        assert!(Money::new(dec!(-0.01)).is_negative());
    }

    #[test]
    fn sum_adds_all_amounts() {
        let total: Money = [dec!(39.8), dec!(124.75), dec!(14.85)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total.amount(), dec!(179.40));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a cents-denominated price times a quantity needs no rounding.
        #[test]
        fn cents_times_quantity_survives_rounding(cents in 0i64..10_000_000, qty in 0u32..100_000) {
            let unit = Money::new(Decimal::new(cents, 2));
            let total = unit.times(qty);
            prop_assert_eq!(total.round_to_cents(), total);
            prop_assert_eq!(total.amount(), Decimal::new(cents * i64::from(qty), 2));
        }

        /// Property: the rendered amount parses back to the same value.
        #[test]
        fn rendered_amount_parses_back(cents in -10_000_000i64..10_000_000) {
            let m = Money::new(Decimal::new(cents, 2));
            let parsed: Money = m.format_amount().parse().unwrap();
            prop_assert_eq!(parsed, m);
        }
    }
}
