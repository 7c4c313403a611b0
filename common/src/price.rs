//! [`Price`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

/// Price of a dealership item in dollars.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct Price(
    #[cfg_attr(feature = "serde", serde(with = "rust_decimal::serde::float"))]
    Decimal,
);

impl Price {
    /// Creates a new [`Price`] if the provided `amount` is greater than `0`.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        (amount > Decimal::ZERO).then_some(Self(amount))
    }

    /// Returns the amount of this [`Price`].
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dollars(f, self.0)
    }
}

impl FromStr for Price {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount =
            Decimal::from_str(s.trim()).map_err(|_| "invalid amount")?;
        Self::new(amount).ok_or("amount must be greater than 0")
    }
}

/// Inclusive range of [`Price`]s used for filtering.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PriceRange {
    /// Lower bound of this [`PriceRange`].
    pub min: Decimal,

    /// Upper bound of this [`PriceRange`].
    pub max: Decimal,
}

impl PriceRange {
    /// Returns the ranges offered for filtering the inventory.
    #[must_use]
    pub fn presets() -> [Self; 5] {
        [
            (0, 20_000),
            (20_001, 30_000),
            (30_001, 40_000),
            (40_001, 50_000),
            (50_001, 60_000),
        ]
        .map(|(min, max)| Self {
            min: Decimal::from(min),
            max: Decimal::from(max),
        })
    }

    /// Indicates whether the provided [`Price`] falls into this
    /// [`PriceRange`].
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        (self.min..=self.max).contains(&price.amount())
    }

    /// Returns a human-readable label of this [`PriceRange`].
    #[must_use]
    pub fn label(&self) -> String {
        /// Helper rendering a single bound.
        struct Dollars(Decimal);
        impl fmt::Display for Dollars {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_dollars(f, self.0)
            }
        }

        format!("{} - {}", Dollars(self.min), Dollars(self.max))
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min.normalize(), self.max.normalize())
    }
}

impl FromStr for PriceRange {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s.trim().split_once('-').ok_or("missing `-`")?;
        let min = Decimal::from_str(min).map_err(|_| "invalid lower bound")?;
        let max = Decimal::from_str(max).map_err(|_| "invalid upper bound")?;
        if min.is_sign_negative() || min > max {
            return Err("invalid bounds");
        }
        Ok(Self { min, max })
    }
}

/// Integer rendered with `,` separated thousands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Thousands(pub u64);

impl fmt::Display for Thousands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grouped(f, &self.0.to_string())
    }
}

/// Writes the provided `amount` as dollars, rounded to cents.
fn write_dollars(f: &mut fmt::Formatter<'_>, amount: Decimal) -> fmt::Result {
    let amount = amount.round_dp(2).normalize();
    if amount.is_sign_negative() {
        f.write_str("-")?;
    }
    f.write_str("$")?;

    let abs = amount.abs().to_string();
    let (int, frac) = abs
        .split_once('.')
        .map_or((abs.as_str(), None), |(int, frac)| (int, Some(frac)));
    write_grouped(f, int)?;
    if let Some(frac) = frac {
        write!(f, ".{frac}")?;
    }
    Ok(())
}

/// Writes the provided `digits` grouping them by thousands.
fn write_grouped(f: &mut fmt::Formatter<'_>, digits: &str) -> fmt::Result {
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            f.write_str(",")?;
        }
        write!(f, "{d}")?;
    }
    Ok(())
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Price, PriceRange, Thousands};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Price::from_str("19.99").unwrap().amount(),
            decimal("19.99"),
        );
        assert_eq!(
            Price::from_str(" 25000 ").unwrap().amount(),
            decimal("25000"),
        );

        assert!(Price::from_str("0").is_err());
        assert!(Price::from_str("-5").is_err());
        assert!(Price::from_str("abc").is_err());
        assert!(Price::from_str("").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(Price::from_str("25000").unwrap().to_string(), "$25,000");
        assert_eq!(Price::from_str("19.99").unwrap().to_string(), "$19.99");
        assert_eq!(Price::from_str("19.90").unwrap().to_string(), "$19.9");
        assert_eq!(
            Price::from_str("1234567.005").unwrap().to_string(),
            "$1,234,567",
        );
        assert_eq!(Price::from_str("999").unwrap().to_string(), "$999");
    }

    #[test]
    fn price_range() {
        let range = PriceRange::from_str("20001-30000").unwrap();
        assert_eq!(range.min, decimal("20001"));
        assert_eq!(range.max, decimal("30000"));
        assert_eq!(range.to_string(), "20001-30000");
        assert_eq!(range.label(), "$20,001 - $30,000");

        assert!(range.contains(Price::from_str("25000").unwrap()));
        assert!(range.contains(Price::from_str("30000").unwrap()));
        assert!(!range.contains(Price::from_str("30000.01").unwrap()));

        assert!(PriceRange::from_str("30000-20000").is_err());
        assert!(PriceRange::from_str("20000").is_err());
        assert!(PriceRange::from_str("a-b").is_err());

        assert_eq!(PriceRange::presets()[0].to_string(), "0-20000");
    }

    #[test]
    fn thousands() {
        assert_eq!(Thousands(0).to_string(), "0");
        assert_eq!(Thousands(999).to_string(), "999");
        assert_eq!(Thousands(1000).to_string(), "1,000");
        assert_eq!(Thousands(45_230).to_string(), "45,230");
        assert_eq!(Thousands(1_234_567).to_string(), "1,234,567");
    }
}
