//! [`Accessory`] definitions.

use std::{str::FromStr, sync::LazyLock};

use common::Price;
use derive_more::{AsRef, Display, From, FromStr, Into};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Accessory sold by the dealership.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Accessory {
    /// ID of this [`Accessory`].
    pub id: Id,

    /// [`Details`] of this [`Accessory`].
    #[serde(flatten)]
    pub details: Details,
}

/// Editable details of an [`Accessory`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    /// [`Name`] of the [`Accessory`].
    pub name: Name,

    /// [`Category`] of the [`Accessory`].
    pub category: Category,

    /// [`Price`] of the [`Accessory`].
    pub price: Price,

    /// Number of units in stock.
    pub stock_quantity: u32,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Manufacturer part number.
    #[serde(default)]
    pub part_number: Option<String>,

    /// Manufacturer name.
    #[serde(default)]
    pub manufacturer: Option<String>,

    /// Indicator whether the [`Accessory`] is offered for sale.
    #[serde(default)]
    pub is_active: bool,
}

/// ID of an [`Accessory`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(i32);

/// Regular expression checking [`Name`] and [`Category`] format.
static LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("valid regex"));

/// Name of an [`Accessory`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (!name.trim().is_empty() && LETTERS.is_match(&name))
            .then_some(Self(name))
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Category of an [`Accessory`].
#[derive(AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[as_ref(str, String)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Creates a new [`Category`] if the given `category` is valid.
    #[must_use]
    pub fn new(category: impl Into<String>) -> Option<Self> {
        let category = category.into();
        (!category.trim().is_empty() && LETTERS.is_match(&category))
            .then_some(Self(category))
    }
}

impl FromStr for Category {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Category`")
    }
}
