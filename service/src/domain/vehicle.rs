//! [`Vehicle`] definitions.

use common::{price::Thousands, Price};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

/// Vehicle offered in the dealership inventory.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "Raw")]
pub struct Vehicle {
    /// ID of this [`Vehicle`].
    pub id: Id,

    /// Manufacturer of this [`Vehicle`].
    pub make: String,

    /// Model of this [`Vehicle`].
    pub model: String,

    /// Model year of this [`Vehicle`].
    pub year: Option<u16>,

    /// Fuel type of this [`Vehicle`].
    pub fuel_type: Option<String>,

    /// Transmission kind of this [`Vehicle`].
    pub transmission: Option<String>,

    /// [`Mileage`] of this [`Vehicle`].
    pub mileage: Option<Mileage>,

    /// [`Price`] of this [`Vehicle`].
    pub price: Option<Price>,

    /// Number of units in stock.
    pub stock_quantity: i32,

    /// Image URL(s) of this [`Vehicle`], separated by `,`.
    pub image_url: Option<String>,
}

impl Vehicle {
    /// Returns `make model` title of this [`Vehicle`].
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    /// Indicates whether this [`Vehicle`] has any units in stock.
    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Returns the first image URL of this [`Vehicle`], if any.
    #[must_use]
    pub fn first_image_url(&self) -> Option<&str> {
        self.image_url
            .as_deref()?
            .split(',')
            .map(str::trim)
            .find(|url| !url.is_empty())
    }
}

/// ID of a [`Vehicle`].
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

/// Distance driven by a [`Vehicle`] in miles.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, From, Hash, Into, PartialEq, Serialize,
)]
#[serde(transparent)]
pub struct Mileage(u32);

impl std::fmt::Display for Mileage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mi", Thousands(self.0.into()))
    }
}

/// [`Vehicle`] as reported by the inventory API, identified either by `carId`
/// or by `id`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Raw {
    car_id: Option<Id>,
    id: Option<Id>,
    make: String,
    model: String,
    #[serde(default)]
    year: Option<u16>,
    #[serde(default)]
    fuel_type: Option<String>,
    #[serde(default)]
    transmission: Option<String>,
    #[serde(default)]
    mileage: Option<Mileage>,
    #[serde(default)]
    price: Option<Price>,
    #[serde(default)]
    stock_quantity: i32,
    #[serde(default)]
    image_url: Option<String>,
}

impl TryFrom<Raw> for Vehicle {
    type Error = &'static str;

    fn try_from(raw: Raw) -> Result<Self, Self::Error> {
        let Raw {
            car_id,
            id,
            make,
            model,
            year,
            fuel_type,
            transmission,
            mileage,
            price,
            stock_quantity,
            image_url,
        } = raw;

        Ok(Self {
            id: car_id.or(id).ok_or("missing both `carId` and `id`")?,
            make,
            model,
            year,
            fuel_type: fuel_type.filter(|f| !f.is_empty()),
            transmission: transmission.filter(|t| !t.is_empty()),
            mileage: mileage.filter(|m| m.0 > 0),
            price,
            stock_quantity,
            image_url,
        })
    }
}

#[cfg(test)]
mod spec {
    use super::{Id, Vehicle};

    fn vehicle(json: &str) -> Vehicle {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn prefers_car_id() {
        let v = vehicle(
            r#"{"carId": 12, "id": 3, "make": "Audi", "model": "A4"}"#,
        );
        assert_eq!(v.id, Id::from(12));

        let v = vehicle(r#"{"id": 3, "make": "Audi", "model": "A4"}"#);
        assert_eq!(v.id, Id::from(3));

        assert!(serde_json::from_str::<Vehicle>(
            r#"{"make": "Audi", "model": "A4"}"#,
        )
        .is_err());
    }

    #[test]
    fn first_image_url() {
        let v = vehicle(
            r#"{"id": 1, "make": "Kia", "model": "Rio",
                "imageUrl": " , https://img/1.jpg, https://img/2.jpg"}"#,
        );
        assert_eq!(v.first_image_url(), Some("https://img/1.jpg"));

        let v = vehicle(r#"{"id": 1, "make": "Kia", "model": "Rio"}"#);
        assert_eq!(v.first_image_url(), None);
    }

    #[test]
    fn display_details() {
        let v = vehicle(
            r#"{"id": 1, "make": "Kia", "model": "Rio", "mileage": 45230,
                "price": 18999, "stockQuantity": 0}"#,
        );
        assert_eq!(v.title(), "Kia Rio");
        assert_eq!(v.mileage.unwrap().to_string(), "45,230 mi");
        assert_eq!(v.price.unwrap().to_string(), "$18,999");
        assert!(!v.is_in_stock());
    }
}
