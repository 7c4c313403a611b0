//! [`Vehicle`] read model definition.
//!
//! [`Vehicle`]: crate::domain::Vehicle

pub mod list {
    //! [`Vehicle`]s inventory definitions.

    use common::{define_pagination, PriceRange};

    use crate::{
        domain::Vehicle,
        listing::{self, ValidationError},
    };

    define_pagination!(Vehicle, Filter, Facets);

    /// Filter for [`Selector`].
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Filter {
        /// Manufacturer the listed [`Vehicle`]s must be made by.
        pub brand: Option<String>,

        /// [`PriceRange`] the listed [`Vehicle`]s must be priced within.
        pub price_range: Option<PriceRange>,

        /// Fuel type the listed [`Vehicle`]s must use.
        pub fuel_type: Option<String>,
    }

    impl listing::Filter for Filter {
        const NAMES: &'static [&'static str] =
            &["brand", "priceRange", "fuelType"];

        fn set(
            &mut self,
            name: &str,
            value: Option<&str>,
        ) -> Result<(), ValidationError> {
            match name {
                "brand" => self.brand = value.map(ToOwned::to_owned),
                "fuelType" => self.fuel_type = value.map(ToOwned::to_owned),
                "priceRange" => {
                    self.price_range = value
                        .map(|v| {
                            v.parse().map_err(|_| {
                                ValidationError::invalid_value(name, v)
                            })
                        })
                        .transpose()?;
                }
                _ => {
                    return Err(ValidationError::UnknownFilter(
                        name.to_owned(),
                    ))
                }
            }
            Ok(())
        }
    }

    /// Options offered for narrowing down the inventory, as reported along
    /// with a [`Page`].
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub struct Facets {
        /// Distinct manufacturers present in the inventory.
        pub brands: Vec<String>,

        /// Distinct fuel types present in the inventory.
        pub fuel_types: Vec<String>,

        /// [`Filter`] the [`Page`] was actually selected with.
        pub applied: Filter,
    }

}
