//! [`Vehicle`]-related [`Api`] implementations.

use common::{
    operations::{By, Select},
    PriceRange,
};
use reqwest::Method;
use serde::Deserialize;
use tracerr::Traced;

use crate::{
    domain::Vehicle,
    infra::{
        api::{self, http::page},
        Api, Http,
    },
    read::vehicle::list::{Facets, Filter, Page, Selector},
};

/// Path of the inventory collection.
const INVENTORY: &str = "home/inventory";

impl Api<Select<By<Page, Selector>>> for Http {
    type Ok = Page;
    type Err = Traced<api::Error>;

    #[tracing::instrument(
        skip_all,
        fields(page = %by.as_inner().arguments.page),
    )]
    async fn execute(
        &self,
        Select(by): Select<By<Page, Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .request(Method::GET, INVENTORY)?
            .query(&list_params(by.as_inner()));
        let resp: ListResponse =
            self.fetch(req).await.map_err(tracerr::wrap!())?;
        Ok(resp.into_page())
    }
}

/// Response of the inventory collection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    /// [`Vehicle`]s on the requested page.
    cars: Option<Vec<Vehicle>>,

    /// Distinct manufacturers present in the inventory.
    brands: Option<Vec<String>>,

    /// Distinct fuel types present in the inventory.
    fuel_types: Option<Vec<String>>,

    /// Echoed `brand` filter.
    selected_brand: Option<String>,

    /// Echoed `priceRange` filter.
    selected_price_range: Option<String>,

    /// Echoed `fuelType` filter.
    selected_fuel_type: Option<String>,

    /// Number of the returned page.
    current_page: Option<usize>,

    /// Total number of pages.
    total_pages: Option<usize>,

    /// Total number of matching [`Vehicle`]s.
    total_cars: Option<usize>,
}

impl ListResponse {
    /// Converts this [`ListResponse`] into a [`Page`].
    ///
    /// Unparseable echoed price range is treated as absent.
    fn into_page(self) -> Page {
        let Self {
            cars,
            brands,
            fuel_types,
            selected_brand,
            selected_price_range,
            selected_fuel_type,
            current_page,
            total_pages,
            total_cars,
        } = self;

        let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());
        let facets = Facets {
            brands: brands.unwrap_or_default(),
            fuel_types: fuel_types.unwrap_or_default(),
            applied: Filter {
                brand: non_empty(selected_brand),
                price_range: non_empty(selected_price_range)
                    .and_then(|r| r.parse::<PriceRange>().ok()),
                fuel_type: non_empty(selected_fuel_type),
            },
        };
        page(cars, current_page, total_pages, total_cars, facets)
    }
}

/// Builds query parameters of the inventory collection request.
///
/// Every filter is sent, empty if not set.
fn list_params(selector: &Selector) -> Vec<(&'static str, String)> {
    let Filter {
        brand,
        price_range,
        fuel_type,
    } = &selector.filter;
    vec![
        ("brand", brand.clone().unwrap_or_default()),
        (
            "priceRange",
            price_range.map(|r| r.to_string()).unwrap_or_default(),
        ),
        ("fuelType", fuel_type.clone().unwrap_or_default()),
        ("page", selector.arguments.page.to_string()),
        ("pageSize", selector.arguments.size.to_string()),
    ]
}

#[cfg(test)]
mod spec {
    use common::pagination::{Arguments, Number, Size};

    use crate::{
        domain::vehicle,
        read::vehicle::list::{Filter, Selector},
    };

    use super::{list_params, ListResponse};

    #[test]
    fn sends_every_filter() {
        let selector = Selector {
            arguments: Arguments {
                page: Number::new(2).unwrap(),
                size: Size::new(6).unwrap(),
            },
            search: None,
            filter: Filter {
                brand: Some("Toyota".into()),
                price_range: Some("20001-30000".parse().unwrap()),
                fuel_type: None,
            },
        };

        assert_eq!(
            list_params(&selector),
            vec![
                ("brand", "Toyota".to_owned()),
                ("priceRange", "20001-30000".to_owned()),
                ("fuelType", String::new()),
                ("page", "2".to_owned()),
                ("pageSize", "6".to_owned()),
            ],
        );
    }

    #[test]
    fn converts_response_into_page() {
        let resp: ListResponse = serde_json::from_str(
            r#"{
                "cars": [
                    {"carId": 4, "make": "Toyota", "model": "Prius",
                     "price": 24500, "stockQuantity": 2},
                    {"id": 9, "make": "Toyota", "model": "Camry",
                     "price": 28900, "stockQuantity": 0}
                ],
                "brands": ["Ford", "Toyota"],
                "fuelTypes": ["Hybrid", "Petrol"],
                "selectedBrand": "Toyota",
                "selectedPriceRange": "20001-30000",
                "selectedFuelType": "",
                "currentPage": 1,
                "totalPages": 1,
                "pageSize": 6,
                "totalCars": 2
            }"#,
        )
        .unwrap();

        let page = resp.into_page();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].id, vehicle::Id::from(9));
        assert_eq!(page.total_count, 2);
        assert_eq!(page.meta.brands, ["Ford", "Toyota"]);
        assert_eq!(page.meta.applied.brand.as_deref(), Some("Toyota"));
        assert!(page.meta.applied.price_range.is_some());
        assert_eq!(page.meta.applied.fuel_type, None);
        assert!(page.check(Size::new(6).unwrap()).is_ok());
    }

    #[test]
    fn tolerates_missing_fields() {
        let resp: ListResponse = serde_json::from_str("{}").unwrap();

        let page = resp.into_page();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, Number::FIRST);
        assert_eq!(page.total_count, 0);
        assert!(page.meta.brands.is_empty());
    }
}
