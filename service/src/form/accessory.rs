//! [`AccessoryForm`] definition.

use std::str::FromStr as _;

use common::Price;
use rust_decimal::Decimal;

use crate::domain::{
    accessory::{Category, Details, Name},
    Accessory,
};

use super::{flag, non_blank, sanitize, FieldErrors, Invalid};

/// Field of an [`AccessoryForm`].
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    /// [`Name`] field.
    Name,

    /// [`Category`] field.
    Category,

    /// [`Price`] field.
    Price,

    /// Stock quantity field.
    StockQuantity,

    /// Description field.
    Description,

    /// Part number field.
    PartNumber,

    /// Manufacturer field.
    Manufacturer,

    /// Active status field.
    IsActive,
}

/// Raw input of an [`Accessory`] being created or edited.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessoryForm {
    /// Raw [`Field::Name`] input.
    name: String,

    /// Raw [`Field::Category`] input.
    category: String,

    /// Raw [`Field::Price`] input.
    price: String,

    /// Raw [`Field::StockQuantity`] input.
    stock_quantity: String,

    /// Raw [`Field::Description`] input.
    description: String,

    /// Raw [`Field::PartNumber`] input.
    part_number: String,

    /// Raw [`Field::Manufacturer`] input.
    manufacturer: String,

    /// [`Field::IsActive`] input.
    is_active: bool,

    /// Messages of the invalid fields from the last validation.
    errors: FieldErrors,
}

impl Default for AccessoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            price: String::new(),
            stock_quantity: String::new(),
            description: String::new(),
            part_number: String::new(),
            manufacturer: String::new(),
            is_active: true,
            errors: FieldErrors::default(),
        }
    }
}

impl AccessoryForm {
    /// Creates a new [`AccessoryForm`] prefilled with the provided
    /// [`Accessory`].
    #[must_use]
    pub fn from_accessory(accessory: &Accessory) -> Self {
        let Details {
            name,
            category,
            price,
            stock_quantity,
            description,
            part_number,
            manufacturer,
            is_active,
        } = &accessory.details;

        Self {
            name: name.to_string(),
            category: category.to_string(),
            price: price.amount().normalize().to_string(),
            stock_quantity: stock_quantity.to_string(),
            description: description.clone().unwrap_or_default(),
            part_number: part_number.clone().unwrap_or_default(),
            manufacturer: manufacturer.clone().unwrap_or_default(),
            is_active: *is_active,
            errors: FieldErrors::default(),
        }
    }

    /// Returns the current input of the provided [`Field`].
    #[must_use]
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Category => self.category.clone(),
            Field::Price => self.price.clone(),
            Field::StockQuantity => self.stock_quantity.clone(),
            Field::Description => self.description.clone(),
            Field::PartNumber => self.part_number.clone(),
            Field::Manufacturer => self.manufacturer.clone(),
            Field::IsActive => self.is_active.to_string(),
        }
    }

    /// Returns [`FieldErrors`] of the last validation.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Sets the sanitized `value` of the provided [`Field`], forgetting its
    /// previous validation error.
    pub fn edit(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.name = sanitize::letters_only(value),
            Field::Category => self.category = sanitize::letters_only(value),
            Field::Price => value.trim().clone_into(&mut self.price),
            Field::StockQuantity => {
                value.trim().clone_into(&mut self.stock_quantity);
            }
            Field::Description => value.clone_into(&mut self.description),
            Field::PartNumber => value.clone_into(&mut self.part_number),
            Field::Manufacturer => value.clone_into(&mut self.manufacturer),
            Field::IsActive => self.is_active = flag(value),
        }
        self.errors.clear(field.into());
    }

    /// Validates this [`AccessoryForm`].
    ///
    /// # Errors
    ///
    /// With [`Invalid`] listing every invalid field. The same
    /// [`FieldErrors`] are remembered by this [`AccessoryForm`].
    pub fn validate(&mut self) -> Result<Details, Invalid> {
        let mut errors = FieldErrors::default();

        let name = if self.name.trim().is_empty() {
            errors.insert(Field::Name.into(), "Name is required");
            None
        } else {
            let parsed = Name::new(self.name.trim());
            if parsed.is_none() {
                errors.insert(
                    Field::Name.into(),
                    "Name can only contain letters",
                );
            }
            parsed
        };

        let category = if self.category.trim().is_empty() {
            errors.insert(Field::Category.into(), "Category is required");
            None
        } else {
            let parsed = Category::new(self.category.trim());
            if parsed.is_none() {
                errors.insert(
                    Field::Category.into(),
                    "Category can only contain letters",
                );
            }
            parsed
        };

        let price = match Decimal::from_str(self.price.trim()) {
            Ok(amount) => {
                let parsed = Price::new(amount);
                if parsed.is_none() {
                    errors.insert(
                        Field::Price.into(),
                        "Price must be greater than 0",
                    );
                }
                parsed
            }
            Err(_) => {
                errors.insert(Field::Price.into(), "Price must be a number");
                None
            }
        };

        let stock_quantity = match self.stock_quantity.trim().parse::<i64>() {
            Ok(n) if n < 0 => {
                errors.insert(
                    Field::StockQuantity.into(),
                    "Stock quantity cannot be negative",
                );
                None
            }
            Ok(n) => {
                let parsed = u32::try_from(n).ok();
                if parsed.is_none() {
                    errors.insert(
                        Field::StockQuantity.into(),
                        "Stock quantity is too large",
                    );
                }
                parsed
            }
            Err(_) => {
                errors.insert(
                    Field::StockQuantity.into(),
                    "Stock quantity must be a whole number",
                );
                None
            }
        };

        self.errors = errors;
        match (name, category, price, stock_quantity) {
            (Some(name), Some(category), Some(price), Some(stock_quantity))
                if self.errors.is_empty() =>
            {
                Ok(Details {
                    name,
                    category,
                    price,
                    stock_quantity,
                    description: non_blank(&self.description),
                    part_number: non_blank(&self.part_number),
                    manufacturer: non_blank(&self.manufacturer),
                    is_active: self.is_active,
                })
            }
            _ => Err(Invalid(self.errors.clone())),
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{AccessoryForm, Field};

    fn filled() -> AccessoryForm {
        let mut form = AccessoryForm::default();
        form.edit(Field::Name, "Roof Rack");
        form.edit(Field::Category, "Exterior");
        form.edit(Field::Price, "249.50");
        form.edit(Field::StockQuantity, "12");
        form
    }

    #[test]
    fn parses_numeric_fields() {
        let details = filled().validate().unwrap();

        assert_eq!(details.price.to_string(), "$249.5");
        assert_eq!(details.stock_quantity, 12);
        assert_eq!(details.description, None);
        assert!(details.is_active);
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut form = filled();
        form.edit(Field::Price, "0");

        let errors = form.validate().unwrap_err().0;
        assert_eq!(errors.first(), Some("Price must be greater than 0"));
    }

    #[test]
    fn rejects_negative_stock() {
        let mut form = filled();
        form.edit(Field::StockQuantity, "-1");

        let errors = form.validate().unwrap_err().0;
        assert_eq!(errors.first(), Some("Stock quantity cannot be negative"));

        form.edit(Field::StockQuantity, "1.5");
        let errors = form.validate().unwrap_err().0;
        assert_eq!(
            errors.first(),
            Some("Stock quantity must be a whole number"),
        );
    }

    #[test]
    fn sanitizes_letters_only_fields() {
        let mut form = filled();
        form.edit(Field::Name, "Mats 2000!");
        form.edit(Field::Category, "   ");

        assert_eq!(form.value(Field::Name), "Mats ");
        let errors = form.validate().unwrap_err().0;
        assert_eq!(errors.get("name"), None);
        assert_eq!(errors.get("category"), Some("Category is required"));
    }

    #[test]
    fn prefills_from_accessory() {
        let accessory = crate::domain::Accessory {
            id: 5.into(),
            details: filled().validate().unwrap(),
        };

        let form = AccessoryForm::from_accessory(&accessory);
        assert_eq!(form.value(Field::Price), "249.5");
        assert_eq!(form.value(Field::StockQuantity), "12");
        assert_eq!(form.value(Field::Category), "Exterior");
    }
}
