//! The catalog record.
//!
//! A `CoffeeItem` is a stored catalog entry. A `NewCoffeeItem` carries the
//! editable fields for an insert or an update and is the only place field
//! bounds are checked. Price and quantity carry no bounds beyond their
//! types: negative values and arbitrary precision are accepted.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::CoffeeItemId;

/// Maximum length of `name`, in characters.
pub const NAME_MAX_LEN: usize = 255;

/// Maximum length of `image_reference`, in characters.
pub const IMAGE_REFERENCE_MAX_LEN: usize = 2999;

/// A field of the catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoffeeField {
    Name,
    Price,
    Quantity,
    ImageReference,
}

impl CoffeeField {
    /// Every field, in declaration order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Price, Self::Quantity, Self::ImageReference];

    /// Column / form key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Quantity => "quantity",
            Self::ImageReference => "image_reference",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Price => "Price",
            Self::Quantity => "Quantity",
            Self::ImageReference => "Image reference",
        }
    }
}

impl fmt::Display for CoffeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoffeeItemError {
    #[error("{0} is required")]
    Required(CoffeeField),

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: CoffeeField,
        max: usize,
        actual: usize,
    },

    #[error("{0} must be a finite number")]
    NotFinite(CoffeeField),
}

impl CoffeeItemError {
    /// The field this error is about.
    #[must_use]
    pub const fn field(&self) -> CoffeeField {
        match self {
            Self::Required(field) | Self::NotFinite(field) | Self::TooLong { field, .. } => *field,
        }
    }
}

/// A stored catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeItem {
    pub id: CoffeeItemId,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub image_reference: String,
}

impl CoffeeItem {
    /// Display value of one field.
    ///
    /// Floats use Rust's shortest round-trip formatting, so the rendered
    /// price parses back to the stored value.
    #[must_use]
    pub fn display_value(&self, field: CoffeeField) -> String {
        match field {
            CoffeeField::Name => self.name.clone(),
            CoffeeField::Price => self.price.to_string(),
            CoffeeField::Quantity => self.quantity.to_string(),
            CoffeeField::ImageReference => self.image_reference.clone(),
        }
    }
}

/// Editable fields of a catalog entry, for inserts and updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCoffeeItem {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub image_reference: String,
}

impl NewCoffeeItem {
    /// Build a validated entry. Text fields are trimmed first.
    ///
    /// # Errors
    ///
    /// Returns the first `CoffeeItemError` found, in field order.
    pub fn new(
        name: &str,
        price: f64,
        quantity: i32,
        image_reference: &str,
    ) -> Result<Self, CoffeeItemError> {
        let item = Self {
            name: name.trim().to_owned(),
            price,
            quantity,
            image_reference: image_reference.trim().to_owned(),
        };
        item.validate()?;
        Ok(item)
    }

    /// Check field bounds.
    ///
    /// # Errors
    ///
    /// Returns the first `CoffeeItemError` found, in field order.
    pub fn validate(&self) -> Result<(), CoffeeItemError> {
        match self.errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every bound violation, in field order.
    #[must_use]
    pub fn errors(&self) -> Vec<CoffeeItemError> {
        let mut errors = Vec::new();

        if let Err(err) = check_text(CoffeeField::Name, &self.name, NAME_MAX_LEN) {
            errors.push(err);
        }
        if !self.price.is_finite() {
            errors.push(CoffeeItemError::NotFinite(CoffeeField::Price));
        }
        if let Err(err) = check_text(
            CoffeeField::ImageReference,
            &self.image_reference,
            IMAGE_REFERENCE_MAX_LEN,
        ) {
            errors.push(err);
        }

        errors
    }
}

/// A required, bounded text field. Length counts characters, not bytes.
fn check_text(field: CoffeeField, value: &str, max: usize) -> Result<(), CoffeeItemError> {
    if value.trim().is_empty() {
        return Err(CoffeeItemError::Required(field));
    }
    let actual = value.chars().count();
    if actual > max {
        return Err(CoffeeItemError::TooLong { field, max, actual });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn espresso() -> CoffeeItem {
        CoffeeItem {
            id: CoffeeItemId::new(1),
            name: "Espresso".to_string(),
            price: 2.5,
            quantity: 12,
            image_reference: "https://img.example.com/espresso.jpg".to_string(),
        }
    }

    #[test]
    fn test_new_trims_text_fields() {
        let item = NewCoffeeItem::new("  Latte ", 3.0, 4, " /img/latte.png\n").unwrap();
        assert_eq!(item.name, "Latte");
        assert_eq!(item.image_reference, "/img/latte.png");
    }

    #[test]
    fn test_new_requires_name() {
        let err = NewCoffeeItem::new("   ", 1.0, 1, "/a.png").unwrap_err();
        assert_eq!(err, CoffeeItemError::Required(CoffeeField::Name));
    }

    #[test]
    fn test_new_requires_image_reference() {
        let err = NewCoffeeItem::new("Mocha", 1.0, 1, "").unwrap_err();
        assert_eq!(err.field(), CoffeeField::ImageReference);
    }

    #[test]
    fn test_name_bound_counts_characters() {
        // 255 multi-byte characters fit, 256 do not
        let at_limit = "é".repeat(NAME_MAX_LEN);
        assert!(NewCoffeeItem::new(&at_limit, 1.0, 1, "/a.png").is_ok());

        let over = "é".repeat(NAME_MAX_LEN + 1);
        let err = NewCoffeeItem::new(&over, 1.0, 1, "/a.png").unwrap_err();
        assert_eq!(
            err,
            CoffeeItemError::TooLong {
                field: CoffeeField::Name,
                max: NAME_MAX_LEN,
                actual: NAME_MAX_LEN + 1,
            }
        );
    }

    #[test]
    fn test_image_reference_bound() {
        let url = format!("https://cdn.example.com/{}", "a".repeat(IMAGE_REFERENCE_MAX_LEN));
        let err = NewCoffeeItem::new("Cortado", 1.0, 1, &url).unwrap_err();
        assert!(matches!(
            err,
            CoffeeItemError::TooLong {
                field: CoffeeField::ImageReference,
                ..
            }
        ));
    }

    #[test]
    fn test_price_and_quantity_are_unconstrained() {
        let item = NewCoffeeItem::new("Refund", -4.125, -3, "/r.png").unwrap();
        assert!((item.price - -4.125).abs() < f64::EPSILON);
        assert_eq!(item.quantity, -3);
    }

    #[test]
    fn test_price_must_be_finite() {
        let err = NewCoffeeItem::new("Void", f64::NAN, 1, "/v.png").unwrap_err();
        assert_eq!(err, CoffeeItemError::NotFinite(CoffeeField::Price));
    }

    #[test]
    fn test_errors_collects_every_field() {
        let item = NewCoffeeItem {
            name: String::new(),
            price: f64::INFINITY,
            quantity: 0,
            image_reference: String::new(),
        };
        let fields: Vec<_> = item.errors().iter().map(CoffeeItemError::field).collect();
        assert_eq!(
            fields,
            vec![
                CoffeeField::Name,
                CoffeeField::Price,
                CoffeeField::ImageReference
            ]
        );
    }

    #[test]
    fn test_display_value_price_roundtrips() {
        let mut item = espresso();
        item.price = 0.1 + 0.2;
        let shown = item.display_value(CoffeeField::Price);
        assert!((shown.parse::<f64>().unwrap() - item.price).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_value_per_field() {
        let item = espresso();
        assert_eq!(item.display_value(CoffeeField::Name), "Espresso");
        assert_eq!(item.display_value(CoffeeField::Price), "2.5");
        assert_eq!(item.display_value(CoffeeField::Quantity), "12");
    }

    #[test]
    fn test_field_keys_match_columns() {
        let keys: Vec<_> = CoffeeField::ALL.into_iter().map(CoffeeField::key).collect();
        assert_eq!(keys, vec!["name", "price", "quantity", "image_reference"]);
    }
}
