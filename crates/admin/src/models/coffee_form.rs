//! Add/change form for catalog entries.
//!
//! Browsers submit every field as text. Parsing turns the raw strings into a
//! [`NewCoffeeItem`] or a set of per-field messages for re-rendering.

use serde::Deserialize;

use cafe_catalog_core::{
    CoffeeField, CoffeeItem, CoffeeItemError, IMAGE_REFERENCE_MAX_LEN, NAME_MAX_LEN,
    NewCoffeeItem,
};

const REQUIRED: &str = "This field is required.";
const NOT_A_NUMBER: &str = "Enter a number.";
const NOT_A_WHOLE_NUMBER: &str = "Enter a whole number.";

/// Raw form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CoffeeItemForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub image_reference: String,
}

/// Validation messages keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(CoffeeField, String)>,
}

impl FieldErrors {
    fn add(&mut self, field: CoffeeField, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages for one field, in the order they were found.
    #[must_use]
    pub fn for_field(&self, field: CoffeeField) -> Vec<String> {
        self.errors
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

/// One rendered form input.
#[derive(Debug, Clone)]
pub struct FormFieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub step: Option<&'static str>,
    pub max_length: Option<usize>,
    pub value: String,
    pub errors: Vec<String>,
}

impl CoffeeItemForm {
    /// Pre-fill from a stored entry.
    #[must_use]
    pub fn from_item(item: &CoffeeItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price.to_string(),
            quantity: item.quantity.to_string(),
            image_reference: item.image_reference.clone(),
        }
    }

    /// Raw submitted value of a field.
    #[must_use]
    pub fn value(&self, field: CoffeeField) -> &str {
        match field {
            CoffeeField::Name => &self.name,
            CoffeeField::Price => &self.price,
            CoffeeField::Quantity => &self.quantity,
            CoffeeField::ImageReference => &self.image_reference,
        }
    }

    /// Parse and validate the submission.
    ///
    /// # Errors
    ///
    /// Returns every field problem found; a field may carry one message.
    pub fn parse(&self) -> Result<NewCoffeeItem, FieldErrors> {
        let mut errors = FieldErrors::default();

        let price = match self.price.trim() {
            "" => {
                errors.add(CoffeeField::Price, REQUIRED);
                None
            }
            raw => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => Some(value),
                _ => {
                    errors.add(CoffeeField::Price, NOT_A_NUMBER);
                    None
                }
            },
        };

        let quantity = match self.quantity.trim() {
            "" => {
                errors.add(CoffeeField::Quantity, REQUIRED);
                None
            }
            raw => raw.parse::<i32>().map_or_else(
                |_| {
                    errors.add(CoffeeField::Quantity, NOT_A_WHOLE_NUMBER);
                    None
                },
                Some,
            ),
        };

        let candidate = NewCoffeeItem {
            name: self.name.trim().to_owned(),
            price: price.unwrap_or_default(),
            quantity: quantity.unwrap_or_default(),
            image_reference: self.image_reference.trim().to_owned(),
        };
        for err in candidate.errors() {
            errors.add(err.field(), message(&err));
        }

        if errors.is_empty() {
            Ok(candidate)
        } else {
            Err(errors)
        }
    }

    /// Inputs for every field, with their messages.
    #[must_use]
    pub fn fields(&self, errors: &FieldErrors) -> Vec<FormFieldView> {
        CoffeeField::ALL
            .into_iter()
            .map(|field| {
                let (input_type, step, max_length) = match field {
                    CoffeeField::Name => ("text", None, Some(NAME_MAX_LEN)),
                    CoffeeField::Price => ("number", Some("any"), None),
                    CoffeeField::Quantity => ("number", Some("1"), None),
                    CoffeeField::ImageReference => ("text", None, Some(IMAGE_REFERENCE_MAX_LEN)),
                };
                FormFieldView {
                    key: field.key(),
                    label: field.label(),
                    input_type,
                    step,
                    max_length,
                    value: self.value(field).to_owned(),
                    errors: errors.for_field(field),
                }
            })
            .collect()
    }
}

fn message(err: &CoffeeItemError) -> String {
    match err {
        CoffeeItemError::Required(_) => REQUIRED.to_string(),
        CoffeeItemError::TooLong { max, actual, .. } => {
            format!("Ensure this value has at most {max} characters (it has {actual}).")
        }
        CoffeeItemError::NotFinite(_) => NOT_A_NUMBER.to_string(),
    }
}
