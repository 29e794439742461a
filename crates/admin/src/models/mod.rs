//! Form models for the console.

pub mod coffee_form;

pub use coffee_form::{CoffeeItemForm, FieldErrors};
