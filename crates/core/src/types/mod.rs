//! Core types for the cafe catalog.

pub mod coffee;
pub mod id;

pub use coffee::{
    CoffeeField, CoffeeItem, CoffeeItemError, IMAGE_REFERENCE_MAX_LEN, NAME_MAX_LEN,
    NewCoffeeItem,
};
pub use id::*;
