//! Cafe Catalog Core - Shared types library.
//!
//! This crate provides the catalog types used by every component:
//! - `storefront` - Public catalog page
//! - `admin` - Catalog management console (private network only)
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no database
//! access, no HTTP. Database encodings for IDs live behind the `postgres`
//! feature.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs and the `CoffeeItem` record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
