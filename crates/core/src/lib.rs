//! GoMarketplace Core - Shared types library.
//!
//! This crate provides common types used across all GoMarketplace components:
//! - `cart` - The cart state container library
//! - `cli` - Command-line host for driving the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no async
//! runtime. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers and cart line items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
