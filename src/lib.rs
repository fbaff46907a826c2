//! Saga Pricing
//!
//! Prices baskets of home-video titles. Every "Back to the Future" volume
//! costs 15 and the saga gets a quantity discount based on how many distinct
//! volumes are in the basket; every other title costs a flat 20.
//!
//! ```rust
//! use saga_pricing::parser::parse;
//!
//! let basket = parse("Back to the Future 1\nBack to the Future 2\nBack to the Future 3\nLa chèvre");
//!
//! assert_eq!(basket.total(), 56.0);
//! ```

pub mod basket;
pub mod cli;
pub mod discounts;
pub mod logging;
pub mod parser;
pub mod pricing;
pub mod receipt;
pub mod render;
pub mod titles;
