//! This library provides functionality for creating buy order listings on
//! the backpack.tf classifieds. It covers the configuration document, the
//! translation from simplified orders to the wire listing shape, and the
//! batch submission call.
mod config;
mod conversion;
mod error;
mod http;
mod schema;

pub use config::{Config, CONFIG_FILE, TOKEN_PLACEHOLDER};
pub use error::Error;
pub use http::HttpClient;
pub use schema::{Attribute, BuyOrder, Currencies, Listing, ListingItem, Quality, QualitySpec};

pub type Result<T> = std::result::Result<T, Error>;
