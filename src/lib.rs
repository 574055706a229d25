//! Warehouse
//!
//! Inventory engine for a small electronics retailer. Products of a closed set
//! of variants (laptops, phones and desktops) are kept in a [`catalog::Catalog`],
//! converted to and from JSON documents by [`documents`], updated through
//! document patches, and persisted to a single JSON file by [`storage`].

pub mod catalog;
pub mod categories;
pub mod documents;
pub mod prelude;
pub mod products;
pub mod storage;
