//! Warehouse prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError},
    categories::{Category, CategoryId, CategoryRegistry},
    documents::{Document, DocumentError, ProductPatch, from_document, to_document},
    products::{
        Desktop, Laptop, Phone, Product, ProductDetails, ProductError, ProductKind, UnknownKind,
    },
    storage::{LoadOutcome, StorageError},
};
