//! Catalog
//!
//! The catalog owns every product. Records live in a [`SlotMap`] arena, an
//! insertion-ordered key list drives listings, and a serial number index
//! answers exact lookups. Callers only ever see borrows or cloned snapshots;
//! all mutation goes through the methods below.

use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;
use tracing::debug;

use crate::{
    categories::{CategoryId, CategoryRegistry},
    documents::{self, Document, DocumentError, ProductPatch},
    products::{Product, ProductError},
};

new_key_type! {
    /// Arena key of a product record
    struct ProductKey;
}

/// Errors raised by catalog operations. The catalog is unchanged whenever one
/// of these is returned.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product has the given serial number.
    #[error("product not found: {0}")]
    NotFound(String),

    /// Another product already uses the serial number.
    #[error("serial number already exists: {0}")]
    DuplicateSerial(String),

    /// The product rejected the change.
    #[error(transparent)]
    Product(#[from] ProductError),

    /// A patched document could not be turned back into a product.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Product catalog
#[derive(Debug, Default)]
pub struct Catalog {
    products: SlotMap<ProductKey, Product>,
    order: Vec<ProductKey>,
    serials: FxHashMap<String, ProductKey>,
    categories: CategoryRegistry,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from products, skipping any repeated serial numbers.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::new();

        for product in products {
            if let Err(error) = catalog.add(product) {
                debug!(%error, "skipped product");
            }
        }

        catalog
    }

    /// Category registry consulted by [`Catalog::list_by_category`].
    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog holds no products
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether a product with the serial number exists.
    pub fn contains_serial(&self, serial: &str) -> bool {
        self.serials.contains_key(serial)
    }

    /// Iterate over the products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.order.iter().filter_map(|key| self.products.get(*key))
    }

    /// Snapshot of every product, in insertion order.
    pub fn products(&self) -> Vec<Product> {
        self.iter().cloned().collect()
    }

    /// Add a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateSerial`] if the serial number is taken.
    pub fn add(&mut self, product: Product) -> Result<(), CatalogError> {
        let serial = product.serial_number().to_string();

        if self.serials.contains_key(&serial) {
            return Err(CatalogError::DuplicateSerial(serial));
        }

        debug!(serial = %serial, kind = %product.kind(), "added product");

        let key = self.products.insert(product);

        self.order.push(key);
        self.serials.insert(serial, key);

        Ok(())
    }

    /// Find a product by exact serial number.
    pub fn find_by_serial(&self, serial: &str) -> Option<&Product> {
        self.key_of(serial).and_then(|key| self.products.get(key))
    }

    /// Products whose name contains `term`. Matching is case-sensitive, and an
    /// empty term matches nothing.
    pub fn search_by_name(&self, term: &str) -> Vec<Product> {
        if term.is_empty() {
            return Vec::new();
        }

        self.iter()
            .filter(|product| product.name().contains(term))
            .cloned()
            .collect()
    }

    /// Products in a category. Unknown categories yield nothing.
    pub fn list_by_category(&self, category_id: CategoryId) -> Vec<Product> {
        if self.categories.by_id(category_id).is_none() {
            return Vec::new();
        }

        self.iter()
            .filter(|product| product.category_id() == category_id)
            .cloned()
            .collect()
    }

    /// Remove a product, returning it if it existed.
    pub fn remove_by_serial(&mut self, serial: &str) -> Option<Product> {
        let key = self.serials.remove(serial)?;

        self.order.retain(|existing| *existing != key);

        debug!(serial, "removed product");

        self.products.remove(key)
    }

    /// Add `amount` units to a product, returning its new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown serial number, or a
    /// [`CatalogError::Product`] error for a zero amount.
    pub fn stock_in(&mut self, serial: &str, amount: u32) -> Result<u32, CatalogError> {
        let quantity = self.product_mut(serial)?.increase_quantity(amount)?;

        debug!(serial, amount, quantity, "stocked in");

        Ok(quantity)
    }

    /// Remove `amount` units from a product, returning its new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown serial number, or a
    /// [`CatalogError::Product`] error for a zero amount or insufficient stock.
    pub fn stock_out(&mut self, serial: &str, amount: u32) -> Result<u32, CatalogError> {
        let quantity = self.product_mut(serial)?.decrease_quantity(amount)?;

        debug!(serial, amount, quantity, "stocked out");

        Ok(quantity)
    }

    /// Apply a patch to the product with serial number `current_serial`.
    ///
    /// The product is serialized, the patch is merged over the document, and a
    /// new product is built from the result. The new product takes the old
    /// one's place in the listing order. If the patch sets a different
    /// `"type"`, the product becomes that variant.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if `current_serial` is unknown,
    /// [`CatalogError::DuplicateSerial`] if the patch renames the product to a
    /// serial number that is already taken, or [`CatalogError::Document`] if
    /// the merged document does not describe a valid product. The catalog is
    /// left unchanged on error.
    pub fn apply_patch(
        &mut self,
        current_serial: &str,
        patch: ProductPatch,
    ) -> Result<&Product, CatalogError> {
        let key = self
            .key_of(current_serial)
            .ok_or_else(|| CatalogError::NotFound(current_serial.to_string()))?;

        let existing = self
            .products
            .get(key)
            .ok_or_else(|| CatalogError::NotFound(current_serial.to_string()))?;

        let target_serial = patch
            .serial_number
            .clone()
            .unwrap_or_else(|| current_serial.to_string());

        if target_serial != current_serial && self.serials.contains_key(&target_serial) {
            return Err(CatalogError::DuplicateSerial(target_serial));
        }

        let target_kind = patch.kind.unwrap_or_else(|| existing.kind());
        let merged = patch.merge_into(documents::to_document(existing));
        let replacement = documents::from_document(&merged)?;

        debug!(
            serial = current_serial,
            new_serial = %target_serial,
            from = %existing.kind(),
            to = %target_kind,
            "patched product"
        );

        let slot = self
            .products
            .get_mut(key)
            .ok_or_else(|| CatalogError::NotFound(current_serial.to_string()))?;

        *slot = replacement;

        if target_serial != current_serial {
            self.serials.remove(current_serial);
            self.serials.insert(target_serial, key);
        }

        self.products
            .get(key)
            .ok_or_else(|| CatalogError::NotFound(current_serial.to_string()))
    }

    /// Apply a patch given as a partial document.
    ///
    /// See [`Catalog::apply_patch`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Document`] if the document is not a valid
    /// patch, and otherwise the errors of [`Catalog::apply_patch`].
    pub fn apply_patch_document(
        &mut self,
        current_serial: &str,
        document: &Document,
    ) -> Result<&Product, CatalogError> {
        let patch = ProductPatch::from_document(document)?;

        self.apply_patch(current_serial, patch)
    }

    fn key_of(&self, serial: &str) -> Option<ProductKey> {
        self.serials.get(serial).copied()
    }

    fn product_mut(&mut self, serial: &str) -> Result<&mut Product, CatalogError> {
        self.key_of(serial)
            .and_then(|key| self.products.get_mut(key))
            .ok_or_else(|| CatalogError::NotFound(serial.to_string()))
    }
}
