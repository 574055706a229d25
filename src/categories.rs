//! Categories
//!
//! The registry is a fixed table. Each category names the product variant
//! created for it, so the add path never has to guess a kind from a name.

use serde::Serialize;

use crate::products::ProductKind;

/// Category identifier
pub type CategoryId = u32;

/// A named grouping of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: &'static str,
    description: &'static str,
    kind: ProductKind,
}

impl Category {
    const fn new(
        id: CategoryId,
        name: &'static str,
        description: &'static str,
        kind: ProductKind,
    ) -> Self {
        Self {
            id,
            name,
            description,
            kind,
        }
    }

    /// Category identifier
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Description
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Product variant created for this category
    pub fn kind(&self) -> ProductKind {
        self.kind
    }
}

const CATEGORIES: [Category; 3] = [
    Category::new(1, "Laptop", "Portable computers", ProductKind::Laptop),
    Category::new(2, "Phone", "Mobile phones", ProductKind::Phone),
    Category::new(3, "Desktop", "Desktop computers", ProductKind::Desktop),
];

/// Read-only lookup over the fixed category table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRegistry;

impl CategoryRegistry {
    /// Create the registry.
    pub fn new() -> Self {
        Self
    }

    /// All categories, in creation order.
    pub fn all(self) -> &'static [Category] {
        &CATEGORIES
    }

    /// Look up a category by identifier.
    pub fn by_id(self, id: CategoryId) -> Option<&'static Category> {
        CATEGORIES.iter().find(|category| category.id == id)
    }

    /// The product variant created for a category.
    pub fn kind_for(self, id: CategoryId) -> Option<ProductKind> {
        self.by_id(id).map(Category::kind)
    }

    /// The first category whose products are of the given kind.
    pub fn default_for(self, kind: ProductKind) -> Option<&'static Category> {
        CATEGORIES.iter().find(|category| category.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_preserves_creation_order() {
        let ids: Vec<_> = CategoryRegistry::new().all().iter().map(Category::id).collect();

        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn by_id_finds_known_categories() {
        let registry = CategoryRegistry::new();

        assert_eq!(registry.by_id(2).map(Category::name), Some("Phone"));
        assert_eq!(
            registry.by_id(3).map(Category::description),
            Some("Desktop computers")
        );
        assert!(registry.by_id(0).is_none());
        assert!(registry.by_id(4).is_none());
    }

    #[test]
    fn kind_for_is_an_explicit_table() {
        let registry = CategoryRegistry::new();

        assert_eq!(registry.kind_for(1), Some(ProductKind::Laptop));
        assert_eq!(registry.kind_for(2), Some(ProductKind::Phone));
        assert_eq!(registry.kind_for(3), Some(ProductKind::Desktop));
        assert_eq!(registry.kind_for(42), None);
    }

    #[test]
    fn default_for_maps_back_to_category() {
        let registry = CategoryRegistry::new();

        for category in registry.all() {
            assert_eq!(registry.default_for(category.kind()), Some(category));
        }
    }

    #[test]
    fn category_serializes_kind_as_discriminator() -> testresult::TestResult {
        let value = serde_json::to_value(CategoryRegistry::new().by_id(3))?;

        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "name": "Desktop",
                "description": "Desktop computers",
                "kind": "DesktopComputer",
            })
        );

        Ok(())
    }
}
