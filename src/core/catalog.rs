//! Read-only product catalog

use crate::core::error::Error;
use crate::core::types::SortOrder;
use crate::models::Product;
use crate::Result;

use rust_decimal::Decimal;
use std::collections::HashSet;

/// Category value that matches every product
pub const ALL_CATEGORIES: &str = "all";

/// Number of related products shown on a detail page
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// Filters applied by [`Catalog::query`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    /// Restrict to one category. `None` or `"all"` keeps every category.
    pub category: Option<String>,
    /// Case-insensitive substring matched against name and description
    pub search_term: Option<String>,
    /// Result ordering
    pub sort_order: SortOrder,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the category filter
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the search term
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Sets the sort order
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }
}

/// The list of purchasable products
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog, rejecting duplicate product ids
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(Error::InvalidData(format!(
                    "Duplicate product id in catalog: {}",
                    product.id
                )));
            }
        }

        Ok(Self { products })
    }

    /// The shop's built-in product list
    pub fn default_catalog() -> Self {
        let item = |id: &str, name: &str, cents: i64, category: &str, description: &str| {
            Product::new(id, name, Decimal::new(cents, 2))
                .with_category(category)
                .with_description(description)
        };

        #[rustfmt::skip]
        let products = vec![
            item("prod-1", "Organic Cotton Baby Romper", 2499, "clothing",
                "Soft and breathable organic cotton romper for your baby's comfort."),
            item("prod-2", "Baby Bath Set", 3499, "care",
                "Complete bath set with gentle baby soap, shampoo, and lotion."),
            item("prod-3", "Adjustable Baby Stroller", 14999, "gear",
                "Lightweight and adjustable stroller for comfortable outings."),
            item("prod-4", "Maternity Support Belt", 2999, "maternity",
                "Comfortable support belt for expectant mothers."),
            item("prod-5", "Baby Sleep Sack", 1999, "sale",
                "Cozy sleep sack to keep your baby warm and comfortable during sleep."),
            item("prod-6", "Teething Toys Set", 1599, "care",
                "Safe and colorful teething toys to soothe your baby's gums."),
            item("prod-7", "Baby Monitor", 7999, "gear",
                "High-definition video monitor with night vision and two-way audio."),
            item("prod-8", "Nursing Cover", 2299, "maternity",
                "Breathable and stylish nursing cover for privacy while breastfeeding."),
            item("prod-9", "Baby Bottle Set", 2999, "care",
                "Anti-colic baby bottles for comfortable feeding."),
            item("prod-10", "Baby Onesie 3-Pack", 1999, "clothing",
                "Set of three soft cotton onesies in different colors."),
            item("prod-11", "Baby Car Seat", 11999, "gear",
                "Safety-rated car seat with extra padding for comfort."),
            item("prod-12", "Maternity Dress", 3999, "maternity",
                "Comfortable and stylish dress designed for expectant mothers."),
        ];

        Self { products }
    }

    /// All products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Looks up a product by id, failing when it does not exist
    pub fn require(&self, id: &str) -> Result<&Product> {
        self.get(id)
            .ok_or_else(|| Error::NotFound(format!("Product {}", id)))
    }

    /// Distinct category labels in the order they first appear
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|product| product.category.as_str())
            .filter(|category| !category.is_empty() && seen.insert(*category))
            .collect()
    }

    /// Products matching `query`, sorted as requested
    pub fn query(&self, query: &CatalogQuery) -> Vec<&Product> {
        let category = query
            .category
            .as_deref()
            .filter(|category| *category != ALL_CATEGORIES);
        let term = query
            .search_term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        let mut results: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| category.map_or(true, |c| product.category == c))
            .filter(|product| {
                term.as_deref().map_or(true, |t| {
                    product.name.to_lowercase().contains(t)
                        || product.description.to_lowercase().contains(t)
                })
            })
            .collect();

        match query.sort_order {
            SortOrder::Default => {}
            SortOrder::PriceLowToHigh => results.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::PriceHighToLow => results.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::NameAToZ => results.sort_by_cached_key(|p| p.name.to_lowercase()),
            SortOrder::NameZToA => {
                results.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()))
            }
        }

        results
    }

    /// Up to `limit` other products from the same category, in catalog order
    pub fn related(&self, product_id: &str, limit: usize) -> Vec<&Product> {
        let Some(product) = self.get(product_id) else {
            return Vec::new();
        };

        self.products
            .iter()
            .filter(|other| other.category == product.category && other.id != product.id)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_default_catalog_lookup() {
        let catalog = Catalog::default_catalog();

        assert_eq!(catalog.products().len(), 12);
        assert_eq!(catalog.get("prod-3").unwrap().price, dec!(149.99));
        assert_eq!(catalog.get("prod-11").unwrap().name, "Baby Car Seat");
        assert!(catalog.get("prod-99").is_none());
        assert!(matches!(catalog.require("prod-99"), Err(Error::NotFound(_))));
        assert_eq!(
            catalog.categories(),
            vec!["clothing", "care", "gear", "maternity", "sale"]
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![
            Product::new("a", "One", dec!(1)),
            Product::new("a", "Two", dec!(2)),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::default_catalog();

        let care = catalog.query(&CatalogQuery::new().with_category("care"));
        assert_eq!(ids(&care), vec!["prod-2", "prod-6", "prod-9"]);

        let maternity = catalog.query(&CatalogQuery::new().with_category("maternity"));
        assert_eq!(ids(&maternity), vec!["prod-4", "prod-8", "prod-12"]);

        let all = catalog.query(&CatalogQuery::new().with_category(ALL_CATEGORIES));
        assert_eq!(all.len(), 12);
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let catalog = Catalog::default_catalog();

        let bottles = catalog.query(&CatalogQuery::new().with_search_term("  BOTTLE "));
        assert_eq!(ids(&bottles), vec!["prod-9"]);

        let gums = catalog.query(&CatalogQuery::new().with_search_term("gums"));
        assert_eq!(ids(&gums), vec!["prod-6"]);
    }

    #[test]
    fn test_sorting() {
        let catalog = Catalog::default_catalog();
        let gear = CatalogQuery::new().with_category("gear");

        let cheap_first =
            catalog.query(&gear.clone().with_sort_order(SortOrder::PriceLowToHigh));
        assert_eq!(ids(&cheap_first), vec!["prod-7", "prod-11", "prod-3"]);

        let expensive_first =
            catalog.query(&gear.clone().with_sort_order(SortOrder::PriceHighToLow));
        assert_eq!(ids(&expensive_first), vec!["prod-3", "prod-11", "prod-7"]);

        let care = CatalogQuery::new().with_category("care");
        let a_to_z = catalog.query(&care.clone().with_sort_order(SortOrder::NameAToZ));
        assert_eq!(ids(&a_to_z), vec!["prod-2", "prod-9", "prod-6"]);

        let z_to_a = catalog.query(&care.with_sort_order(SortOrder::NameZToA));
        assert_eq!(ids(&z_to_a), vec!["prod-6", "prod-9", "prod-2"]);
    }

    #[test]
    fn test_related_products() {
        let catalog = Catalog::default_catalog();

        let related = catalog.related("prod-2", RELATED_PRODUCTS_LIMIT);
        assert_eq!(ids(&related), vec!["prod-6", "prod-9"]);

        assert_eq!(catalog.related("prod-2", 1).len(), 1);
        let clothing = catalog.related("prod-1", RELATED_PRODUCTS_LIMIT);
        assert_eq!(ids(&clothing), vec!["prod-10"]);

        let sale = Catalog::new(vec![Product::new("s-1", "Sleep Sack", dec!(19.99))
            .with_category("sale")])
        .unwrap();
        assert!(sale.related("s-1", RELATED_PRODUCTS_LIMIT).is_empty());
        assert!(catalog.related("missing", RELATED_PRODUCTS_LIMIT).is_empty());
    }
}
