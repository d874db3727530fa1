//! In-memory product filtering and sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::money::Money;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Featured products first (default).
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    Rating,
    /// Name A-Z.
    Name,
}

impl SortKey {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Name => "Name: A-Z",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "featured" => Some(SortKey::Featured),
            "price-asc" | "price-low" => Some(SortKey::PriceAsc),
            "price-desc" | "price-high" => Some(SortKey::PriceDesc),
            "rating" => Some(SortKey::Rating),
            "name" => Some(SortKey::Name),
            _ => None,
        }
    }
}

/// A product listing query.
///
/// All criteria are optional; an empty query returns the whole catalog in
/// the default sort order.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Exact category to match.
    pub category: Option<String>,
    /// Case-insensitive needle matched against name and brand.
    pub search: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Money>,
    /// Inclusive upper price bound.
    pub max_price: Option<Money>,
    /// Sort order.
    pub sort: SortKey,
}

impl ProductQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !category.is_empty() {
            self.category = Some(category);
        }
        self
    }

    /// Match a text needle against product name and brand.
    pub fn with_search(mut self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        if !needle.is_empty() {
            self.search = Some(needle);
        }
        self
    }

    /// Restrict to a price range. Either bound may be `None`.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set the sort order.
    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Run the query against a catalog.
    pub fn run<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let mut matches: Vec<&Product> = catalog.iter().filter(|p| self.matches(p)).collect();

        match self.sort {
            SortKey::Featured => {
                matches.sort_by_key(|p| !p.featured);
            }
            SortKey::PriceAsc => matches.sort_by_key(|p| p.price.cents),
            SortKey::PriceDesc => matches.sort_by_key(|p| std::cmp::Reverse(p.price.cents)),
            SortKey::Rating => matches.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
            SortKey::Name => matches.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        matches
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_brand = product.brand.to_lowercase().contains(&needle);
            if !in_name && !in_brand {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price.cents < min.cents {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price.cents > max.cents {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn catalog() -> Catalog {
        let mut phone = Product::new("1", "iPhone 15 Pro", Money::new(120000, Currency::USD));
        phone.category = "Smartphones".into();
        phone.brand = "Apple".into();
        phone.rating = 4.8;
        phone.featured = true;

        let mut laptop = Product::new("2", "Dell XPS 15", Money::new(180000, Currency::USD));
        laptop.category = "Laptops".into();
        laptop.brand = "Dell".into();
        laptop.rating = 4.5;

        let mut buds = Product::new("3", "AirPods Pro 2", Money::new(29900, Currency::USD));
        buds.category = "Accesorios".into();
        buds.brand = "Apple".into();
        buds.rating = 4.7;

        Catalog::with_products(vec![phone, laptop, buds]).unwrap()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let catalog = catalog();
        assert_eq!(ProductQuery::new().run(&catalog).len(), 3);
    }

    #[test]
    fn test_category_filter() {
        let catalog = catalog();
        let hits = ProductQuery::new().with_category("Laptops").run(&catalog);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dell XPS 15");
    }

    #[test]
    fn test_search_matches_name_or_brand() {
        let catalog = catalog();
        // "apple" matches brand of two products, case-insensitively
        let hits = ProductQuery::new().with_search("APPLE").run(&catalog);
        assert_eq!(hits.len(), 2);

        let hits = ProductQuery::new().with_search("xps").run(&catalog);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_price_range() {
        let catalog = catalog();
        let hits = ProductQuery::new()
            .with_price_range(
                Some(Money::new(100000, Currency::USD)),
                Some(Money::new(150000, Currency::USD)),
            )
            .run(&catalog);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "1");
    }

    #[test]
    fn test_sort_price_asc() {
        let catalog = catalog();
        let hits = ProductQuery::new()
            .sorted_by(SortKey::PriceAsc)
            .run(&catalog);
        let prices: Vec<i64> = hits.iter().map(|p| p.price.cents).collect();
        assert_eq!(prices, vec![29900, 120000, 180000]);
    }

    #[test]
    fn test_sort_featured_first() {
        let catalog = catalog();
        let hits = ProductQuery::new().run(&catalog);
        assert!(hits[0].featured);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!(SortKey::from_str("price-asc"), Some(SortKey::PriceAsc));
        assert_eq!(SortKey::from_str("RATING"), Some(SortKey::Rating));
        assert_eq!(SortKey::from_str("bogus"), None);
    }
}
