//! In-memory product catalog with admin operations and derived indexes.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// The product catalog.
///
/// An ordered, id-indexed collection. Order is insertion order; lookups are
/// linear, which is fine for a demo-sized catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

/// Partial update for a product. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub original_price: Option<Money>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub stock: Option<u32>,
    pub image: Option<String>,
    pub featured: Option<bool>,
    pub on_sale: Option<bool>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a product list, rejecting duplicate ids.
    pub fn with_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut catalog = Self::new();
        for product in products {
            catalog.add(product)?;
        }
        Ok(catalog)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Iterate over all products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Add a product. Fails if the id is already taken or the data is
    /// inconsistent.
    pub fn add(&mut self, product: Product) -> Result<(), CommerceError> {
        if self.get(&product.id).is_some() {
            return Err(CommerceError::DuplicateProduct(product.id.to_string()));
        }
        validate(&product)?;
        self.products.push(product);
        Ok(())
    }

    /// Apply a partial update to a product.
    ///
    /// The patch is validated as a whole before anything is stored, so a
    /// rejected update leaves the product untouched.
    pub fn update(&mut self, id: &ProductId, patch: ProductPatch) -> Result<(), CommerceError> {
        let index = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;

        let mut updated = self.products[index].clone();
        patch.apply(&mut updated);
        validate(&updated)?;

        self.products[index] = updated;
        Ok(())
    }

    /// Remove a product, returning it.
    pub fn remove(&mut self, id: &ProductId) -> Result<Product, CommerceError> {
        let index = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        Ok(self.products.remove(index))
    }

    /// Replace the entire catalog contents.
    pub fn replace_all(&mut self, products: Vec<Product>) -> Result<(), CommerceError> {
        *self = Self::with_products(products)?;
        Ok(())
    }

    /// Distinct category names, sorted.
    pub fn categories(&self) -> Vec<String> {
        distinct(self.products.iter().map(|p| p.category.as_str()))
    }

    /// Distinct brand names, sorted.
    pub fn brands(&self) -> Vec<String> {
        distinct(self.products.iter().map(|p| p.brand.as_str()))
    }

    /// Products flagged as featured.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }

    /// Products currently on sale.
    pub fn on_sale(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_on_sale())
    }

    /// Products at or below the low-stock threshold.
    pub fn low_stock(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_low_stock())
    }
}

impl ProductPatch {
    fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(original_price) = self.original_price {
            product.original_price = Some(original_price);
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(brand) = self.brand {
            product.brand = brand;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(featured) = self.featured {
            product.featured = featured;
        }
        if let Some(on_sale) = self.on_sale {
            product.on_sale = on_sale;
        }
    }
}

fn validate(product: &Product) -> Result<(), CommerceError> {
    if product.name.trim().is_empty() {
        return Err(CommerceError::Validation("product name is empty".into()));
    }
    if product.price.cents < 0 {
        return Err(CommerceError::Validation("price is negative".into()));
    }
    if let Some(original) = product.original_price {
        if original.currency != product.price.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: product.price.currency.code().to_string(),
                got: original.currency.code().to_string(),
            });
        }
        if original.cents <= product.price.cents {
            return Err(CommerceError::Validation(
                "original price must exceed the selling price".into(),
            ));
        }
    }
    Ok(())
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .collect();
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn sample(id: &str, category: &str, brand: &str) -> Product {
        let mut p = Product::new(id, format!("Product {id}"), Money::new(1000, Currency::USD));
        p.category = category.to_string();
        p.brand = brand.to_string();
        p.stock = 10;
        p
    }

    fn catalog() -> Catalog {
        Catalog::with_products(vec![
            sample("1", "Smartphones", "Apple"),
            sample("2", "Laptops", "Apple"),
            sample("3", "Accesorios", "Sony"),
        ])
        .unwrap()
    }

    #[test]
    fn test_get() {
        let catalog = catalog();
        assert!(catalog.get(&"2".into()).is_some());
        assert!(catalog.get(&"99".into()).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = catalog();
        let before = catalog.len();

        let result = catalog.add(sample("1", "Laptops", "Dell"));
        assert!(matches!(result, Err(CommerceError::DuplicateProduct(_))));
        assert_eq!(catalog.len(), before);
    }

    #[test]
    fn test_update_patch() {
        let mut catalog = catalog();
        catalog
            .update(
                &"1".into(),
                ProductPatch {
                    price: Some(Money::new(900, Currency::USD)),
                    stock: Some(4),
                    ..Default::default()
                },
            )
            .unwrap();

        let p = catalog.get(&"1".into()).unwrap();
        assert_eq!(p.price.cents, 900);
        assert_eq!(p.stock, 4);
        // Untouched fields survive
        assert_eq!(p.brand, "Apple");
    }

    #[test]
    fn test_update_unknown_id() {
        let mut catalog = catalog();
        let result = catalog.update(&"99".into(), ProductPatch::default());
        assert!(matches!(result, Err(CommerceError::ProductNotFound(_))));
    }

    #[test]
    fn test_invalid_update_leaves_product_unchanged() {
        let mut catalog = catalog();
        // original price at or below the selling price is inconsistent
        let result = catalog.update(
            &"1".into(),
            ProductPatch {
                original_price: Some(Money::new(500, Currency::USD)),
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert!(catalog.get(&"1".into()).unwrap().original_price.is_none());
    }

    #[test]
    fn test_remove() {
        let mut catalog = catalog();
        let removed = catalog.remove(&"3".into()).unwrap();
        assert_eq!(removed.brand, "Sony");
        assert_eq!(catalog.len(), 2);

        assert!(matches!(
            catalog.remove(&"3".into()),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_replace_all() {
        let mut catalog = catalog();
        catalog
            .replace_all(vec![sample("7", "Audio", "Bose")])
            .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.categories(), vec!["Audio"]);

        // A duplicate batch is rejected wholesale
        let dupes = vec![sample("8", "Audio", "Bose"), sample("8", "Audio", "Bose")];
        assert!(catalog.replace_all(dupes).is_err());
    }

    #[test]
    fn test_derived_indexes_sorted_and_deduped() {
        let catalog = catalog();
        assert_eq!(
            catalog.categories(),
            vec!["Accesorios", "Laptops", "Smartphones"]
        );
        assert_eq!(catalog.brands(), vec!["Apple", "Sony"]);
    }
}
