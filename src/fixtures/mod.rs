//! Fixtures

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    basket::Basket,
    fixtures::{items::ItemsFixture, products::ProductsFixture},
    items::{Item, ItemError},
    products::Product,
};

pub mod items;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// No items loaded
    #[error("No items loaded; cannot create basket")]
    NoItems,

    /// Not enough items in fixture
    #[error("Not enough items in fixture, available: {available}, requested: {requested}")]
    NotEnoughItems {
        /// Number of items defined in the fixture
        available: usize,
        /// Number of items requested
        requested: usize,
    },

    /// Item construction error
    #[error(transparent)]
    Item(#[from] ItemError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Product catalog keyed by fixture key
    products: FxHashMap<String, Product>,

    /// Pre-built items, in fixture order
    items: Vec<Item>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: FxHashMap::default(),
            items: Vec::new(),
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// Nothing is added unless every product in the file is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a product price is invalid.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        let products = fixture
            .products
            .into_iter()
            .map(|(key, product)| Product::try_from(product).map(|product| (key, product)))
            .collect::<Result<Vec<_>, _>>()?;

        self.products.extend(products);

        debug!(path = %file_path.display(), products = self.products.len(), "loaded products");

        Ok(self)
    }

    /// Load items from a YAML fixture file
    ///
    /// Nothing is added unless every line resolves to a valid item.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if referenced products don't exist.
    pub fn load_items(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("items").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ItemsFixture = serde_norway::from_str(&contents)?;

        let items = fixture
            .items
            .iter()
            .map(|line| -> Result<Item, FixtureError> {
                Ok(self.product(&line.product)?.item(line.quantity)?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.items.extend(items);

        debug!(path = %file_path.display(), items = self.items.len(), "loaded items");

        Ok(self)
    }

    /// Load a complete fixture set (products and items with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?.load_items(name)?;

        Ok(fixture)
    }

    /// Get a product by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, key: &str) -> Result<&Product, FixtureError> {
        self.products
            .get(key)
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Get all items
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Create a basket from the loaded items, optionally limited to the first `n`
    ///
    /// # Errors
    ///
    /// Returns an error if no items are loaded or more items are requested than exist.
    pub fn basket(&self, n: Option<usize>) -> Result<Basket, FixtureError> {
        if self.items.is_empty() {
            return Err(FixtureError::NoItems);
        }

        if let Some(n) = n
            && n > self.items.len()
        {
            return Err(FixtureError::NotEnoughItems {
                requested: n,
                available: self.items.len(),
            });
        }

        let items: Vec<Item> = self
            .items
            .iter()
            .take(n.unwrap_or(self.items.len()))
            .cloned()
            .collect();

        Ok(Basket::with_items(items))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
