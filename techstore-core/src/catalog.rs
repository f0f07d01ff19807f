//! Storefront display records and the embedded mock catalog.
//!
//! Every record here is immutable display data. The built-in catalog is
//! compiled into the binary from `data/catalog.json` and validated on load.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::discount_percent;
use crate::slug::slugify;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate menu category key `{0}`")]
    DuplicateMenuKey(String),
    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },
}

/// A browsable category tile on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub slug: String,
}

/// A product shown in the featured carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    pub rating: f64,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_featured: bool,
}

impl Product {
    /// Derived discount; `None` hides the badge.
    #[must_use]
    pub fn discount(&self) -> Option<u32> {
        discount_percent(self.price, self.original_price)
    }
}

/// The standalone product card record with stock and sale flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    pub image: String,
    pub rating: f64,
    pub review_count: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_sale: bool,
    #[serde(default)]
    pub is_out_of_stock: bool,
}

impl Default for CatalogProduct {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            name: "Wireless Noise-Cancelling Headphones".to_string(),
            price: 249.99,
            original_price: Some(299.99),
            image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500&q=80"
                .to_string(),
            rating: 4.5,
            review_count: 128,
            is_new: false,
            is_sale: true,
            is_out_of_stock: false,
        }
    }
}

impl CatalogProduct {
    /// Sale badge percentage; only shown while the product is on sale.
    #[must_use]
    pub fn sale_badge(&self) -> Option<u32> {
        if self.is_sale {
            discount_percent(self.price, self.original_price)
        } else {
            None
        }
    }
}

/// Icon shown beside a mega-menu trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuIcon {
    Laptop,
    Smartphone,
    Headphones,
    Camera,
    Watch,
    Tv,
    Gamepad,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub name: String,
    pub href: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_popular: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedItem {
    pub name: String,
    pub description: String,
    pub href: String,
    pub image: String,
    #[serde(default)]
    pub discount: Option<String>,
}

/// A top-level mega-menu entry.
///
/// `key` identifies the entry for the disclosure state; `title` is only
/// the display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub key: String,
    pub title: String,
    pub icon: MenuIcon,
    pub subcategories: Vec<Subcategory>,
    #[serde(default)]
    pub featured: Option<Vec<FeaturedItem>>,
}

impl MenuCategory {
    /// Featured items, or `None` when the panel should show the explore
    /// call to action instead.
    #[must_use]
    pub fn featured_items(&self) -> Option<&[FeaturedItem]> {
        self.featured
            .as_deref()
            .filter(|items| !items.is_empty())
    }

    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub cta_text: String,
    pub cta_link: String,
}

/// Content of a promotional banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub title: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: String,
    pub background_class: String,
    pub text_class: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
}

impl Default for Promotion {
    fn default() -> Self {
        Self {
            title: "Limited Time Offer: 20% Off All Electronics".to_string(),
            description: "Shop our latest collection of premium tech products with exclusive discounts for a limited time only.".to_string(),
            cta_text: "Shop Now".to_string(),
            cta_link: "/products".to_string(),
            background_class: "bg-gradient-to-r from-indigo-600 to-purple-600".to_string(),
            text_class: "text-white".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1550009158-9ebf69173e03?w=600&q=80".to_string(),
            ),
            discount: Some("20%".to_string()),
            expiry_date: Some("June 30, 2023".to_string()),
        }
    }
}

/// The full mock data set behind the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub menu: Vec<MenuCategory>,
    pub categories: Vec<Category>,
    pub featured_products: Vec<Product>,
    pub hero_slides: Vec<HeroSlide>,
    #[serde(default)]
    pub promotion: Promotion,
}

impl Catalog {
    /// Create an empty catalog (useful for tests and load fallbacks).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            menu: Vec::new(),
            categories: Vec::new(),
            featured_products: Vec::new(),
            hero_slides: Vec::new(),
            promotion: Promotion::default(),
        }
    }

    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the catalog shape or if
    /// any list reuses an identifier.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Ensure every keyed list has unique identifiers.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut keys = HashSet::new();
        for entry in &self.menu {
            if !keys.insert(entry.key.as_str()) {
                return Err(CatalogError::DuplicateMenuKey(entry.key.clone()));
            }
        }
        ensure_unique("category", self.categories.iter().map(|c| c.id.as_str()))?;
        ensure_unique(
            "product",
            self.featured_products.iter().map(|p| p.id.as_str()),
        )?;
        ensure_unique("slide", self.hero_slides.iter().map(|s| s.id.as_str()))?;
        Ok(())
    }

    #[must_use]
    pub fn menu_entry(&self, key: &str) -> Option<&MenuCategory> {
        self.menu.iter().find(|entry| entry.key == key)
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.menu.len(), 7);
        assert_eq!(catalog.categories.len(), 6);
        assert_eq!(catalog.featured_products.len(), 6);
        assert_eq!(catalog.hero_slides.len(), 3);
    }

    #[test]
    fn duplicate_menu_keys_are_rejected() {
        let json = r#"{
            "menu": [
                {"key": "audio", "title": "Audio", "icon": "headphones", "subcategories": []},
                {"key": "audio", "title": "Audio Again", "icon": "headphones", "subcategories": []}
            ],
            "categories": [],
            "featured_products": [],
            "hero_slides": []
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateMenuKey(ref key) if key == "audio"));
    }

    #[test]
    fn shared_titles_are_fine_when_keys_differ() {
        let json = r#"{
            "menu": [
                {"key": "a", "title": "Audio", "icon": "headphones", "subcategories": []},
                {"key": "b", "title": "Audio", "icon": "headphones", "subcategories": []}
            ],
            "categories": [],
            "featured_products": [],
            "hero_slides": []
        }"#;
        assert!(Catalog::from_json(json).is_ok());
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = Catalog::from_json("{").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("JSON parsing error"));
    }

    #[test]
    fn empty_featured_list_counts_as_absent() {
        let entry = MenuCategory {
            key: "k".into(),
            title: "T".into(),
            icon: MenuIcon::Tv,
            subcategories: Vec::new(),
            featured: Some(Vec::new()),
        };
        assert!(entry.featured_items().is_none());
    }

    #[test]
    fn sale_badge_requires_sale_flag() {
        let mut product = CatalogProduct::default();
        assert_eq!(product.sale_badge(), Some(17));
        product.is_sale = false;
        assert_eq!(product.sale_badge(), None);
    }
}
