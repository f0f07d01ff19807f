//! TechStore Core
//!
//! Platform-agnostic storefront logic: the mock catalog, price and rating
//! rules, and the interaction state machines behind the header, mega-menu
//! and product cards. No UI or browser dependencies.

pub mod card;
pub mod catalog;
pub mod config;
pub mod disclosure;
pub mod header;
pub mod navigation;
pub mod pricing;
pub mod rating;
pub mod slug;

// Re-export commonly used types
pub use card::CardHover;
pub use catalog::{
    Catalog, CatalogError, CatalogProduct, Category, FeaturedItem, HeroSlide, MenuCategory,
    MenuIcon, Product, Promotion, Subcategory,
};
pub use config::StorefrontConfig;
pub use disclosure::{Disclosure, DisclosureEvent};
pub use header::{HeaderEvent, HeaderState, ScrollBinding, Viewport};
pub use navigation::{LogNavigator, NavTarget, Navigator};
pub use pricing::{discount_percent, format_price, struck_price};
pub use rating::{STAR_COUNT, StarRule, filled_count, rating_label, star_fills};
pub use slug::{category_href, slugify};
