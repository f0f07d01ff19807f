//! Shared default data for component props.
//!
//! The catalog and settings are parsed once from the data embedded in
//! `techstore-core`; a parse failure is logged and replaced by an empty
//! catalog so the page still renders its chrome.

use once_cell::sync::Lazy;
use techstore_core::{
    Catalog, Category, HeroSlide, LogNavigator, MenuCategory, NavTarget, Navigator, Product,
    StorefrontConfig,
};
use yew::{AttrValue, Callback};

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::builtin().unwrap_or_else(|err| {
        log::error!("Failed to load built-in catalog: {err}");
        Catalog::empty()
    })
});

static CONFIG: Lazy<StorefrontConfig> = Lazy::new(StorefrontConfig::default_config);

#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[must_use]
pub fn config() -> &'static StorefrontConfig {
    &CONFIG
}

#[must_use]
pub fn menu() -> Vec<MenuCategory> {
    catalog().menu.clone()
}

#[must_use]
pub fn categories() -> Vec<Category> {
    catalog().categories.clone()
}

#[must_use]
pub fn featured_products() -> Vec<Product> {
    catalog().featured_products.clone()
}

#[must_use]
pub fn hero_slides() -> Vec<HeroSlide> {
    catalog().hero_slides.clone()
}

#[must_use]
pub fn store_name() -> AttrValue {
    AttrValue::from(config().store_name.clone())
}

#[must_use]
pub fn cart_item_count() -> u32 {
    config().cart_item_count
}

#[must_use]
pub fn scroll_threshold_px() -> f64 {
    config().scroll_threshold_px
}

#[must_use]
pub fn wide_breakpoint_px() -> f64 {
    config().wide_breakpoint_px
}

/// Navigation handler used when the host supplies none: it only logs.
#[must_use]
pub fn log_navigation() -> Callback<NavTarget> {
    Callback::from(|target: NavTarget| LogNavigator.navigate(&target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_the_builtin_catalog() {
        assert_eq!(menu().len(), 7);
        assert_eq!(featured_products().len(), 6);
        assert_eq!(&*store_name(), "TechStore");
        assert_eq!(cart_item_count(), 3);
    }
}
