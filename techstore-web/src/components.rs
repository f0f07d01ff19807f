pub mod account_menu;
pub mod carousel;
pub mod category_showcase;
pub mod featured_products;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;
pub mod mega_menu;
pub mod product_card;
pub mod promo_banner;
pub mod star_rating;
