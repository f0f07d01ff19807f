use techstore_core::{CatalogProduct, format_price, struck_price};
use yew::prelude::*;

use super::icons::{Icon, IconKind};
use super::star_rating::StarRating;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    #[prop_or_default]
    pub product: CatalogProduct,
    /// Receives the product id.
    #[prop_or_default]
    pub on_add_to_cart: Callback<String>,
    /// Receives the product id.
    #[prop_or_default]
    pub on_add_to_wishlist: Callback<String>,
    #[prop_or_default]
    pub class: Classes,
}

/// Catalog listing card with stock and sale badges.
#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;
    let id_callback = |cb: &Callback<String>| {
        let cb = cb.clone();
        let id = product.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let on_cart = id_callback(&props.on_add_to_cart);
    let on_wishlist = id_callback(&props.on_add_to_wishlist);

    let class = classes!(
        "product-card",
        "w-full",
        "max-w-[300px]",
        "overflow-hidden",
        "rounded-lg",
        "border",
        "bg-white",
        "hover:shadow-md",
        props.class.clone()
    );
    html! {
        <article class={class} data-product-id={product.id.clone()}>
            <div class="relative">
                <div class="relative h-[200px] w-full overflow-hidden bg-gray-100">
                    <img src={product.image.clone()} alt={product.name.clone()} class="h-full w-full object-cover hover:scale-105" />
                </div>
                <div class="badges absolute left-2 top-2 flex flex-col gap-1">
                    { if product.is_new {
                        html! { <span class="badge badge-new bg-blue-500 text-white">{ "New" }</span> }
                    } else { Html::default() }}
                    { product.sale_badge().map(|pct| html! {
                        <span class="badge badge-sale bg-red-500 text-white">{ format!("{pct}% OFF") }</span>
                    }).unwrap_or_default() }
                    { if product.is_out_of_stock {
                        html! { <span class="badge badge-stock bg-gray-100 text-gray-800">{ "Out of Stock" }</span> }
                    } else { Html::default() }}
                </div>
                <button
                    class="wishlist absolute right-2 top-2 h-8 w-8 rounded-full bg-white/80 hover:bg-white"
                    aria-label="Add to wishlist"
                    onclick={on_wishlist}
                >
                    <Icon kind={IconKind::Heart} class="h-4 w-4 text-gray-600" />
                </button>
            </div>
            <header class="p-4 pb-0">
                <h3 class="line-clamp-2 text-sm font-medium text-gray-900">{ product.name.clone() }</h3>
            </header>
            <div class="p-4 pt-2">
                <StarRating rating={product.rating} caption={AttrValue::from(format!("{} reviews", product.review_count))} />
                <div class="mt-2 flex items-center gap-2">
                    <span class="price text-lg font-bold text-gray-900">{ format_price(product.price) }</span>
                    { struck_price(product.price, product.original_price).map(|original| html! {
                        <span class="original-price text-sm text-gray-500 line-through">{ format_price(original) }</span>
                    }).unwrap_or_default() }
                </div>
            </div>
            <footer class="p-4 pt-0">
                <button class="add-to-cart w-full" disabled={product.is_out_of_stock} onclick={on_cart}>
                    <Icon kind={IconKind::ShoppingCart} class="mr-2 h-4 w-4" />
                    { if product.is_out_of_stock { "Out of Stock" } else { "Add to Cart" } }
                </button>
            </footer>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(product: CatalogProduct) -> String {
        block_on(
            LocalServerRenderer::<ProductCard>::with_props(ProductCardProps {
                product,
                on_add_to_cart: Callback::noop(),
                on_add_to_wishlist: Callback::noop(),
                class: Classes::new(),
            })
            .render(),
        )
    }

    #[test]
    fn default_card_shows_sale_badge_and_struck_price() {
        let html = render(CatalogProduct::default());
        assert!(html.contains("Wireless Noise-Cancelling Headphones"));
        assert!(html.contains("17% OFF"));
        assert!(html.contains("$249.99"));
        assert!(html.contains("$299.99"));
        assert!(html.contains("128 reviews"));
        assert!(html.contains("Add to Cart"));
        assert_eq!(html.matches("star-filled").count(), 5);
    }

    #[test]
    fn out_of_stock_disables_the_cart_button() {
        let html = render(CatalogProduct {
            is_out_of_stock: true,
            ..CatalogProduct::default()
        });
        assert!(html.contains("disabled"));
        assert!(!html.contains("Add to Cart"));
        assert_eq!(html.matches("Out of Stock").count(), 2);
    }

    #[test]
    fn no_sale_badge_without_sale_flag_or_markdown() {
        let html = render(CatalogProduct {
            is_sale: false,
            ..CatalogProduct::default()
        });
        assert!(!html.contains("% OFF"));

        let html = render(CatalogProduct {
            original_price: None,
            ..CatalogProduct::default()
        });
        assert!(!html.contains("% OFF"));
        assert!(!html.contains("original-price"));
    }
}
