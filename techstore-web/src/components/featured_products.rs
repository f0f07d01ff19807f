use techstore_core::{CardHover, NavTarget, Product, format_price};
use yew::prelude::*;

use super::carousel::Carousel;
use super::icons::{Icon, IconKind};
use super::star_rating::StarRating;
use crate::defaults;

#[derive(Properties, PartialEq, Clone)]
pub struct FeaturedCardProps {
    pub product: Product,
    #[prop_or_default]
    pub on_add_to_cart: Callback<String>,
    #[prop_or_default]
    pub on_add_to_wishlist: Callback<String>,
}

/// Carousel card whose quick actions appear while hovered.
#[function_component(FeaturedCard)]
pub fn featured_card(props: &FeaturedCardProps) -> Html {
    let hover = use_state(CardHover::new);
    let on_enter = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *hover;
            next.enter();
            hover.set(next);
        })
    };
    let on_leave = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *hover;
            next.leave();
            hover.set(next);
        })
    };
    let quick_action = |cb: &Callback<String>| {
        let cb = cb.clone();
        let id = props.product.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id.clone());
        })
    };
    let on_cart = quick_action(&props.on_add_to_cart);
    let on_wishlist = quick_action(&props.on_add_to_wishlist);

    let product = &props.product;
    html! {
        <div
            class="featured-card relative h-full overflow-hidden rounded-lg bg-white shadow-md dark:bg-gray-800"
            data-hovered={hover.is_hovered().to_string()}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            { if product.is_new {
                html! { <span class="badge badge-new absolute top-2 left-2 z-10 bg-blue-500">{ "New" }</span> }
            } else { Html::default() }}
            { product.discount().map(|pct| html! {
                <span class="badge badge-sale absolute top-2 right-2 z-10 bg-red-500">{ format!("{pct}% OFF") }</span>
            }).unwrap_or_default() }
            <div class="relative h-48 overflow-hidden bg-gray-100 dark:bg-gray-700">
                <img
                    src={product.image.clone()}
                    alt={product.name.clone()}
                    class="h-full w-full object-cover transition-transform duration-500 ease-in-out"
                    style={format!("transform: {}", hover.image_transform())}
                />
                <div class={classes!("quick-actions", "absolute", "inset-0", "flex", "items-center", "justify-center", "gap-2", "bg-black/20", "transition-opacity", "duration-300", hover.overlay_class())}>
                    <button class="rounded-full p-2" aria-label="Add to cart" onclick={on_cart}>
                        <Icon kind={IconKind::ShoppingCart} class="h-4 w-4" />
                    </button>
                    <button class="rounded-full p-2" aria-label="Add to wishlist" onclick={on_wishlist}>
                        <Icon kind={IconKind::Heart} class="h-4 w-4" />
                    </button>
                </div>
            </div>
            <div class="p-4">
                <div class="mb-1 text-xs text-gray-500 dark:text-gray-400">{ product.category.clone() }</div>
                <h3 class="mb-1 line-clamp-2 font-medium text-gray-900 dark:text-gray-100">{ product.name.clone() }</h3>
                <StarRating class="mb-2" rating={product.rating} />
                <div class="flex items-center gap-2">
                    <span class="price font-bold text-gray-900 dark:text-white">{ format_price(product.price) }</span>
                    { product.original_price.map(|original| html! {
                        <span class="original-price text-sm text-gray-500 line-through">{ format_price(original) }</span>
                    }).unwrap_or_default() }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FeaturedProductsProps {
    #[prop_or(AttrValue::Static("Featured Products"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static("Check out our latest tech products and exclusive deals"))]
    pub subtitle: AttrValue,
    #[prop_or_else(defaults::featured_products)]
    pub products: Vec<Product>,
    #[prop_or_default]
    pub on_add_to_cart: Callback<String>,
    #[prop_or_default]
    pub on_add_to_wishlist: Callback<String>,
    #[prop_or_else(defaults::log_navigation)]
    pub on_navigate: Callback<NavTarget>,
}

#[function_component(FeaturedProducts)]
pub fn featured_products(props: &FeaturedProductsProps) -> Html {
    let view_all = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(NavTarget::Link("/products".to_string())))
    };
    html! {
        <section class="featured-products bg-gray-50 px-4 py-12 dark:bg-gray-900">
            <div class="container mx-auto max-w-7xl">
                <div class="mb-10 text-center">
                    <h2 class="mb-3 text-3xl font-bold text-gray-900 dark:text-white">{ props.title.clone() }</h2>
                    <p class="mx-auto max-w-2xl text-gray-600 dark:text-gray-400">{ props.subtitle.clone() }</p>
                </div>
                <div class="relative px-12">
                    <Carousel visible={4} class="w-full" item_class="p-1 md:basis-1/2 lg:basis-1/3 xl:basis-1/4">
                        { for props.products.iter().map(|product| html! {
                            <FeaturedCard
                                key={product.id.clone()}
                                product={product.clone()}
                                on_add_to_cart={props.on_add_to_cart.clone()}
                                on_add_to_wishlist={props.on_add_to_wishlist.clone()}
                            />
                        }) }
                    </Carousel>
                </div>
                <div class="mt-8 text-center">
                    <button class="view-all rounded-full border px-6" onclick={view_all}>{ "View All Products" }</button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_default_products_with_discount_badges() {
        let html = block_on(LocalServerRenderer::<FeaturedProducts>::new().render());
        assert!(html.contains("Featured Products"));
        assert!(html.contains("Latest Smartphone Pro Max"));
        assert!(html.contains("23% OFF"));
        assert!(html.contains("Smart Home Security System"));
        assert_eq!(html.matches("% OFF").count(), 5);
        assert!(html.contains("View All Products"));
    }

    #[test]
    fn cards_start_unhovered() {
        let product = defaults::featured_products().remove(0);
        let html = block_on(
            LocalServerRenderer::<FeaturedCard>::with_props(FeaturedCardProps {
                product,
                on_add_to_cart: Callback::noop(),
                on_add_to_wishlist: Callback::noop(),
            })
            .render(),
        );
        assert!(html.contains("data-hovered=\"false\""));
        assert!(html.contains("opacity-0"));
        assert!(html.contains("transform: scale(1)"));
        assert!(html.contains("4.8"));
    }
}
