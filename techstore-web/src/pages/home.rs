use techstore_core::{NavTarget, Promotion};
use yew::prelude::*;

use crate::components::category_showcase::CategoryShowcase;
use crate::components::featured_products::FeaturedProducts;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::icons::{Icon, IconKind};
use crate::components::promo_banner::PromotionalBanner;
use crate::defaults;

/// Selling points shown under the promotion: icon, tint, heading, body.
const REASONS: [(IconKind, &str, &str, &str); 3] = [
    (
        IconKind::Check,
        "blue",
        "Quality Products",
        "We carefully select only the best tech products from trusted brands.",
    ),
    (
        IconKind::Currency,
        "green",
        "Competitive Prices",
        "We offer the best prices on the market with regular discounts and promotions.",
    ),
    (
        IconKind::Support,
        "purple",
        "Fast Support",
        "Our customer support team is available 24/7 to assist you with any questions.",
    ),
];

/// The landing page's banner: the catalog promotion with the summer sale copy.
#[must_use]
pub fn summer_sale() -> Promotion {
    Promotion {
        title: "Summer Tech Sale: Up to 40% Off".to_string(),
        description: "Upgrade your tech with amazing discounts on our most popular products. Limited time offer!".to_string(),
        discount: Some("40%".to_string()),
        expiry_date: Some("August 31, 2023".to_string()),
        background_class: "bg-gradient-to-r from-blue-600 to-purple-600".to_string(),
        ..defaults::catalog().promotion.clone()
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct HomePageProps {
    #[prop_or_else(defaults::log_navigation)]
    pub on_navigate: Callback<NavTarget>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    html! {
        <div class="flex min-h-screen flex-col bg-background">
            <Header />
            <main id="main" class="flex-1">
                <Hero on_navigate={props.on_navigate.clone()} />
                <FeaturedProducts
                    title="Featured Tech Products"
                    subtitle="Discover our selection of premium electronics and gadgets"
                    on_navigate={props.on_navigate.clone()}
                />
                <CategoryShowcase />
                <PromotionalBanner promotion={summer_sale()} />
                { why_choose() }
            </main>
            <Footer />
        </div>
    }
}

fn why_choose() -> Html {
    html! {
        <section class="why-choose bg-gray-50 px-4 py-16 dark:bg-gray-900">
            <div class="container mx-auto max-w-7xl">
                <div class="mb-10 text-center">
                    <h2 class="mb-3 text-3xl font-bold text-gray-900 dark:text-white">{ "Why Choose TechStore" }</h2>
                    <p class="mx-auto max-w-2xl text-gray-600 dark:text-gray-400">
                        { "We offer the best selection of tech products with exceptional service" }
                    </p>
                </div>
                <div class="grid grid-cols-1 gap-8 md:grid-cols-3">
                    { for REASONS.iter().map(|(kind, tint, heading, body)| html! {
                        <div class="reason rounded-lg bg-white p-6 text-center shadow-md dark:bg-gray-800">
                            <div class={format!("mx-auto mb-4 flex h-16 w-16 items-center justify-center rounded-full bg-{tint}-100 dark:bg-{tint}-900")}>
                                <Icon kind={*kind} class={classes!("h-8", "w-8", format!("text-{tint}-600"), format!("dark:text-{tint}-300"))} />
                            </div>
                            <h3 class="mb-2 text-xl font-semibold text-gray-900 dark:text-white">{ *heading }</h3>
                            <p class="text-gray-600 dark:text-gray-400">{ *body }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
