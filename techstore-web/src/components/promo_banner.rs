use techstore_core::Promotion;
use yew::prelude::*;

use super::icons::{Icon, IconKind};

#[derive(Properties, PartialEq, Clone)]
pub struct PromotionalBannerProps {
    #[prop_or_default]
    pub promotion: Promotion,
}

/// Full-width promotion strip. The discount chip, expiry line and image are
/// each shown only when the promotion carries them.
#[function_component(PromotionalBanner)]
pub fn promotional_banner(props: &PromotionalBannerProps) -> Html {
    let promo = &props.promotion;
    let class = classes!(
        "promo-banner",
        "relative",
        "w-full",
        "overflow-hidden",
        "px-4",
        "py-10",
        "sm:px-6",
        "lg:px-8",
        promo.background_class.clone(),
        promo.text_class.clone()
    );
    html! {
        <div class={class}>
            <div class="absolute inset-0 opacity-10">
                <div class="absolute inset-0 bg-black opacity-20"></div>
            </div>
            <div class="container relative z-10 mx-auto">
                <div class="flex flex-col items-center justify-between gap-8 md:flex-row">
                    <div class="space-y-4 md:w-2/3">
                        { promo.discount.as_ref().map(|discount| html! {
                            <div class="promo-discount mb-2 inline-block rounded-full bg-white px-4 py-1 text-sm font-bold text-indigo-700">
                                { format!("SAVE {discount}") }
                            </div>
                        }).unwrap_or_default() }
                        <h2 class="text-2xl font-bold tracking-tight md:text-3xl">{ promo.title.clone() }</h2>
                        <p class="max-w-xl text-base opacity-90 md:text-lg">{ promo.description.clone() }</p>
                        { promo.expiry_date.as_ref().map(|date| html! {
                            <p class="promo-expiry text-sm font-medium">{ format!("Offer valid until {date}") }</p>
                        }).unwrap_or_default() }
                        <div class="pt-2">
                            <a href={promo.cta_link.clone()} class="group inline-flex items-center rounded-md bg-white px-4 py-2 text-indigo-700 hover:bg-gray-100 hover:text-indigo-800">
                                { promo.cta_text.clone() }
                                <Icon kind={IconKind::ArrowRight} class="ml-2 h-4 w-4 group-hover:translate-x-1" />
                            </a>
                        </div>
                    </div>
                    { promo.image_url.as_ref().map(|src| html! {
                        <div class="promo-image relative md:w-1/3">
                            <div class="relative overflow-hidden rounded-lg shadow-xl">
                                <img src={src.clone()} alt="Promotional offer" class="h-auto w-full object-cover hover:scale-105" />
                                <div class="absolute inset-0 bg-gradient-to-t from-black/40 to-transparent opacity-60"></div>
                            </div>
                        </div>
                    }).unwrap_or_default() }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(promotion: Promotion) -> String {
        block_on(LocalServerRenderer::<PromotionalBanner>::with_props(PromotionalBannerProps { promotion }).render())
    }

    #[test]
    fn default_promotion_shows_every_optional_block() {
        let html = render(Promotion::default());
        assert!(html.contains("Limited Time Offer: 20% Off All Electronics"));
        assert!(html.contains("SAVE 20%"));
        assert!(html.contains("Offer valid until June 30, 2023"));
        assert!(html.contains("promo-image"));
        assert!(html.contains("from-indigo-600"));
        assert!(html.contains("href=\"/products\""));
    }

    #[test]
    fn missing_fields_omit_their_blocks() {
        let html = render(Promotion {
            discount: None,
            expiry_date: None,
            image_url: None,
            ..Promotion::default()
        });
        assert!(!html.contains("SAVE"));
        assert!(!html.contains("Offer valid until"));
        assert!(!html.contains("promo-image"));
        assert!(html.contains("Shop Now"));
    }
}
