use techstore_core::{HeroSlide, NavTarget};
use yew::prelude::*;

use super::carousel::Carousel;
use super::icons::{Icon, IconKind};
use crate::defaults;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    #[prop_or_else(defaults::hero_slides)]
    pub slides: Vec<HeroSlide>,
    /// Receives CTA links and indicator selections.
    #[prop_or_else(defaults::log_navigation)]
    pub on_navigate: Callback<NavTarget>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_slide = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |index: usize| on_navigate.emit(NavTarget::Slide(index)))
    };
    html! {
        <section class="hero w-full bg-background py-8 md:py-12">
            <div class="container px-4 md:px-6">
                <Carousel class="mx-auto w-full max-w-6xl" show_indicators=true on_change={on_slide}>
                    { for props.slides.iter().map(|slide| render_slide(slide, &props.on_navigate)) }
                </Carousel>
            </div>
        </section>
    }
}

fn render_slide(slide: &HeroSlide, on_navigate: &Callback<NavTarget>) -> Html {
    let on_cta = {
        let on_navigate = on_navigate.clone();
        let link = slide.cta_link.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(NavTarget::Link(link.clone())))
    };
    html! {
        <div key={slide.id.clone()} class="hero-slide relative overflow-hidden rounded-lg">
            <div class="relative h-[400px] w-full overflow-hidden rounded-lg md:h-[500px]">
                <img
                    src={slide.image_url.clone()}
                    alt={slide.title.clone()}
                    class="h-full w-full object-cover transition-transform duration-500 hover:scale-105"
                />
                <div class="absolute inset-0 bg-gradient-to-r from-black/70 to-transparent">
                    <div class="absolute bottom-0 left-0 max-w-lg p-6 md:p-10">
                        <h1 class="mb-4 text-3xl font-bold text-white md:text-5xl">{ slide.title.clone() }</h1>
                        <p class="mb-6 text-lg text-white/90">{ slide.description.clone() }</p>
                        <button class="hero-cta group btn-lg" data-href={slide.cta_link.clone()} onclick={on_cta}>
                            { slide.cta_text.clone() }
                            <Icon kind={IconKind::ArrowRight} class="ml-2 h-4 w-4 group-hover:translate-x-1" />
                        </button>
                    </div>
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

    #[test]
    fn renders_every_slide_with_indicators() {
        let html = block_on(LocalServerRenderer::<Hero>::new().render());
        assert!(html.contains("New Tech Arrivals"));
        assert!(html.contains("Summer Tech Sale"));
        assert!(html.contains("Smart Home Essentials"));
        assert!(html.contains("data-href=\"/promotions/summer-sale\""));
        assert_eq!(html.matches("Go to slide").count(), 3);
        assert!(html.contains("Go to slide 3"));
    }

    #[test]
    fn empty_slide_list_renders_no_indicators() {
        let html = block_on(
            LocalServerRenderer::<Hero>::with_props(HeroProps {
                slides: Vec::new(),
                on_navigate: Callback::noop(),
            })
            .render(),
        );
        assert!(html.contains("hero"));
        assert!(!html.contains("Go to slide"));
    }
}
