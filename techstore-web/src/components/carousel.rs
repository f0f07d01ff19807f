use yew::prelude::*;

use super::icons::{Icon, IconKind};

#[derive(Properties, PartialEq, Clone)]
pub struct CarouselProps {
    #[prop_or_default]
    pub initial_index: usize,
    /// Number of slides shown side by side.
    #[prop_or(1)]
    pub visible: usize,
    #[prop_or_default]
    pub show_indicators: bool,
    #[prop_or(true)]
    pub show_controls: bool,
    /// Called with the newly active slide after any control or dot press.
    #[prop_or_default]
    pub on_change: Callback<usize>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub item_class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Slide indices shown when `active` leads a window of `visible` slides,
/// wrapping past the end.
#[must_use]
pub fn window_indices(active: usize, visible: usize, len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let shown = visible.clamp(1, len);
    (0..shown).map(|offset| (active + offset) % len).collect()
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let slides: Vec<Html> = props.children.iter().collect();
    let len = slides.len();
    let active = use_state(|| props.initial_index.min(len.saturating_sub(1)));

    let change_to = {
        let active = active.clone();
        let on_change = props.on_change.clone();
        move |next: usize| {
            if len == 0 {
                return Callback::noop();
            }
            let active = active.clone();
            let on_change = on_change.clone();
            Callback::from(move |_: MouseEvent| {
                active.set(next % len);
                on_change.emit(next % len);
            })
        }
    };

    let shown = window_indices(*active, props.visible, len);
    let class = classes!("carousel", "relative", props.class.clone());
    html! {
        <div class={class} aria-roledescription="carousel">
            <div class="carousel-track flex">
                { for slides.iter().enumerate().map(|(idx, slide)| {
                    let position = shown.iter().position(|&i| i == idx);
                    let mut slide_class = classes!("carousel-item", props.item_class.clone());
                    if position.is_none() {
                        slide_class.push("hidden");
                    }
                    let order = position.map(|p| format!("order: {p}"));
                    html! {
                        <div class={slide_class} style={order} aria-roledescription="slide" aria-hidden={position.is_none().to_string()}>
                            { slide.clone() }
                        </div>
                    }
                }) }
            </div>
            { if props.show_controls && len > props.visible.max(1) {
                let prev = (*active + len - 1) % len;
                let next = (*active + 1) % len;
                html! {
                    <div class="carousel-controls">
                        <button class="carousel-prev absolute top-1/2 -left-4 h-8 w-8 rounded-full bg-white/80 hover:bg-white" aria-label="Previous slide" onclick={change_to(prev)}>
                            <Icon kind={IconKind::ChevronRight} class="h-4 w-4 rotate-180" />
                        </button>
                        <button class="carousel-next absolute top-1/2 -right-4 h-8 w-8 rounded-full bg-white/80 hover:bg-white" aria-label="Next slide" onclick={change_to(next)}>
                            <Icon kind={IconKind::ChevronRight} class="h-4 w-4" />
                        </button>
                    </div>
                }
            } else { Html::default() }}
            { if props.show_indicators && len > 1 {
                html! {
                    <div class="carousel-indicators flex justify-center gap-2 mt-4" role="tablist">
                        { for (0..len).map(|idx| {
                            let is_active = idx == *active;
                            let mut dot_class = classes!("w-3", "h-3", "rounded-full", "hover:bg-primary", "transition-colors");
                            dot_class.push(if is_active { "bg-primary" } else { "bg-gray-300" });
                            html! {
                                <button
                                    class={dot_class}
                                    aria-label={format!("Go to slide {}", idx + 1)}
                                    aria-pressed={is_active.to_string()}
                                    onclick={change_to(idx)}
                                ></button>
                            }
                        }) }
                    </div>
                }
            } else { Html::default() }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn window_wraps_around_the_end() {
        assert_eq!(window_indices(0, 4, 6), vec![0, 1, 2, 3]);
        assert_eq!(window_indices(4, 4, 6), vec![4, 5, 0, 1]);
        assert_eq!(window_indices(2, 10, 3), vec![2, 0, 1]);
        assert!(window_indices(0, 1, 0).is_empty());
    }

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        count: usize,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <Carousel show_indicators=true>
                { for (0..props.count).map(|i| html! { <p>{ format!("slide-{i}") }</p> }) }
            </Carousel>
        }
    }

    #[test]
    fn renders_one_dot_per_slide_and_hides_inactive_slides() {
        let html = block_on(LocalServerRenderer::<Harness>::with_props(HarnessProps { count: 3 }).render());
        assert_eq!(html.matches("Go to slide").count(), 3);
        assert_eq!(html.matches("carousel-item hidden").count(), 2);
        assert!(html.contains("Previous slide"));
    }
}
