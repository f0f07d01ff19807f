use techstore_core::{StarRule, rating_label, star_fills};
use yew::prelude::*;

use super::icons::{Icon, IconKind};

#[derive(Properties, PartialEq, Clone)]
pub struct StarRatingProps {
    pub rating: f64,
    #[prop_or_default]
    pub rule: StarRule,
    #[prop_or_default]
    pub class: Classes,
    /// Text after the stars; defaults to the rating with one decimal.
    #[prop_or_default]
    pub caption: Option<AttrValue>,
}

/// Read-only five-star row.
#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    let label = rating_label(props.rating);
    let caption = props
        .caption
        .clone()
        .unwrap_or_else(|| AttrValue::from(label.clone()));
    let class = classes!("star-rating", "flex", "items-center", "gap-1", props.class.clone());
    html! {
        <div class={class} role="img" aria-label={format!("Rated {label} out of 5")}>
            <span class="flex">
                { for star_fills(props.rating, props.rule).into_iter().map(|filled| {
                    let star_class = if filled {
                        classes!("h-3", "w-3", "star-filled", "fill-yellow-400", "text-yellow-400")
                    } else {
                        classes!("h-3", "w-3", "star-empty", "fill-gray-200", "text-gray-200")
                    };
                    html! { <Icon kind={IconKind::Star} class={star_class} /> }
                }) }
            </span>
            <span class="ml-1 text-xs text-gray-500">{ caption }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(rating: f64, rule: StarRule) -> String {
        block_on(
            LocalServerRenderer::<StarRating>::with_props(StarRatingProps {
                rating,
                rule,
                class: Classes::new(),
                caption: None,
            })
            .render(),
        )
    }

    #[test]
    fn half_star_rating_lights_five_by_default() {
        let html = render(4.5, StarRule::FillFraction);
        assert_eq!(html.matches("star-filled").count(), 5);
        assert_eq!(html.matches("star-empty").count(), 0);
        assert!(html.contains("4.5"));
    }

    #[test]
    fn strict_floor_leaves_the_fractional_star_empty() {
        let html = render(4.5, StarRule::StrictFloor);
        assert_eq!(html.matches("star-filled").count(), 4);
        assert_eq!(html.matches("star-empty").count(), 1);
    }
}
