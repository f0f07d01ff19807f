use std::rc::Rc;

use techstore_core::{Disclosure, DisclosureEvent, FeaturedItem, MenuCategory, category_href};
use yew::prelude::*;

use super::icons::{Icon, IconKind};
use crate::defaults;

#[derive(Clone, PartialEq, Default)]
struct MenuState(Disclosure);

impl Reducible for MenuState {
    type Action = DisclosureEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        if next.apply(&action) {
            Rc::new(Self(next))
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MegaMenuProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_else(defaults::menu)]
    pub categories: Vec<MenuCategory>,
    /// Key of the panel open on first render.
    #[prop_or_default]
    pub initial_open: Option<AttrValue>,
}

#[function_component(MegaMenu)]
pub fn mega_menu(props: &MegaMenuProps) -> Html {
    let initial = props.initial_open.clone();
    let state = use_reducer(move || {
        let mut disclosure = Disclosure::new();
        if let Some(key) = initial {
            disclosure.hover(&key);
        }
        MenuState(disclosure)
    });

    let dismiss = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(DisclosureEvent::Dismiss))
    };

    let class = classes!("mega-menu", "w-full", "glass-nav", props.class.clone());
    html! {
        <nav class={class} aria-label="Product categories" onmouseleave={dismiss}>
            <ul class="mx-auto flex max-w-screen-2xl flex-wrap justify-center gap-1">
                { for props.categories.iter().map(|entry| {
                    let open = state.0.is_open(&entry.key);
                    let on_enter = {
                        let state = state.clone();
                        let key = entry.key.clone();
                        Callback::from(move |_: MouseEvent| state.dispatch(DisclosureEvent::PointerEnter(key.clone())))
                    };
                    let on_click = {
                        let state = state.clone();
                        let key = entry.key.clone();
                        Callback::from(move |_: MouseEvent| state.dispatch(DisclosureEvent::Click(key.clone())))
                    };
                    let trigger_class = if open {
                        classes!("menu-trigger", "active", "bg-primary/20", "text-primary")
                    } else {
                        classes!("menu-trigger", "hover:bg-white/10")
                    };
                    let panel_id = format!("menu-panel-{}", entry.key);
                    html! {
                        <li key={entry.key.clone()} class="relative">
                            <button
                                class={classes!(trigger_class, "flex", "items-center", "gap-2", "px-4", "py-2", "rounded-full", "text-sm", "transition-all", "duration-300")}
                                aria-expanded={open.to_string()}
                                aria-controls={panel_id.clone()}
                                data-key={entry.key.clone()}
                                onmouseenter={on_enter}
                                onclick={on_click}
                            >
                                <span class="bg-primary/10 p-1.5 rounded-full">
                                    <Icon kind={IconKind::from(entry.icon)} class="h-5 w-5" />
                                </span>
                                <span>{ entry.title.clone() }</span>
                            </button>
                            { if open {
                                html! {
                                    <div id={panel_id} class="menu-panel glass-dropdown absolute mt-2 rounded-xl overflow-hidden" role="region" aria-label={entry.title.clone()}>
                                        { render_panel(entry) }
                                    </div>
                                }
                            } else {
                                Html::default()
                            }}
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}

/// Contents of an open panel: subcategory links, then either the featured
/// block or the explore call to action.
#[must_use]
pub fn render_panel(entry: &MenuCategory) -> Html {
    let view_all = category_href(&entry.slug());
    html! {
        <div class="grid w-[800px] grid-cols-5 p-6 gap-4">
            <div class="col-span-2 border-r border-white/10 pr-6">
                <div class="mb-4 flex items-center">
                    <div class="bg-primary/10 p-2 rounded-full mr-3">
                        <Icon kind={IconKind::from(entry.icon)} class="h-5 w-5" />
                    </div>
                    <h3 class="text-lg font-medium text-gradient">{ entry.title.clone() }</h3>
                </div>
                <ul class="subcategories space-y-3">
                    { for entry.subcategories.iter().map(|sub| html! {
                        <li key={sub.name.clone()}>
                            <a href={sub.href.clone()} class="group flex items-center text-sm text-muted-foreground hover:text-primary p-2 rounded-lg hover:bg-white/10">
                                <span class="flex items-center">
                                    { sub.name.clone() }
                                    { if sub.is_new {
                                        html! { <span class="chip chip-new ml-2 bg-blue-500/20 text-blue-500"><Icon kind={IconKind::Sparkles} class="h-3 w-3 mr-0.5" />{ "NEW" }</span> }
                                    } else { Html::default() }}
                                    { if sub.is_popular {
                                        html! { <span class="chip chip-popular ml-2 bg-amber-500/20 text-amber-500"><Icon kind={IconKind::Zap} class="h-3 w-3 mr-0.5" />{ "POPULAR" }</span> }
                                    } else { Html::default() }}
                                </span>
                                <Icon kind={IconKind::ChevronRight} class="ml-auto h-4 w-4 opacity-50 group-hover:opacity-100" />
                            </a>
                        </li>
                    }) }
                </ul>
                <div class="mt-6">
                    <a href={view_all.clone()} class="view-all group inline-flex items-center text-sm font-medium text-primary hover:underline">
                        { format!("View all {}", entry.title) }
                        <Icon kind={IconKind::ChevronRight} class="ml-1 h-4 w-4" />
                    </a>
                </div>
            </div>
            { match entry.featured_items() {
                Some(items) => render_featured(items),
                None => render_explore(entry, &view_all),
            }}
        </div>
    }
}

fn render_featured(items: &[FeaturedItem]) -> Html {
    html! {
        <div class="featured col-span-3 pl-6">
            <h4 class="mb-4 text-sm font-medium text-muted-foreground flex items-center">
                <Icon kind={IconKind::Sparkles} class="h-4 w-4 mr-2 text-primary" />
                { "Featured Products" }
            </h4>
            <div class="grid grid-cols-2 gap-6">
                { for items.iter().map(|item| html! {
                    <a key={item.name.clone()} href={item.href.clone()} class="group block space-y-3 glass-card p-3 hover:shadow-xl">
                        <div class="overflow-hidden rounded-lg relative">
                            <img src={item.image.clone()} alt={item.name.clone()} class="h-40 w-full object-cover group-hover:scale-110" />
                            { item.discount.as_ref().map(|discount| html! {
                                <div class="featured-discount absolute top-2 right-2 bg-primary/90 text-primary-foreground text-xs font-medium py-1 px-2 rounded-full flex items-center">
                                    <Icon kind={IconKind::Tag} class="h-3 w-3 mr-1" />
                                    { discount.clone() }
                                </div>
                            }).unwrap_or_default() }
                        </div>
                        <div>
                            <h5 class="font-medium group-hover:text-primary text-base">{ item.name.clone() }</h5>
                            <p class="text-sm text-muted-foreground">{ item.description.clone() }</p>
                        </div>
                    </a>
                }) }
            </div>
        </div>
    }
}

fn render_explore(entry: &MenuCategory, href: &str) -> Html {
    html! {
        <div class="explore col-span-3 flex items-center justify-center pl-6">
            <div class="text-center glass-card p-6 w-full">
                <h4 class="text-xl font-medium text-gradient">{ format!("Explore {}", entry.title) }</h4>
                <p class="mt-3 text-sm text-muted-foreground">
                    { format!("Discover our full range of {} products", entry.title.to_lowercase()) }
                </p>
                <a href={href.to_string()} class="group mt-4 inline-flex items-center rounded-full glass-button px-6 py-2.5 text-sm font-medium">
                    { "Shop Now" }
                    <Icon kind={IconKind::ChevronRight} class="ml-1 h-4 w-4" />
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(initial_open: Option<&str>) -> String {
        block_on(
            LocalServerRenderer::<MegaMenu>::with_props(MegaMenuProps {
                class: Classes::new(),
                categories: defaults::menu(),
                initial_open: initial_open.map(|key| AttrValue::from(key.to_string())),
            })
            .render(),
        )
    }

    #[test]
    fn closed_menu_lists_every_trigger_without_panels() {
        let html = render(None);
        for entry in defaults::menu() {
            assert!(html.contains(&entry.title.replace('&', "&amp;")), "missing {}", entry.title);
        }
        assert!(!html.contains("menu-panel"));
        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 0);
    }

    #[test]
    fn featured_category_shows_featured_block() {
        let html = render(Some("computers-laptops"));
        assert_eq!(html.matches("menu-panel").count(), 1);
        assert!(html.contains("Featured Products"));
        assert!(html.contains("Up to 15% off"));
        assert!(html.contains("Best Sellers"));
        assert!(html.contains("/category/computers-&amp;-laptops"));
        assert!(!html.contains("Discover our full range"));
        assert!(html.contains("NEW"));
        assert!(html.contains("POPULAR"));
    }

    #[test]
    fn category_without_featured_shows_explore_cta() {
        let html = render(Some("audio-headphones"));
        assert!(html.contains("Explore Audio &amp; Headphones"));
        assert!(html.contains("Discover our full range of audio &amp; headphones products"));
        assert!(!html.contains("Featured Products"));
    }

    #[test]
    fn open_trigger_is_highlighted() {
        let html = render(Some("gaming"));
        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
        assert!(html.contains("menu-trigger active"));
    }
}
