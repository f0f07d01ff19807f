use std::cell::RefCell;
use std::rc::Rc;

use techstore_core::{HeaderEvent, HeaderState, ScrollBinding, Viewport};
use yew::prelude::*;

use super::account_menu::AccountMenu;
use super::icons::{Icon, IconKind};
use super::mega_menu::MegaMenu;
use crate::defaults;

#[derive(Clone, Copy, PartialEq, Default)]
struct Chrome {
    flags: HeaderState,
}

impl Reducible for Chrome {
    type Action = HeaderEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.flags.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_else(defaults::store_name)]
    pub store_name: AttrValue,
    #[prop_or_else(defaults::cart_item_count)]
    pub cart_item_count: u32,
    #[prop_or_else(defaults::scroll_threshold_px)]
    pub scroll_threshold_px: f64,
    #[prop_or_else(defaults::wide_breakpoint_px)]
    pub wide_breakpoint_px: f64,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let chrome = use_reducer(Chrome::default);
    let viewport = use_state(|| Viewport::Wide);

    use_window_listeners(&chrome, &viewport, props.scroll_threshold_px, props.wide_breakpoint_px);

    let on_menu_button: Callback<MouseEvent> = emit(&chrome, HeaderEvent::ToggleMobileMenu);
    let on_search_icon: Callback<MouseEvent> = emit(&chrome, HeaderEvent::SearchIconPressed);
    let on_search_button: Callback<MouseEvent> = emit(&chrome, HeaderEvent::SearchButtonPressed);
    let on_search_blur: Callback<FocusEvent> = emit(&chrome, HeaderEvent::SearchBlurred);

    let flags = chrome.flags;
    let mut class = classes!("site-header", "sticky", "top-0", "z-50", "w-full", "border-b");
    class.push(if flags.scrolled {
        "glass-header backdrop-blur bg-background/80 shadow-sm"
    } else {
        "bg-background"
    });
    class.push(props.class.clone());

    let search_hidden = !flags.search_visible(*viewport);
    let search_class = if flags.search_expanded {
        classes!("search-expanded", "absolute", "inset-x-0", "top-0", "bg-background", "p-3", "md:relative", "md:p-0")
    } else {
        classes!("hidden", "md:block")
    };
    let nav_class = classes!(if flags.mobile_menu_open { "block" } else { "hidden" }, "md:block", "border-t");
    let nav_hidden = !flags.nav_visible(*viewport);

    html! {
        <header class={class} role="banner" data-scrolled={flags.scrolled.to_string()}>
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="container mx-auto px-4 py-3">
                <div class="flex items-center justify-between gap-4">
                    <button
                        id="mobile-menu-button"
                        class="icon-button md:hidden"
                        aria-label="Toggle navigation"
                        aria-expanded={flags.mobile_menu_open.to_string()}
                        aria-controls="site-navigation"
                        onclick={on_menu_button}
                    >
                        <Icon kind={IconKind::Menu} class="h-6 w-6" />
                    </button>

                    <a href="/" class="logo flex-shrink-0">
                        <div class="flex items-center gap-2">
                            <div class="h-8 w-8 rounded-md bg-primary flex items-center justify-center">
                                <span class="text-primary-foreground font-bold">{ logo_letter(&props.store_name) }</span>
                            </div>
                            <span class="text-xl font-bold hidden sm:inline-block">{ props.store_name.clone() }</span>
                        </div>
                    </a>

                    <div id="site-search" class={classes!(search_class, "flex-grow", "max-w-xl", "mx-4")} aria-hidden={search_hidden.to_string()}>
                        <div class="relative" role="search">
                            <input
                                id="search-input"
                                type="search"
                                placeholder="Search for products..."
                                aria-label="Search for products"
                                class="w-full pr-10"
                                onblur={on_search_blur}
                            />
                            <button id="search-submit" class="icon-button absolute right-0 top-0" aria-label="Search" onclick={on_search_button}>
                                <Icon kind={IconKind::Search} class="h-4 w-4" />
                            </button>
                        </div>
                    </div>

                    <div class="actions flex items-center gap-2">
                        <button id="search-toggle" class="icon-button md:hidden" aria-label="Open search" onclick={on_search_icon}>
                            <Icon kind={IconKind::Search} class="h-5 w-5" />
                        </button>
                        <AccountMenu />
                        <button class="cart-button icon-button relative" aria-label={format!("Cart, {} items", props.cart_item_count)}>
                            <Icon kind={IconKind::ShoppingCart} class="h-5 w-5" />
                            { if props.cart_item_count > 0 {
                                html! {
                                    <span class="cart-count absolute -top-1 -right-1 flex h-5 w-5 items-center justify-center rounded-full bg-primary text-xs text-primary-foreground">
                                        { props.cart_item_count }
                                    </span>
                                }
                            } else { Html::default() }}
                        </button>
                    </div>
                </div>
            </div>

            <div id="site-navigation" class={nav_class} aria-hidden={nav_hidden.to_string()}>
                <MegaMenu />
            </div>
        </header>
    }
}

fn emit<E: 'static>(chrome: &UseReducerHandle<Chrome>, event: HeaderEvent) -> Callback<E> {
    let chrome = chrome.clone();
    Callback::from(move |_: E| chrome.dispatch(event))
}

fn logo_letter(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// Subscribe to window scroll and resize for the lifetime of the header.
///
/// Both listeners are registered once on mount and removed on unmount.
#[hook]
fn use_window_listeners(
    chrome: &UseReducerHandle<Chrome>,
    viewport: &UseStateHandle<Viewport>,
    threshold_px: f64,
    breakpoint_px: f64,
) {
    let chrome = chrome.clone();
    let viewport = viewport.clone();
    use_effect_with((threshold_px, breakpoint_px), move |&(threshold_px, breakpoint_px)| {
        let binding = Rc::new(RefCell::new(ScrollBinding::new(threshold_px)));
        let mut guards = Vec::new();

        let attached = binding.borrow_mut().attach();
        if attached && let Some(win) = web_sys::window() {
            let measure_viewport = {
                let viewport = viewport.clone();
                move || {
                    if let Some(width) = crate::dom::viewport_width() {
                        viewport.set(Viewport::from_width(width, breakpoint_px));
                    }
                }
            };
            measure_viewport();
            if let Some(event) = binding.borrow().event_for(crate::dom::scroll_y()) {
                chrome.dispatch(event);
            }

            let on_scroll = {
                let binding = binding.clone();
                let chrome = chrome.clone();
                move |_: web_sys::Event| {
                    if let Some(event) = binding.borrow().event_for(crate::dom::scroll_y()) {
                        chrome.dispatch(event);
                    }
                }
            };
            match crate::dom::ListenerGuard::attach(&win, "scroll", on_scroll) {
                Ok(guard) => guards.push(guard),
                Err(err) => log::error!(
                    "Failed to attach scroll listener: {}",
                    crate::dom::js_error_message(&err)
                ),
            }
            match crate::dom::ListenerGuard::attach(&win, "resize", move |_| measure_viewport()) {
                Ok(guard) => guards.push(guard),
                Err(err) => log::error!(
                    "Failed to attach resize listener: {}",
                    crate::dom::js_error_message(&err)
                ),
            }
            log::debug!("header listeners attached");
        }

        move || {
            if binding.borrow_mut().detach() {
                log::debug!("header listeners detached");
            }
            drop(guards);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(cart_item_count: u32) -> String {
        block_on(
            LocalServerRenderer::<Header>::with_props(HeaderProps {
                class: Classes::new(),
                store_name: AttrValue::from("TechStore"),
                cart_item_count,
                scroll_threshold_px: 10.0,
                wide_breakpoint_px: 768.0,
            })
            .render(),
        )
    }

    #[test]
    fn renders_logo_search_account_and_cart() {
        let html = render(3);
        assert!(html.contains("TechStore"));
        assert!(html.contains("Search for products..."));
        assert!(html.contains("My Account"));
        assert!(html.contains("/account/orders"));
        assert!(html.contains("/auth/login"));
        assert!(html.contains("cart-count"));
        assert!(html.contains("data-scrolled=\"false\""));
    }

    #[test]
    fn empty_cart_hides_the_badge() {
        let html = render(0);
        assert!(!html.contains("cart-count"));
    }

    #[test]
    fn collapsed_flags_render_mobile_defaults() {
        let html = render(3);
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("search-expanded"));
        assert!(html.contains("mega-menu"));
    }

    #[test]
    fn chrome_reducer_skips_no_op_events() {
        let start = Rc::new(Chrome::default());
        let same = start.clone().reduce(HeaderEvent::Scrolled(false));
        assert!(Rc::ptr_eq(&start, &same));
        let scrolled = start.reduce(HeaderEvent::Scrolled(true));
        assert!(scrolled.flags.scrolled);
    }

    #[test]
    fn scroll_events_follow_the_binding_threshold() {
        let mut binding = ScrollBinding::new(50.0);
        binding.attach();
        let chrome = Rc::new(Chrome::default());
        let chrome = chrome.reduce(binding.event_for(20.0).unwrap());
        assert!(!chrome.flags.scrolled);
        let chrome = chrome.reduce(binding.event_for(60.0).unwrap());
        assert!(chrome.flags.scrolled);
    }

    #[test]
    fn search_box_is_exposed_on_wide_viewports() {
        let html = render(3);
        let id_at = html.find("id=\"site-search\"").unwrap();
        let tag_start = html[..id_at].rfind('<').unwrap();
        let tag_end = id_at + html[id_at..].find('>').unwrap();
        assert!(html[tag_start..tag_end].contains("aria-hidden=\"false\""));
    }

    #[test]
    fn logo_letter_uses_first_character() {
        assert_eq!(logo_letter("TechStore"), "T");
        assert_eq!(logo_letter(""), "");
    }
}
