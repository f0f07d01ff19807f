use techstore_core::MenuIcon;
use yew::prelude::*;

/// Stroke icons drawn on a 24×24 grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    ArrowRight,
    Camera,
    Cash,
    Check,
    ChevronRight,
    CreditCard,
    Currency,
    Facebook,
    Gamepad,
    Headphones,
    Heart,
    Instagram,
    Laptop,
    LongArrowRight,
    Mail,
    MapPin,
    Menu,
    Phone,
    Search,
    ShoppingCart,
    Smartphone,
    Sparkles,
    Star,
    Support,
    Tag,
    Tv,
    Twitter,
    User,
    Watch,
    Youtube,
    Zap,
}

impl From<MenuIcon> for IconKind {
    fn from(icon: MenuIcon) -> Self {
        match icon {
            MenuIcon::Laptop => Self::Laptop,
            MenuIcon::Smartphone => Self::Smartphone,
            MenuIcon::Headphones => Self::Headphones,
            MenuIcon::Camera => Self::Camera,
            MenuIcon::Watch => Self::Watch,
            MenuIcon::Tv => Self::Tv,
            MenuIcon::Gamepad => Self::Gamepad,
        }
    }
}

impl IconKind {
    const fn name(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow-right",
            Self::Camera => "camera",
            Self::Cash => "cash",
            Self::Check => "check",
            Self::ChevronRight => "chevron-right",
            Self::CreditCard => "credit-card",
            Self::Currency => "currency",
            Self::Facebook => "facebook",
            Self::Gamepad => "gamepad",
            Self::Headphones => "headphones",
            Self::Heart => "heart",
            Self::Instagram => "instagram",
            Self::Laptop => "laptop",
            Self::LongArrowRight => "long-arrow-right",
            Self::Mail => "mail",
            Self::MapPin => "map-pin",
            Self::Menu => "menu",
            Self::Phone => "phone",
            Self::Search => "search",
            Self::ShoppingCart => "shopping-cart",
            Self::Smartphone => "smartphone",
            Self::Sparkles => "sparkles",
            Self::Star => "star",
            Self::Support => "support",
            Self::Tag => "tag",
            Self::Tv => "tv",
            Self::Twitter => "twitter",
            Self::User => "user",
            Self::Watch => "watch",
            Self::Youtube => "youtube",
            Self::Zap => "zap",
        }
    }

    fn shapes(self) -> Html {
        match self {
            Self::ArrowRight => html! { <><path d="M5 12h14" /><path d="m12 5 7 7-7 7" /></> },
            Self::Camera => html! {
                <>
                    <path d="M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" />
                    <circle cx="12" cy="13" r="3" />
                </>
            },
            Self::Cash => html! {
                <><rect width="20" height="14" x="2" y="5" rx="2" /><circle cx="12" cy="12" r="3" /></>
            },
            Self::Check => html! { <path d="M5 13l4 4L19 7" /> },
            Self::ChevronRight => html! { <path d="m9 18 6-6-6-6" /> },
            Self::CreditCard => html! {
                <><rect width="20" height="14" x="2" y="5" rx="2" /><line x1="2" x2="22" y1="10" y2="10" /></>
            },
            Self::Currency => html! {
                <path d="M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2 3 .895 3 2-1.343 2-3 2m0-8c1.11 0 2.08.402 2.599 1M12 8V7m0 1v8m0 0v1m0-1c-1.11 0-2.08-.402-2.599-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z" />
            },
            Self::Facebook => html! {
                <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" />
            },
            Self::Gamepad => html! {
                <>
                    <line x1="6" x2="10" y1="12" y2="12" />
                    <line x1="8" x2="8" y1="10" y2="14" />
                    <line x1="15" x2="15.01" y1="13" y2="13" />
                    <line x1="18" x2="18.01" y1="11" y2="11" />
                    <rect width="20" height="12" x="2" y="6" rx="2" />
                </>
            },
            Self::Headphones => html! {
                <path d="M3 14h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a9 9 0 0 1 18 0v7a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3" />
            },
            Self::Heart => html! {
                <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" />
            },
            Self::Instagram => html! {
                <>
                    <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
                    <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                    <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
                </>
            },
            Self::Laptop => html! {
                <path d="M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16" />
            },
            Self::LongArrowRight => html! { <path d="M14 5l7 7m0 0l-7 7m7-7H3" /> },
            Self::Mail => html! {
                <><rect width="20" height="16" x="2" y="4" rx="2" /><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" /></>
            },
            Self::MapPin => html! {
                <><path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" /><circle cx="12" cy="10" r="3" /></>
            },
            Self::Menu => html! {
                <>
                    <line x1="4" x2="20" y1="12" y2="12" />
                    <line x1="4" x2="20" y1="6" y2="6" />
                    <line x1="4" x2="20" y1="18" y2="18" />
                </>
            },
            Self::Phone => html! {
                <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
            },
            Self::Search => html! { <><circle cx="11" cy="11" r="8" /><path d="m21 21-4.3-4.3" /></> },
            Self::ShoppingCart => html! {
                <>
                    <circle cx="8" cy="21" r="1" />
                    <circle cx="19" cy="21" r="1" />
                    <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12" />
                </>
            },
            Self::Smartphone => html! {
                <><rect width="14" height="20" x="5" y="2" rx="2" ry="2" /><path d="M12 18h.01" /></>
            },
            Self::Sparkles => html! {
                <path d="m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" />
            },
            Self::Star => html! {
                <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
            },
            Self::Support => html! {
                <path d="M18.364 5.636l-3.536 3.536m0 5.656l3.536 3.536M9.172 9.172L5.636 5.636m3.536 9.192l-3.536 3.536M21 12a9 9 0 11-18 0 9 9 0 0118 0z" />
            },
            Self::Tag => html! {
                <>
                    <path d="M12 2H2v10l9.29 9.29c.94.94 2.48.94 3.42 0l6.58-6.58c.94-.94.94-2.48 0-3.42L12 2Z" />
                    <path d="M7 7h.01" />
                </>
            },
            Self::Tv => html! {
                <><rect width="20" height="15" x="2" y="7" rx="2" ry="2" /><polyline points="17 2 12 7 7 2" /></>
            },
            Self::Twitter => html! {
                <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" />
            },
            Self::User => html! {
                <><path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" /><circle cx="12" cy="7" r="4" /></>
            },
            Self::Watch => html! {
                <>
                    <circle cx="12" cy="12" r="6" />
                    <polyline points="12 10 12 12 13 13" />
                    <path d="m16.13 7.66-.81-4.05a2 2 0 0 0-2-1.61h-2.68a2 2 0 0 0-2 1.61l-.78 4.05" />
                    <path d="m7.88 16.36.8 4a2 2 0 0 0 2 1.61h2.72a2 2 0 0 0 2-1.61l.81-4.05" />
                </>
            },
            Self::Youtube => html! {
                <>
                    <path d="M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17" />
                    <path d="m10 15 5-3-5-3z" />
                </>
            },
            Self::Zap => html! { <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" /> },
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let class = classes!("icon", format!("icon-{}", props.kind.name()), props.class.clone());
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class={class}
            aria-hidden="true"
        >
            { props.kind.shapes() }
        </svg>
    }
}
