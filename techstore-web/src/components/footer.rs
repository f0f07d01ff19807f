use yew::prelude::*;

use super::icons::{Icon, IconKind};
use crate::{defaults, dom, paths};

pub const QUICK_LINKS: [(&str, &str); 6] = [
    ("Home", "/"),
    ("Products", "/products"),
    ("About Us", "/about"),
    ("Contact", "/contact"),
    ("Blog", "/blog"),
    ("FAQ", "/faq"),
];

pub const LEGAL_LINKS: [(&str, &str); 4] = [
    ("Privacy Policy", "/privacy"),
    ("Terms of Service", "/terms"),
    ("Returns Policy", "/returns"),
    ("Shipping Information", "/shipping"),
];

const SOCIAL: [(IconKind, &str); 4] = [
    (IconKind::Facebook, "Facebook"),
    (IconKind::Instagram, "Instagram"),
    (IconKind::Twitter, "Twitter"),
    (IconKind::Youtube, "YouTube"),
];

const CONTACT: [(IconKind, &str); 3] = [
    (IconKind::MapPin, "123 Tech Street, Digital City, 10001"),
    (IconKind::Phone, "+1 (555) 123-4567"),
    (IconKind::Mail, "support@techstore.com"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct FooterProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_else(defaults::store_name)]
    pub store_name: AttrValue,
    /// Year shown in the copyright line; the clock is read when absent.
    #[prop_or_else(dom::current_year)]
    pub year: Option<u32>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let class = classes!("site-footer", "w-full", "bg-slate-900", "px-4", "py-12", "text-white", "md:px-8", props.class.clone());
    html! {
        <footer class={class}>
            <div class="container mx-auto">
                <div class="grid grid-cols-1 gap-8 md:grid-cols-2 lg:grid-cols-4">
                    <div>
                        <h3 class="mb-4 text-xl font-bold">{ props.store_name.clone() }</h3>
                        <p class="mb-4 text-slate-300">
                            { "Your one-stop shop for all things tech. Quality products, competitive prices, and exceptional service." }
                        </p>
                        <div class="social flex space-x-4">
                            { for SOCIAL.iter().map(|(kind, label)| html! {
                                <a href="#" aria-label={*label} class="text-slate-300 hover:text-white">
                                    <Icon kind={*kind} class="h-5 w-5" />
                                </a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h3 class="mb-4 text-xl font-bold">{ "Quick Links" }</h3>
                        <ul class="quick-links space-y-2">
                            { for QUICK_LINKS.iter().map(|(label, href)| html! {
                                <li><a href={*href} class="text-slate-300 hover:text-white">{ *label }</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3 class="mb-4 text-xl font-bold">{ "Contact Us" }</h3>
                        <ul class="contact space-y-3">
                            { for CONTACT.iter().map(|(kind, text)| html! {
                                <li class="flex items-center gap-2">
                                    <Icon kind={*kind} class="h-[18px] w-[18px] text-slate-400" />
                                    <span class="text-slate-300">{ *text }</span>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3 class="mb-4 text-xl font-bold">{ "Newsletter" }</h3>
                        <p class="mb-4 text-slate-300">
                            { "Subscribe to our newsletter for the latest products and exclusive offers." }
                        </p>
                        <div class="newsletter flex flex-col space-y-2">
                            <input
                                type="email"
                                placeholder="Your email address"
                                aria-label="Email address"
                                class="border-slate-700 bg-slate-800 text-white placeholder:text-slate-400"
                            />
                            <button class="bg-blue-600 text-white hover:bg-blue-700">{ "Subscribe" }</button>
                        </div>
                    </div>
                </div>

                <div class="mt-12 border-t border-slate-700 pt-8">
                    <div class="flex flex-col items-center justify-between md:flex-row">
                        <div class="mb-4 md:mb-0">
                            <p class="copyright text-sm text-slate-400">{ copyright(props.year, &props.store_name) }</p>
                        </div>
                        <div class="payment-methods flex items-center space-x-4">
                            <span class="mr-2 text-sm text-slate-400">{ "Payment Methods:" }</span>
                            <Icon kind={IconKind::CreditCard} class="h-6 w-6 text-slate-300" />
                            <Icon kind={IconKind::Cash} class="h-6 w-6 text-slate-300" />
                            { for paths::PAYMENT_LOGOS.iter().map(|(alt, file)| html! {
                                <img src={paths::static_asset(file)} alt={*alt} class="h-6 w-auto" />
                            }) }
                        </div>
                    </div>
                    <div class="mt-6 text-center md:text-left">
                        <ul class="legal flex flex-wrap justify-center gap-4 text-sm text-slate-400 md:justify-start">
                            { for LEGAL_LINKS.iter().map(|(label, href)| html! {
                                <li><a href={*href} class="hover:text-white">{ *label }</a></li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
        </footer>
    }
}

fn copyright(year: Option<u32>, store_name: &str) -> String {
    match year {
        Some(year) => format!("© {year} {store_name}. All rights reserved."),
        None => format!("© {store_name}. All rights reserved."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(year: Option<u32>) -> String {
        block_on(
            LocalServerRenderer::<Footer>::with_props(FooterProps {
                class: Classes::new(),
                store_name: AttrValue::from("TechStore"),
                year,
            })
            .render(),
        )
    }

    #[test]
    fn lists_links_contact_and_payment_logos() {
        let html = render(Some(2026));
        for (label, href) in QUICK_LINKS.iter().chain(LEGAL_LINKS.iter()) {
            assert!(html.contains(&format!("href=\"{href}\"")), "missing {label}");
        }
        assert!(html.contains("support@techstore.com"));
        assert!(html.contains("+1 (555) 123-4567"));
        for (_, file) in paths::PAYMENT_LOGOS {
            assert!(html.contains(&format!("src=\"{}\"", paths::static_asset(file))));
        }
        assert!(html.contains("Subscribe"));
    }

    #[test]
    fn copyright_uses_the_given_year() {
        let html = render(Some(2026));
        assert!(html.contains("© 2026 TechStore. All rights reserved."));
    }

    #[test]
    fn copyright_without_clock_omits_the_year() {
        assert_eq!(copyright(None, "TechStore"), "© TechStore. All rights reserved.");
    }
}
