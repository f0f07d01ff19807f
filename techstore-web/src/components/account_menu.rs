use yew::prelude::*;

use super::icons::{Icon, IconKind};

/// Account links grouped as they appear in the dropdown; a separator sits
/// between groups.
pub const ACCOUNT_LINKS: [&[(&str, &str)]; 2] = [
    &[
        ("Profile", "/account/profile"),
        ("Orders", "/account/orders"),
        ("Wishlist", "/account/wishlist"),
    ],
    &[("Login", "/auth/login")],
];

#[derive(Properties, PartialEq, Clone)]
pub struct AccountMenuProps {
    #[prop_or_default]
    pub open: Option<bool>,
}

#[function_component(AccountMenu)]
pub fn account_menu(props: &AccountMenuProps) -> Html {
    let open = use_state(|| props.open.unwrap_or(false));
    {
        let open = open.clone();
        use_effect_with(props.open, move |external| {
            if let Some(value) = external {
                open.set(*value);
            }
            || {}
        });
    }
    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };
    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };
    html! {
        <div class="account-menu relative">
            <button
                class="icon-button"
                aria-label="My Account"
                aria-haspopup="menu"
                aria-expanded={(*open).to_string()}
                onclick={toggle}
            >
                <Icon kind={IconKind::User} class="h-5 w-5" />
            </button>
            <div class="dropdown-content absolute right-0 mt-2 rounded-md border bg-background p-1 shadow-md" role="menu" hidden={!*open}>
                <div class="px-2 py-1.5 text-sm font-semibold">{ "My Account" }</div>
                { for ACCOUNT_LINKS.iter().map(|group| html! {
                    <>
                        <hr class="-mx-1 my-1 h-px bg-muted" role="separator" />
                        { for group.iter().map(|(label, href)| html! {
                            <a role="menuitem" class="block w-full rounded-sm px-2 py-1.5 text-sm" href={*href} onclick={close.clone()}>{ *label }</a>
                        }) }
                    </>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(open: Option<bool>) -> String {
        block_on(LocalServerRenderer::<AccountMenu>::with_props(AccountMenuProps { open }).render())
    }

    #[test]
    fn closed_by_default() {
        let html = render(None);
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("role=\"menu\" hidden"));
    }

    #[test]
    fn open_prop_exposes_every_account_link() {
        let html = render(Some(true));
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(!html.contains("role=\"menu\" hidden"));
        for (label, href) in ACCOUNT_LINKS.iter().flat_map(|group| group.iter()) {
            assert!(html.contains(&format!("href=\"{href}\"")), "missing {label}");
        }
    }
}
