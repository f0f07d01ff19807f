use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::router::Route;

/// Top-level component mounted to the document body.
///
/// Routes are resolved relative to the deployment base path.
#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::NotFound => html! { <NotFoundView /> },
    }
}

#[function_component(NotFoundView)]
fn not_found_view() -> Html {
    let navigator = use_navigator();
    let on_go_home = Callback::from(move |()| match &navigator {
        Some(navigator) => navigator.push(&Route::Home),
        None => log::warn!("No router available to return home"),
    });
    html! { <NotFound {on_go_home} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::NotFound.to_path(), "/404");
    }
}
