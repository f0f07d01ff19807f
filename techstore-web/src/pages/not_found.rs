use yew::prelude::*;

/// Shown for any path the router does not recognize.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="not-found container mx-auto px-4 py-24 text-center" aria-live="assertive">
            <h1 class="mb-4 text-4xl font-bold">{ "Page not found" }</h1>
            <p class="mb-8 text-gray-600">{ "The page you are looking for does not exist or has moved." }</p>
            <button type="button" class="rounded-full bg-primary px-6 py-2 text-primary-foreground" onclick={go_home}>
                { "Back to TechStore" }
            </button>
        </section>
    }
}
