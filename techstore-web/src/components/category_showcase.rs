use techstore_core::{Category, category_href};
use yew::prelude::*;

use super::icons::{Icon, IconKind};
use crate::defaults;

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryShowcaseProps {
    #[prop_or(AttrValue::Static("Shop By Category"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static(
        "Browse our wide selection of tech products across popular categories"
    ))]
    pub description: AttrValue,
    #[prop_or_else(defaults::categories)]
    pub categories: Vec<Category>,
}

#[function_component(CategoryShowcase)]
pub fn category_showcase(props: &CategoryShowcaseProps) -> Html {
    html! {
        <section class="category-showcase w-full bg-white py-12 dark:bg-gray-950">
            <div class="container mx-auto px-4 md:px-6">
                <div class="mb-10 flex flex-col items-center text-center">
                    <h2 class="mb-2 text-3xl font-bold tracking-tight text-gray-900 dark:text-gray-50 sm:text-4xl">{ props.title.clone() }</h2>
                    <p class="max-w-3xl text-lg text-gray-600 dark:text-gray-400">{ props.description.clone() }</p>
                </div>
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    { for props.categories.iter().map(|category| html! {
                        <a key={category.id.clone()} href={category_href(&category.slug)} class="category-tile group transition-all duration-300 hover:shadow-lg">
                            <div class="h-full overflow-hidden rounded-lg border-0 shadow-md">
                                <div class="relative h-60 w-full overflow-hidden">
                                    <img src={category.image.clone()} alt={category.name.clone()} class="h-full w-full object-cover transition-transform duration-300 group-hover:scale-105" />
                                </div>
                                <div class="p-6">
                                    <h3 class="mb-2 text-xl font-semibold text-gray-900 dark:text-gray-50">{ category.name.clone() }</h3>
                                    <p class="mb-4 text-gray-600 dark:text-gray-400">{ category.description.clone() }</p>
                                    <div class="flex items-center font-medium text-blue-600 dark:text-blue-400">
                                        { "Shop Now" }
                                        <Icon kind={IconKind::LongArrowRight} class="ml-1 h-5 w-5 group-hover:translate-x-1" />
                                    </div>
                                </div>
                            </div>
                        </a>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn tiles_link_to_category_pages() {
        let html = block_on(LocalServerRenderer::<CategoryShowcase>::new().render());
        assert!(html.contains("Shop By Category"));
        assert!(html.contains("href=\"/category/laptops-computers\""));
        assert!(html.contains("href=\"/category/wearables\""));
        assert_eq!(html.matches("category-tile").count(), 6);
        assert_eq!(html.matches("Shop Now").count(), 6);
    }
}
