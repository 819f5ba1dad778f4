use omega_news_shared::views;
use yew::prelude::*;
use yew_router::prelude::Link;

use super::{breadcrumb, empty_state, page_intro};
use crate::{data_context::use_data, router::Route, seo::apply_page_meta};

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let ctx = use_data();

    use_effect_with((), |_| {
        apply_page_meta("Categories", None);
        || ()
    });

    let Some(ctx) = ctx else {
        return html! {};
    };
    let store = ctx.store();

    let grid = if store.categories().is_empty() {
        empty_state("No categories yet.")
    } else {
        html! {
            <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4">
                { for store.categories().iter().map(|category| {
                    let articles = views::by_category(store.articles(), &category.name);
                    let cover = articles.first().map(|article| article.image_url.clone());
                    html! {
                        <Link<Route>
                            to={Route::Category { slug: category.slug.clone() }}
                            classes={classes!("group", "relative", "block", "h-56", "overflow-hidden", "bg-slate-900")}
                        >
                            if let Some(cover) = cover {
                                <img src={cover} alt={category.name.clone()} loading="lazy" class="h-full w-full object-cover opacity-60 transition-transform duration-700 group-hover:scale-105" />
                            }
                            <div class="absolute inset-0 flex flex-col justify-end p-6 text-white">
                                <h2 class="font-serif text-2xl font-bold">{ category.name.clone() }</h2>
                                <p class="text-xs uppercase tracking-wider text-gray-300">
                                    { format!("{} articles", articles.len()) }
                                </p>
                                <span class="mt-3 text-xs font-bold uppercase text-[var(--primary)]">{ "Browse Articles →" }</span>
                            </div>
                        </Link<Route>>
                    }
                }) }
            </div>
        }
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            { breadcrumb("Categories") }
            { page_intro("All Categories", "Explore our diverse range of topics and find the stories that matter to you.") }
            { grid }
        </div>
    }
}
