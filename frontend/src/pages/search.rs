use omega_news_shared::views;
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::{empty_state, with_sidebar};
use crate::{
    components::{
        article_card::{ArticleCard, CardVariant},
        icons::{Icon, IconName},
    },
    data_context::use_data,
    router::Route,
    seo::apply_page_meta,
};

/// `?q=` of the search route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let ctx = use_data();
    let location = use_location();
    let navigator = use_navigator();
    let query = location
        .as_ref()
        .and_then(|loc| loc.query::<SearchQuery>().ok())
        .unwrap_or_default()
        .q;
    let term = use_state(|| query.clone());

    {
        let term = term.clone();
        use_effect_with(query.clone(), move |query| {
            term.set(query.clone());
            apply_page_meta(&format!("Search: {query}"), None);
            || ()
        });
    }

    let on_input = {
        let term = term.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                term.set(target.value());
            }
        })
    };

    let on_submit = {
        let term = term.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(navigator) = navigator.as_ref() else {
                return;
            };
            let target = SearchQuery {
                q: (*term).clone(),
            };
            if let Err(err) = navigator.replace_with_query(&Route::Search, &target) {
                web_sys::console::error_1(&format!("search navigation failed: {err}").into());
            }
        })
    };

    let Some(ctx) = ctx else {
        return html! {};
    };
    let results = views::search(ctx.store().articles(), &query);

    let listing = if results.is_empty() {
        empty_state("No articles matched your search. Try different keywords.")
    } else {
        html! {
            <div class="space-y-10">
                { for results.iter().map(|article| html! {
                    <ArticleCard key={article.id.clone()} article={article.clone()} variant={CardVariant::Horizontal} />
                }) }
            </div>
        }
    };

    let heading = if query.trim().is_empty() {
        format!("Showing all {} articles", results.len())
    } else {
        format!("{} results for \"{}\"", results.len(), query.trim())
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <div class="mb-10 bg-[var(--surface-alt)] px-6 py-12 text-center">
                <h1 class="mb-6 font-serif text-3xl font-black md:text-4xl">{ "Search" }</h1>
                <form class="relative mx-auto max-w-2xl" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Type to search..."
                        class="w-full border-2 border-[var(--border)] p-4 pr-14 text-lg focus:border-[var(--primary)] focus:outline-none"
                        value={(*term).clone()}
                        oninput={on_input}
                    />
                    <button type="submit" class="absolute right-4 top-1/2 -translate-y-1/2 text-[var(--muted)] hover:text-[var(--primary)]" aria-label="Search">
                        <Icon name={IconName::Search} size={24} />
                    </button>
                </form>
            </div>
            { with_sidebar(html! {
                <>
                    <h2 class="mb-8 border-b border-[var(--border)] pb-4 text-xl font-bold">{ heading }</h2>
                    { listing }
                </>
            }) }
        </div>
    }
}
