use omega_news_shared::views;
use yew::prelude::*;

use super::{breadcrumb, empty_state, page_intro, with_sidebar};
use crate::{
    components::{article_card::ArticleCard, pagination::Pagination},
    config::LIST_PAGE_SIZE,
    data_context::use_data,
    hooks::use_pagination,
    seo::apply_page_meta,
};

#[function_component(LatestNewsPage)]
pub fn latest_news_page() -> Html {
    let ctx = use_data();
    let articles = ctx
        .as_ref()
        .map(|ctx| views::latest(ctx.store().articles()))
        .unwrap_or_default();
    let total = articles.len();
    let (visible, current_page, total_pages, go_to_page) = use_pagination(articles, LIST_PAGE_SIZE);

    use_effect_with((), |_| {
        apply_page_meta("Latest News", None);
        || ()
    });

    let listing = if visible.is_empty() {
        empty_state("No articles published yet.")
    } else {
        html! {
            <>
                <div class="mb-10 grid grid-cols-1 gap-8 md:grid-cols-2">
                    { for visible.into_iter().map(|article| html! {
                        <ArticleCard key={article.id.clone()} article={article.clone()} />
                    }) }
                </div>
                <Pagination
                    current_page={current_page}
                    total_pages={total_pages}
                    on_page_change={go_to_page}
                    summary={Some((LIST_PAGE_SIZE, total))}
                />
            </>
        }
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            { breadcrumb("Latest News") }
            { page_intro("Latest News", "Stay up to date with the breaking stories and latest developments from around the globe.") }
            { with_sidebar(listing) }
        </div>
    }
}
