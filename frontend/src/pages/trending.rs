use omega_news_shared::views;
use yew::prelude::*;
use yew_router::prelude::Link;

use super::{breadcrumb, empty_state, page_intro, with_sidebar};
use crate::{
    components::{
        article_card::CategoryBadge,
        icons::{Icon, IconName},
    },
    data_context::use_data,
    router::Route,
    seo::apply_page_meta,
    utils::{format_count, format_short_date},
};

#[function_component(TrendingPage)]
pub fn trending_page() -> Html {
    let ctx = use_data();

    use_effect_with((), |_| {
        apply_page_meta("Trending", None);
        || ()
    });

    let Some(ctx) = ctx else {
        return html! {};
    };
    let ranked = views::trending(ctx.store().articles());

    let listing = if ranked.is_empty() {
        empty_state("Nothing is trending right now.")
    } else {
        html! {
            <ol class="space-y-8">
                { for ranked.iter().enumerate().map(|(idx, article)| html! {
                    <li key={article.id.clone()} class="group flex items-start gap-6 border-b border-[var(--border)] pb-8">
                        <span class="w-12 shrink-0 font-serif text-5xl font-black text-[var(--border)] group-hover:text-[var(--primary)]">
                            { format!("{:02}", idx + 1) }
                        </span>
                        <div class="aspect-video w-1/3 shrink-0 overflow-hidden md:w-48">
                            <img src={article.image_url.clone()} alt={article.title.clone()} loading="lazy" class="h-full w-full object-cover" />
                        </div>
                        <div class="flex-1">
                            <CategoryBadge category={article.category.clone()} class={classes!("mb-2")} />
                            <h3 class="mb-2 font-serif text-xl font-bold leading-snug group-hover:text-[var(--primary)]">
                                <Link<Route> to={Route::Article { id: article.id.clone() }}>{ article.title.clone() }</Link<Route>>
                            </h3>
                            <div class="flex items-center gap-4 text-xs text-[var(--muted)]">
                                <span class="flex items-center gap-1">
                                    <Icon name={IconName::Eye} size={12} />
                                    { format!("{} views", format_count(article.views)) }
                                </span>
                                <span>{ format_short_date(&article.date) }</span>
                            </div>
                        </div>
                    </li>
                }) }
            </ol>
        }
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            { breadcrumb("Trending") }
            { page_intro("Trending Now", "The most read, shared, and discussed stories on OmegaNews right now.") }
            { with_sidebar(listing) }
        </div>
    }
}
