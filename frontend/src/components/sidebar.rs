use omega_news_shared::views;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    config::SIDEBAR_LATEST,
    data_context::use_data,
    router::Route,
    utils::format_short_date,
};

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    /// Target of the "View All" link.
    #[prop_or_default]
    pub link: Option<Route>,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="relative mb-6 flex items-end justify-between border-b-2 border-[var(--border)] pb-2">
            <h2 class="relative z-10 font-sans text-xl font-bold uppercase tracking-tight md:text-2xl">
                <span class="border-b-4 border-[var(--primary)] pb-2">{ props.title.clone() }</span>
            </h2>
            if let Some(link) = props.link.clone() {
                <Link<Route> to={link} classes={classes!("mb-1", "text-xs", "font-bold", "uppercase", "text-[var(--muted)]", "hover:text-[var(--primary)]")}>
                    { "View All" }
                </Link<Route>>
            }
        </div>
    }
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let ctx = use_data();
    let navigator = use_navigator();

    let Some(ctx) = ctx else {
        return html! {};
    };
    let store = ctx.store();

    let on_subscribe = Callback::from(move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::NewsletterSuccess);
        }
    });

    let social = [("Like", "bg-[#3b5998]"), ("Follow", "bg-[#1DA1F2]"), ("Follow", "bg-[#C13584]")];

    html! {
        <aside class="w-full">
            <div class="mb-10">
                <SectionTitle title="Stay Connected" />
                <div class="grid grid-cols-3 gap-2">
                    { for social.iter().map(|(label, tone)| html! {
                        <span class={classes!(*tone, "flex", "flex-col", "items-center", "justify-center", "py-3", "text-xs", "font-bold", "text-white")}>
                            { *label }
                        </span>
                    }) }
                </div>
            </div>

            <div class="mb-10 border border-[var(--border)] bg-[var(--surface-alt)] p-6">
                <h3 class="mb-2 font-serif text-lg font-bold">{ "Subscribe to our Newsletter" }</h3>
                <p class="mb-4 text-sm text-[var(--muted)]">{ "Get the latest updates and special offers directly in your inbox." }</p>
                <form onsubmit={on_subscribe}>
                    <input
                        type="email"
                        placeholder="Email address"
                        required=true
                        class="mb-2 w-full border border-[var(--border)] p-2 text-sm focus:border-[var(--primary)] focus:outline-none"
                    />
                    <button type="submit" class="w-full bg-slate-900 py-3 text-xs font-bold uppercase text-white hover:bg-[var(--primary)]">
                        { "Subscribe" }
                    </button>
                </form>
            </div>

            <div class="mb-10">
                <SectionTitle title="Latest News" link={Route::LatestNews} />
                <div class="space-y-6">
                    { for store.articles().iter().take(SIDEBAR_LATEST).map(|article| html! {
                        <div key={article.id.clone()} class="group flex gap-4">
                            <div class="relative h-20 w-20 shrink-0 overflow-hidden">
                                <img src={article.image_url.clone()} alt={article.title.clone()} loading="lazy" class="h-full w-full object-cover" />
                            </div>
                            <div>
                                <h4 class="font-serif text-sm font-bold leading-snug line-clamp-2 group-hover:text-[var(--primary)]">
                                    <Link<Route> to={Route::Article { id: article.id.clone() }}>{ article.title.clone() }</Link<Route>>
                                </h4>
                                <span class="mt-1 block text-xs text-[var(--muted)]">{ format_short_date(&article.date) }</span>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="mb-10">
                <SectionTitle title="Categories" link={Route::Categories} />
                <ul class="space-y-2">
                    { for store.categories().iter().map(|category| {
                        let count = views::by_category(store.articles(), &category.name).len();
                        html! {
                            <li key={category.id.clone()} class="border-b border-[var(--border)] pb-2 last:border-0">
                                <Link<Route>
                                    to={Route::Category { slug: category.slug.clone() }}
                                    classes={classes!("flex", "items-center", "justify-between", "text-sm", "font-medium", "hover:text-[var(--primary)]")}
                                >
                                    <span>{ category.name.clone() }</span>
                                    <span class="rounded-full bg-[var(--surface-alt)] px-2 py-0.5 text-xs text-[var(--muted)]">{ count }</span>
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            </div>

            if store.settings().show_ads {
                <div class="hidden md:block">
                    <div class="flex h-[300px] w-full items-center justify-center border border-[var(--border)] bg-[var(--surface-alt)] text-sm text-[var(--muted)]">
                        { "Ad Space (300x250)" }
                    </div>
                </div>
            }
        </aside>
    }
}
