use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config::TRENDING_TAGS,
    data_context::use_data,
    hooks::scroll_window_to_top,
    pages::search::SearchQuery,
    router::Route,
    utils::split_logo,
};

#[function_component(Footer)]
pub fn footer() -> Html {
    let ctx = use_data();
    let navigator = use_navigator();

    let Some(ctx) = ctx else {
        return html! {};
    };
    let settings = ctx.store().settings();

    let on_subscribe = Callback::from(move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::NewsletterSuccess);
        }
    });
    let back_to_top = Callback::from(|_: MouseEvent| scroll_window_to_top());

    let (logo_head, logo_tail) = split_logo(&settings.logo_text);
    let heading = "mb-6 border-l-4 border-[var(--primary)] pl-3 text-lg font-bold uppercase";

    html! {
        <footer class="relative mt-20 bg-slate-900 pt-16 font-sans text-white">
            <div class="container mx-auto mb-12 grid grid-cols-1 gap-8 px-4 md:grid-cols-4">
                <div>
                    <h2 class="mb-4 font-serif text-3xl font-bold">
                        { logo_head }
                        <span class="text-[var(--primary)]">{ logo_tail }</span>
                    </h2>
                    <p class="mb-6 text-sm leading-relaxed text-gray-400">
                        { "Bringing you the latest news, in-depth analysis, and perspectives from around the globe." }
                    </p>
                </div>

                <div>
                    <h3 class={heading}>{ "Categories" }</h3>
                    <ul class="space-y-3 text-sm text-gray-400">
                        { for ctx.store().categories().iter().take(6).map(|category| html! {
                            <li key={category.id.clone()}>
                                <Link<Route>
                                    to={Route::Category { slug: category.slug.clone() }}
                                    classes={classes!("flex", "items-center", "gap-2", "hover:text-white")}
                                >
                                    <Icon name={IconName::ChevronRight} size={12} />
                                    { category.name.clone() }
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3 class={heading}>{ "Trending Tags" }</h3>
                    <div class="flex flex-wrap gap-2">
                        { for TRENDING_TAGS.iter().map(|tag| html! {
                            <Link<Route, SearchQuery>
                                to={Route::Search}
                                query={Some(SearchQuery { q: tag.to_string() })}
                                classes={classes!("rounded", "bg-gray-800", "px-3", "py-1", "text-xs", "text-white", "hover:bg-[var(--primary)]")}
                            >
                                { *tag }
                            </Link<Route, SearchQuery>>
                        }) }
                    </div>
                </div>

                <div>
                    <h3 class={heading}>{ "Newsletter" }</h3>
                    <p class="mb-4 text-sm text-gray-400">
                        { "Subscribe to our newsletter to get the latest news delivered to your inbox." }
                    </p>
                    <form class="flex" onsubmit={on_subscribe}>
                        <input
                            type="email"
                            placeholder="Your email"
                            required=true
                            class="w-full bg-gray-800 px-4 py-2 text-sm text-white focus:outline-none"
                        />
                        <button type="submit" class="bg-[var(--primary)] px-4 py-2 hover:bg-red-700" aria-label="Subscribe">
                            <Icon name={IconName::Mail} size={16} />
                        </button>
                    </form>
                </div>
            </div>

            <div class="container mx-auto flex flex-col items-center justify-between border-t border-gray-800 px-4 py-8 text-xs text-gray-500 md:flex-row">
                <p>{ settings.footer_text.clone() }</p>
                <div class="mt-4 flex gap-6 md:mt-0 md:pr-14">
                    <Link<Route> to={Route::PrivacyPolicy} classes={classes!("hover:text-white")}>{ "Privacy Policy" }</Link<Route>>
                    <Link<Route> to={Route::TermsOfService} classes={classes!("hover:text-white")}>{ "Terms of Service" }</Link<Route>>
                </div>
            </div>

            <button
                type="button"
                class="absolute bottom-6 right-6 z-20 rounded bg-[var(--primary)] p-3 text-white shadow-lg transition hover:bg-white hover:text-[var(--primary)]"
                aria-label="Back to Top"
                onclick={back_to_top}
            >
                <Icon name={IconName::ArrowUp} />
            </button>
        </footer>
    }
}
