use web_sys::HtmlInputElement;
use yew::{events::InputEvent, prelude::*};
use yew_router::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config::SITE_TAGLINE,
    data_context::use_data,
    pages::search::SearchQuery,
    router::Route,
    utils::{split_logo, today_label},
};

fn is_active_path(current: &str, item: &str) -> bool {
    current == item || (item != "/" && current.starts_with(item))
}

#[function_component(Header)]
pub fn header() -> Html {
    let ctx = use_data();
    let menu_open = use_state(|| false);
    let search_open = use_state(|| false);
    let search_query = use_state(String::new);
    let navigator = use_navigator();
    let location = use_location();

    let Some(ctx) = ctx else {
        return html! {};
    };
    let settings = ctx.store().settings().clone();
    let current_path = location.map(|loc| loc.path().to_string()).unwrap_or_default();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let toggle_search = {
        let search_open = search_open.clone();
        Callback::from(move |_: MouseEvent| search_open.set(!*search_open))
    };

    let on_search_input = {
        let search_query = search_query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search_query.set(target.value());
            }
        })
    };

    let on_search_submit = {
        let search_query = search_query.clone();
        let search_open = search_open.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let query = search_query.trim().to_string();
            if query.is_empty() {
                return;
            }
            if let Some(navigator) = navigator.as_ref() {
                let target = SearchQuery {
                    q: query,
                };
                if let Err(err) = navigator.push_with_query(&Route::Search, &target) {
                    web_sys::console::error_1(&format!("search navigation failed: {err}").into());
                }
            }
            search_open.set(false);
            search_query.set(String::new());
        })
    };

    let (logo_head, logo_tail) = split_logo(&settings.logo_text);
    let nav_classes = classes!(
        "flex-col",
        "md:flex-row",
        "items-center",
        "justify-center",
        if *menu_open { "flex" } else { "hidden md:flex" }
    );

    html! {
        <header class="relative font-sans">
            <div class="hidden bg-slate-900 py-2 text-xs text-white md:block">
                <div class="container mx-auto flex items-center justify-between px-4">
                    <div class="flex gap-4">
                        <span>{ today_label() }</span>
                        <span class="text-gray-400">{ "|" }</span>
                        <Link<Route> to={Route::About} classes={classes!("hover:text-[var(--primary)]")}>{ "About Us" }</Link<Route>>
                        <Link<Route> to={Route::Contact} classes={classes!("hover:text-[var(--primary)]")}>{ "Contact" }</Link<Route>>
                        <Link<Route> to={Route::Trending} classes={classes!("hover:text-[var(--primary)]")}>{ "Trending" }</Link<Route>>
                    </div>
                </div>
            </div>

            <div class="container relative mx-auto flex flex-col items-center justify-between px-4 py-8 md:flex-row">
                <div class="absolute left-4 top-8 md:hidden">
                    <button type="button" aria-label="Toggle menu" onclick={toggle_menu}>
                        <Icon name={if *menu_open { IconName::X } else { IconName::Menu }} size={28} />
                    </button>
                </div>
                <div class="flex-1 text-center md:text-left">
                    <Link<Route> to={Route::Home} classes={classes!("inline-block")}>
                        <h1 class="font-serif text-5xl font-black tracking-tight text-[var(--text)] md:text-6xl">
                            { logo_head }
                            <span class="text-[var(--primary)]">{ logo_tail }</span>
                        </h1>
                        <p class="mt-1 text-xs font-bold uppercase tracking-widest text-[var(--muted)]">{ SITE_TAGLINE }</p>
                    </Link<Route>>
                </div>
                if settings.show_ads {
                    <div class="hidden md:block">
                        <div class="flex h-[90px] w-[728px] items-center justify-center border border-[var(--border)] bg-[var(--surface-alt)] text-sm text-[var(--muted)]">
                            { "Advertisement Space (728x90)" }
                        </div>
                    </div>
                }
            </div>

            <div class="sticky top-0 z-40 border-y border-[var(--border)] bg-[var(--surface)] shadow-sm">
                <div class="container relative mx-auto px-4">
                    <nav class={nav_classes}>
                        <ul class="flex flex-col py-4 text-sm font-bold uppercase tracking-wide md:flex-row md:gap-8 md:py-0">
                            { for settings.navigation.iter().map(|item| {
                                let active = is_active_path(&current_path, &item.path);
                                html! {
                                    <li key={item.path.clone()} onclick={close_menu.clone()}>
                                        <Link<Route>
                                            to={Route::from_path(&item.path)}
                                            classes={classes!(
                                                "block",
                                                "px-2",
                                                "py-3",
                                                "md:py-4",
                                                "transition-colors",
                                                "hover:text-[var(--primary)]",
                                                if active { "text-[var(--primary)]" } else { "text-[var(--text)]" }
                                            )}
                                        >
                                            { item.label.clone() }
                                        </Link<Route>>
                                    </li>
                                }
                            }) }
                        </ul>
                        <div class="absolute right-4 top-1/2 hidden -translate-y-1/2 md:block">
                            <button
                                type="button"
                                class="rounded-full p-2 transition hover:bg-[var(--surface-alt)]"
                                aria-label="Search"
                                onclick={toggle_search}
                            >
                                <Icon name={if *search_open { IconName::X } else { IconName::Search }} />
                            </button>
                        </div>
                    </nav>
                    if *search_open {
                        <div class="absolute left-0 top-full z-50 w-full border-b border-[var(--border)] bg-[var(--surface)] p-4 shadow-md">
                            <form class="mx-auto flex max-w-2xl" onsubmit={on_search_submit}>
                                <input
                                    type="text"
                                    placeholder="Search for articles, topics, or authors..."
                                    class="flex-1 border border-[var(--border)] p-3 text-sm focus:border-[var(--primary)] focus:outline-none"
                                    value={(*search_query).clone()}
                                    oninput={on_search_input}
                                    autofocus=true
                                />
                                <button type="submit" class="bg-[var(--primary)] px-6 py-3 text-xs font-bold uppercase tracking-wider text-white hover:bg-red-700">
                                    { "Search" }
                                </button>
                            </form>
                        </div>
                    }
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::is_active_path;

    #[test]
    fn home_only_matches_exactly() {
        assert!(is_active_path("/", "/"));
        assert!(!is_active_path("/trending", "/"));
        assert!(is_active_path("/category/world", "/category/world"));
        assert!(is_active_path("/category/world/", "/category/world"));
        assert!(!is_active_path("/category/tech", "/category/world"));
    }
}
