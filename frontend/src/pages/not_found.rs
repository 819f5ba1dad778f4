use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::icons::{Icon, IconName},
    router::Route,
};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="container mx-auto flex min-h-[60vh] flex-col items-center justify-center px-4 py-20 text-center">
            <h1 class="font-serif text-[120px] font-black leading-none text-[var(--border)]">{ "404" }</h1>
            <h2 class="relative z-10 -mt-10 mb-4 font-serif text-3xl font-bold">{ "Page Not Found" }</h2>
            <p class="mx-auto mb-8 max-w-md text-[var(--muted)]">
                { "The page you are looking for might have been removed, had its name changed, or is temporarily unavailable." }
            </p>
            <form action="/search" class="mb-8 flex w-full max-w-md">
                <input type="text" name="q" placeholder="Try searching instead..." class="flex-1 rounded-l border border-[var(--border)] p-3 focus:border-[var(--primary)] focus:outline-none" />
                <button type="submit" class="rounded-r bg-slate-900 px-4 py-3 text-white hover:bg-[var(--primary)]" aria-label="Search">
                    <Icon name={IconName::Search} />
                </button>
            </form>
            <Link<Route> to={Route::Home} classes={classes!("border-b-2", "border-[var(--primary)]", "pb-1", "text-sm", "font-bold", "uppercase", "text-[var(--primary)]")}>
                { "Back to Homepage" }
            </Link<Route>>
        </div>
    }
}
