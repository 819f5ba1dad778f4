pub mod admin;
pub mod article;
pub mod author;
pub mod categories;
pub mod category;
pub mod dynamic_page;
pub mod home;
pub mod info;
pub mod latest;
pub mod not_found;
pub mod search;
pub mod trending;

use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{components::sidebar::Sidebar, router::Route};

/// `Home / <label>` trail above listing pages.
fn breadcrumb(label: &str) -> Html {
    html! {
        <div class="mb-6 text-xs font-bold uppercase tracking-wide text-[var(--muted)]">
            <Link<Route> to={Route::Home} classes={classes!("hover:text-[var(--primary)]")}>{ "Home" }</Link<Route>>
            <span class="mx-2 opacity-50">{ "/" }</span>
            <span class="text-[var(--text)]">{ label.to_string() }</span>
        </div>
    }
}

/// Page heading with an intro paragraph.
fn page_intro(title: &str, intro: &str) -> Html {
    html! {
        <div class="mb-10 border-b border-[var(--border)] pb-8">
            <h1 class="mb-4 font-serif text-4xl font-black md:text-5xl">{ title.to_string() }</h1>
            <p class="max-w-2xl text-lg text-[var(--muted)]">{ intro.to_string() }</p>
        </div>
    }
}

/// Main column plus the shared sidebar.
fn with_sidebar(main: Html) -> Html {
    html! {
        <div class="grid grid-cols-1 gap-8 lg:grid-cols-12">
            <div class="lg:col-span-8">{ main }</div>
            <div class="lg:col-span-4"><Sidebar /></div>
        </div>
    }
}

fn empty_state(message: &str) -> Html {
    html! {
        <div class="border border-dashed border-[var(--border)] py-16 text-center text-[var(--muted)]">
            { message.to_string() }
        </div>
    }
}
