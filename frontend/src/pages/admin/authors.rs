use omega_news_shared::views;
use yew::prelude::*;
use yew_router::prelude::*;

use super::{admin_header, PRIMARY_BUTTON};
use crate::{
    components::icons::{Icon, IconButton, IconName},
    data_context::{use_data, DataAction},
    router::Route,
    utils::confirm,
};

#[function_component(AuthorsPage)]
pub fn authors_page() -> Html {
    let ctx = use_data();
    let navigator = use_navigator();
    let Some(ctx) = ctx else {
        return html! {};
    };

    let store = ctx.store();
    let actions = html! {
        <Link<Route> to={Route::AdminAuthorNew} classes={classes!(PRIMARY_BUTTON)}>
            <Icon name={IconName::Plus} size={16} />{ "Add Author" }
        </Link<Route>>
    };

    html! {
        <div>
            { admin_header("Authors", actions) }
            <div class="grid grid-cols-1 gap-6 md:grid-cols-2 xl:grid-cols-3">
                { for store.authors().iter().map(|author| {
                    let posts = views::by_author(store.articles(), &author.name).len();
                    let edit = {
                        let navigator = navigator.clone();
                        let id = author.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            if let Some(navigator) = navigator.as_ref() {
                                navigator.push(&Route::AdminAuthorEdit { id: id.clone() });
                            }
                        })
                    };
                    let delete = {
                        let ctx = ctx.clone();
                        let id = author.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            if confirm("Delete this author? Published posts keep their byline.") {
                                ctx.dispatch(DataAction::DeleteAuthor(id.clone()));
                            }
                        })
                    };
                    html! {
                        <div key={author.id.clone()} class="flex gap-4 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-5 shadow-sm">
                            <img src={author.avatar.clone()} alt={author.name.clone()} class="h-16 w-16 shrink-0 rounded-full object-cover" />
                            <div class="min-w-0 flex-1">
                                <div class="flex items-start justify-between gap-2">
                                    <div class="min-w-0">
                                        <Link<Route> to={Route::author(&author.name)} classes={classes!("font-bold", "hover:text-[var(--primary)]")}>
                                            { author.name.clone() }
                                        </Link<Route>>
                                        <p class="text-xs font-bold uppercase text-[var(--primary)]">
                                            { author.role.clone().unwrap_or_else(|| "Contributor".to_string()) }
                                        </p>
                                    </div>
                                    <div class="flex gap-1">
                                        <IconButton icon={IconName::Pencil} title="Edit" onclick={edit} />
                                        <IconButton icon={IconName::Trash} title="Delete" onclick={delete}
                                            class={classes!("hover:text-red-600")} />
                                    </div>
                                </div>
                                if let Some(email) = author.email.clone() {
                                    <p class="mt-1 truncate text-sm text-[var(--muted)]">{ email }</p>
                                }
                                <p class="mt-2 text-sm text-[var(--muted)] line-clamp-2">{ author.bio.clone().unwrap_or_default() }</p>
                                <p class="mt-3 text-xs text-[var(--muted)]">
                                    { format!("{posts} {}", if posts == 1 { "post" } else { "posts" }) }
                                </p>
                            </div>
                        </div>
                    }
                }) }
            </div>
            if store.authors().is_empty() {
                <p class="py-10 text-center text-[var(--muted)]">{ "No authors yet." }</p>
            }
        </div>
    }
}
