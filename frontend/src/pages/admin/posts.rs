use yew::prelude::*;
use yew_router::prelude::*;

use super::{admin_header, panel, PRIMARY_BUTTON, TABLE_CLASSES, TD_CLASSES, TH_CLASSES};
use crate::{
    components::{
        icons::{Icon, IconButton, IconName},
        pagination::Pagination,
    },
    config::ADMIN_PAGE_SIZE,
    data_context::{use_data, DataAction},
    hooks::use_pagination,
    router::Route,
    utils::{confirm, format_short_date},
};

#[function_component(PostsPage)]
pub fn posts_page() -> Html {
    let ctx = use_data();
    let navigator = use_navigator();
    let articles = ctx
        .as_ref()
        .map(|ctx| ctx.store().articles().to_vec())
        .unwrap_or_default();
    let total = articles.len();
    let (visible, current_page, total_pages, go_to_page) = use_pagination(articles, ADMIN_PAGE_SIZE);

    let Some(ctx) = ctx else {
        return html! {};
    };

    let on_delete = {
        let ctx = ctx.clone();
        Callback::from(move |id: String| {
            if confirm("Are you sure you want to delete this post? This action cannot be undone.") {
                ctx.dispatch(DataAction::DeleteArticle(id));
            }
        })
    };

    let actions = html! {
        <Link<Route> to={Route::AdminPostNew} classes={classes!(PRIMARY_BUTTON)}>
            <Icon name={IconName::Plus} size={16} />{ "New Post" }
        </Link<Route>>
    };

    html! {
        <div>
            { admin_header("Posts", actions) }
            { panel(html! {
                <>
                    <table class={TABLE_CLASSES}>
                        <thead class="border-b border-[var(--border)] bg-[var(--surface-alt)]">
                            <tr>
                                <th class={TH_CLASSES}>{ "Title" }</th>
                                <th class={TH_CLASSES}>{ "Author" }</th>
                                <th class={TH_CLASSES}>{ "Category" }</th>
                                <th class={TH_CLASSES}>{ "Date" }</th>
                                <th class={classes!(TH_CLASSES, "text-right")}>{ "Actions" }</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-[var(--border)]">
                            { for visible.into_iter().map(|article| {
                                let view = {
                                    let navigator = navigator.clone();
                                    let id = article.id.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        if let Some(navigator) = navigator.as_ref() {
                                            navigator.push(&Route::Article { id: id.clone() });
                                        }
                                    })
                                };
                                let edit = {
                                    let navigator = navigator.clone();
                                    let id = article.id.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        if let Some(navigator) = navigator.as_ref() {
                                            navigator.push(&Route::AdminPostEdit { id: id.clone() });
                                        }
                                    })
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = article.id.clone();
                                    Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                                };
                                html! {
                                    <tr key={article.id.clone()} class="hover:bg-[var(--surface-alt)]">
                                        <td class={TD_CLASSES}>
                                            <div class="flex items-center gap-3">
                                                <img src={article.image_url.clone()} alt="" class="h-10 w-10 rounded object-cover" />
                                                <span class="font-medium line-clamp-1">{ article.title.clone() }</span>
                                            </div>
                                        </td>
                                        <td class={TD_CLASSES}>{ article.author.name.clone() }</td>
                                        <td class={TD_CLASSES}>
                                            <span class="rounded bg-[var(--surface-alt)] px-2 py-1 text-xs">{ article.category.clone() }</span>
                                        </td>
                                        <td class={TD_CLASSES}>{ format_short_date(&article.date) }</td>
                                        <td class={classes!(TD_CLASSES, "text-right")}>
                                            <div class="flex justify-end gap-1">
                                                <IconButton icon={IconName::Eye} title="View" onclick={view} />
                                                <IconButton icon={IconName::Pencil} title="Edit" onclick={edit} />
                                                <IconButton icon={IconName::Trash} title="Delete" onclick={delete} class={classes!("hover:text-red-600")} />
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                    if total == 0 {
                        <div class="p-10 text-center text-[var(--muted)]">{ "No posts found. Create one!" }</div>
                    }
                </>
            }) }
            <div class="mt-6">
                <Pagination
                    current_page={current_page}
                    total_pages={total_pages}
                    on_page_change={go_to_page}
                    summary={Some((ADMIN_PAGE_SIZE, total))}
                />
            </div>
        </div>
    }
}
