use omega_news_shared::models::PageStatus;
use yew::prelude::*;
use yew_router::prelude::*;

use super::{admin_header, panel, PRIMARY_BUTTON, TABLE_CLASSES, TD_CLASSES, TH_CLASSES};
use crate::{
    components::icons::{Icon, IconButton, IconName},
    data_context::{use_data, DataAction},
    router::Route,
    utils::{confirm, format_short_date},
};

fn status_badge(status: PageStatus) -> Html {
    let (label, tone) = match status {
        PageStatus::Published => ("Published", "bg-green-100 text-green-700"),
        PageStatus::Draft => ("Draft", "bg-yellow-100 text-yellow-700"),
    };
    html! {
        <span class={classes!("rounded-full", "px-2", "py-1", "text-xs", "font-bold", tone)}>{ label }</span>
    }
}

#[function_component(PagesPage)]
pub fn pages_page() -> Html {
    let ctx = use_data();
    let navigator = use_navigator();
    let Some(ctx) = ctx else {
        return html! {};
    };

    let pages = ctx.store().pages().to_vec();
    let go = {
        let navigator = navigator.clone();
        move |route: Route| {
            let navigator = navigator.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&route);
                }
            })
        }
    };

    let actions = html! {
        <Link<Route> to={Route::AdminPageNew} classes={classes!(PRIMARY_BUTTON)}>
            <Icon name={IconName::Plus} size={16} />{ "Create Page" }
        </Link<Route>>
    };

    html! {
        <div>
            { admin_header("Pages", actions) }
            { panel(html! {
                <>
                    <table class={TABLE_CLASSES}>
                        <thead class="border-b border-[var(--border)] bg-[var(--surface-alt)]">
                            <tr>
                                <th class={TH_CLASSES}>{ "Title" }</th>
                                <th class={TH_CLASSES}>{ "Slug" }</th>
                                <th class={TH_CLASSES}>{ "Status" }</th>
                                <th class={TH_CLASSES}>{ "Last Updated" }</th>
                                <th class={classes!(TH_CLASSES, "text-right")}>{ "Actions" }</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-[var(--border)]">
                            { for pages.into_iter().map(|page| {
                                let delete = {
                                    let ctx = ctx.clone();
                                    let id = page.id.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        if confirm("Are you sure you want to delete this page?") {
                                            ctx.dispatch(DataAction::DeletePage(id.clone()));
                                        }
                                    })
                                };
                                html! {
                                    <tr key={page.id.clone()} class="hover:bg-[var(--surface-alt)]">
                                        <td class={classes!(TD_CLASSES, "font-medium")}>{ page.title.clone() }</td>
                                        <td class={classes!(TD_CLASSES, "font-mono", "text-xs", "text-[var(--muted)]")}>
                                            { format!("/page/{}", page.slug) }
                                        </td>
                                        <td class={TD_CLASSES}>{ status_badge(page.status) }</td>
                                        <td class={TD_CLASSES}>{ format_short_date(&page.last_updated) }</td>
                                        <td class={classes!(TD_CLASSES, "text-right")}>
                                            <div class="flex justify-end gap-1">
                                                <IconButton icon={IconName::Eye} title="Preview"
                                                    onclick={go(Route::AdminPagePreview { id: page.id.clone() })} />
                                                <IconButton icon={IconName::Pencil} title="Edit"
                                                    onclick={go(Route::AdminPageEdit { id: page.id.clone() })} />
                                                <IconButton icon={IconName::Trash} title="Delete" onclick={delete}
                                                    class={classes!("hover:text-red-600")} />
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                    if ctx.store().pages().is_empty() {
                        <div class="p-10 text-center text-[var(--muted)]">{ "No pages yet." }</div>
                    }
                </>
            }) }
        </div>
    }
}
