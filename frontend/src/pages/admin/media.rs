use omega_news_shared::{
    clock::Clock,
    config::Collection,
    models::{MediaItem, ToastKind},
    views::media_matching,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{admin_header, PRIMARY_BUTTON};
use crate::{
    components::icons::{Icon, IconButton, IconName},
    data_context::{notify, use_data, DataAction},
    utils::{confirm, copy_to_clipboard, format_short_date},
};

fn new_media_item(id: String, url: &str, now_ms: i64, now: String) -> MediaItem {
    MediaItem {
        id,
        url: url.trim().to_string(),
        name: format!("image-{now_ms}.jpg"),
        kind: "image".to_string(),
        date: now,
    }
}

#[function_component(MediaPage)]
pub fn media_page() -> Html {
    let ctx = use_data();
    let search = use_state(String::new);
    let url_input = use_state(String::new);
    let Some(ctx) = ctx else {
        return html! {};
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(target.value());
            }
        })
    };
    let on_url = {
        let url_input = url_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                url_input.set(target.value());
            }
        })
    };

    let on_add = {
        let ctx = ctx.clone();
        let url_input = url_input.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if url_input.trim().is_empty() {
                return;
            }
            let clock = ctx.clock();
            let item = new_media_item(
                ctx.new_id(Collection::Media),
                &url_input,
                clock.now_ms(),
                clock.now_rfc3339(),
            );
            ctx.dispatch(DataAction::AddMedia(item));
            url_input.set(String::new());
        })
    };

    let items = media_matching(ctx.store().media(), &search);

    html! {
        <div>
            { admin_header("Media Library", html! {}) }
            <div class="mb-6 flex flex-col gap-4 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-4 md:flex-row md:items-center">
                <div class="relative flex-1">
                    <span class="absolute left-3 top-1/2 -translate-y-1/2 text-[var(--muted)]">
                        <Icon name={IconName::Search} size={16} />
                    </span>
                    <input
                        type="search"
                        class="w-full rounded-lg border border-[var(--border)] bg-[var(--surface)] py-2 pl-9 pr-3 text-sm"
                        placeholder="Search media..."
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                </div>
                <form class="flex flex-1 gap-2" onsubmit={on_add}>
                    <input
                        type="url"
                        class="flex-1 rounded-lg border border-[var(--border)] bg-[var(--surface)] px-3 py-2 text-sm"
                        placeholder="Paste image URL..."
                        value={(*url_input).clone()}
                        oninput={on_url}
                    />
                    <button type="submit" class={PRIMARY_BUTTON}>
                        <Icon name={IconName::Plus} size={16} />{ "Add" }
                    </button>
                </form>
            </div>

            if items.is_empty() {
                <p class="py-16 text-center text-[var(--muted)]">{ "No media found." }</p>
            } else {
                <div class="grid grid-cols-2 gap-4 md:grid-cols-4 xl:grid-cols-6">
                    { for items.into_iter().map(|item| {
                        let copy = {
                            let ctx = ctx.clone();
                            let url = item.url.clone();
                            Callback::from(move |_: MouseEvent| {
                                let ctx = ctx.clone();
                                copy_to_clipboard(url.clone(), Callback::from(move |copied: bool| {
                                    if copied {
                                        notify(&ctx, "URL copied to clipboard!", ToastKind::Success);
                                    } else {
                                        notify(&ctx, "Could not copy URL", ToastKind::Error);
                                    }
                                }));
                            })
                        };
                        let delete = {
                            let ctx = ctx.clone();
                            let id = item.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                if confirm("Delete this file?") {
                                    ctx.dispatch(DataAction::DeleteMedia(id.clone()));
                                }
                            })
                        };
                        html! {
                            <div key={item.id.clone()} class="group overflow-hidden rounded-lg border border-[var(--border)] bg-[var(--surface)]">
                                <div class="relative aspect-square bg-[var(--surface-alt)]">
                                    <img src={item.url.clone()} alt={item.name.clone()} class="h-full w-full object-cover" loading="lazy" />
                                    <div class="absolute inset-0 flex items-center justify-center gap-2 bg-black/50 opacity-0 transition-opacity group-hover:opacity-100">
                                        <IconButton icon={IconName::Copy} title="Copy URL" onclick={copy}
                                            class={classes!("bg-white", "text-gray-800")} />
                                        <IconButton icon={IconName::Trash} title="Delete" onclick={delete}
                                            class={classes!("bg-white", "text-red-600")} />
                                    </div>
                                </div>
                                <div class="p-2">
                                    <p class="truncate text-xs font-medium" title={item.name.clone()}>{ item.name.clone() }</p>
                                    <p class="text-[10px] text-[var(--muted)]">{ format_short_date(&item.date) }</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_media_is_named_after_the_timestamp() {
        let item = new_media_item(
            "12".to_string(),
            "  https://picsum.photos/seed/x/400/300 ",
            1_700_000_000_000,
            "2023-11-14T22:13:20.000Z".to_string(),
        );
        assert_eq!(item.name, "image-1700000000000.jpg");
        assert_eq!(item.kind, "image");
        assert_eq!(item.url, "https://picsum.photos/seed/x/400/300");
    }
}
