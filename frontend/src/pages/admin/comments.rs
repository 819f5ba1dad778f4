use omega_news_shared::{
    models::CommentStatus,
    views::{comment_status_counts, comments_with_status, CommentFilter},
};
use yew::prelude::*;

use super::{admin_header, panel};
use crate::{
    components::icons::{Icon, IconName},
    data_context::{use_data, DataAction},
    utils::{confirm, format_short_date},
};

fn tab_label(filter: CommentFilter) -> String {
    let label = filter.label();
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn status_badge(status: CommentStatus) -> Html {
    let tone = match status {
        CommentStatus::Approved => "bg-green-100 text-green-700",
        CommentStatus::Pending => "bg-yellow-100 text-yellow-700",
        CommentStatus::Rejected => "bg-red-100 text-red-700",
    };
    html! {
        <span class={classes!("rounded-full", "px-2", "py-0.5", "text-[10px]", "font-bold", "uppercase", tone)}>
            { status.as_str() }
        </span>
    }
}

const ACTION_CLASSES: &str = "inline-flex items-center gap-1 rounded px-3 py-1 text-xs font-bold";

#[function_component(CommentsPage)]
pub fn comments_page() -> Html {
    let ctx = use_data();
    let filter = use_state(|| CommentFilter::All);
    let Some(ctx) = ctx else {
        return html! {};
    };

    let comments = ctx.store().comments();
    let counts = comment_status_counts(comments);
    let visible = comments_with_status(comments, *filter);

    let tabs = CommentFilter::TABS.iter().map(|tab| {
        let tab = *tab;
        let active = *filter == tab;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| filter.set(tab))
        };
        html! {
            <button
                type="button"
                class={classes!(
                    "border-b-2", "px-4", "py-3", "text-sm", "font-bold",
                    if active { "border-[var(--primary)] text-[var(--primary)]" } else { "border-transparent text-[var(--muted)]" }
                )}
                {onclick}
            >
                { tab_label(tab) }
                <span class="ml-2 rounded-full bg-[var(--surface-alt)] px-2 text-xs">{ counts.get(tab) }</span>
            </button>
        }
    });

    let set_status = |id: &str, status: CommentStatus| {
        let ctx = ctx.clone();
        let id = id.to_string();
        Callback::from(move |_: MouseEvent| {
            ctx.dispatch(DataAction::SetCommentStatus {
                id: id.clone(),
                status,
            })
        })
    };

    html! {
        <div>
            { admin_header("Comments", html! {}) }
            <div class="mb-6 flex gap-2 overflow-x-auto border-b border-[var(--border)]">
                { for tabs }
            </div>
            { panel(html! {
                <>
                if visible.is_empty() {
                    <div class="p-10 text-center text-[var(--muted)]">{ "No comments found in this category." }</div>
                } else {
                    <ul class="divide-y divide-[var(--border)]">
                        { for visible.iter().map(|comment| {
                            let status = comment.effective_status();
                            let delete = {
                                let ctx = ctx.clone();
                                let id = comment.id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    if confirm("Delete this comment permanently?") {
                                        ctx.dispatch(DataAction::DeleteComment(id.clone()));
                                    }
                                })
                            };
                            html! {
                                <li key={comment.id.clone()} class="flex gap-4 p-6">
                                    <img src={comment.avatar.clone()} alt="" class="h-10 w-10 shrink-0 rounded-full bg-[var(--surface-alt)] object-cover" />
                                    <div class="min-w-0 flex-1">
                                        <div class="mb-1 flex flex-wrap items-center gap-2">
                                            <span class="font-bold">{ comment.author.clone() }</span>
                                            { status_badge(status) }
                                            <span class="text-xs text-[var(--muted)]">{ format_short_date(&comment.date) }</span>
                                        </div>
                                        <p class="mb-3 text-sm text-[var(--text)]">{ comment.content.clone() }</p>
                                        <div class="flex flex-wrap gap-2">
                                            if status != CommentStatus::Approved {
                                                <button type="button" class={classes!(ACTION_CLASSES, "bg-green-50", "text-green-700", "hover:bg-green-100")}
                                                    onclick={set_status(&comment.id, CommentStatus::Approved)}>
                                                    <Icon name={IconName::Check} size={14} />{ "Approve" }
                                                </button>
                                            }
                                            if status != CommentStatus::Rejected {
                                                <button type="button" class={classes!(ACTION_CLASSES, "bg-yellow-50", "text-yellow-700", "hover:bg-yellow-100")}
                                                    onclick={set_status(&comment.id, CommentStatus::Rejected)}>
                                                    <Icon name={IconName::X} size={14} />{ "Reject" }
                                                </button>
                                            }
                                            <button type="button" class={classes!(ACTION_CLASSES, "bg-red-50", "text-red-700", "hover:bg-red-100")}
                                                onclick={delete}>
                                                <Icon name={IconName::Trash} size={14} />{ "Delete" }
                                            </button>
                                        </div>
                                    </div>
                                </li>
                            }
                        }) }
                    </ul>
                }
                </>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_labels_are_capitalised() {
        let labels: Vec<String> = CommentFilter::TABS.iter().map(|tab| tab_label(*tab)).collect();
        assert_eq!(labels, vec!["All", "Pending", "Approved", "Rejected"]);
    }
}
