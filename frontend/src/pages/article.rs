use gloo_timers::callback::Timeout;
use omega_news_shared::{
    models::{Article, CommentStatus, ToastKind},
    views::{self, CommentFilter},
};
use web_sys::{HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_router::prelude::Link;

use super::not_found::NotFoundPage;
use crate::{
    components::{
        article_card::{ArticleCard, CategoryBadge},
        icons::{Icon, IconName},
        raw_html::RichContent,
        sidebar::{SectionTitle, Sidebar},
    },
    config::RELATED_ARTICLES,
    data_context::{notify, use_data, DataAction},
    hooks::scroll_window_to_top,
    pages::search::SearchQuery,
    router::Route,
    seo::apply_page_meta,
    utils::{
        copy_to_clipboard, current_href, format_count, format_long_date, format_short_date,
        format_time, open_popup,
    },
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum SharePlatform {
    Facebook,
    Twitter,
    Linkedin,
}

impl SharePlatform {
    fn label(self) -> &'static str {
        match self {
            SharePlatform::Facebook => "Facebook",
            SharePlatform::Twitter => "Twitter",
            SharePlatform::Linkedin => "LinkedIn",
        }
    }

    fn tone(self) -> &'static str {
        match self {
            SharePlatform::Facebook => "bg-[#3b5998]",
            SharePlatform::Twitter => "bg-[#1DA1F2]",
            SharePlatform::Linkedin => "bg-[#0077b5]",
        }
    }

    fn share_url(self, page_url: &str, title: &str) -> String {
        let url = urlencoding::encode(page_url);
        match self {
            SharePlatform::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
            SharePlatform::Twitter => {
                let text = urlencoding::encode(title);
                format!("https://twitter.com/intent/tweet?url={url}&text={text}")
            },
            SharePlatform::Linkedin => format!("https://www.linkedin.com/shareArticle?mini=true&url={url}"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticlePageProps {
    pub id: String,
}

#[function_component(ArticlePage)]
pub fn article_page(props: &ArticlePageProps) -> Html {
    let ctx = use_data();
    let liked = use_state(|| false);
    let saved = use_state(|| false);
    let comment_sent = use_state(|| false);
    let comment_text = use_state(String::new);
    let comment_ref = use_node_ref();

    let article = ctx
        .as_ref()
        .and_then(|ctx| ctx.store().article(&props.id).cloned());

    {
        let ctx = ctx.clone();
        let liked = liked.clone();
        let saved = saved.clone();
        let comment_sent = comment_sent.clone();
        let comment_text = comment_text.clone();
        use_effect_with(props.id.clone(), move |id| {
            scroll_window_to_top();
            liked.set(false);
            saved.set(false);
            comment_sent.set(false);
            comment_text.set(String::new());
            if let Some(ctx) = ctx.as_ref() {
                ctx.dispatch(DataAction::RecordView(id.clone()));
            }
            || ()
        });
    }

    {
        let meta = article.as_ref().map(|article| (article.title.clone(), article.excerpt.clone()));
        use_effect_with(meta, |meta| {
            if let Some((title, excerpt)) = meta {
                apply_page_meta(title, Some(excerpt.as_str()));
            }
            || ()
        });
    }

    let (Some(ctx), Some(article)) = (ctx, article) else {
        return html! { <NotFoundPage /> };
    };

    let approved = views::comments_with_status(
        ctx.store().comments(),
        CommentFilter::Only(CommentStatus::Approved),
    );
    let related = views::related(ctx.store().articles(), &article, RELATED_ARTICLES);

    let on_share = {
        let title = article.title.clone();
        Callback::from(move |platform: SharePlatform| {
            open_popup(&platform.share_url(&current_href(), &title));
        })
    };

    let on_copy_link = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| {
            let ctx = ctx.clone();
            copy_to_clipboard(
                current_href(),
                Callback::from(move |ok: bool| {
                    if ok {
                        notify(&ctx, "Link copied to clipboard!", ToastKind::Success);
                    } else {
                        notify(&ctx, "Could not copy the link.", ToastKind::Error);
                    }
                }),
            );
        })
    };

    let on_like = {
        let ctx = ctx.clone();
        let liked = liked.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*liked;
            liked.set(next);
            if next {
                notify(&ctx, "Article liked!", ToastKind::Success);
            }
        })
    };

    let on_save = {
        let ctx = ctx.clone();
        let saved = saved.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*saved;
            saved.set(next);
            let message = if next {
                "Article saved to your library."
            } else {
                "Article removed from library."
            };
            notify(&ctx, message, ToastKind::Success);
        })
    };

    let on_reply = {
        let comment_ref = comment_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = comment_ref.cast::<HtmlTextAreaElement>() {
                let _ = input.focus();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Center);
                input.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    };

    let on_comment_input = {
        let comment_text = comment_text.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                comment_text.set(target.value());
            }
        })
    };

    // Comments are not stored; the form only acknowledges the submission.
    let on_comment_submit = {
        let ctx = ctx.clone();
        let comment_sent = comment_sent.clone();
        let comment_text = comment_text.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            comment_sent.set(true);
            comment_text.set(String::new());
            notify(&ctx, "Comment submitted for approval!", ToastKind::Success);
            let comment_sent = comment_sent.clone();
            Timeout::new(5_000, move || comment_sent.set(false)).forget();
        })
    };

    let write_another = {
        let comment_sent = comment_sent.clone();
        Callback::from(move |_: MouseEvent| comment_sent.set(false))
    };

    let author_route = Route::author(&article.author.name);
    let field = "w-full rounded border border-[var(--border)] p-3 text-sm focus:border-[var(--primary)] focus:outline-none";

    html! {
        <div class="relative bg-[var(--surface)]">
            { article_hero(&article, &author_route) }

            <div class="container mx-auto grid grid-cols-1 gap-10 px-4 py-12 lg:grid-cols-12">
                <article class="lg:col-span-8">
                    <div class="mb-8 flex flex-col items-center justify-between gap-4 border-y border-[var(--border)] py-4 sm:flex-row">
                        <div class="flex gap-2">
                            <span class="mr-2 hidden self-center text-xs font-bold uppercase text-[var(--muted)] sm:block">{ "Share:" }</span>
                            { for [SharePlatform::Facebook, SharePlatform::Twitter, SharePlatform::Linkedin].into_iter().map(|platform| {
                                let on_share = on_share.clone();
                                html! {
                                    <button
                                        type="button"
                                        class={classes!(platform.tone(), "rounded", "px-3", "py-2", "text-xs", "font-bold", "text-white", "hover:opacity-90")}
                                        onclick={Callback::from(move |_: MouseEvent| on_share.emit(platform))}
                                    >
                                        { platform.label() }
                                    </button>
                                }
                            }) }
                            <button
                                type="button"
                                class="rounded bg-gray-700 p-2 text-white hover:bg-[var(--primary)]"
                                title="Copy Link"
                                onclick={on_copy_link}
                            >
                                <Icon name={IconName::Copy} size={18} />
                            </button>
                        </div>
                        <div class="flex gap-6">
                            <button
                                type="button"
                                class={classes!("flex", "items-center", "gap-2", "text-sm", "font-bold", "uppercase",
                                    if *saved { "text-[var(--primary)]" } else { "text-[var(--muted)] hover:text-[var(--primary)]" })}
                                onclick={on_save}
                            >
                                <Icon name={IconName::Bookmark} size={18} filled={*saved} />
                                { if *saved { "Saved" } else { "Save" } }
                            </button>
                            <button
                                type="button"
                                class={classes!("flex", "items-center", "gap-2", "text-sm", "font-bold", "uppercase",
                                    if *liked { "text-[var(--primary)]" } else { "text-[var(--muted)] hover:text-[var(--primary)]" })}
                                onclick={on_like}
                            >
                                <Icon name={IconName::Heart} size={18} filled={*liked} />
                                { if *liked { "Liked" } else { "Like" } }
                            </button>
                        </div>
                    </div>

                    <RichContent content={article.content.clone()} class={classes!("prose-lg", "font-serif", "leading-8")} />

                    <div class="mt-10 border-t border-[var(--border)] pt-6">
                        <span class="mr-2 text-sm font-bold uppercase text-[var(--muted)]">{ "Tags:" }</span>
                        { for article.tags.iter().map(|tag| html! {
                            <Link<Route, SearchQuery>
                                to={Route::Search}
                                query={Some(SearchQuery { q: tag.clone() })}
                                classes={classes!("mb-2", "mr-2", "inline-block", "rounded", "bg-[var(--surface-alt)]", "px-3", "py-1", "text-xs", "text-[var(--muted)]", "hover:bg-[var(--primary)]", "hover:text-white")}
                            >
                                { format!("#{tag}") }
                            </Link<Route, SearchQuery>>
                        }) }
                    </div>

                    <div class="mt-10 flex flex-col items-center gap-6 rounded border border-[var(--border)] bg-[var(--surface-alt)] p-8 text-center sm:flex-row sm:items-start sm:text-left">
                        <Link<Route> to={author_route.clone()}>
                            <img src={article.author.avatar.clone()} alt={article.author.name.clone()} class="h-20 w-20 rounded-full" />
                        </Link<Route>>
                        <div>
                            <h4 class="mb-1 text-lg font-bold">
                                { "About " }
                                <Link<Route> to={author_route.clone()} classes={classes!("hover:text-[var(--primary)]")}>{ article.author.name.clone() }</Link<Route>>
                            </h4>
                            <p class="text-sm text-[var(--muted)]">
                                { article.author.bio.clone().unwrap_or_else(|| "Senior editor and journalist covering global events and technology trends.".to_string()) }
                            </p>
                        </div>
                    </div>

                    <div class="mt-12" id="comments">
                        <SectionTitle title={format!("Comments ({})", approved.len())} />
                        <div class="mb-12 space-y-8">
                            { for approved.iter().map(|comment| html! {
                                <div key={comment.id.clone()} class="flex gap-4">
                                    <img src={comment.avatar.clone()} alt={comment.author.clone()} class="h-12 w-12 shrink-0 rounded-full border border-[var(--border)]" />
                                    <div class="flex-1 rounded-lg border border-[var(--border)] bg-[var(--surface-alt)] p-4">
                                        <div class="mb-2 flex items-center justify-between">
                                            <h5 class="text-sm font-bold">{ comment.author.clone() }</h5>
                                            <span class="text-xs text-[var(--muted)]">
                                                { format_short_date(&comment.date) }
                                                { format_time(&comment.date).map(|time| format!(" at {time}")).unwrap_or_default() }
                                            </span>
                                        </div>
                                        <p class="text-sm leading-relaxed">{ comment.content.clone() }</p>
                                        <button type="button" class="mt-3 text-xs font-bold uppercase text-[var(--primary)] hover:text-red-800" onclick={on_reply.clone()}>
                                            { "Reply" }
                                        </button>
                                    </div>
                                </div>
                            }) }
                        </div>

                        <div class="relative overflow-hidden rounded border border-[var(--border)] bg-[var(--surface-alt)] p-8">
                            if *comment_sent {
                                <div class="py-10 text-center">
                                    <div class="mb-4 inline-flex h-16 w-16 items-center justify-center rounded-full bg-green-100 text-green-600">
                                        <Icon name={IconName::Check} size={32} />
                                    </div>
                                    <h3 class="mb-2 text-xl font-bold">{ "Comment Submitted!" }</h3>
                                    <p class="text-[var(--muted)]">{ "Your comment has been sent for moderation and will appear shortly." }</p>
                                    <button type="button" class="mt-6 text-sm font-bold text-[var(--primary)] hover:underline" onclick={write_another}>
                                        { "Write another comment" }
                                    </button>
                                </div>
                            } else {
                                <>
                                <h3 class="mb-6 flex items-center gap-2 font-serif text-lg font-bold">
                                    <Icon name={IconName::MessageSquare} />
                                    { "Leave a Reply" }
                                </h3>
                                <form onsubmit={on_comment_submit}>
                                    <div class="mb-4 grid grid-cols-1 gap-4 md:grid-cols-2">
                                        <input type="text" placeholder="Name" class={field} required=true />
                                        <input type="email" placeholder="Email" class={field} required=true />
                                    </div>
                                    <textarea
                                        ref={comment_ref}
                                        rows="4"
                                        placeholder="Write your comment here..."
                                        class={classes!(field, "mb-4", "resize-y")}
                                        value={(*comment_text).clone()}
                                        oninput={on_comment_input}
                                        required=true
                                    />
                                    <button type="submit" class="rounded bg-slate-900 px-8 py-4 text-xs font-bold uppercase text-white hover:bg-[var(--primary)]">
                                        { "Post Comment" }
                                    </button>
                                </form>
                                </>
                            }
                        </div>
                    </div>

                    if !related.is_empty() {
                        <div class="mt-16">
                            <SectionTitle title="You Might Also Like" />
                            <div class="grid grid-cols-1 gap-6 md:grid-cols-3">
                                { for related.into_iter().map(|item| html! {
                                    <ArticleCard key={item.id.clone()} article={item.clone()} show_excerpt={false} class={classes!("text-sm")} />
                                }) }
                            </div>
                        </div>
                    }
                </article>
                <aside class="lg:col-span-4">
                    <Sidebar />
                </aside>
            </div>
        </div>
    }
}

fn article_hero(article: &Article, author_route: &Route) -> Html {
    html! {
        <div class="relative h-[400px] w-full md:h-[500px]">
            <img src={article.image_url.clone()} alt={article.title.clone()} class="h-full w-full object-cover" />
            <div class="absolute inset-0 bg-black/40"></div>
            <div class="absolute inset-x-0 bottom-0 bg-gradient-to-t from-black/90 to-transparent p-6 text-white md:p-12">
                <div class="container mx-auto max-w-4xl">
                    <CategoryBadge category={article.category.clone()} />
                    <h1 class="my-4 font-serif text-3xl font-bold leading-tight md:text-5xl">{ article.title.clone() }</h1>
                    <div class="flex flex-wrap items-center gap-6 text-sm font-medium md:text-base">
                        <div class="flex items-center gap-3">
                            <img src={article.author.avatar.clone()} alt={article.author.name.clone()} class="h-10 w-10 rounded-full border-2 border-[var(--primary)]" />
                            <span>
                                { "By " }
                                <Link<Route> to={author_route.clone()} classes={classes!("underline", "underline-offset-2", "hover:text-[var(--primary)]")}>
                                    { article.author.name.clone() }
                                </Link<Route>>
                            </span>
                        </div>
                        <span class="text-gray-300">{ format_long_date(&article.date) }</span>
                        <span class="text-gray-300">{ format!("{} Views", format_count(article.views)) }</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::SharePlatform;

    #[test]
    fn share_urls_encode_the_page() {
        let url = "https://omega.test/article/1";
        assert_eq!(
            SharePlatform::Facebook.share_url(url, "t"),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fomega.test%2Farticle%2F1"
        );
        assert!(SharePlatform::Twitter
            .share_url(url, "Global Summit")
            .ends_with("&text=Global%20Summit"));
        assert!(SharePlatform::Linkedin.share_url(url, "t").contains("mini=true"));
    }
}
