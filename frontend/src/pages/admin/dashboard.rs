use omega_news_shared::views::DashboardStats;
use yew::prelude::*;
use yew_router::prelude::*;

use super::{admin_header, panel, PRIMARY_BUTTON, SECONDARY_BUTTON, TABLE_CLASSES, TD_CLASSES, TH_CLASSES};
use crate::{
    components::icons::{Icon, IconName},
    data_context::use_data,
    router::Route,
    utils::{format_count, format_short_date},
};

#[derive(Properties, PartialEq, Clone)]
struct StatCardProps {
    title: AttrValue,
    value: usize,
    icon: IconName,
    tone: &'static str,
    #[prop_or_default]
    route: Option<Route>,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let content = html! {
        <>
            <div>
                <p class="text-sm font-medium text-[var(--muted)]">{ props.title.clone() }</p>
                <h3 class="mt-1 text-3xl font-bold">{ props.value }</h3>
            </div>
            <div class={classes!("rounded-full", "p-4", props.tone)}>
                <Icon name={props.icon} size={24} />
            </div>
        </>
    };
    let classes = classes!(
        "flex",
        "items-center",
        "justify-between",
        "rounded-xl",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "p-6",
        "shadow-sm"
    );

    if let Some(route) = &props.route {
        html! {
            <Link<Route> to={route.clone()} classes={classes!(classes, "hover:shadow-md")}>
                { content }
            </Link<Route>>
        }
    } else {
        html! { <div class={classes} role="status">{ content }</div> }
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let ctx = use_data();
    let Some(ctx) = ctx else {
        return html! {};
    };
    let store = ctx.store();
    let stats = DashboardStats::collect(
        store.articles(),
        store.pages(),
        store.comments(),
        store.categories(),
        store.media(),
    );

    let actions = html! {
        <>
            <Link<Route> to={Route::AdminMedia} classes={classes!(SECONDARY_BUTTON)}>
                <Icon name={IconName::Image} size={16} />{ "Upload Media" }
            </Link<Route>>
            <Link<Route> to={Route::AdminPageNew} classes={classes!(SECONDARY_BUTTON)}>
                <Icon name={IconName::Plus} size={16} />{ "New Page" }
            </Link<Route>>
            <Link<Route> to={Route::AdminPostNew} classes={classes!(PRIMARY_BUTTON)}>
                <Icon name={IconName::Plus} size={16} />{ "New Post" }
            </Link<Route>>
        </>
    };

    html! {
        <div>
            { admin_header("Dashboard", actions) }
            <p class="-mt-6 mb-8 text-sm text-[var(--muted)]">{ "Welcome back, here is what's happening with your site." }</p>

            <div class="mb-10 grid grid-cols-1 gap-6 sm:grid-cols-2 xl:grid-cols-5">
                <StatCard title="Total Posts" value={stats.posts} icon={IconName::FileText} tone="bg-blue-50 text-blue-600" route={Route::AdminPosts} />
                <StatCard title="Total Pages" value={stats.pages} icon={IconName::Layout} tone="bg-purple-50 text-purple-600" route={Route::AdminPages} />
                <StatCard title="Comments" value={stats.comments} icon={IconName::MessageSquare} tone="bg-green-50 text-green-600" route={Route::AdminComments} />
                <StatCard title="Categories" value={stats.categories} icon={IconName::Folder} tone="bg-orange-50 text-orange-600" route={Route::AdminCategories} />
                <StatCard title="Media Files" value={stats.media} icon={IconName::Image} tone="bg-pink-50 text-pink-600" route={Route::AdminMedia} />
            </div>

            <div class="grid grid-cols-1 gap-8 xl:grid-cols-3">
                <div class="xl:col-span-2">
                    <div class="mb-4 flex items-center justify-between">
                        <h3 class="text-lg font-bold">{ "Recent Posts" }</h3>
                        <Link<Route> to={Route::AdminPosts} classes={classes!("text-sm", "font-bold", "text-[var(--primary)]")}>{ "View All" }</Link<Route>>
                    </div>
                    { panel(html! {
                        <table class={TABLE_CLASSES}>
                            <thead class="border-b border-[var(--border)] bg-[var(--surface-alt)]">
                                <tr>
                                    <th class={TH_CLASSES}>{ "Title" }</th>
                                    <th class={TH_CLASSES}>{ "Category" }</th>
                                    <th class={TH_CLASSES}>{ "Date" }</th>
                                    <th class={TH_CLASSES}>{ "Views" }</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-[var(--border)]">
                                { for store.articles().iter().take(5).map(|article| html! {
                                    <tr key={article.id.clone()}>
                                        <td class={classes!(TD_CLASSES, "font-medium")}>{ article.title.clone() }</td>
                                        <td class={TD_CLASSES}>
                                            <span class="rounded bg-[var(--surface-alt)] px-2 py-1 text-xs">{ article.category.clone() }</span>
                                        </td>
                                        <td class={TD_CLASSES}>{ format_short_date(&article.date) }</td>
                                        <td class={TD_CLASSES}>{ format_count(article.views) }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    }) }
                </div>
                <div>
                    <h3 class="mb-4 text-lg font-bold">{ "Recent Comments" }</h3>
                    <div class="space-y-4 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6 shadow-sm">
                        { for store.comments().iter().take(4).map(|comment| html! {
                            <div key={comment.id.clone()} class="flex gap-3">
                                <img src={comment.avatar.clone()} alt={comment.author.clone()} class="h-10 w-10 rounded-full" />
                                <div class="min-w-0">
                                    <div class="text-sm">
                                        <span class="font-bold">{ comment.author.clone() }</span>
                                        <span class="ml-2 text-xs text-[var(--muted)]">{ format_short_date(&comment.date) }</span>
                                    </div>
                                    <p class="truncate text-sm text-[var(--muted)]">{ comment.content.clone() }</p>
                                </div>
                            </div>
                        }) }
                        if store.comments().is_empty() {
                            <p class="text-sm text-[var(--muted)]">{ "No recent comments." }</p>
                        }
                        <Link<Route> to={Route::AdminComments} classes={classes!("block", "pt-2", "text-center", "text-sm", "font-bold", "text-[var(--primary)]")}>
                            { "Manage Comments" }
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
