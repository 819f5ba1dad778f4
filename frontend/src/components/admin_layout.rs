use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    data_context::{use_data, DataAction},
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Html,
}

const NAV_ITEMS: [(&str, IconName, Route); 8] = [
    ("Dashboard", IconName::Layout, Route::AdminDashboard),
    ("Posts", IconName::FileText, Route::AdminPosts),
    ("Pages", IconName::FileText, Route::AdminPages),
    ("Authors", IconName::Users, Route::AdminAuthors),
    ("Categories", IconName::Folder, Route::AdminCategories),
    ("Media Library", IconName::Image, Route::AdminMedia),
    ("Comments", IconName::MessageSquare, Route::AdminComments),
    ("Settings", IconName::Settings, Route::AdminSettings),
];

/// Which nav entry owns a route, so editors highlight their list.
fn section_of(route: &Route) -> Route {
    match route {
        Route::AdminPostNew | Route::AdminPostEdit { .. } => Route::AdminPosts,
        Route::AdminPageNew | Route::AdminPageEdit { .. } | Route::AdminPagePreview { .. } => {
            Route::AdminPages
        },
        Route::AdminAuthorNew | Route::AdminAuthorEdit { .. } => Route::AdminAuthors,
        other => other.clone(),
    }
}

#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    let ctx = use_data();
    let navigator = use_navigator();
    let active = use_route::<Route>().map(|route| section_of(&route));

    let on_logout = {
        let ctx = ctx.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(ctx) = ctx.as_ref() {
                ctx.dispatch(DataAction::Logout);
            }
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::AdminLogin);
            }
        })
    };

    let site_title = ctx
        .as_ref()
        .map(|ctx| ctx.store().settings().logo_text.clone())
        .unwrap_or_default();

    html! {
        <div class="flex min-h-screen bg-[var(--bg)] text-[var(--text)]">
            <aside class="hidden md:flex w-64 shrink-0 flex-col bg-slate-900 text-slate-200">
                <div class="px-6 py-5 border-b border-slate-800">
                    <p class="text-xl font-black tracking-tight">{ site_title }</p>
                    <p class="text-xs uppercase tracking-widest text-slate-400">{ "Admin Console" }</p>
                </div>
                <nav class="flex-1 px-3 py-4 space-y-1">
                    { for NAV_ITEMS.iter().map(|(label, icon, route)| {
                        let is_active = active.as_ref() == Some(route);
                        let classes = classes!(
                            "flex",
                            "items-center",
                            "gap-3",
                            "rounded-lg",
                            "px-3",
                            "py-2",
                            "text-sm",
                            "font-medium",
                            "transition-colors",
                            if is_active {
                                "bg-[var(--primary)] text-white"
                            } else {
                                "hover:bg-slate-800 hover:text-white"
                            }
                        );
                        html! {
                            <Link<Route> to={route.clone()} classes={classes}>
                                <Icon name={*icon} size={18} />
                                { *label }
                            </Link<Route>>
                        }
                    }) }
                </nav>
                <div class="px-3 py-4 border-t border-slate-800 space-y-1">
                    <Link<Route>
                        to={Route::Home}
                        classes={classes!("flex", "items-center", "gap-3", "rounded-lg", "px-3", "py-2", "text-sm", "hover:bg-slate-800")}
                    >
                        <Icon name={IconName::ExternalLink} size={18} />
                        { "Back to Site" }
                    </Link<Route>>
                    <button
                        type="button"
                        class="flex w-full items-center gap-3 rounded-lg px-3 py-2 text-sm text-red-300 hover:bg-slate-800"
                        onclick={on_logout}
                    >
                        <Icon name={IconName::LogOut} size={18} />
                        { "Logout" }
                    </button>
                </div>
            </aside>
            <main class="flex-1 min-w-0 p-6 md:p-10">
                { props.children.clone() }
            </main>
        </div>
    }
}
