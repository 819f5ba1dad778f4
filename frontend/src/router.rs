use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        admin_guard::AdminGuard, admin_layout::AdminLayout, footer::Footer, header::Header,
        toast::ToastHost,
    },
    pages::{self, admin, info::InfoKind},
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/latest-news")]
    LatestNews,
    #[at("/trending")]
    Trending,
    #[at("/categories")]
    Categories,
    #[at("/category/:slug")]
    Category { slug: String },
    #[at("/article/:id")]
    Article { id: String },
    // Older links used `/post/:id`.
    #[at("/post/:id")]
    Post { id: String },
    #[at("/author/:name")]
    Author { name: String },
    #[at("/page/:slug")]
    Page { slug: String },
    #[at("/search")]
    Search,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/privacy-policy")]
    PrivacyPolicy,
    #[at("/terms-of-service")]
    TermsOfService,
    #[at("/newsletter-success")]
    NewsletterSuccess,

    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin")]
    AdminDashboard,
    #[at("/admin/posts")]
    AdminPosts,
    #[at("/admin/posts/new")]
    AdminPostNew,
    #[at("/admin/posts/edit/:id")]
    AdminPostEdit { id: String },
    #[at("/admin/pages")]
    AdminPages,
    #[at("/admin/pages/new")]
    AdminPageNew,
    #[at("/admin/pages/edit/:id")]
    AdminPageEdit { id: String },
    #[at("/admin/pages/preview/:id")]
    AdminPagePreview { id: String },
    #[at("/admin/categories")]
    AdminCategories,
    #[at("/admin/authors")]
    AdminAuthors,
    #[at("/admin/authors/new")]
    AdminAuthorNew,
    #[at("/admin/authors/edit/:id")]
    AdminAuthorEdit { id: String },
    #[at("/admin/media")]
    AdminMedia,
    #[at("/admin/comments")]
    AdminComments,
    #[at("/admin/settings")]
    AdminSettings,

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Author pages are keyed by display name, which may hold spaces.
    pub fn author(name: &str) -> Self {
        Route::Author {
            name: urlencoding::encode(name).into_owned(),
        }
    }

    /// Resolve a stored navigation path such as `/category/world`.
    pub fn from_path(path: &str) -> Self {
        Route::recognize(path).unwrap_or(Route::NotFound)
    }
}

/// Public pages share the site header and footer.
fn public(content: Html) -> Html {
    html! {
        <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
            <Header />
            <main class="flex-1">
                { content }
            </main>
            <Footer />
        </div>
    }
}

/// Admin pages sit behind the session check inside the console chrome.
fn guarded(content: Html) -> Html {
    html! {
        <AdminGuard>
            <AdminLayout>
                { content }
            </AdminLayout>
        </AdminGuard>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => public(html! { <pages::home::HomePage /> }),
        Route::LatestNews => public(html! { <pages::latest::LatestNewsPage /> }),
        Route::Trending => public(html! { <pages::trending::TrendingPage /> }),
        Route::Categories => public(html! { <pages::categories::CategoriesPage /> }),
        Route::Category {
            slug,
        } => public(html! { <pages::category::CategoryPage slug={slug} /> }),
        Route::Article {
            id,
        }
        | Route::Post {
            id,
        } => public(html! { <pages::article::ArticlePage id={id} /> }),
        Route::Author {
            name,
        } => public(html! { <pages::author::AuthorPage name={name} /> }),
        Route::Page {
            slug,
        } => public(html! { <pages::dynamic_page::DynamicPage slug={slug} /> }),
        Route::Search => public(html! { <pages::search::SearchPage /> }),
        Route::About => public(html! { <pages::info::InfoPage kind={InfoKind::About} /> }),
        Route::Contact => public(html! { <pages::info::InfoPage kind={InfoKind::Contact} /> }),
        Route::PrivacyPolicy => {
            public(html! { <pages::info::InfoPage kind={InfoKind::PrivacyPolicy} /> })
        },
        Route::TermsOfService => {
            public(html! { <pages::info::InfoPage kind={InfoKind::TermsOfService} /> })
        },
        Route::NewsletterSuccess => {
            public(html! { <pages::info::InfoPage kind={InfoKind::NewsletterSuccess} /> })
        },

        Route::AdminLogin => html! { <admin::login::LoginPage /> },
        Route::AdminDashboard => guarded(html! { <admin::dashboard::DashboardPage /> }),
        Route::AdminPosts => guarded(html! { <admin::posts::PostsPage /> }),
        Route::AdminPostNew => guarded(html! { <admin::post_editor::PostEditorPage /> }),
        Route::AdminPostEdit {
            id,
        } => guarded(html! { <admin::post_editor::PostEditorPage id={Some(id)} /> }),
        Route::AdminPages => guarded(html! { <admin::pages::PagesPage /> }),
        Route::AdminPageNew => guarded(html! { <admin::page_editor::PageEditorPage /> }),
        Route::AdminPageEdit {
            id,
        } => guarded(html! { <admin::page_editor::PageEditorPage id={Some(id)} /> }),
        // Previews render like the public page, drafts included.
        Route::AdminPagePreview {
            id,
        } => html! {
            <AdminGuard>
                { public(html! { <pages::dynamic_page::DynamicPage preview_id={Some(id)} /> }) }
            </AdminGuard>
        },
        Route::AdminCategories => guarded(html! { <admin::categories::CategoriesAdminPage /> }),
        Route::AdminAuthors => guarded(html! { <admin::authors::AuthorsPage /> }),
        Route::AdminAuthorNew => guarded(html! { <admin::author_editor::AuthorEditorPage /> }),
        Route::AdminAuthorEdit {
            id,
        } => guarded(html! { <admin::author_editor::AuthorEditorPage id={Some(id)} /> }),
        Route::AdminMedia => guarded(html! { <admin::media::MediaPage /> }),
        Route::AdminComments => guarded(html! { <admin::comments::CommentsPage /> }),
        Route::AdminSettings => guarded(html! { <admin::settings::SettingsPage /> }),

        Route::NotFound => public(html! { <pages::not_found::NotFoundPage /> }),
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
            <ToastHost />
        </BrowserRouter>
    }
}
