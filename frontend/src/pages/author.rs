use omega_news_shared::views;
use yew::prelude::*;

use super::{breadcrumb, empty_state, with_sidebar};
use crate::{
    components::article_card::{ArticleCard, CardVariant},
    data_context::use_data,
    seo::apply_page_meta,
};

const FALLBACK_AVATAR: &str = "https://picsum.photos/seed/default/100/100";

#[derive(Properties, PartialEq)]
pub struct AuthorPageProps {
    /// Author display name, possibly still percent-encoded.
    pub name: String,
}

#[function_component(AuthorPage)]
pub fn author_page(props: &AuthorPageProps) -> Html {
    let ctx = use_data();
    let name = urlencoding::decode(&props.name)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| props.name.clone());

    {
        let name = name.clone();
        use_effect_with(name, |name| {
            apply_page_meta(name, None);
            || ()
        });
    }

    let Some(ctx) = ctx else {
        return html! {};
    };
    let store = ctx.store();
    let profile = views::find_author_profile(store.authors(), store.articles(), &name);
    let articles = views::by_author(store.articles(), &name);

    let avatar = profile
        .as_ref()
        .map(|author| author.avatar.clone())
        .unwrap_or_else(|| FALLBACK_AVATAR.to_string());
    let role = profile.as_ref().and_then(|author| author.role.clone());
    let bio = profile
        .as_ref()
        .and_then(|author| author.bio.clone())
        .unwrap_or_else(|| "Detailed insights and analysis on global events, technology trends, and cultural shifts.".to_string());
    let social = profile.as_ref().and_then(|author| author.social.clone()).unwrap_or_default();

    let listing = if articles.is_empty() {
        empty_state("No articles found for this author.")
    } else {
        html! {
            <div class="space-y-10">
                { for articles.into_iter().map(|article| html! {
                    <ArticleCard key={article.id.clone()} article={article.clone()} variant={CardVariant::Horizontal} />
                }) }
            </div>
        }
    };

    let social_links = [
        ("Twitter", social.twitter),
        ("Facebook", social.facebook),
        ("LinkedIn", social.linkedin),
    ];

    let main = html! {
        <>
            <div class="mb-12 flex flex-col items-center gap-8 border border-[var(--border)] bg-[var(--surface-alt)] p-8 md:flex-row md:items-start">
                <img src={avatar} alt={name.clone()} class="h-32 w-32 rounded-full border-4 border-white shadow-lg" />
                <div class="text-center md:text-left">
                    <h1 class="mb-2 font-serif text-3xl font-black">{ name.clone() }</h1>
                    if let Some(role) = role {
                        <p class="mb-3 text-xs font-bold uppercase tracking-widest text-[var(--primary)]">{ role }</p>
                    }
                    <p class="mb-4 max-w-xl text-[var(--muted)]">{ bio }</p>
                    <div class="flex justify-center gap-4 text-sm md:justify-start">
                        { for social_links.into_iter().filter_map(|(label, url)| url.map(|url| html! {
                            <a href={url} target="_blank" rel="noopener noreferrer" class="font-bold hover:text-[var(--primary)]">{ label }</a>
                        })) }
                    </div>
                </div>
            </div>
            <h2 class="mb-8 border-b border-[var(--border)] pb-4 text-xl font-bold uppercase">
                { format!("Articles by {name}") }
            </h2>
            { listing }
        </>
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            { breadcrumb(&name) }
            { with_sidebar(main) }
        </div>
    }
}
