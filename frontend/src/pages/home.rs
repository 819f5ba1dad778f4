use omega_news_shared::models::Article;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        article_card::{ArticleCard, CardVariant},
        sidebar::{SectionTitle, Sidebar},
    },
    data_context::use_data,
    router::Route,
    seo::apply_page_meta,
};

/// Section slices of the front page, taken in storage order.
#[derive(Debug, Default, PartialEq)]
struct FrontPage {
    hero: Option<Article>,
    hero_side: Vec<Article>,
    editors_pick: Vec<Article>,
    tech: Vec<Article>,
    dont_miss: Vec<Article>,
}

fn span(articles: &[Article], start: usize, end: usize) -> Vec<Article> {
    let end = end.min(articles.len());
    articles.get(start.min(end)..end).map(<[Article]>::to_vec).unwrap_or_default()
}

impl FrontPage {
    fn build(articles: &[Article]) -> Self {
        Self {
            hero: articles.first().cloned(),
            hero_side: span(articles, 1, 3),
            editors_pick: span(articles, 3, 7),
            tech: articles
                .iter()
                .filter(|article| article.category == "Tech" || article.category == "Science")
                .take(4)
                .cloned()
                .collect(),
            dont_miss: span(articles, 7, 10),
        }
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let ctx = use_data();

    use_effect_with((), |_| {
        apply_page_meta("", Some("Breaking news, analysis and opinion from around the globe."));
        || ()
    });

    let Some(ctx) = ctx else {
        return html! {};
    };
    let front = FrontPage::build(ctx.store().articles());

    html! {
        <div class="container mx-auto px-4 py-6">
            if let Some(hero) = front.hero.clone() {
                <div class="mb-12 grid grid-cols-1 gap-1 md:grid-cols-12">
                    <div class="md:col-span-8">
                        <ArticleCard article={hero} variant={CardVariant::HeroLarge} />
                    </div>
                    <div class="flex flex-col gap-1 md:col-span-4">
                        { for front.hero_side.iter().map(|article| html! {
                            <ArticleCard key={article.id.clone()} article={article.clone()} variant={CardVariant::HeroSmall} />
                        }) }
                    </div>
                </div>
            }

            <div class="grid grid-cols-1 gap-8 lg:grid-cols-12">
                <div class="lg:col-span-8">
                    <section class="mb-12">
                        <SectionTitle title="Editor's Pick" />
                        <div class="grid grid-cols-1 gap-8 md:grid-cols-2">
                            { for front.editors_pick.iter().map(|article| html! {
                                <ArticleCard key={article.id.clone()} article={article.clone()} />
                            }) }
                        </div>
                    </section>

                    <section class="mb-12">
                        <SectionTitle title="Tech & Science" link={Route::Category { slug: "tech".to_string() }} />
                        <div class="grid grid-cols-1 gap-8">
                            { for front.tech.iter().map(|article| html! {
                                <ArticleCard key={article.id.clone()} article={article.clone()} variant={CardVariant::Horizontal} />
                            }) }
                        </div>
                    </section>

                    <section class="-mx-4 mb-12 bg-slate-900 p-8 text-white md:mx-0 md:rounded-lg">
                        <h2 class="mb-6 border-l-4 border-[var(--primary)] pl-4 font-serif text-2xl font-bold">{ "Don't Miss" }</h2>
                        <div class="grid grid-cols-1 gap-6 md:grid-cols-3">
                            { for front.dont_miss.iter().map(|article| html! {
                                <div key={article.id.clone()} class="group">
                                    <div class="mb-3 aspect-video overflow-hidden">
                                        <img src={article.image_url.clone()} alt={article.title.clone()} loading="lazy" class="h-full w-full object-cover opacity-80 group-hover:opacity-100" />
                                    </div>
                                    <span class="mb-1 block text-xs font-bold uppercase text-[var(--primary)]">{ article.category.clone() }</span>
                                    <h3 class="font-serif font-bold leading-snug group-hover:text-[var(--primary)]">
                                        <Link<Route> to={Route::Article { id: article.id.clone() }}>{ article.title.clone() }</Link<Route>>
                                    </h3>
                                </div>
                            }) }
                        </div>
                    </section>
                </div>
                <div class="lg:col-span-4">
                    <Sidebar />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use omega_news_shared::seed;

    use super::*;

    #[test]
    fn seed_front_page_fills_every_section() {
        let articles = seed::articles();
        let front = FrontPage::build(&articles);
        assert_eq!(front.hero.as_ref().map(|a| a.id.as_str()), Some(articles[0].id.as_str()));
        assert_eq!(front.hero_side.len(), 2);
        assert_eq!(front.editors_pick.len(), 4);
        assert!(front.tech.len() <= 4);
        assert!(front.tech.iter().all(|a| a.category == "Tech" || a.category == "Science"));
        assert_eq!(front.dont_miss.len(), 3);
    }

    #[test]
    fn short_lists_leave_sections_empty() {
        let front = FrontPage::build(&seed::articles()[..2]);
        assert!(front.hero.is_some());
        assert_eq!(front.hero_side.len(), 1);
        assert!(front.editors_pick.is_empty());
        assert!(front.dont_miss.is_empty());
        assert_eq!(FrontPage::build(&[]), FrontPage::default());
    }
}
