use omega_news_shared::models::Article;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{router::Route, utils::format_short_date};

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    HeroLarge,
    HeroSmall,
    Horizontal,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: Article,
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or(true)]
    pub show_excerpt: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryBadgeProps {
    pub category: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Red pill linking to the category listing.
#[function_component(CategoryBadge)]
pub fn category_badge(props: &CategoryBadgeProps) -> Html {
    let route = Route::Category {
        slug: props.category.to_lowercase(),
    };
    html! {
        <Link<Route>
            to={route}
            classes={classes!(
                "relative",
                "z-20",
                "inline-block",
                "bg-[var(--primary)]",
                "px-2",
                "py-1",
                "text-[10px]",
                "font-bold",
                "uppercase",
                "tracking-wider",
                "text-white",
                "transition-colors",
                "hover:bg-red-800",
                props.class.clone()
            )}
        >
            { props.category.clone() }
        </Link<Route>>
    }
}

fn author_link(article: &Article, class: &'static str) -> Html {
    html! {
        <Link<Route> to={Route::author(&article.author.name)} classes={classes!(class, "hover:text-[var(--primary)]", "transition-colors")}>
            { article.author.name.clone() }
        </Link<Route>>
    }
}

fn title_link(article: &Article) -> Html {
    html! {
        <Link<Route> to={Route::Article { id: article.id.clone() }}>
            { article.title.clone() }
        </Link<Route>>
    }
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let date = format_short_date(&article.date);
    let image = html! {
        <img
            src={article.image_url.clone()}
            alt={article.title.clone()}
            loading="lazy"
            class="h-full w-full object-cover transition-transform duration-700 group-hover:scale-105"
        />
    };

    match props.variant {
        CardVariant::HeroLarge => html! {
            <div class={classes!("group", "relative", "h-[400px]", "md:h-[500px]", "overflow-hidden", props.class.clone())}>
                { image }
                <div class="absolute inset-0 bg-gradient-to-t from-black/90 via-black/40 to-transparent"></div>
                <div class="absolute bottom-0 left-0 w-full p-6 md:w-3/4 md:p-8">
                    <CategoryBadge category={article.category.clone()} class={classes!("mb-3")} />
                    <h2 class="font-serif text-2xl font-bold leading-tight text-white md:text-4xl group-hover:underline">
                        { title_link(article) }
                    </h2>
                    <div class="mt-3 flex items-center gap-3 text-xs text-gray-300">
                        { author_link(article, "") }
                        <span>{ date }</span>
                    </div>
                </div>
            </div>
        },
        CardVariant::HeroSmall => html! {
            <div class={classes!("group", "relative", "h-[200px]", "md:h-[246px]", "overflow-hidden", props.class.clone())}>
                { image }
                <div class="absolute inset-0 bg-gradient-to-t from-black/90 via-black/20 to-transparent"></div>
                <div class="absolute bottom-0 left-0 p-4">
                    <CategoryBadge category={article.category.clone()} class={classes!("mb-2")} />
                    <h3 class="font-serif text-lg font-bold leading-snug text-white line-clamp-2 group-hover:text-[var(--primary)]">
                        { title_link(article) }
                    </h3>
                </div>
            </div>
        },
        CardVariant::Horizontal => html! {
            <div class={classes!("group", "flex", "items-start", "gap-5", props.class.clone())}>
                <div class="relative aspect-video w-1/3 shrink-0 overflow-hidden md:w-[240px]">
                    { image }
                    <div class="absolute left-2 top-2">
                        <CategoryBadge category={article.category.clone()} />
                    </div>
                </div>
                <div class="flex-1">
                    <h3 class="mb-2 font-serif text-lg font-bold leading-snug md:text-xl group-hover:text-[var(--primary)]">
                        { title_link(article) }
                    </h3>
                    <div class="mb-3 flex items-center gap-3 text-xs text-[var(--muted)]">
                        { author_link(article, "font-bold uppercase text-[var(--text)]") }
                        <span>{ date }</span>
                    </div>
                    <p class="text-sm leading-relaxed text-[var(--muted)] line-clamp-3">
                        { article.excerpt.clone() }
                    </p>
                </div>
            </div>
        },
        CardVariant::Default => html! {
            <div class={classes!("group", "flex", "h-full", "flex-col", props.class.clone())}>
                <div class="relative mb-4 aspect-video overflow-hidden">
                    { image }
                    <div class="absolute bottom-2 left-2">
                        <CategoryBadge category={article.category.clone()} />
                    </div>
                </div>
                <h3 class="mb-2 font-serif text-xl font-bold leading-snug group-hover:text-[var(--primary)]">
                    { title_link(article) }
                </h3>
                <div class="mb-3 flex items-center gap-3 text-xs text-[var(--muted)]">
                    { author_link(article, "font-bold text-[var(--text)]") }
                    <span>{ date }</span>
                </div>
                if props.show_excerpt {
                    <p class="mb-4 flex-grow text-sm leading-relaxed text-[var(--muted)] line-clamp-3">
                        { article.excerpt.clone() }
                    </p>
                }
            </div>
        },
    }
}
