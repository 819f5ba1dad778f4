use omega_news_shared::views;
use yew::prelude::*;

use super::{breadcrumb, empty_state, page_intro, with_sidebar};
use crate::{
    components::{article_card::ArticleCard, pagination::Pagination},
    config::LIST_PAGE_SIZE,
    data_context::use_data,
    hooks::use_pagination,
    seo::apply_page_meta,
};

#[derive(Properties, PartialEq)]
pub struct CategoryPageProps {
    pub slug: String,
}

/// Display name for a slug with no registered category: `"tech"` -> `"Tech"`.
fn title_from_slug(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    let ctx = use_data();
    let name = ctx
        .as_ref()
        .and_then(|ctx| views::category_by_slug(ctx.store().categories(), &props.slug))
        .map(|category| category.name.clone())
        .unwrap_or_else(|| title_from_slug(&props.slug));
    let articles = ctx
        .as_ref()
        .map(|ctx| views::by_category(ctx.store().articles(), &name))
        .unwrap_or_default();
    let total = articles.len();
    let (visible, current_page, total_pages, go_to_page) = use_pagination(articles, LIST_PAGE_SIZE);

    {
        let name = name.clone();
        use_effect_with(name, |name| {
            apply_page_meta(name, None);
            || ()
        });
    }

    let listing = if visible.is_empty() {
        empty_state("No articles in this category yet.")
    } else {
        html! {
            <>
                <div class="mb-10 grid grid-cols-1 gap-8 md:grid-cols-2">
                    { for visible.into_iter().map(|article| html! {
                        <ArticleCard key={article.id.clone()} article={article.clone()} />
                    }) }
                </div>
                <Pagination
                    current_page={current_page}
                    total_pages={total_pages}
                    on_page_change={go_to_page}
                    summary={Some((LIST_PAGE_SIZE, total))}
                />
            </>
        }
    };

    let intro = format!(
        "The latest news, updates, and in-depth reports from the world of {name}. Stay informed with our comprehensive coverage."
    );

    html! {
        <div class="container mx-auto px-4 py-8">
            { breadcrumb(&name) }
            { page_intro(&name, &intro) }
            { with_sidebar(listing) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::title_from_slug;

    #[test]
    fn unknown_slugs_are_capitalized() {
        assert_eq!(title_from_slug("tech"), "Tech");
        assert_eq!(title_from_slug(""), "");
    }
}
