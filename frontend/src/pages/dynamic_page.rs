use omega_news_shared::{models::Page, views};
use yew::prelude::*;

use super::not_found::NotFoundPage;
use crate::{components::raw_html::RichContent, data_context::use_data, seo::apply_page_meta, utils::format_short_date};

#[derive(Properties, PartialEq)]
pub struct DynamicPageProps {
    /// Public lookup; drafts are hidden.
    #[prop_or_default]
    pub slug: String,
    /// Admin preview by id; drafts are shown.
    #[prop_or_default]
    pub preview_id: Option<String>,
}

fn resolve(pages: &[Page], props: &DynamicPageProps) -> Option<Page> {
    match props.preview_id.as_deref() {
        Some(id) => views::page_for_preview(pages, id).cloned(),
        None => views::published_page_by_slug(pages, &props.slug).cloned(),
    }
}

#[function_component(DynamicPage)]
pub fn dynamic_page(props: &DynamicPageProps) -> Html {
    let ctx = use_data();
    let page = ctx.as_ref().and_then(|ctx| resolve(ctx.store().pages(), props));

    {
        let meta = page
            .as_ref()
            .map(|page| (page.head_title().to_string(), page.meta_description.clone()));
        use_effect_with(meta, |meta| {
            if let Some((title, description)) = meta {
                apply_page_meta(title, description.as_deref());
            }
            || ()
        });
    }

    let Some(page) = page else {
        return html! { <NotFoundPage /> };
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <div class="mx-auto max-w-4xl">
                if props.preview_id.is_some() {
                    <div class="mb-6 flex items-center justify-between rounded bg-amber-100 px-4 py-3 text-sm font-bold text-amber-800">
                        <span>{ "Preview Mode" }</span>
                        <span class="uppercase">{ page.status.as_str() }</span>
                    </div>
                }
                if let Some(hero) = page.hero_image.clone().filter(|url| !url.trim().is_empty()) {
                    <img src={hero} alt={page.title.clone()} class="mb-8 h-[400px] w-full rounded-lg object-cover" />
                }
                <h1 class="mb-8 font-serif text-4xl font-black md:text-5xl">{ page.title.clone() }</h1>
                <RichContent content={page.content.clone()} class={classes!("prose-lg")} />
                <div class="mt-12 border-t border-[var(--border)] pt-6 text-sm text-[var(--muted)]">
                    { format!("Last updated: {}", format_short_date(&page.last_updated)) }
                </div>
            </div>
        </div>
    }
}
