use omega_news_shared::{
    clock::Clock,
    config::Collection,
    models::{Page, PageStatus, ToastKind},
    text::slug_or_derive,
};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{Field, DANGER_BUTTON, PRIMARY_BUTTON, SECONDARY_BUTTON};
use crate::{
    components::icons::{Icon, IconName},
    data_context::{notify, use_data, DataAction},
    router::Route,
    utils::confirm,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct PageDraft {
    title: String,
    slug: String,
    content: String,
    meta_title: String,
    meta_description: String,
    hero_image: String,
    status: Option<PageStatus>,
    /// Edited since the last load or save.
    dirty: bool,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl PageDraft {
    fn from_page(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            slug: page.slug.clone(),
            content: page.content.clone(),
            meta_title: page.meta_title.clone().unwrap_or_default(),
            meta_description: page.meta_description.clone().unwrap_or_default(),
            hero_image: page.hero_image.clone().unwrap_or_default(),
            status: Some(page.status),
            dirty: false,
        }
    }

    fn into_page(self, id: String, status: PageStatus, last_updated: String) -> Page {
        Page {
            id,
            slug: slug_or_derive(&self.slug, &self.title),
            title: self.title,
            content: self.content,
            status,
            meta_title: optional(&self.meta_title),
            meta_description: optional(&self.meta_description),
            hero_image: optional(&self.hero_image),
            last_updated,
        }
    }
}

/// Field edits go through here so the unsaved marker follows them.
fn edit(draft: &UseStateHandle<PageDraft>, apply: fn(&mut PageDraft, String)) -> Callback<String> {
    let draft = draft.clone();
    Callback::from(move |value: String| {
        let mut next = (*draft).clone();
        apply(&mut next, value);
        next.dirty = true;
        draft.set(next);
    })
}

#[derive(Properties, PartialEq)]
pub struct PageEditorProps {
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(PageEditorPage)]
pub fn page_editor_page(props: &PageEditorProps) -> Html {
    let ctx = use_data();
    let navigator = use_navigator();
    let draft = use_state(PageDraft::default);

    {
        let ctx = ctx.clone();
        let navigator = navigator.clone();
        let draft = draft.clone();
        use_effect_with(props.id.clone(), move |id| {
            match (ctx.as_ref(), id.as_deref()) {
                (Some(ctx), Some(id)) => match ctx.store().page(id) {
                    Some(page) => draft.set(PageDraft::from_page(page)),
                    None => {
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.replace(&Route::AdminPages);
                        }
                    },
                },
                _ => draft.set(PageDraft::default()),
            }
            || ()
        });
    }

    let Some(ctx) = ctx else {
        return html! {};
    };

    let save = {
        let ctx = ctx.clone();
        let navigator = navigator.clone();
        let draft = draft.clone();
        let id = props.id.clone();
        move |status: PageStatus| {
            let ctx = ctx.clone();
            let navigator = navigator.clone();
            let draft = draft.clone();
            let id = id.clone();
            Callback::from(move |_: MouseEvent| {
                if draft.title.trim().is_empty() {
                    notify(&ctx, "Page title is required", ToastKind::Error);
                    return;
                }
                let now = ctx.clock().now_rfc3339();
                match id.clone() {
                    Some(id) => {
                        let page = (*draft).clone().into_page(id, status, now);
                        draft.set(PageDraft::from_page(&page));
                        ctx.dispatch(DataAction::UpdatePage(page));
                    },
                    None => {
                        let new_id = ctx.new_id(Collection::Pages);
                        let page = (*draft).clone().into_page(new_id.clone(), status, now);
                        ctx.dispatch(DataAction::AddPage(page));
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.replace(&Route::AdminPageEdit { id: new_id });
                        }
                    },
                }
            })
        }
    };

    let on_delete = {
        let ctx = ctx.clone();
        let navigator = navigator.clone();
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(id) = id.clone() else {
                return;
            };
            if confirm("Are you sure you want to delete this page?") {
                ctx.dispatch(DataAction::DeletePage(id));
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::AdminPages);
                }
            }
        })
    };

    let on_back = {
        let navigator = navigator.clone();
        let dirty = draft.dirty;
        Callback::from(move |_: MouseEvent| {
            if dirty && !confirm("You have unsaved changes. Leave anyway?") {
                return;
            }
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::AdminPages);
            }
        })
    };

    let status_label = match draft.status {
        Some(PageStatus::Published) => "Published",
        Some(PageStatus::Draft) => "Draft",
        None => "New",
    };

    html! {
        <div>
            <div class="mb-8 flex flex-wrap items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    <button type="button" class="rounded-full p-2 hover:bg-[var(--surface-alt)]" aria-label="Back to pages" onclick={on_back}>
                        <Icon name={IconName::ChevronLeft} size={24} />
                    </button>
                    <div>
                        <h1 class="text-2xl font-bold">{ if props.id.is_some() { "Edit Page" } else { "Create Page" } }</h1>
                        <p class="text-xs text-[var(--muted)]">
                            { status_label }
                            if draft.dirty {
                                <span class="ml-2 font-bold text-yellow-600">{ "Unsaved changes" }</span>
                            }
                        </p>
                    </div>
                </div>
                <div class="flex flex-wrap gap-3">
                    if let Some(id) = props.id.clone() {
                        <Link<Route> to={Route::AdminPagePreview { id }} classes={classes!(SECONDARY_BUTTON)}>
                            <Icon name={IconName::Eye} size={16} />{ "Preview" }
                        </Link<Route>>
                        <button type="button" class={DANGER_BUTTON} onclick={on_delete}>
                            <Icon name={IconName::Trash} size={16} />{ "Delete" }
                        </button>
                    }
                    <button type="button" class={SECONDARY_BUTTON} onclick={save(PageStatus::Draft)}>
                        { "Save Draft" }
                    </button>
                    <button type="button" class={PRIMARY_BUTTON} onclick={save(PageStatus::Published)}>
                        <Icon name={IconName::Check} size={16} />{ "Publish" }
                    </button>
                </div>
            </div>

            <div class="grid grid-cols-1 gap-8 lg:grid-cols-3">
                <div class="space-y-6 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6 lg:col-span-2">
                    <Field label="Page Title" value={draft.title.clone()} placeholder="About Us" required=true
                        on_change={edit(&draft, |d, v| d.title = v)} />
                    <Field label="Content (HTML or Markdown)" value={draft.content.clone()} rows={Some(16)}
                        on_change={edit(&draft, |d, v| d.content = v)} />
                </div>
                <div class="space-y-6 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6">
                    <Field label="Slug" value={draft.slug.clone()} placeholder="derived from the title"
                        on_change={edit(&draft, |d, v| d.slug = v)} />
                    <Field label="Meta Title" value={draft.meta_title.clone()}
                        on_change={edit(&draft, |d, v| d.meta_title = v)} />
                    <Field label="Meta Description" value={draft.meta_description.clone()} rows={Some(3)}
                        on_change={edit(&draft, |d, v| d.meta_description = v)} />
                    <Field label="Hero Image URL" value={draft.hero_image.clone()}
                        on_change={edit(&draft, |d, v| d.hero_image = v)} />
                    if !draft.hero_image.trim().is_empty() {
                        <img src={draft.hero_image.clone()} alt="Hero preview" class="h-32 w-full rounded object-cover" />
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_become_none_and_slug_is_derived() {
        let draft = PageDraft {
            title: "About Our Team".to_string(),
            meta_title: "  ".to_string(),
            hero_image: "https://picsum.photos/1200/400".to_string(),
            dirty: true,
            ..PageDraft::default()
        };
        let page = draft.into_page("7".to_string(), PageStatus::Draft, "2024-03-01T10:00:00Z".to_string());
        assert_eq!(page.slug, "about-our-team");
        assert_eq!(page.meta_title, None);
        assert_eq!(page.hero_image.as_deref(), Some("https://picsum.photos/1200/400"));
        assert_eq!(page.status, PageStatus::Draft);
    }

    #[test]
    fn loading_a_page_clears_the_dirty_marker() {
        let page = PageDraft {
            title: "Imprint".to_string(),
            slug: "imprint".to_string(),
            ..PageDraft::default()
        }
        .into_page("1".to_string(), PageStatus::Published, "2024-03-01T10:00:00Z".to_string());
        let draft = PageDraft::from_page(&page);
        assert!(!draft.dirty);
        assert_eq!(draft.status, Some(PageStatus::Published));
        assert_eq!(draft.slug, "imprint");
    }
}
