use omega_news_shared::{
    clock::Clock,
    config::Collection,
    models::{Article, Author},
    text::parse_tags,
};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{bind, Field, SelectField, DANGER_BUTTON, PRIMARY_BUTTON, SECONDARY_BUTTON};
use crate::{
    components::icons::{Icon, IconName},
    config::DEFAULT_POST_IMAGE,
    data_context::{use_data, DataAction},
    router::Route,
    utils::confirm,
};

const DEFAULT_CATEGORY: &str = "World";

/// Form state of the post editor. Tags stay a comma-separated string until
/// save.
#[derive(Debug, Clone, PartialEq)]
struct PostDraft {
    title: String,
    excerpt: String,
    content: String,
    category: String,
    author_id: String,
    date: String,
    image_url: String,
    tags: String,
    views: u64,
    /// Snapshot stored on the article being edited.
    author: Option<Author>,
}

fn placeholder_author() -> Author {
    Author {
        id: "admin".to_string(),
        name: "Admin".to_string(),
        avatar: String::new(),
        bio: None,
        role: None,
        email: None,
        social: None,
    }
}

impl PostDraft {
    fn blank(today: String, authors: &[Author]) -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            author_id: authors.first().map(|author| author.id.clone()).unwrap_or_default(),
            date: today,
            image_url: DEFAULT_POST_IMAGE.to_string(),
            tags: String::new(),
            views: 0,
            author: None,
        }
    }

    fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            content: article.content.clone(),
            category: article.category.clone(),
            author_id: article.author.id.clone(),
            date: article.date.clone(),
            image_url: article.image_url.clone(),
            tags: article.tags.join(", "),
            views: article.views,
            author: Some(article.author.clone()),
        }
    }

    /// An unchanged author keeps the stored snapshot; a newly picked one is
    /// copied from the registry.
    fn resolve_author(&self, authors: &[Author]) -> Author {
        if let Some(snapshot) = self.author.as_ref().filter(|a| a.id == self.author_id) {
            return snapshot.clone();
        }
        authors
            .iter()
            .find(|author| author.id == self.author_id)
            .or_else(|| authors.first())
            .cloned()
            .or_else(|| self.author.clone())
            .unwrap_or_else(placeholder_author)
    }

    fn into_article(self, id: String, authors: &[Author]) -> Article {
        let author = self.resolve_author(authors);
        Article {
            id,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            category: self.category,
            author,
            date: self.date,
            image_url: self.image_url,
            tags: parse_tags(&self.tags),
            views: self.views,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PostEditorProps {
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(PostEditorPage)]
pub fn post_editor_page(props: &PostEditorProps) -> Html {
    let ctx = use_data();
    let navigator = use_navigator();
    let draft = {
        let ctx = ctx.clone();
        let id = props.id.clone();
        use_state(move || {
            let Some(ctx) = ctx.as_ref() else {
                return PostDraft::blank(String::new(), &[]);
            };
            match id.as_deref().and_then(|id| ctx.store().article(id)) {
                Some(article) => PostDraft::from_article(article),
                None => PostDraft::blank(ctx.clock().today(), ctx.store().authors()),
            }
        })
    };

    {
        let ctx = ctx.clone();
        let navigator = navigator.clone();
        let draft = draft.clone();
        use_effect_with(props.id.clone(), move |id| {
            if let (Some(ctx), Some(id)) = (ctx.as_ref(), id.as_deref()) {
                match ctx.store().article(id) {
                    Some(article) => draft.set(PostDraft::from_article(article)),
                    None => {
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.replace(&Route::AdminPosts);
                        }
                    },
                }
            }
            || ()
        });
    }

    let Some(ctx) = ctx else {
        return html! {};
    };
    let is_edit = props.id.is_some();

    let back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::AdminPosts);
            }
        })
    };

    let on_submit = {
        let ctx = ctx.clone();
        let navigator = navigator.clone();
        let draft = draft.clone();
        let id = props.id.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let authors = ctx.store().authors();
            match id.clone() {
                Some(id) => {
                    let article = (*draft).clone().into_article(id, authors);
                    ctx.dispatch(DataAction::UpdateArticle(article));
                },
                None => {
                    let id = ctx.new_id(Collection::Articles);
                    let article = (*draft).clone().into_article(id, authors);
                    ctx.dispatch(DataAction::AddArticle(article));
                },
            }
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::AdminPosts);
            }
        })
    };

    let on_delete = {
        let ctx = ctx.clone();
        let navigator = navigator.clone();
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            if !confirm("Are you sure you want to delete this post?") {
                return;
            }
            if let Some(id) = id.clone() {
                ctx.dispatch(DataAction::DeleteArticle(id));
            }
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::AdminPosts);
            }
        })
    };

    let store = ctx.store();
    let mut category_options: Vec<(String, String)> = store
        .categories()
        .iter()
        .map(|category| (category.name.clone(), category.name.clone()))
        .collect();
    if !category_options.iter().any(|(name, _)| *name == draft.category) {
        category_options.insert(0, (draft.category.clone(), draft.category.clone()));
    }
    let author_options: Vec<(String, String)> = store
        .authors()
        .iter()
        .map(|author| (author.id.clone(), author.name.clone()))
        .collect();

    html! {
        <form onsubmit={on_submit}>
            <div class="mb-8 flex flex-wrap items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    <button type="button" class="rounded-full p-2 hover:bg-[var(--surface-alt)]" aria-label="Back to posts" onclick={back}>
                        <Icon name={IconName::ChevronLeft} size={24} />
                    </button>
                    <h1 class="text-2xl font-bold">{ if is_edit { "Edit Post" } else { "New Post" } }</h1>
                </div>
                <div class="flex gap-3">
                    if is_edit {
                        <button type="button" class={DANGER_BUTTON} onclick={on_delete}>
                            <Icon name={IconName::Trash} size={16} />{ "Delete" }
                        </button>
                    }
                    <button type="submit" class={PRIMARY_BUTTON}>
                        <Icon name={IconName::Check} size={16} />{ "Save Post" }
                    </button>
                </div>
            </div>

            <div class="grid grid-cols-1 gap-8 lg:grid-cols-3">
                <div class="space-y-6 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6 lg:col-span-2">
                    <Field label="Title" value={draft.title.clone()} placeholder="Enter post title" required=true
                        on_change={bind(&draft, |d, v| d.title = v)} />
                    <Field label="Content (HTML or Markdown)" value={draft.content.clone()} rows={Some(14)}
                        placeholder="<p>Write your article content here...</p>"
                        on_change={bind(&draft, |d, v| d.content = v)} />
                    <Field label="Excerpt" value={draft.excerpt.clone()} rows={Some(3)} placeholder="Short summary for cards..."
                        on_change={bind(&draft, |d, v| d.excerpt = v)} />
                </div>
                <div class="space-y-6 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6">
                    <SelectField label="Author" value={draft.author_id.clone()} options={author_options}
                        on_change={bind(&draft, |d, v| d.author_id = v)} />
                    <SelectField label="Category" value={draft.category.clone()} options={category_options}
                        on_change={bind(&draft, |d, v| d.category = v)} />
                    <Field label="Publish Date" kind="date" value={draft.date.clone()}
                        on_change={bind(&draft, |d, v| d.date = v)} />
                    <div>
                        <Field label="Featured Image URL" value={draft.image_url.clone()}
                            on_change={bind(&draft, |d, v| d.image_url = v)} />
                        if !draft.image_url.trim().is_empty() {
                            <img src={draft.image_url.clone()} alt="Preview" class="mt-3 h-32 w-full rounded object-cover" />
                        }
                    </div>
                    <Field label="Tags (comma separated)" value={draft.tags.clone()} placeholder="News, Tech, World"
                        on_change={bind(&draft, |d, v| d.tags = v)} />
                    <button type="button" class={SECONDARY_BUTTON} onclick={Callback::from(move |_: MouseEvent| {
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.push(&Route::AdminPosts);
                        }
                    })}>
                        { "Cancel" }
                    </button>
                </div>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use omega_news_shared::seed;

    use super::*;

    #[test]
    fn blank_draft_uses_defaults() {
        let authors = seed::authors();
        let draft = PostDraft::blank("2024-03-01".to_string(), &authors);
        assert_eq!(draft.category, "World");
        assert_eq!(draft.image_url, DEFAULT_POST_IMAGE);
        assert_eq!(draft.author_id, authors[0].id);
        assert_eq!(draft.views, 0);
    }

    #[test]
    fn saving_splits_tags_and_picks_author() {
        let authors = seed::authors();
        let mut draft = PostDraft::blank("2024-03-01".to_string(), &authors);
        draft.title = "Launch".to_string();
        draft.tags = "Space, , Tech ,".to_string();
        draft.author_id = authors[1].id.clone();
        let article = draft.into_article("99".to_string(), &authors);
        assert_eq!(article.id, "99");
        assert_eq!(article.tags, vec!["Space".to_string(), "Tech".to_string()]);
        assert_eq!(article.author, authors[1]);
    }

    #[test]
    fn unchanged_author_keeps_the_snapshot() {
        let mut article = seed::articles()[0].clone();
        article.author.bio = Some("written at publish time".to_string());
        let authors = seed::authors();
        let saved = PostDraft::from_article(&article).into_article(article.id.clone(), &authors);
        assert_eq!(saved.author, article.author);
        assert_eq!(saved.views, article.views);
    }

    #[test]
    fn no_authors_falls_back_to_admin() {
        let draft = PostDraft::blank("2024-03-01".to_string(), &[]);
        let article = draft.into_article("1".to_string(), &[]);
        assert_eq!(article.author.name, "Admin");
    }
}
