use omega_news_shared::{
    config::Collection,
    models::{Author, AuthorSocial},
};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{bind, Field, PRIMARY_BUTTON, SECONDARY_BUTTON};
use crate::{
    components::icons::{Icon, IconName},
    data_context::{use_data, DataAction},
    router::Route,
};

const DEFAULT_AVATAR: &str = "https://picsum.photos/200";
const DEFAULT_ROLE: &str = "Contributor";

#[derive(Debug, Clone, PartialEq)]
struct AuthorDraft {
    name: String,
    email: String,
    role: String,
    bio: String,
    avatar: String,
    twitter: String,
    facebook: String,
    linkedin: String,
}

impl Default for AuthorDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: DEFAULT_ROLE.to_string(),
            bio: String::new(),
            avatar: DEFAULT_AVATAR.to_string(),
            twitter: String::new(),
            facebook: String::new(),
            linkedin: String::new(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl AuthorDraft {
    fn from_author(author: &Author) -> Self {
        let social = author.social.clone().unwrap_or_default();
        Self {
            name: author.name.clone(),
            email: author.email.clone().unwrap_or_default(),
            role: author.role.clone().unwrap_or_default(),
            bio: author.bio.clone().unwrap_or_default(),
            avatar: author.avatar.clone(),
            twitter: social.twitter.unwrap_or_default(),
            facebook: social.facebook.unwrap_or_default(),
            linkedin: social.linkedin.unwrap_or_default(),
        }
    }

    fn into_author(self, id: String) -> Author {
        let social = AuthorSocial {
            twitter: optional(&self.twitter),
            facebook: optional(&self.facebook),
            linkedin: optional(&self.linkedin),
        };
        Author {
            id,
            name: self.name.trim().to_string(),
            avatar: optional(&self.avatar).unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            bio: optional(&self.bio),
            role: optional(&self.role),
            email: optional(&self.email),
            social: (!social.is_empty()).then_some(social),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthorEditorProps {
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(AuthorEditorPage)]
pub fn author_editor_page(props: &AuthorEditorProps) -> Html {
    let ctx = use_data();
    let navigator = use_navigator();
    let draft = use_state(AuthorDraft::default);

    {
        let ctx = ctx.clone();
        let navigator = navigator.clone();
        let draft = draft.clone();
        use_effect_with(props.id.clone(), move |id| {
            match (ctx.as_ref(), id.as_deref()) {
                (Some(ctx), Some(id)) => match ctx.store().author(id) {
                    Some(author) => draft.set(AuthorDraft::from_author(author)),
                    None => {
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.replace(&Route::AdminAuthors);
                        }
                    },
                },
                _ => draft.set(AuthorDraft::default()),
            }
            || ()
        });
    }

    let Some(ctx) = ctx else {
        return html! {};
    };

    let to_list = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::AdminAuthors);
            }
        })
    };

    let on_submit = {
        let id = props.id.clone();
        let draft = draft.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if draft.name.trim().is_empty() {
                return;
            }
            match id.clone() {
                Some(id) => ctx.dispatch(DataAction::UpdateAuthor((*draft).clone().into_author(id))),
                None => {
                    let id = ctx.new_id(Collection::Authors);
                    ctx.dispatch(DataAction::AddAuthor((*draft).clone().into_author(id)));
                },
            }
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::AdminAuthors);
            }
        })
    };

    html! {
        <form onsubmit={on_submit} class="max-w-3xl">
            <div class="mb-8 flex items-center gap-3">
                <button type="button" class="rounded-full p-2 hover:bg-[var(--surface-alt)]" aria-label="Back to authors" onclick={to_list.clone()}>
                    <Icon name={IconName::ChevronLeft} size={24} />
                </button>
                <h1 class="text-2xl font-bold">{ if props.id.is_some() { "Edit Author" } else { "New Author" } }</h1>
            </div>

            <div class="space-y-6 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6">
                <div class="flex items-center gap-6">
                    <img src={draft.avatar.clone()} alt="Avatar preview" class="h-20 w-20 rounded-full object-cover" />
                    <Field label="Avatar URL" value={draft.avatar.clone()} class={classes!("flex-1")}
                        on_change={bind(&draft, |d, v| d.avatar = v)} />
                </div>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                    <Field label="Full Name" value={draft.name.clone()} required=true
                        on_change={bind(&draft, |d, v| d.name = v)} />
                    <Field label="Email" kind="email" value={draft.email.clone()}
                        on_change={bind(&draft, |d, v| d.email = v)} />
                    <Field label="Role" value={draft.role.clone()} placeholder="e.g. Senior Editor"
                        on_change={bind(&draft, |d, v| d.role = v)} />
                </div>
                <Field label="Biography" value={draft.bio.clone()} rows={Some(4)}
                    on_change={bind(&draft, |d, v| d.bio = v)} />
                <div class="grid grid-cols-1 gap-6 md:grid-cols-3">
                    <Field label="Twitter" value={draft.twitter.clone()} placeholder="https://twitter.com/..."
                        on_change={bind(&draft, |d, v| d.twitter = v)} />
                    <Field label="Facebook" value={draft.facebook.clone()} placeholder="https://facebook.com/..."
                        on_change={bind(&draft, |d, v| d.facebook = v)} />
                    <Field label="LinkedIn" value={draft.linkedin.clone()} placeholder="https://linkedin.com/in/..."
                        on_change={bind(&draft, |d, v| d.linkedin = v)} />
                </div>
                <div class="flex justify-end gap-3 border-t border-[var(--border)] pt-6">
                    <button type="button" class={SECONDARY_BUTTON} onclick={to_list}>{ "Cancel" }</button>
                    <button type="submit" class={PRIMARY_BUTTON}>
                        <Icon name={IconName::Check} size={16} />{ "Save Author" }
                    </button>
                </div>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_author_defaults() {
        let draft = AuthorDraft::default();
        assert_eq!(draft.role, "Contributor");
        assert_eq!(draft.avatar, DEFAULT_AVATAR);
    }

    #[test]
    fn empty_social_links_are_dropped() {
        let draft = AuthorDraft {
            name: " Mara Quinn ".to_string(),
            ..AuthorDraft::default()
        };
        let author = draft.into_author("4".to_string());
        assert_eq!(author.name, "Mara Quinn");
        assert_eq!(author.social, None);
        assert_eq!(author.email, None);
    }

    #[test]
    fn social_links_round_into_the_record() {
        let draft = AuthorDraft {
            name: "Mara".to_string(),
            twitter: "https://twitter.com/mara".to_string(),
            ..AuthorDraft::default()
        };
        let author = draft.into_author("4".to_string());
        let social = author.social.clone().unwrap_or_default();
        assert_eq!(social.twitter.as_deref(), Some("https://twitter.com/mara"));
        assert_eq!(social.linkedin, None);
        assert_eq!(AuthorDraft::from_author(&author).twitter, "https://twitter.com/mara");
    }
}
