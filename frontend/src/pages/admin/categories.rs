use omega_news_shared::{config::Collection, models::Category, text::slug_or_derive, views};
use yew::prelude::*;

use super::{
    admin_header, bind, panel, Field, PRIMARY_BUTTON, SECONDARY_BUTTON, TABLE_CLASSES, TD_CLASSES, TH_CLASSES,
};
use crate::{
    components::icons::{Icon, IconButton, IconName},
    data_context::{use_data, DataAction},
    utils::confirm,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct CategoryForm {
    name: String,
    slug: String,
    /// Set while an existing category is being edited.
    editing: Option<String>,
}

impl CategoryForm {
    fn editing(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
            editing: Some(category.id.clone()),
        }
    }

    fn to_category(&self, id: String) -> Category {
        Category {
            id,
            name: self.name.trim().to_string(),
            slug: slug_or_derive(&self.slug, self.name.trim()),
        }
    }
}

#[function_component(CategoriesAdminPage)]
pub fn categories_admin_page() -> Html {
    let ctx = use_data();
    let form = use_state(CategoryForm::default);
    let Some(ctx) = ctx else {
        return html! {};
    };

    let on_submit = {
        let ctx = ctx.clone();
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if form.name.trim().is_empty() {
                return;
            }
            match form.editing.clone() {
                Some(id) => ctx.dispatch(DataAction::UpdateCategory(form.to_category(id))),
                None => {
                    let id = ctx.new_id(Collection::Categories);
                    ctx.dispatch(DataAction::AddCategory(form.to_category(id)));
                },
            }
            form.set(CategoryForm::default());
        })
    };

    let on_cancel = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.set(CategoryForm::default()))
    };

    let store = ctx.store();
    let rows = store.categories().iter().map(|category| {
        let count = views::by_category(store.articles(), &category.name).len();
        let edit = {
            let form = form.clone();
            let category = category.clone();
            Callback::from(move |_: MouseEvent| form.set(CategoryForm::editing(&category)))
        };
        let delete = {
            let ctx = ctx.clone();
            let form = form.clone();
            let id = category.id.clone();
            Callback::from(move |_: MouseEvent| {
                if confirm("Delete this category? Posts keep their category label.") {
                    if form.editing.as_deref() == Some(id.as_str()) {
                        form.set(CategoryForm::default());
                    }
                    ctx.dispatch(DataAction::DeleteCategory(id.clone()));
                }
            })
        };
        html! {
            <tr key={category.id.clone()} class="hover:bg-[var(--surface-alt)]">
                <td class={classes!(TD_CLASSES, "font-medium")}>{ category.name.clone() }</td>
                <td class={classes!(TD_CLASSES, "font-mono", "text-xs", "text-[var(--muted)]")}>{ category.slug.clone() }</td>
                <td class={TD_CLASSES}>{ count }</td>
                <td class={classes!(TD_CLASSES, "text-right")}>
                    <div class="flex justify-end gap-1">
                        <IconButton icon={IconName::Pencil} title="Edit" onclick={edit} />
                        <IconButton icon={IconName::Trash} title="Delete" onclick={delete}
                            class={classes!("hover:text-red-600")} />
                    </div>
                </td>
            </tr>
        }
    });

    let is_editing = form.editing.is_some();

    html! {
        <div>
            { admin_header("Categories", html! {}) }
            <div class="grid grid-cols-1 gap-8 lg:grid-cols-3">
                <form class="h-fit space-y-4 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6" onsubmit={on_submit}>
                    <h2 class="text-lg font-bold">{ if is_editing { "Edit Category" } else { "Add New Category" } }</h2>
                    <Field label="Name" value={form.name.clone()} required=true placeholder="e.g. Science"
                        on_change={bind(&form, |f, v| f.name = v)} />
                    <Field label="Slug" value={form.slug.clone()} placeholder="e.g. science (optional)"
                        on_change={bind(&form, |f, v| f.slug = v)} />
                    <div class="flex gap-3">
                        <button type="submit" class={PRIMARY_BUTTON}>
                            <Icon name={if is_editing { IconName::Check } else { IconName::Plus }} size={16} />
                            { if is_editing { "Update Category" } else { "Add Category" } }
                        </button>
                        if is_editing {
                            <button type="button" class={SECONDARY_BUTTON} onclick={on_cancel}>{ "Cancel" }</button>
                        }
                    </div>
                </form>
                <div class="lg:col-span-2">
                    { panel(html! {
                        <table class={TABLE_CLASSES}>
                            <thead class="border-b border-[var(--border)] bg-[var(--surface-alt)]">
                                <tr>
                                    <th class={TH_CLASSES}>{ "Name" }</th>
                                    <th class={TH_CLASSES}>{ "Slug" }</th>
                                    <th class={TH_CLASSES}>{ "Posts" }</th>
                                    <th class={classes!(TH_CLASSES, "text-right")}>{ "Actions" }</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-[var(--border)]">
                                { for rows }
                            </tbody>
                        </table>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_derived_when_left_blank() {
        let form = CategoryForm {
            name: " Science & Tech ".to_string(),
            ..CategoryForm::default()
        };
        let category = form.to_category("9".to_string());
        assert_eq!(category.name, "Science & Tech");
        assert_eq!(category.slug, "science--tech");
    }

    #[test]
    fn explicit_slug_wins() {
        let form = CategoryForm {
            name: "Science".to_string(),
            slug: "sci".to_string(),
            editing: Some("3".to_string()),
        };
        assert_eq!(form.to_category("3".to_string()).slug, "sci");
    }
}
