use omega_news_shared::{
    models::{NavItem, SiteSettings},
    seed,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{admin_header, bind, Field, PRIMARY_BUTTON, SECONDARY_BUTTON};
use crate::{
    components::icons::{Icon, IconButton, IconName},
    data_context::{use_data, DataAction},
};

fn new_link() -> NavItem {
    NavItem {
        label: "New Link".to_string(),
        path: "/".to_string(),
        is_category: false,
    }
}

#[derive(Clone, Copy, PartialEq)]
enum NavField {
    Label,
    Path,
}

fn edit_nav(settings: &mut SiteSettings, index: usize, field: NavField, value: String) {
    if let Some(item) = settings.navigation.get_mut(index) {
        match field {
            NavField::Label => item.label = value,
            NavField::Path => item.path = value,
        }
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let ctx = use_data();
    let draft = {
        let ctx = ctx.clone();
        use_state(move || {
            ctx.as_ref()
                .map(|ctx| ctx.store().settings().clone())
                .unwrap_or_else(seed::settings)
        })
    };
    let Some(ctx) = ctx else {
        return html! {};
    };

    let update = {
        let draft = draft.clone();
        move |apply: Box<dyn Fn(&mut SiteSettings)>| {
            let mut next = (*draft).clone();
            apply(&mut next);
            draft.set(next);
        }
    };

    let nav_input = |index: usize, field: NavField| {
        let update = update.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                let value = target.value();
                update(Box::new(move |settings: &mut SiteSettings| edit_nav(settings, index, field, value.clone())));
            }
        })
    };
    let nav_toggle = |index: usize| {
        let update = update.clone();
        Callback::from(move |_: Event| {
            update(Box::new(move |settings: &mut SiteSettings| {
                if let Some(item) = settings.navigation.get_mut(index) {
                    item.is_category = !item.is_category;
                }
            }))
        })
    };
    let nav_remove = |index: usize| {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            update(Box::new(move |settings: &mut SiteSettings| {
                if index < settings.navigation.len() {
                    settings.navigation.remove(index);
                }
            }))
        })
    };
    let nav_add = {
        let update = update.clone();
        Callback::from(move |_: MouseEvent| {
            update(Box::new(|settings: &mut SiteSettings| settings.navigation.push(new_link())))
        })
    };
    let toggle_ads = {
        let update = update.clone();
        Callback::from(move |_: Event| {
            update(Box::new(|settings: &mut SiteSettings| settings.show_ads = !settings.show_ads))
        })
    };

    let on_submit = {
        let draft = draft.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            ctx.dispatch(DataAction::UpdateSettings((*draft).clone()));
        })
    };

    html! {
        <form onsubmit={on_submit} class="max-w-4xl">
            { admin_header("Settings", html! {
                <button type="submit" class={PRIMARY_BUTTON}>
                    <Icon name={IconName::Check} size={16} />{ "Save Changes" }
                </button>
            }) }

            <section class="mb-8 space-y-6 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6">
                <h2 class="text-lg font-bold">{ "General" }</h2>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                    <Field label="Site Title" value={draft.site_title.clone()}
                        on_change={bind(&draft, |s, v| s.site_title = v)} />
                    <Field label="Logo Text" value={draft.logo_text.clone()}
                        on_change={bind(&draft, |s, v| s.logo_text = v)} />
                </div>
                <Field label="Footer Text" value={draft.footer_text.clone()}
                    on_change={bind(&draft, |s, v| s.footer_text = v)} />
                <label class="flex items-center gap-3 text-sm font-medium">
                    <input type="checkbox" checked={draft.show_ads} onchange={toggle_ads} />
                    { "Show advertisement placeholders" }
                </label>
            </section>

            <section class="space-y-4 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-bold">{ "Navigation Menu" }</h2>
                    <button type="button" class={SECONDARY_BUTTON} onclick={nav_add}>
                        <Icon name={IconName::Plus} size={16} />{ "Add Link" }
                    </button>
                </div>
                { for draft.navigation.iter().enumerate().map(|(index, item)| html! {
                    <div key={index} class="flex flex-wrap items-center gap-3 rounded-lg bg-[var(--surface-alt)] p-3">
                        <input
                            class="flex-1 rounded border border-[var(--border)] bg-[var(--surface)] px-3 py-2 text-sm"
                            placeholder="Label"
                            value={item.label.clone()}
                            oninput={nav_input(index, NavField::Label)}
                        />
                        <input
                            class="flex-1 rounded border border-[var(--border)] bg-[var(--surface)] px-3 py-2 font-mono text-sm"
                            placeholder="/path"
                            value={item.path.clone()}
                            oninput={nav_input(index, NavField::Path)}
                        />
                        <label class="flex items-center gap-2 text-xs font-medium">
                            <input type="checkbox" checked={item.is_category} onchange={nav_toggle(index)} />
                            { "Category" }
                        </label>
                        <IconButton icon={IconName::Trash} title="Remove link" onclick={nav_remove(index)}
                            class={classes!("hover:text-red-600")} />
                    </div>
                }) }
                if draft.navigation.is_empty() {
                    <p class="text-sm text-[var(--muted)]">{ "The header menu is empty." }</p>
                }
            </section>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_a_nav_row_touches_only_that_row() {
        let mut settings = seed::settings();
        let before = settings.navigation.clone();
        edit_nav(&mut settings, 1, NavField::Label, "Markets".to_string());
        assert_eq!(settings.navigation[1].label, "Markets");
        assert_eq!(settings.navigation[0], before[0]);
        assert_eq!(settings.navigation[1].path, before[1].path);
    }

    #[test]
    fn out_of_range_edit_is_ignored() {
        let mut settings = seed::settings();
        let before = settings.clone();
        edit_nav(&mut settings, 99, NavField::Path, "/x".to_string());
        assert_eq!(settings, before);
    }

    #[test]
    fn new_links_point_home() {
        let link = new_link();
        assert_eq!(link.path, "/");
        assert!(!link.is_category);
    }
}
