//! Admin console screens. All of them render inside `AdminGuard`, except the
//! login form.

pub mod author_editor;
pub mod authors;
pub mod categories;
pub mod comments;
pub mod dashboard;
pub mod login;
pub mod media;
pub mod page_editor;
pub mod pages;
pub mod post_editor;
pub mod posts;
pub mod settings;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const FIELD_CLASSES: &str = "w-full rounded-lg border border-[var(--border)] bg-[var(--surface)] px-3 py-2 text-sm \
                             focus:border-[var(--primary)] focus:outline-none";
const LABEL_CLASSES: &str = "mb-1 block text-xs font-bold uppercase tracking-wide text-[var(--muted)]";

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
    /// Render a textarea with this many rows.
    #[prop_or_default]
    pub rows: Option<u32>,
    #[prop_or_default]
    pub class: Classes,
}

/// Labelled text input or textarea reporting every keystroke.
#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let control = match props.rows {
        Some(rows) => {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |event: InputEvent| {
                if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                    on_change.emit(target.value());
                }
            });
            html! {
                <textarea
                    class={classes!(FIELD_CLASSES, "font-mono")}
                    rows={rows.to_string()}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    required={props.required}
                    {oninput}
                />
            }
        },
        None => {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |event: InputEvent| {
                if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                    on_change.emit(target.value());
                }
            });
            html! {
                <input
                    type={props.kind.clone()}
                    class={FIELD_CLASSES}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    required={props.required}
                    {oninput}
                />
            }
        },
    };

    html! {
        <label class={classes!("block", props.class.clone())}>
            <span class={LABEL_CLASSES}>{ props.label.clone() }</span>
            { control }
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    /// `(value, label)` pairs.
    pub options: Vec<(String, String)>,
    pub on_change: Callback<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit(target.value());
            }
        })
    };

    html! {
        <label class="block">
            <span class={LABEL_CLASSES}>{ props.label.clone() }</span>
            <select class={FIELD_CLASSES} {onchange}>
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == *props.value}>{ label.clone() }</option>
                }) }
            </select>
        </label>
    }
}

/// Callback that copies the draft, applies one field edit and stores it.
fn bind<D: Clone + 'static>(state: &UseStateHandle<D>, apply: fn(&mut D, String)) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value: String| {
        let mut next = (*state).clone();
        apply(&mut next, value);
        state.set(next);
    })
}

fn admin_header(title: &str, actions: Html) -> Html {
    html! {
        <div class="mb-8 flex flex-wrap items-center justify-between gap-4">
            <h1 class="text-2xl font-bold text-[var(--text)]">{ title.to_string() }</h1>
            <div class="flex flex-wrap items-center gap-3">{ actions }</div>
        </div>
    }
}

const PRIMARY_BUTTON: &str = "inline-flex items-center gap-2 rounded-lg bg-[var(--primary)] px-4 py-2 text-sm font-bold \
                              text-white hover:bg-red-700";
const SECONDARY_BUTTON: &str = "inline-flex items-center gap-2 rounded-lg border border-[var(--border)] bg-[var(--surface)] \
                                px-4 py-2 text-sm font-bold text-[var(--text)] hover:bg-[var(--surface-alt)]";
const DANGER_BUTTON: &str = "inline-flex items-center gap-2 rounded-lg border border-red-200 px-4 py-2 text-sm font-bold \
                             text-red-600 hover:bg-red-50";

const TABLE_CLASSES: &str = "w-full text-left text-sm";
const TH_CLASSES: &str = "px-6 py-3 text-xs font-bold uppercase tracking-wider text-[var(--muted)]";
const TD_CLASSES: &str = "px-6 py-4";

fn panel(body: Html) -> Html {
    html! {
        <div class="overflow-x-auto rounded-xl border border-[var(--border)] bg-[var(--surface)] shadow-sm">
            { body }
        </div>
    }
}
