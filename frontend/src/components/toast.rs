use omega_news_shared::models::{ToastKind, ToastMessage};
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::{
    components::icons::{Icon, IconName},
    data_context::{use_data, DataAction},
};

/// Stack of live notifications pinned to the bottom right corner.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let Some(ctx) = use_data() else {
        return html! {};
    };

    let toasts = ctx.visible_toasts();
    if toasts.is_empty() {
        return html! {};
    }

    let ttl_ms = u32::try_from(ctx.toasts().ttl_ms()).unwrap_or(u32::MAX);
    let on_dismiss = {
        let ctx = ctx.clone();
        Callback::from(move |id: String| ctx.dispatch(DataAction::DismissToast(id)))
    };

    html! {
        <div class="fixed bottom-4 right-4 z-[200] flex flex-col gap-2" aria-live="polite">
            { for toasts.into_iter().map(|toast| html! {
                <ToastItem
                    key={toast.id.clone()}
                    toast={toast.clone()}
                    ttl_ms={ttl_ms}
                    on_dismiss={on_dismiss.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: ToastMessage,
    ttl_ms: u32,
    on_dismiss: Callback<String>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_timeout(move || on_dismiss.emit(id.clone()), props.ttl_ms);
    }

    let close = {
        let id = props.toast.id.clone();
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id.clone()))
    };

    let (tone, icon) = match props.toast.kind {
        ToastKind::Success => ("border-l-green-500", IconName::Check),
        ToastKind::Error => ("border-l-red-500", IconName::X),
        ToastKind::Info => ("border-l-blue-500", IconName::MessageSquare),
    };

    html! {
        <div
            class={classes!(
                "flex",
                "items-center",
                "gap-3",
                "min-w-[18rem]",
                "max-w-sm",
                "rounded-lg",
                "border",
                "border-l-4",
                "border-[var(--border)]",
                tone,
                "bg-[var(--surface)]",
                "px-4",
                "py-3",
                "text-sm",
                "text-[var(--text)]",
                "shadow-lg"
            )}
            role="status"
        >
            <Icon name={icon} size={18} />
            <span class="flex-1">{ props.toast.message.clone() }</span>
            <button
                type="button"
                class="text-[var(--muted)] hover:text-[var(--text)]"
                aria-label="Dismiss notification"
                onclick={close}
            >
                <Icon name={IconName::X} size={16} />
            </button>
        </div>
    }
}
