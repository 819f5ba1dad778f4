use gloo_timers::callback::Timeout;
use omega_news_shared::newsroom::LOGIN_FAILED;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config::LOGIN_DELAY_MS,
    data_context::{use_data, DataAction},
    router::Route,
    seo::apply_page_meta,
};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let ctx = use_data();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let attempted = use_state(|| false);

    let authenticated = ctx.as_ref().is_some_and(|ctx| ctx.is_authenticated());

    {
        let navigator = navigator.clone();
        use_effect_with(authenticated, move |authenticated| {
            if *authenticated {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.replace(&Route::AdminDashboard);
                }
            }
            || ()
        });
    }

    use_effect_with((), |_| {
        apply_page_meta("Admin Login", None);
        || ()
    });

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(target.value());
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(target.value());
            }
        })
    };

    let on_submit = {
        let ctx = ctx.clone();
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let attempted = attempted.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(ctx) = ctx.clone() else {
                return;
            };
            attempted.set(false);
            loading.set(true);

            let email = (*email).clone();
            let password = (*password).clone();
            let loading = loading.clone();
            let attempted = attempted.clone();
            Timeout::new(LOGIN_DELAY_MS, move || {
                ctx.dispatch(DataAction::Login {
                    email,
                    password,
                });
                loading.set(false);
                attempted.set(true);
            })
            .forget();
        })
    };

    let show_error = *attempted && !*loading && !authenticated;
    let input_classes = "w-full rounded-lg border border-[var(--border)] py-3 pl-10 pr-3 text-sm focus:border-[var(--primary)] focus:outline-none disabled:opacity-60";

    html! {
        <div class="flex min-h-screen items-center justify-center bg-slate-100 px-4">
            <div class="w-full max-w-md rounded-2xl bg-white p-8 shadow-xl">
                <div class="mb-8 text-center">
                    <div class="mb-4 inline-flex h-16 w-16 items-center justify-center rounded-full bg-[var(--primary)] text-white">
                        <Icon name={IconName::Users} size={32} />
                    </div>
                    <h1 class="text-2xl font-bold">{ "Admin Login" }</h1>
                    <p class="mt-1 text-sm text-[var(--muted)]">{ "Sign in to access the dashboard" }</p>
                    <p class="mt-1 text-xs text-[var(--muted)]">{ "(Use: admin@omeganews.com / admin123)" }</p>
                </div>
                <form class="space-y-5" onsubmit={on_submit}>
                    if show_error {
                        <div class="rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700" role="alert" aria-live="polite">
                            { LOGIN_FAILED }
                        </div>
                    }
                    <div>
                        <label for="email" class="mb-1 block text-sm font-medium">{ "Email Address" }</label>
                        <div class="relative">
                            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-[var(--muted)]">
                                <Icon name={IconName::Mail} size={18} />
                            </span>
                            <input
                                id="email"
                                type="email"
                                class={input_classes}
                                placeholder="admin@omeganews.com"
                                value={(*email).clone()}
                                oninput={on_email}
                                required=true
                                disabled={*loading}
                            />
                        </div>
                    </div>
                    <div>
                        <label for="password" class="mb-1 block text-sm font-medium">{ "Password" }</label>
                        <div class="relative">
                            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-[var(--muted)]">
                                <Icon name={IconName::Settings} size={18} />
                            </span>
                            <input
                                id="password"
                                type="password"
                                class={input_classes}
                                placeholder="••••••••"
                                value={(*password).clone()}
                                oninput={on_password}
                                required=true
                                disabled={*loading}
                            />
                        </div>
                    </div>
                    <button
                        type="submit"
                        class="w-full rounded-lg bg-[var(--primary)] py-3 text-sm font-bold text-white hover:bg-red-700 disabled:opacity-60"
                        disabled={*loading}
                    >
                        { if *loading { "Signing In..." } else { "Sign In" } }
                    </button>
                </form>
                <div class="mt-6 text-center">
                    <Link<Route> to={Route::Home} classes={classes!("text-sm", "text-[var(--muted)]", "hover:text-[var(--primary)]")}>
                        { "Back to Website" }
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
