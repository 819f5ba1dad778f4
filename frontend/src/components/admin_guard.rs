use yew::prelude::*;
use yew_hooks::prelude::use_timeout;
use yew_router::prelude::Redirect;

use crate::{
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    config::GUARD_DELAY_MS,
    data_context::use_data,
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct AdminGuardProps {
    pub children: Html,
}

/// Show a short spinner, then either the admin content or a redirect to the
/// login page.
#[function_component(AdminGuard)]
pub fn admin_guard(props: &AdminGuardProps) -> Html {
    let ctx = use_data();
    let checked = use_state(|| false);

    {
        let checked = checked.clone();
        use_timeout(move || checked.set(true), GUARD_DELAY_MS);
    }

    if !*checked {
        return html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen=true /> };
    }

    let authenticated = ctx.as_ref().is_some_and(|ctx| ctx.is_authenticated());
    if !authenticated {
        return html! { <Redirect<Route> to={Route::AdminLogin} /> };
    }

    props.children.clone()
}
