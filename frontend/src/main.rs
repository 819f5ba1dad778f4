mod components;
mod config;
mod data_context;
pub mod hooks;
mod pages;
mod router;
mod seo;
mod storage;
mod utils;

use yew::prelude::*;

use crate::data_context::DataProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <DataProvider>
            <router::AppRouter />
        </DataProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
