mod analytics;
mod collection;
mod env_variable_utils;
mod logger;
mod markdown;
mod models;
mod router;
mod seo;
mod utils;

use crate::env_variable_utils::{get_app_name, get_backend_url, is_debug_mode};
use crate::router::{switch, Route};
use log::LevelFilter;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let level = if is_debug_mode() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger::init(level);

    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        get_backend_url(),
        is_debug_mode()
    );
}
