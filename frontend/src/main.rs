use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod motion;
mod hooks {
    pub mod reveal;
    pub mod scroll;
}
mod components {
    pub mod nav;
    pub mod section_header;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::nav::Nav;
use config::MotionConfig;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let motion = use_memo(|_| config::motion(), ());

    html! {
        <ContextProvider<Rc<MotionConfig>> context={motion}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<MotionConfig>>>
    }
}

fn main() {
    // Route wasm panics to the browser console.
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
