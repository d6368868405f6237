use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks;
mod media;
mod state {
    pub mod carousel;
    pub mod faq;
    pub mod modal;
    pub mod nav;
}
mod components {
    pub mod background;
    pub mod faq_accordion;
    pub mod footer;
    pub mod header;
    pub mod image_carousel;
    pub mod image_modal;
    pub mod stats_grid;
    pub mod video_carousel;
    pub mod video_modal;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use content::SiteContent;
use pages::{landing::Landing, not_found::NotFound};

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
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteContent>> context={props.content.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentErrorProps {
    pub message: String,
}

#[function_component]
fn ContentUnavailable(props: &ContentErrorProps) -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; font-family: sans-serif;">
            <h1>{"Happy Friends Project"}</h1>
            <p>{"The page could not be loaded."}</p>
            <pre style="color: #999;">{&props.message}</pre>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteContent::bundled() {
        Ok(content) => {
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(e) => {
            error!("Site content invalid: {}", e);
            yew::Renderer::<ContentUnavailable>::with_props(ContentErrorProps {
                message: e.to_string(),
            })
            .render();
        }
    }
}
