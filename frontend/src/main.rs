use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod showroom;
mod components {
    pub mod carousel;
    pub mod cursor;
    pub mod gallery;
    pub mod icons;
    pub mod lightbox;
    pub mod scroll_lock;
}
mod pages {
    pub mod landing;
}

use content::LandingContent;
use pages::landing::{ContentUnavailable, Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Option<Rc<LandingContent>>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let content = props.content.clone();
    let switch = move |route: Route| match route {
        Route::Home => match &content {
            Some(content) => {
                info!("Rendering landing page");
                html! { <Landing content={content.clone()} /> }
            }
            None => html! { <ContentUnavailable /> },
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    let content = match LandingContent::embedded() {
        Ok(content) => Some(Rc::new(content)),
        Err(err) => {
            error!("Failed to load landing content: {}", err);
            None
        }
    };
    yew::Renderer::<App>::with_props(AppProps { content }).render();
}
