use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod motion;
mod scroll;
mod viewport;
mod components {
    pub mod faq;
    pub mod footer;
    pub mod nav;
    pub mod newsletter;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod support;
}

use pages::{
    home::Home,
    not_found::NotFound,
    support::Support,
};
use viewport::ViewportProvider;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/support")]
    Support,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Support => {
            info!("Rendering Support page");
            html! { <Support /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ViewportProvider>
                <Switch<Route> render={switch} />
            </ViewportProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_their_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/support"), Some(Route::Support));
        assert_eq!(Route::Support.to_path(), "/support");
    }

    #[test]
    fn not_found_has_its_own_path() {
        assert_eq!(Route::NotFound.to_path(), "/404");
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
