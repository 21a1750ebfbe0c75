use gloo_timers::callback::Timeout;
use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod search;
mod theme {
    pub mod backend;
    pub mod hooks;
    pub mod palette;
    pub mod store;
}
mod content {
    pub mod blog;
    pub mod careers;
    pub mod faq;
    pub mod home;
    pub mod products;
    pub mod services;
}
mod components {
    pub mod filter_bar;
    pub mod footer;
    pub mod loader;
    pub mod navbar;
    pub mod page_hero;
    pub mod scroll;
}
mod pages {
    pub mod blog;
    pub mod careers;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod product_detail;
    pub mod products;
    pub mod service_detail;
    pub mod services;
    pub mod support;
}

use components::{footer::Footer, loader::Loader, navbar::Navbar};
use pages::{
    blog::Blog,
    careers::Careers,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    product_detail::ProductDetailPage,
    products::Products,
    service_detail::ServiceDetailPage,
    services::Services,
    support::Support,
};
use theme::hooks::{use_palette, ThemeProvider};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/products")]
    Products,
    #[at("/products/:id")]
    ProductDetail { id: String },
    #[at("/services")]
    Services,
    #[at("/services/:id")]
    ServiceDetail { id: String },
    #[at("/blog")]
    Blog,
    #[at("/contact")]
    Contact,
    #[at("/careers")]
    Careers,
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
        }
        Route::Products => {
            info!("Rendering Products page");
            html! { <Products /> }
        }
        Route::ProductDetail { id } => {
            info!("Rendering Product detail page for {}", id);
            html! { <ProductDetailPage {id} /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::ServiceDetail { id } => {
            info!("Rendering Service detail page for {}", id);
            html! { <ServiceDetailPage {id} /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Careers => {
            info!("Rendering Careers page");
            html! { <Careers /> }
        }
        Route::Support => {
            info!("Rendering Support page");
            html! { <Support /> }
        }
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        }
    }
}

/// Navbar, routed page and footer, painted with the active palette.
#[function_component(Shell)]
fn shell() -> Html {
    let palette = use_palette();

    html! {
        <div class="site-shell" style={palette.css_vars()}>
            <Navbar />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                    margin: 0;
                }
                body {
                    font-family: 'Inter', system-ui, sans-serif;
                }
                .site-shell {
                    min-height: 100vh;
                    background: var(--page-bg);
                    color: var(--text);
                    transition: background 0.3s ease, color 0.3s ease;
                }
                img {
                    max-width: 100%;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let loading = use_state(|| true);

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::LOADER_DURATION_MS, move || {
                    loading.set(false);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <ThemeProvider>
            if *loading {
                <Loader />
            } else {
                <BrowserRouter>
                    <Shell />
                </BrowserRouter>
            }
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_routes_carry_their_id() {
        assert_eq!(
            Route::recognize("/products/secure-vault"),
            Some(Route::ProductDetail {
                id: "secure-vault".into()
            })
        );
        assert_eq!(
            Route::ServiceDetail {
                id: "data-analytics".into()
            }
            .to_path(),
            "/services/data-analytics"
        );
    }

    #[test]
    fn listing_routes_map_to_fixed_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/support"), Some(Route::Support));
        assert_eq!(Route::Careers.to_path(), "/careers");
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
