use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod components {
    pub mod chat_demo;
    pub mod fade_in;
    pub mod icons;
}
mod pages {
    pub mod landing;
}

use components::chat_demo::ChatDemoWidget;
use components::icons::{ScissorsIcon, WhatsAppIcon};
use pages::landing::Landing;

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
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="/" class="nav-logo">
                    <div class="nav-logo-badge">
                        <ScissorsIcon />
                    </div>
                    <span>{"BARBER"}<span class="accent">{"PRO"}</span></span>
                </a>

                <div class="nav-links">
                    <a href="#problema">{"Problema"}</a>
                    <a href="#solucion">{"Solución"}</a>
                    <a href="#video-demo">{"Video"}</a>
                </div>

                <a
                    href={config::whatsapp_link(config::NAV_CTA_MESSAGE)}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="whatsapp-button"
                >
                    <WhatsAppIcon />
                    <span>{"Hablemos"}</span>
                </a>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <ChatDemoWidget />
            <a
                href={config::whatsapp_link(config::FLOATING_CTA_MESSAGE)}
                target="_blank"
                rel="noopener noreferrer"
                class="floating-whatsapp"
                aria-label="Contactar por WhatsApp"
            >
                <WhatsAppIcon />
            </a>
        </BrowserRouter>
    }
}

/// Scissors emoji rendered as an inline SVG, small enough to inline as the
/// tab icon without shipping an asset.
const FAVICON_DATA_URL: &str = "data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>✂️</text></svg>";

/// One-time tab title and favicon setup, done here at the composition root
/// instead of from inside the component tree.
fn init_page_chrome() {
    let document = web_sys::window().unwrap().document().unwrap();
    document.set_title("Barber Pro | Automatización para Barberías");

    let link = match document.query_selector("link[rel~='icon']").ok().flatten() {
        Some(link) => link,
        None => {
            let link = document
                .create_element("link")
                .expect("failed to create favicon link");
            let _ = link.set_attribute("rel", "icon");
            if let Some(head) = document.head() {
                let _ = head.append_child(&link);
            }
            link
        }
    };
    let _ = link.set_attribute("href", FAVICON_DATA_URL);
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    init_page_chrome();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
