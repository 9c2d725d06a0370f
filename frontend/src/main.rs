use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{debug, info};
use web_sys::{KeyboardEvent, MouseEvent, PopStateEvent};

mod config;
mod models;
mod data;
mod media;
mod circular;
mod scroll;
mod modal;
mod gallery;
mod carousel;
mod contact;
mod pages {
    pub mod home;
}
mod components {
    pub mod hero;
    pub mod services;
    pub mod portfolio;
    pub mod reels;
    pub mod about;
    pub mod pricing;
    pub mod clients;
    pub mod contact_form;
    pub mod footer;
}

use pages::home::Home;
use modal::{ModalContext, ModalStack};
use data::{LOGO_URL, NAV_CTA, NAV_ITEMS};

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
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll::is_scrolled(scroll_y);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_click = |href: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll::scroll_to_anchor(href);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={nav_click("root")}>
                    <img src={LOGO_URL} alt="Crea8tiv" />
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a key={item.label} href={item.href} class="nav-link" onclick={nav_click(item.href)}>
                            {item.label}
                        </a>
                    }) }
                    <a href={NAV_CTA.href} class="nav-cta" onclick={nav_click(NAV_CTA.href)}>
                        {NAV_CTA.label}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: rgba(2, 2, 5, 0.95);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo img {
                    height: 40px;
                    object-fit: contain;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: #d1d5db;
                    font-family: monospace;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #3b82f6;
                }
                .nav-cta {
                    padding: 0.5rem 1.5rem;
                    border: 1px solid #3b82f6;
                    color: #3b82f6;
                    text-transform: uppercase;
                    font-size: 0.75rem;
                    font-weight: bold;
                    letter-spacing: 0.15em;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .nav-cta:hover {
                    background: #3b82f6;
                    color: #fff;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .top-nav { padding: 1rem 0; }
                    .nav-logo img { height: 24px; }
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        height: 100vh;
                        flex-direction: column;
                        align-items: stretch;
                        gap: 1.5rem;
                        padding: 1.5rem;
                        background: rgba(2, 2, 5, 0.95);
                        backdrop-filter: blur(20px);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                    .nav-link {
                        font-size: 1.25rem;
                        padding: 0.5rem 0;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .nav-cta { text-align: center; padding: 1rem; }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let stack = use_reducer(ModalStack::default);
    let modals = ModalContext::new(stack.clone());

    // Back navigation peels the top overlay.
    {
        let modals = modals.clone();
        use_event_with_window("popstate", move |_: PopStateEvent| {
            modals.on_popstate();
        });
    }

    {
        let modals = modals.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            modals.on_key(&e.key());
        });
    }

    {
        let locked = stack.locks_scroll();
        let depth = stack.depth();
        use_effect_with_deps(
            move |locked| {
                debug!("{} overlay(s) open", depth);
                modal::set_scroll_lock(*locked);
                || ()
            },
            locked,
        );
    }

    html! {
        <ContextProvider<ModalContext> context={modals}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ModalContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
