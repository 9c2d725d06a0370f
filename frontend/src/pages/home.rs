use yew::prelude::*;
use log::info;

use crate::components::{
    about::About,
    clients::Clients,
    contact_form::ContactSection,
    footer::Footer,
    hero::Hero,
    portfolio::Portfolio,
    pricing::Pricing,
    reels::ReelCarousel,
    services::Services,
};
use crate::carousel::CarouselLayout;
use crate::data::RAW_REELS;
use crate::media::derive_reels;
use crate::scroll;

#[function_component(Home)]
pub fn home() -> Html {
    // The only state shared between sections: which library the services list picked.
    let selected_category = use_state(|| None::<String>);
    let reels = use_memo(|_| derive_reels(RAW_REELS), ());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_select_category = {
        let selected_category = selected_category.clone();
        Callback::from(move |category: String| {
            info!("Showing {} library", category);
            selected_category.set(Some(category));
            scroll::scroll_to_anchor("#portfolio");
        })
    };

    let on_clear_filter = {
        let selected_category = selected_category.clone();
        Callback::from(move |_| {
            selected_category.set(None);
        })
    };

    html! {
        <main class="landing">
            <Hero />
            <Services on_select={on_select_category} />
            <Portfolio
                selected_category={(*selected_category).clone()}
                on_clear_filter={on_clear_filter}
            />
            <ReelCarousel
                reels={reels}
                layout={CarouselLayout::default()}
                heading={"04. Client Reels"}
            />
            <About />
            <ContactSection />
            <Pricing />
            <Clients />
            <Footer />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #020205;
                    color: #ffffff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .landing {
                    min-height: 100vh;
                    background: #020205;
                    overflow-x: hidden;
                }
                .section-label {
                    font-family: monospace;
                    font-size: 0.875rem;
                    color: #3b82f6;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    margin-bottom: 0.5rem;
                }
                .section-title {
                    font-size: 2.25rem;
                    font-weight: bold;
                    color: #fff;
                    margin: 0;
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                @keyframes scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                @keyframes fadeInUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .section-label { font-size: 0.75rem; }
                    .section-title { font-size: 1.75rem; }
                    .container { padding: 0 1rem; }
                }
                "#}
            </style>
        </main>
    }
}
