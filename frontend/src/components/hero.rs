use yew::prelude::*;
use web_sys::MouseEvent;

use crate::scroll;

#[function_component(Hero)]
pub fn hero() -> Html {
    let to_anchor = |href: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll::scroll_to_anchor(href);
        })
    };

    html! {
        <section id="hero" class="hero">
            <div class="hero-glow"></div>
            <div class="hero-content">
                <div class="section-label">{"01. Crea8tiv Studio"}</div>
                <h1 class="hero-title">
                    <span>{"We Cut."}</span>
                    <span>{"You Grow."}</span>
                </h1>
                <p class="hero-text">
                    {"Video editing, thumbnails and design for creators and brands. Short form, long form and everything in between, delivered from our cutting room in Madurai."}
                </p>
                <div class="hero-actions">
                    <a href="#services" class="hero-primary" onclick={to_anchor("#services")}>
                        {"See The Work"}
                    </a>
                    <a href="#contact" class="hero-secondary" onclick={to_anchor("#contact")}>
                        {"🎬 Start A Project"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 6rem 1.5rem 4rem;
                    overflow: hidden;
                }
                .hero-glow {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 600px;
                    height: 600px;
                    transform: translate(-50%, -50%);
                    background: rgba(59, 130, 246, 0.12);
                    border-radius: 50%;
                    filter: blur(120px);
                    pointer-events: none;
                }
                .hero-content {
                    position: relative;
                    max-width: 760px;
                }
                .hero-title {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    font-size: 4.5rem;
                    font-weight: 900;
                    margin: 1rem 0 1.5rem;
                }
                .hero-title span {
                    opacity: 0;
                    background: linear-gradient(45deg, #fff, #3b82f6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    animation: fadeInUp 0.6s forwards;
                }
                .hero-title span:nth-child(2) { animation-delay: 0.2s; }
                .hero-text {
                    color: #9ca3af;
                    font-size: 1.15rem;
                    line-height: 1.7;
                    margin-bottom: 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .hero-primary, .hero-secondary {
                    padding: 1rem 2rem;
                    font-weight: bold;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-size: 0.85rem;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .hero-primary {
                    background: #fff;
                    color: #000;
                }
                .hero-primary:hover { background: #e5e7eb; }
                .hero-secondary {
                    border: 1px solid #3b82f6;
                    color: #3b82f6;
                }
                .hero-secondary:hover {
                    background: #3b82f6;
                    color: #fff;
                }
                @media (max-width: 768px) {
                    .hero-title { font-size: 2.75rem; }
                    .hero-text { font-size: 1rem; }
                }
                "#}
            </style>
        </section>
    }
}
