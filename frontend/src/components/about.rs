use yew::prelude::*;

use crate::data::{FOUNDER_NAME, FOUNDER_PORTRAIT, SOCIAL_LINKS};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="container">
                <div class="about-header">
                    <div class="section-label">{"05. About"}</div>
                    <h3 class="section-title">{"Founder & CEO"}</h3>
                </div>
                <div class="about-card">
                    <div class="about-portrait">
                        <img src={FOUNDER_PORTRAIT} alt={FOUNDER_NAME} />
                        <div class="about-name">{FOUNDER_NAME}</div>
                    </div>
                    <div class="about-body">
                        <p>{"Meet the Founder & CEO, Jothibasu, a 22-year-old creator and entrepreneur."}</p>
                        <p>
                            <span class="about-brand">{"Crea8tiv"}</span>
                            {" is a creative social media startup, founded in 2023 and based in Madurai, India. Worked with 30+ clients across India and abroad, and continuously working towards scaling up."}
                        </p>
                        <p>{"We specialize in social media content, video editing, design, and digital marketing support."}</p>
                        <div class="about-socials">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <a key={link.label} href={link.url} target="_blank" rel="noopener noreferrer" class="about-social">
                                    {link.label}
                                </a>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    padding: 6rem 0;
                    background: #08080c;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .about-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .about-card {
                    max-width: 1000px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                    background: #111116;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 3rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }
                .about-portrait {
                    position: relative;
                    flex-shrink: 0;
                    width: 256px;
                    height: 256px;
                }
                .about-portrait img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 50%;
                    border: 2px solid rgba(255, 255, 255, 0.1);
                }
                .about-name {
                    position: absolute;
                    bottom: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    white-space: nowrap;
                    padding: 0.25rem 1rem;
                    border-radius: 999px;
                    background: rgba(0, 0, 0, 0.8);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    font-family: monospace;
                    font-size: 0.75rem;
                }
                .about-body p {
                    color: #9ca3af;
                    line-height: 1.7;
                }
                .about-brand {
                    color: #3b82f6;
                    font-weight: bold;
                }
                .about-socials {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: 2rem;
                }
                .about-social {
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 8px;
                    color: #fff;
                    font-size: 0.85rem;
                    text-decoration: none;
                    transition: border-color 0.3s ease;
                }
                .about-social:hover { border-color: #3b82f6; }
                @media (max-width: 768px) {
                    .about-card {
                        flex-direction: column;
                        padding: 1.5rem;
                        gap: 2rem;
                    }
                    .about-portrait { width: 160px; height: 160px; }
                }
                "#}
            </style>
        </section>
    }
}
