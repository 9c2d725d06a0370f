use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::data::SOCIAL_LINKS;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer id="footer" class="site-footer">
            <div class="container footer-content">
                <div>
                    <div class="footer-brand">{"Crea8tiv"}</div>
                    <p class="footer-tagline">{"Creative social media studio. Madurai, India."}</p>
                </div>
                <div class="footer-links">
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.url} target="_blank" rel="noopener noreferrer">{link.label}</a>
                    }) }
                </div>
            </div>
            <div class="footer-legal">{format!("© {} Crea8tiv. All rights reserved.", year)}</div>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 0 2rem;
                    background: #020205;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .footer-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                    flex-wrap: wrap;
                }
                .footer-brand {
                    font-size: 1.5rem;
                    font-weight: 900;
                    color: #3b82f6;
                }
                .footer-tagline {
                    color: #6b7280;
                    font-size: 0.85rem;
                }
                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .footer-links a {
                    color: #9ca3af;
                    font-family: monospace;
                    font-size: 0.85rem;
                    text-decoration: none;
                }
                .footer-links a:hover { color: #3b82f6; }
                .footer-legal {
                    text-align: center;
                    color: #4b5563;
                    font-size: 0.75rem;
                    margin-top: 2rem;
                }
                "#}
            </style>
        </footer>
    }
}
