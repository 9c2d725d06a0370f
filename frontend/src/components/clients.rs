use yew::prelude::*;

use crate::data::CLIENTS;
use crate::media::{client_logo_url, marquee_track};

#[function_component(Clients)]
pub fn clients() -> Html {
    html! {
        <section id="clients" class="clients">
            <div class="clients-header">
                <div class="section-label">{"08. Our Clients"}</div>
            </div>
            <div class="clients-mask">
                <div class="clients-track">
                    { for marquee_track(CLIENTS).into_iter().map(|(i, client)| html! {
                        <div key={format!("{}-{}", client.logo_id, i)} class="client-logo" title={client.name}>
                            <img src={client_logo_url(client.logo_id)} alt={client.name} loading="lazy" />
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .clients {
                    padding: 6rem 0;
                    background: #08080c;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    overflow: hidden;
                }
                .clients-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .clients-mask {
                    -webkit-mask-image: linear-gradient(to right, transparent, black 10%, black 90%, transparent);
                    mask-image: linear-gradient(to right, transparent, black 10%, black 90%, transparent);
                }
                .clients-track {
                    display: flex;
                    width: max-content;
                    animation: scroll 40s linear infinite;
                }
                .clients-track:hover { animation-play-state: paused; }
                .client-logo {
                    flex-shrink: 0;
                    width: 160px;
                    height: 80px;
                    margin: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    filter: grayscale(100%);
                    opacity: 0.6;
                    transition: all 0.3s ease;
                }
                .client-logo:hover {
                    filter: grayscale(0);
                    opacity: 1;
                }
                .client-logo img {
                    max-width: 100%;
                    max-height: 100%;
                    object-fit: contain;
                }
                @media (max-width: 768px) {
                    .clients { padding: 4rem 0; }
                    .client-logo { width: 110px; height: 56px; margin: 0 1rem; }
                }
                "#}
            </style>
        </section>
    }
}
