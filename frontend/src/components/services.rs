use yew::prelude::*;

use crate::data::SERVICES;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    /// Receives the portfolio category of the clicked service.
    pub on_select: Callback<String>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="services">
            <div class="container">
                <div class="services-header">
                    <div class="section-label">{"02. Work Categories"}</div>
                    <h3 class="section-title">{"What We Cut"}</h3>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| {
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let category = service.filter_category;
                            Callback::from(move |_: MouseEvent| on_select.emit(category.to_string()))
                        };
                        html! {
                            <button key={service.title} class="service-card" {onclick}>
                                <div class="service-icon">{service.icon}</div>
                                <h4>{service.title}</h4>
                                <p>{service.description}</p>
                                <div class="service-tags">
                                    { for service.tags.iter().map(|tag| html! {
                                        <span class="service-tag">{*tag}</span>
                                    }) }
                                </div>
                                <span class="service-link">{"Open library →"}</span>
                            </button>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .services {
                    padding: 6rem 0;
                    background: #050509;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .services-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .service-card {
                    text-align: left;
                    background: #111116;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                    color: #fff;
                    cursor: pointer;
                    transition: border-color 0.3s ease, transform 0.3s ease;
                }
                .service-card:hover {
                    border-color: rgba(59, 130, 246, 0.5);
                    transform: translateY(-4px);
                }
                .service-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .service-card h4 {
                    font-size: 1.25rem;
                    margin: 0 0 0.75rem;
                }
                .service-card p {
                    color: #9ca3af;
                    font-size: 0.9rem;
                    line-height: 1.6;
                }
                .service-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin: 1rem 0;
                }
                .service-tag {
                    font-family: monospace;
                    font-size: 0.7rem;
                    padding: 0.2rem 0.6rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.05);
                    color: #d1d5db;
                }
                .service-link {
                    font-family: monospace;
                    font-size: 0.8rem;
                    color: #3b82f6;
                }
                @media (max-width: 950px) {
                    .services-grid { grid-template-columns: 1fr; }
                    .services { padding: 4rem 0; }
                }
                "#}
            </style>
        </section>
    }
}
