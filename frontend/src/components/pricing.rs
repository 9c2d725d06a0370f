use yew::prelude::*;

use crate::data::PRICING_TIERS;
use crate::models::PricingTier;

fn tier_card(index: usize, tier: &PricingTier) -> Html {
    let delay = format!("animation-delay: {:.1}s;", index as f64 * 0.1);
    html! {
        <div key={tier.name} class="tier" style={delay}>
            <div class="tier-sprockets left">
                { for (0..8).map(|_| html! { <div class="sprocket"></div> }) }
            </div>
            <div class="tier-sprockets right">
                { for (0..8).map(|_| html! { <div class="sprocket"></div> }) }
            </div>
            <div class="tier-card">
                <div class="tier-head">
                    <h4>{tier.name}</h4>
                    <div class="tier-best-for">{tier.best_for}</div>
                    <div class="tier-price">{tier.price}</div>
                </div>
                <div class="tier-body">
                    <ul>
                        { for tier.features.iter().map(|feature| html! {
                            <li><span class="tier-check">{"✓"}</span>{*feature}</li>
                        }) }
                    </ul>
                    if !tier.samples.is_empty() {
                        <div class="tier-samples">
                            <span class="tier-samples-label">{"Reference Samples:"}</span>
                            <div class="tier-sample-links">
                                { for tier.samples.iter().map(|sample| html! {
                                    <a href={sample.url} target="_blank" rel="noopener noreferrer">
                                        {"↗ "}{sample.label}
                                    </a>
                                }) }
                            </div>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="pricing-header">
                    <div class="section-label">{"07. Rate Card"}</div>
                    <h3 class="section-title">{"Production Budget"}</h3>
                </div>
                <div class="pricing-grid">
                    { for PRICING_TIERS.iter().enumerate().map(|(i, tier)| tier_card(i, tier)) }
                </div>
                <div class="pricing-note">
                    <h5>{"📺 Additional Creative Services"}</h5>
                    <p>
                        {"We also offer Digital Marketing, Photography, Videography, Content Writing & Content Creation in collaboration with "}
                        <strong>{"digikey_digitalmarketing"}</strong>
                        {". Contact us for a custom quote."}
                    </p>
                </div>
            </div>
            <style>
                {r#"
                .pricing {
                    padding: 6rem 0;
                    background: #050509;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .pricing-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem 1.5rem;
                }
                .tier {
                    position: relative;
                    background: #1a1a20;
                    border-radius: 24px;
                    opacity: 0;
                    animation: fadeInUp 0.5s forwards;
                }
                .tier-sprockets {
                    position: absolute;
                    top: 0;
                    height: 100%;
                    width: 20px;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-around;
                    align-items: center;
                    pointer-events: none;
                }
                .tier-sprockets.left { left: 0; }
                .tier-sprockets.right { right: 0; }
                .sprocket {
                    width: 10px;
                    height: 20px;
                    background: #0a0a0f;
                    border-radius: 2px;
                }
                .tier-card {
                    position: relative;
                    margin: 0 20px;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    background: #111116;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 24px;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .tier-card:hover { border-color: rgba(59, 130, 246, 0.5); }
                .tier-head {
                    padding: 1.5rem;
                    border-bottom: 1px dashed rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                }
                .tier-head h4 {
                    margin: 0 0 0.25rem;
                    font-size: 1.25rem;
                }
                .tier-best-for {
                    font-family: monospace;
                    font-size: 0.75rem;
                    color: #9ca3af;
                    margin-bottom: 1rem;
                }
                .tier-price {
                    font-size: 1.75rem;
                    font-weight: 900;
                }
                .tier-body {
                    padding: 1.5rem;
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                }
                .tier-body ul {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 1.5rem;
                }
                .tier-body li {
                    display: flex;
                    gap: 0.75rem;
                    color: #9ca3af;
                    font-size: 0.875rem;
                    margin-bottom: 0.75rem;
                }
                .tier-check { color: #3b82f6; }
                .tier-samples {
                    margin-top: auto;
                    padding-top: 1rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .tier-samples-label {
                    display: block;
                    font-family: monospace;
                    font-size: 0.65rem;
                    text-transform: uppercase;
                    color: #6b7280;
                    margin-bottom: 0.5rem;
                }
                .tier-sample-links {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .tier-sample-links a {
                    font-size: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 6px;
                    background: rgba(59, 130, 246, 0.1);
                    color: #3b82f6;
                    text-decoration: none;
                }
                .pricing-note {
                    margin-top: 5rem;
                    padding: 1.5rem;
                    background: #15151a;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    text-align: center;
                }
                .pricing-note h5 {
                    margin: 0 0 0.5rem;
                    font-size: 1rem;
                }
                .pricing-note p {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    max-width: 640px;
                    margin: 0 auto;
                }
                @media (max-width: 1024px) {
                    .pricing-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 768px) {
                    .pricing-grid { grid-template-columns: 1fr; }
                    .pricing { padding: 4rem 0; }
                }
                "#}
            </style>
        </section>
    }
}
