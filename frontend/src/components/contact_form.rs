use yew::prelude::*;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::contact::{
    run_submission, ContactAction, ContactForm, ContactPhase, Lead, LeadDraft, ScriptEndpoint, TimerPacer,
};
use crate::data::PROJECT_TYPES;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let draft = use_state(LeadDraft::default);
    let form = use_reducer(ContactForm::default);
    let validation = use_state(|| None::<String>);

    // Failures surface as a single blocking alert.
    {
        let alert = form.alert.clone();
        let form = form.clone();
        use_effect_with_deps(
            move |alert: &Option<String>| {
                if let Some(message) = alert {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(message);
                    }
                    form.dispatch(ContactAction::AlertShown);
                }
                || ()
            },
            alert,
        );
    }

    let edit = |apply: fn(&mut LeadDraft, String)| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        }
    };

    let on_name = {
        let edit = edit(|d, v| d.director_name = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_email = {
        let edit = edit(|d, v| d.email = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_mobile = {
        let edit = edit(|d, v| d.mobile_number = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_project_type = {
        let edit = edit(|d, v| d.project_type = v);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            edit(select.value());
        })
    };
    let on_notes = {
        let edit = edit(|d, v| d.notes = v);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            edit(area.value());
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let form = form.clone();
        let validation = validation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_busy() {
                return;
            }
            let lead = match Lead::try_from(&*draft) {
                Ok(lead) => lead,
                Err(err) => {
                    warn!("Lead rejected: {}", err);
                    validation.set(Some(err.to_string()));
                    return;
                }
            };
            validation.set(None);
            let ticket = form.next_submission();
            form.dispatch(ContactAction::Begin);

            let form = form.clone();
            let draft = draft.clone();
            spawn_local(async move {
                let sink = ScriptEndpoint::default();
                run_submission(&sink, &TimerPacer, ticket, lead, move |action| {
                    if matches!(action, ContactAction::Revealed(_)) {
                        info!("Lead delivered");
                        draft.set(LeadDraft::default());
                    }
                    form.dispatch(action);
                })
                .await;
            });
        })
    };

    let send_another = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(ContactAction::Reset))
    };

    let clapper_style = if form.clapper_open {
        "transform: rotate(-15deg);"
    } else {
        "transform: rotate(0deg);"
    };

    html! {
        <section id="contact" class="contact">
            <div class="container contact-inner">
                <div class="contact-header">
                    <div class="section-label">{"06. Contact"}</div>
                    <h3 class="section-title">{"Ready for your "}<span class="accent">{"close-up?"}</span></h3>
                    <p class="contact-lede">{"Tell us about the project. We reply within a day."}</p>
                </div>
                <div class="clapperboard">
                    <div class="clapper-top" style={clapper_style}>
                        <div class="clapper-stripes"></div>
                    </div>
                    <div class="clapper-body">
                        {
                            if form.phase == ContactPhase::Success {
                                html! {
                                    <div class="contact-success">
                                        <div class="success-icon">{"🎬"}</div>
                                        <h4>{"That's a wrap!"}</h4>
                                        <p>{"Your script is in. We'll be in touch shortly."}</p>
                                        <button class="send-another" onclick={send_another}>{"Send another script"}</button>
                                    </div>
                                }
                            } else {
                                html! {
                                    <form class="contact-form" onsubmit={onsubmit}>
                                        <div class="form-row">
                                            <label>
                                                <span>{"Director (Name)"}</span>
                                                <input
                                                    type="text"
                                                    placeholder="John Doe"
                                                    value={draft.director_name.clone()}
                                                    oninput={on_name}
                                                    required={true}
                                                />
                                            </label>
                                            <label>
                                                <span>{"Email"}</span>
                                                <input
                                                    type="email"
                                                    placeholder="john@studio.com"
                                                    value={draft.email.clone()}
                                                    oninput={on_email}
                                                    required={true}
                                                />
                                            </label>
                                        </div>
                                        <div class="form-row">
                                            <label>
                                                <span>{"Project Type"}</span>
                                                <select onchange={on_project_type}>
                                                    { for PROJECT_TYPES.iter().map(|kind| html! {
                                                        <option key={*kind} value={*kind} selected={draft.project_type == *kind}>{*kind}</option>
                                                    }) }
                                                </select>
                                            </label>
                                            <label>
                                                <span>{"Mobile Number"}</span>
                                                <input
                                                    type="tel"
                                                    placeholder="+91 98765 43210"
                                                    value={draft.mobile_number.clone()}
                                                    oninput={on_mobile}
                                                    required={true}
                                                />
                                            </label>
                                        </div>
                                        <label>
                                            <span>{"The Vision (Notes)"}</span>
                                            <textarea
                                                rows="4"
                                                placeholder="Describe the vibe, references, deadlines..."
                                                value={draft.notes.clone()}
                                                oninput={on_notes}
                                            />
                                        </label>
                                        if let Some(message) = (*validation).clone() {
                                            <p class="form-error">{message}</p>
                                        }
                                        <button type="submit" class="roll-camera" disabled={form.is_busy()}>
                                            { if form.is_busy() { "Rolling..." } else { "🎬 Roll Camera" } }
                                        </button>
                                    </form>
                                }
                            }
                        }
                        <div class="clapper-watermark">{"SCENE 01 / TAKE 01"}</div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact {
                    padding: 6rem 0;
                    background: #020205;
                }
                .contact-inner {
                    display: grid;
                    grid-template-columns: 1fr 1.4fr;
                    gap: 4rem;
                    align-items: center;
                }
                .contact-header .accent { color: #3b82f6; }
                .contact-lede { color: #9ca3af; }
                .clapperboard { position: relative; }
                .clapper-top {
                    height: 48px;
                    background: #111;
                    border: 2px solid #fff;
                    transform-origin: left bottom;
                    transition: transform 0.4s cubic-bezier(0.6, -0.3, 0.7, 1.4);
                    overflow: hidden;
                }
                .clapper-stripes {
                    width: 100%;
                    height: 100%;
                    background: repeating-linear-gradient(-45deg, #fff 0 24px, #111 24px 48px);
                }
                .clapper-body {
                    position: relative;
                    padding: 2rem;
                    background: #0b0b12;
                    border: 2px solid #fff;
                    border-top: none;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                }
                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    font-family: monospace;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #9ca3af;
                }
                .contact-form input, .contact-form select, .contact-form textarea {
                    padding: 0.75rem;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #fff;
                    font-size: 1rem;
                }
                .contact-form input:focus, .contact-form select:focus, .contact-form textarea:focus {
                    outline: none;
                    border-color: #3b82f6;
                }
                .form-error {
                    color: #f87171;
                    font-size: 0.85rem;
                }
                .roll-camera, .send-another {
                    padding: 1rem;
                    border: none;
                    background: #3b82f6;
                    color: #fff;
                    font-weight: bold;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .roll-camera:hover, .send-another:hover { background: #2563eb; }
                .roll-camera:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .contact-success {
                    text-align: center;
                    padding: 3rem 0;
                    animation: fadeInUp 0.5s ease;
                }
                .success-icon { font-size: 3rem; }
                .clapper-watermark {
                    position: absolute;
                    right: 1rem;
                    bottom: 0.5rem;
                    font-family: monospace;
                    font-size: 0.65rem;
                    color: rgba(255, 255, 255, 0.15);
                    letter-spacing: 0.2em;
                    pointer-events: none;
                }
                @media (max-width: 768px) {
                    .contact { padding: 4rem 0; }
                    .contact-inner { grid-template-columns: 1fr; gap: 2rem; }
                    .form-row { grid-template-columns: 1fr; }
                    .clapper-body { padding: 1.25rem; }
                }
                "#}
            </style>
        </section>
    }
}
