use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;
use log::debug;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent};

use crate::carousel::{section_visible, CardClick, CarouselAction, CarouselLayout, ReelCarouselState};
use crate::config::{self, REEL_VISIBILITY_RATIO};
use crate::modal::{use_modals, ModalLayer};
use crate::models::{Reel, ReelSource};

#[derive(Properties, PartialEq)]
pub struct ReelCarouselProps {
    pub reels: Rc<Vec<Reel>>,
    #[prop_or_default]
    pub layout: CarouselLayout,
    pub heading: AttrValue,
}

/// Tracks whether at least `threshold` of the referenced element is on screen.
#[hook]
fn use_section_visible(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let callback = Closure::wrap(Box::new(move |entries: Array| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        visible.set(section_visible(entry.intersection_ratio(), threshold));
                    }
                }) as Box<dyn FnMut(Array)>);

                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(threshold));
                let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok();
                match (&observer, node.cast::<Element>()) {
                    (Some(observer), Some(element)) => observer.observe(&element),
                    _ => debug!("reel section visibility is not observable"),
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            node,
        );
    }
    *visible
}

fn card_media(reel: &Reel, playing: bool) -> Html {
    if !playing {
        return html! {
            <img src={reel.thumbnail.clone()} alt={reel.name.clone()} class="reel-media" />
        };
    }
    match (&reel.source, &reel.direct_url) {
        (ReelSource::Gdrive, Some(direct)) => html! {
            <video
                src={direct.clone()}
                poster={reel.thumbnail.clone()}
                class="reel-media"
                autoplay={true}
                muted={true}
                loop={true}
                playsinline={true}
            />
        },
        _ => html! {
            <iframe
                src={reel.embed_url.clone()}
                title={reel.name.clone()}
                class="reel-media reel-frame"
                allow="autoplay; encrypted-media"
            />
        },
    }
}

#[function_component(ReelCarousel)]
pub fn reel_carousel(props: &ReelCarouselProps) -> Html {
    let reels = props.reels.clone();
    let layout = props.layout;
    let carousel = {
        let len = reels.len();
        use_reducer(move || ReelCarouselState::new(len))
    };
    let modals = use_modals();
    let section_ref = use_node_ref();
    let visible = use_section_visible(section_ref.clone(), REEL_VISIBILITY_RATIO);
    let (width, _) = use_window_size();
    let is_mobile = config::is_mobile_width(width);

    let viewer_open = modals.stack.is_open(ModalLayer::ReelViewer);
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if !*open && carousel.viewer.is_some() {
                    carousel.dispatch(CarouselAction::CloseViewer);
                }
                || ()
            },
            viewer_open,
        );
    }

    {
        let carousel = carousel.clone();
        let modals = modals.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !modals.stack.is_top(ModalLayer::ReelViewer) {
                return;
            }
            match e.key().as_str() {
                "ArrowRight" | "ArrowDown" => carousel.dispatch(CarouselAction::ViewerNext),
                "ArrowLeft" | "ArrowUp" => carousel.dispatch(CarouselAction::ViewerPrev),
                _ => {}
            }
        });
    }

    let send = |action: fn() -> CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            carousel.dispatch(action());
        })
    };

    let card_click = |index: usize| {
        let carousel = carousel.clone();
        let modals = modals.clone();
        Callback::from(move |_: MouseEvent| match carousel.click(index) {
            CardClick::OpenViewer(index) => {
                carousel.dispatch(CarouselAction::OpenViewer(index));
                modals.open(ModalLayer::ReelViewer);
            }
            CardClick::Recenter(index) => carousel.dispatch(CarouselAction::Select(index)),
        })
    };

    let close_viewer = {
        let modals = modals.clone();
        Callback::from(move |_: MouseEvent| modals.close())
    };

    let viewer = match carousel.viewer.and_then(|index| reels.get(index)) {
        Some(reel) if viewer_open => {
            let loaded = {
                let carousel = carousel.clone();
                Callback::from(move |_: Event| carousel.dispatch(CarouselAction::ViewerLoaded))
            };
            html! {
                <div class="reel-viewer">
                    <div class="reel-viewer-backdrop" onclick={close_viewer.clone()}></div>
                    <button class="reel-viewer-close" onclick={close_viewer} aria-label="Close reel">{"✕"}</button>
                    <button class="reel-viewer-nav prev" onclick={send(|| CarouselAction::ViewerPrev)}>{"‹"}</button>
                    <div class="reel-viewer-stage">
                        <iframe
                            key={reel.id}
                            src={reel.embed_url.clone()}
                            title={reel.name.clone()}
                            allow="autoplay; encrypted-media; fullscreen"
                            allowfullscreen={true}
                            onload={loaded}
                        />
                        if !carousel.viewer_loaded {
                            <img class="reel-viewer-poster" src={reel.thumbnail.clone()} alt={reel.name.clone()} />
                        }
                        <div class="reel-viewer-caption">{reel.name.clone()}</div>
                    </div>
                    <button class="reel-viewer-nav next" onclick={send(|| CarouselAction::ViewerNext)}>{"›"}</button>
                </div>
            }
        }
        _ => html! {},
    };

    html! {
        <section id="client-reels" class="client-reels" ref={section_ref}>
            <div class="container reels-header">
                <div class="section-label">{props.heading.clone()}</div>
                <h3 class="section-title">{"Short Form That "}<span class="accent">{"Stops The Scroll"}</span></h3>
            </div>
            <div class="reel-stage">
                <button class="reel-nav prev" onclick={send(|| CarouselAction::Prev)} aria-label="Previous reel">{"‹"}</button>
                <div class="reel-track">
                    { for reels.iter().enumerate().map(|(index, reel)| {
                        let pose = layout.pose(index, carousel.active, reels.len(), is_mobile);
                        let playing = carousel.should_play(index, visible);
                        html! {
                            <div
                                key={reel.id}
                                class={classes!("reel-card", pose.active.then(|| "active"))}
                                style={pose.style()}
                                onclick={card_click(index)}
                            >
                                if pose.visible {
                                    { card_media(reel, playing) }
                                }
                                <div class="reel-card-name">{reel.name.clone()}</div>
                            </div>
                        }
                    }) }
                </div>
                <button class="reel-nav next" onclick={send(|| CarouselAction::Next)} aria-label="Next reel">{"›"}</button>
            </div>
            { viewer }
            <style>
                {r#"
                .client-reels {
                    position: relative;
                    padding: 6rem 0;
                    background: #020205;
                    overflow: hidden;
                }
                .reels-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .reels-header .accent { color: #3b82f6; }
                .reel-stage {
                    position: relative;
                    height: 560px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    perspective: 1200px;
                }
                .reel-track {
                    position: relative;
                    width: 280px;
                    height: 500px;
                    transform-style: preserve-3d;
                }
                .reel-card {
                    position: absolute;
                    inset: 0;
                    border-radius: 16px;
                    overflow: hidden;
                    background: #111;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    cursor: pointer;
                    transition: all 0.5s cubic-bezier(0.25, 0.8, 0.25, 1);
                }
                .reel-card.active {
                    border-color: rgba(59, 130, 246, 0.6);
                    box-shadow: 0 0 40px rgba(59, 130, 246, 0.3);
                }
                .reel-media {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border: none;
                }
                .reel-frame { pointer-events: none; }
                .reel-card-name {
                    position: absolute;
                    bottom: 0;
                    width: 100%;
                    padding: 1rem;
                    font-family: monospace;
                    font-size: 0.8rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.9), transparent);
                }
                .reel-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 60;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(0, 0, 0, 0.5);
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .reel-nav:hover { background: #3b82f6; }
                .reel-nav.prev { left: 2rem; }
                .reel-nav.next { right: 2rem; }
                .reel-viewer {
                    position: fixed;
                    inset: 0;
                    z-index: 80;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                }
                .reel-viewer-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.95);
                    backdrop-filter: blur(20px);
                }
                .reel-viewer-stage {
                    position: relative;
                    z-index: 10;
                    height: 85vh;
                    aspect-ratio: 9 / 16;
                    border-radius: 12px;
                    overflow: hidden;
                    background: #000;
                }
                .reel-viewer-stage iframe {
                    width: 100%;
                    height: 100%;
                    border: none;
                }
                .reel-viewer-poster {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    pointer-events: none;
                }
                .reel-viewer-caption {
                    position: absolute;
                    top: 0;
                    width: 100%;
                    padding: 1rem;
                    font-family: monospace;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.8), transparent);
                    pointer-events: none;
                }
                .reel-viewer-nav, .reel-viewer-close {
                    position: relative;
                    z-index: 10;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                    cursor: pointer;
                }
                .reel-viewer-nav {
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    font-size: 2rem;
                }
                .reel-viewer-nav:hover { background: #3b82f6; }
                .reel-viewer-close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                }
                .reel-viewer-close:hover { background: #ef4444; }
                @media (max-width: 768px) {
                    .client-reels { padding: 4rem 0; }
                    .reel-stage { height: 460px; }
                    .reel-track { width: 220px; height: 400px; }
                    .reel-nav.prev { left: 0.5rem; }
                    .reel-nav.next { right: 0.5rem; }
                    .reel-viewer { gap: 0; }
                    .reel-viewer-stage { height: 80vh; }
                    .reel-viewer-nav {
                        position: absolute;
                        bottom: 2rem;
                    }
                    .reel-viewer-nav.prev { left: 2rem; }
                    .reel-viewer-nav.next { right: 2rem; }
                }
                "#}
            </style>
        </section>
    }
}
