use yew::prelude::*;
use yew_hooks::prelude::*;
use log::{debug, info};
use web_sys::{KeyboardEvent, MouseEvent};

use crate::config;
use crate::gallery::{ClickOutcome, Gallery, GalleryAction, GalleryView};
use crate::media::high_res_thumbnail;
use crate::modal::{use_modals, ModalLayer};
use crate::models::Project;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub selected_category: Option<String>,
    pub on_clear_filter: Callback<()>,
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            debug!("popup blocked for {}", url);
        }
    }
}

fn thumb_badge(project: &Project) -> Html {
    if !project.is_video() {
        return html! {};
    }
    html! {
        <div class="thumb-badge">
            <span>{ if project.external_link.is_some() { "↗" } else { "▶" } }</span>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let gallery = {
        let initial = props.selected_category.clone();
        use_reducer(move || Gallery::new(initial))
    };
    let modals = use_modals();
    let (width, _) = use_window_size();
    let is_mobile = config::is_mobile_width(width);

    // Follow the category chosen in the services list.
    {
        let gallery = gallery.clone();
        use_effect_with_deps(
            move |category: &Option<String>| {
                gallery.dispatch(GalleryAction::SelectCategory(category.clone()));
                || ()
            },
            props.selected_category.clone(),
        );
    }

    // The lightbox layer was popped (back, Escape or close): drop the focus.
    let layer_open = modals.stack.is_open(ModalLayer::Portfolio);
    {
        let gallery = gallery.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if !*open && gallery.focused.is_some() {
                    gallery.dispatch(GalleryAction::Close);
                }
                || ()
            },
            layer_open,
        );
    }

    {
        let gallery = gallery.clone();
        let modals = modals.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !modals.stack.is_top(ModalLayer::Portfolio) {
                return;
            }
            match e.key().as_str() {
                "ArrowRight" => gallery.dispatch(GalleryAction::Next),
                "ArrowLeft" => gallery.dispatch(GalleryAction::Prev),
                _ => {}
            }
        });
    }

    let open_project = {
        let gallery = gallery.clone();
        let modals = modals.clone();
        move |project: &'static Project| {
            let gallery = gallery.clone();
            let modals = modals.clone();
            Callback::from(move |_: MouseEvent| match gallery.click(project) {
                ClickOutcome::OpenExternal(url) => {
                    info!("Opening {} externally", project.title);
                    open_in_new_tab(url);
                }
                ClickOutcome::OpenViewer(id) => {
                    gallery.dispatch(GalleryAction::Focus(id));
                    modals.open(ModalLayer::Portfolio);
                }
            })
        }
    };

    let nav_button = |action: fn() -> GalleryAction| {
        let gallery = gallery.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            gallery.dispatch(action());
        })
    };

    let close_viewer = {
        let modals = modals.clone();
        Callback::from(move |_: MouseEvent| modals.close())
    };

    let clear_filter = {
        let on_clear_filter = props.on_clear_filter.clone();
        Callback::from(move |_: MouseEvent| on_clear_filter.emit(()))
    };

    let projects = gallery.projects();
    let category = gallery.category.clone();

    let header = html! {
        <div class="container portfolio-header">
            <div>
                <div class="portfolio-label-row">
                    <div class="section-label">{"03. Our Recent Works"}</div>
                    if category.is_some() {
                        <span class="filtered-chip">{"FILTERED"}</span>
                    }
                </div>
                <div class="portfolio-title-row">
                    if category.is_some() {
                        <button class="clear-filter" onclick={clear_filter} aria-label="Back to film roll">{"←"}</button>
                    }
                    <h3 class="section-title">
                        {
                            match &category {
                                Some(category) => html! { <span class="library-title">{format!("{} Library", category)}</span> },
                                None => html! { <><span class="reel-icon">{"🎞"}</span>{" The Film Roll"}</> },
                            }
                        }
                    </h3>
                </div>
            </div>
            <div class="portfolio-status">
                <div class="rec">{"● REC"}</div>
                <p>
                    {
                        if category.is_some() {
                            format!("{} CLIPS FOUND", projects.len())
                        } else {
                            "Hover to Pause / Click to View".to_string()
                        }
                    }
                </p>
            </div>
        </div>
    };

    let content = match gallery.view(is_mobile) {
        GalleryView::Slider => {
            let slide = gallery.current_slide();
            let slide_class = match gallery.slide_direction {
                d if d > 0 => "slide slide-from-right",
                d if d < 0 => "slide slide-from-left",
                _ => "slide",
            };
            html! {
                <div class="container slider">
                    <button class="slider-nav prev" onclick={nav_button(|| GalleryAction::SlidePrev)}>{"‹"}</button>
                    <div class="slider-window">
                        {
                            if let Some(project) = slide {
                                html! {
                                    <div key={gallery.slide_index} class={slide_class} onclick={open_project(project)}>
                                        <img src={project.thumbnail} alt={project.title} />
                                        { thumb_badge(project) }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <button class="slider-nav next" onclick={nav_button(|| GalleryAction::SlideNext)}>{"›"}</button>
                </div>
            }
        }
        GalleryView::Grid => html! {
            <div class="container grid-view">
                <div class="project-grid">
                    { for projects.iter().copied().map(|project| html! {
                        <div key={project.id} class="project-tile" onclick={open_project(project)}>
                            <img src={project.thumbnail} alt={project.title} style={format!("aspect-ratio: {};", project.aspect_ratio.css_value())} />
                            { thumb_badge(project) }
                        </div>
                    }) }
                </div>
                if let Some(notice) = gallery.empty_message() {
                    <div class="empty-library">{notice}</div>
                }
            </div>
        },
        GalleryView::FilmRoll => html! {
            <div class="film-strip">
                <div class="film-holes top"></div>
                <div class="film-track">
                    { for gallery.film_roll().into_iter().enumerate().map(|(i, project)| html! {
                        <div key={format!("{}-{}", project.id, i)} class="film-frame" onclick={open_project(project)}>
                            <img src={project.thumbnail} alt={project.title} />
                        </div>
                    }) }
                </div>
                <div class="film-holes bottom"></div>
                <div class="film-vignette left"></div>
                <div class="film-vignette right"></div>
            </div>
        },
    };

    let viewer = match gallery.focused_project() {
        Some(project) if layer_open => {
            let play = {
                let gallery = gallery.clone();
                Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Play))
            };
            let media = match (gallery.playing, project.video_url) {
                (true, Some(src)) => html! {
                    <video src={src} controls={true} autoplay={true} class="viewer-media" />
                },
                _ => html! {
                    <div class="viewer-still" onclick={play}>
                        <img src={high_res_thumbnail(project)} alt={project.title} class="viewer-media" />
                        if project.video_url.is_some() {
                            <div class="viewer-play">{"▶"}</div>
                        }
                    </div>
                },
            };
            html! {
                <div class="viewer">
                    <div class="viewer-backdrop" onclick={close_viewer.clone()}></div>
                    if projects.len() > 1 {
                        <>
                            <button class="viewer-nav prev" onclick={nav_button(|| GalleryAction::Prev)}>{"‹"}</button>
                            <button class="viewer-nav next" onclick={nav_button(|| GalleryAction::Next)}>{"›"}</button>
                        </>
                    }
                    <button class="viewer-close" onclick={close_viewer} aria-label="Close media viewer">
                        {"✕ Close"}
                    </button>
                    <div class="viewer-stage">{ media }</div>
                </div>
            }
        }
        _ => html! {},
    };

    html! {
        <section id="portfolio" class="portfolio">
            { header }
            { content }
            { viewer }
            <style>
                {r#"
                .portfolio {
                    position: relative;
                    padding: 6rem 0;
                    min-height: 80vh;
                    background: #020205;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    overflow: hidden;
                }
                .portfolio-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }
                .portfolio-label-row, .portfolio-title-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .filtered-chip {
                    font-family: monospace;
                    font-size: 0.7rem;
                    color: #6b7280;
                    background: rgba(255, 255, 255, 0.05);
                    padding: 0.1rem 0.5rem;
                    border-radius: 4px;
                }
                .clear-filter {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: transparent;
                    color: #fff;
                    cursor: pointer;
                }
                .clear-filter:hover { border-color: #3b82f6; color: #3b82f6; }
                .library-title { color: #3b82f6; }
                .reel-icon {
                    display: inline-block;
                    animation: spin 8s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .portfolio-status { text-align: right; }
                .portfolio-status .rec {
                    font-family: monospace;
                    font-size: 0.75rem;
                    color: #3b82f6;
                    animation: pulse 2s infinite;
                }
                @keyframes pulse { 50% { opacity: 0.4; } }
                .portfolio-status p {
                    font-family: monospace;
                    font-size: 0.75rem;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    animation: fadeInUp 0.5s ease;
                }
                .project-tile, .slide {
                    position: relative;
                    cursor: pointer;
                    overflow: hidden;
                    border-radius: 6px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
                    transition: transform 0.3s ease;
                }
                .project-tile:hover { transform: scale(1.02); }
                .project-tile img {
                    width: 100%;
                    height: auto;
                    object-fit: cover;
                    display: block;
                }
                .thumb-badge {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                    pointer-events: none;
                }
                .project-tile:hover .thumb-badge, .slide:hover .thumb-badge { opacity: 1; }
                .thumb-badge span {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: rgba(0, 0, 0, 0.6);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .empty-library {
                    text-align: center;
                    padding: 5rem 0;
                    color: #6b7280;
                    font-family: monospace;
                }
                .slider {
                    position: relative;
                    height: 45vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .slider-window {
                    position: relative;
                    width: 100%;
                    max-width: 70vw;
                    height: 100%;
                    overflow: hidden;
                }
                .slide {
                    position: absolute;
                    inset: 0;
                }
                .slide img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .slide-from-right { animation: slideFromRight 0.35s ease; }
                .slide-from-left { animation: slideFromLeft 0.35s ease; }
                @keyframes slideFromRight { from { transform: translateX(100%); opacity: 0; } }
                @keyframes slideFromLeft { from { transform: translateX(-100%); opacity: 0; } }
                .slider-nav {
                    position: absolute;
                    z-index: 20;
                    padding: 0.5rem 0.9rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .slider-nav.prev { left: 0; }
                .slider-nav.next { right: 0; }
                .film-strip {
                    position: relative;
                    background: #000;
                    border-top: 8px solid #1a1a1a;
                    border-bottom: 8px solid #1a1a1a;
                    padding: 2rem 0;
                }
                .film-holes {
                    position: absolute;
                    left: 0;
                    width: 100%;
                    height: 8px;
                    opacity: 0.5;
                    background: repeating-linear-gradient(90deg, transparent, transparent 12px, #020205 12px, #020205 24px);
                }
                .film-holes.top { top: -8px; }
                .film-holes.bottom { bottom: -8px; }
                .film-track {
                    display: flex;
                    width: max-content;
                    animation: scroll 60s linear infinite;
                }
                .film-strip:hover .film-track { animation-play-state: paused; }
                .film-frame {
                    position: relative;
                    width: 450px;
                    aspect-ratio: 16 / 9;
                    flex-shrink: 0;
                    margin: 0 1rem;
                    background: #111;
                    border-top: 12px solid #000;
                    border-bottom: 12px solid #000;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .film-frame:hover {
                    transform: scale(1.05);
                    z-index: 10;
                    border-color: rgba(59, 130, 246, 0.5);
                }
                .film-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.6;
                    filter: sepia(50%);
                    transition: all 0.5s ease;
                }
                .film-frame:hover img { opacity: 1; filter: none; }
                .film-vignette {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 6rem;
                    z-index: 10;
                    pointer-events: none;
                }
                .film-vignette.left { left: 0; background: linear-gradient(to right, #020205, transparent); }
                .film-vignette.right { right: 0; background: linear-gradient(to left, #020205, transparent); }
                .viewer {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .viewer-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.95);
                    backdrop-filter: blur(24px);
                    animation: fadeIn 0.3s ease;
                }
                @keyframes fadeIn { from { opacity: 0; } }
                .viewer-stage {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    justify-content: center;
                    animation: fadeInUp 0.3s ease;
                }
                .viewer-still { position: relative; }
                .viewer-media {
                    max-height: 90vh;
                    max-width: 90vw;
                    object-fit: contain;
                    border-radius: 2px;
                }
                .viewer-play {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    cursor: pointer;
                    background: rgba(0, 0, 0, 0.2);
                }
                .viewer-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 70;
                    padding: 0.5rem 1rem;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                    font-size: 2rem;
                    cursor: pointer;
                }
                .viewer-nav:hover { background: #3b82f6; }
                .viewer-nav.prev { left: 2rem; }
                .viewer-nav.next { right: 2rem; }
                .viewer-close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    z-index: 70;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(0, 0, 0, 0.6);
                    color: #fff;
                    font-family: monospace;
                    cursor: pointer;
                }
                .viewer-close:hover { background: #ef4444; }
                @media (max-width: 1024px) {
                    .project-grid { grid-template-columns: repeat(3, 1fr); }
                }
                @media (max-width: 768px) {
                    .portfolio { padding: 4rem 0; min-height: 60vh; }
                    .portfolio-header { flex-direction: column; align-items: center; }
                    .portfolio-status { display: none; }
                    .project-grid { grid-template-columns: repeat(2, 1fr); gap: 1rem; }
                    .film-frame { width: 280px; margin: 0 0.5rem; }
                    .viewer-nav.prev { left: 0.5rem; }
                    .viewer-nav.next { right: 0.5rem; }
                }
                "#}
            </style>
        </section>
    }
}
