use std::rc::Rc;

use yew::prelude::*;

use crate::circular;
use crate::data::{self, PROJECTS};
use crate::models::Project;

/// What the grid shows while nothing is focused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryView {
    /// No category: endless strip of long-form work.
    FilmRoll,
    Grid,
    /// Category picked on a narrow screen: one slide at a time.
    Slider,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    OpenExternal(&'static str),
    OpenViewer(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Gallery {
    pub category: Option<String>,
    /// Project id shown in the lightbox, if any.
    pub focused: Option<u32>,
    pub playing: bool,
    pub slide_index: usize,
    /// +1 when the last slide move went forward, -1 backward.
    pub slide_direction: i8,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(None)
    }
}

pub enum GalleryAction {
    SelectCategory(Option<String>),
    Focus(u32),
    Next,
    Prev,
    Play,
    Close,
    SlideNext,
    SlidePrev,
}

pub const EMPTY_LIBRARY: &str = "No projects found in this category.";

/// Projects whose category equals `category` exactly, or the whole catalog when unset.
pub fn filter_projects<'a>(projects: &'a [Project], category: Option<&str>) -> Vec<&'a Project> {
    match category {
        Some(category) => projects.iter().filter(|p| p.category == category).collect(),
        None => projects.iter().collect(),
    }
}

impl Gallery {
    pub fn new(category: Option<String>) -> Self {
        Self {
            category,
            focused: None,
            playing: false,
            slide_index: 0,
            slide_direction: 0,
        }
    }

    pub fn projects(&self) -> Vec<&'static Project> {
        filter_projects(PROJECTS, self.category.as_deref())
    }

    pub fn view(&self, is_mobile: bool) -> GalleryView {
        match (&self.category, is_mobile) {
            (None, _) => GalleryView::FilmRoll,
            (Some(_), true) if !self.projects().is_empty() => GalleryView::Slider,
            (Some(_), _) => GalleryView::Grid,
        }
    }

    /// Long-form strip for the film roll, doubled so the marquee loops.
    pub fn film_roll(&self) -> Vec<&'static Project> {
        let roll: Vec<&'static Project> = data::long_form_projects().collect();
        roll.iter().chain(roll.iter()).copied().collect()
    }

    /// Inside a category library, items with an external link leave the page;
    /// from the film roll they still open in the lightbox.
    pub fn click(&self, project: &'static Project) -> ClickOutcome {
        match (project.external_link, &self.category) {
            (Some(link), Some(_)) => ClickOutcome::OpenExternal(link),
            _ => ClickOutcome::OpenViewer(project.id),
        }
    }

    /// Notice shown in place of the grid when the picked library has nothing in it.
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.category.is_some() && self.projects().is_empty()).then_some(EMPTY_LIBRARY)
    }

    pub fn focused_project(&self) -> Option<&'static Project> {
        let id = self.focused?;
        PROJECTS.iter().find(|p| p.id == id)
    }

    pub fn current_slide(&self) -> Option<&'static Project> {
        self.projects().get(self.slide_index).copied()
    }

    fn step_focus(&mut self, delta: isize) {
        let projects = self.projects();
        let Some(id) = self.focused else {
            return;
        };
        if let Some(pos) = projects.iter().position(|p| p.id == id) {
            let next = circular::step(pos, delta, projects.len());
            self.focused = Some(projects[next].id);
            self.playing = false;
        }
    }

    fn step_slide(&mut self, delta: isize) {
        let len = self.projects().len();
        self.slide_index = circular::step(self.slide_index, delta, len);
        self.slide_direction = if delta > 0 { 1 } else { -1 };
    }
}

impl Reducible for Gallery {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            GalleryAction::SelectCategory(category) => {
                next.category = category;
                next.slide_index = 0;
                next.slide_direction = 0;
            }
            GalleryAction::Focus(id) => {
                next.focused = Some(id);
                next.playing = false;
            }
            GalleryAction::Next => next.step_focus(1),
            GalleryAction::Prev => next.step_focus(-1),
            GalleryAction::Play => {
                next.playing = next.focused_project().map_or(false, |p| p.video_url.is_some());
            }
            GalleryAction::Close => {
                next.focused = None;
                next.playing = false;
            }
            GalleryAction::SlideNext => next.step_slide(1),
            GalleryAction::SlidePrev => next.step_slide(-1),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GRAPHIC_DESIGN, LONG_FORM, SHORT_FORM};

    fn apply(gallery: Gallery, actions: Vec<GalleryAction>) -> Rc<Gallery> {
        actions
            .into_iter()
            .fold(Rc::new(gallery), |state, action| state.reduce(action))
    }

    #[test]
    fn filter_matches_category_exactly() {
        for category in [LONG_FORM, GRAPHIC_DESIGN] {
            let filtered = filter_projects(PROJECTS, Some(category));
            let expected: Vec<u32> = PROJECTS
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id)
                .collect();
            assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), expected);
            assert!(!filtered.is_empty());
        }
        assert!(filter_projects(PROJECTS, Some("long form")).is_empty());
        assert_eq!(filter_projects(PROJECTS, None).len(), PROJECTS.len());
    }

    #[test]
    fn unmatched_category_is_empty_grid() {
        let gallery = Gallery::new(Some(SHORT_FORM.to_string()));
        assert!(gallery.projects().is_empty());
        // an empty library never uses the slider, even on mobile
        assert_eq!(gallery.view(true), GalleryView::Grid);
        assert_eq!(gallery.empty_message(), Some(EMPTY_LIBRARY));
    }

    #[test]
    fn populated_views_have_no_empty_notice() {
        assert_eq!(Gallery::new(None).empty_message(), None);
        assert_eq!(Gallery::new(Some(GRAPHIC_DESIGN.to_string())).empty_message(), None);
    }

    #[test]
    fn view_follows_category_and_width() {
        assert_eq!(Gallery::new(None).view(true), GalleryView::FilmRoll);
        let gd = Gallery::new(Some(GRAPHIC_DESIGN.to_string()));
        assert_eq!(gd.view(false), GalleryView::Grid);
        assert_eq!(gd.view(true), GalleryView::Slider);
    }

    #[test]
    fn external_link_leaves_page_only_inside_a_category() {
        let long_form = PROJECTS.iter().find(|p| p.category == LONG_FORM).unwrap();

        let roll = Gallery::new(None);
        assert_eq!(roll.click(long_form), ClickOutcome::OpenViewer(long_form.id));

        let library = Gallery::new(Some(LONG_FORM.to_string()));
        assert_eq!(
            library.click(long_form),
            ClickOutcome::OpenExternal(long_form.external_link.unwrap())
        );

        let poster = PROJECTS.iter().find(|p| p.category == GRAPHIC_DESIGN).unwrap();
        let design = Gallery::new(Some(GRAPHIC_DESIGN.to_string()));
        assert_eq!(design.click(poster), ClickOutcome::OpenViewer(poster.id));
    }

    #[test]
    fn lightbox_wraps_within_filtered_collection() {
        let gallery = Gallery::new(Some(GRAPHIC_DESIGN.to_string()));
        let items = gallery.projects();
        let first = items[0].id;
        let last = items[items.len() - 1].id;

        let state = apply(gallery.clone(), vec![GalleryAction::Focus(last), GalleryAction::Next]);
        assert_eq!(state.focused, Some(first));

        let state = apply(gallery, vec![GalleryAction::Focus(first), GalleryAction::Prev]);
        assert_eq!(state.focused, Some(last));
        assert!(state.focused_project().map_or(false, |p| p.category == GRAPHIC_DESIGN));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let gallery = Gallery::new(Some(LONG_FORM.to_string()));
        let n = gallery.projects().len();
        let start = gallery.projects()[3].id;
        let mut actions = vec![GalleryAction::Focus(start)];
        actions.extend((0..n).map(|_| GalleryAction::Next));
        assert_eq!(apply(gallery, actions).focused, Some(start));
    }

    #[test]
    fn category_change_resets_slide_index() {
        let gallery = Gallery::new(Some(GRAPHIC_DESIGN.to_string()));
        let state = apply(
            gallery,
            vec![
                GalleryAction::SlideNext,
                GalleryAction::SlideNext,
                GalleryAction::SelectCategory(Some(LONG_FORM.to_string())),
            ],
        );
        assert_eq!(state.slide_index, 0);
        assert_eq!(state.category.as_deref(), Some(LONG_FORM));
    }

    #[test]
    fn slider_wraps_backwards() {
        let gallery = Gallery::new(Some(LONG_FORM.to_string()));
        let n = gallery.projects().len();
        let state = apply(gallery, vec![GalleryAction::SlidePrev]);
        assert_eq!(state.slide_index, n - 1);
        assert_eq!(state.slide_direction, -1);
    }

    #[test]
    fn play_requires_a_direct_video() {
        let id = PROJECTS[0].id;
        let state = apply(Gallery::new(None), vec![GalleryAction::Focus(id), GalleryAction::Play]);
        assert!(!state.playing);
    }

    #[test]
    fn close_returns_to_browsing() {
        let id = PROJECTS[0].id;
        let state = apply(Gallery::new(None), vec![GalleryAction::Focus(id), GalleryAction::Close]);
        assert_eq!(state.focused, None);
    }

    #[test]
    fn film_roll_is_long_form_twice() {
        let roll = Gallery::new(None).film_roll();
        let n = data::long_form_projects().count();
        assert_eq!(roll.len(), n * 2);
        assert!(roll.iter().all(|p| p.category == LONG_FORM));
        assert_eq!(roll[0].id, roll[n].id);
    }
}
