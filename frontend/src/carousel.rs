use std::rc::Rc;

use yew::prelude::*;

use crate::circular;

/// Tuning for the reel carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselLayout {
    pub spacing_desktop: f64,
    pub spacing_mobile: f64,
    /// Cards further than this from the active one are not rendered.
    pub visible_radius: isize,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            spacing_desktop: 280.0,
            spacing_mobile: 60.0,
            visible_radius: 2,
        }
    }
}

/// Presentation transform for one card, derived from its ring distance to the active card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub distance: isize,
    pub active: bool,
    pub visible: bool,
    pub x_offset: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
    pub rotate_y: f64,
}

impl CardPose {
    pub fn style(&self) -> String {
        let filter = if self.active {
            "blur(0px)"
        } else {
            "blur(2px) grayscale(80%) brightness(0.5)"
        };
        format!(
            "transform: translateX({}px) scale({}) rotateY({}deg); opacity: {}; z-index: {}; filter: {}; display: {};",
            self.x_offset,
            self.scale,
            self.rotate_y,
            self.opacity,
            self.z_index,
            filter,
            if self.visible { "block" } else { "none" },
        )
    }
}

impl CarouselLayout {
    pub fn pose(&self, index: usize, active: usize, len: usize, is_mobile: bool) -> CardPose {
        let distance = circular::distance(index, active, len);
        let reach = distance.abs() as f64;
        let is_active = distance == 0;
        let spacing = if is_mobile { self.spacing_mobile } else { self.spacing_desktop };
        CardPose {
            distance,
            active: is_active,
            visible: distance.abs() <= self.visible_radius,
            x_offset: distance as f64 * spacing,
            scale: if is_active { 1.1 } else { (0.8 - reach * 0.1).max(0.5) },
            opacity: if is_active { 1.0 } else { (0.6 - reach * 0.2).max(0.0) },
            z_index: if is_active { 50 } else { 10 - distance.abs() as i32 },
            rotate_y: distance as f64 * -15.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardClick {
    OpenViewer(usize),
    Recenter(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReelCarouselState {
    pub len: usize,
    pub active: usize,
    /// Index shown in the full-screen viewer, when open.
    pub viewer: Option<usize>,
    /// Cleared whenever the viewer moves so the thumbnail covers the loading iframe.
    pub viewer_loaded: bool,
}

pub enum CarouselAction {
    Next,
    Prev,
    Select(usize),
    OpenViewer(usize),
    ViewerNext,
    ViewerPrev,
    ViewerLoaded,
    CloseViewer,
}

impl ReelCarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            viewer: None,
            viewer_loaded: false,
        }
    }

    pub fn click(&self, index: usize) -> CardClick {
        if index == self.active {
            CardClick::OpenViewer(index)
        } else {
            CardClick::Recenter(index)
        }
    }

    /// Only the centred card plays, and only while the section is on screen.
    pub fn should_play(&self, index: usize, section_visible: bool) -> bool {
        index == self.active && section_visible
    }

    fn move_viewer(&mut self, delta: isize) {
        if let Some(index) = self.viewer {
            self.viewer = Some(circular::step(index, delta, self.len));
            self.viewer_loaded = false;
        }
    }
}

impl Reducible for ReelCarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.active = circular::step(next.active, 1, next.len),
            CarouselAction::Prev => next.active = circular::step(next.active, -1, next.len),
            CarouselAction::Select(index) if index < next.len => next.active = index,
            CarouselAction::Select(_) => return self,
            CarouselAction::OpenViewer(index) if index < next.len => {
                next.viewer = Some(index);
                next.viewer_loaded = false;
            }
            CarouselAction::OpenViewer(_) => return self,
            CarouselAction::ViewerNext => next.move_viewer(1),
            CarouselAction::ViewerPrev => next.move_viewer(-1),
            CarouselAction::ViewerLoaded => next.viewer_loaded = true,
            CarouselAction::CloseViewer => {
                next.viewer = None;
                next.viewer_loaded = false;
            }
        }
        next.into()
    }
}

/// True once the observed intersection ratio reaches the playback threshold.
pub fn section_visible(ratio: f64, threshold: f64) -> bool {
    ratio >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REEL_VISIBILITY_RATIO;

    fn apply(state: ReelCarouselState, actions: Vec<CarouselAction>) -> Rc<ReelCarouselState> {
        actions
            .into_iter()
            .fold(Rc::new(state), |state, action| state.reduce(action))
    }

    #[test]
    fn active_card_pose() {
        let pose = CarouselLayout::default().pose(4, 4, 13, false);
        assert!(pose.active);
        assert_eq!(pose.x_offset, 0.0);
        assert_eq!(pose.scale, 1.1);
        assert_eq!(pose.opacity, 1.0);
        assert_eq!(pose.z_index, 50);
        assert!(pose.style().contains("blur(0px)"));
    }

    #[test]
    fn poses_fall_off_with_distance() {
        let layout = CarouselLayout::default();
        let near = layout.pose(1, 0, 13, false);
        let far = layout.pose(2, 0, 13, false);
        assert_eq!(near.x_offset, 280.0);
        assert!(near.scale > far.scale);
        assert!(near.opacity > far.opacity);
        assert!(near.z_index > far.z_index);
        assert_eq!(near.rotate_y, -15.0);

        let behind = layout.pose(12, 0, 13, true);
        assert_eq!(behind.distance, -1);
        assert_eq!(behind.x_offset, -60.0);
        assert!(behind.visible);

        let hidden = layout.pose(6, 0, 13, false);
        assert!(!hidden.visible);
        assert!(hidden.style().contains("display: none"));
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.scale, 0.5);
    }

    #[test]
    fn clicking_active_opens_viewer_else_recenters() {
        let state = ReelCarouselState::new(5);
        assert_eq!(state.click(0), CardClick::OpenViewer(0));
        assert_eq!(state.click(3), CardClick::Recenter(3));

        let state = apply(state, vec![CarouselAction::Select(3)]);
        assert_eq!(state.active, 3);
        assert_eq!(state.viewer, None);
        assert_eq!(state.click(3), CardClick::OpenViewer(3));
    }

    #[test]
    fn only_active_visible_card_plays() {
        let state = ReelCarouselState::new(5);
        assert!(state.should_play(0, true));
        assert!(!state.should_play(0, false));
        assert!(!state.should_play(1, true));
    }

    #[test]
    fn visibility_gate_uses_ratio_threshold() {
        assert!(!section_visible(0.39, REEL_VISIBILITY_RATIO));
        assert!(section_visible(0.4, REEL_VISIBILITY_RATIO));
        assert!(section_visible(1.0, REEL_VISIBILITY_RATIO));
    }

    #[test]
    fn carousel_buttons_wrap() {
        let state = apply(ReelCarouselState::new(5), vec![CarouselAction::Prev]);
        assert_eq!(state.active, 4);
        let state = apply((*state).clone(), vec![CarouselAction::Next, CarouselAction::Next]);
        assert_eq!(state.active, 1);
    }

    #[test]
    fn viewer_wraps_and_resets_load_state() {
        let state = apply(
            ReelCarouselState::new(5),
            vec![
                CarouselAction::OpenViewer(4),
                CarouselAction::ViewerLoaded,
                CarouselAction::ViewerNext,
            ],
        );
        assert_eq!(state.viewer, Some(0));
        assert!(!state.viewer_loaded);

        let state = apply((*state).clone(), vec![CarouselAction::ViewerPrev, CarouselAction::ViewerPrev]);
        assert_eq!(state.viewer, Some(3));

        let state = apply((*state).clone(), vec![CarouselAction::CloseViewer]);
        assert_eq!(state.viewer, None);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let state = apply(ReelCarouselState::new(3), vec![CarouselAction::Select(7), CarouselAction::OpenViewer(9)]);
        assert_eq!(state.active, 0);
        assert_eq!(state.viewer, None);
    }
}
