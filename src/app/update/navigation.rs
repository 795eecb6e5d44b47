use super::super::state::{App, viewport_width_px};
use super::Effect;
use sitedeck_core::{SliderKind, Transition};
use tracing::{debug, info};

/// Track drift, in pixels, tolerated before the track is moved back.
const TRACK_SNAP_TOLERANCE: f32 = 1.0;

impl App {
    pub(super) fn handle_previous(&mut self, kind: SliderKind, effects: &mut Vec<Effect>) {
        if let Some(carousel) = self.carousels.get_mut(&kind) {
            let transition = carousel.previous();
            Self::snap_if_moved(kind, transition, effects);
        }
    }

    pub(super) fn handle_next(&mut self, kind: SliderKind, effects: &mut Vec<Effect>) {
        if let Some(carousel) = self.carousels.get_mut(&kind) {
            let transition = carousel.next();
            Self::snap_if_moved(kind, transition, effects);
        }
    }

    pub(super) fn handle_go_to(&mut self, kind: SliderKind, index: usize, effects: &mut Vec<Effect>) {
        if let Some(carousel) = self.carousels.get_mut(&kind) {
            let transition = carousel.go_to(i64::try_from(index).unwrap_or(i64::MAX));
            Self::snap_if_moved(kind, transition, effects);
        }
    }

    pub(super) fn handle_auto_advance(
        &mut self,
        kind: SliderKind,
        generation: u64,
        effects: &mut Vec<Effect>,
    ) {
        if let Some(carousel) = self.carousels.get_mut(&kind) {
            let transition = carousel.tick_from(generation);
            Self::snap_if_moved(kind, transition, effects);
        }
    }

    pub(super) fn handle_window_resized(
        &mut self,
        width: f32,
        height: f32,
        effects: &mut Vec<Effect>,
    ) {
        self.window_width = width;
        self.viewport_height = height;
        let width_px = viewport_width_px(width);
        for (kind, carousel) in self.carousels.iter_mut() {
            let before = carousel.items_per_view();
            let transition = carousel.set_viewport_width(width_px);
            // A new per-view count moves the track even when the index stays.
            if transition.index_changed() || carousel.items_per_view() != before {
                effects.push(Effect::SnapTrack(*kind));
            }
        }
        self.scroll_offset_y = self.scroll_offset_y.min(self.max_scroll_offset());
        self.refresh_visibility();
        debug!(width, height, "Window resized");
    }

    pub(super) fn handle_page_scrolled(&mut self, offset_y: f32, viewport_height: f32) {
        self.scroll_offset_y = offset_y.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
        self.refresh_visibility();
    }

    /// Tracks follow the carousel index only; wheel and drag scrolling is undone.
    pub(super) fn handle_track_scrolled(
        &mut self,
        kind: SliderKind,
        offset_x: f32,
        effects: &mut Vec<Effect>,
    ) {
        let expected = self.track_offset_x(kind);
        if (offset_x - expected).abs() > TRACK_SNAP_TOLERANCE {
            debug!(slider = %kind, offset_x, expected, "Track drifted; snapping back");
            effects.push(Effect::SnapTrack(kind));
        }
    }

    pub(super) fn handle_jump_to_section(&mut self, kind: SliderKind, effects: &mut Vec<Effect>) {
        let target = self.section_top(kind).min(self.max_scroll_offset());
        info!(slider = %kind, offset = target, "Jumping to section");
        self.scroll_offset_y = target;
        self.refresh_visibility();
        effects.push(Effect::ScrollPageTo(target));
    }

    fn snap_if_moved(kind: SliderKind, transition: Transition, effects: &mut Vec<Effect>) {
        if transition.index_changed() {
            effects.push(Effect::SnapTrack(kind));
        }
    }
}
