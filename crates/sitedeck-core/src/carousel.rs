//! Carousel controller shared by every slider on the site.
//!
//! Owns the first visible index and the per-view count and keeps
//! `0 <= current_index <= max_index` after every operation. Manual
//! navigation clamps at the ends; the auto-advance tick wraps back to the
//! start. No operation can fail: out-of-range input is clamped.

use crate::autoplay::{AutoAdvance, TimerSchedule};
use crate::breakpoints::BreakpointTable;
use crate::track;
use crate::visibility::VisibilityLatch;
use tracing::debug;

/// What an operation did to `current_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Moved { from: usize, to: usize },
    /// Auto-advance went past the last page and restarted at 0.
    Wrapped { from: usize },
    /// The bound shrank under the index.
    Reclamped { from: usize, to: usize },
}

impl Transition {
    pub fn index_changed(&self) -> bool {
        !matches!(self, Transition::Unchanged)
    }
}

#[derive(Debug, Clone)]
pub struct Carousel<T> {
    label: &'static str,
    items: Vec<T>,
    table: BreakpointTable,
    items_per_view: usize,
    current_index: usize,
    visibility: VisibilityLatch,
    autoplay: AutoAdvance,
    destroyed: bool,
}

impl<T> Carousel<T> {
    /// Mount an empty carousel. If the latch is already closed the timer is
    /// armed immediately.
    pub fn new(table: BreakpointTable, autoplay: AutoAdvance, visibility: VisibilityLatch) -> Self {
        let items_per_view = table.base();
        let mut carousel = Self {
            label: "carousel",
            items: Vec::new(),
            table,
            items_per_view,
            current_index: 0,
            visibility,
            autoplay,
            destroyed: false,
        };
        if carousel.visibility.is_seen() {
            carousel.autoplay.arm();
        }
        carousel
    }

    /// Name used in log events.
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn max_index(&self) -> usize {
        Self::bound(self.items.len(), self.items_per_view)
    }

    pub fn can_slide(&self) -> bool {
        self.items.len() > self.items_per_view
    }

    pub fn can_go_previous(&self) -> bool {
        self.can_slide() && self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.can_slide() && self.current_index < self.max_index()
    }

    /// Number of pagination dots.
    pub fn page_count(&self) -> usize {
        self.max_index() + 1
    }

    pub fn auto_advance_enabled(&self) -> bool {
        self.autoplay.is_armed()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Items currently in the window, at most `items_per_view` of them.
    pub fn visible_items(&self) -> &[T] {
        let start = self.current_index.min(self.items.len());
        let end = (start + self.items_per_view).min(self.items.len());
        &self.items[start..end]
    }

    /// Track offset in percent of the track width.
    pub fn render_offset(&self) -> f32 {
        track::render_offset(self.current_index, self.items_per_view)
    }

    /// The timer the host should be running right now, if any.
    pub fn schedule(&self) -> Option<TimerSchedule> {
        if self.can_slide() {
            self.autoplay.schedule()
        } else {
            None
        }
    }

    pub fn set_viewport_width(&mut self, width: u32) -> Transition {
        let items_per_view = self.table.items_for_width(width);
        if items_per_view == self.items_per_view {
            return Transition::Unchanged;
        }
        debug!(
            carousel = self.label,
            width,
            from = self.items_per_view,
            to = items_per_view,
            "Items per view changed"
        );
        let old_max = self.max_index();
        self.items_per_view = items_per_view;
        self.reclamp(old_max)
    }

    pub fn set_items(&mut self, items: Vec<T>) -> Transition {
        let old_max = self.max_index();
        self.items = items;
        debug!(
            carousel = self.label,
            len = self.items.len(),
            max_index = self.max_index(),
            "Replaced carousel items"
        );
        self.reclamp(old_max)
    }

    pub fn next(&mut self) -> Transition {
        if !self.can_slide() {
            return Transition::Unchanged;
        }
        let to = (self.current_index + 1).min(self.max_index());
        self.move_to(to)
    }

    pub fn previous(&mut self) -> Transition {
        if !self.can_slide() {
            return Transition::Unchanged;
        }
        let to = self.current_index.saturating_sub(1);
        self.move_to(to)
    }

    /// Jump to `index`, clamped into `0..=max_index`.
    pub fn go_to(&mut self, index: i64) -> Transition {
        let target = if index <= 0 {
            0
        } else {
            usize::try_from(index).unwrap_or(usize::MAX)
        };
        let to = target.min(self.max_index());
        self.move_to(to)
    }

    /// One auto-advance step: forward, wrapping to 0 after the last page.
    pub fn tick(&mut self) -> Transition {
        if !self.auto_advance_enabled() || !self.can_slide() {
            return Transition::Unchanged;
        }
        let from = self.current_index;
        if from >= self.max_index() {
            self.current_index = 0;
            debug!(carousel = self.label, from, "Auto-advance wrapped");
            Transition::Wrapped { from }
        } else {
            self.move_to(from + 1)
        }
    }

    /// `tick` for a timer of the given generation; stale timers are ignored.
    pub fn tick_from(&mut self, generation: u64) -> Transition {
        if !self.autoplay.accepts(generation) {
            debug!(
                carousel = self.label,
                generation,
                live = ?self.autoplay.generation(),
                "Ignoring tick from a retired timer"
            );
            return Transition::Unchanged;
        }
        self.tick()
    }

    /// Feed the visible share of the carousel. Returns true when this
    /// observation armed the timer.
    pub fn observe_visibility(&mut self, fraction: f32) -> bool {
        if self.destroyed || !self.visibility.observe(fraction) {
            return false;
        }
        let armed = self.autoplay.arm();
        if armed {
            debug!(
                carousel = self.label,
                fraction,
                interval_ms = self.autoplay.interval().as_millis() as u64,
                "Carousel scrolled into view; auto-advance armed"
            );
        }
        armed
    }

    /// Unmount: stop the timer and release the visibility observer.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.autoplay.cancel();
        self.visibility.detach();
        debug!(carousel = self.label, "Carousel destroyed");
    }

    fn move_to(&mut self, to: usize) -> Transition {
        let from = self.current_index;
        if from == to {
            return Transition::Unchanged;
        }
        self.current_index = to;
        debug!(carousel = self.label, from, to, "Carousel moved");
        Transition::Moved { from, to }
    }

    fn reclamp(&mut self, old_max: usize) -> Transition {
        let max_index = self.max_index();
        if max_index != old_max {
            self.autoplay.restart();
        }
        let from = self.current_index;
        if from <= max_index {
            return Transition::Unchanged;
        }
        self.current_index = max_index;
        debug!(
            carousel = self.label,
            from,
            to = max_index,
            "Reclamped carousel index"
        );
        Transition::Reclamped {
            from,
            to: max_index,
        }
    }

    fn bound(len: usize, items_per_view: usize) -> usize {
        len.saturating_sub(items_per_view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoints::Breakpoint;
    use std::time::Duration;

    /// 1 below 768, 2 from 768, 3 from 1024, 5 from 1280.
    fn table() -> BreakpointTable {
        BreakpointTable::new(
            1,
            [
                Breakpoint::new(768, 2),
                Breakpoint::new(1024, 3),
                Breakpoint::new(1280, 5),
            ],
        )
    }

    fn carousel(len: usize, width: u32) -> Carousel<usize> {
        let mut carousel = Carousel::new(
            table(),
            AutoAdvance::new(Duration::from_secs(4)),
            VisibilityLatch::default(),
        );
        carousel.set_viewport_width(width);
        carousel.set_items((0..len).collect());
        carousel
    }

    #[test]
    fn max_index_follows_len_and_per_view() {
        for len in 0..12 {
            for width in [320, 800, 1100, 1400] {
                let c = carousel(len, width);
                let per_view = c.items_per_view();
                assert!(per_view >= 1);
                assert_eq!(c.max_index(), len.saturating_sub(per_view));
                assert_eq!(c.can_slide(), len > per_view);
            }
        }
    }

    #[test]
    fn next_never_passes_max_or_decreases() {
        let mut c = carousel(8, 1100);
        let mut last = c.current_index();
        for _ in 0..20 {
            c.next();
            assert!(c.current_index() >= last);
            assert!(c.current_index() <= c.max_index());
            last = c.current_index();
        }
        assert_eq!(c.current_index(), c.max_index());
    }

    #[test]
    fn previous_never_goes_below_zero_or_increases() {
        let mut c = carousel(8, 1100);
        c.go_to(5);
        let mut last = c.current_index();
        for _ in 0..20 {
            c.previous();
            assert!(c.current_index() <= last);
            last = c.current_index();
        }
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.previous(), Transition::Unchanged);
    }

    #[test]
    fn go_to_clamps_any_input() {
        let mut c = carousel(8, 1100);
        for (input, expected) in [(-7, 0), (0, 0), (2, 2), (5, 5), (6, 5), (i64::MAX, 5)] {
            c.go_to(input);
            assert_eq!(c.current_index(), expected, "go_to({input})");
        }
        c.go_to(i64::MIN);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn tick_wraps_at_max_and_steps_otherwise() {
        let mut c = carousel(8, 1100);
        assert!(c.observe_visibility(1.0));
        c.go_to(2);
        assert_eq!(c.tick(), Transition::Moved { from: 2, to: 3 });
        c.go_to(5);
        assert_eq!(c.tick(), Transition::Wrapped { from: 5 });
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn eight_items_five_per_view_clamps_manually_and_wraps_on_tick() {
        let mut c = carousel(8, 1440);
        assert_eq!(c.items_per_view(), 5);
        assert_eq!(c.max_index(), 3);
        c.observe_visibility(1.0);

        c.go_to(10);
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.next(), Transition::Unchanged);
        assert_eq!(c.current_index(), 3);
        c.tick();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn fewer_items_than_view_pins_at_zero() {
        let mut c = carousel(3, 1440);
        c.observe_visibility(1.0);
        assert_eq!(c.max_index(), 0);
        assert!(!c.can_slide());
        assert!(!c.can_go_next());
        assert!(!c.can_go_previous());
        assert_eq!(c.next(), Transition::Unchanged);
        assert_eq!(c.previous(), Transition::Unchanged);
        assert_eq!(c.tick(), Transition::Unchanged);
        assert_eq!(c.current_index(), 0);
        assert!(c.schedule().is_none());
    }

    #[test]
    fn empty_carousel_tolerates_every_operation() {
        let mut c = carousel(0, 800);
        c.observe_visibility(1.0);
        c.next();
        c.previous();
        c.go_to(4);
        c.go_to(-4);
        c.tick();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.max_index(), 0);
        assert!(!c.can_slide());
        assert!(c.visible_items().is_empty());
        assert_eq!(c.page_count(), 1);
        assert_eq!(c.render_offset(), 0.0);
    }

    #[test]
    fn growing_per_view_is_not_raised_back() {
        // 6 items at 3 per view, sitting at max; dropping to 2 per view
        // raises the bound but must leave the index where it was.
        let mut c = carousel(6, 1100);
        c.go_to(3);
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.set_viewport_width(800), Transition::Unchanged);
        assert_eq!(c.items_per_view(), 2);
        assert_eq!(c.max_index(), 4);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn shrinking_bound_reclamps_immediately() {
        let mut c = carousel(6, 320);
        c.go_to(5);
        assert_eq!(
            c.set_viewport_width(1440),
            Transition::Reclamped { from: 5, to: 1 }
        );
        assert_eq!(c.current_index(), 1);

        assert_eq!(c.set_items(vec![0, 1]), Transition::Reclamped { from: 1, to: 0 });
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn items_replacement_keeps_a_valid_index() {
        let mut c = carousel(4, 800);
        c.go_to(2);
        c.set_items((0..10).collect());
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn auto_advance_sequence_wraps_after_max() {
        let mut c = carousel(6, 1100);
        assert_eq!(c.items_per_view(), 3);
        c.observe_visibility(0.5);

        let seen: Vec<usize> = (0..4)
            .map(|_| {
                c.tick();
                c.current_index()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 3, 0]);
    }

    #[test]
    fn tick_is_inert_until_seen() {
        let mut c = carousel(6, 1100);
        assert!(!c.auto_advance_enabled());
        assert_eq!(c.tick(), Transition::Unchanged);
        assert!(!c.observe_visibility(0.1));
        assert!(c.observe_visibility(0.3));
        assert!(!c.observe_visibility(0.0));
        assert!(c.auto_advance_enabled());
    }

    #[test]
    fn bound_change_retires_the_running_timer() {
        let mut c = carousel(6, 1100);
        c.observe_visibility(1.0);
        let first = c.schedule().expect("armed").generation;

        c.set_viewport_width(1100);
        assert_eq!(c.schedule().map(|s| s.generation), Some(first));

        c.set_items((0..9).collect());
        let second = c.schedule().expect("still armed").generation;
        assert_ne!(first, second);
        assert_eq!(c.tick_from(first), Transition::Unchanged);
        assert_eq!(c.tick_from(second), Transition::Moved { from: 0, to: 1 });
    }

    #[test]
    fn destroy_stops_ticks_and_observation() {
        let mut c = carousel(6, 1100);
        c.observe_visibility(1.0);
        let generation = c.schedule().expect("armed").generation;
        c.destroy();
        assert!(c.is_destroyed());
        assert!(c.schedule().is_none());
        assert_eq!(c.tick_from(generation), Transition::Unchanged);
        assert_eq!(c.tick(), Transition::Unchanged);
        assert!(!c.observe_visibility(1.0));
    }

    #[test]
    fn pre_seen_latch_arms_on_mount() {
        let mut c: Carousel<usize> = Carousel::new(
            BreakpointTable::single(),
            AutoAdvance::new(Duration::from_secs(5)),
            VisibilityLatch::seen(),
        );
        assert!(c.auto_advance_enabled());
        assert!(c.schedule().is_none());
        c.set_items(vec![10, 20, 30]);
        assert!(c.schedule().is_some());
        c.tick();
        c.tick();
        c.tick();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn visible_window_and_offset_follow_index() {
        let mut c = carousel(7, 1100);
        c.go_to(2);
        assert_eq!(c.visible_items(), &[2, 3, 4]);
        assert!((c.render_offset() + 66.666_67).abs() < 1e-3);
        assert_eq!(c.page_count(), 5);
        assert!(c.can_go_previous());
        assert!(c.can_go_next());
    }
}
