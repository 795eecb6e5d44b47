//! Pixel geometry for a slider track.
//!
//! Slides are laid out edge to edge with a fixed gap. With `k` slides per
//! view on a track `w` wide, each slide is `w/k - (k-1)·gap/k` and moving by
//! one slide shifts the track by `w/k + gap/k`.

/// Track offset in percent of track width for the slide at `current_index`.
pub fn render_offset(current_index: usize, items_per_view: usize) -> f32 {
    let per_view = items_per_view.max(1) as f32;
    -(current_index as f32 * 100.0 / per_view)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    track_width: f32,
    gap: f32,
    items_per_view: usize,
}

impl TrackGeometry {
    pub fn new(track_width: f32, gap: f32, items_per_view: usize) -> Self {
        Self {
            track_width: track_width.max(0.0),
            gap: gap.max(0.0),
            items_per_view: items_per_view.max(1),
        }
    }

    pub fn slide_width(&self) -> f32 {
        let k = self.items_per_view as f32;
        (self.track_width / k - (k - 1.0) * self.gap / k).max(0.0)
    }

    /// Horizontal translation of the track, negative toward the left.
    pub fn offset_px(&self, current_index: usize) -> f32 {
        let k = self.items_per_view as f32;
        let i = current_index as f32;
        render_offset(current_index, self.items_per_view) / 100.0 * self.track_width
            - i * self.gap / k
    }

    /// Full width of a track holding `len` slides.
    pub fn content_width(&self, len: usize) -> f32 {
        if len == 0 {
            return 0.0;
        }
        len as f32 * self.slide_width() + (len - 1) as f32 * self.gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn render_offset_is_percent_per_slide() {
        assert_eq!(render_offset(0, 3), 0.0);
        assert!(approx(render_offset(2, 4), -50.0));
        assert!(approx(render_offset(3, 5), -60.0));
        assert_eq!(render_offset(1, 0), -100.0);
    }

    #[test]
    fn slide_width_leaves_room_for_gaps() {
        let geometry = TrackGeometry::new(1000.0, 24.0, 5);
        assert!(approx(geometry.slide_width(), 180.8));
        assert!(approx(geometry.content_width(5), 1000.0));
    }

    #[test]
    fn offset_moves_one_slide_plus_gap_per_step() {
        let geometry = TrackGeometry::new(1000.0, 24.0, 4);
        let step = geometry.slide_width() + 24.0;
        assert!(approx(geometry.offset_px(0), 0.0));
        assert!(approx(geometry.offset_px(1), -step));
        assert!(approx(geometry.offset_px(3), -3.0 * step));
    }

    #[test]
    fn scrolling_to_max_shows_the_last_full_page() {
        let geometry = TrackGeometry::new(900.0, 24.0, 3);
        let len = 7;
        let max_index = len - 3;
        let scroll_range = geometry.content_width(len) - 900.0;
        assert!(approx(-geometry.offset_px(max_index), scroll_range));
    }
}
