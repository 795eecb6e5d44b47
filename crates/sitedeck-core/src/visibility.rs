//! One-way "has been seen" latch plus the overlap math that feeds it.

/// Share of an element that must be on screen before it counts as seen.
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.2;

/// A closed span along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub start: f32,
    pub end: f32,
}

impl Band {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn from_extent(start: f32, length: f32) -> Self {
        Self::new(start, start + length)
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).max(0.0)
    }
}

/// Fraction of `element` that lies inside `viewport`, in `0.0..=1.0`.
pub fn visible_fraction(element: Band, viewport: Band) -> f32 {
    let length = element.length();
    if length <= 0.0 {
        return 0.0;
    }
    let overlap = element.end.min(viewport.end) - element.start.max(viewport.start);
    (overlap.max(0.0) / length).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct VisibilityLatch {
    threshold: f32,
    seen: bool,
    detached: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_VISIBILITY_THRESHOLD
        };
        Self {
            threshold,
            seen: false,
            detached: false,
        }
    }

    /// Latch already closed, e.g. for sliders that play from mount.
    pub fn seen() -> Self {
        Self {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
            seen: true,
            detached: false,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Returns true on the first observation at or above the threshold and
    /// never again.
    pub fn observe(&mut self, fraction: f32) -> bool {
        if self.seen || self.detached {
            return false;
        }
        if fraction >= self.threshold && fraction > 0.0 {
            self.seen = true;
            return true;
        }
        false
    }

    pub fn detach(&mut self) {
        self.detached = true;
    }
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}
