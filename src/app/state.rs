use crate::config::AppConfig;
use crate::content::Card;
use iced::Task;
use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use sitedeck_core::{Band, Carousel, SliderKind, TrackGeometry, visible_fraction};
use std::collections::BTreeMap;
use tracing::info;

use super::messages::Message;
use super::update::Effect;

/// Height of the title bar above the first section.
pub(crate) const HEADER_HEIGHT: f32 = 96.0;
pub(crate) const MIN_SECTION_HEIGHT: f32 = 200.0;
pub(crate) const MAX_SLIDE_GAP: f32 = 96.0;
pub(crate) const MAX_TRACK_PADDING: f32 = 240.0;
pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));

pub(crate) fn track_scroll_id(kind: SliderKind) -> ScrollId {
    ScrollId::new(format!("track-{}", kind.key()))
}

/// Core application state.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) carousels: BTreeMap<SliderKind, Carousel<Card>>,
    pub(super) window_width: f32,
    pub(super) viewport_height: f32,
    pub(super) scroll_offset_y: f32,
    pub(super) loading: bool,
    pub(super) load_error: Option<String>,
    pub(super) content_request_id: u64,
}

fn clamp_config(config: &mut AppConfig) {
    config.section_height = config.section_height.max(MIN_SECTION_HEIGHT);
    config.slide_gap = config.slide_gap.clamp(0.0, MAX_SLIDE_GAP);
    config.track_padding = config.track_padding.clamp(0.0, MAX_TRACK_PADDING);
}

impl App {
    pub(super) fn bootstrap(mut config: AppConfig) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let mut app = App {
            window_width: config.window_width,
            viewport_height: config.window_height,
            config,
            carousels: BTreeMap::new(),
            scroll_offset_y: 0.0,
            loading: false,
            load_error: None,
            content_request_id: 0,
        };
        let effect = app.remount();
        let task = app.run_effect(effect);
        (app, task)
    }

    /// Destroy every carousel, mount fresh empty ones and request content.
    pub(super) fn remount(&mut self) -> Effect {
        for carousel in self.carousels.values_mut() {
            carousel.destroy();
        }
        self.carousels = SliderKind::ALL
            .into_iter()
            .map(|kind| {
                let mut carousel = self.config.slider_preset(kind).mount(kind.key());
                carousel.set_viewport_width(viewport_width_px(self.window_width));
                (kind, carousel)
            })
            .collect();
        self.refresh_visibility();

        self.content_request_id = self.content_request_id.wrapping_add(1);
        self.loading = true;
        self.load_error = None;
        info!(
            request_id = self.content_request_id,
            path = %self.config.content_path,
            "Mounted sliders; requesting content"
        );
        Effect::LoadContent {
            request_id: self.content_request_id,
            path: self.config.content_path.clone().into(),
        }
    }

    pub(super) fn carousel(&self, kind: SliderKind) -> Option<&Carousel<Card>> {
        self.carousels.get(&kind)
    }

    pub(super) fn section_top(&self, kind: SliderKind) -> f32 {
        let position = SliderKind::ALL
            .iter()
            .position(|candidate| *candidate == kind)
            .unwrap_or(0);
        HEADER_HEIGHT + position as f32 * self.config.section_height
    }

    pub(super) fn section_band(&self, kind: SliderKind) -> Band {
        Band::from_extent(self.section_top(kind), self.config.section_height)
    }

    pub(super) fn content_height(&self) -> f32 {
        HEADER_HEIGHT + SliderKind::ALL.len() as f32 * self.config.section_height
    }

    pub(super) fn max_scroll_offset(&self) -> f32 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    pub(super) fn track_width(&self) -> f32 {
        (self.window_width - 2.0 * self.config.track_padding).max(0.0)
    }

    pub(super) fn track_geometry(&self, kind: SliderKind) -> TrackGeometry {
        let per_view = self
            .carousel(kind)
            .map(Carousel::items_per_view)
            .unwrap_or(1);
        TrackGeometry::new(self.track_width(), self.config.slide_gap, per_view)
    }

    /// Horizontal scroll offset that puts the current slide of `kind` at the
    /// left edge of its track.
    pub(super) fn track_offset_x(&self, kind: SliderKind) -> f32 {
        self.carousel(kind).map_or(0.0, |carousel| {
            (-self.track_geometry(kind).offset_px(carousel.current_index())).max(0.0)
        })
    }

    /// Feed each section's on-screen share to its carousel's latch.
    pub(super) fn refresh_visibility(&mut self) {
        let viewport = Band::from_extent(self.scroll_offset_y, self.viewport_height);
        for kind in SliderKind::ALL {
            let fraction = visible_fraction(self.section_band(kind), viewport);
            if let Some(carousel) = self.carousels.get_mut(&kind) {
                if carousel.observe_visibility(fraction) {
                    info!(slider = %kind, fraction, "Slider came into view");
                }
            }
        }
    }
}

/// Window widths arrive as logical pixels; breakpoints work on whole ones.
pub(super) fn viewport_width_px(width: f32) -> u32 {
    if width.is_finite() && width > 0.0 {
        width.round().min(u32::MAX as f32) as u32
    } else {
        0
    }
}
