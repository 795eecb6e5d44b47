use crate::content::SiteContent;
use sitedeck_core::SliderKind;

/// Messages emitted by the UI and its subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    Previous(SliderKind),
    Next(SliderKind),
    GoTo(SliderKind, usize),
    AutoAdvance {
        kind: SliderKind,
        generation: u64,
    },
    JumpToSection(SliderKind),
    WindowResized {
        width: f32,
        height: f32,
    },
    PageScrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    TrackScrolled {
        kind: SliderKind,
        offset_x: f32,
    },
    ReloadContent,
    ContentLoaded {
        request_id: u64,
        content: SiteContent,
    },
    ContentLoadFailed {
        request_id: u64,
        error: String,
    },
}
