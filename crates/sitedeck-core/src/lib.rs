//! Slider state shared by every carousel on the site.
//!
//! Nothing in here touches a GUI toolkit: the host feeds window widths,
//! visibility fractions and timer ticks, and reads back indices and offsets.

pub mod autoplay;
pub mod breakpoints;
pub mod carousel;
pub mod presets;
pub mod track;
pub mod visibility;

pub use autoplay::{AutoAdvance, TimerSchedule};
pub use breakpoints::{Breakpoint, BreakpointTable};
pub use carousel::{Carousel, Transition};
pub use presets::{SliderKind, SliderPreset};
pub use track::TrackGeometry;
pub use visibility::{Band, VisibilityLatch, visible_fraction};
