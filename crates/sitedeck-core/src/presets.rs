//! Breakpoints and timing for each slider on the site.

use crate::autoplay::AutoAdvance;
use crate::breakpoints::{Breakpoint, BreakpointTable};
use crate::carousel::Carousel;
use crate::visibility::{DEFAULT_VISIBILITY_THRESHOLD, VisibilityLatch};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderKind {
    Hero,
    Services,
    ImpactStories,
    Projects,
    Clients,
}

impl SliderKind {
    /// Page order, top to bottom.
    pub const ALL: [SliderKind; 5] = [
        SliderKind::Hero,
        SliderKind::Services,
        SliderKind::ImpactStories,
        SliderKind::Projects,
        SliderKind::Clients,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SliderKind::Hero => "Hero",
            SliderKind::Services => "Our Core Services",
            SliderKind::ImpactStories => "Impact Stories",
            SliderKind::Projects => "Projects",
            SliderKind::Clients => "Clients & Partners",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SliderKind::Hero => "hero",
            SliderKind::Services => "services",
            SliderKind::ImpactStories => "impact_stories",
            SliderKind::Projects => "projects",
            SliderKind::Clients => "clients",
        }
    }

    pub fn preset(self) -> SliderPreset {
        match self {
            SliderKind::Hero => SliderPreset {
                table: BreakpointTable::single(),
                interval: Duration::from_secs(5),
                autoplay_on_mount: true,
                visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            },
            SliderKind::Services => SliderPreset::scrolled(
                [Breakpoint::new(768, 2), Breakpoint::new(1024, 3)],
                Duration::from_secs(5),
            ),
            SliderKind::ImpactStories => SliderPreset::scrolled(
                [Breakpoint::new(768, 2), Breakpoint::new(1024, 3)],
                Duration::from_secs(5),
            ),
            SliderKind::Projects => SliderPreset::scrolled(
                [
                    Breakpoint::new(768, 2),
                    Breakpoint::new(1024, 3),
                    Breakpoint::new(1280, 4),
                ],
                Duration::from_millis(4500),
            ),
            SliderKind::Clients => SliderPreset::scrolled(
                [
                    Breakpoint::new(640, 2),
                    Breakpoint::new(768, 3),
                    Breakpoint::new(1024, 4),
                    Breakpoint::new(1280, 5),
                ],
                Duration::from_secs(4),
            ),
        }
    }
}

impl std::fmt::Display for SliderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Everything needed to mount one slider's carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPreset {
    pub table: BreakpointTable,
    pub interval: Duration,
    /// Start auto-advance on mount instead of waiting to be scrolled into view.
    pub autoplay_on_mount: bool,
    pub visibility_threshold: f32,
}

impl SliderPreset {
    fn scrolled(steps: impl IntoIterator<Item = Breakpoint>, interval: Duration) -> Self {
        Self {
            table: BreakpointTable::new(1, steps),
            interval,
            autoplay_on_mount: false,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }

    pub fn mount<T>(&self, label: &'static str) -> Carousel<T> {
        let visibility = if self.autoplay_on_mount {
            VisibilityLatch::seen()
        } else {
            VisibilityLatch::new(self.visibility_threshold)
        };
        Carousel::new(
            self.table.clone(),
            AutoAdvance::new(self.interval),
            visibility,
        )
        .with_label(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_view(kind: SliderKind) -> Vec<usize> {
        let table = kind.preset().table;
        [320, 700, 900, 1100, 1400]
            .into_iter()
            .map(|width| table.items_for_width(width))
            .collect()
    }

    #[test]
    fn presets_follow_the_site_breakpoints() {
        assert_eq!(per_view(SliderKind::Hero), vec![1, 1, 1, 1, 1]);
        assert_eq!(per_view(SliderKind::Services), vec![1, 1, 2, 3, 3]);
        assert_eq!(per_view(SliderKind::ImpactStories), vec![1, 1, 2, 3, 3]);
        assert_eq!(per_view(SliderKind::Projects), vec![1, 1, 2, 3, 4]);
        assert_eq!(per_view(SliderKind::Clients), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn impact_stories_stay_single_below_tablet_width() {
        let table = SliderKind::ImpactStories.preset().table;
        assert_eq!(table.items_for_width(700), 1);
        assert_eq!(table.items_for_width(767), 1);
        assert_eq!(table.items_for_width(768), 2);
    }

    #[test]
    fn intervals_stay_between_four_and_five_seconds() {
        for kind in SliderKind::ALL {
            let interval = kind.preset().interval;
            assert!(interval >= Duration::from_secs(4), "{kind}");
            assert!(interval <= Duration::from_secs(5), "{kind}");
        }
    }

    #[test]
    fn only_the_hero_plays_from_mount() {
        let hero: Carousel<u8> = SliderKind::Hero.preset().mount("hero");
        let clients: Carousel<u8> = SliderKind::Clients.preset().mount("clients");
        assert!(hero.auto_advance_enabled());
        assert!(!clients.auto_advance_enabled());
        assert_eq!(clients.label(), "clients");
    }
}
