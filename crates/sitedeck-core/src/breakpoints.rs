//! Viewport width → items-per-view lookup.
//!
//! Every slider picks how many cards it shows from the window width. The
//! table is data, not code, so each slider (and the user's config file) can
//! supply its own steps while the lookup rules stay the same.

use serde::{Deserialize, Serialize};

/// One step of a breakpoint table: from `min_width` upward, show
/// `items_per_view` cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: u32,
    pub items_per_view: usize,
}

impl Breakpoint {
    pub const fn new(min_width: u32, items_per_view: usize) -> Self {
        Self {
            min_width,
            items_per_view,
        }
    }
}

/// Sorted breakpoint steps plus the count used below the first step.
///
/// Construction normalizes the input so lookups never fail: steps are sorted
/// by width, a repeated width keeps the last entry, and a zero count is
/// lifted to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBreakpointTable")]
pub struct BreakpointTable {
    base: usize,
    steps: Vec<Breakpoint>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawBreakpointTable {
    #[serde(default = "default_base")]
    base: usize,
    #[serde(default)]
    steps: Vec<Breakpoint>,
}

fn default_base() -> usize {
    1
}

impl From<RawBreakpointTable> for BreakpointTable {
    fn from(raw: RawBreakpointTable) -> Self {
        BreakpointTable::new(raw.base, raw.steps)
    }
}

impl BreakpointTable {
    pub fn new(base: usize, steps: impl IntoIterator<Item = Breakpoint>) -> Self {
        let mut sorted: Vec<Breakpoint> = Vec::new();
        for step in steps {
            let step = Breakpoint::new(step.min_width, step.items_per_view.max(1));
            match sorted.iter_mut().find(|s| s.min_width == step.min_width) {
                Some(existing) => *existing = step,
                None => sorted.push(step),
            }
        }
        sorted.sort_by_key(|step| step.min_width);
        Self {
            base: base.max(1),
            steps: sorted,
        }
    }

    /// One card at every width.
    pub fn single() -> Self {
        Self::new(1, [])
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn steps(&self) -> &[Breakpoint] {
        &self.steps
    }

    /// Count for the highest step whose `min_width` does not exceed `width`.
    pub fn items_for_width(&self, width: u32) -> usize {
        self.steps
            .iter()
            .rev()
            .find(|step| step.min_width <= width)
            .map(|step| step.items_per_view)
            .unwrap_or(self.base)
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clients_table() -> BreakpointTable {
        BreakpointTable::new(
            1,
            [
                Breakpoint::new(640, 2),
                Breakpoint::new(768, 3),
                Breakpoint::new(1024, 4),
                Breakpoint::new(1280, 5),
            ],
        )
    }

    #[test]
    fn looks_up_each_band() {
        let table = clients_table();
        assert_eq!(table.items_for_width(0), 1);
        assert_eq!(table.items_for_width(639), 1);
        assert_eq!(table.items_for_width(640), 2);
        assert_eq!(table.items_for_width(767), 2);
        assert_eq!(table.items_for_width(768), 3);
        assert_eq!(table.items_for_width(1023), 3);
        assert_eq!(table.items_for_width(1024), 4);
        assert_eq!(table.items_for_width(1279), 4);
        assert_eq!(table.items_for_width(1280), 5);
        assert_eq!(table.items_for_width(u32::MAX), 5);
    }

    #[test]
    fn normalizes_unsorted_duplicate_and_zero_steps() {
        let table = BreakpointTable::new(
            0,
            [
                Breakpoint::new(1024, 3),
                Breakpoint::new(768, 0),
                Breakpoint::new(1024, 4),
            ],
        );
        assert_eq!(table.base(), 1);
        assert_eq!(
            table.steps(),
            &[Breakpoint::new(768, 1), Breakpoint::new(1024, 4)]
        );
    }

    #[test]
    fn single_table_always_shows_one() {
        let table = BreakpointTable::single();
        assert_eq!(table.items_for_width(320), 1);
        assert_eq!(table.items_for_width(4096), 1);
    }

    #[test]
    fn deserialized_tables_are_normalized() {
        let table: BreakpointTable = toml::from_str(
            r#"
            base = 0
            steps = [
                { min_width = 1024, items_per_view = 3 },
                { min_width = 768, items_per_view = 2 },
            ]
            "#,
        )
        .expect("valid table");
        assert_eq!(table.base(), 1);
        assert_eq!(table.items_for_width(800), 2);
        assert_eq!(table.items_for_width(1100), 3);
    }
}
