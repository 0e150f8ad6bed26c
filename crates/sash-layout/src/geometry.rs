use sash_core::{LayoutHost, SplitDirection, SplitHost};

use crate::pane::Pane;

// ──────────────────────────────────────────────
// Pair: the panes one gutter drag resizes
// ──────────────────────────────────────────────

/// Two boundary panes `a` and `b` and the gutter being dragged between them.
///
/// Normally `a` and `b` are the gutter's direct neighbors. In pushable mode the
/// pair can be widened; the panes strictly between `a` and `b` then keep their
/// size and travel with the gutter, and their extents are carried in
/// `inner_before` / `inner_after` so that `size` still covers only the two
/// boundary panes plus the dragged gutter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair {
    pub a: usize,
    pub b: usize,
    pub gutter: usize,
    /// Combined pixel extent of `a`, the dragged gutter and `b`.
    pub size: f32,
    /// Leading edge of `a` along the split axis.
    pub start: f32,
    /// Extent of the panes (and their gutters) between `a` and the dragged gutter.
    pub inner_before: f32,
    /// Extent of the panes (and their gutters) between the dragged gutter and `b`.
    pub inner_after: f32,
}

impl Pair {
    /// The unwidened pair around gutter `gutter`. Geometry is zero until measured.
    pub fn new(gutter: usize) -> Self {
        Self {
            a: gutter,
            b: gutter + 1,
            gutter,
            size: 0.0,
            start: 0.0,
            inner_before: 0.0,
            inner_after: 0.0,
        }
    }

    /// Convert a position along the split axis into the pair's local offset,
    /// measured from the leading edge of `a` to the dragged gutter.
    pub fn offset_of(&self, position: f32) -> f32 {
        position - self.start - self.inner_before
    }

    pub fn is_widened(&self) -> bool {
        self.b - self.a > 1
    }
}

/// Measure every pane the pair spans and refresh its cached extent and start.
/// Must run again whenever `a` or `b` changes.
pub(crate) fn calculate_sizes(
    pair: &mut Pair,
    panes: &mut [Pane],
    gutter_size: f32,
    direction: SplitDirection,
    host: &dyn SplitHost,
) {
    for pane in &mut panes[pair.a..=pair.b] {
        let rect = host.bounds(pane.element);
        pane.pixel_size = direction.extent(rect);
        pane.start = direction.leading_edge(rect);
    }

    let inner = |range: std::ops::Range<usize>| -> f32 {
        panes[range].iter().map(|p| p.pixel_size + gutter_size).sum()
    };

    pair.start = panes[pair.a].start;
    pair.inner_before = inner(pair.a + 1..pair.gutter + 1);
    pair.inner_after = inner(pair.gutter + 1..pair.b);
    pair.size = panes[pair.a].pixel_size + gutter_size + panes[pair.b].pixel_size;
}
