use sash_core::ElementId;

// ──────────────────────────────────────────────
// Pane / Gutter models
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    pub element: ElementId,
    pub index: usize,
    /// Percentage of the split's total extent.
    pub size: f32,
    /// Pixel minimum. May be lowered at construction when the pane starts out smaller.
    pub min_size: f32,
    pub is_first: bool,
    pub is_last: bool,
    pub is_collapsed: bool,
    /// Measured extent along the split axis. Only valid during a drag or collapse.
    pub(crate) pixel_size: f32,
    /// Measured leading edge. Only valid during a drag or collapse.
    pub(crate) start: f32,
}

impl Pane {
    pub(crate) fn new(
        element: ElementId,
        index: usize,
        count: usize,
        size: f32,
        min_size: f32,
    ) -> Self {
        Self {
            element,
            index,
            size,
            min_size,
            is_first: index == 0,
            is_last: index + 1 == count,
            is_collapsed: false,
            pixel_size: 0.0,
            start: 0.0,
        }
    }

    /// Pixels of gutter taken out of this pane's percentage extent: half a
    /// gutter on each side that borders one.
    pub fn gutter_share(&self, gutter_size: f32) -> f32 {
        match (self.is_first, self.is_last) {
            (true, true) => 0.0,
            (true, false) | (false, true) => gutter_size / 2.0,
            (false, false) => gutter_size,
        }
    }
}

/// Divider between pane `index` and pane `index + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gutter {
    pub element: ElementId,
    pub index: usize,
    pub size: f32,
}

/// Borrow two distinct panes mutably.
pub(crate) fn pair_mut(panes: &mut [Pane], a: usize, b: usize) -> (&mut Pane, &mut Pane) {
    debug_assert!(a < b, "pair_mut expects a < b");
    let (head, tail) = panes.split_at_mut(b);
    (&mut head[a], &mut tail[0])
}
