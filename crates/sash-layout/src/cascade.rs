use sash_core::SplitHost;

use crate::geometry::Pair;
use crate::Split;

impl Split {
    /// Pushable mode: while the pointer would drive a boundary pane below its
    /// minimum, settle that pane at its minimum and move the boundary one pane
    /// further out. Stops at the first and last pane of the split.
    ///
    /// Returns the pair to adjust, widened when panes were pushed.
    pub(crate) fn cascade(
        &mut self,
        host: &mut dyn SplitHost,
        mut pair: Pair,
        position: f32,
    ) -> Pair {
        loop {
            let offset = pair.offset_of(position);
            let (lower, upper) = self.snap_bounds(&pair).limits();
            let a_first = self.panes[pair.a].is_first;
            let b_last = self.panes[pair.b].is_last;

            if offset < lower && !a_first {
                if !self.adjust_pair(host, &pair, lower) {
                    break;
                }
                pair.a -= 1;
            } else if offset > upper && !b_last {
                if !self.adjust_pair(host, &pair, upper) {
                    break;
                }
                pair.b += 1;
            } else {
                break;
            }

            self.measure(host, &mut pair);
            log::debug!(
                "cascade: gutter {} pushes panes {}..={}",
                pair.gutter,
                pair.a,
                pair.b
            );
        }

        pair
    }
}
