use crate::pane::Pane;

/// Redistribute the combined percentage of `a` and `b` so that `a` takes
/// `offset / pair_size` of it. The sum `a.size + b.size` is unchanged.
pub fn adjust(a: &mut Pane, b: &mut Pane, offset: f32, pair_size: f32) {
    let percentage = a.size + b.size;
    a.size = (offset / pair_size) * percentage;
    b.size = percentage - a.size;
}

/// Slack allowed when deciding whether both minimums fit, so that panes
/// already sitting at their minimums are not treated as overcrowded.
const FIT_TOLERANCE: f32 = 0.01;

/// Snap parameters for one pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapBounds {
    pub pair_size: f32,
    pub a_min: f32,
    pub b_min: f32,
    pub gutter_size: f32,
    pub snap_offset: f32,
    /// Pixels of gutter taken out of `a`'s percentage extent.
    pub a_share: f32,
    /// Pixels of gutter taken out of `b`'s percentage extent.
    pub b_share: f32,
}

impl SnapBounds {
    /// The offsets that leave `a` (lower) and `b` (upper) at their minimums.
    ///
    /// Normally these are `a_min + gutter` and `pair_size - (b_min + gutter)`.
    /// Those reserve a full gutter on each side while edge panes only give up
    /// half of one, so on a tight pair they can cross even though both panes
    /// fit. In that case the limits that map to exactly `a_min` / `b_min`
    /// pixels are used instead. When the minimums do not fit at all the plain
    /// limits stay and the lower one wins.
    pub fn limits(&self) -> (f32, f32) {
        let lower = self.a_min + self.gutter_size;
        let upper = self.pair_size - (self.b_min + self.gutter_size);
        if lower <= upper {
            return (lower, upper);
        }

        // Pixel extent the pair's percentage covers; `adjust` scales offsets
        // by `extent / pair_size`.
        let extent = self.pair_size - self.gutter_size + self.a_share + self.b_share;
        if extent <= 0.0 || self.pair_size <= 0.0 {
            return (lower, upper);
        }
        let scale = self.pair_size / extent;
        let floor = (self.a_min + self.a_share) * scale;
        let ceiling = self.pair_size - (self.b_min + self.b_share) * scale;
        if floor <= ceiling + FIT_TOLERANCE {
            (floor, ceiling.max(floor))
        } else {
            (lower, upper)
        }
    }
}

/// Clamp an offset to a boundary pane's minimum when it comes within
/// `snap_offset` of it. The leading pane is checked first, so it wins when
/// both minimums cannot be satisfied at once.
pub fn snap(offset: f32, bounds: SnapBounds) -> f32 {
    let SnapBounds {
        pair_size,
        a_min,
        b_min,
        gutter_size,
        snap_offset,
        ..
    } = bounds;
    let (lower, upper) = bounds.limits();

    if offset <= a_min + snap_offset + gutter_size {
        lower
    } else if offset >= pair_size - (b_min + snap_offset + gutter_size) {
        upper
    } else {
        offset
    }
}

/// Round an offset to the nearest multiple of `interval`. Intervals of 1 or
/// less leave it alone.
pub fn round_to_interval(offset: f32, interval: f32) -> f32 {
    if interval > 1.0 {
        (offset / interval).round() * interval
    } else {
        offset
    }
}
