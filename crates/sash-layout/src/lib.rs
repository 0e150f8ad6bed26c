// Split engine: a row or column of panes separated by draggable gutters.
// Dragging a gutter resizes the two panes around it; all other panes keep
// their size (unless pushable mode lets the drag cascade past a minimum).

mod adjust;
mod cascade;
mod geometry;
pub mod headless;
mod options;
mod pane;
mod session;
mod strategy;
mod style;

use sash_core::{
    CursorTarget, ElementId, EventSource, LayoutHost, ListenerKind, PaneRef, Pointer, SplitDirection,
    SplitEvent, SplitHost,
};

pub use adjust::{adjust, round_to_interval, snap, SnapBounds};
pub use geometry::Pair;
pub use options::{
    default_options_path, load_options, read_options, MinSize, OptionsError, SplitOptions,
    DEFAULT_DRAG_INTERVAL, DEFAULT_GUTTER_SIZE, DEFAULT_MIN_SIZE, DEFAULT_SNAP_OFFSET,
};
pub use pane::{Gutter, Pane};
pub use session::{DragCallback, DragSession, SplitHooks};
pub use strategy::{SplitHandle, SplitStrategy, StaticSplit};
pub use style::{DefaultStyler, SplitStyler};

use pane::pair_mut;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplitError {
    #[error("a split needs at least one pane")]
    NoPanes,
    #[error("pane {0:?} does not resolve to a host element")]
    UnresolvedPane(PaneRef),
    #[error("pane element {0} has no parent")]
    DetachedPane(ElementId),
    #[error("pane element {element} is not a child of {expected}")]
    ForeignParent {
        element: ElementId,
        expected: ElementId,
    },
}

/// Resolve pane references and check they share one parent.
pub(crate) fn resolve_panes(
    host: &dyn SplitHost,
    panes: &[PaneRef],
) -> Result<(ElementId, Vec<ElementId>), SplitError> {
    let elements = panes
        .iter()
        .map(|pane| {
            host.resolve(pane)
                .ok_or_else(|| SplitError::UnresolvedPane(pane.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let first = *elements.first().ok_or(SplitError::NoPanes)?;
    let parent = host.parent(first).ok_or(SplitError::DetachedPane(first))?;
    for &element in &elements[1..] {
        if host.parent(element) != Some(parent) {
            return Err(SplitError::ForeignParent {
                element,
                expected: parent,
            });
        }
    }
    Ok((parent, elements))
}

// ──────────────────────────────────────────────
// Split
// ──────────────────────────────────────────────

/// Interactive split: panes, the gutters between them, and the drag session.
pub struct Split {
    parent: ElementId,
    direction: SplitDirection,
    gutter_size: f32,
    snap_offset: f32,
    drag_interval: f32,
    pushable: bool,
    cursor: String,
    panes: Vec<Pane>,
    gutters: Vec<Gutter>,
    hooks: SplitHooks,
    session: DragSession,
}

impl Split {
    pub fn new(
        host: &mut dyn SplitHost,
        panes: &[PaneRef],
        options: SplitOptions,
    ) -> Result<Self, SplitError> {
        Self::with_hooks(host, panes, options, SplitHooks::default())
    }

    /// Build the split: size every pane, then create a gutter in front of
    /// each pane after the first and start listening for presses on it.
    pub fn with_hooks(
        host: &mut dyn SplitHost,
        panes: &[PaneRef],
        options: SplitOptions,
        hooks: SplitHooks,
    ) -> Result<Self, SplitError> {
        let (parent, elements) = resolve_panes(host, panes)?;
        let count = elements.len();
        let sizes = options.initial_sizes(count);
        let mins = options.min_size.resolve(count);
        let dimension = options.direction.dimension();

        let mut split = Self {
            parent,
            direction: options.direction,
            gutter_size: options.gutter_size,
            snap_offset: options.snap_offset,
            drag_interval: options.drag_interval,
            pushable: options.pushable_panes,
            cursor: options.cursor().to_string(),
            panes: Vec::with_capacity(count),
            gutters: Vec::with_capacity(count.saturating_sub(1)),
            hooks,
            session: DragSession::Idle,
        };

        for (i, &element) in elements.iter().enumerate() {
            if i > 0 {
                let gutter = split.hooks.styler.create_gutter(host, i - 1, split.direction);
                let style = split.hooks.styler.gutter_style(dimension, split.gutter_size);
                host.apply_style(gutter, &style);
                host.insert_before(parent, gutter, element);
                host.subscribe(ListenerKind::GutterPress(gutter));
                split.gutters.push(Gutter {
                    element: gutter,
                    index: i - 1,
                    size: split.gutter_size,
                });
            }
            split.panes.push(Pane::new(element, i, count, sizes[i], mins[i]));
            split.apply_pane_style(host, i);
        }

        // A pane that starts out below its minimum would make every drag
        // impossible; its minimum becomes whatever it got.
        for pane in &mut split.panes {
            let measured = split.direction.extent(host.bounds(pane.element));
            if measured < pane.min_size {
                log::debug!(
                    "pane {} measures {}px, lowering min_size from {}",
                    pane.index,
                    measured,
                    pane.min_size
                );
                pane.min_size = measured;
            }
        }

        log::debug!(
            "split created: {} panes, {} gutters, {}",
            split.panes.len(),
            split.gutters.len(),
            split.direction.as_str()
        );
        Ok(split)
    }

    pub fn parent(&self) -> ElementId {
        self.parent
    }

    pub fn direction(&self) -> SplitDirection {
        self.direction
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn gutters(&self) -> &[Gutter] {
        &self.gutters
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Current pane sizes in percent.
    pub fn get_sizes(&self) -> Vec<f32> {
        self.panes.iter().map(|p| p.size).collect()
    }

    /// Overwrite pane sizes and re-apply their styles. Extra entries are
    /// ignored; panes without an entry keep their size.
    pub fn set_sizes(&mut self, host: &mut dyn SplitHost, sizes: &[f32]) {
        for (i, &size) in sizes.iter().enumerate().take(self.panes.len()) {
            self.panes[i].size = size;
            self.panes[i].is_collapsed = false;
            self.apply_pane_style(host, i);
        }
    }

    /// Shrink pane `index` to its minimum; its neighbor (the next pane, or the
    /// previous one for the last pane) takes the freed space.
    pub fn collapse(&mut self, host: &mut dyn SplitHost, index: usize) {
        if index >= self.panes.len() || self.gutters.is_empty() {
            return;
        }

        let leading = index < self.gutters.len();
        let mut pair = if leading {
            Pair::new(index)
        } else {
            Pair::new(index - 1)
        };
        self.measure(host, &mut pair);

        let (lower, upper) = self.snap_bounds(&pair).limits();
        let offset = if leading { lower } else { upper };
        if !self.adjust_pair(host, &pair, offset) {
            return;
        }
        self.panes[index].is_collapsed = true;
        log::debug!("collapsed pane {} to {}%", index, self.panes[index].size);
    }

    /// Remove the gutters and strip the size styles, handing layout back to
    /// the host. A live drag is ended first.
    pub fn destroy(&mut self, host: &mut dyn SplitHost) {
        self.stop_drag(host);

        for gutter in self.gutters.drain(..) {
            host.unsubscribe(ListenerKind::GutterPress(gutter.element));
            host.remove(self.parent, gutter.element);
        }
        let property = self.direction.dimension().as_str();
        for pane in &self.panes {
            host.clear_style(pane.element, property);
        }
        log::debug!("split destroyed");
    }

    /// Feed one input event through the drag state machine.
    pub fn handle_event(&mut self, host: &mut dyn SplitHost, event: &SplitEvent) {
        match event {
            SplitEvent::GutterPress { gutter, pointer } => self.start_drag(host, *gutter, pointer),
            SplitEvent::PointerMove { pointer } => self.drag(host, pointer),
            SplitEvent::PointerRelease | SplitEvent::PointerCancel => self.stop_drag(host),
        }
    }

    // ── Drag session ────────────────────────────

    fn start_drag(&mut self, host: &mut dyn SplitHost, gutter: usize, pointer: &Pointer) {
        if let Some(active) = self.session.gutter() {
            log::trace!("gutter {} pressed while gutter {} drags, ignoring", gutter, active);
            return;
        }
        if gutter >= self.gutters.len() || !pointer.can_start_drag() {
            return;
        }

        let mut pair = Pair::new(gutter);
        self.measure(host, &mut pair);
        if !self.session.begin(pair) {
            return;
        }

        host.set_selectable(self.panes[pair.a].element, false);
        host.set_selectable(self.panes[pair.b].element, false);
        host.set_cursor(CursorTarget::Element(self.parent), Some(&self.cursor));
        host.set_cursor(CursorTarget::Document, Some(&self.cursor));
        host.subscribe(ListenerKind::PointerMove);
        host.subscribe(ListenerKind::PointerRelease);
        host.subscribe(ListenerKind::PointerCancel);

        log::debug!(
            "drag start: gutter {}, pair size {}px at {}",
            gutter,
            pair.size,
            pair.start
        );
        session::fire(&mut self.hooks.on_drag_start);
    }

    fn drag(&mut self, host: &mut dyn SplitHost, pointer: &Pointer) {
        let DragSession::Dragging { mut pair, stale } = self.session else {
            return;
        };
        let Some(point) = pointer.primary() else {
            return;
        };
        let position = self.direction.along(point);

        if stale {
            self.measure(host, &mut pair);
        }
        if pair.size <= 0.0 {
            log::debug!("drag: gutter {} has no extent to resize", pair.gutter);
            return;
        }

        let target = if self.pushable {
            self.cascade(host, pair, position)
        } else {
            pair
        };

        let offset = round_to_interval(target.offset_of(position), self.drag_interval);
        let offset = snap(offset, self.snap_bounds(&target));
        self.adjust_pair(host, &target, offset);
        self.session = DragSession::Dragging {
            pair,
            stale: target.is_widened(),
        };

        log::trace!(
            "drag: gutter {} to {} (offset {} in panes {}..={})",
            pair.gutter,
            position,
            offset,
            target.a,
            target.b
        );
        session::fire(&mut self.hooks.on_drag);
    }

    fn stop_drag(&mut self, host: &mut dyn SplitHost) {
        let Some(pair) = self.session.end() else {
            return;
        };

        host.unsubscribe(ListenerKind::PointerMove);
        host.unsubscribe(ListenerKind::PointerRelease);
        host.unsubscribe(ListenerKind::PointerCancel);
        host.set_selectable(self.panes[pair.a].element, true);
        host.set_selectable(self.panes[pair.b].element, true);
        host.set_cursor(CursorTarget::Element(self.parent), None);
        host.set_cursor(CursorTarget::Document, None);

        log::debug!("drag end: gutter {}, sizes {:?}", pair.gutter, self.get_sizes());
        session::fire(&mut self.hooks.on_drag_end);
    }

    // ── Helpers ─────────────────────────────────

    pub(crate) fn measure(&mut self, host: &dyn SplitHost, pair: &mut Pair) {
        geometry::calculate_sizes(pair, &mut self.panes, self.gutter_size, self.direction, host);
    }

    pub(crate) fn snap_bounds(&self, pair: &Pair) -> SnapBounds {
        SnapBounds {
            pair_size: pair.size,
            a_min: self.panes[pair.a].min_size,
            b_min: self.panes[pair.b].min_size,
            gutter_size: self.gutter_size,
            snap_offset: self.snap_offset,
            a_share: self.panes[pair.a].gutter_share(self.gutter_size),
            b_share: self.panes[pair.b].gutter_share(self.gutter_size),
        }
    }

    /// Resize the pair's boundary panes and push their styles to the host.
    /// Returns false, changing nothing, when the pair has no extent.
    pub(crate) fn adjust_pair(
        &mut self,
        host: &mut dyn SplitHost,
        pair: &Pair,
        offset: f32,
    ) -> bool {
        if pair.size <= 0.0 {
            log::debug!("panes {}..={} have no extent, skipping resize", pair.a, pair.b);
            return false;
        }
        let (a, b) = pair_mut(&mut self.panes, pair.a, pair.b);
        adjust(a, b, offset, pair.size);
        a.is_collapsed = false;
        b.is_collapsed = false;
        self.apply_pane_style(host, pair.a);
        self.apply_pane_style(host, pair.b);
        true
    }

    fn apply_pane_style(&self, host: &mut dyn SplitHost, index: usize) {
        let pane = &self.panes[index];
        let style = self.hooks.styler.element_style(
            self.direction.dimension(),
            pane.size,
            pane.gutter_share(self.gutter_size),
        );
        host.apply_style(pane.element, &style);
    }
}
