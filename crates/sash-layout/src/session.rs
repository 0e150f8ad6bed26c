use crate::geometry::Pair;
use crate::style::{DefaultStyler, SplitStyler};

// ──────────────────────────────────────────────
// Drag session state machine
// ──────────────────────────────────────────────

/// At most one gutter drags at a time. `Dragging` holds the gutter's own
/// (unwidened) pair as measured when the drag started.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        pair: Pair,
        /// Set once a cascade moved panes outside `pair`, which shifts the
        /// pair's leading edge; the geometry must be measured again.
        stale: bool,
    },
}

impl DragSession {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    /// The dragging gutter, if any.
    pub fn gutter(&self) -> Option<usize> {
        match self {
            DragSession::Dragging { pair, .. } => Some(pair.gutter),
            DragSession::Idle => None,
        }
    }

    /// Idle → Dragging. Returns false, leaving the session untouched, when a
    /// drag is already live.
    pub(crate) fn begin(&mut self, pair: Pair) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = DragSession::Dragging { pair, stale: false };
        true
    }

    /// Dragging → Idle. Returns the pair that was dragging, or None when idle.
    pub(crate) fn end(&mut self) -> Option<Pair> {
        match std::mem::take(self) {
            DragSession::Dragging { pair, .. } => Some(pair),
            DragSession::Idle => None,
        }
    }
}

// ──────────────────────────────────────────────
// Hooks: host capabilities supplied at construction
// ──────────────────────────────────────────────

pub type DragCallback = Box<dyn FnMut()>;

pub struct SplitHooks {
    pub styler: Box<dyn SplitStyler>,
    pub on_drag_start: Option<DragCallback>,
    pub on_drag: Option<DragCallback>,
    pub on_drag_end: Option<DragCallback>,
}

impl Default for SplitHooks {
    fn default() -> Self {
        Self {
            styler: Box::new(DefaultStyler::default()),
            on_drag_start: None,
            on_drag: None,
            on_drag_end: None,
        }
    }
}

impl SplitHooks {
    pub fn with_styler(mut self, styler: impl SplitStyler + 'static) -> Self {
        self.styler = Box::new(styler);
        self
    }

    pub fn on_drag_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_drag_start = Some(Box::new(f));
        self
    }

    pub fn on_drag(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_drag = Some(Box::new(f));
        self
    }

    pub fn on_drag_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_drag_end = Some(Box::new(f));
        self
    }
}

pub(crate) fn fire(callback: &mut Option<DragCallback>) {
    if let Some(f) = callback.as_mut() {
        f();
    }
}
