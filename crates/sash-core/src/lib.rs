use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ──────────────────────────────────────────────
// Identity
// ──────────────────────────────────────────────

/// Opaque handle to an element in the host layout tree.
pub type ElementId = u64;

/// How a pane is named when a split is constructed: either a handle the host
/// already gave out, or a lookup key the host resolves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaneRef {
    Handle(ElementId),
    Key(String),
}

impl From<ElementId> for PaneRef {
    fn from(id: ElementId) -> Self {
        PaneRef::Handle(id)
    }
}

impl From<&str> for PaneRef {
    fn from(key: &str) -> Self {
        PaneRef::Key(key.to_string())
    }
}

impl From<String> for PaneRef {
    fn from(key: String) -> Self {
        PaneRef::Key(key)
    }
}

// ──────────────────────────────────────────────
// Direction
// ──────────────────────────────────────────────

/// Axis along which panes are laid out. Horizontal splits place panes side by
/// side and resize widths; vertical splits stack them and resize heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl SplitDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SplitDirection::Horizontal => "horizontal",
            SplitDirection::Vertical => "vertical",
        }
    }

    pub fn dimension(self) -> Dimension {
        match self {
            SplitDirection::Horizontal => Dimension::Width,
            SplitDirection::Vertical => Dimension::Height,
        }
    }

    /// Cursor token shown while a gutter of this direction is dragged.
    pub fn default_cursor(self) -> &'static str {
        match self {
            SplitDirection::Horizontal => "col-resize",
            SplitDirection::Vertical => "row-resize",
        }
    }

    /// Coordinate of a point along this axis.
    pub fn along(self, point: Vec2) -> f32 {
        match self {
            SplitDirection::Horizontal => point.x,
            SplitDirection::Vertical => point.y,
        }
    }

    pub fn leading_edge(self, rect: Rect) -> f32 {
        match self {
            SplitDirection::Horizontal => rect.x,
            SplitDirection::Vertical => rect.y,
        }
    }

    pub fn extent(self, rect: Rect) -> f32 {
        match self {
            SplitDirection::Horizontal => rect.width,
            SplitDirection::Vertical => rect.height,
        }
    }
}

/// The style dimension a split writes sizes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
        }
    }
}

// ──────────────────────────────────────────────
// Style
// ──────────────────────────────────────────────

/// Style properties to set on a host element, keyed by property name.
pub type StyleMap = BTreeMap<String, String>;

// ──────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer data carried by an input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Pointer {
    Mouse { position: Vec2, button: MouseButton },
    /// All active touch points, in the order the host reports them.
    Touch { touches: Vec<Vec2> },
}

impl Pointer {
    pub fn mouse(x: f32, y: f32) -> Self {
        Pointer::Mouse {
            position: Vec2::new(x, y),
            button: MouseButton::Left,
        }
    }

    /// The tracked position: the mouse position, or the first touch point.
    pub fn primary(&self) -> Option<Vec2> {
        match self {
            Pointer::Mouse { position, .. } => Some(*position),
            Pointer::Touch { touches } => touches.first().copied(),
        }
    }

    /// Whether this pointer may start a drag. Only the primary mouse button
    /// does; any touch does.
    pub fn can_start_drag(&self) -> bool {
        match self {
            Pointer::Mouse { button, .. } => *button == MouseButton::Left,
            Pointer::Touch { touches } => !touches.is_empty(),
        }
    }
}

/// Events a host delivers to a split.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitEvent {
    /// Pointer or touch pressed on the gutter with the given index.
    GutterPress { gutter: usize, pointer: Pointer },
    /// Pointer or touch moved anywhere in the document.
    PointerMove { pointer: Pointer },
    /// Pointer released or last touch lifted anywhere in the document.
    PointerRelease,
    /// Touch sequence cancelled by the host.
    PointerCancel,
}

// ──────────────────────────────────────────────
// Host
// ──────────────────────────────────────────────

/// Where a cursor override is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorTarget {
    Element(ElementId),
    Document,
}

/// Listener registrations a split asks its host for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Press on a specific gutter element.
    GutterPress(ElementId),
    /// Document-wide move events (mouse and touch).
    PointerMove,
    /// Document-wide release events (mouse and touch).
    PointerRelease,
    /// Document-wide touch cancel events.
    PointerCancel,
}

/// The host layout tree a split lives in.
/// Handles are opaque; the split never inspects them, only passes them back.
pub trait LayoutHost {
    fn resolve(&self, pane: &PaneRef) -> Option<ElementId>;
    fn parent(&self, element: ElementId) -> Option<ElementId>;
    /// Current bounding rect of an element, in document coordinates.
    fn bounds(&self, element: ElementId) -> Rect;
    fn create_element(&mut self, class_name: &str) -> ElementId;
    fn insert_before(&mut self, parent: ElementId, element: ElementId, before: ElementId);
    fn remove(&mut self, parent: ElementId, element: ElementId);
    fn apply_style(&mut self, element: ElementId, style: &StyleMap);
    fn clear_style(&mut self, element: ElementId, property: &str);
    fn set_cursor(&mut self, target: CursorTarget, cursor: Option<&str>);
    fn set_selectable(&mut self, element: ElementId, selectable: bool);
    /// Whether the host can deliver pointer drags at all.
    fn supports_drag(&self) -> bool {
        true
    }
}

/// Input event wiring. A split subscribes when it needs a class of events
/// delivered and unsubscribes when it no longer does.
pub trait EventSource {
    fn subscribe(&mut self, kind: ListenerKind);
    fn unsubscribe(&mut self, kind: ListenerKind);
}

/// Everything a split needs from its host.
pub trait SplitHost: LayoutHost + EventSource {}

impl<T: LayoutHost + EventSource + ?Sized> SplitHost for T {}
