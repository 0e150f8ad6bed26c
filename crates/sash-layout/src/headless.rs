// Headless host: an in-memory layout tree with one container whose children are
// stacked along an axis, each sized from the style property a split writes.
// Used by the tests, the benchmark and the demo binary.

use std::collections::{HashMap, HashSet};

use sash_core::{
    CursorTarget, ElementId, EventSource, LayoutHost, ListenerKind, PaneRef, Rect, Size,
    SplitDirection, StyleMap,
};

pub struct HeadlessHost {
    direction: SplitDirection,
    bounds: Rect,
    drag_capable: bool,
    container: ElementId,
    next_id: ElementId,
    children: Vec<ElementId>,
    known: HashSet<ElementId>,
    keys: HashMap<String, ElementId>,
    class_names: HashMap<ElementId, String>,
    styles: HashMap<ElementId, StyleMap>,
    listeners: Vec<ListenerKind>,
    cursors: HashMap<CursorTarget, String>,
    unselectable: HashSet<ElementId>,
}

impl HeadlessHost {
    pub fn new(direction: SplitDirection, size: Size) -> Self {
        let container: ElementId = 1;
        Self {
            direction,
            bounds: Rect::new(0.0, 0.0, size.width, size.height),
            drag_capable: true,
            container,
            next_id: container + 1,
            children: Vec::new(),
            known: HashSet::from([container]),
            keys: HashMap::new(),
            class_names: HashMap::new(),
            styles: HashMap::new(),
            listeners: Vec::new(),
            cursors: HashMap::new(),
            unselectable: HashSet::new(),
        }
    }

    /// A host with `count` panes already in the container.
    pub fn with_panes(
        direction: SplitDirection,
        size: Size,
        count: usize,
    ) -> (Self, Vec<ElementId>) {
        let mut host = Self::new(direction, size);
        let panes = (0..count).map(|_| host.add_pane()).collect();
        (host, panes)
    }

    /// Move the container; panes are laid out from its leading edge.
    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    pub fn set_drag_capable(&mut self, capable: bool) {
        self.drag_capable = capable;
    }

    pub fn add_pane(&mut self) -> ElementId {
        let id = self.alloc_id();
        self.children.push(id);
        id
    }

    /// Add a pane that can also be resolved by `key`.
    pub fn add_keyed_pane(&mut self, key: &str) -> ElementId {
        let id = self.add_pane();
        self.keys.insert(key.to_string(), id);
        id
    }

    /// Create an element that is not attached to the container.
    pub fn add_detached(&mut self) -> ElementId {
        self.alloc_id()
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    /// Container children in layout order, gutters included.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.styles
            .get(&element)
            .and_then(|s| s.get(property))
            .map(String::as_str)
    }

    pub fn class_name(&self, element: ElementId) -> Option<&str> {
        self.class_names.get(&element).map(String::as_str)
    }

    pub fn listeners(&self) -> &[ListenerKind] {
        &self.listeners
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.contains(&kind)
    }

    pub fn cursor(&self, target: CursorTarget) -> Option<&str> {
        self.cursors.get(&target).map(String::as_str)
    }

    pub fn is_selectable(&self, element: ElementId) -> bool {
        !self.unselectable.contains(&element)
    }

    /// Extent of an element along the layout axis.
    pub fn extent(&self, element: ElementId) -> f32 {
        self.direction.extent(self.bounds(element))
    }

    /// Rects of every child. Children with a size style take exactly that
    /// much; the rest share what is left equally.
    pub fn layout(&self) -> Vec<(ElementId, Rect)> {
        let total = self.direction.extent(self.bounds);
        let property = self.direction.dimension().as_str();

        let extents: Vec<Option<f32>> = self
            .children
            .iter()
            .map(|el| {
                self.style(*el, property)
                    .and_then(|value| parse_extent(value, total))
            })
            .collect();
        let claimed: f32 = extents.iter().flatten().sum();
        let flexible = extents.iter().filter(|e| e.is_none()).count();
        let share = if flexible > 0 {
            ((total - claimed) / flexible as f32).max(0.0)
        } else {
            0.0
        };

        let mut cursor = self.direction.leading_edge(self.bounds);
        let mut out = Vec::with_capacity(self.children.len());
        for (&element, extent) in self.children.iter().zip(extents) {
            let extent = extent.unwrap_or(share);
            let rect = match self.direction {
                SplitDirection::Horizontal => {
                    Rect::new(cursor, self.bounds.y, extent, self.bounds.height)
                }
                SplitDirection::Vertical => {
                    Rect::new(self.bounds.x, cursor, self.bounds.width, extent)
                }
            };
            out.push((element, rect));
            cursor += extent;
        }
        out
    }

    fn alloc_id(&mut self) -> ElementId {
        let id = self.next_id;
        self.next_id += 1;
        self.known.insert(id);
        id
    }
}

impl LayoutHost for HeadlessHost {
    fn resolve(&self, pane: &PaneRef) -> Option<ElementId> {
        match pane {
            PaneRef::Handle(id) => self.known.contains(id).then_some(*id),
            PaneRef::Key(key) => self.keys.get(key).copied(),
        }
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.children.contains(&element).then_some(self.container)
    }

    fn bounds(&self, element: ElementId) -> Rect {
        if element == self.container {
            return self.bounds;
        }
        self.layout()
            .into_iter()
            .find(|(id, _)| *id == element)
            .map(|(_, rect)| rect)
            .unwrap_or_default()
    }

    fn create_element(&mut self, class_name: &str) -> ElementId {
        let id = self.alloc_id();
        self.class_names.insert(id, class_name.to_string());
        id
    }

    fn insert_before(&mut self, parent: ElementId, element: ElementId, before: ElementId) {
        if parent != self.container {
            return;
        }
        self.children.retain(|&id| id != element);
        let index = self
            .children
            .iter()
            .position(|&id| id == before)
            .unwrap_or(self.children.len());
        self.children.insert(index, element);
    }

    fn remove(&mut self, parent: ElementId, element: ElementId) {
        if parent == self.container {
            self.children.retain(|&id| id != element);
        }
    }

    fn apply_style(&mut self, element: ElementId, style: &StyleMap) {
        let entry = self.styles.entry(element).or_default();
        for (property, value) in style {
            entry.insert(property.clone(), value.clone());
        }
    }

    fn clear_style(&mut self, element: ElementId, property: &str) {
        if let Some(style) = self.styles.get_mut(&element) {
            style.remove(property);
        }
    }

    fn set_cursor(&mut self, target: CursorTarget, cursor: Option<&str>) {
        match cursor {
            Some(c) => {
                self.cursors.insert(target, c.to_string());
            }
            None => {
                self.cursors.remove(&target);
            }
        }
    }

    fn set_selectable(&mut self, element: ElementId, selectable: bool) {
        if selectable {
            self.unselectable.remove(&element);
        } else {
            self.unselectable.insert(element);
        }
    }

    fn supports_drag(&self) -> bool {
        self.drag_capable
    }
}

impl EventSource for HeadlessHost {
    fn subscribe(&mut self, kind: ListenerKind) {
        if !self.listeners.contains(&kind) {
            self.listeners.push(kind);
        }
    }

    fn unsubscribe(&mut self, kind: ListenerKind) {
        self.listeners.retain(|k| *k != kind);
    }
}

/// Pixel extent of a size value: `N%`, `Npx` or `calc(N% - Mpx)`.
pub(crate) fn parse_extent(value: &str, total: f32) -> Option<f32> {
    let value = value.trim();
    if let Some(inner) = value.strip_prefix("calc(").and_then(|v| v.strip_suffix(')')) {
        let (lhs, rhs) = inner.split_once(" - ")?;
        return Some(parse_extent(lhs, total)? - parse_extent(rhs, total)?);
    }
    if let Some(percent) = value.strip_suffix('%') {
        return percent.trim().parse::<f32>().ok().map(|p| p / 100.0 * total);
    }
    if let Some(pixels) = value.strip_suffix("px") {
        return pixels.trim().parse::<f32>().ok();
    }
    None
}
