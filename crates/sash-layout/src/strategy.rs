// Interactive vs static strategies. The host's drag capability is checked once
// at construction; both strategies can set sizes and tear down.

use sash_core::{ElementId, LayoutHost, PaneRef, SplitDirection, SplitEvent, SplitHost};

use crate::options::SplitOptions;
use crate::session::SplitHooks;
use crate::style::SplitStyler;
use crate::{resolve_panes, Split, SplitError};

pub trait SplitStrategy {
    fn set_sizes(&mut self, host: &mut dyn SplitHost, sizes: &[f32]);
    fn destroy(&mut self, host: &mut dyn SplitHost);
}

impl SplitStrategy for Split {
    fn set_sizes(&mut self, host: &mut dyn SplitHost, sizes: &[f32]) {
        Split::set_sizes(self, host, sizes);
    }

    fn destroy(&mut self, host: &mut dyn SplitHost) {
        Split::destroy(self, host);
    }
}

// ──────────────────────────────────────────────
// StaticSplit
// ──────────────────────────────────────────────

/// Fallback for hosts that cannot drag: panes get percentage sizes and no
/// gutters are created.
pub struct StaticSplit {
    parent: ElementId,
    direction: SplitDirection,
    elements: Vec<ElementId>,
    sizes: Vec<f32>,
    styler: Box<dyn SplitStyler>,
}

impl StaticSplit {
    pub fn new(
        host: &mut dyn SplitHost,
        panes: &[PaneRef],
        options: SplitOptions,
        hooks: SplitHooks,
    ) -> Result<Self, SplitError> {
        let (parent, elements) = resolve_panes(host, panes)?;
        let sizes = options.initial_sizes(elements.len());
        let split = Self {
            parent,
            direction: options.direction,
            elements,
            sizes,
            styler: hooks.styler,
        };
        split.apply(host);
        Ok(split)
    }

    pub fn parent(&self) -> ElementId {
        self.parent
    }

    fn apply(&self, host: &mut dyn SplitHost) {
        let dimension = self.direction.dimension();
        for (&element, &size) in self.elements.iter().zip(&self.sizes) {
            let style = self.styler.element_style(dimension, size, 0.0);
            host.apply_style(element, &style);
        }
    }
}

impl SplitStrategy for StaticSplit {
    fn set_sizes(&mut self, host: &mut dyn SplitHost, sizes: &[f32]) {
        for (slot, &size) in self.sizes.iter_mut().zip(sizes) {
            *slot = size;
        }
        self.apply(host);
    }

    fn destroy(&mut self, host: &mut dyn SplitHost) {
        let property = self.direction.dimension().as_str();
        for &element in &self.elements {
            host.clear_style(element, property);
        }
    }
}

// ──────────────────────────────────────────────
// SplitHandle
// ──────────────────────────────────────────────

/// A split built with whichever strategy the host supports.
pub enum SplitHandle {
    Interactive(Split),
    Static(StaticSplit),
}

impl SplitHandle {
    pub fn new(
        host: &mut dyn SplitHost,
        panes: &[PaneRef],
        options: SplitOptions,
        hooks: SplitHooks,
    ) -> Result<Self, SplitError> {
        if host.supports_drag() {
            Ok(SplitHandle::Interactive(Split::with_hooks(
                host, panes, options, hooks,
            )?))
        } else {
            log::info!("host cannot drag, falling back to a static split");
            Ok(SplitHandle::Static(StaticSplit::new(
                host, panes, options, hooks,
            )?))
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, SplitHandle::Interactive(_))
    }

    pub fn as_interactive(&self) -> Option<&Split> {
        match self {
            SplitHandle::Interactive(split) => Some(split),
            SplitHandle::Static(_) => None,
        }
    }

    pub fn parent(&self) -> ElementId {
        match self {
            SplitHandle::Interactive(split) => split.parent(),
            SplitHandle::Static(split) => split.parent(),
        }
    }

    /// Current sizes. Static splits do not report them.
    pub fn get_sizes(&self) -> Option<Vec<f32>> {
        self.as_interactive().map(Split::get_sizes)
    }

    pub fn collapse(&mut self, host: &mut dyn SplitHost, index: usize) {
        if let SplitHandle::Interactive(split) = self {
            split.collapse(host, index);
        }
    }

    pub fn handle_event(&mut self, host: &mut dyn SplitHost, event: &SplitEvent) {
        if let SplitHandle::Interactive(split) = self {
            split.handle_event(host, event);
        }
    }
}

impl SplitStrategy for SplitHandle {
    fn set_sizes(&mut self, host: &mut dyn SplitHost, sizes: &[f32]) {
        match self {
            SplitHandle::Interactive(split) => SplitStrategy::set_sizes(split, host, sizes),
            SplitHandle::Static(split) => split.set_sizes(host, sizes),
        }
    }

    fn destroy(&mut self, host: &mut dyn SplitHost) {
        match self {
            SplitHandle::Interactive(split) => SplitStrategy::destroy(split, host),
            SplitHandle::Static(split) => split.destroy(host),
        }
    }
}
