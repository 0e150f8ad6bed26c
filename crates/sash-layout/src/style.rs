// Host styling capability: how pane sizes and gutters are expressed as host
// style properties, and how gutter elements are made.

use sash_core::{Dimension, ElementId, LayoutHost, SplitDirection, SplitHost, StyleMap};

pub trait SplitStyler {
    /// Style for a pane holding `size` percent of the split, minus
    /// `gutter_size` pixels of gutter share.
    fn element_style(&self, dimension: Dimension, size: f32, gutter_size: f32) -> StyleMap;
    fn gutter_style(&self, dimension: Dimension, gutter_size: f32) -> StyleMap;
    /// Create the divider element for gutter `index`. It is inserted by the split.
    fn create_gutter(
        &self,
        host: &mut dyn SplitHost,
        index: usize,
        direction: SplitDirection,
    ) -> ElementId;
}

/// Styler for hosts with a `calc()` size expression. With `calc_supported`
/// off, panes get a plain percentage and the gutter share is ignored.
#[derive(Debug, Clone, Copy)]
pub struct DefaultStyler {
    pub calc_supported: bool,
}

impl Default for DefaultStyler {
    fn default() -> Self {
        Self {
            calc_supported: true,
        }
    }
}

impl SplitStyler for DefaultStyler {
    fn element_style(&self, dimension: Dimension, size: f32, gutter_size: f32) -> StyleMap {
        let value = if self.calc_supported && gutter_size > 0.0 {
            format!("calc({}% - {}px)", size, gutter_size)
        } else {
            format!("{}%", size)
        };
        StyleMap::from([(dimension.as_str().to_string(), value)])
    }

    fn gutter_style(&self, dimension: Dimension, gutter_size: f32) -> StyleMap {
        StyleMap::from([(dimension.as_str().to_string(), format!("{}px", gutter_size))])
    }

    fn create_gutter(
        &self,
        host: &mut dyn SplitHost,
        _index: usize,
        direction: SplitDirection,
    ) -> ElementId {
        host.create_element(&format!("gutter gutter-{}", direction.as_str()))
    }
}
