//! Cell container that embeds row content with inset padding.
//!
//! A [`CellWrapper`] is what a host view receives for one visible row: the
//! row's content and the insets between the cell's bounds and that content.
//! Hosts that recycle cells keep a pool of default-constructed wrappers and
//! call [`CellWrapper::reuse`] to load them with a row's values.

use lister_core::{EdgeInsets, Rect};

/// Reusable container holding one row's content and its insets.
///
/// # Example
///
/// ```
/// use lister::model::CellWrapper;
/// use lister::{EdgeInsets, Rect};
///
/// let cell = CellWrapper::new("Battery", EdgeInsets::symmetric(16.0, 8.0));
/// let frame = cell.content_frame(Rect::new(0.0, 0.0, 320.0, 60.0));
///
/// assert_eq!(frame, Rect::new(16.0, 8.0, 288.0, 44.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CellWrapper<V> {
    content: V,
    edges: EdgeInsets,
}

impl<V> CellWrapper<V> {
    /// Wrap `content` with the given insets.
    pub fn new(content: V, edges: EdgeInsets) -> Self {
        Self { content, edges }
    }

    /// Load a recycled cell with new content and insets.
    ///
    /// Returns the content the cell held before.
    pub fn reuse(&mut self, content: V, edges: EdgeInsets) -> V {
        self.edges = edges;
        std::mem::replace(&mut self.content, content)
    }

    /// The embedded content.
    pub fn content(&self) -> &V {
        &self.content
    }

    /// Mutable access to the embedded content.
    pub fn content_mut(&mut self) -> &mut V {
        &mut self.content
    }

    /// The insets applied around the content.
    pub fn edges(&self) -> EdgeInsets {
        self.edges
    }

    /// The frame the content occupies inside a cell with `bounds`.
    ///
    /// Each side of the content is pinned to the matching side of the
    /// bounds, offset inward by that side's inset.
    pub fn content_frame(&self, bounds: Rect) -> Rect {
        bounds.inset_by(self.edges)
    }

    /// Consume the cell and return its content.
    pub fn into_content(self) -> V {
        self.content
    }
}

impl<V: Default> Default for CellWrapper<V> {
    /// An empty cell for a reuse pool: default content, zero insets.
    fn default() -> Self {
        Self::new(V::default(), EdgeInsets::ZERO)
    }
}
