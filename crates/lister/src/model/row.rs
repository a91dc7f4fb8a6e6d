//! Rows: one displayable unit of a list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use lister_core::EdgeInsets;
use lister_core::logging::targets;

use crate::config::is_valid_height;

/// A unique identifier for a row.
///
/// Assigned when the row is constructed and never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    /// Get the raw u64 value of this row ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique row IDs.
static NEXT_ROW_ID: AtomicU64 = AtomicU64::new(1);

fn next_row_id() -> RowId {
    RowId(NEXT_ROW_ID.fetch_add(1, Ordering::Relaxed))
}

/// Callback invoked when a row is selected.
pub type RowAction = Arc<dyn Fn() + Send + Sync>;

/// One row of a list: opaque content plus display attributes.
///
/// The model never looks inside `content`; it hands it back to the host
/// view wrapped in a [`CellWrapper`](super::CellWrapper).
///
/// Equality and hashing use only the row's [`RowId`]. Two rows with the same
/// content are still different rows. `Row` is deliberately not `Clone`,
/// since a clone would carry the same identity.
///
/// # Example
///
/// ```
/// use lister::model::Row;
/// use lister::EdgeInsets;
///
/// let row = Row::new("Wi-Fi")
///     .with_height(44.0)
///     .with_edges(EdgeInsets::symmetric(16.0, 0.0))
///     .with_action(|| println!("open Wi-Fi settings"));
///
/// assert_eq!(row.height(), Some(44.0));
/// assert!(row.has_action());
/// ```
pub struct Row<V> {
    id: RowId,
    content: V,
    action: Option<RowAction>,
    height: Option<f32>,
    edges: Option<EdgeInsets>,
}

impl<V> Row<V> {
    /// Create a row around `content` with no action, the model's default
    /// height and no insets of its own.
    pub fn new(content: V) -> Self {
        Self {
            id: next_row_id(),
            content,
            action: None,
            height: None,
            edges: None,
        }
    }

    /// Set a fixed height for this row.
    ///
    /// Heights must be positive and finite. Anything else is ignored (the
    /// model's default height applies) and a warning is logged.
    pub fn with_height(mut self, height: f32) -> Self {
        if is_valid_height(height) {
            self.height = Some(height);
        } else {
            tracing::warn!(target: targets::MODEL, height, row = self.id.as_u64(), "ignoring invalid row height");
        }
        self
    }

    /// Set the insets between the cell bounds and the content.
    pub fn with_edges(mut self, edges: EdgeInsets) -> Self {
        self.edges = Some(edges);
        self
    }

    /// Set the callback invoked when the row is selected.
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// The row's identity.
    #[inline]
    pub fn id(&self) -> RowId {
        self.id
    }

    /// The row's content.
    #[inline]
    pub fn content(&self) -> &V {
        &self.content
    }

    /// The row's own height, if it set one.
    #[inline]
    pub fn height(&self) -> Option<f32> {
        self.height
    }

    /// The row's own insets, if it set any.
    #[inline]
    pub fn edges(&self) -> Option<EdgeInsets> {
        self.edges
    }

    /// The selection callback, if any.
    pub fn action(&self) -> Option<&RowAction> {
        self.action.as_ref()
    }

    /// Returns `true` if selecting the row does something.
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Consume the row and return its content.
    pub fn into_content(self) -> V {
        self.content
    }
}

impl<V> PartialEq for Row<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for Row<V> {}

impl<V> Hash for Row<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<V: fmt::Debug> fmt::Debug for Row<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("height", &self.height)
            .field("edges", &self.edges)
            .field("has_action", &self.has_action())
            .finish()
    }
}
