//! The boundary between a list model and the host view that renders it.
//!
//! The boundary has two directions:
//!
//! - **Pull**: the host view queries counts, heights, insets and titles
//!   through [`ListDataSource`] whenever it lays out or redraws.
//! - **Push**: after every structural change the model emits one
//!   [`ListDelta`]. Hosts either connect a slot with
//!   [`ListSignals::connect_delta`] or implement [`HostView`] and bind
//!   themselves with [`ListModel::bind_host`](super::ListModel::bind_host).

use lister_core::{ConnectionId, EdgeInsets, Signal};
use serde::{Deserialize, Serialize};

use super::index::IndexPath;
use crate::error::ListResult;

/// How the host should animate an inserted or removed row.
///
/// The model only carries the value; performing the animation is the host's
/// business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAnimation {
    /// Fade the row in or out.
    #[default]
    Fade,
    /// Slide in from or out to the right.
    Right,
    /// Slide in from or out to the left.
    Left,
    /// Slide in from or out to the top.
    Top,
    /// Slide in from or out to the bottom.
    Bottom,
    /// No animation.
    None,
    /// Keep the row centered while it appears or disappears.
    Middle,
    /// Let the host pick.
    Automatic,
}

/// A structural change the host view must apply.
///
/// Every content-changing mutator emits exactly one delta, after the
/// content has been updated.
#[derive(Debug, Clone, PartialEq)]
pub enum ListDelta {
    /// The whole content was replaced; re-query everything.
    FullReload,
    /// One row was inserted at `path`.
    InsertAt {
        path: IndexPath,
        animation: RowAnimation,
    },
    /// The row that was at `path` is gone.
    DeleteAt {
        path: IndexPath,
        animation: RowAnimation,
    },
    /// The rows that were at `paths` are gone. Paths are pre-removal
    /// positions, in the order the caller listed them.
    DeleteAtMany {
        paths: Vec<IndexPath>,
        animation: RowAnimation,
    },
}

impl ListDelta {
    /// The index paths touched by the delta. Empty for a full reload.
    pub fn paths(&self) -> &[IndexPath] {
        match self {
            Self::FullReload => &[],
            Self::InsertAt { path, .. } | Self::DeleteAt { path, .. } => std::slice::from_ref(path),
            Self::DeleteAtMany { paths, .. } => paths,
        }
    }

    /// The animation to use, if the delta is row-level.
    pub fn animation(&self) -> Option<RowAnimation> {
        match self {
            Self::FullReload => None,
            Self::InsertAt { animation, .. }
            | Self::DeleteAt { animation, .. }
            | Self::DeleteAtMany { animation, .. } => Some(*animation),
        }
    }

    /// Returns `true` for [`ListDelta::FullReload`].
    pub fn is_full_reload(&self) -> bool {
        matches!(self, Self::FullReload)
    }

    /// Change in total row count implied by the delta, if it is row-level.
    pub fn row_count_change(&self) -> Option<isize> {
        match self {
            Self::FullReload => None,
            Self::InsertAt { .. } => Some(1),
            Self::DeleteAt { .. } => Some(-1),
            Self::DeleteAtMany { paths, .. } => Some(-(paths.len() as isize)),
        }
    }
}

/// A view that renders a list model and applies its deltas.
pub trait HostView: Send + Sync {
    /// Apply one structural change. Called after the model has changed, on
    /// the thread that mutated it.
    fn apply_delta(&self, delta: &ListDelta);
}

/// Read-only queries a host view issues against a list model.
///
/// Every method is a pure read, safe to call at any frequency.
/// Out-of-range indices yield an index-out-of-range
/// [`ListError`](crate::error::ListError).
pub trait ListDataSource: Send + Sync {
    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of rows in `section`.
    fn row_count(&self, section: usize) -> ListResult<usize>;

    /// Display height of the row at `path`.
    fn row_height(&self, path: IndexPath) -> ListResult<f32>;

    /// Insets between the cell bounds and the content of the row at `path`.
    fn row_edges(&self, path: IndexPath) -> ListResult<EdgeInsets>;

    /// Header text for `section`. `None` means no header surface.
    fn header_title(&self, section: usize) -> ListResult<Option<String>>;

    /// Footer text for `section`. `None` means no footer surface.
    fn footer_title(&self, section: usize) -> ListResult<Option<String>>;

    // -------------------------------------------------------------------------
    // Convenience methods
    // -------------------------------------------------------------------------

    /// Returns `true` if there are no sections.
    fn is_empty(&self) -> bool {
        self.section_count() == 0
    }

    /// Total number of rows across all sections.
    fn total_row_count(&self) -> usize {
        (0..self.section_count())
            .filter_map(|section| self.row_count(section).ok())
            .sum()
    }

    /// Sum of row heights in `section`, excluding header and footer.
    fn section_height(&self, section: usize) -> ListResult<f32> {
        let mut total = 0.0;
        for row in 0..self.row_count(section)? {
            total += self.row_height(IndexPath::new(section, row))?;
        }
        Ok(total)
    }
}

/// Signals emitted by a list model.
///
/// Only the model emits. Callers connect and disconnect slots but cannot
/// block or clear the signals, so every mutation reaches every connected
/// slot.
pub struct ListSignals {
    delta: Signal<ListDelta>,
    selected: Signal<IndexPath>,
}

impl Default for ListSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ListSignals {
    /// Creates a new set of list signals.
    pub fn new() -> Self {
        Self {
            delta: Signal::new(),
            selected: Signal::new(),
        }
    }

    /// Connect a slot called once after every structural change.
    pub fn connect_delta<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&ListDelta) + Send + Sync + 'static,
    {
        self.delta.connect(slot)
    }

    /// Disconnect a slot connected with [`connect_delta`](Self::connect_delta).
    pub fn disconnect_delta(&self, id: ConnectionId) -> bool {
        self.delta.disconnect(id)
    }

    /// Connect a slot called after a row is selected, once its action (if
    /// any) has run.
    pub fn connect_selected<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&IndexPath) + Send + Sync + 'static,
    {
        self.selected.connect(slot)
    }

    /// Disconnect a slot connected with
    /// [`connect_selected`](Self::connect_selected).
    pub fn disconnect_selected(&self, id: ConnectionId) -> bool {
        self.selected.disconnect(id)
    }

    /// Number of slots connected to the delta signal.
    pub fn delta_connection_count(&self) -> usize {
        self.delta.connection_count()
    }

    /// Number of slots connected to the selection signal.
    pub fn selected_connection_count(&self) -> usize {
        self.selected.connection_count()
    }

    pub(crate) fn emit_delta(&self, delta: ListDelta) {
        self.delta.emit(delta);
    }

    pub(crate) fn emit_selected(&self, path: IndexPath) {
        self.selected.emit(path);
    }
}
