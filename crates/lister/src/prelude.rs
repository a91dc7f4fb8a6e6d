//! Prelude module for Lister.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use lister::prelude::*;
//! ```

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{
    CellWrapper, HostView, IndexPath, ListDataSource, ListDelta, ListModel, Row, RowAnimation,
    Section,
};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::ListConfig;
pub use crate::error::{ListError, ListResult};

// ============================================================================
// Signals and Geometry
// ============================================================================

pub use crate::{ConnectionId, EdgeInsets, Rect, Signal};
