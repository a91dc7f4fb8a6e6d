//! Sectioned list model for Lister.
//!
//! This module provides the content model behind a list view: rows grouped
//! into sections, mutated through a small set of operations, each of which
//! tells the host view exactly what changed.
//!
//! # Core Types
//!
//! - `Row`: Opaque content plus height, insets and an optional action
//! - `Section`: Ordered rows with optional header and footer text
//! - `IndexPath`: A `(section, row)` position
//! - `ListModel`: Owns the sections and exposes the mutators
//! - `ListDelta`: The structural change emitted after each mutation
//! - `ListDataSource`: The queries a host view pulls from the model
//! - `CellWrapper`: Row content embedded with its insets
//!
//! # Example
//!
//! ```
//! use lister::model::{IndexPath, ListDelta, ListModel, Row, Section};
//!
//! let model = ListModel::new();
//! model.set(vec![Section::new(vec![
//!     Row::new("Inbox"),
//!     Row::new("Drafts"),
//!     Row::new("Sent"),
//!     Row::new("Trash"),
//! ])]);
//!
//! model.signals().connect_delta(|delta| {
//!     if let ListDelta::DeleteAtMany { paths, .. } = delta {
//!         println!("deleting {} rows", paths.len());
//!     }
//! });
//!
//! let removed = model.remove_rows(0, &[3, 1]).unwrap();
//! assert_eq!(*removed[0].content(), "Trash");
//! assert_eq!(model.section_views_count(0).unwrap(), 2);
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐  ListDelta  ┌─────────────┐
//! │  ListModel  │────────────>│  HostView   │
//! │             │<────────────│             │
//! └─────────────┘  queries /  └─────────────┘
//!                  select()
//! ```
//!
//! The host pulls counts, heights, insets and titles through
//! `ListDataSource`. The model pushes one `ListDelta` per mutation.

mod cell;
mod index;
mod list_model;
mod removal;
mod row;
mod section;
mod traits;

pub use cell::CellWrapper;
pub use index::IndexPath;
pub use list_model::ListModel;
pub use removal::{RemovalError, remove_at_indices, sorted_removal_indices};
pub use row::{Row, RowAction, RowId};
pub use section::{Section, SectionId};
pub use traits::{HostView, ListDataSource, ListDelta, ListSignals, RowAnimation};
