//! Core systems for Lister.
//!
//! This crate provides the pieces of the Lister list-model library that
//! do not know about sections or rows:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Thread Affinity**: Checks that a model is used from its owning thread
//! - **Geometry**: Points, sizes, rectangles and edge insets
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use lister_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

pub mod geometry;
pub mod logging;
pub mod signal;
pub mod thread_check;

pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use thread_check::ThreadAffinity;
