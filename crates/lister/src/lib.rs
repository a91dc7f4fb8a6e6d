//! Lister - a declarative section/row list model.
//!
//! Lister keeps the content of a grouped list (sections of rows) and tells
//! a host view precisely which rows to insert or delete after each change,
//! so the view can animate them instead of reloading everything.
//!
//! # Example
//!
//! ```
//! use lister::prelude::*;
//!
//! let model = ListModel::new();
//! model.set(vec![
//!     Section::new(vec![Row::new("Airplane Mode"), Row::new("Wi-Fi")]).with_header("Network"),
//! ]);
//!
//! let path = model.append_row(Row::new("Bluetooth"), 0).unwrap();
//! assert_eq!(path, IndexPath::new(0, 2));
//! assert_eq!(model.header_title(0).unwrap().as_deref(), Some("Network"));
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod prelude;

pub use lister_core::{
    ConnectionGuard, ConnectionId, EdgeInsets, PerfSpan, Point, Rect, Signal, Size, ThreadAffinity,
};

pub use config::ListConfig;
pub use error::{ConfigError, ListError, ListResult};
