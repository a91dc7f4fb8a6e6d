//! Error types for list models.

use thiserror::Error;

use crate::model::RemovalError;

/// Errors raised by [`ListModel`](crate::model::ListModel) mutators and queries.
///
/// Every variant is a programming error on the caller's side. Indices are
/// validated before any state changes, so a failed call leaves the model
/// exactly as it was and emits no delta.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A section index is not below the section count.
    #[error("section index {section} out of range (section count {count})")]
    SectionOutOfRange { section: usize, count: usize },

    /// A row index is outside the valid range for its section.
    ///
    /// For insertion the valid range is `0..=count`, everywhere else `0..count`.
    #[error("row index {row} out of range for section {section} (row count {count})")]
    RowOutOfRange {
        section: usize,
        row: usize,
        count: usize,
    },

    /// A bulk removal named the same row more than once.
    #[error("row index {row} listed more than once for section {section}")]
    DuplicateRow { section: usize, row: usize },
}

impl ListError {
    /// Returns `true` for the index-out-of-range kind (section or row).
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::SectionOutOfRange { .. } | Self::RowOutOfRange { .. }
        )
    }

    pub(crate) fn from_removal(section: usize, err: RemovalError) -> Self {
        match err {
            RemovalError::OutOfBounds { index, len } => Self::RowOutOfRange {
                section,
                row: index,
                count: len,
            },
            RemovalError::Duplicate { index } => Self::DuplicateRow {
                section,
                row: index,
            },
        }
    }
}

/// Result type for list model operations.
pub type ListResult<T> = Result<T, ListError>;

/// Errors raised while loading a [`ListConfig`](crate::config::ListConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML source could not be parsed.
    #[error("failed to parse list configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configured default row height is not a positive finite number.
    #[error("default row height must be positive and finite, got {0}")]
    InvalidRowHeight(f32),

    /// A configured inset is negative or not finite.
    #[error("default insets must be non-negative and finite, got {0:?}")]
    InvalidInsets(lister_core::EdgeInsets),
}
