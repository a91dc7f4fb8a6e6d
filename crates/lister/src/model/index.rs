//! Index paths for addressing rows in a sectioned list.

use std::fmt;

/// The position of one row: a section index and a row index within it.
///
/// Index paths are positions, not identities. After an insertion or removal,
/// paths at or after the affected row point at different rows. Use
/// [`RowId`](super::RowId) to follow a row across mutations.
///
/// Paths order by section first, then by row, which is display order.
///
/// # Example
///
/// ```
/// use lister::model::IndexPath;
///
/// let path = IndexPath::new(1, 3);
/// assert_eq!(path.section(), 1);
/// assert_eq!(path.row(), 3);
/// assert!(IndexPath::new(0, 9) < path);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    section: usize,
    row: usize,
}

impl IndexPath {
    /// Creates a path for `row` within `section`.
    #[inline]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// The section index.
    #[inline]
    pub const fn section(&self) -> usize {
        self.section
    }

    /// The row index within the section.
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// A path to another row in the same section.
    #[inline]
    pub const fn with_row(&self, row: usize) -> Self {
        Self::new(self.section, row)
    }

    /// Builds one path per row index, in the given order.
    pub fn many(section: usize, rows: &[usize]) -> Vec<Self> {
        rows.iter().map(|&row| Self::new(section, row)).collect()
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, row): (usize, usize)) -> Self {
        Self::new(section, row)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}
