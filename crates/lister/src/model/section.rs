//! Sections: named groups of rows.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use super::row::Row;

/// A unique identifier for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(u64);

impl SectionId {
    /// Get the raw u64 value of this section ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

static NEXT_SECTION_ID: AtomicU64 = AtomicU64::new(1);

fn next_section_id() -> SectionId {
    SectionId(NEXT_SECTION_ID.fetch_add(1, Ordering::Relaxed))
}

/// An ordered group of rows with optional header and footer text.
///
/// Row order is display order. Like [`Row`], a section compares and hashes
/// by identity only.
///
/// # Example
///
/// ```
/// use lister::model::{Row, Section};
///
/// let section = Section::new(vec![Row::new("Bluetooth"), Row::new("Wi-Fi")])
///     .with_header("Connections")
///     .with_footer("Radios can be disabled in airplane mode.");
///
/// assert_eq!(section.len(), 2);
/// assert_eq!(section.header(), Some("Connections"));
/// ```
pub struct Section<V> {
    id: SectionId,
    rows: Vec<Row<V>>,
    header: Option<String>,
    footer: Option<String>,
}

impl<V> Section<V> {
    /// Create a section holding `rows`, with no header or footer.
    pub fn new(rows: Vec<Row<V>>) -> Self {
        Self {
            id: next_section_id(),
            rows,
            header: None,
            footer: None,
        }
    }

    /// Create a section with no rows.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Set the header text.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the footer text.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Append a row while building the section.
    pub fn with_row(mut self, row: Row<V>) -> Self {
        self.rows.push(row);
        self
    }

    /// The section's identity.
    #[inline]
    pub fn id(&self) -> SectionId {
        self.id
    }

    /// The rows, in display order.
    #[inline]
    pub fn rows(&self) -> &[Row<V>] {
        &self.rows
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the section has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header text, if any.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// The footer text, if any.
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// The row at `row`, if in range.
    pub fn row(&self, row: usize) -> Option<&Row<V>> {
        self.rows.get(row)
    }

    /// Consume the section and return its rows.
    pub fn into_rows(self) -> Vec<Row<V>> {
        self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Row<V>> {
        &mut self.rows
    }
}

impl<V> FromIterator<Row<V>> for Section<V> {
    fn from_iter<I: IntoIterator<Item = Row<V>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<V> PartialEq for Section<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for Section<V> {}

impl<V> Hash for Section<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<V: fmt::Debug> fmt::Debug for Section<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("footer", &self.footer)
            .field("rows", &self.rows)
            .finish()
    }
}
